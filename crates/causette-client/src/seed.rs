//! Fixed fixture data populating a fresh seeded session.
//!
//! Timestamps are relative to process start so a seeded session always
//! shows the same picture: alice's thread with bob on top with one
//! unread reply, her older thread with charlie below it, and an unread
//! message waiting for diana.

use chrono::{Duration, Utc};

use causette_shared::{UserId, UserStatus};
use causette_store::{Message, User};

/// The fixed seed roster.
pub fn users() -> Vec<User> {
    vec![
        seed_user(1, "alice", UserStatus::Online, 0),
        seed_user(2, "bob", UserStatus::Online, 5),
        seed_user(3, "charlie", UserStatus::Offline, 120),
        seed_user(4, "diana", UserStatus::Offline, 1440),
    ]
}

/// The fixed seed messages, oldest first (append order and timestamp
/// order coincide, as they do for live sends).
pub fn messages() -> Vec<Message> {
    vec![
        seed_message(3, 1, "Did you get the design doc?", 180, true),
        seed_message(1, 3, "Yes, reviewing it now", 175, true),
        seed_message(1, 2, "Hey Bob, lunch today?", 60, true),
        seed_message(2, 1, "Sure, noon at the usual place?", 45, false),
        seed_message(2, 4, "Diana, standup moved to 10", 30, false),
    ]
}

fn seed_user(id: u32, username: &str, status: UserStatus, minutes_ago: i64) -> User {
    User {
        id: UserId(id),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: format!("{username}123"),
        avatar: format!("https://i.pravatar.cc/150?img={id}"),
        status,
        last_seen: Utc::now() - Duration::minutes(minutes_ago),
    }
}

fn seed_message(sender: u32, receiver: u32, text: &str, minutes_ago: i64, read: bool) -> Message {
    let mut message = Message::new(
        UserId(sender),
        UserId(receiver),
        text,
        Utc::now() - Duration::minutes(minutes_ago),
    );
    message.read = read;
    message
}
