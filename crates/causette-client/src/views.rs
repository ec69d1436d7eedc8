//! Presentation-facing views of the domain models.
//!
//! Serialized camelCase so they can cross an IPC boundary to a UI layer
//! unchanged. Unlike the store models these are viewer-relative: the
//! preview names the *other* participant and carries the viewer's
//! unread count, and a message view knows whether the viewer sent it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use causette_shared::{ConversationId, MessageId, UserId, UserStatus};
use causette_store::{Conversation, LastMessage, Message, User};

/// A roster entry with the password stripped.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: UserId,
    pub username: String,
    pub avatar: String,
    pub status: UserStatus,
    pub last_seen: DateTime<Utc>,
}

impl From<&User> for Participant {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            avatar: user.avatar.clone(),
            status: user.status,
            last_seen: user.last_seen,
        }
    }
}

/// One row of the conversation list, relative to a viewer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConversationPreview {
    pub id: ConversationId,
    pub other: Participant,
    pub last_message: Option<LastMessage>,
    pub unread_count: usize,
}

impl ConversationPreview {
    pub fn new(conversation: &Conversation, other: &User, viewer: UserId) -> Self {
        Self {
            id: conversation.id,
            other: Participant::from(other),
            last_message: conversation.last_message.clone(),
            unread_count: conversation.unread_count(viewer),
        }
    }
}

/// One message as rendered in a thread, relative to a viewer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageView {
    pub id: MessageId,
    pub conversation_id: ConversationId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    /// Whether the viewer sent this message (rendered as "sent" rather
    /// than "received").
    pub mine: bool,
}

impl MessageView {
    pub fn new(message: Message, viewer: UserId) -> Self {
        let mine = message.sender_id == viewer;
        Self {
            id: message.id,
            conversation_id: message.conversation_id,
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
            text: message.text,
            timestamp: message.timestamp,
            read: message.read,
            mine,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(id: u32, username: &str) -> User {
        User {
            id: UserId(id),
            username: username.to_string(),
            email: format!("{username}@x.com"),
            password: "secret1".to_string(),
            avatar: format!("https://i.pravatar.cc/150?img={id}"),
            status: UserStatus::Online,
            last_seen: Utc::now(),
        }
    }

    #[test]
    fn test_participant_strips_the_password() {
        let bob = user(2, "bob");
        let json = serde_json::to_value(Participant::from(&bob)).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["username"], "bob");
        // camelCase field names for the UI layer.
        assert!(json.get("lastSeen").is_some());
    }

    #[test]
    fn test_message_view_is_viewer_relative() {
        let message = Message::new(UserId(1), UserId(2), "hi", Utc::now());
        assert!(MessageView::new(message.clone(), UserId(1)).mine);
        assert!(!MessageView::new(message, UserId(2)).mine);
    }

    #[test]
    fn test_preview_serializes_conversation_id_as_route_key() {
        let message = Message::new(UserId(2), UserId(1), "hi", Utc::now());
        let conversation = &causette_store::conversations::derive(&[message])[0];
        let preview = ConversationPreview::new(conversation, &user(2, "bob"), UserId(1));

        let json = serde_json::to_value(&preview).unwrap();
        assert_eq!(json["id"], "1-2");
        assert_eq!(json["unreadCount"], 1);
        assert_eq!(json["lastMessage"]["text"], "hi");
    }
}
