//! The message store and read-state tracker.

use chrono::Utc;
use tracing::{debug, info};

use causette_shared::{ConversationId, UserId};

use crate::models::Message;

/// Append-only log of every message in the session.
///
/// The log is the single source of truth: conversation summaries and
/// unread counts are always recomputed from it. Insertion order is
/// preserved on read; the log never re-sorts itself.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from fixed seed messages, in the given order.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    // ------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------

    /// Append a new message from `sender` to `receiver`.
    ///
    /// Text that is empty after trimming is a silent no-op returning
    /// `None`, indistinguishable from a user who typed nothing. Callers
    /// rely on this being a policy, not an error path.
    pub fn send(&mut self, sender: UserId, receiver: UserId, text: &str) -> Option<Message> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let message = Message::new(sender, receiver, text, Utc::now());
        info!(
            msg_id = %message.id,
            conversation = %message.conversation_id,
            "Message sent"
        );
        self.messages.push(message.clone());
        Some(message)
    }

    /// Mark every message in `id` addressed to `viewer` as read.
    ///
    /// Idempotent. An unknown conversation id filters to zero matches
    /// and is a no-op; the viewer's own sent messages are untouched.
    pub fn mark_as_read(&mut self, id: ConversationId, viewer: UserId) {
        let mut flipped = 0usize;
        for message in &mut self.messages {
            if message.conversation_id == id && message.receiver_id == viewer && !message.read {
                message.read = true;
                flipped += 1;
            }
        }
        if flipped > 0 {
            debug!(conversation = %id, viewer = %viewer, count = flipped, "Marked messages read");
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// The full log in insertion order.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    /// One conversation's messages, ascending by timestamp. The sort is
    /// stable, so exact timestamp ties keep append order.
    pub fn for_conversation(&self, id: ConversationId) -> Vec<Message> {
        let mut messages: Vec<Message> = self
            .messages
            .iter()
            .filter(|m| m.conversation_id == id)
            .cloned()
            .collect();
        messages.sort_by_key(|m| m.timestamp);
        messages
    }

    /// Unread messages in `id` addressed to `viewer`, recomputed from
    /// the current log on every call.
    pub fn unread_count(&self, id: ConversationId, viewer: UserId) -> usize {
        self.messages
            .iter()
            .filter(|m| m.conversation_id == id && m.receiver_id == viewer && !m.read)
            .count()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    const ALICE: UserId = UserId(1);
    const BOB: UserId = UserId(2);

    fn pair() -> ConversationId {
        ConversationId::between(ALICE, BOB)
    }

    #[test]
    fn test_send_appends_one_trimmed_message() {
        let mut log = MessageLog::new();
        let message = log.send(ALICE, BOB, "  hi  ").unwrap();
        assert_eq!(message.text, "hi");
        assert_eq!(message.conversation_id, pair());
        assert!(!message.read);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_send_blank_text_is_a_silent_noop() {
        let mut log = MessageLog::new();
        assert!(log.send(ALICE, BOB, "").is_none());
        assert!(log.send(ALICE, BOB, "   \t\n").is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn test_both_directions_share_one_conversation() {
        let mut log = MessageLog::new();
        let first = log.send(ALICE, BOB, "hi").unwrap();
        let second = log.send(BOB, ALICE, "yo").unwrap();
        assert_eq!(first.conversation_id, second.conversation_id);
    }

    #[test]
    fn test_for_conversation_sorts_ascending_and_stable() {
        let now = Utc::now();
        let early = Message::new(ALICE, BOB, "early", now - Duration::minutes(10));
        let tie_a = Message::new(BOB, ALICE, "tie a", now);
        let tie_b = Message::new(ALICE, BOB, "tie b", now);
        // Appended newest-first to prove the read path re-sorts.
        let log = MessageLog::from_messages(vec![tie_a, tie_b, early]);

        let messages = log.for_conversation(pair());
        let texts: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["early", "tie a", "tie b"]);
    }

    #[test]
    fn test_for_conversation_filters_other_pairs() {
        let mut log = MessageLog::new();
        log.send(ALICE, BOB, "for bob");
        log.send(ALICE, UserId(3), "for charlie");
        assert_eq!(log.for_conversation(pair()).len(), 1);
    }

    #[test]
    fn test_mark_as_read_is_per_viewer_and_idempotent() {
        let mut log = MessageLog::new();
        log.send(ALICE, BOB, "hi");
        log.send(BOB, ALICE, "yo");

        assert_eq!(log.unread_count(pair(), ALICE), 1);
        assert_eq!(log.unread_count(pair(), BOB), 1);

        log.mark_as_read(pair(), ALICE);
        assert_eq!(log.unread_count(pair(), ALICE), 0);
        // Bob's unread message from alice is untouched.
        assert_eq!(log.unread_count(pair(), BOB), 1);

        log.mark_as_read(pair(), ALICE);
        assert_eq!(log.unread_count(pair(), ALICE), 0);
    }

    #[test]
    fn test_mark_as_read_unknown_conversation_is_a_noop() {
        let mut log = MessageLog::new();
        log.send(ALICE, BOB, "hi");
        log.mark_as_read(ConversationId::between(UserId(8), UserId(9)), ALICE);
        assert_eq!(log.unread_count(pair(), BOB), 1);
    }
}
