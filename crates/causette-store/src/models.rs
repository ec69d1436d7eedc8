//! Domain model structs held in the in-memory stores.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be handed
//! directly to a UI layer over IPC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use causette_shared::{ConversationId, MessageId, UserId, UserStatus};

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A known user identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Stable unique id assigned at signup.
    pub id: UserId,
    pub username: String,
    pub email: String,
    /// Plaintext, mock-only. The roster is a fixture, not a credential
    /// store.
    pub password: String,
    /// Placeholder avatar URI.
    pub avatar: String,
    pub status: UserStatus,
    /// When the user was last active.
    pub last_seen: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A single message between two users.
///
/// Immutable once appended, except for `read`, which only ever flips
/// false -> true. Messages are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Unique message identifier.
    pub id: MessageId,
    /// Always `ConversationId::between(sender_id, receiver_id)`.
    pub conversation_id: ConversationId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    /// Message body, non-empty after trimming.
    pub text: String,
    /// When the message was sent.
    pub timestamp: DateTime<Utc>,
    /// Whether the receiver has seen it.
    pub read: bool,
}

impl Message {
    /// Build an unread message. The conversation id is derived from the
    /// sender/receiver pair, never chosen independently.
    pub fn new(
        sender_id: UserId,
        receiver_id: UserId,
        text: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: MessageId::new(),
            conversation_id: ConversationId::between(sender_id, receiver_id),
            sender_id,
            receiver_id,
            text: text.into(),
            timestamp,
            read: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Conversation (derived)
// ---------------------------------------------------------------------------

/// Text and timestamp of the most recent message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LastMessage {
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// A derived view over all messages between one pair of users.
///
/// Never stored and never mutated in place: the deriver rebuilds the
/// whole list from the message log on every read, and a conversation
/// only exists while at least one message exists for its pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    pub id: ConversationId,
    /// The two participants, unordered (smaller id first).
    pub participants: (UserId, UserId),
    /// This pair's messages, in the order the deriver saw them.
    pub messages: Vec<Message>,
    pub last_message: Option<LastMessage>,
}

impl Conversation {
    /// Messages addressed to `viewer` that are still unread.
    ///
    /// Strictly per-viewer: a sender's own messages never count against
    /// them, which is why the count is computed on demand rather than
    /// stored on the viewer-agnostic derivation.
    pub fn unread_count(&self, viewer: UserId) -> usize {
        self.messages
            .iter()
            .filter(|m| m.receiver_id == viewer && !m.read)
            .count()
    }

    pub fn involves(&self, user: UserId) -> bool {
        self.id.involves(user)
    }
}
