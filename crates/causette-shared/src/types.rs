use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::ParseConversationIdError;

// User identity = small integer id assigned at signup, stable for the
// lifetime of the session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(pub u32);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MessageId(pub Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order-independent pairing of the two participants of a conversation.
///
/// `between(a, b)` and `between(b, a)` produce the same id, so every
/// message exchanged by one pair of users maps to one conversation
/// regardless of who sent it. Rendered (and serialized) as
/// `"<low>-<high>"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversationId {
    low: UserId,
    high: UserId,
}

impl ConversationId {
    pub fn between(a: UserId, b: UserId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// The two participants, smaller id first.
    pub fn participants(&self) -> (UserId, UserId) {
        (self.low, self.high)
    }

    pub fn involves(&self, user: UserId) -> bool {
        self.low == user || self.high == user
    }

    /// The participant that is not `viewer`, if `viewer` is one of the
    /// pair.
    pub fn other(&self, viewer: UserId) -> Option<UserId> {
        if viewer == self.low {
            Some(self.high)
        } else if viewer == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

impl std::fmt::Display for ConversationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl std::str::FromStr for ConversationId {
    type Err = ParseConversationIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (low, high) = s
            .split_once('-')
            .ok_or_else(|| ParseConversationIdError(s.to_string()))?;
        let low: u32 = low
            .parse()
            .map_err(|_| ParseConversationIdError(s.to_string()))?;
        let high: u32 = high
            .parse()
            .map_err(|_| ParseConversationIdError(s.to_string()))?;
        Ok(Self::between(UserId(low), UserId(high)))
    }
}

// Serialized in the same "<low>-<high>" form the UI uses as a route key.
impl Serialize for ConversationId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ConversationId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Online,
    Offline,
}
