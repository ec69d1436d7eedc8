//! # causette-shared
//!
//! Identifier newtypes and the error taxonomy shared by every Causette
//! crate.

pub mod error;
pub mod types;

pub use error::{AuthError, ParseConversationIdError, SessionError};
pub use types::{ConversationId, MessageId, UserId, UserStatus};
