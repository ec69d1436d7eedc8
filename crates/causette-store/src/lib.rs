//! # causette-store
//!
//! In-memory stores and derivation logic for the Causette messaging
//! core. The message log is the single source of truth: conversation
//! summaries are recomputed from it on every read and never cached, so
//! there is no invalidation to get wrong. All state lives in process
//! memory and disappears with it.

pub mod conversations;
pub mod log;
pub mod models;
pub mod roster;

pub use log::MessageLog;
pub use models::{Conversation, LastMessage, Message, User};
pub use roster::Roster;
