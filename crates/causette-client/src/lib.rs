//! # causette-client
//!
//! Session facade over the Causette stores, consumed by presentation
//! layers. A [`Session`] owns a roster, a message log and at most one
//! current identity. There are no callbacks: presentation code re-reads
//! the derived state after each mutating call.

pub mod seed;
pub mod session;
pub mod views;

pub use session::Session;
pub use views::{ConversationPreview, MessageView, Participant};

use tracing_subscriber::{fmt, EnvFilter};

/// Initialise the global tracing subscriber.
///
/// Honours `RUST_LOG`; the fallback keeps the Causette crates at debug
/// and everything else at warn.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("causette_client=debug,causette_store=debug,warn")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
