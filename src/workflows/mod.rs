//! User-triggered workflows.
//!
//! Each workflow validates its input, makes at most one engine call through the
//! `Transport`, and turns the result into a view. Failures become panels and status
//! text; none is returned as an error.
//!
//! - `crisis.rs` — submit crisis, clear crisis.
//! - `document.rs` — submit document, clear document.
//! - `voice.rs` — synthesize voice for one actor from session state.
//! - `health.rs` — engine health check.
//! - `outcome.rs` — stages, error taxonomy, views.

pub mod crisis;
pub mod document;
pub mod health;
pub mod outcome;
pub mod voice;

pub use health::HealthStatus;
pub use outcome::*;

use crate::config::Timeouts;
use crate::services::api::Transport;

/// The orchestration layer. Holds the transport; session state is passed in per call.
pub struct Desk<T> {
    transport: T,
    timeouts: Timeouts,
}

impl<T: Transport> Desk<T> {
    pub fn new(transport: T, timeouts: Timeouts) -> Self {
        Self { transport, timeouts }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn api_url(&self) -> &str {
        self.transport.base_url()
    }
}
