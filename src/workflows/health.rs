use std::fmt;
use tracing::debug;

use super::Desk;
use crate::services::api::{HttpFailure, Transport, ENDPOINT_HEALTH};

/// Engine reachability as shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Online { address: String },
    ApiError { status: u16 },
    Offline { address: String },
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Online { address } => write!(f, "System Online | {}", address),
            HealthStatus::ApiError { status } => write!(f, "API Error: {}", status),
            HealthStatus::Offline { address } => write!(f, "Offline | {}", address),
        }
    }
}

impl<T: Transport> Desk<T> {
    /// Called on page load and after each clear. Never fails, never polls.
    pub async fn check_health(&self) -> HealthStatus {
        let address = self.api_url().to_string();
        let status = match self.transport().ping(ENDPOINT_HEALTH, self.timeouts.health).await {
            Ok(()) => HealthStatus::Online { address },
            Err(HttpFailure::Api { status }) => HealthStatus::ApiError { status },
            Err(_) => HealthStatus::Offline { address },
        };
        debug!("Engine health: {}", status);
        status
    }
}
