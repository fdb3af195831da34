use thiserror::Error;

/// Typed outcome of a failed engine call. Nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpFailure {
    #[error("engine returned HTTP {status}")]
    Api { status: u16 },

    #[error("engine call timed out")]
    Timeout,

    #[error("cannot connect to engine: {0}")]
    Connection(String),

    #[error("{0}")]
    Unexpected(String),
}

impl HttpFailure {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            HttpFailure::Api { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for HttpFailure {
    fn from(e: reqwest::Error) -> Self {
        // Order matters: a connect timeout reports both flags and is a timeout.
        if e.is_timeout() {
            HttpFailure::Timeout
        } else if e.is_connect() {
            HttpFailure::Connection(e.to_string())
        } else if let Some(status) = e.status() {
            HttpFailure::Api { status: status.as_u16() }
        } else {
            HttpFailure::Unexpected(e.to_string())
        }
    }
}
