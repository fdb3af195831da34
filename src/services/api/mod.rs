pub mod client;
pub mod failure;
pub mod transport;

pub use client::ApiClient;
pub use failure::HttpFailure;
pub use transport::{Transport, ENDPOINT_ANALYZE_DOCUMENT, ENDPOINT_HEALTH, ENDPOINT_PROCESS_CRISIS, ENDPOINT_SYNTHESIZE_VOICE};
