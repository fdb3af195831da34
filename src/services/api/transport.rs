use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

use super::failure::HttpFailure;

pub const ENDPOINT_PROCESS_CRISIS: &str = "/api/process-crisis";
pub const ENDPOINT_ANALYZE_DOCUMENT: &str = "/api/analyze-document";
pub const ENDPOINT_SYNTHESIZE_VOICE: &str = "/api/synthesize-voice";
pub const ENDPOINT_HEALTH: &str = "/api/health";

/// Seam between the workflows and the network.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Engine base address, as shown to the user in status text.
    fn base_url(&self) -> &str;

    /// POST a JSON body, expect a JSON body back.
    async fn call(&self, endpoint: &str, payload: &Value, timeout: Duration) -> Result<Value, HttpFailure>;

    /// POST a JSON body, take the response body as raw bytes.
    async fn call_for_bytes(&self, endpoint: &str, payload: &Value, timeout: Duration) -> Result<Vec<u8>, HttpFailure>;

    /// GET with no body; success means a 2xx status.
    async fn ping(&self, endpoint: &str, timeout: Duration) -> Result<(), HttpFailure>;
}
