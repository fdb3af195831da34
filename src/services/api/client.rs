use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::failure::HttpFailure;
use super::transport::Transport;
use crate::config::normalize_base_url;

/// reqwest-backed engine client. One connection pool, per-call deadlines.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::builder().build().unwrap_or_default(),
            base_url: normalize_base_url(base_url),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn post(&self, endpoint: &str, payload: &Value, timeout: Duration) -> Result<Response, HttpFailure> {
        debug!("POST {} (timeout {:?})", endpoint, timeout);
        let response = self
            .client
            .post(self.url(endpoint))
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .timeout(timeout)
            .send()
            .await?;
        ensure_success(response)
    }
}

fn ensure_success(response: Response) -> Result<Response, HttpFailure> {
    let status = response.status();
    if !status.is_success() {
        return Err(HttpFailure::Api { status: status.as_u16() });
    }
    Ok(response)
}

#[async_trait]
impl Transport for ApiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn call(&self, endpoint: &str, payload: &Value, timeout: Duration) -> Result<Value, HttpFailure> {
        let response = self.post(endpoint, payload, timeout).await?;
        // Body read still counts against the request deadline.
        let body = response.json::<Value>().await?;
        Ok(body)
    }

    async fn call_for_bytes(&self, endpoint: &str, payload: &Value, timeout: Duration) -> Result<Vec<u8>, HttpFailure> {
        let response = self.post(endpoint, payload, timeout).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    async fn ping(&self, endpoint: &str, timeout: Duration) -> Result<(), HttpFailure> {
        debug!("GET {} (timeout {:?})", endpoint, timeout);
        let response = self
            .client
            .get(self.url(endpoint))
            .timeout(timeout)
            .send()
            .await?;
        ensure_success(response).map(|_| ())
    }
}
