//! Upstream chat-completion client.
//!
//! # Responsibilities
//! - Build the single-turn payload with the configured model
//! - Inject the bearer credential; callers never see it
//! - Classify the outcome into a reply or a `RelayError`

use reqwest::header::CONTENT_TYPE;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{ApiKey, UpstreamConfig};
use crate::relay::error::RelayError;
use crate::relay::types::{extract_reply, UpstreamPayload};

#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    url: Arc<str>,
    model: Arc<str>,
    api_key: ApiKey,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClient")
            .field("url", &self.url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Use a preconfigured `reqwest::Client` (proxy settings, TLS roots).
    pub fn with_http_client(config: &UpstreamConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            url: Arc::from(config.url.as_str()),
            model: Arc::from(config.model.as_str()),
            api_key: config.api_key.clone(),
            timeout: config.request_timeout(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send `message` as a single user turn and return the first completion.
    pub async fn complete(&self, message: Option<&str>) -> Result<String, RelayError> {
        let payload = UpstreamPayload::single_turn(&self.model, message);

        let mut request = self
            .http
            .post(&*self.url)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(self.api_key.expose())
            .json(&payload);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!(status = %status, body = %body, "Upstream API error");
            return Err(RelayError::Upstream { status, body });
        }

        let bytes = response.bytes().await?;
        let data: serde_json::Value = serde_json::from_slice(&bytes)?;
        Ok(extract_reply(&data))
    }
}
