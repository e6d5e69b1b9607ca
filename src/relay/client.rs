use super::types::*;
use crate::{Error, Result, config::OllamaConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Whole-request budget for one generation call, connect to last body byte.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait RelayClient: Send + Sync {
    /// Sends `message` as a prompt and returns the generated text.
    async fn send(&self, message: &str) -> Result<String>;
}

pub struct OllamaClient {
    http: reqwest::Client,
    model: String,
    generate_url: String,
    timeout: Duration,
}

impl OllamaClient {
    pub fn new(config: &OllamaConfig) -> Result<Self> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(config: &OllamaConfig, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let generate_url = format!("{}/api/generate", config.base_url.trim_end_matches('/'));

        Ok(Self {
            http,
            model: config.model.clone(),
            generate_url,
            timeout,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn generate_url(&self) -> &str {
        &self.generate_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl RelayClient for OllamaClient {
    async fn send(&self, message: &str) -> Result<String> {
        let request = RelayRequest::new(&self.model, message);

        debug!(
            "Relaying prompt of {} bytes to {} (model {})",
            request.prompt.len(),
            self.generate_url,
            self.model
        );

        let response = self
            .http
            .post(&self.generate_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::transport(e, self.timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(e, self.timeout))?;

        if !status.is_success() {
            return Err(Error::upstream(status.as_u16(), body));
        }

        let generated: RelayResponse =
            serde_json::from_str(&body).map_err(|e| Error::decode(e.to_string()))?;

        debug!(
            "Received {} bytes of generated text (done: {})",
            generated.response.len(),
            generated.done
        );

        Ok(generated.response)
    }
}
