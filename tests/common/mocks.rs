use async_trait::async_trait;
use ollama_relay::{Error, Result, relay::RelayClient};
use std::sync::{Arc, Mutex};

/// Mock relay client for testing
#[derive(Debug, Clone)]
pub struct MockRelayClient {
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub reply: String,
    pub upstream_error: Option<(u16, String)>,
}

impl MockRelayClient {
    pub fn new() -> Self {
        Self {
            prompts: Arc::new(Mutex::new(Vec::new())),
            reply: String::new(),
            upstream_error: None,
        }
    }

    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = reply.into();
        self
    }

    pub fn with_upstream_error(mut self, status: u16, body: impl Into<String>) -> Self {
        self.upstream_error = Some((status, body.into()));
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl RelayClient for MockRelayClient {
    async fn send(&self, message: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(message.to_string());

        match &self.upstream_error {
            Some((status, body)) => Err(Error::upstream(*status, body.clone())),
            None => Ok(self.reply.clone()),
        }
    }
}
