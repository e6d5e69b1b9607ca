use serde::{Deserialize, Serialize};

/// Body of `POST /api/generate` on the inference server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

/// Non-streamed answer from `/api/generate`. Only `response` is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayResponse {
    pub response: String,
    #[serde(default)]
    pub done: bool,
}

impl RelayRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}
