use axum::{
    body::{Body, to_bytes},
    http::{Request, Response},
};
use ollama_relay::config::OllamaConfig;
use serde_json::Value;

/// Ollama settings pointing at a mock server
pub fn create_test_config(base_url: &str) -> OllamaConfig {
    OllamaConfig {
        base_url: base_url.to_string(),
        model: "llama3.2".to_string(),
    }
}

/// Build a JSON POST request for the chat endpoint
pub fn chat_request(body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}

/// Read a response body as JSON
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as raw bytes
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}
