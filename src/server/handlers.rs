use super::types::{ChatRequest, ChatResponse, ErrorResponse, HealthResponse};
use crate::relay::RelayClient;
use axum::{body::Bytes, extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{debug, error, info};

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<dyn RelayClient>,
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

fn error_reply(status: StatusCode, message: impl Into<String>) -> ErrorReply {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, ErrorReply> {
    // The body is parsed regardless of Content-Type.
    let request: ChatRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejected chat request body: {}", e);
        error_reply(StatusCode::BAD_REQUEST, "Invalid request body")
    })?;

    let message = match request.message {
        Some(message) if !message.is_empty() => message,
        _ => {
            debug!("Rejected chat request without a message");
            return Err(error_reply(StatusCode::BAD_REQUEST, "message is required"));
        }
    };

    info!("Received chat request ({} bytes)", message.len());

    match state.relay.send(&message).await {
        Ok(response) => {
            info!("Relayed chat request, {} bytes generated", response.len());
            Ok(Json(ChatResponse { response }))
        }
        Err(e) => {
            error!("Failed to relay chat request: {}", e);
            Err(error_reply(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

/// Answers every method on the chat route other than POST.
pub async fn method_not_allowed() -> ErrorReply {
    error_reply(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
