pub mod cors;
pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::Config,
    relay::{OllamaClient, RelayClient},
};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub const CHAT_PATH: &str = "/chat";
pub const HEALTH_PATH: &str = "/health";

/// Builds the application router around an already constructed relay client.
pub fn router(relay: Arc<dyn RelayClient>) -> Router {
    let app_state = handlers::AppState { relay };

    Router::new()
        .route(
            CHAT_PATH,
            post(handlers::chat).fallback(handlers::method_not_allowed),
        )
        .route(HEALTH_PATH, get(handlers::health))
        .layer(cors::cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn run(config: Config) -> Result<()> {
    let relay = OllamaClient::new(&config.ollama)?;

    info!("Using model: {}", config.ollama.model);
    info!("Relaying to inference server at: {}", config.ollama.base_url);

    let app = router(Arc::new(relay));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
