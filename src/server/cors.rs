use axum::http::{Method, header::CONTENT_TYPE};
use tower_http::cors::{Any, CorsLayer};

/// Permissive cross-origin policy: any origin, the two routed methods and a
/// JSON content type. Preflight `OPTIONS` requests are answered by the layer
/// with an empty 200 and never reach a handler.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}
