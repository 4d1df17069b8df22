//! HTTP API server for snipbin.

pub mod api_error;
mod api_types;
mod handlers;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

use snipbin_service::ThreadService;

pub use api_types::{CreateMessageRequest, CreateThreadRequest, LockResponse};

/// Shared application state for all HTTP handlers.
///
/// Handlers themselves are stateless; the only shared piece is the service
/// (and through it the store handle), injected once at startup.
pub struct AppState {
    pub thread_service: Arc<ThreadService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/threads", post(handlers::threads::create_thread))
        .route("/api/threads/{slug}", get(handlers::threads::get_thread))
        .route("/api/messages/{slug}", post(handlers::messages::create_message))
        .route("/api/lock/{slug}", post(handlers::threads::lock_thread))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors_layer())
        .with_state(state)
}

/// Cross-origin access is permitted from any origin; preflight `OPTIONS`
/// requests are answered by this layer with 200 and no body.
fn cors_layer() -> CorsLayer {
    CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
}

async fn health() -> &'static str {
    "ok"
}

async fn method_not_allowed() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(serde_json::json!({"error": "Method not allowed"})),
    )
}
