//! API Routes
//!
//! Configures the Axum router with all cache front-end endpoints.

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_handler, get_handler, health_handler, stats_handler, AppState, MAX_PAYLOAD_SIZE,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /cache/:key` - Store a payload
/// - `GET /cache/:key` - Retrieve a payload
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Body limit: one byte above the payload limit so the handler can answer 413
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cache/:key", get(get_handler).put(add_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(DefaultBodyLimit::max(MAX_PAYLOAD_SIZE + 1))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
