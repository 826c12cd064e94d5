//! API Handlers
//!
//! HTTP request handlers for each cache front-end endpoint.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::cache::TtlCache;
use crate::error::{CacheError, Result};
use crate::models::{AddResponse, HealthResponse, MissResponse, StatsResponse};

/// Maximum accepted key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum accepted payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = 1024 * 1024; // 1 MB

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache handle
    pub cache: TtlCache,
}

impl AppState {
    pub fn new(cache: TtlCache) -> Self {
        Self { cache }
    }
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidRequest("Key cannot be empty".to_string()));
    }
    if key.len() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidRequest(format!(
            "Key exceeds maximum length of {} bytes",
            MAX_KEY_LENGTH
        )));
    }
    Ok(())
}

/// Handler for PUT /cache/:key
///
/// Stores the raw request body under `key`, replacing any previous payload.
pub async fn add_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    body: Bytes,
) -> Result<Json<AddResponse>> {
    validate_key(&key)?;
    if body.len() > MAX_PAYLOAD_SIZE {
        return Err(CacheError::PayloadTooLarge {
            size: body.len(),
            limit: MAX_PAYLOAD_SIZE,
        });
    }

    let size = body.len();
    state.cache.add(key.clone(), body);
    debug!(%key, size, "Cached payload");

    Ok(Json(AddResponse::new(key, size)))
}

/// Handler for GET /cache/:key
///
/// Returns the raw payload on a hit, or 404 with a miss body.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response> {
    validate_key(&key)?;

    let response = match state.cache.get(&key) {
        Some(payload) => (
            [(header::CONTENT_TYPE, "application/octet-stream")],
            payload,
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, Json(MissResponse::new(key))).into_response(),
    };

    Ok(response)
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats();

    Json(StatsResponse::new(&stats, state.cache.ttl()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
