//! API Module
//!
//! HTTP front-end over a [`crate::cache::TtlCache`]. Payloads are raw bytes
//! and are never interpreted.
//!
//! # Endpoints
//! - `PUT /cache/:key` - Store the request body under a key
//! - `GET /cache/:key` - Retrieve a payload (404 on a miss)
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
