//! Response models for the cache front-end
//!
//! Request bodies are raw payload bytes and need no model.

pub mod responses;

pub use responses::{AddResponse, HealthResponse, MissResponse, StatsResponse};
