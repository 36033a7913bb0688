//! HTTP server layer
//!
//! Axum server with:
//! - Request tracing and a per-request deadline
//! - Graceful shutdown
//! - JSON error responses of the form `{"error": "..."}`

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
