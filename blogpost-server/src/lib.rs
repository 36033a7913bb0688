//! blogpost-server: CRUD over blog posts
//!
//! Binds JSON request bodies to the post record, runs one parameterized
//! SQL statement per request, and maps the outcome to an HTTP status.

pub mod db;
pub mod http;
pub mod models;

pub use db::{Database, DbConfig, PoolSettings};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use models::Post;
