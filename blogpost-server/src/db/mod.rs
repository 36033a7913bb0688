//! Database layer - configuration, connection provider and repositories
//!
//! - Connections come from a lazily built native `sqlx` pool (MySQL
//!   in production, SQLite for tests)
//! - The posts table is created on first use; there are no migrations
//! - Every statement is parameterized

pub mod config;
pub mod pool;
pub mod repos;
pub mod schema;

pub use config::{ConfigError, DbConfig, Dialect, PoolSettings};
pub use pool::{Connection, ConnectionError, Database};
pub use repos::{DbError, PostRepo};
