//! Repository implementations for database access
//!
//! Repositories borrow a checked-out connection, so every statement of a
//! request runs on the connection the handler opened.

pub mod posts;

pub use posts::PostRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("database did not report an id for the inserted row")]
    MissingInsertId,
}
