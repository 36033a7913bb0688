//! API error types with IntoResponse
//!
//! Every failure ends here: it is logged once and rendered as
//! `{"error": message}` with the matching status code.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::{ConnectionError, DbError};

const INTERNAL_MESSAGE: &str = "Internal server error";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Request could not be bound (400)
    BadRequest { message: String },

    /// Request body refused before parsing, e.g. over the size limit
    Rejected { status: StatusCode, message: String },

    /// Target row absent (404)
    NotFound { resource: &'static str, id: String },

    /// Request exceeded its deadline (408)
    Timeout { limit: Duration },

    /// Statement failed (500, logged)
    Database(DbError),

    /// No connection could be produced (500, logged)
    Connection(ConnectionError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Rejected { status, .. } => *status,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Timeout { .. } => StatusCode::REQUEST_TIMEOUT,
            Self::Database(_) | Self::Connection(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::BadRequest { message } => {
                tracing::warn!(%message, "rejected request");
                message
            }
            Self::Rejected { status, message } => {
                tracing::warn!(%status, %message, "rejected request body");
                message
            }
            Self::NotFound { resource, id } => {
                tracing::warn!(resource, %id, "not found");
                format!("{} not found", resource)
            }
            Self::Timeout { limit } => {
                tracing::warn!(?limit, "request timed out");
                format!("request timed out after {} seconds", limit.as_secs_f64())
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                INTERNAL_MESSAGE.to_string()
            }
            Self::Connection(e) => {
                tracing::error!("Connection error: {}", e);
                INTERNAL_MESSAGE.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}

impl From<ConnectionError> for ApiError {
    fn from(e: ConnectionError) -> Self {
        Self::Connection(e)
    }
}
