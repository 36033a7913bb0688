//! Custom Axum extractors
//!
//! Both map their rejections onto `ApiError`, so every malformed input is a
//! 400 with a JSON body. A body that cannot be read at all (over the size
//! limit, or a broken stream) keeps the status axum assigned to it.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use super::error::ApiError;
use crate::models::PostId;

/// JSON body whose rejection is a 400 carrying the parse error.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::BytesRejection(_) => ApiError::Rejected {
                    status: rejection.status(),
                    message: rejection.body_text(),
                },
                _ => ApiError::bad_request(rejection.body_text()),
            })?;
        Ok(Self(value))
    }
}

/// Extract a post id from the single path segment
pub struct PostIdParam(pub PostId);

impl<S> FromRequestParts<S> for PostIdParam
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::bad_request("Invalid user ID"))?;

        let id = raw
            .parse::<PostId>()
            .map_err(|_| ApiError::bad_request("Invalid user ID"))?;

        Ok(Self(id))
    }
}
