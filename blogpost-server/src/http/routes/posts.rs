//! Blog post endpoints
//!
//! Each handler checks out one connection, runs its statement through
//! `PostRepo`, and lets the connection go back to the pool on return.
//! Paths keep the names existing clients call.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use crate::db::PostRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PostIdParam};
use crate::http::server::AppState;
use crate::models::{NewPost, Post, PostId, PostKey, PostUpdate};

/// Confirmation body for mutating endpoints
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Confirmation body for create, carrying the assigned id
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    pub id: PostId,
}

/// POST /postNewBlog - insert a post
async fn create_post(
    State(state): State<Arc<AppState>>,
    JsonBody(new_post): JsonBody<NewPost>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let mut conn = state.db.open().await?;
    let id = PostRepo::new(&mut conn).create(&new_post).await?;

    tracing::info!(id, "blog post created");
    Ok(Json(CreatedResponse {
        message: "Blog added successfully",
        id,
    }))
}

/// GET /getAllBlogsposts - every post, unordered
async fn list_posts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Post>>, ApiError> {
    let mut conn = state.db.open().await?;
    let posts = PostRepo::new(&mut conn).list().await?;
    Ok(Json(posts))
}

/// GET /getBlogpostByID/{userID} - posts whose id matches; empty when none do
///
/// The segment is named after a user but filters on the post's own id.
async fn list_posts_by_id(
    State(state): State<Arc<AppState>>,
    PostIdParam(id): PostIdParam,
) -> Result<Json<Vec<Post>>, ApiError> {
    let mut conn = state.db.open().await?;
    let posts = PostRepo::new(&mut conn).list_by_id(id).await?;
    Ok(Json(posts))
}

/// PUT /updateBlogpostByID - overwrite title and content
async fn update_post(
    State(state): State<Arc<AppState>>,
    JsonBody(update): JsonBody<PostUpdate>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut conn = state.db.open().await?;
    PostRepo::new(&mut conn).update(&update).await?;

    tracing::info!(id = update.id, "blog post updated");
    Ok(Json(MessageResponse {
        message: "User post updated successfully",
    }))
}

/// DELETE /deleteBlogpostByID - remove a post
async fn delete_post(
    State(state): State<Arc<AppState>>,
    JsonBody(key): JsonBody<PostKey>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut conn = state.db.open().await?;
    PostRepo::new(&mut conn).delete(key.id).await?;

    tracing::info!(id = key.id, "blog post deleted");
    Ok(Json(MessageResponse {
        message: "User post successfully deleted",
    }))
}

/// Post routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/postNewBlog", post(create_post))
        .route("/getAllBlogsposts", get(list_posts))
        .route("/getBlogpostByID/{userID}", get(list_posts_by_id))
        .route("/updateBlogpostByID", put(update_post))
        .route("/deleteBlogpostByID", delete(delete_post))
}
