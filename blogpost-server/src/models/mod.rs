//! Domain models for the blog post resource
//!
//! Request bodies are bound with serde; anything beyond type binding is
//! left to the database.

pub mod post;

pub use post::{NewPost, Post, PostId, PostKey, PostUpdate};
