//! Blog post record and the request shapes that carry it

use serde::{Deserialize, Serialize};

/// Primary key assigned by the storage engine at insert time.
pub type PostId = i64;

/// A persisted blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
}

/// Body of `POST /postNewBlog`.
///
/// Any `id` in the payload is ignored; the database assigns one.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPost {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl NewPost {
    /// Content as stored: absent or `null` becomes the empty string.
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

/// Body of `PUT /updateBlogpostByID`.
///
/// Both fields are always overwritten, so omitted ones become empty.
#[derive(Debug, Clone, Deserialize)]
pub struct PostUpdate {
    pub id: PostId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl PostUpdate {
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

/// Body of `DELETE /deleteBlogpostByID`; extra fields are ignored.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PostKey {
    pub id: PostId,
}
