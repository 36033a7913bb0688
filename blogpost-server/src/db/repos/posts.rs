//! Blog post repository
//!
//! One statement per operation, except update, which checks for the row
//! first: MySQL reports zero affected rows for an update that changes
//! nothing, so the affected-row count cannot tell "absent" from "unchanged".

use sqlx::FromRow;

use super::DbError;
use crate::db::pool::{with_backend, Connection};
use crate::models::{NewPost, Post, PostId, PostUpdate};

const RESOURCE: &str = "Blog post";

/// Row as stored; `content` is nullable in the table.
#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: Option<String>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content.unwrap_or_default(),
        }
    }
}

fn not_found(id: PostId) -> DbError {
    DbError::NotFound {
        resource: RESOURCE,
        id: id.to_string(),
    }
}

/// Blog post repository
pub struct PostRepo<'a> {
    conn: &'a mut Connection,
}

impl<'a> PostRepo<'a> {
    pub fn new(conn: &'a mut Connection) -> Self {
        Self { conn }
    }

    /// Insert a post and return the id the database assigned.
    pub async fn create(&mut self, post: &NewPost) -> Result<PostId, DbError> {
        const INSERT: &str = "INSERT INTO blogPosts (title, content) VALUES (?, ?)";

        let id = match &mut *self.conn {
            Connection::MySql(c) => {
                let result = sqlx::query(INSERT)
                    .bind(post.title.as_str())
                    .bind(post.content())
                    .execute(&mut **c)
                    .await?;
                PostId::try_from(result.last_insert_id())
                    .ok()
                    .filter(|id| *id > 0)
                    .ok_or(DbError::MissingInsertId)?
            }
            Connection::Sqlite(c) => {
                sqlx::query(INSERT)
                    .bind(post.title.as_str())
                    .bind(post.content())
                    .execute(&mut **c)
                    .await?
                    .last_insert_rowid()
            }
        };

        tracing::debug!(id, "inserted blog post");
        Ok(id)
    }

    /// Every post, in whatever order the database returns them.
    pub async fn list(&mut self) -> Result<Vec<Post>, DbError> {
        let rows: Vec<PostRow> = with_backend!(&mut *self.conn, c => {
            sqlx::query_as("SELECT id, title, content FROM blogPosts")
                .fetch_all(&mut **c)
                .await?
        });

        tracing::debug!(count = rows.len(), "listed blog posts");
        Ok(rows.into_iter().map(Post::from).collect())
    }

    /// Posts whose primary key is `id`: zero or one element.
    pub async fn list_by_id(&mut self, id: PostId) -> Result<Vec<Post>, DbError> {
        let rows: Vec<PostRow> = with_backend!(&mut *self.conn, c => {
            sqlx::query_as("SELECT id, title, content FROM blogPosts WHERE id = ?")
                .bind(id)
                .fetch_all(&mut **c)
                .await?
        });

        Ok(rows.into_iter().map(Post::from).collect())
    }

    /// Overwrite title and content of an existing post.
    pub async fn update(&mut self, update: &PostUpdate) -> Result<(), DbError> {
        let existing: Option<PostId> = with_backend!(&mut *self.conn, c => {
            sqlx::query_scalar("SELECT id FROM blogPosts WHERE id = ?")
                .bind(update.id)
                .fetch_optional(&mut **c)
                .await?
        });

        if existing.is_none() {
            return Err(not_found(update.id));
        }

        with_backend!(&mut *self.conn, c => {
            sqlx::query("UPDATE blogPosts SET title = ?, content = ? WHERE id = ?")
                .bind(update.title.as_str())
                .bind(update.content())
                .bind(update.id)
                .execute(&mut **c)
                .await?;
        });

        tracing::debug!(id = update.id, "updated blog post");
        Ok(())
    }

    /// Delete a post by id.
    pub async fn delete(&mut self, id: PostId) -> Result<(), DbError> {
        let rows_affected = with_backend!(&mut *self.conn, c => {
            sqlx::query("DELETE FROM blogPosts WHERE id = ?")
                .bind(id)
                .execute(&mut **c)
                .await?
                .rows_affected()
        });

        if rows_affected == 0 {
            return Err(not_found(id));
        }

        tracing::debug!(id, "deleted blog post");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Database, DbConfig};

    fn memory_db() -> Database {
        Database::new(DbConfig::from_url("sqlite::memory:").with_max_connections(1))
    }

    async fn count(conn: &mut Connection) -> i64 {
        with_backend!(conn, c => {
            sqlx::query_scalar("SELECT COUNT(*) FROM blogPosts")
                .fetch_one(&mut **c)
                .await
                .unwrap()
        })
    }

    fn new_post(title: &str, content: Option<&str>) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: content.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let db = memory_db();
        let mut conn = db.open().await.unwrap();
        let mut repo = PostRepo::new(&mut conn);

        let first = repo.create(&new_post("a", Some("x"))).await.unwrap();
        let second = repo.create(&new_post("b", None)).await.unwrap();

        assert!(first > 0);
        assert!(second > first);
        assert_eq!(count(&mut conn).await, 2);
    }

    #[tokio::test]
    async fn missing_content_reads_back_empty() {
        let db = memory_db();
        let mut conn = db.open().await.unwrap();
        let mut repo = PostRepo::new(&mut conn);

        let id = repo.create(&new_post("title only", None)).await.unwrap();
        let posts = repo.list_by_id(id).await.unwrap();

        assert_eq!(
            posts,
            vec![Post {
                id,
                title: "title only".into(),
                content: String::new(),
            }]
        );
    }

    #[tokio::test]
    async fn null_content_reads_back_empty() {
        let db = memory_db();
        let mut conn = db.open().await.unwrap();

        with_backend!(&mut conn, c => {
            sqlx::query("INSERT INTO blogPosts (title, content) VALUES ('raw', NULL)")
                .execute(&mut **c)
                .await
                .unwrap();
        });

        let posts = PostRepo::new(&mut conn).list().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].content, "");
    }

    #[tokio::test]
    async fn list_by_id_of_absent_post_is_empty() {
        let db = memory_db();
        let mut conn = db.open().await.unwrap();
        let posts = PostRepo::new(&mut conn).list_by_id(42).await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn update_absent_post_is_not_found() {
        let db = memory_db();
        let mut conn = db.open().await.unwrap();
        let mut repo = PostRepo::new(&mut conn);

        let update = PostUpdate {
            id: 7,
            title: "t".into(),
            content: None,
        };
        let err = repo.update(&update).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "Blog post", ref id } if id == "7"));
        assert_eq!(count(&mut conn).await, 0);
    }

    #[tokio::test]
    async fn update_with_identical_values_succeeds() {
        let db = memory_db();
        let mut conn = db.open().await.unwrap();
        let mut repo = PostRepo::new(&mut conn);

        let id = repo.create(&new_post("same", Some("same"))).await.unwrap();
        let update = PostUpdate {
            id,
            title: "same".into(),
            content: Some("same".into()),
        };
        repo.update(&update).await.unwrap();
    }

    #[tokio::test]
    async fn delete_twice_is_not_found_the_second_time() {
        let db = memory_db();
        let mut conn = db.open().await.unwrap();
        let mut repo = PostRepo::new(&mut conn);

        let id = repo.create(&new_post("gone", None)).await.unwrap();
        repo.delete(id).await.unwrap();
        assert!(matches!(
            repo.delete(id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }
}
