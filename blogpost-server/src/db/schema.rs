//! Table creation for the `blogPosts` table
//!
//! A single idempotent statement; there are no further migrations.

use super::config::Dialect;
use super::pool::{with_backend, Connection, ConnectionError};

/// Name of the only table.
pub const POSTS_TABLE: &str = "blogPosts";

const CREATE_MYSQL: &str = r#"
    CREATE TABLE IF NOT EXISTS blogPosts (
        id BIGINT AUTO_INCREMENT PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        content TEXT
    )
"#;

const CREATE_SQLITE: &str = r#"
    CREATE TABLE IF NOT EXISTS blogPosts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title VARCHAR(255) NOT NULL,
        content TEXT
    )
"#;

/// `CREATE TABLE IF NOT EXISTS` statement for `dialect`.
pub fn create_table_sql(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::MySql => CREATE_MYSQL,
        Dialect::Sqlite => CREATE_SQLITE,
    }
}

/// Create the posts table if it does not exist yet.
pub async fn ensure(conn: &mut Connection) -> Result<(), ConnectionError> {
    let dialect = conn.dialect();
    let sql = create_table_sql(dialect);

    let result = with_backend!(conn, c => sqlx::query(sql).execute(&mut **c).await.map(drop));
    result.map_err(|source| ConnectionError::Schema {
        table: POSTS_TABLE,
        source,
    })?;

    tracing::info!(table = POSTS_TABLE, ?dialect, "table ready");
    Ok(())
}
