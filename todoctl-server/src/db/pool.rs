//! Database connection pool management
//!
//! File-backed SQLite via sqlx. The file is created if missing and the
//! bootstrap schema is applied on every start (idempotent).

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open (or create) the SQLite database at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or the schema fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("todoApplication.db").await?;
/// ```
pub async fn create_pool(path: impl AsRef<Path>) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(path, DEFAULT_MAX_CONNECTIONS).await
}

/// Open the SQLite database with a custom connection limit.
pub async fn create_pool_with_options(
    path: impl AsRef<Path>,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path.as_ref())
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5)) // concurrent writers wait instead of SQLITE_BUSY
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections.max(1))
        .connect_with(options)
        .await?;

    sqlx::raw_sql(include_str!("schema.sql"))
        .execute(&pool)
        .await?;

    tracing::debug!(path = %path.as_ref().display(), max_connections, "SQLite pool ready");
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn creates_file_and_schema() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todos.db");

        let pool = create_pool(&path).await.expect("pool creation failed");
        assert!(path.exists());

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todo")
            .fetch_one(&pool)
            .await
            .expect("todo table missing");
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn reopening_keeps_schema() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("todos.db");

        create_pool(&path).await.unwrap().close().await;
        let pool = create_pool_with_options(&path, 1).await.unwrap();

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(result.0, 1);
    }
}
