//! SQLite implementation of the URL mapping repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::StorageError;

/// Storage path that opens a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// SQLite repository for URL mappings.
///
/// Backed by a single `url` table with a unique alias column. Collisions are
/// detected by the unique constraint, never by a read-before-write.
#[derive(Clone)]
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Wraps an existing pool. The schema is not touched; call
    /// [`Self::init_schema`] before first use.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database at `storage_path` and
    /// ensures the schema exists.
    ///
    /// `":memory:"` opens an in-memory database pinned to one connection so
    /// that every query sees the same data.
    pub async fn connect(storage_path: &str, max_connections: u32) -> Result<Self, StorageError> {
        let pool = if storage_path == IN_MEMORY {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
                .await?
        } else {
            if let Some(parent) = Path::new(storage_path).parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .map_err(|e| StorageError::Database(sqlx::Error::Io(e)))?;
            }

            let options = SqliteConnectOptions::new()
                .filename(storage_path)
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(Duration::from_secs(5));

            SqlitePoolOptions::new()
                .max_connections(max_connections)
                .connect_with(options)
                .await?
        };

        let repository = Self::new(Arc::new(pool));
        repository.init_schema().await?;

        tracing::debug!(storage_path, "Storage initialized");

        Ok(repository)
    }

    /// Creates the `url` table and its alias index if they do not exist.
    ///
    /// Idempotent; safe to run on every start.
    pub async fn init_schema(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS url(
                id INTEGER PRIMARY KEY,
                alias TEXT NOT NULL UNIQUE,
                url TEXT NOT NULL)
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_alias ON url(alias)")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    /// Returns the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        self.pool.as_ref()
    }
}

/// Maps an insert failure, turning unique violations into
/// [`StorageError::AliasExists`].
fn map_insert_error(e: sqlx::Error) -> StorageError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return StorageError::AliasExists;
    }

    StorageError::Database(e)
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StorageError> {
        let result = sqlx::query("INSERT INTO url(url, alias) VALUES (?, ?)")
            .bind(url)
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(map_insert_error)?;

        Ok(result.last_insert_rowid())
    }

    async fn get_url(&self, alias: &str) -> Result<String, StorageError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM url WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?
            .ok_or(StorageError::NotFound)
    }

    async fn delete(&self, alias: &str) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM url WHERE alias = ?")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UrlMapping>, StorageError> {
        let rows = sqlx::query_as::<_, UrlMapping>(
            "SELECT id, alias, url FROM url ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn count(&self) -> Result<i64, StorageError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM url")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
