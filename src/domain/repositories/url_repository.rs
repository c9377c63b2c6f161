//! Repository trait for alias → URL mappings.

use crate::domain::entities::UrlMapping;
use crate::error::StorageError;
use async_trait::async_trait;

/// Store of URL mappings keyed by a unique alias.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new mapping and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] if the alias is already mapped;
    /// existing state is left untouched.
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StorageError>;

    /// Returns the URL mapped to `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if the alias is not mapped.
    async fn get_url(&self, alias: &str) -> Result<String, StorageError>;

    /// Removes the mapping for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NotFound`] if no row was deleted.
    async fn delete(&self, alias: &str) -> Result<(), StorageError>;

    /// Lists mappings ordered by id.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<UrlMapping>, StorageError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<i64, StorageError>;
}
