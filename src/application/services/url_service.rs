//! URL mapping service.

use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::{AppError, StorageError};
use crate::utils::alias::{AliasGenerator, validate_alias};

/// Host used for synthesized placeholder URLs.
const PLACEHOLDER_URL_PREFIX: &str = "https://generated-url.com/";

/// Length of the random path of a placeholder URL.
const PLACEHOLDER_PATH_LENGTH: usize = 10;

/// Service for creating, resolving and deleting URL mappings.
///
/// Owns alias resolution (caller-supplied or generated) and maps
/// [`StorageError`]s to the client-facing [`AppError`] taxonomy. Store
/// failures are logged here with full detail and surfaced as generic
/// internal errors.
pub struct UrlService<R: UrlRepository, G: AliasGenerator> {
    repository: Arc<R>,
    generator: Arc<G>,
    alias_length: usize,
}

impl<R: UrlRepository, G: AliasGenerator> UrlService<R, G> {
    /// Creates a new URL service.
    ///
    /// `alias_length` is the length of generated aliases.
    pub fn new(repository: Arc<R>, generator: Arc<G>, alias_length: usize) -> Self {
        Self {
            repository,
            generator,
            alias_length,
        }
    }

    /// Synthesizes a placeholder URL for requests that omit one.
    pub fn placeholder_url(&self) -> String {
        format!(
            "{}{}",
            PLACEHOLDER_URL_PREFIX,
            self.generator.generate(PLACEHOLDER_PATH_LENGTH)
        )
    }

    /// Stores `url` under `alias`, generating an alias when none is given.
    ///
    /// `url` must already be validated. An empty `alias` counts as absent.
    /// A collision with an existing alias is reported, never retried.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the supplied alias is malformed
    /// - [`AppError::AliasExists`] if the alias is already mapped
    /// - [`AppError::Internal`] on store failures
    pub async fn save(&self, url: &str, alias: Option<&str>) -> Result<String, AppError> {
        let alias = match alias.filter(|a| !a.is_empty()) {
            Some(alias) => {
                validate_alias(alias)?;
                alias.to_string()
            }
            None => {
                let generated = self.generator.generate(self.alias_length);
                tracing::debug!(alias = %generated, "Generated alias");
                generated
            }
        };

        match self.repository.save(url, &alias).await {
            Ok(id) => {
                tracing::info!(id, alias = %alias, "URL added");
                Ok(alias)
            }
            Err(StorageError::AliasExists) => {
                tracing::info!(alias = %alias, url, "URL already exists");
                Err(AppError::AliasExists)
            }
            Err(e) => {
                tracing::error!(error = %e, alias = %alias, "Failed to add URL");
                Err(AppError::Internal("failed to add URL"))
            }
        }
    }

    /// Returns the URL stored for `alias`.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the alias is not mapped
    /// - [`AppError::Internal`] on store failures
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        match self.repository.get_url(alias).await {
            Ok(url) => Ok(url),
            Err(StorageError::NotFound) => {
                tracing::info!(alias, "URL not found");
                Err(AppError::NotFound)
            }
            Err(e) => {
                tracing::error!(error = %e, alias, "Failed to get URL");
                Err(AppError::Internal("internal error"))
            }
        }
    }

    /// Deletes the mapping for `alias`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `alias` is empty
    /// - [`AppError::NotFound`] if the alias is not mapped
    /// - [`AppError::Internal`] on store failures
    pub async fn delete(&self, alias: &str) -> Result<(), AppError> {
        if alias.trim().is_empty() {
            tracing::info!("Alias is empty");
            return Err(AppError::validation("invalid request"));
        }

        match self.repository.delete(alias).await {
            Ok(()) => {
                tracing::info!(alias, "URL deleted");
                Ok(())
            }
            Err(StorageError::NotFound) => {
                tracing::info!(alias, "URL not found");
                Err(AppError::NotFound)
            }
            Err(e) => {
                tracing::error!(error = %e, alias, "Failed to delete URL");
                Err(AppError::Internal("internal error"))
            }
        }
    }

    /// Counts stored mappings.
    pub async fn count(&self) -> Result<i64, StorageError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use crate::utils::alias::{MockAliasGenerator, RandomAliasGenerator};

    fn service(
        repo: MockUrlRepository,
        generator: MockAliasGenerator,
    ) -> UrlService<MockUrlRepository, MockAliasGenerator> {
        UrlService::new(Arc::new(repo), Arc::new(generator), 6)
    }

    fn db_error() -> StorageError {
        StorageError::Database(sqlx::Error::PoolTimedOut)
    }

    #[tokio::test]
    async fn test_save_with_explicit_alias() {
        let mut repo = MockUrlRepository::new();
        let mut generator = MockAliasGenerator::new();

        generator.expect_generate().times(0);
        repo.expect_save()
            .withf(|url, alias| url == "https://example.com/page" && alias == "ab12Cd")
            .times(1)
            .returning(|_, _| Ok(1));

        let result = service(repo, generator)
            .save("https://example.com/page", Some("ab12Cd"))
            .await;

        assert_eq!(result.unwrap(), "ab12Cd");
    }

    #[tokio::test]
    async fn test_save_generates_alias_when_absent() {
        let mut repo = MockUrlRepository::new();
        let mut generator = MockAliasGenerator::new();

        generator
            .expect_generate()
            .withf(|len| *len == 6)
            .times(1)
            .returning(|_| "xY7pQ2".to_string());
        repo.expect_save()
            .withf(|_, alias| alias == "xY7pQ2")
            .times(1)
            .returning(|_, _| Ok(7));

        let result = service(repo, generator)
            .save("https://example.com", None)
            .await;

        assert_eq!(result.unwrap(), "xY7pQ2");
    }

    #[tokio::test]
    async fn test_save_empty_alias_is_generated() {
        let mut repo = MockUrlRepository::new();
        let mut generator = MockAliasGenerator::new();

        generator
            .expect_generate()
            .times(1)
            .returning(|_| "gen123".to_string());
        repo.expect_save().times(1).returning(|_, _| Ok(1));

        let result = service(repo, generator)
            .save("https://example.com", Some(""))
            .await;

        assert_eq!(result.unwrap(), "gen123");
    }

    #[tokio::test]
    async fn test_save_uses_configured_length() {
        let mut repo = MockUrlRepository::new();
        repo.expect_save().returning(|_, _| Ok(1));

        let service = UrlService::new(
            Arc::new(repo),
            Arc::new(RandomAliasGenerator::seeded(5)),
            9,
        );

        let alias = service.save("https://example.com", None).await.unwrap();
        assert_eq!(alias.len(), 9);
    }

    #[tokio::test]
    async fn test_save_duplicate_alias() {
        let mut repo = MockUrlRepository::new();
        repo.expect_save()
            .times(1)
            .returning(|_, _| Err(StorageError::AliasExists));

        let result = service(repo, MockAliasGenerator::new())
            .save("https://example.com", Some("taken"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::AliasExists));
    }

    #[tokio::test]
    async fn test_save_generated_collision_is_not_retried() {
        let mut repo = MockUrlRepository::new();
        let mut generator = MockAliasGenerator::new();

        generator
            .expect_generate()
            .times(1)
            .returning(|_| "clash1".to_string());
        repo.expect_save()
            .times(1)
            .returning(|_, _| Err(StorageError::AliasExists));

        let result = service(repo, generator)
            .save("https://example.com", None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::AliasExists));
    }

    #[tokio::test]
    async fn test_save_store_failure_is_generic() {
        let mut repo = MockUrlRepository::new();
        repo.expect_save().returning(|_, _| Err(db_error()));

        let err = service(repo, MockAliasGenerator::new())
            .save("https://example.com", Some("alias1"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "failed to add URL");
    }

    #[tokio::test]
    async fn test_save_invalid_alias_skips_store() {
        let mut repo = MockUrlRepository::new();
        repo.expect_save().times(0);

        let result = service(repo, MockAliasGenerator::new())
            .save("https://example.com", Some("bad/alias"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_resolve() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_url()
            .withf(|alias| alias == "ab12Cd")
            .returning(|_| Ok("https://example.com/page".to_string()));

        let url = service(repo, MockAliasGenerator::new())
            .resolve("ab12Cd")
            .await
            .unwrap();

        assert_eq!(url, "https://example.com/page");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_url()
            .returning(|_| Err(StorageError::NotFound));

        let result = service(repo, MockAliasGenerator::new())
            .resolve("missing")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn test_resolve_store_failure() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_url().returning(|_| Err(db_error()));

        let err = service(repo, MockAliasGenerator::new())
            .resolve("alias")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "internal error");
    }

    #[tokio::test]
    async fn test_delete() {
        let mut repo = MockUrlRepository::new();
        repo.expect_delete()
            .withf(|alias| alias == "ab12Cd")
            .times(1)
            .returning(|_| Ok(()));

        let result = service(repo, MockAliasGenerator::new())
            .delete("ab12Cd")
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_empty_alias() {
        let mut repo = MockUrlRepository::new();
        repo.expect_delete().times(0);

        let err = service(repo, MockAliasGenerator::new())
            .delete("")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "invalid request");
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_delete()
            .returning(|_| Err(StorageError::NotFound));

        let result = service(repo, MockAliasGenerator::new())
            .delete("missing")
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[test]
    fn test_placeholder_url() {
        let mut generator = MockAliasGenerator::new();
        generator
            .expect_generate()
            .withf(|len| *len == 10)
            .returning(|_| "abcdefghij".to_string());

        let url = service(MockUrlRepository::new(), generator).placeholder_url();
        assert_eq!(url, "https://generated-url.com/abcdefghij");
    }
}
