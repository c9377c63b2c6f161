//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::config::BasicCredentials;
use crate::infrastructure::persistence::SqliteUrlRepository;
use crate::utils::alias::RandomAliasGenerator;

/// Concrete service type used by the HTTP layer.
pub type AppUrlService = UrlService<SqliteUrlRepository, RandomAliasGenerator>;

/// State shared by every request.
///
/// Cloning is cheap: every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<AppUrlService>,
    pub credentials: Arc<BasicCredentials>,
}

impl AppState {
    pub fn new(url_service: Arc<AppUrlService>, credentials: BasicCredentials) -> Self {
        Self {
            url_service,
            credentials: Arc::new(credentials),
        }
    }
}
