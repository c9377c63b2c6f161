#![allow(dead_code)]

use axum_test::TestServer;
use base64::{Engine, engine::general_purpose::STANDARD};
use std::sync::Arc;
use std::time::Duration;
use url_shortener::application::services::UrlService;
use url_shortener::config::BasicCredentials;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::infrastructure::persistence::SqliteUrlRepository;
use url_shortener::infrastructure::persistence::sqlite_url_repository::IN_MEMORY;
use url_shortener::routes::router;
use url_shortener::state::AppState;
use url_shortener::utils::alias::RandomAliasGenerator;

pub const USER: &str = "myuser";
pub const PASSWORD: &str = "mypass";
pub const SEED: u64 = 42;

pub async fn create_test_repository() -> SqliteUrlRepository {
    SqliteUrlRepository::connect(IN_MEMORY, 1).await.unwrap()
}

pub fn create_test_state(repo: SqliteUrlRepository) -> AppState {
    let service = UrlService::new(
        Arc::new(repo),
        Arc::new(RandomAliasGenerator::seeded(SEED)),
        6,
    );

    AppState::new(Arc::new(service), BasicCredentials::new(USER, PASSWORD))
}

/// Full application router over a fresh in-memory store. The returned
/// repository shares the server's pool.
pub async fn create_test_server() -> (TestServer, SqliteUrlRepository) {
    let repo = create_test_repository().await;
    let state = create_test_state(repo.clone());
    let app = router(state, Duration::from_secs(10));

    (TestServer::new(app).unwrap(), repo)
}

pub fn basic_auth(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
}

pub fn valid_auth() -> String {
    basic_auth(USER, PASSWORD)
}

pub async fn create_test_mapping(repo: &SqliteUrlRepository, alias: &str, url: &str) -> i64 {
    repo.save(url, alias).await.unwrap()
}
