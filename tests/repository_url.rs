mod common;

use std::sync::Arc;
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::error::StorageError;
use url_shortener::infrastructure::persistence::SqliteUrlRepository;

#[tokio::test]
async fn test_save_and_get_url() {
    let repo = common::create_test_repository().await;

    let id = repo.save("https://example.com/page", "ab12Cd").await.unwrap();
    assert!(id > 0);

    let url = repo.get_url("ab12Cd").await.unwrap();
    assert_eq!(url, "https://example.com/page");
}

#[tokio::test]
async fn test_ids_increase() {
    let repo = common::create_test_repository().await;

    let first = common::create_test_mapping(&repo, "first", "https://example.com/1").await;
    let second = common::create_test_mapping(&repo, "second", "https://example.com/2").await;

    assert!(second > first);
}

#[tokio::test]
async fn test_duplicate_alias_keeps_first_mapping() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "dup", "https://example.com/first").await;

    let result = repo.save("https://example.com/second", "dup").await;

    assert!(matches!(result, Err(StorageError::AliasExists)));
    assert_eq!(repo.get_url("dup").await.unwrap(), "https://example.com/first");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_same_url_under_two_aliases() {
    let repo = common::create_test_repository().await;

    common::create_test_mapping(&repo, "one", "https://example.com").await;
    common::create_test_mapping(&repo, "two", "https://example.com").await;

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_get_url_not_found() {
    let repo = common::create_test_repository().await;

    let result = repo.get_url("missing").await;

    assert!(matches!(result, Err(StorageError::NotFound)));
}

#[tokio::test]
async fn test_alias_lookup_is_case_sensitive() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "AbC", "https://example.com").await;

    assert!(matches!(repo.get_url("abc").await, Err(StorageError::NotFound)));
}

#[tokio::test]
async fn test_delete() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "gone", "https://example.com").await;

    repo.delete("gone").await.unwrap();

    assert!(matches!(repo.get_url("gone").await, Err(StorageError::NotFound)));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_not_found_leaves_store_unchanged() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "keep", "https://example.com").await;

    let result = repo.delete("missing").await;

    assert!(matches!(result, Err(StorageError::NotFound)));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_list_is_ordered_and_paginated() {
    let repo = common::create_test_repository().await;
    for i in 0..5 {
        common::create_test_mapping(&repo, &format!("a{}", i), &format!("https://example.com/{}", i))
            .await;
    }

    let page = repo.list(2, 1).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].alias, "a1");
    assert_eq!(page[1].alias, "a2");
    assert!(page[0].id < page[1].id);

    let rest = repo.list(10, 4).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].url, "https://example.com/4");
}

#[tokio::test]
async fn test_init_schema_is_idempotent() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "stay", "https://example.com").await;

    repo.init_schema().await.unwrap();
    repo.init_schema().await.unwrap();

    assert_eq!(repo.get_url("stay").await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_new_shares_pool() {
    let repo = common::create_test_repository().await;
    let other = SqliteUrlRepository::new(Arc::new(repo.pool().clone()));

    common::create_test_mapping(&repo, "shared", "https://example.com").await;

    assert_eq!(other.get_url("shared").await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn test_file_store_creates_parent_directory() {
    let dir = std::env::temp_dir().join(format!("url-shortener-test-{}", std::process::id()));
    let path = dir.join("nested").join("storage.db");
    let _ = std::fs::remove_dir_all(&dir);

    let path_str = path.to_str().unwrap();
    let repo = SqliteUrlRepository::connect(path_str, 2).await.unwrap();
    repo.save("https://example.com", "file").await.unwrap();
    repo.pool().close().await;

    let reopened = SqliteUrlRepository::connect(path_str, 2).await.unwrap();
    assert_eq!(reopened.get_url("file").await.unwrap(), "https://example.com");
    reopened.pool().close().await;

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_closed_pool_reports_database_error() {
    let repo = common::create_test_repository().await;
    repo.pool().close().await;

    let result = repo.get_url("any").await;

    assert!(matches!(result, Err(StorageError::Database(_))));
}
