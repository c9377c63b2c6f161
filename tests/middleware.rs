mod common;

use axum::extract::Request;
use axum::{Router, ServiceExt, routing::get};
use axum_test::TestServer;
use serde_json::json;
use std::time::Duration;
use url_shortener::routes::{app_router, with_middleware};

async fn slow_handler() -> &'static str {
    tokio::time::sleep(Duration::from_millis(200)).await;
    "done"
}

async fn panicking_handler() -> &'static str {
    panic!("handler blew up")
}

fn create_layered_server(request_timeout: Duration) -> TestServer {
    let routes = Router::new()
        .route("/slow", get(slow_handler))
        .route("/boom", get(panicking_handler));

    TestServer::new(with_middleware(routes, request_timeout)).unwrap()
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let repo = common::create_test_repository().await;
    common::create_test_mapping(&repo, "ab12Cd", "https://example.com/page").await;

    let app = app_router(common::create_test_state(repo), Duration::from_secs(10));
    let server = TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap();

    let response = server.get("/ab12Cd/").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/page");
}

#[tokio::test]
async fn test_slow_request_times_out() {
    let server = create_layered_server(Duration::from_millis(1));

    let response = server.get("/slow").expect_failure().await;

    assert_eq!(response.status_code(), 408);
}

#[tokio::test]
async fn test_fast_request_within_timeout() {
    let server = create_layered_server(Duration::from_secs(5));

    let response = server.get("/slow").await;

    response.assert_status_ok();
    response.assert_text("done");
}

#[tokio::test]
async fn test_panic_becomes_internal_error() {
    let server = create_layered_server(Duration::from_secs(5));

    let response = server.get("/boom").expect_failure().await;

    assert_eq!(response.status_code(), 500);
    response.assert_json(&json!({"status": "Error", "error": "internal error"}));
    assert!(!response.header("x-request-id").is_empty());
}
