//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`      - Redirect to the stored URL (public)
//! - `GET    /health`       - Health check (public)
//! - `POST   /url`          - Create a mapping (basic auth)
//! - `DELETE /url/{alias}`  - Delete a mapping (basic auth)
//!
//! # Middleware
//!
//! Outermost first:
//!
//! - **Request id** - `x-request-id` assigned and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panics become `500 internal error`
//! - **Timeout** - Slow requests become `408`
//! - **Authentication** - Basic auth on the write routes only
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, recovery, request_id, tracing as http_tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routed application with all middleware except path
/// normalization.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let routes = Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(protected)
        .with_state(state);

    with_middleware(routes, request_timeout)
}

/// Wraps `routes` in the shared middleware stack: request id, tracing, panic
/// recovery and timeout.
pub fn with_middleware(routes: Router, request_timeout: Duration) -> Router {
    routes
        .layer(recovery::timeout_layer(request_timeout))
        .layer(recovery::catch_panic_layer())
        .layer(http_tracing::layer())
        .layer(request_id::propagate_layer())
        .layer(request_id::set_layer())
}

/// Constructs the application router with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/ab12Cd/` resolves like
/// `/ab12Cd`.
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}
