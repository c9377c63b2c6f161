//! API route configuration for the write path.
//!
//! All routes here require basic authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{delete_handler, delete_missing_alias_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Write routes, protected by basic authentication.
///
/// # Endpoints
///
/// - `POST   /url`          - Create a mapping
/// - `DELETE /url/{alias}`  - Delete a mapping
/// - `DELETE /url`          - Rejected: alias is empty
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/url",
            post(save_handler).delete(delete_missing_alias_handler),
        )
        .route("/url/{alias}", delete(delete_handler))
}
