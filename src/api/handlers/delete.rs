//! Handler for mapping removal.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Deletes the mapping for an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}` (basic auth)
///
/// # Response
///
/// `200 OK` with an empty body.
///
/// # Errors
///
/// - `invalid request` - alias is empty
/// - `not found` - alias is not mapped
/// - `internal error` - store failure
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.url_service.delete(&alias).await?;

    Ok(StatusCode::OK)
}

/// `DELETE /url` without an alias segment.
pub async fn delete_missing_alias_handler() -> AppError {
    tracing::info!("Alias is empty");
    AppError::validation("invalid request")
}
