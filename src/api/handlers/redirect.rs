//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL. The target is neither
/// fetched nor revalidated.
///
/// # Errors
///
/// - `not found` - alias is not mapped
/// - `internal error` - store failure, or a stored URL that is not a valid
///   header value
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let url = state.url_service.resolve(&alias).await?;

    let location = HeaderValue::try_from(url.as_str()).map_err(|e| {
        tracing::error!(error = %e, alias = %alias, "Stored URL is not a valid Location");
        AppError::Internal("internal error")
    })?;

    tracing::info!(alias = %alias, url = %url, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
