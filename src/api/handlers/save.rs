//! Handler for the create endpoint.

use axum::{Json, body::Bytes, extract::State};
use validator::Validate;

use crate::api::dto::response::ApiResponse;
use crate::api::dto::save::SaveRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Stores a long URL under a supplied or generated alias.
///
/// # Endpoint
///
/// `POST /url` (basic auth)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page", "alias": "ab12Cd" }
/// ```
///
/// Both fields are optional and an empty body is accepted. A missing URL is
/// replaced by a generated placeholder; a missing alias is generated.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "ab12Cd" }
/// ```
///
/// # Errors
///
/// Failures are reported in the envelope with status 200:
/// - `failed to decode request` - body is not valid JSON
/// - `field URL is not a valid URL` - URL validation failed
/// - `url already exists` - alias is taken
/// - `failed to add URL` - store failure
pub async fn save_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ApiResponse>, AppError> {
    let mut payload = SaveRequest::from_body(&body).map_err(|e| {
        tracing::error!(error = %e, "Failed to decode request body");
        AppError::validation("failed to decode request")
    })?;

    if payload.supplied_url().is_none() {
        let url = state.url_service.placeholder_url();
        tracing::info!(url = %url, "URL was empty, generated placeholder");
        payload.url = Some(url);
    }

    payload.validate().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid request");
    })?;

    if !payload.url_is_header_safe() {
        tracing::error!("URL contains characters not allowed in a header");
        return Err(AppError::validation("field URL is not a valid URL"));
    }

    let url = payload.url.as_deref().unwrap_or_default();
    let alias = state
        .url_service
        .save(url, payload.supplied_alias())
        .await?;

    Ok(Json(ApiResponse::with_alias(alias)))
}
