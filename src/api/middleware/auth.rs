//! Basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using HTTP basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(user:password)
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Basic realm="url-shortener"`
/// if the header is missing, malformed, or the credentials do not match the
/// configured pair.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/url", post(save_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            tracing::info!("Authorization header is missing or invalid");
            AppError::Unauthorized
        })?;

    if !st.credentials.matches(&user, password.as_deref()) {
        tracing::info!(user = %user, "Invalid credentials");
        return Err(AppError::Unauthorized);
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
