//! Error types shared by the store, the service layer and the HTTP layer.
//!
//! [`StorageError`] is what repositories return. [`AppError`] is what services
//! and handlers return; it renders itself as the JSON response envelope.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::api::dto::response::ApiResponse;

/// Realm advertised in `WWW-Authenticate` challenges.
pub const AUTH_REALM: &str = "url-shortener";

/// Errors produced by URL mapping repositories.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The alias is already mapped (unique constraint violation).
    #[error("alias already exists")]
    AliasExists,

    /// No mapping exists for the alias.
    #[error("alias not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Errors returned by services and HTTP handlers.
///
/// Every variant except [`AppError::Unauthorized`] is rendered with status
/// `200 OK`; clients tell failures apart by the envelope's `error` field.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),

    #[error("url already exists")]
    AliasExists,

    #[error("not found")]
    NotFound,

    /// Missing or wrong basic-auth credentials.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other failure. The message is generic; details are logged where
    /// the error is created.
    #[error("{0}")]
    Internal(&'static str),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Returns the HTTP status this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::OK,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let messages: Vec<String> = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("field {} is not valid", field),
                })
            })
            .collect();

        if messages.is_empty() {
            AppError::validation("invalid request")
        } else {
            AppError::Validation(messages.join(", "))
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let unauthorized = matches!(self, AppError::Unauthorized);

        let mut response = (status, Json(ApiResponse::error(self.to_string()))).into_response();

        if unauthorized {
            let challenge = format!("Basic realm=\"{}\"", AUTH_REALM);
            if let Ok(value) = HeaderValue::from_str(&challenge) {
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, value);
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    struct UrlInput {
        #[validate(url(message = "field URL is not a valid URL"))]
        url: Option<String>,
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_renders_ok_with_error_envelope() {
        let response = AppError::validation("invalid request").into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "Error");
        assert_eq!(json["error"], "invalid request");
        assert!(json.get("alias").is_none());
    }

    #[tokio::test]
    async fn test_alias_exists_message() {
        let json = body_json(AppError::AliasExists.into_response()).await;
        assert_eq!(json["error"], "url already exists");
    }

    #[tokio::test]
    async fn test_internal_does_not_leak_details() {
        let response = AppError::Internal("internal error").into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["error"], "internal error");
    }

    #[test]
    fn test_unauthorized_sets_challenge() {
        let response = AppError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers()[header::WWW_AUTHENTICATE],
            "Basic realm=\"url-shortener\""
        );
    }

    #[test]
    fn test_from_validation_errors_uses_field_message() {
        let input = UrlInput {
            url: Some("invalid_url".to_string()),
        };
        let err: AppError = input.validate().unwrap_err().into();
        assert_eq!(err.to_string(), "field URL is not a valid URL");
    }
}
