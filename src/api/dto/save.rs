//! DTOs for the create endpoint.

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /url`. Both fields are optional.
#[derive(Debug, Default, Clone, Serialize, Deserialize, Validate)]
pub struct SaveRequest {
    /// Long URL to shorten. A placeholder is synthesized when absent.
    #[validate(url(message = "field URL is not a valid URL"))]
    #[serde(default)]
    pub url: Option<String>,

    /// Requested alias. Generated when absent or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl SaveRequest {
    /// Decodes a request body. An empty body is treated as `{}`.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }

    /// Returns the supplied URL, or `None` when it is missing or empty.
    pub fn supplied_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }

    /// Whether the URL can be sent back verbatim in a `Location` header.
    ///
    /// URL parsing tolerates control characters that header values reject.
    pub fn url_is_header_safe(&self) -> bool {
        self.url
            .as_deref()
            .is_none_or(|u| HeaderValue::from_str(u).is_ok())
    }

    /// Returns the supplied alias, or `None` when it is missing or empty.
    pub fn supplied_alias(&self) -> Option<&str> {
        self.alias.as_deref().filter(|a| !a.is_empty())
    }
}
