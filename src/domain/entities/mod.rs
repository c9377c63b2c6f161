//! Core domain entities.
//!
//! - [`UrlMapping`] - A persisted alias → URL pair

pub mod url_mapping;

pub use url_mapping::UrlMapping;
