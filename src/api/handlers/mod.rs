//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod delete;
pub mod health;
pub mod redirect;
pub mod save;

pub use delete::{delete_handler, delete_missing_alias_handler};
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use save::save_handler;
