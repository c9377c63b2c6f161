//! Domain layer containing the business entity and the store contract.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! Entities derive `sqlx::FromRow` and the store contract reports
//! [`crate::error::StorageError`], but no HTTP types leak in here. The
//! contract is implemented in [`crate::infrastructure::persistence`].

pub mod entities;
pub mod repositories;
