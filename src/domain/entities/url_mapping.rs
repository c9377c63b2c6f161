//! URL mapping entity.

/// A persisted alias → URL mapping.
///
/// `id` is assigned by the store and never changes. Mappings are created and
/// deleted but never updated.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlMapping {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl UrlMapping {
    pub fn new(id: i64, alias: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            alias: alias.into(),
            url: url.into(),
        }
    }
}
