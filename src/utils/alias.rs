//! Alias generation and validation utilities.
//!
//! Generation draws characters uniformly from a 62-character alphanumeric
//! alphabet using an injected random source, so tests can use a fixed seed.
//! The generator makes no uniqueness guarantee; the store's unique constraint
//! is the only arbiter.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

use crate::error::AppError;

/// Alphabet aliases are drawn from.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default generated alias length.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Longest alias accepted from callers.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases that would shadow service routes.
const RESERVED_ALIASES: &[&str] = &["url", "health"];

/// Source of random aliases.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Returns `length` random characters from [`ALPHABET`].
    fn generate(&self, length: usize) -> String;
}

/// Draws `length` characters uniformly from [`ALPHABET`] using `rng`.
pub fn random_alias<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// [`AliasGenerator`] backed by a [`StdRng`].
///
/// Use [`RandomAliasGenerator::from_os_rng`] in production and
/// [`RandomAliasGenerator::seeded`] for reproducible sequences.
pub struct RandomAliasGenerator {
    rng: Mutex<StdRng>,
}

impl RandomAliasGenerator {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Seeds the generator from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic generator; equal seeds yield equal sequences.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl AliasGenerator for RandomAliasGenerator {
    fn generate(&self, length: usize) -> String {
        // A panic while holding the lock cannot leave the RNG in an invalid state.
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        random_alias(&mut *rng, length)
    }
}

/// Validates a caller-supplied alias.
///
/// Only aliases that `GET /{alias}` could never reach are rejected.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - No `/`, since the alias is a single path segment
/// - Not `.` or `..`, which clients collapse before sending
/// - Cannot be a reserved route word
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    let length = alias.chars().count();
    if length == 0 || length > MAX_ALIAS_LENGTH {
        return Err(AppError::validation(format!(
            "field Alias must be 1-{} characters",
            MAX_ALIAS_LENGTH
        )));
    }

    if alias.contains('/') {
        return Err(AppError::validation("field Alias must not contain '/'"));
    }

    if alias == "." || alias == ".." || RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::validation("field Alias is reserved"));
    }

    Ok(())
}
