//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export APP_ENV="local"
//! export STORAGE_PATH="./storage/storage.db"
//! export LISTEN="localhost:8080"
//! export HTTP_USER="myuser"
//! export HTTP_PASSWORD="mypass"
//! ```
//!
//! ## Required Variables
//!
//! - `STORAGE_PATH` - SQLite database file (`:memory:` for an in-memory store)
//! - `HTTP_USER`, `HTTP_PASSWORD` - basic-auth credentials for write endpoints
//!
//! ## Optional Variables
//!
//! - `APP_ENV` - `local`, `dev` or `prod` (default: `local`)
//! - `LISTEN` - Bind address (default: `localhost:8080`)
//! - `HTTP_TIMEOUT` - Per-request timeout in seconds (default: 10)
//! - `ALIAS_LENGTH` - Generated alias length (default: 6)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)
//! - `RUST_LOG` - Log filter, overrides the environment's default level

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::utils::alias::{DEFAULT_ALIAS_LENGTH, MAX_ALIAS_LENGTH};

/// Deployment environment. Selects log format and default level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Human-readable logs at `debug`.
    Local,
    /// JSON logs at `debug`.
    Dev,
    /// JSON logs at `info`.
    Prod,
}

impl Environment {
    /// Default log level for this environment.
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Environment::Local | Environment::Dev => "debug",
            Environment::Prod => "info",
        }
    }

    /// Whether log records are rendered as JSON.
    pub fn json_logs(&self) -> bool {
        !matches!(self, Environment::Local)
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            other => anyhow::bail!("APP_ENV must be 'local', 'dev' or 'prod', got '{}'", other),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Local => "local",
            Environment::Dev => "dev",
            Environment::Prod => "prod",
        };
        f.write_str(name)
    }
}

/// Basic-auth credentials guarding the write endpoints.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub user: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Checks a presented user/password pair.
    pub fn matches(&self, user: &str, password: Option<&str>) -> bool {
        self.user == user && password == Some(self.password.as_str())
    }
}

impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: Environment,
    pub storage_path: String,
    pub listen_addr: String,
    /// Per-request timeout in seconds (`HTTP_TIMEOUT`).
    pub request_timeout_secs: u64,
    pub credentials: BasicCredentials,
    /// Length of generated aliases (`ALIAS_LENGTH`).
    pub alias_length: usize,
    /// Maximum number of connections in the SQLite pool (`DB_MAX_CONNECTIONS`).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value cannot
    /// be parsed.
    pub fn from_env() -> Result<Self> {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "local".to_string())
            .parse()?;

        let storage_path = env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "localhost:8080".to_string());

        let request_timeout_secs = parse_var("HTTP_TIMEOUT", 10)?;

        let user = env::var("HTTP_USER").context("HTTP_USER must be set")?;
        let password = env::var("HTTP_PASSWORD").context("HTTP_PASSWORD must be set")?;

        let alias_length = parse_var("ALIAS_LENGTH", DEFAULT_ALIAS_LENGTH)?;

        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 5)?;

        Ok(Self {
            env,
            storage_path,
            listen_addr,
            request_timeout_secs,
            credentials: BasicCredentials::new(user, password),
            alias_length,
            db_max_connections,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `storage_path` is empty
    /// - `listen_addr` is not `host:port`
    /// - `request_timeout_secs` is 0
    /// - credentials are empty
    /// - `alias_length` is outside 1-64
    /// - `db_max_connections` is 0
    pub fn validate(&self) -> Result<()> {
        if self.storage_path.trim().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.request_timeout_secs == 0 {
            anyhow::bail!("HTTP_TIMEOUT must be greater than 0");
        }

        if self.credentials.user.is_empty() {
            anyhow::bail!("HTTP_USER must not be empty");
        }
        if self.credentials.password.is_empty() {
            anyhow::bail!("HTTP_PASSWORD must not be empty");
        }

        if self.alias_length == 0 || self.alias_length > MAX_ALIAS_LENGTH {
            anyhow::bail!(
                "ALIAS_LENGTH must be between 1 and {}, got {}",
                MAX_ALIAS_LENGTH,
                self.alias_length
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Request timeout: {}s", self.request_timeout_secs);
        tracing::info!("  Basic auth user: {}", self.credentials.user);
        tracing::info!("  Alias length: {}", self.alias_length);
    }
}

/// Parses an optional variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: '{}'", name, value)),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
