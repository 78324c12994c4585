//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Storage
//!
//! ```bash
//! # Full URL
//! export DATABASE_URL="sqlite://storage/storage.db"
//!
//! # or just a file path
//! export STORAGE_PATH="./storage/storage.db"
//! ```
//!
//! If `DATABASE_URL` is not set, it is built from `STORAGE_PATH`.
//!
//! ## Required Variables
//!
//! - `DATABASE_URL` or `STORAGE_PATH`
//! - `HTTP_USER`, `HTTP_PASSWORD` - credentials for the creation endpoint
//!
//! ## Optional Variables
//!
//! - `APP_ENV` - `local`, `dev` or `prod` (default: `local`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `HTTP_TIMEOUT` - Request timeout in seconds (default: 4)
//! - `ALIAS_LENGTH` - Length of generated aliases (default: 6)
//! - `ALIAS_RETRY_ATTEMPTS` - Retries for colliding generated aliases (default: 0)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)
//! - `RUST_LOG` - Log filter override

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;

use crate::application::services::ConflictPolicy;
use crate::infrastructure::persistence::PoolSettings;
use crate::utils::alias_generator::DEFAULT_ALIAS_LENGTH;

/// Upper bound for `ALIAS_LENGTH`.
pub const MAX_ALIAS_LENGTH: usize = 32;

/// Upper bound for `ALIAS_RETRY_ATTEMPTS`.
pub const MAX_ALIAS_RETRY_ATTEMPTS: usize = 10;

/// Deployment environment; selects the logging setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    #[default]
    Local,
    Dev,
    Prod,
}

impl FromStr for AppEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => anyhow::bail!("APP_ENV must be 'local', 'dev' or 'prod', got '{other}'"),
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Prod => "prod",
        })
    }
}

/// Validated alias generation settings shared by the server and the admin CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasSettings {
    pub length: NonZeroUsize,
    pub retry_attempts: usize,
}

impl AliasSettings {
    /// Checks `length` against `1..=MAX_ALIAS_LENGTH` and `retry_attempts`
    /// against `MAX_ALIAS_RETRY_ATTEMPTS`.
    pub fn new(length: usize, retry_attempts: usize) -> Result<Self> {
        let length = NonZeroUsize::new(length)
            .filter(|l| l.get() <= MAX_ALIAS_LENGTH)
            .with_context(|| {
                format!(
                    "ALIAS_LENGTH must be between 1 and {}, got {}",
                    MAX_ALIAS_LENGTH, length
                )
            })?;

        if retry_attempts > MAX_ALIAS_RETRY_ATTEMPTS {
            anyhow::bail!(
                "ALIAS_RETRY_ATTEMPTS must be at most {}, got {}",
                MAX_ALIAS_RETRY_ATTEMPTS,
                retry_attempts
            );
        }

        Ok(Self {
            length,
            retry_attempts,
        })
    }

    /// Reads `ALIAS_LENGTH` and `ALIAS_RETRY_ATTEMPTS` and validates them.
    pub fn from_env() -> Result<Self> {
        Self::new(
            parse_or("ALIAS_LENGTH", DEFAULT_ALIAS_LENGTH)?,
            parse_or("ALIAS_RETRY_ATTEMPTS", 0)?,
        )
    }

    pub fn conflict_policy(&self) -> ConflictPolicy {
        ConflictPolicy::from_attempts(self.retry_attempts)
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_env: AppEnv,
    pub database_url: String,
    pub listen_addr: String,
    /// Explicit log filter from `RUST_LOG`; `None` means the per-environment default.
    pub log_level: Option<String>,
    pub request_timeout_seconds: u64,
    pub http_user: String,
    pub http_password: String,
    pub alias_length: usize,
    /// `0` propagates conflicts on generated aliases; `N` retries them `N` times.
    pub alias_retry_attempts: usize,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or unparsable.
    pub fn from_env() -> Result<Self> {
        let app_env = match env::var("APP_ENV") {
            Ok(value) => value.parse()?,
            Err(_) => AppEnv::default(),
        };

        let database_url =
            Self::load_database_url().context("Failed to load storage configuration")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").ok().filter(|v| !v.is_empty());

        let request_timeout_seconds = parse_or("HTTP_TIMEOUT", 4)?;

        let http_user = env::var("HTTP_USER").context("HTTP_USER must be set")?;
        let http_password = env::var("HTTP_PASSWORD").context("HTTP_PASSWORD must be set")?;

        let alias_length = parse_or("ALIAS_LENGTH", DEFAULT_ALIAS_LENGTH)?;
        let alias_retry_attempts = parse_or("ALIAS_RETRY_ATTEMPTS", 0)?;

        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", 5)?;
        let db_connect_timeout = parse_or("DB_CONNECT_TIMEOUT", 30)?;

        Ok(Self {
            app_env,
            database_url,
            listen_addr,
            log_level,
            request_timeout_seconds,
            http_user,
            http_password,
            alias_length,
            alias_retry_attempts,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Loads the database URL.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. Constructed from `STORAGE_PATH`
    pub fn load_database_url() -> Result<String> {
        if let Ok(url) = env::var("DATABASE_URL") {
            return Ok(url);
        }

        let path = env::var("STORAGE_PATH")
            .context("STORAGE_PATH must be set when DATABASE_URL is not provided")?;

        Ok(format!("sqlite://{}", path))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite URL
    /// - credentials are empty
    /// - alias length or retry count is out of range
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.http_user.is_empty() || self.http_password.is_empty() {
            anyhow::bail!("HTTP_USER and HTTP_PASSWORD must not be empty");
        }

        if self.request_timeout_seconds == 0 {
            anyhow::bail!("HTTP_TIMEOUT must be greater than 0");
        }

        self.alias_settings()?;

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Alias settings, checked against the same bounds as [`Config::validate`].
    pub fn alias_settings(&self) -> Result<AliasSettings> {
        AliasSettings::new(self.alias_length, self.alias_retry_attempts)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.db_max_connections,
            acquire_timeout: Duration::from_secs(self.db_connect_timeout),
        }
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.app_env);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Request timeout: {}s", self.request_timeout_seconds);
        tracing::info!("  Basic auth user: {}", self.http_user);
        tracing::info!("  Alias length: {}", self.alias_length);
        tracing::info!("  Alias retry attempts: {}", self.alias_retry_attempts);
    }
}

/// Reads `key` and parses it, falling back to `default` when unset.
fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value '{value}'")),
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
