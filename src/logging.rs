//! Tracing subscriber setup.
//!
//! | `APP_ENV` | Format            | Default level |
//! |-----------|-------------------|---------------|
//! | `local`   | human-readable    | `debug`       |
//! | `dev`     | JSON              | `debug`       |
//! | `prod`    | JSON              | `info`        |
//!
//! `RUST_LOG` replaces the default level when set.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::config::AppEnv;

/// Default filter directive for an environment.
pub fn default_level(app_env: AppEnv) -> &'static str {
    match app_env {
        AppEnv::Local | AppEnv::Dev => "debug",
        AppEnv::Prod => "info",
    }
}

/// Builds the filter, preferring an explicit directive over the environment default.
pub fn filter_for(app_env: AppEnv, log_level: Option<&str>) -> Result<EnvFilter> {
    let directive = log_level.unwrap_or_else(|| default_level(app_env));
    EnvFilter::try_new(directive)
        .map_err(|e| anyhow::anyhow!("Invalid log filter '{directive}': {e}"))
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already installed.
pub fn init(app_env: AppEnv, log_level: Option<&str>) -> Result<()> {
    let filter = filter_for(app_env, log_level)?;

    let installed = match app_env {
        AppEnv::Local => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(true)
            .try_init(),
        AppEnv::Dev | AppEnv::Prod => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(true)
            .try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}
