//! HTTP server initialization and runtime setup.
//!
//! Handles the store connection, service wiring, and Axum server lifecycle.

use crate::application::services::MappingService;
use crate::config::Config;
use crate::infrastructure::persistence::SqliteMappingStore;
use crate::routes::app_router;
use crate::state::{AppMappingService, AppState, BasicCredentials};
use crate::utils::alias_generator::RandomAliasGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Opens the store and wires the mapping service from configuration.
///
/// # Errors
///
/// Returns an error if the alias settings are out of range, or the database
/// cannot be opened or its schema set up.
pub async fn build_service(config: &Config) -> Result<AppMappingService> {
    let alias_settings = config.alias_settings()?;

    let store = SqliteMappingStore::connect(&config.database_url, config.pool_settings())
        .await
        .context("Failed to open storage")?;
    tracing::info!("Connected to database");

    Ok(
        MappingService::new(Arc::new(store), Arc::new(RandomAliasGenerator::new()))
            .with_alias_length(alias_settings.length)
            .with_conflict_policy(alias_settings.conflict_policy()),
    )
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool and schema
/// - Mapping service
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let service = build_service(&config).await?;

    let credentials = BasicCredentials::new(&config.http_user, &config.http_password);
    let state = AppState::new(Arc::new(service), credentials);

    let app = app_router(state, config.request_timeout());

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .context("Invalid listen address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind TCP listener")?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sigterm) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
