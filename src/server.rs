//! HTTP server initialization and runtime setup.
//!
//! Handles store initialization, service wiring, and Axum server lifecycle.

use crate::application::services::UrlService;
use crate::config::Config;
use crate::infrastructure::persistence::SqliteUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::alias::RandomAliasGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::sync::Arc;

/// Opens the store and builds the shared application state.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or its schema cannot be
/// created.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let repository = SqliteUrlRepository::connect(&config.storage_path, config.db_max_connections)
        .await
        .context("failed to init storage")?;
    tracing::info!("Storage ready");

    let url_service = Arc::new(UrlService::new(
        Arc::new(repository),
        Arc::new(RandomAliasGenerator::from_os_rng()),
        config.alias_length,
    ));

    Ok(AppState::new(url_service, config.credentials.clone()))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite store and schema
/// - URL service with an OS-seeded alias generator
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Store initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state, config.request_timeout());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::error!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
