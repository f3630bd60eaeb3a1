//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, migrations, router assembly and the Axum
//! server lifecycle.

use crate::api::middleware::error_pipeline::Continuation;
use crate::config::Config;
use crate::infrastructure::persistence::{PgDriverRepository, PgNotificationRepository};
use crate::routes::app_router;
use crate::state::{AppState, StorageKind};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Connects to PostgreSQL with the configured pool settings.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect_pool(config: &Config, database_url: &str) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(database_url)
        .await
        .context("Failed to connect to database")
}

/// Builds application state for the configured storage backend.
///
/// With a database URL this connects and applies migrations; otherwise
/// in-memory repositories are used.
///
/// # Errors
///
/// Returns an error if the database is unreachable or migrations fail.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let Some(database_url) = &config.database_url else {
        tracing::warn!("No database configured, using in-memory storage");
        return Ok(AppState::in_memory(config.auth_background_image.clone()));
    };

    let pool = connect_pool(config, database_url).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);
    Ok(AppState::new(
        Arc::new(PgDriverRepository::new(pool.clone())),
        Arc::new(PgNotificationRepository::new(pool)),
        StorageKind::Postgres,
        config.auth_background_image.clone(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - Storage initialization fails
/// - Route tables conflict
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state, Continuation::default(), &config.static_dir)?;

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
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
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
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
