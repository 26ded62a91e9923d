use crate::config::LinguaConfig;
use crate::database::sqlite::SqliteRepository;
use crate::database::{Database, LinguisticsRepository};
use anyhow::Context;
use axum::Router;
use sqlx::migrate::MigrateDatabase;
use sqlx::Sqlite;
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::sync::oneshot;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod database;
pub mod domain;
pub mod error;
mod features;
pub mod query;
pub mod render;
mod shutdown;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn LinguisticsRepository>,
    pub config: Arc<LinguaConfig>,
}

pub fn build_app(state: AppState) -> Router {
    let frontend_path = state.config.frontend_path.clone();

    features::app_router()
        .fallback_service(ServeDir::new(frontend_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables, RUST_LOG included
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lingua_server=info,tower_http=warn")),
        )
        .init();

    let config = LinguaConfig::from_env()?;
    let shared_config = Arc::new(config.clone());

    // verify db exists
    if !Sqlite::database_exists(&config.database_url)
        .await
        .unwrap_or(false)
    {
        tracing::info!(url = %config.database_url, "database not found, creating");
        Sqlite::create_database(&config.database_url)
            .await
            .with_context(|| format!("Unable to create database at {}", config.database_url))?;
    }

    let db = Database::connect(&config.database_url, &config.pool).await?;
    tracing::info!(
        min = config.pool.min_connections,
        max = config.pool.max_connections,
        "connection pool started"
    );

    db.migrate()
        .await
        .context("Failed to run database migrations")?;

    let app_state = AppState {
        repo: Arc::new(SqliteRepository::new(db.clone())),
        config: shared_config,
    };
    let app = build_app(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Server listening on http://{}", config.bind_addr);

    let (signal_tx, signal_rx) = oneshot::channel();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal(signal_tx))
        .into_future();

    shutdown::serve_until_drained(server, signal_rx, &db, config.shutdown_grace).await
}
