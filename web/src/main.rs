//! Stockroom web app
//!
//! A small multi-warehouse inventory manager served as HTML forms.
//! Uses hexagonal (ports & adapters) architecture: the warehouse service
//! talks to storage only through repository traits.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod banner;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod views;

#[cfg(test)]
mod test_utils;


use adapters::{SqliteItemRepository, SqliteWarehouseRepository};
use app::WarehouseService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub warehouse_service:
        Arc<WarehouseService<SqliteWarehouseRepository, SqliteItemRepository>>,
    pub config: Config,
}

impl AppState {
    /// Open the database and wire up the services
    pub async fn connect(config: Config) -> Result<Self, error::DomainError> {
        let db = adapters::sqlite::connect(&config.database_url).await?;

        let warehouse_repo = Arc::new(SqliteWarehouseRepository::new(db.clone()));
        let item_repo = Arc::new(SqliteItemRepository::new(db));

        Ok(Self {
            warehouse_service: Arc::new(WarehouseService::new(warehouse_repo, item_repo)),
            config,
        })
    }
}

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        // Warehouse actions
        .route("/add_warehouse", post(handlers::add_warehouse))
        .route("/select_warehouse", post(handlers::select_warehouse))
        .route("/delete_warehouse", post(handlers::delete_warehouse))
        // Item actions (current warehouse)
        .route("/add_item", post(handlers::add_item))
        .route("/edit_quantity", post(handlers::edit_quantity))
        .route("/edit_item", post(handlers::edit_item))
        .route("/save_edit", post(handlers::save_edit))
        .route("/delete_item", post(handlers::delete_item))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Connect to SQLite
    tracing::info!("Opening database {}", config.database_url);
    let state = AppState::connect(config.clone()).await?;
    tracing::info!("Database ready");

    let app = build_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    for line in banner::startup_banner(&config) {
        tracing::info!("{}", line);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
