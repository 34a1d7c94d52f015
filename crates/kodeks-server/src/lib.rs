//! HTTP server for the kodeks legal reference API.
//!
//! This crate provides a native Rust HTTP server using axum, serving
//! three read-only query endpoints over the legal reference database:
//! - `/api/articles`: criminal-code article lookup, search, and listing
//! - `/api/court-practice`: precedent search by cited article code
//! - `/api/documents`: procedural document template listing
//!
//! plus `/api/health` as a liveness probe.
//!
//! # Quick Start
//!
//! ```ignore
//! use kodeks_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7878,
//!         database_url: Some("postgres://localhost/kodeks".to_string()),
//!         max_connections: 5,
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► Rust axum server (kodeks-server)
//!                        │
//!                        ├─► API routes (one handler per endpoint)
//!                        │       │
//!                        │       └─► kodeks-store ──► PostgreSQL (pool)
//!                        │
//!                        └─► CORS layer (tower-http) on every response
//! ```
//!
//! The database pool is created lazily: the server starts without a
//! reachable database and without a connection string at all. A missing
//! connection string surfaces as a per-request configuration error
//! rather than a startup failure.

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Database connection string. `None` leaves the API up, answering
    /// every query with a configuration error.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            database_url: None,
            max_connections: 5,
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the connection string is malformed or the server
/// fails to bind.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let pool = match &config.database_url {
        Some(url) => Some(
            PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect_lazy(url)?,
        ),
        None => {
            tracing::warn!("No database url configured; queries will report a configuration error");
            None
        }
    };

    let state = Arc::new(AppState { pool });
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from kodeks config.
///
/// # Arguments
///
/// * `config` - Application configuration
#[must_use]
pub fn server_config_from_config(config: &kodeks_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        database_url: config.database.url.clone(),
        max_connections: config.database.max_connections,
    }
}
