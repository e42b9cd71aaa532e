//! Server configuration and startup.

use crate::{routes::app, state::AppState};
use gestprof_core::db::{open_db_at, DbError};
use log::info;
use std::future::Future;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
/// Default database file, relative to the working directory.
pub const DEFAULT_DB_LOCATION: &str = "gestprof.db";

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Database file path, or `:memory:` for a throwaway store.
    pub db_location: String,
}

/// Startup failures.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to open database: {0}")]
    Database(#[from] DbError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Opens the store, binds the listener and serves until `shutdown` resolves.
pub async fn serve(
    config: ServerConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    let conn = open_db_at(&config.db_location)?;
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        "event=server_start module=api status=ok addr={} db={}",
        listener.local_addr()?,
        config.db_location
    );

    axum::serve(listener, app(AppState::new(conn)))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("event=server_stop module=api status=ok");
    Ok(())
}
