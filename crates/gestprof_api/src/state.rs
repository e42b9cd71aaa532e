//! Application state shared across all API handlers.

use crate::error::{ApiError, ApiResult};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Shared handles injected into every handler through axum `State`.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
    start_time: Instant,
}

impl AppState {
    /// Wraps an opened, migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
            start_time: Instant::now(),
        }
    }

    /// Runs `op` with exclusive access to the connection.
    ///
    /// The lock is released when `op` returns; callers must not hold
    /// borrowed rows past that point.
    pub fn with_conn<T>(&self, op: impl FnOnce(&Connection) -> ApiResult<T>) -> ApiResult<T> {
        let conn = self
            .db
            .lock()
            .map_err(|_| ApiError::Internal("database connection lock poisoned".to_string()))?;
        op(&conn)
    }

    /// Server uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
