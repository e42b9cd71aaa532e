//! HTTP API for the professor/specialty registry.
//!
//! Exposes `/api/professeur` and `/api/specialite` over axum, backed by the
//! services and SQLite repositories of `gestprof_core`.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::app;
pub use server::{serve, ServerConfig, ServerError, DEFAULT_BIND_ADDR, DEFAULT_DB_LOCATION};
pub use state::AppState;
