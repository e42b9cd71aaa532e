//! API error types and their HTTP mapping.
//!
//! Not-found and validation failures answer `400` with a plain-text body;
//! store failures answer `500` with a JSON envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gestprof_core::{Entity, EntityId, RepoError};
use log::error;
use serde_json::json;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Store(RepoError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Not-found error for entity type `T`.
    pub fn not_found<T: Entity>(id: EntityId) -> Self {
        Self::NotFound {
            entity: T::ENTITY_NAME,
            id,
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err.to_string()),
            other => Self::Store(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::NotFound { .. } | ApiError::Validation(_) => {
                return (StatusCode::BAD_REQUEST, self.to_string()).into_response();
            }
            ApiError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "store_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        error!(
            "event=request_failed module=api status=error error_type={} error={}",
            error_type, self
        );

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
