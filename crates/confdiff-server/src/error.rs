use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Errors from server setup and operation.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("store error: {0}")]
    Store(#[from] confdiff_store::StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors returned to API clients as JSON responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request lacked a valid API key.
    #[error("missing or invalid API key")]
    Unauthorized,

    /// No live permalink under the requested id.
    #[error("permalink not found: {0}")]
    NotFound(String),

    /// The permalink store is at capacity.
    #[error("permalink storage is full")]
    StorageFull,

    /// Anything the client cannot act on.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Error response format for API errors.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl From<confdiff_store::StoreError> for ApiError {
    fn from(err: confdiff_store::StoreError) -> Self {
        match err {
            confdiff_store::StoreError::CapacityExhausted { .. } => ApiError::StorageFull,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "unauthorized", self.to_string())
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            ApiError::StorageFull => (
                StatusCode::INSUFFICIENT_STORAGE,
                "storage_full",
                self.to_string(),
            ),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "an unexpected error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: code.to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
