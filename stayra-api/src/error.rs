use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use stayra_core::{AllocationError, StoreError};

#[derive(Debug)]
pub enum AppError {
    AuthenticationError(String),
    ValidationError(String),
    NotFoundError(String),
    CapacityError(String),
    InternalServerError(String),
    Anyhow(anyhow::Error),
}

impl AppError {
    /// Allocator outcomes map onto transport statuses; `Conflict` is consumed
    /// by the retry loop and should never arrive here, so it falls through to
    /// a 500.
    pub fn from_allocation(err: AllocationError) -> Self {
        match err {
            AllocationError::Validation(msg) => AppError::ValidationError(msg),
            AllocationError::HotelNotFound(id) => {
                AppError::NotFoundError(format!("Hotel {} not found", id))
            }
            AllocationError::CapacityExhausted { .. } => {
                AppError::CapacityError("No room available for the requested dates".to_string())
            }
            AllocationError::Store(e) => AppError::InternalServerError(e.to_string()),
        }
    }

    pub fn from_store(err: StoreError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::AuthenticationError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::CapacityError(msg) => (StatusCode::CONFLICT, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
