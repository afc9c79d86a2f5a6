//! Errors returned by domain actions and mapped onto HTTP responses.
//!
//! Client errors carry their message to the caller. Internal errors are
//! logged in full and answered with a generic message; no internal detail
//! (error chains, backtraces) is ever sent to the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use keyword_search::AggregateError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Bad or missing input (400)
    #[error("{0}")]
    Validation(String),

    /// Referenced record does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// Anything unexpected (500)
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AggregateError> for AppError {
    fn from(error: AggregateError) -> Self {
        match error {
            AggregateError::Validation { reason } => AppError::Validation(reason),
            other => AppError::Internal(anyhow::Error::new(other)),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!(error = ?e, "Request failed");
                "Internal server error".to_string()
            }
            client_error => client_error.to_string(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
