//! API Error Types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use data_validator::{ValidationError, INVALID_INPUT_MESSAGE};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// One or more reading fields failed validation
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput(Vec<ValidationError>),

    /// Request body could not be read as a reading form
    #[error("{}", INVALID_INPUT_MESSAGE)]
    MalformedBody(String),

    /// Unknown measurement name in the path
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    /// Metrics recorder not installed
    #[error("Metrics exporter not installed")]
    MetricsUnavailable,

    /// Invalid server configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to load configuration sources
    #[error("Configuration error: {0}")]
    Settings(#[from] config::ConfigError),

    /// Socket error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownVariable(_) => StatusCode::NOT_FOUND,
            ApiError::MetricsUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Config(_) | ApiError::Settings(_) | ApiError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let details = match &self {
            ApiError::InvalidInput(errors) => errors.iter().map(|e| e.to_string()).collect(),
            ApiError::MalformedBody(reason) => vec![reason.clone()],
            _ => Vec::new(),
        };
        let body = ErrorBody {
            error: self.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
