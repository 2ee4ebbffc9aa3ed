use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::pricing::EstimateError;
use crate::store::StoreError;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Caller-supplied data failed a precondition
    InvalidInput(String),
    /// No price row for the requested fabric
    NotFound(String),
    /// The backing store call failed
    StorageError(String),
    /// Unexpected failure during computation
    InternalError(String),
    /// Configuration error
    ConfigError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::StorageError(msg) => write!(f, "Database error: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::NotFound(_) => "not_found",
            Self::StorageError(_) => "storage_error",
            Self::InternalError(_) => "internal_error",
            Self::ConfigError(_) => "config_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_type = self.type_name();
        crate::metrics::record_error(error_type);

        let body = Json(json!({
            "error": self.to_string(),
            "type": error_type,
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidInput(msg) => Self::InvalidInput(msg),
            StoreError::NotFound(fabric_type) => Self::NotFound(format!(
                "No material price for '{}'. Add it under /admin/materials first.",
                fabric_type
            )),
            StoreError::Storage(msg) => Self::StorageError(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl From<EstimateError> for AppError {
    fn from(err: EstimateError) -> Self {
        Self::InternalError(err.to_string())
    }
}
