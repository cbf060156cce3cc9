//! API error handling utilities.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};

use crate::services::{ServiceError, ValidationError};
use crate::storage::StorageError;

/// API error response
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    /// Field-level validation messages, serialized as `errors`
    pub errors: Vec<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn validation(errors: Vec<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Validation failed".to_string(),
            errors,
        }
    }

    /// Unexpected failure. The cause is logged, never sent to the client.
    pub fn internal(cause: impl std::fmt::Display) -> Self {
        error!("Internal error: {}", cause);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_client_error() {
            warn!("Request rejected ({}): {}", self.status, self.message);
        }

        let mut body = json!({
            "error": self.message,
            "status": self.status.as_u16(),
        });
        if !self.errors.is_empty() {
            body["errors"] = json!(self.errors);
        }

        (self.status, axum::Json(body)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        let status = match &err {
            StorageError::NotFound { .. } => StatusCode::NOT_FOUND,
            StorageError::Conflict(_) => StatusCode::CONFLICT,
        };
        Self::new(status, err.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::validation(err.errors)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(err) => err.into(),
            ServiceError::Storage(err) => err.into(),
        }
    }
}

/// Wrongly typed fields are a validation failure; a body that is not JSON at
/// all is treated as an unexpected error.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => Self::validation(vec![err.body_text()]),
            JsonRejection::MissingJsonContentType(err) => Self::new(err.status(), err.body_text()),
            other => Self::internal(other.body_text()),
        }
    }
}
