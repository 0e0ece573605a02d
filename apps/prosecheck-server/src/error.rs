//! Error types for the ProseCheck server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use correction_engine::{ApplyError, SessionError};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// A single failed request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Server error types
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    #[error("analysis failed: {0}")]
    Oracle(String),

    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    #[error(transparent)]
    Fix(#[from] SessionError),

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl From<ApplyError> for ServerError {
    fn from(err: ApplyError) -> Self {
        ServerError::Fix(SessionError::Apply(err))
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<Vec<FieldError>>,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match self {
            ServerError::Validation(fields) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                "Validation failed".to_string(),
                Some(fields),
            ),
            ServerError::Oracle(msg) => (StatusCode::BAD_GATEWAY, "ORACLE_ERROR", msg, None),
            ServerError::SessionNotFound(id) => (
                StatusCode::NOT_FOUND,
                "SESSION_NOT_FOUND",
                format!("Session '{}' not found", id),
                None,
            ),
            ServerError::Fix(err) => {
                let (status, code) = match &err {
                    SessionError::NotReady => (StatusCode::CONFLICT, "SESSION_NOT_READY"),
                    SessionError::UnknownFinding(_) => (StatusCode::NOT_FOUND, "UNKNOWN_FINDING"),
                    SessionError::Apply(ApplyError::OffsetOutOfRange { .. }) => {
                        (StatusCode::UNPROCESSABLE_ENTITY, "OFFSET_OUT_OF_RANGE")
                    }
                };
                (status, code, err.to_string(), None)
            }
            ServerError::Internal(err) => {
                tracing::error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal error".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
            fields,
        };

        (status, Json(body)).into_response()
    }
}
