//! API error types with structured JSON responses.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::core_state::CoreError;
use crate::flow::FlowError;
use crate::store::StoreError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Session required")]
    NoSession,
    #[error("Please login first")]
    NotLoggedIn,
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Username already exists")]
    UsernameTaken,
    #[error("Submission still being recorded")]
    SubmissionPending,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::NoSession => (
                StatusCode::UNAUTHORIZED,
                "SESSION_REQUIRED",
                "Unknown or missing session, start a new one".to_string(),
            ),
            ApiError::NotLoggedIn => (
                StatusCode::UNAUTHORIZED,
                "LOGIN_REQUIRED",
                "Please login first".to_string(),
            ),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid username or password".to_string(),
            ),
            ApiError::UsernameTaken => (
                StatusCode::CONFLICT,
                "USERNAME_TAKEN",
                "Username already exists".to_string(),
            ),
            ApiError::SubmissionPending => (
                StatusCode::CONFLICT,
                "SUBMISSION_PENDING",
                "Submission is still being recorded, retry shortly".to_string(),
            ),
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail.clone()),
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownSession => ApiError::NoSession,
            CoreError::LockPoisoned => ApiError::Internal("lock poisoned".into()),
            CoreError::Store(StoreError::UnknownUser(name)) => {
                ApiError::NotFound(format!("User not found: {name}"))
            }
            CoreError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<FlowError> for ApiError {
    fn from(err: FlowError) -> Self {
        match err {
            FlowError::UsernameTaken => ApiError::UsernameTaken,
            FlowError::InvalidCredentials => ApiError::InvalidCredentials,
            FlowError::NotLoggedIn => ApiError::NotLoggedIn,
            FlowError::SubmissionPending => ApiError::SubmissionPending,
            e @ (FlowError::EmptyUsername | FlowError::NoSymptoms | FlowError::OutOfRange { .. }) => {
                ApiError::BadRequest(e.to_string())
            }
            FlowError::Core(e) => e.into(),
            FlowError::Report(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
