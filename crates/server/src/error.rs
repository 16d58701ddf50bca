//! HTTP error mapping.
//!
//! Every failure leaves the server as a JSON body of the form
//! `{"error": "<message>"}` with a status matching the error kind.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use runtime::{RepositoryError, RuntimeError};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Message returned for every unresolved warrior id.
pub const NOT_FOUND_MESSAGE: &str = "Warrior not found";

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Warrior not found")]
    NotFound,

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            ApiError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            ApiError::Conflict(msg) | ApiError::InvalidRequest(msg) => msg.clone(),
            ApiError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl From<RuntimeError> for ApiError {
    fn from(err: RuntimeError) -> Self {
        match err {
            RuntimeError::WarriorNotFound(_) => ApiError::NotFound,
            RuntimeError::Repository(
                e @ (RepositoryError::DuplicateId(_) | RepositoryError::IdSpaceExhausted(_)),
            ) => ApiError::Conflict(e.to_string()),
            RuntimeError::Repository(e @ RepositoryError::LockPoisoned) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::NotFound => debug!(status = status.as_u16(), "Warrior not found"),
            ApiError::Conflict(msg) | ApiError::InvalidRequest(msg) => {
                warn!(status = status.as_u16(), details = %msg, "Request rejected")
            }
            ApiError::Internal(msg) => {
                error!(status = status.as_u16(), details = %msg, "Request failed")
            }
        }

        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
