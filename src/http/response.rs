//! Error responses.
//!
//! # Responsibilities
//! - Map dispatch failures to HTTP status codes
//! - Keep internal error details out of response bodies
//!
//! # Design Decisions
//! - Unmatched paths are an expected outcome, logged at debug only
//! - Internal errors are logged at error level and rendered generically

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::routing::NotFound;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {path}")]
    NotFound { path: String },
    #[error("method not allowed")]
    MethodNotAllowed { allow: &'static str },
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<NotFound> for AppError {
    fn from(err: NotFound) -> Self {
        Self::NotFound { path: err.path }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::NotFound { .. } => (status, "Page not found").into_response(),
            Self::MethodNotAllowed { allow } => {
                (status, [(header::ALLOW, allow)], "Method not allowed").into_response()
            }
            Self::Internal { message } => {
                tracing::error!(error = %message, "request failed with internal error");
                (status, "Internal server error").into_response()
            }
        }
    }
}
