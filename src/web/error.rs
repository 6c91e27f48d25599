//! Mapping of controller and rendering failures onto HTTP responses.

use crate::todo::services::TodoServiceError;
use crate::view::RenderError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

const INTERNAL_ERROR_BODY: &str = "Internal server error";

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum WebError {
    /// The controller rejected the request or the store failed.
    #[error(transparent)]
    Service(#[from] TodoServiceError),
    /// A template failed to render.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl WebError {
    /// Returns the status code this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Service(TodoServiceError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Service(TodoServiceError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Service(TodoServiceError::Repository(_)) | Self::Render(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Service(TodoServiceError::Validation(err)) => {
                (status, err.to_string()).into_response()
            }
            Self::Service(TodoServiceError::NotFound(operation)) => {
                (status, operation.not_found_message()).into_response()
            }
            Self::Service(TodoServiceError::Repository(err)) => {
                tracing::error!(error = %err, "todo store failure");
                (status, INTERNAL_ERROR_BODY).into_response()
            }
            Self::Render(err) => {
                tracing::error!(error = %err, "todo page rendering failure");
                (status, INTERNAL_ERROR_BODY).into_response()
            }
        }
    }
}
