//! Error types for the server and backend client.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::ui::chat::render_error_notice;

/// Crate error type.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request to the chat backend failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid backend URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Chat backend returned an error response.
    #[error("Backend error ({status}): {message}")]
    Backend {
        /// HTTP status code.
        status: u16,
        /// Error body returned by the backend.
        message: String,
    },

    /// Chat backend answered with nothing to show.
    #[error("Backend returned an empty reply")]
    EmptyReply,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// No session with the given ID.
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// Submitted message was blank.
    #[error("Message must not be empty")]
    EmptyMessage,
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status this error maps to when it reaches a handler boundary.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::SessionNotFound(_) => StatusCode::NOT_FOUND,
            Self::EmptyMessage => StatusCode::BAD_REQUEST,
            Self::Http(_) | Self::Backend { .. } | Self::EmptyReply => StatusCode::BAD_GATEWAY,
            Self::InvalidUrl(_) | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(name: "request.failed", error = %self, status = status.as_u16());
        } else {
            tracing::debug!(name: "request.rejected", error = %self, status = status.as_u16());
        }

        (status, Html(render_error_notice(self.to_string()))).into_response()
    }
}
