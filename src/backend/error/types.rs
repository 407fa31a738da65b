/**
 * Proxy Error Types
 *
 * This module defines the errors a proxy handler can end with. Each one
 * maps to exactly one HTTP status and one `ErrorEnvelope`.
 *
 * # Error Categories
 *
 * ## Upstream Errors
 *
 * The backend answered with a non-success status. The body has already been
 * normalized and is relayed with the backend's own status code.
 *
 * ## Transport Errors
 *
 * The backend could not be reached, or it answered with a body that could
 * not be read or decoded. These always surface as 500 with the
 * `INTERNAL_SERVER_ERROR` code, whichever operation was being forwarded.
 *
 * ## Request Errors
 *
 * The inbound request itself was unusable: a non-numeric task id, a body
 * that could not be buffered, an unknown route or an unsupported method.
 * No outbound call is made.
 */
use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::{ErrorCode, ErrorEnvelope};

/// Errors produced while forwarding a task request
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The backend answered with a non-success status
    #[error("Upstream error {status}: {}", .envelope.msg)]
    Upstream {
        /// Status code returned by the backend
        status: StatusCode,
        /// Normalized error body
        envelope: ErrorEnvelope,
    },

    /// Network failure or unreadable backend response
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend reported success with a body that is not JSON
    #[error("Malformed backend response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The `{id}` path segment is not a task id
    #[error("Invalid task id: {0}")]
    InvalidId(String),

    /// The inbound body could not be buffered (too large, aborted)
    #[error("Invalid request body: {message}")]
    InvalidBody {
        /// Status chosen by the body extractor
        status: StatusCode,
        /// Rejection text
        message: String,
    },

    /// No route matched the request
    #[error("Not found")]
    NotFound,

    /// The path exists but not for this method
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ProxyError {
    /// Create an upstream error from a backend status and normalized body
    pub fn upstream(status: StatusCode, envelope: ErrorEnvelope) -> Self {
        Self::Upstream { status, envelope }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Upstream` - The backend's status code
    /// - `Transport`, `MalformedResponse` - 500 Internal Server Error
    /// - `InvalidId` - 400 Bad Request
    /// - `InvalidBody` - The extractor's status (413 for oversized bodies)
    /// - `NotFound` - 404 Not Found
    /// - `MethodNotAllowed` - 405 Method Not Allowed
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Upstream { status, .. } => *status,
            Self::Transport(_) | Self::MalformedResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidId(_) => StatusCode::BAD_REQUEST,
            Self::InvalidBody { status, .. } => *status,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Get the envelope sent to the caller
    pub fn envelope(&self) -> ErrorEnvelope {
        match self {
            Self::Upstream { envelope, .. } => envelope.clone(),
            Self::Transport(_) | Self::MalformedResponse(_) => ErrorEnvelope::internal(),
            Self::InvalidId(_) => ErrorEnvelope::new("Invalid task id", ErrorCode::InvalidInput),
            Self::InvalidBody { message, .. } => {
                ErrorEnvelope::invalid_input(non_empty(message, "Invalid request body"))
            }
            Self::NotFound => ErrorEnvelope::new("Not found", ErrorCode::InvalidInput),
            Self::MethodNotAllowed => {
                ErrorEnvelope::new("Method not allowed", ErrorCode::InvalidInput)
            }
        }
    }
}

fn non_empty(message: &str, default: &str) -> String {
    if message.is_empty() {
        default.to_string()
    } else {
        message.to_string()
    }
}
