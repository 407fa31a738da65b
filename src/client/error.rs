//! Client Error Mapping
//!
//! This module turns proxy failures into typed errors and typed errors into
//! sentences fit for display.
//!
//! # Mapping
//!
//! [`ensure_success`] passes a 2xx response through. Any other response is
//! read as an error body and becomes an [`ApiError`]:
//!
//! | Body | Result |
//! |---|---|
//! | `{"error":{"msg":m,"error_code":c}}` | `ApiError { m, c }` |
//! | `{"error":"text"}` | `ApiError { "text", INVALID_INPUT }` |
//! | anything else | `ApiError { fallback, INVALID_INPUT }` |
//!
//! # Display Messages
//!
//! [`ApiError::user_message`] and [`error_text`] always return a non-empty
//! sentence, whatever the code.
use reqwest::Response;
use serde_json::Value;
use thiserror::Error;

use crate::shared::{ErrorCode, ErrorEnvelope, SharedError};

const INVALID_INPUT_TEXT: &str = "Invalid input.";
const UNEXPECTED_TEXT: &str = "An unexpected error occurred.";

/// A classified failure reported by the proxy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Message reported by the proxy, or the operation's fallback
    pub message: String,
    /// Classified failure kind
    pub error_code: ErrorCode,
}

impl ApiError {
    pub fn new(message: impl Into<String>, error_code: ErrorCode) -> Self {
        Self {
            message: message.into(),
            error_code,
        }
    }

    /// The sentence to show for this error
    pub fn user_message(&self) -> String {
        match &self.error_code {
            ErrorCode::HighPriorityLimit => {
                "You cannot create more than 5 high priority tasks.".to_string()
            }
            ErrorCode::TaskNotFound => "The requested task was not found.".to_string(),
            ErrorCode::InvalidInput => non_empty_or(&self.message, INVALID_INPUT_TEXT),
            ErrorCode::InternalServerError => {
                "A server error occurred. Please try again later.".to_string()
            }
            ErrorCode::UnknownError => "An unknown error occurred.".to_string(),
            ErrorCode::Other(_) => non_empty_or(&self.message, UNEXPECTED_TEXT),
        }
    }
}

impl From<ErrorEnvelope> for ApiError {
    fn from(envelope: ErrorEnvelope) -> Self {
        Self::new(envelope.msg, envelope.error_code)
    }
}

impl From<SharedError> for ApiError {
    fn from(error: SharedError) -> Self {
        let SharedError::ValidationError { message, .. } = error;
        Self::new(message, ErrorCode::InvalidInput)
    }
}

/// Any failure of a task client call
#[derive(Debug, Error)]
pub enum ClientError {
    /// The proxy answered with an error envelope
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The proxy could not be reached or answered with an undecodable body
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// The classified code, if the proxy supplied one
    pub fn error_code(&self) -> Option<&ErrorCode> {
        match self {
            Self::Api(error) => Some(&error.error_code),
            Self::Transport(_) => None,
        }
    }
}

/// The sentence to show for any client failure
pub fn error_text(error: &ClientError) -> String {
    match error {
        ClientError::Api(error) => error.user_message(),
        ClientError::Transport(error) => non_empty_or(&error.to_string(), UNEXPECTED_TEXT),
    }
}

/// Pass a success response through, or read its body into an `ApiError`
pub async fn ensure_success(response: Response, fallback: &str) -> Result<Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.bytes().await.unwrap_or_default();
    let error = parse_error_body(&body, fallback);
    tracing::debug!("Proxy returned {}: {} ({})", status, error.message, error.error_code);
    Err(error)
}

/// Classify a proxy error body
pub fn parse_error_body(body: &[u8], fallback: &str) -> ApiError {
    let error = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("error").cloned());

    match error {
        Some(Value::Object(fields)) => {
            let msg = fields.get("msg").and_then(Value::as_str).unwrap_or_default();
            let code = fields.get("error_code").and_then(Value::as_str).unwrap_or_default();
            if msg.is_empty() || code.is_empty() {
                ApiError::new(fallback, ErrorCode::InvalidInput)
            } else {
                ApiError::new(msg, ErrorCode::from(code))
            }
        }
        Some(Value::String(message)) if !message.is_empty() => {
            ApiError::new(message, ErrorCode::InvalidInput)
        }
        _ => ApiError::new(fallback, ErrorCode::InvalidInput),
    }
}

fn non_empty_or(message: &str, default: &str) -> String {
    if message.is_empty() {
        default.to_string()
    } else {
        message.to_string()
    }
}
