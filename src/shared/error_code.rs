//! Error Taxonomy
//!
//! This module defines the error codes the task API can signal and the
//! envelope every failed proxy call carries over the wire.
//!
//! # Wire Format
//!
//! Every non-2xx response from the proxy has this body:
//!
//! ```json
//! {
//!   "error": {
//!     "msg": "Task not found",
//!     "error_code": "TASK_NOT_FOUND"
//!   }
//! }
//! ```
//!
//! # Forward Compatibility
//!
//! The backend may grow new codes. An unrecognized code deserializes to
//! [`ErrorCode::Other`] with its original text, so it survives a round trip
//! through the proxy. Message resolution treats it as the default branch.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Symbolic error kinds shared by the backend, the proxy and the client
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Malformed or unrecognized input, or an unparseable upstream error
    InvalidInput,
    /// The referenced task does not exist upstream
    TaskNotFound,
    /// Business rule rejection: too many high priority tasks
    HighPriorityLimit,
    /// Backend-side or transport failure
    InternalServerError,
    /// Explicit catch-all the backend uses when it declines to classify
    UnknownError,
    /// A code this build does not know about
    Other(String),
}

impl ErrorCode {
    /// Every code this build knows by name
    pub const KNOWN: [ErrorCode; 5] = [
        ErrorCode::InvalidInput,
        ErrorCode::TaskNotFound,
        ErrorCode::HighPriorityLimit,
        ErrorCode::InternalServerError,
        ErrorCode::UnknownError,
    ];

    /// The symbolic string used on the wire
    pub fn as_str(&self) -> &str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::HighPriorityLimit => "HIGH_PRIORITY_LIMIT",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::Other(code) => code,
        }
    }

    /// Whether this is one of the named codes
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        match code {
            "INVALID_INPUT" => Self::InvalidInput,
            "TASK_NOT_FOUND" => Self::TaskNotFound,
            "HIGH_PRIORITY_LIMIT" => Self::HighPriorityLimit,
            "INTERNAL_SERVER_ERROR" => Self::InternalServerError,
            "UNKNOWN_ERROR" => Self::UnknownError,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        match ErrorCode::from(code.as_str()) {
            Self::Other(_) => Self::Other(code),
            known => known,
        }
    }
}

impl FromStr for ErrorCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ErrorCode::from)
    }
}

/// The `{msg, error_code}` pair describing one failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Human-readable message
    pub msg: String,
    /// Classified error kind
    pub error_code: ErrorCode,
}

impl ErrorEnvelope {
    /// Create a new envelope
    pub fn new(msg: impl Into<String>, error_code: ErrorCode) -> Self {
        Self {
            msg: msg.into(),
            error_code,
        }
    }

    /// Envelope for input the proxy could not classify any further
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(msg, ErrorCode::InvalidInput)
    }

    /// Envelope for a failure while talking to the backend
    pub fn internal() -> Self {
        Self::new("Internal server error", ErrorCode::InternalServerError)
    }
}

/// Body of every non-2xx proxy response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The classified failure
    pub error: ErrorEnvelope,
}

impl From<ErrorEnvelope> for ErrorResponse {
    fn from(error: ErrorEnvelope) -> Self {
        Self { error }
    }
}
