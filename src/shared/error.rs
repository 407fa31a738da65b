//! Shared Error Types
//!
//! This module defines error types that are shared between the proxy server
//! and the task API client.
//!
//! # Error Categories
//!
//! - `ValidationError` - Task payload validation failures
//!
//! # Usage
//!
//! ```rust
//! use spirited_todo::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title is required");
//! ```
use thiserror::Error;

/// Shared error types that can occur on both sides of the proxy
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
