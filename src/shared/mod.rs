//! Shared Module
//!
//! This module contains types that are shared between the proxy server and
//! the task API client. They describe what travels over HTTP: task records,
//! list parameters and the error envelope.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used in
//! both server and client code. All types are designed for serialization and
//! transmission over HTTP.

/// Error codes and the wire error envelope
pub mod error_code;

/// Task resource types
pub mod task;

/// Shared error types
pub mod error;

/// Configuration helpers
pub mod config;

/// Re-export commonly used types for convenience
pub use error_code::{ErrorCode, ErrorEnvelope, ErrorResponse};
pub use task::{
    Priority, SortOrder, Task, TaskCreate, TaskListParams, TaskListResponse, TaskSortBy, TaskUpdate,
};
pub use error::SharedError;
pub use config::ConfigError;
