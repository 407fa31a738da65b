//! Proxy Error Module
//!
//! This module defines the errors a proxy handler can return and how they
//! are rendered as HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ProxyError definition and status/envelope mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use spirited_todo::backend::error::ProxyError;
//! use axum::Json;
//!
//! # async fn example() -> Result<Json<serde_json::Value>, ProxyError> {
//! Err(ProxyError::InvalidId("abc".to_string()))
//! # }
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ProxyError;
