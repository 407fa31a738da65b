//! Backend Module
//!
//! This module contains the task proxy server. It sits between the task
//! client and the backend task API, forwarding CRUD requests and folding
//! every backend failure into one error envelope.
//!
//! This module is only compiled when the `ssr` feature is enabled (it is on
//! by default).
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`proxy`** - Normalizer, forwarder and task handlers
//! - **`error`** - Proxy error type and its HTTP rendering
//!
//! # State Management
//!
//! Requests are handled independently. `AppState` holds only the
//! `TaskForwarder`, which is cloned into each handler; there are no locks
//! and nothing is cached between requests.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ProxyError>`. Every error renders as
//!
//! ```json
//! { "error": { "msg": "...", "error_code": "..." } }
//! ```
//!
//! with the backend's status for upstream failures and 500 for transport
//! failures.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Task request forwarding
pub mod proxy;

/// Proxy error types
pub mod error;

pub use error::ProxyError;
pub use server::{create_app, ProxyConfig};
