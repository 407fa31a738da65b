//! Spirited Todo - Task Proxy and Client
//!
//! This library provides the HTTP plumbing of the Spirited Todo front end: a
//! proxy server that relays task CRUD requests to the backend task API, and a
//! client that calls the proxy and turns every failure into a classified,
//! displayable error.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared by proxy and client
//!   - Task records and list parameters
//!   - Error codes and the `{ "error": { msg, error_code } }` envelope
//!   - Shared error and configuration helpers
//!
//! - **`backend`** - Proxy server (only compiled with `ssr` feature)
//!   - Axum routes for `/api/tasks` and `/api/tasks/{id}`
//!   - Backend error normalization
//!   - Configuration and startup
//!
//! - **`client`** - Task API client
//!   - Typed async calls for the five task operations
//!   - Error envelope mapping and display messages
//!
//! # Error Pipeline
//!
//! ```text
//! backend ─► normalize_backend_error ─► ProxyError ─► HTTP
//!        ─► ensure_success ─► ApiError ─► ApiError::user_message
//! ```
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the `backend` module and the
//!   `todo-proxy` binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use spirited_todo::backend::server::{create_app, ProxyConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProxyConfig::load()?;
//! let app = create_app(&config);
//! # Ok(())
//! # }
//! ```

/// Shared types and data structures
pub mod shared;

/// Task proxy server
#[cfg(feature = "ssr")]
pub mod backend;

/// Task API client
pub mod client;
