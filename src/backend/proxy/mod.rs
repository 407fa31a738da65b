//! Task Proxy Module
//!
//! This module relays task CRUD requests to the backend task API and folds
//! every backend failure into the proxy's error envelope.
//!
//! # Module Structure
//!
//! ```text
//! proxy/
//! ├── mod.rs        - Module exports and documentation
//! ├── normalize.rs  - Backend error body → ErrorEnvelope
//! ├── forwarder.rs  - One outbound call per inbound operation
//! └── handlers.rs   - Axum handlers for /api/tasks routes
//! ```
//!
//! # Data Flow
//!
//! ```text
//! client ──► handler ──► TaskForwarder ──► backend /tasks
//!                              │
//!                  non-success ▼
//!                    normalize_backend_error ──► ProxyError::Upstream
//! ```

/// Backend error normalization
pub mod normalize;

/// Outbound request forwarding
pub mod forwarder;

/// HTTP handlers
pub mod handlers;

pub use forwarder::{TaskForwarder, TaskOperation};
pub use normalize::{normalize_backend_error, BackendFailure};
