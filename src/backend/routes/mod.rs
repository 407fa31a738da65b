//! Route Configuration Module
//!
//! This module configures all HTTP routes for the proxy server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - Task API routes
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use spirited_todo::backend::proxy::TaskForwarder;
//! use spirited_todo::backend::routes::create_router;
//! use spirited_todo::backend::server::AppState;
//!
//! let forwarder = TaskForwarder::new(reqwest::Client::new(), "http://localhost:8000");
//! let router = create_router(AppState::new(forwarder));
//! ```

/// Main router creation
pub mod router;

/// Task API routes
pub mod api_routes;

pub use router::create_router;
