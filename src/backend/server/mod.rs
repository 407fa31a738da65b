//! Server Module
//!
//! This module contains the code that configures and starts the proxy's
//! Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (defaults, TOML file, env)
//! └── init.rs         - App creation and serving
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ProxyConfig::load()`
//! 2. **State Creation**: a `TaskForwarder` around a shared `reqwest::Client`
//! 3. **Router Creation**: task routes, fallback and request tracing
//!
//! # Example
//!
//! ```rust,no_run
//! use spirited_todo::backend::server::{create_app, ProxyConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ProxyConfig::load()?;
//! let app = create_app(&config);
//! let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ProxyConfig, ProxyConfigBuilder};
pub use init::{create_app, serve};
pub use state::AppState;
