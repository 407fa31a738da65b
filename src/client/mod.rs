//! Task Client Module
//!
//! This module talks to the task proxy over HTTP. It decodes task payloads,
//! maps error envelopes to [`ApiError`], and resolves a display sentence
//! for any failure.
//!
//! # Example
//!
//! ```rust,no_run
//! use spirited_todo::client::{error_text, ClientConfig, TaskApiClient};
//! use spirited_todo::shared::TaskListParams;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TaskApiClient::new(ClientConfig::from_env()?);
//! match client.get_tasks(&TaskListParams::for_page(1, 20)).await {
//!     Ok(page) => println!("{} tasks", page.total),
//!     Err(error) => eprintln!("{}", error_text(&error)),
//! }
//! # Ok(())
//! # }
//! ```

/// Client configuration
pub mod config;

/// Error mapping and display messages
pub mod error;

/// Task API client
pub mod api;

pub use api::TaskApiClient;
pub use config::ClientConfig;
pub use error::{ensure_success, error_text, parse_error_body, ApiError, ClientError};
