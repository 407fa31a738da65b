use crate::shared::config::{normalize_base_url, ConfigError};

/// Default proxy URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Where the task client finds the proxy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration for a proxy base URL
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Read `CLIENT_API_URL`, falling back to the default
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var("CLIENT_API_URL") {
            Ok(url) => Self::new(&url),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the full URL for an API path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
