//! Configuration helpers shared by the proxy and the client
//!
//! Both sides are configured with a base URL of the service they talk to.

use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Validate an http(s) base URL and strip any trailing slash
///
/// Paths are appended to the result with `format!("{base}{path}")`.
pub fn normalize_base_url(url: &str) -> Result<String, ConfigError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| ConfigError::InvalidUrl(format!("{url}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl(format!("{url}: scheme must be http or https")));
    }
    Ok(url.trim_end_matches('/').to_string())
}
