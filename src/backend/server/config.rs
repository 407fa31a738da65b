/**
 * Server Configuration
 *
 * This module loads the proxy configuration: where the backend task API
 * lives and which address the proxy listens on.
 *
 * # Configuration Sources
 *
 * Sources are applied in order, later ones overriding earlier ones:
 *
 * 1. Built-in defaults (`http://localhost:8000`, `0.0.0.0:3000`)
 * 2. A TOML file named by `TODO_PROXY_CONFIG`, if set
 * 3. Environment variables `API_BASE` and `SERVER_PORT`
 *
 * # Example File
 *
 * ```toml
 * backend_url = "http://api:8000"
 * bind_addr = "127.0.0.1:3000"
 * ```
 */
use std::net::SocketAddr;
use std::path::Path;

use serde::Deserialize;

use crate::shared::config::{normalize_base_url, ConfigError};

/// Default backend task API location
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Environment variable naming an optional TOML config file
pub const CONFIG_PATH_ENV: &str = "TODO_PROXY_CONFIG";

/// Validated proxy configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Backend base URL, without trailing slash
    pub backend_url: String,
    /// Address the proxy listens on
    pub bind_addr: SocketAddr,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}

impl ProxyConfig {
    /// Create a new ProxyConfigBuilder
    pub fn builder() -> ProxyConfigBuilder {
        ProxyConfigBuilder::default()
    }

    /// Load configuration from the optional file and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            tracing::info!("Loading proxy configuration from {}", path);
            builder = builder.merge_file(Path::new(&path))?;
        }
        builder.merge_env()?.build()
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    backend_url: Option<String>,
    bind_addr: Option<String>,
}

/// Builder for ProxyConfig
#[derive(Debug, Default)]
pub struct ProxyConfigBuilder {
    backend_url: Option<String>,
    bind_addr: Option<String>,
    port: Option<u16>,
}

impl ProxyConfigBuilder {
    /// Set the backend base URL
    pub fn backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = Some(url.into());
        self
    }

    /// Set the full listen address
    pub fn bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.bind_addr = Some(addr.into());
        self
    }

    /// Override only the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Apply values from a TOML file
    pub fn merge_file(self, path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: display.clone(),
            source,
        })?;
        self.merge_toml(&contents, &display)
    }

    /// Apply values from TOML text; `origin` names the source in errors
    pub fn merge_toml(mut self, contents: &str, origin: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        if file.backend_url.is_some() {
            self.backend_url = file.backend_url;
        }
        if file.bind_addr.is_some() {
            self.bind_addr = file.bind_addr;
        }
        Ok(self)
    }

    /// Apply `API_BASE` and `SERVER_PORT` from the environment
    pub fn merge_env(mut self) -> Result<Self, ConfigError> {
        if let Ok(url) = std::env::var("API_BASE") {
            self.backend_url = Some(url);
        }
        if let Ok(port) = std::env::var("SERVER_PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidAddress(format!("SERVER_PORT={port}: {e}")))?;
            self.port = Some(port);
        }
        Ok(self)
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<ProxyConfig, ConfigError> {
        let backend_url =
            normalize_base_url(self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL))?;

        let raw_addr = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        let mut bind_addr: SocketAddr = raw_addr
            .parse()
            .map_err(|e| ConfigError::InvalidAddress(format!("{raw_addr}: {e}")))?;
        if let Some(port) = self.port {
            bind_addr.set_port(port);
        }

        Ok(ProxyConfig {
            backend_url,
            bind_addr,
        })
    }
}
