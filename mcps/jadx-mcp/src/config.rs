//! Startup configuration for jadx-mcp
//!
//! The only setting is the base URL of the Jadx plugin's HTTP server. It is
//! taken from the first positional CLI argument, falling back to
//! [`DEFAULT_SERVER_URL`], validated once and then never changes.

use thiserror::Error;
use url::Url;

/// Address the Jadx MCP plugin listens on by default
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8085";

/// Errors raised while validating the server URL
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid server URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported scheme '{0}', only http and https are allowed")]
    UnsupportedScheme(String),

    #[error("server URL '{0}' has no host")]
    MissingHost(String),

    #[error("server URL '{0}' must not contain a query, fragment or credentials")]
    UnexpectedComponents(String),
}

/// Immutable configuration handed to the HTTP backend at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    server_url: Url,
}

impl Config {
    /// Build a configuration from an optional CLI argument
    pub fn from_arg(arg: Option<&str>) -> Result<Self, ConfigError> {
        Self::new(arg.unwrap_or(DEFAULT_SERVER_URL))
    }

    /// Parse and validate a base URL
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let mut url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
            url: trimmed.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_string()));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(ConfigError::MissingHost(trimmed.to_string()));
        }
        if url.query().is_some()
            || url.fragment().is_some()
            || !url.username().is_empty()
            || url.password().is_some()
        {
            return Err(ConfigError::UnexpectedComponents(trimmed.to_string()));
        }

        // Keep any path prefix but drop the trailing slash so endpoints join cleanly
        let path = url.path().trim_end_matches('/').to_string();
        url.set_path(&path);

        Ok(Self { server_url: url })
    }

    /// Base URL without a trailing slash
    pub fn server_url(&self) -> &str {
        self.server_url.as_str().trim_end_matches('/')
    }

    /// Endpoint receiving tool invocations
    pub fn invoke_url(&self) -> String {
        format!("{}/invoke", self.server_url())
    }

    /// Endpoint describing the available tools
    pub fn tools_url(&self) -> String {
        format!("{}/tools", self.server_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let config = Config::from_arg(None).unwrap();
        assert_eq!(config.server_url(), "http://localhost:8085");
        assert_eq!(config, Config::new(DEFAULT_SERVER_URL).unwrap());
    }

    #[test]
    fn test_endpoints() {
        let config = Config::new("http://127.0.0.1:9000/").unwrap();
        assert_eq!(config.invoke_url(), "http://127.0.0.1:9000/invoke");
        assert_eq!(config.tools_url(), "http://127.0.0.1:9000/tools");
    }

    #[test]
    fn test_path_prefix_kept() {
        let config = Config::new("http://jadx.local:8085/mcp/").unwrap();
        assert_eq!(config.invoke_url(), "http://jadx.local:8085/mcp/invoke");
    }

    #[test]
    fn test_rejects_bad_scheme() {
        let err = Config::new("ftp://localhost:8085").unwrap_err();
        assert_eq!(err, ConfigError::UnsupportedScheme("ftp".to_string()));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            Config::new("not a url"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_query() {
        assert!(matches!(
            Config::new("http://localhost:8085/?debug=1"),
            Err(ConfigError::UnexpectedComponents(_))
        ));
    }
}
