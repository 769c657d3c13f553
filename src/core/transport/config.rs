//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Default request body cap (10 MB).
pub const DEFAULT_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,

    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
}

fn default_port() -> u16 {
    3333
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_cors() -> bool {
    true
}

fn default_body_limit() -> usize {
    DEFAULT_BODY_LIMIT
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            enable_cors: default_cors(),
            body_limit: default_body_limit(),
        }
    }
}

impl HttpConfig {
    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base URL used in startup logs.
    pub fn public_url(&self) -> String {
        let host = match self.host.as_str() {
            "0.0.0.0" | "::" | "[::]" => "localhost",
            host => host,
        };
        format!("http://{}:{}", host, self.port)
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        format!(
            "HTTP on {} (CORS {}, body limit {} bytes)",
            self.address(),
            if self.enable_cors { "enabled" } else { "disabled" },
            self.body_limit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HttpConfig::default();
        assert_eq!(config.port, 3333);
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.enable_cors);
        assert_eq!(config.body_limit, 10 * 1024 * 1024);
    }

    #[test]
    fn test_public_url_maps_wildcard_to_localhost() {
        assert_eq!(HttpConfig::default().public_url(), "http://localhost:3333");
        assert_eq!(
            HttpConfig {
                port: 8080,
                host: "127.0.0.1".to_string(),
                ..Default::default()
            }
            .public_url(),
            "http://127.0.0.1:8080"
        );
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: HttpConfig = serde_json::from_str(r#"{"port": 4000}"#).unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.body_limit, DEFAULT_BODY_LIMIT);
    }
}
