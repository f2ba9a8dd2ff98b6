//! HTTP server configuration module

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Frontend origin allowed by CORS
    #[serde(default = "default_frontend_url")]
    pub frontend_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8000,
            frontend_url: default_frontend_url(),
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .unwrap_or(8000);
        let frontend_url = std::env::var("FRONTEND_URL").unwrap_or_else(|_| default_frontend_url());

        Self {
            host,
            port,
            frontend_url,
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_frontend_url() -> String {
    String::from("http://localhost:5173")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.frontend_url, "http://localhost:5173");
    }

    #[test]
    fn test_bind_address_format() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9090,
            frontend_url: default_frontend_url(),
        };
        assert_eq!(config.bind_address(), "127.0.0.1:9090");
    }
}
