//! HTTP server configuration.

use std::env;

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Allow any origin, method and header (development)
    pub cors_permissive: bool,
    /// Origins allowed when `cors_permissive` is off
    pub cors_origins: Vec<String>,
}

impl WebConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("WEB_HOST").unwrap_or(defaults.host),
            port: env::var("WEB_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            cors_permissive: env::var("WEB_CORS_PERMISSIVE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cors_permissive),
            cors_origins: env::var("WEB_CORS_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or(defaults.cors_origins),
        }
    }

    /// Socket address string for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_permissive: true,
            cors_origins: Vec::new(),
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}
