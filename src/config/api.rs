//! REST API settings for the endpoint prober.

use std::env;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// API base, including the `/api` prefix.
    pub base_url: String,
    /// Per-request timeout; exceeding it fails that request only.
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout_secs: env::var("API_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 10,
        }
    }

    /// Server root without the `/api` prefix; actuator endpoints live there.
    pub fn server_root(&self) -> String {
        let trimmed = self.base_url.trim_end_matches('/');
        trimmed.strip_suffix("/api").unwrap_or(trimmed).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_root_strips_api_prefix() {
        let config = ApiConfig::with_base_url("http://localhost:8080/api");
        assert_eq!(config.server_root(), "http://localhost:8080");
    }

    #[test]
    fn server_root_tolerates_trailing_slash() {
        let config = ApiConfig::with_base_url("http://localhost:8080/api/");
        assert_eq!(config.server_root(), "http://localhost:8080");
    }

    #[test]
    fn server_root_keeps_bare_base() {
        let config = ApiConfig::with_base_url("http://localhost:8080");
        assert_eq!(config.server_root(), "http://localhost:8080");
    }
}
