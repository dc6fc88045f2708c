//! Client configuration

use std::time::Duration;

/// Environment variable holding the registry API base URL
pub const API_URL_ENV: &str = "SOROBAN_REGISTRY_API_URL";

/// Base URL used when the environment does not set one
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Registry client configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryConfig {
    /// Base URL for the registry HTTP API
    pub base_url: String,
    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

impl RegistryConfig {
    /// Config pointing at the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Read the base URL from `SOROBAN_REGISTRY_API_URL`, falling back to
    /// `http://localhost:3001`
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(API_URL_ENV).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    /// Set a per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Base URL without a trailing slash
    pub(crate) fn api_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();
        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_env_value_fallback() {
        assert_eq!(RegistryConfig::from_env_value(None), RegistryConfig::default());
        assert_eq!(
            RegistryConfig::from_env_value(Some("  ".into())),
            RegistryConfig::default()
        );
        assert_eq!(
            RegistryConfig::from_env_value(Some("https://registry.example.org".into())).base_url,
            "https://registry.example.org"
        );
    }

    #[test]
    fn test_api_root_trims_slash() {
        let config = RegistryConfig::new("http://localhost:3001/");
        assert_eq!(config.api_root(), "http://localhost:3001");
    }

    #[test]
    fn test_with_timeout() {
        let config = RegistryConfig::new("http://x").with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
