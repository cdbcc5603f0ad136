//! Client configuration.
//!
//! The API key is the only required value. Everything else has a default
//! that talks to the production service with no local timeout.

use std::fmt;
use std::time::Duration;

use crate::error::{MemError, Result};

/// Production API root. Endpoint paths are appended to this.
pub const DEFAULT_BASE_URL: &str = "https://api.mem.ai/v0";

pub const ENV_API_KEY: &str = "MEM_API_KEY";
pub const ENV_BASE_URL: &str = "MEM_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "MEM_TIMEOUT_SECS";

#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    /// Whole-request timeout. `None` waits as long as the transport does.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read `MEM_API_KEY`, `MEM_BASE_URL` and `MEM_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup(ENV_API_KEY)
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| MemError::Configuration(format!("{ENV_API_KEY} not set")))?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|u| !u.is_empty()) {
            config = config.with_base_url(base_url);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                MemError::Configuration(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {raw:?}"))
            })?;
            if secs == 0 {
                return Err(MemError::Configuration(format!("{ENV_TIMEOUT_SECS} must be positive")));
            }
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

// Keeps the key out of logs and panic messages.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup<'a>(vars: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn new_uses_production_defaults() {
        let config = ClientConfig::new("k");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn from_env_requires_api_key() {
        let vars = HashMap::new();
        let err = ClientConfig::from_lookup(lookup(&vars)).unwrap_err();
        assert!(matches!(err, MemError::Configuration(_)));

        let vars = HashMap::from([(ENV_API_KEY, "  ")]);
        assert!(ClientConfig::from_lookup(lookup(&vars)).is_err());
    }

    #[test]
    fn from_env_reads_all_values() {
        let vars = HashMap::from([
            (ENV_API_KEY, "secret"),
            (ENV_BASE_URL, "http://127.0.0.1:3000/v0"),
            (ENV_TIMEOUT_SECS, "15"),
        ]);
        let config = ClientConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, "http://127.0.0.1:3000/v0");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn from_env_rejects_bad_timeout() {
        for bad in ["abc", "0", "-3"] {
            let vars = HashMap::from([(ENV_API_KEY, "secret"), (ENV_TIMEOUT_SECS, bad)]);
            let err = ClientConfig::from_lookup(lookup(&vars)).unwrap_err();
            assert!(matches!(err, MemError::Configuration(_)), "{bad}");
        }
    }

    #[test]
    fn debug_redacts_api_key() {
        let rendered = format!("{:?}", ClientConfig::new("super-secret"));
        assert!(!rendered.contains("super-secret"));
    }
}
