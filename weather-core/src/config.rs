use std::time::Duration;

use thiserror::Error;

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// OpenWeather current-weather endpoint.
pub const OPENWEATHER_CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Upper bound for a single outbound call, including reading the body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "Environment variable OPENWEATHER_API_KEY is not set.\n\
         Hint: export OPENWEATHER_API_KEY=<your OpenWeather API key> before starting the proxy."
    )]
    MissingApiKey,
}

/// Process-wide configuration, built once at startup and never mutated.
#[derive(Clone)]
pub struct ProxyConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ProxyConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: OPENWEATHER_CURRENT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load config from the process environment. Fails if the API key is absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ProxyConfig::from_env`], but over an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_an_error() {
        let err = ProxyConfig::from_lookup(|_| None).unwrap_err();

        assert_eq!(err, ConfigError::MissingApiKey);
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn blank_api_key_is_treated_as_missing() {
        let err = ProxyConfig::from_lookup(|_| Some("   ".into())).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);
    }

    #[test]
    fn api_key_is_read_and_defaults_applied() {
        let cfg = ProxyConfig::from_lookup(|key| {
            (key == API_KEY_ENV).then(|| "KEY".to_string())
        })
        .expect("config must load");

        assert_eq!(cfg.api_key, "KEY");
        assert_eq!(cfg.base_url, OPENWEATHER_CURRENT_URL);
        assert_eq!(cfg.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn builders_override_base_url_and_timeout() {
        let cfg = ProxyConfig::new("KEY")
            .with_base_url("http://localhost:1234/weather")
            .with_timeout(Duration::from_secs(2));

        assert_eq!(cfg.base_url, "http://localhost:1234/weather");
        assert_eq!(cfg.timeout, Duration::from_secs(2));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let cfg = ProxyConfig::new("SECRET");
        let dbg = format!("{cfg:?}");

        assert!(!dbg.contains("SECRET"));
        assert!(dbg.contains("<redacted>"));
    }
}
