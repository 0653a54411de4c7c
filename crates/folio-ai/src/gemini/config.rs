//! Gemini API client configuration.

use std::time::Duration;

pub(crate) const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini API client configuration.
#[derive(Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gemini-3-flash-preview".to_string(),
            base_url: GEMINI_API_BASE.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, request: Duration) -> Self {
        self.connect_timeout = connect;
        self.request_timeout = request;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let config = GeminiConfig::new("super-secret");
        let printed = format!("{config:?}");
        assert!(!printed.contains("super-secret"));
        assert!(printed.contains("[REDACTED]"));
        assert!(printed.contains("gemini-3-flash-preview"));
    }

    #[test]
    fn builders_override_defaults() {
        let config = GeminiConfig::new("k")
            .with_model("gemini-2.5-pro")
            .with_base_url("http://localhost:9/models")
            .with_timeouts(Duration::from_secs(1), Duration::from_secs(2))
            .with_api_key("other");
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.base_url, "http://localhost:9/models");
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        assert_eq!(config.request_timeout, Duration::from_secs(2));
        assert_eq!(config.api_key, "other");
    }
}
