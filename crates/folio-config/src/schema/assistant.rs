//! Chat assistant configuration types.

use serde::{Deserialize, Serialize};

/// Base URL of the Generative Language API model collection.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Remote model and credential settings for the chat assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub model: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    /// Reply length cap in tokens (valid range: 1-65536). Unset lets the
    /// service decide.
    pub max_output_tokens: Option<u32>,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    pub base_url: String,
    /// Connect timeout in seconds (valid range: 1-600).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub request_timeout_secs: u32,
    /// Replaces the instruction generated from `[portfolio]`.
    pub system_instruction: Option<String>,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: "gemini-3-flash-preview".into(),
            temperature: 0.7,
            max_output_tokens: None,
            api_key_env: "API_KEY".into(),
            base_url: DEFAULT_GEMINI_BASE_URL.into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 120,
            system_instruction: None,
        }
    }
}
