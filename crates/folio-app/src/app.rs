//! Wires configuration into a ready-to-use conversation.

use std::sync::Arc;
use std::time::Duration;

use folio_ai::{ApiKeySource, Conversation, GeminiConfig, GeminiConnector, SessionSettings};
use folio_config::FolioConfig;

/// Client template for every session; the key is filled in at connect time.
pub fn gemini_template(config: &FolioConfig) -> GeminiConfig {
    let assistant = &config.assistant;
    GeminiConfig::new(String::new())
        .with_model(assistant.model.clone())
        .with_base_url(assistant.base_url.trim_end_matches('/'))
        .with_timeouts(
            Duration::from_secs(u64::from(assistant.connect_timeout_secs)),
            Duration::from_secs(u64::from(assistant.request_timeout_secs)),
        )
}

pub fn session_settings(config: &FolioConfig) -> SessionSettings {
    SessionSettings::new(folio_config::effective_instruction(config))
        .with_temperature(config.assistant.temperature)
        .with_max_output_tokens(config.assistant.max_output_tokens)
}

pub fn build_conversation(config: &FolioConfig) -> Conversation {
    Conversation::new(
        Arc::new(GeminiConnector::new(gemini_template(config))),
        ApiKeySource::Env(config.assistant.api_key_env.clone()),
        session_settings(config),
    )
}
