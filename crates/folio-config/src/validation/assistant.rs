//! Assistant configuration validation (model, temperature, limits, timeouts).

use crate::schema::FolioConfig;

use super::helpers::{check_non_empty, check_range};

pub(crate) fn validate_assistant(errors: &mut Vec<String>, config: &FolioConfig) {
    let assistant = &config.assistant;

    check_non_empty(errors, "assistant.model", &assistant.model);
    check_non_empty(errors, "assistant.api_key_env", &assistant.api_key_env);
    check_non_empty(errors, "assistant.base_url", &assistant.base_url);
    check_range(errors, "assistant.temperature", assistant.temperature, 0.0..=2.0);
    if let Some(max) = assistant.max_output_tokens {
        check_range(errors, "assistant.max_output_tokens", max, 1..=65536);
    }
    check_range(
        errors,
        "assistant.connect_timeout_secs",
        assistant.connect_timeout_secs,
        1..=600,
    );
    check_range(
        errors,
        "assistant.request_timeout_secs",
        assistant.request_timeout_secs,
        1..=600,
    );
}
