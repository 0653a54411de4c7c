//! Gemini API client struct, request building, and chunk decoding.

use crate::backend::{GenerateChunk, GenerateRequest};
use crate::{AiError, Role, TokenUsage};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub(crate) fn stream_url(&self) -> String {
        format!(
            "{}/{}:streamGenerateContent?alt=sse",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, request: &GenerateRequest) -> serde_json::Value {
        let contents: Vec<_> = request
            .contents
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{ "text": msg.content }]
                })
            })
            .collect();

        let mut generation_config = serde_json::json!({
            "temperature": request.temperature,
        });
        if let Some(max) = request.max_output_tokens {
            generation_config["maxOutputTokens"] = serde_json::json!(max);
        }

        let mut body = serde_json::json!({
            "contents": contents,
            "generationConfig": generation_config,
        });

        if !request.system_instruction.is_empty() {
            body["systemInstruction"] = serde_json::json!({
                "parts": [{ "text": request.system_instruction }]
            });
        }

        body
    }
}

/// Decode one SSE `data:` payload into a chunk.
///
/// Text from every candidate part is concatenated; a payload without text
/// yields `text: None`. An `error` object from the service is an error.
pub(crate) fn parse_chunk(data: &str) -> Result<GenerateChunk, AiError> {
    let json: serde_json::Value =
        serde_json::from_str(data).map_err(|e| AiError::ParseError(e.to_string()))?;

    if let Some(err) = json.get("error") {
        let message = err["message"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string());
        return Err(AiError::ApiError(message));
    }

    let mut text = String::new();
    if let Some(candidates) = json["candidates"].as_array() {
        for candidate in candidates {
            if let Some(parts) = candidate["content"]["parts"].as_array() {
                for part in parts {
                    if let Some(t) = part["text"].as_str() {
                        text.push_str(t);
                    }
                }
            }
        }
    }

    let usage = json.get("usageMetadata").map(|meta| TokenUsage {
        input_tokens: meta["promptTokenCount"].as_u64().unwrap_or(0),
        output_tokens: meta["candidatesTokenCount"].as_u64().unwrap_or(0),
    });

    Ok(GenerateChunk {
        text: (!text.is_empty()).then_some(text),
        usage,
    })
}
