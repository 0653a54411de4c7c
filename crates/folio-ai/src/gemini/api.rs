//! ChatBackend implementation for GeminiClient (streaming) and its connector.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::StreamExt;
use tracing::debug;

use crate::backend::{BackendConnector, ChatBackend, ChunkStream, GenerateRequest};
use crate::streaming::sse_events;
use crate::AiError;

use super::client::{parse_chunk, GeminiClient};
use super::config::GeminiConfig;

#[async_trait]
impl ChatBackend for GeminiClient {
    async fn stream_generate(&self, request: &GenerateRequest) -> Result<ChunkStream, AiError> {
        let body = self.build_request_body(request);
        let url = self.stream_url();

        debug!(
            model = %self.config.model,
            turns = request.contents.len(),
            "Gemini API streaming request"
        );

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(format!("HTTP {status}: {text}")));
        }

        let chunks = sse_events(Box::pin(response.bytes_stream()))
            .map(|event| event.and_then(|event| parse_chunk(&event.data)));

        Ok(Box::pin(chunks))
    }
}

/// Builds a [`GeminiClient`] for a credential from a shared template.
#[derive(Debug, Clone)]
pub struct GeminiConnector {
    template: GeminiConfig,
}

impl GeminiConnector {
    /// `template.api_key` is ignored; the key passed to `connect` is used.
    pub fn new(template: GeminiConfig) -> Self {
        Self { template }
    }
}

impl BackendConnector for GeminiConnector {
    fn connect(&self, api_key: &str) -> Result<Arc<dyn ChatBackend>, AiError> {
        let client = GeminiClient::new(self.template.clone().with_api_key(api_key))?;
        Ok(Arc::new(client))
    }
}
