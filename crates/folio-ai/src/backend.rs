//! Transport seam between the conversation adapter and a model service.

use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::Stream;

use crate::{AiError, Message, TokenUsage};

/// Stream of decoded reply chunks for one turn.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<GenerateChunk, AiError>> + Send>>;

/// Everything the service needs to produce one streamed reply.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub system_instruction: String,
    /// Prior turns followed by the new user message.
    pub contents: Vec<Message>,
    pub temperature: f64,
    pub max_output_tokens: Option<u32>,
}

/// One decoded response object from the stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateChunk {
    /// Text carried by this chunk; `None` when the chunk has no text payload.
    pub text: Option<String>,
    /// Cumulative usage reported so far, when present.
    pub usage: Option<TokenUsage>,
}

impl GenerateChunk {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            usage: None,
        }
    }
}

#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Start a streamed generation. Errors before the first byte of the
    /// reply are returned here; later ones arrive through the stream.
    async fn stream_generate(&self, request: &GenerateRequest) -> Result<ChunkStream, AiError>;
}

/// Creates a backend bound to a credential.
pub trait BackendConnector: Send + Sync {
    fn connect(&self, api_key: &str) -> Result<Arc<dyn ChatBackend>, AiError>;
}
