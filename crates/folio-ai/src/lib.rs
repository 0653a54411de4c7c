//! AI engine for Folio.
//!
//! Provides the conversation adapter behind the portfolio chat widget:
//! - Gemini streaming client (SSE)
//! - Lazily created chat sessions with client-side history
//! - Reply streams that yield text fragments in arrival order
//! - Transcript bookkeeping for the presentation layer
//! - Token usage tracking

pub mod backend;
pub mod conversation;
pub mod gemini;
pub mod session;
pub mod streaming;
pub mod token_tracker;
pub mod transcript;

#[cfg(test)]
pub(crate) mod testing;

pub use backend::{BackendConnector, ChatBackend, ChunkStream, GenerateChunk, GenerateRequest};
pub use conversation::{
    ApiKeySource, ChatError, Conversation, ReplyStream, DEFAULT_API_KEY_VAR, SERVICE_APOLOGY,
};
pub use gemini::{GeminiClient, GeminiConfig, GeminiConnector};
pub use session::{ChatSession, SessionSettings};
pub use token_tracker::TokenTracker;
pub use transcript::{run_turn, welcome_message, ChatMessage, Transcript, TurnUpdate};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
}

impl From<reqwest::Error> for AiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::NetworkError(e.to_string())
        }
    }
}
