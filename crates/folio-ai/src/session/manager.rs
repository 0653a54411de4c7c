//! ChatSession struct and history management.

use std::sync::Arc;

use folio_common::SessionId;

use crate::backend::ChatBackend;
use crate::token_tracker::TokenTracker;
use crate::Message;

/// Fixed per-session generation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub system_instruction: String,
    pub temperature: f64,
    pub max_output_tokens: Option<u32>,
}

impl SessionSettings {
    pub fn new(system_instruction: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            temperature: 0.7,
            max_output_tokens: None,
        }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max: Option<u32>) -> Self {
        self.max_output_tokens = max;
        self
    }
}

/// A conversation with the model service.
pub struct ChatSession {
    pub(super) id: SessionId,
    pub(super) backend: Arc<dyn ChatBackend>,
    pub(super) settings: SessionSettings,
    /// Completed turns, alternating user / assistant.
    pub(super) history: Vec<Message>,
    pub(super) tracker: TokenTracker,
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.id)
            .field("settings", &self.settings)
            .field("history", &self.history.len())
            .finish_non_exhaustive()
    }
}

impl ChatSession {
    pub fn new(backend: Arc<dyn ChatBackend>, settings: SessionSettings) -> Self {
        Self {
            id: SessionId::new(),
            backend,
            settings,
            history: Vec::new(),
            tracker: TokenTracker::new(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Completed turns of this session.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    /// Number of messages in history.
    pub fn message_count(&self) -> usize {
        self.history.len()
    }
}
