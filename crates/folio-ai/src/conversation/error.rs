//! Failures at the adapter boundary and the chat text shown for them.

use crate::AiError;

/// Reply shown when the service fails during a turn.
pub const SERVICE_APOLOGY: &str =
    "I'm having trouble connecting to the AI service right now. Please try again in a moment.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// No credential was available; nothing was sent.
    #[error("API key is missing: set the {var} environment variable")]
    MissingCredential { var: String },
    /// Session setup or streaming failed; the session has been discarded.
    #[error("AI service failure: {0}")]
    Service(#[from] AiError),
}

impl ChatError {
    /// Assistant-visible text for this failure.
    pub fn fallback_text(&self) -> String {
        match self {
            Self::MissingCredential { var } => format!(
                "Configuration Error: {var} is missing. Please set the {var} environment variable."
            ),
            Self::Service(_) => SERVICE_APOLOGY.to_string(),
        }
    }
}
