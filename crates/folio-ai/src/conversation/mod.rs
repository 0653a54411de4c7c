//! The conversation adapter.
//!
//! [`Conversation`] owns at most one [`ChatSession`], creates it (and the
//! backend behind it) on the first turn that has a credential, and hands
//! each reply back as a [`ReplyStream`] of text fragments. Any failure
//! drops the session so the next turn starts from scratch.
//!
//! A reply stream mutably borrows its conversation, so a second turn
//! cannot begin until the first stream is dropped.

mod credential;
mod error;


pub use credential::{ApiKeySource, DEFAULT_API_KEY_VAR};
pub use error::{ChatError, SERVICE_APOLOGY};

use std::pin::Pin;
use std::sync::Arc;

use folio_common::SessionId;
use futures_util::{Stream, StreamExt};
use tracing::{debug, error, info, warn};

use crate::backend::BackendConnector;
use crate::session::{ChatSession, SessionSettings};
use crate::{AiError, TokenUsage};

/// Fragments of one reply, in arrival order.
///
/// Ends after the last fragment, or after a single `Err` if the turn
/// failed mid-stream. Dropping it early abandons the turn: nothing is
/// added to the session history and the session is kept.
pub type ReplyStream<'a> = Pin<Box<dyn Stream<Item = Result<String, ChatError>> + Send + 'a>>;

/// Owner of the single chat session behind the widget.
pub struct Conversation {
    connector: Arc<dyn BackendConnector>,
    api_key: ApiKeySource,
    settings: SessionSettings,
    session: Option<ChatSession>,
    sessions_started: u64,
}

impl std::fmt::Debug for Conversation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conversation")
            .field("api_key", &self.api_key)
            .field("settings", &self.settings)
            .field("session", &self.session)
            .field("sessions_started", &self.sessions_started)
            .finish_non_exhaustive()
    }
}

impl Conversation {
    pub fn new(
        connector: Arc<dyn BackendConnector>,
        api_key: ApiKeySource,
        settings: SessionSettings,
    ) -> Self {
        Self {
            connector,
            api_key,
            settings,
            session: None,
            sessions_started: 0,
        }
    }

    /// Send one user message and stream the reply.
    ///
    /// Returns [`ChatError::MissingCredential`] without touching the network
    /// when no key is available, and [`ChatError::Service`] when the session
    /// cannot be created or the request is rejected before streaming. In the
    /// latter case the session is discarded.
    pub async fn send_message(&mut self, text: &str) -> Result<ReplyStream<'_>, ChatError> {
        let Some(api_key) = self.api_key.resolve() else {
            let var = self.api_key.var_name().to_string();
            error!(var = %var, "API key is missing");
            return Err(ChatError::MissingCredential { var });
        };

        let chunks = match self.start_turn(&api_key, text).await {
            Ok(chunks) => chunks,
            Err(e) => {
                warn!("AI interaction failed: {e}; resetting session");
                self.session = None;
                return Err(ChatError::Service(e));
            }
        };

        let slot = &mut self.session;
        let user_message = text.to_string();

        let stream = async_stream::stream! {
            let mut chunks = chunks;
            let mut reply = String::new();
            let mut usage: Option<TokenUsage> = None;

            while let Some(item) = chunks.next().await {
                match item {
                    Ok(chunk) => {
                        if chunk.usage.is_some() {
                            usage = chunk.usage;
                        }
                        match chunk.text {
                            Some(fragment) if !fragment.is_empty() => {
                                reply.push_str(&fragment);
                                yield Ok(fragment);
                            }
                            _ => {}
                        }
                    }
                    Err(e) => {
                        warn!("AI stream failed: {e}; resetting session");
                        *slot = None;
                        yield Err(ChatError::Service(e));
                        return;
                    }
                }
            }

            if let Some(session) = slot.as_mut() {
                // Empty text parts are rejected by the service.
                if reply.is_empty() {
                    debug!(session = %session.id(), "Turn produced no text; not recorded");
                } else {
                    debug!(session = %session.id(), chars = reply.len(), "Turn complete");
                    session.commit_turn(user_message, reply, usage);
                }
            }
        };

        Ok(Box::pin(stream))
    }

    async fn start_turn(
        &mut self,
        api_key: &str,
        text: &str,
    ) -> Result<crate::backend::ChunkStream, AiError> {
        if self.session.is_none() {
            let backend = self.connector.connect(api_key)?;
            let session = ChatSession::new(backend, self.settings.clone());
            self.sessions_started += 1;
            info!(session = %session.id(), "Chat session created");
            self.session = Some(session);
        }

        match self.session.as_ref() {
            Some(session) => session.stream_turn(text).await,
            None => Err(AiError::ApiError("chat session unavailable".into())),
        }
    }

    /// Drop the current session; the next turn creates a fresh one.
    pub fn reset(&mut self) {
        if let Some(session) = self.session.take() {
            info!(session = %session.id(), "Chat session reset");
        }
    }

    pub fn session(&self) -> Option<&ChatSession> {
        self.session.as_ref()
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session.as_ref().map(ChatSession::id)
    }

    /// How many sessions have been created over this adapter's lifetime.
    pub fn sessions_started(&self) -> u64 {
        self.sessions_started
    }

    /// Token usage of the current session.
    pub fn usage(&self) -> TokenUsage {
        self.session
            .as_ref()
            .map(|s| *s.tracker().total())
            .unwrap_or_default()
    }
}
