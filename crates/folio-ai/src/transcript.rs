//! Chat transcript kept by the presentation layer.
//!
//! Assistant replies start as an empty placeholder that grows fragment by
//! fragment. A failed turn replaces the placeholder text with the fallback
//! message, so every turn ends with exactly one assistant message.

use chrono::{DateTime, Utc};
use folio_common::MessageId;
use futures_util::StreamExt;
use serde::Serialize;
use tracing::debug;

use crate::conversation::Conversation;
use crate::Role;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: Role,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// Greeting shown before the first turn.
pub fn welcome_message(first_name: &str) -> ChatMessage {
    ChatMessage {
        id: MessageId::welcome(),
        role: Role::Assistant,
        text: format!(
            "Hi! I'm {first_name}'s AI assistant. Ask me anything about their work, skills, or experience."
        ),
        created_at: Utc::now(),
    }
}

/// What changed in a message during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnUpdate<'a> {
    /// A fragment was appended to the reply.
    Appended(&'a str),
    /// The reply text was replaced by a fallback message.
    Replaced,
}

#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Start a transcript greeting visitors on behalf of `owner`.
    pub fn new(owner: &str) -> Self {
        let first_name = owner.split_whitespace().next().unwrap_or_default();
        Self {
            messages: vec![welcome_message(first_name)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Add a user message. Blank input is rejected.
    pub fn push_user(&mut self, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(Role::User, text));
        self.messages.last()
    }

    /// Add an empty assistant message to fill in as the reply streams.
    pub fn begin_reply(&mut self) -> MessageId {
        let message = ChatMessage::new(Role::Assistant, String::new());
        let id = message.id.clone();
        self.messages.push(message);
        id
    }

    pub fn append_fragment(&mut self, id: &MessageId, fragment: &str) -> Option<&ChatMessage> {
        let message = self.find_mut(id)?;
        message.text.push_str(fragment);
        Some(message)
    }

    /// Replace whatever the reply holds with `text`.
    pub fn fail_reply(&mut self, id: &MessageId, text: impl Into<String>) -> Option<&ChatMessage> {
        let message = self.find_mut(id)?;
        message.text = text.into();
        Some(message)
    }

    fn find_mut(&mut self, id: &MessageId) -> Option<&mut ChatMessage> {
        self.messages.iter_mut().rev().find(|m| &m.id == id)
    }
}

/// Drive one turn: record the user message, stream the reply into the
/// transcript and call `on_update` after every change to it.
///
/// Returns the id of the assistant message, or `None` if `text` was blank
/// and nothing was sent.
pub async fn run_turn<F>(
    conversation: &mut Conversation,
    transcript: &mut Transcript,
    text: &str,
    mut on_update: F,
) -> Option<MessageId>
where
    F: FnMut(&ChatMessage, TurnUpdate<'_>),
{
    let text = transcript.push_user(text)?.text.clone();
    let reply_id = transcript.begin_reply();

    let mut stream = match conversation.send_message(&text).await {
        Ok(stream) => stream,
        Err(e) => {
            if let Some(message) = transcript.fail_reply(&reply_id, e.fallback_text()) {
                on_update(message, TurnUpdate::Replaced);
            }
            return Some(reply_id);
        }
    };

    while let Some(item) = stream.next().await {
        match item {
            Ok(fragment) => {
                if let Some(message) = transcript.append_fragment(&reply_id, &fragment) {
                    on_update(message, TurnUpdate::Appended(&fragment));
                }
            }
            Err(e) => {
                debug!(message = %reply_id, "Replacing partial reply with fallback");
                if let Some(message) = transcript.fail_reply(&reply_id, e.fallback_text()) {
                    on_update(message, TurnUpdate::Replaced);
                }
                break;
            }
        }
    }

    Some(reply_id)
}
