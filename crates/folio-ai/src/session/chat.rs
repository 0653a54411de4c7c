//! Async turn methods for ChatSession.

use tracing::debug;

use crate::backend::{ChunkStream, GenerateRequest};
use crate::{AiError, Message, TokenUsage};

use super::manager::ChatSession;

impl ChatSession {
    /// Request for a new user message on top of the committed history.
    pub(crate) fn request_for(&self, user_message: &str) -> GenerateRequest {
        let mut contents = self.history.clone();
        contents.push(Message::user(user_message));

        GenerateRequest {
            system_instruction: self.settings.system_instruction.clone(),
            contents,
            temperature: self.settings.temperature,
            max_output_tokens: self.settings.max_output_tokens,
        }
    }

    /// Start a streamed reply to `user_message`. History is untouched until
    /// [`ChatSession::commit_turn`] is called with the complete reply.
    pub async fn stream_turn(&self, user_message: &str) -> Result<ChunkStream, AiError> {
        let request = self.request_for(user_message);
        debug!(session = %self.id, turns = self.history.len() / 2, "Sending turn");
        self.backend.stream_generate(&request).await
    }

    /// Record a completed turn.
    pub(crate) fn commit_turn(
        &mut self,
        user_message: String,
        reply: String,
        usage: Option<TokenUsage>,
    ) {
        self.history.push(Message::user(user_message));
        self.history.push(Message::assistant(reply));
        self.tracker.record(&usage.unwrap_or_default());
    }
}

#[cfg(test)]
mod tests {
    use crate::session::{ChatSession, SessionSettings};
    use crate::testing::{FakeBackend, Script};
    use crate::{Message, TokenUsage};

    fn session(backend: FakeBackend) -> ChatSession {
        ChatSession::new(
            std::sync::Arc::new(backend),
            SessionSettings::new("Be kind.")
                .with_temperature(0.3)
                .with_max_output_tokens(Some(64)),
        )
    }

    #[test]
    fn request_carries_settings_and_history() {
        let mut session = session(FakeBackend::new(vec![]));
        session.commit_turn("hi".into(), "hello".into(), None);

        let request = session.request_for("more?");
        assert_eq!(request.system_instruction, "Be kind.");
        assert!((request.temperature - 0.3).abs() < f64::EPSILON);
        assert_eq!(request.max_output_tokens, Some(64));
        assert_eq!(
            request.contents,
            vec![
                Message::user("hi"),
                Message::assistant("hello"),
                Message::user("more?"),
            ]
        );
    }

    #[test]
    fn commit_records_usage() {
        let mut session = session(FakeBackend::new(vec![]));
        session.commit_turn(
            "q".into(),
            "a".into(),
            Some(TokenUsage {
                input_tokens: 3,
                output_tokens: 2,
            }),
        );
        assert_eq!(session.message_count(), 2);
        assert_eq!(session.tracker().total_tokens(), 5);
        assert_eq!(session.tracker().turns(), 1);
    }

    #[tokio::test]
    async fn stream_turn_does_not_touch_history() {
        let backend = FakeBackend::new(vec![Script::reply(&["ok"])]);
        let requests = backend.requests();
        let session = session(backend);

        let _stream = session.stream_turn("hello?").await.unwrap();
        assert!(session.history().is_empty());
        assert_eq!(requests.lock().unwrap().len(), 1);
    }
}
