//! Terminal front end: the interactive chat loop and one-shot questions.

use std::io::{self, Write};

use folio_ai::{run_turn, ChatMessage, Conversation, Transcript, TurnUpdate};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

const PROMPT: &str = "> ";

/// One line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Input<'a> {
    Blank,
    Reset,
    Quit,
    Message(&'a str),
}

impl<'a> Input<'a> {
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Self::Blank,
            "/reset" => Self::Reset,
            "/quit" | "/exit" => Self::Quit,
            text => Self::Message(text),
        }
    }
}

/// Writes a streaming reply to a terminal.
///
/// Fragments are printed as they arrive. A replaced reply starts on a fresh
/// line so partial text is not glued to the fallback message. Write errors
/// are held until [`ReplyPrinter::finish`].
pub struct ReplyPrinter<W: Write> {
    out: W,
    printed: bool,
    error: Option<io::Error>,
}

impl<W: Write> ReplyPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            printed: false,
            error: None,
        }
    }

    pub fn update(&mut self, message: &ChatMessage, update: TurnUpdate<'_>) {
        let result = match update {
            TurnUpdate::Appended(fragment) => write!(self.out, "{fragment}"),
            TurnUpdate::Replaced if self.printed => write!(self.out, "\n{}", message.text),
            TurnUpdate::Replaced => write!(self.out, "{}", message.text),
        }
        .and_then(|()| self.out.flush());

        self.printed = true;
        if let Err(e) = result {
            self.error.get_or_insert(e);
        }
    }

    /// End the reply with a newline and report the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Stream one reply to `out`.
pub async fn ask<W: Write>(
    conversation: &mut Conversation,
    transcript: &mut Transcript,
    question: &str,
    out: W,
) -> io::Result<W> {
    let mut printer = ReplyPrinter::new(out);
    run_turn(conversation, transcript, question, |message, update| {
        printer.update(message, update)
    })
    .await;
    printer.finish()
}

/// Read lines from `input` until EOF or `/quit`, answering each one.
pub async fn chat<R, W>(
    conversation: &mut Conversation,
    transcript: &mut Transcript,
    input: R,
    mut out: W,
) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    if let Some(welcome) = transcript.messages().first() {
        writeln!(out, "{}", welcome.text)?;
    }
    writeln!(out, "Type /reset to start over, /quit to leave.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match Input::parse(&line) {
            Input::Blank => continue,
            Input::Quit => break,
            Input::Reset => {
                conversation.reset();
                writeln!(out, "(conversation reset)")?;
            }
            Input::Message(text) => {
                out = ask(conversation, transcript, text, out).await?;
            }
        }
    }

    debug!(messages = transcript.messages().len(), "Chat ended");
    info!(
        sessions = conversation.sessions_started(),
        tokens = conversation.usage().total_tokens(),
        "Leaving chat"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use folio_ai::{ApiKeySource, GeminiConfig, GeminiConnector, SessionSettings, SERVICE_APOLOGY};

    const MISSING: &str =
        "Configuration Error: API_KEY is missing. Please set the API_KEY environment variable.";

    fn offline_conversation() -> Conversation {
        Conversation::new(
            Arc::new(GeminiConnector::new(GeminiConfig::new(""))),
            ApiKeySource::Fixed(None),
            SessionSettings::new("test"),
        )
    }

    fn message(text: &str) -> ChatMessage {
        let mut transcript = Transcript::new("Jordan");
        let id = transcript.begin_reply();
        transcript.fail_reply(&id, text).unwrap().clone()
    }

    #[test]
    fn input_parsing() {
        assert_eq!(Input::parse(""), Input::Blank);
        assert_eq!(Input::parse("   "), Input::Blank);
        assert_eq!(Input::parse("/reset"), Input::Reset);
        assert_eq!(Input::parse(" /quit \n"), Input::Quit);
        assert_eq!(Input::parse("/exit"), Input::Quit);
        assert_eq!(Input::parse("  hi  "), Input::Message("hi"));
    }

    #[test]
    fn printer_streams_fragments() {
        let msg = message("");
        let mut printer = ReplyPrinter::new(Vec::new());
        printer.update(&msg, TurnUpdate::Appended("Hel"));
        printer.update(&msg, TurnUpdate::Appended("lo!"));
        let out = printer.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello!\n");
    }

    #[test]
    fn printer_moves_fallback_to_new_line() {
        let mut printer = ReplyPrinter::new(Vec::new());
        printer.update(&message("Sor"), TurnUpdate::Appended("Sor"));
        printer.update(&message(SERVICE_APOLOGY), TurnUpdate::Replaced);
        let out = String::from_utf8(printer.finish().unwrap()).unwrap();
        assert_eq!(out, format!("Sor\n{SERVICE_APOLOGY}\n"));
    }

    #[tokio::test]
    async fn ask_without_key_prints_config_error() {
        let mut conversation = offline_conversation();
        let mut transcript = Transcript::new("Jordan");

        let out = ask(&mut conversation, &mut transcript, "hi", Vec::new())
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{MISSING}\n"));
    }

    #[tokio::test]
    async fn chat_loop_handles_commands() {
        let mut conversation = offline_conversation();
        let mut transcript = Transcript::new("Jordan Avery");
        let input: &[u8] = b"hello\n\n   \n/reset\n/quit\nnever sent\n";

        let mut out = Vec::new();
        chat(&mut conversation, &mut transcript, input, &mut out)
            .await
            .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("Hi! I'm Jordan's AI assistant."));
        assert_eq!(out.matches(MISSING).count(), 1);
        assert!(out.contains("(conversation reset)"));
        // welcome, one user message, one assistant reply
        assert_eq!(transcript.messages().len(), 3);
    }

    #[tokio::test]
    async fn chat_ends_at_eof() {
        let mut conversation = offline_conversation();
        let mut transcript = Transcript::new("Jordan");
        let input: &[u8] = b"";

        let mut out = Vec::new();
        chat(&mut conversation, &mut transcript, input, &mut out)
            .await
            .unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("> \n"));
    }
}
