//! Server-Sent Events (SSE) streaming parser.
//!
//! Gemini streams `streamGenerateContent?alt=sse` replies as SSE. This module
//! turns any byte stream (normally `reqwest::Response::bytes_stream`) into a
//! stream of parsed events.

use futures_util::{Stream, StreamExt};
use tokio::io::AsyncBufReadExt;
use tokio_util::bytes::Buf;
use tokio_util::io::StreamReader;

use crate::AiError;

/// A single SSE event parsed from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// The event type, when an `event:` field was present.
    pub event: Option<String>,
    /// The event data; multiple `data:` lines are joined with `\n`.
    pub data: String,
}

/// Parse an SSE byte stream into events.
///
/// The returned stream ends after the source is exhausted, flushing a final
/// event that was not terminated by a blank line. A read error is yielded
/// once as [`AiError::NetworkError`] and ends the stream.
pub fn sse_events<S, B, E>(bytes: S) -> impl Stream<Item = Result<SseEvent, AiError>> + Send
where
    S: Stream<Item = Result<B, E>> + Send + Unpin + 'static,
    B: Buf + Send + Unpin,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    async_stream::stream! {
        let byte_stream = bytes.map(|result| result.map_err(std::io::Error::other));
        let reader = tokio::io::BufReader::new(StreamReader::new(byte_stream));
        let mut lines = reader.lines();

        let mut current_event: Option<String> = None;
        let mut current_data = String::new();

        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    yield Err(AiError::NetworkError(e.to_string()));
                    return;
                }
            };

            if line.is_empty() {
                // Empty line = end of event
                if !current_data.is_empty() {
                    yield Ok(SseEvent {
                        event: current_event.take(),
                        data: std::mem::take(&mut current_data),
                    });
                }
                current_event = None;
                continue;
            }

            if let Some(event_type) = field(&line, "event") {
                current_event = Some(event_type.to_string());
            } else if let Some(data) = field(&line, "data") {
                if !current_data.is_empty() {
                    current_data.push('\n');
                }
                current_data.push_str(data);
            }
            // Ignore other fields (id:, retry:, comments)
        }

        if !current_data.is_empty() {
            yield Ok(SseEvent {
                event: current_event,
                data: current_data,
            });
        }
    }
}

/// Value of `name: value` (the single space after the colon is optional).
fn field<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(name)?.strip_prefix(':')?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    fn chunks(parts: &[&'static str]) -> Vec<Result<&'static [u8], std::io::Error>> {
        parts.iter().map(|p| Ok(p.as_bytes())).collect()
    }

    async fn collect(parts: &[&'static str]) -> Vec<Result<SseEvent, AiError>> {
        sse_events(stream::iter(chunks(parts))).collect().await
    }

    #[tokio::test]
    async fn parses_events_split_across_chunks() {
        let events = collect(&["data: {\"a\"", ":1}\n\nda", "ta: {\"b\":2}\n\n"]).await;
        assert_eq!(
            events,
            vec![
                Ok(SseEvent {
                    event: None,
                    data: "{\"a\":1}".into()
                }),
                Ok(SseEvent {
                    event: None,
                    data: "{\"b\":2}".into()
                }),
            ]
        );
    }

    #[tokio::test]
    async fn joins_multiline_data_and_keeps_event_type() {
        let events = collect(&["event: message\ndata: one\ndata: two\n\n"]).await;
        assert_eq!(
            events,
            vec![Ok(SseEvent {
                event: Some("message".into()),
                data: "one\ntwo".into()
            })]
        );
    }

    #[tokio::test]
    async fn handles_crlf_and_missing_space() {
        let events = collect(&["data:tight\r\n\r\n"]).await;
        assert_eq!(
            events,
            vec![Ok(SseEvent {
                event: None,
                data: "tight".into()
            })]
        );
    }

    #[tokio::test]
    async fn ignores_comments_and_other_fields() {
        let events = collect(&[": keep-alive\nid: 7\nretry: 100\ndata: x\n\n\n\n"]).await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].as_ref().unwrap().data, "x");
    }

    #[tokio::test]
    async fn flushes_unterminated_trailing_event() {
        let events = collect(&["data: first\n\ndata: last"]).await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].as_ref().unwrap().data, "last");
    }

    #[tokio::test]
    async fn empty_source_yields_nothing() {
        let events = collect(&[]).await;
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn read_error_ends_stream_with_network_error() {
        let parts: Vec<Result<&'static [u8], std::io::Error>> = vec![
            Ok(b"data: ok\n\n".as_slice()),
            Err(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "reset",
            )),
            Ok(b"data: never\n\n".as_slice()),
        ];
        let events: Vec<_> = sse_events(stream::iter(parts)).collect().await;
        assert_eq!(events.len(), 2);
        assert!(events[0].is_ok());
        assert!(matches!(events[1], Err(AiError::NetworkError(_))));
    }
}
