//! Streaming response normalization.
//!
//! The insight endpoints stream results line by line, in one of two framings
//! chosen statically per endpoint (the wire format does not self-describe):
//!
//! ```text
//! # Framing::NdJson — one JSON object per line
//! {"type": "status", "content": "researching"}
//! {"type": "complete", "content": {...}}
//!
//! # Framing::Sse — data-prefixed lines, colon lines are keep-alives
//! data: {"type": "status", "content": "researching"}
//! : ping
//! data: {"type": "complete", "content": {...}}
//! ```
//!
//! Both framings decode to the same lazy, forward-only sequence of
//! [`StreamEvent`]s. A line that fails to parse is logged and skipped, never
//! fatal; a transport failure mid-stream surfaces as an `Err` item. One line
//! is held in memory at a time.

use futures::stream::{self, Stream, StreamExt};
use tracing::warn;

use crate::error::ClientError;
use crate::event::StreamEvent;

/// Line framing used by a streaming endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// Newline-delimited JSON: every non-empty line is one event.
    NdJson,
    /// SSE-style: a `data: ` prefix is stripped when present and `:`-prefixed
    /// comment/keep-alive lines are dropped without a diagnostic.
    Sse,
}

impl Framing {
    /// Decode one raw line into an event. `None` means the line was skipped,
    /// either silently (blank lines, SSE comments) or with a diagnostic
    /// (invalid UTF-8, malformed JSON).
    fn decode_raw(self, raw: &[u8]) -> Option<StreamEvent> {
        let Ok(text) = std::str::from_utf8(raw) else {
            warn!("skipping stream line with invalid UTF-8");
            return None;
        };
        let line = text.trim();
        if line.is_empty() {
            return None;
        }
        self.decode_line(line)
    }

    fn decode_line(self, line: &str) -> Option<StreamEvent> {
        let payload = match self {
            Framing::NdJson => line,
            Framing::Sse => {
                if line.starts_with(':') {
                    return None;
                }
                line.strip_prefix("data:").map(str::trim).unwrap_or(line)
            }
        };

        match serde_json::from_str(payload) {
            Ok(event) => Some(event),
            Err(err) => {
                warn!(%err, line = payload, "skipping malformed stream line");
                None
            }
        }
    }
}

/// Decode a raw byte stream into a lazy sequence of [`StreamEvent`]s.
///
/// Bytes are buffered only until the next `\n`; each complete line is decoded
/// and yielded before more input is read. Buffering happens on raw bytes and
/// UTF-8 is decoded per line, so a multibyte character split across network
/// chunks reassembles intact. A trailing unterminated line is flushed when
/// the underlying stream ends.
pub fn event_stream<S, B, E>(
    byte_stream: S,
    framing: Framing,
) -> impl Stream<Item = Result<StreamEvent, ClientError>> + Send
where
    S: Stream<Item = Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Into<ClientError> + Send + 'static,
{
    stream::unfold(
        (Box::pin(byte_stream), Vec::new(), false),
        move |(mut bytes, mut buffer, mut ended)| async move {
            loop {
                // Drain complete lines before reading more input.
                while let Some(pos) = buffer.iter().position(|&b| b == b'\n') {
                    let mut line: Vec<u8> = buffer.drain(..=pos).collect();
                    line.pop();
                    if let Some(event) = framing.decode_raw(&line) {
                        return Some((Ok(event), (bytes, buffer, ended)));
                    }
                }

                if ended {
                    // Flush an unterminated final line.
                    let event = framing.decode_raw(&buffer);
                    buffer.clear();
                    if let Some(event) = event {
                        return Some((Ok(event), (bytes, buffer, ended)));
                    }
                    return None;
                }

                match bytes.next().await {
                    Some(Ok(chunk)) => {
                        buffer.extend_from_slice(chunk.as_ref());
                    }
                    Some(Err(err)) => {
                        return Some((Err(err.into()), (bytes, buffer, ended)));
                    }
                    None => ended = true,
                }
            }
        },
    )
}

/// Extension trait turning an open streaming response into typed events.
pub trait EventStreamExt {
    /// Consume the response body as a lazy event sequence with the given
    /// framing.
    fn events(self, framing: Framing) -> impl Stream<Item = Result<StreamEvent, ClientError>> + Send;
}

impl EventStreamExt for reqwest::Response {
    fn events(self, framing: Framing) -> impl Stream<Item = Result<StreamEvent, ClientError>> + Send {
        event_stream(self.bytes_stream(), framing)
    }
}
