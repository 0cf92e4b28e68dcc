// Streamed-response accumulation for the VLM client

use crate::error::{Result, ViewError};
use crate::vlm::models::{StreamChunk, EMPTY_STREAM_PLACEHOLDER};
use bytes::Bytes;
use futures::{Stream, StreamExt};
use tracing::{debug, warn};

/// Outcome of inspecting one line of the streamed response.
pub(crate) enum LineEvent {
    /// A content fragment to append to the accumulator.
    Fragment(String),
    /// The `[DONE]` sentinel; no further input may be consumed.
    Done,
    /// Nothing usable on this line.
    Skip,
}

/// Inspect a single line of an SSE-style stream.
///
/// A leading `data:` token is stripped if present. Lines that fail to parse
/// as JSON are skipped with a warning rather than failing the stream.
pub(crate) fn parse_stream_line(line: &str) -> LineEvent {
    let line = line.trim();
    if line.is_empty() {
        return LineEvent::Skip;
    }

    let data = line.strip_prefix("data:").map(str::trim).unwrap_or(line);
    if data == "[DONE]" {
        return LineEvent::Done;
    }

    match serde_json::from_str::<StreamChunk>(data) {
        Ok(chunk) => {
            let content = chunk
                .choices
                .first()
                .and_then(|choice| choice.delta.content.clone());
            match content {
                Some(fragment) if !fragment.is_empty() => LineEvent::Fragment(fragment),
                _ => LineEvent::Skip,
            }
        }
        Err(err) => {
            warn!(
                "could not parse JSON from stream line: {} ({})",
                data.chars().take(200).collect::<String>(),
                err
            );
            LineEvent::Skip
        }
    }
}

/// Consume a streamed response body line by line and concatenate the content
/// fragments in arrival order.
///
/// The stream is consumed exactly once and reading stops at the `[DONE]`
/// sentinel. A transport failure mid-stream surfaces as a network error; an
/// exhausted stream with no fragments yields a fixed placeholder.
pub async fn collect_stream_description<S>(byte_stream: S) -> Result<String>
where
    S: Stream<Item = reqwest::Result<Bytes>>,
{
    futures::pin_mut!(byte_stream);

    let mut buffer = String::new();
    let mut parts: Vec<String> = Vec::new();
    let mut terminated = false;

    'chunks: while let Some(chunk) = byte_stream.next().await {
        let chunk = chunk.map_err(|e| ViewError::Network(e.to_string()))?;
        buffer.push_str(&String::from_utf8_lossy(&chunk));

        while let Some(newline) = buffer.find('\n') {
            let line: String = buffer.drain(..=newline).collect();
            match parse_stream_line(&line) {
                LineEvent::Fragment(fragment) => parts.push(fragment),
                LineEvent::Done => {
                    terminated = true;
                    break 'chunks;
                }
                LineEvent::Skip => {}
            }
        }
    }

    // A final line without a trailing newline is still a valid event.
    if !terminated {
        if let LineEvent::Fragment(fragment) = parse_stream_line(&buffer) {
            parts.push(fragment);
        }
    }

    debug!("stream ended with {} content fragments", parts.len());

    let description = parts.concat().trim().to_string();
    if description.is_empty() {
        Ok(EMPTY_STREAM_PLACEHOLDER.to_string())
    } else {
        Ok(description)
    }
}
