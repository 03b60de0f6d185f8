use std::time::Instant;

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::constants::{LOG_PREFIX_CONN, SSE_DATA_PREFIX, SSE_MESSAGE_BOUNDARY};
use crate::error::RelayError;
use crate::gemini::types::GenerateContentResponse;
use crate::logging::log_timed;
use crate::streaming::response::create_text_stream_response;

/// Relays a Gemini SSE stream to the client as a plain-text chunked body.
///
/// Fragments are forwarded strictly in arrival order, one in flight at a
/// time; fragments with no text are skipped. When the client goes away the
/// channel send fails, the loop stops pulling, and dropping the upstream
/// response aborts the provider call.
pub fn relay_prompt_stream(
    upstream: reqwest::Response,
    cancellation_token: CancellationToken,
) -> Result<warp::reply::Response, RelayError> {
    let (tx, rx) = mpsc::unbounded_channel::<Result<bytes::Bytes, std::io::Error>>();
    let start_time = Instant::now();

    tokio::spawn(async move {
        let mut stream = upstream.bytes_stream();
        // Raw byte buffer: network chunks arrive at transport boundaries and
        // can split a multi-byte character, so UTF-8 conversion must wait
        // until a full `\n\n`-terminated message has been assembled.
        let mut sse_buffer: Vec<u8> = Vec::new();
        let mut fragment_count = 0u64;

        'stream_loop: loop {
            tokio::select! {
                biased;
                _ = cancellation_token.cancelled() => {
                    break 'stream_loop;
                }

                chunk_result = stream.next() => {
                    match chunk_result {
                        Some(Ok(bytes_chunk)) => {
                            extend_sse_buffer(&mut sse_buffer, &bytes_chunk);

                            for message in drain_sse_messages(&mut sse_buffer) {
                                match extract_fragment_text(&message) {
                                    Ok(Some(text)) => {
                                        fragment_count += 1;
                                        if tx.send(Ok(bytes::Bytes::from(text))).is_err() {
                                            // client disconnected
                                            break 'stream_loop;
                                        }
                                    }
                                    Ok(None) => {}
                                    Err(e) => {
                                        log::warn!("unparseable SSE chunk: {}", e);
                                    }
                                }
                            }
                        }
                        Some(Err(e)) => {
                            log::error!("Gemini stream error: {}", e);
                            break 'stream_loop;
                        }
                        None => break 'stream_loop,
                    }
                }
            }
        }

        log_timed(
            LOG_PREFIX_CONN,
            &format!("prompt stream completed | {} fragments", fragment_count),
            start_time,
        );
    });

    create_text_stream_response(rx)
}

/// Response for an empty built prompt: a single empty fragment, then EOF.
/// Signals "nothing to generate" without raising an error.
pub fn empty_prompt_response() -> Result<warp::reply::Response, RelayError> {
    let (tx, rx) = mpsc::unbounded_channel::<Result<bytes::Bytes, std::io::Error>>();
    let _ = tx.send(Ok(bytes::Bytes::new()));
    create_text_stream_response(rx)
}

/// Appends a network chunk to the assembly buffer. Gemini terminates SSE
/// lines with CRLF; CR is never a continuation byte of a multi-byte UTF-8
/// sequence, so dropping it at the byte level is safe and keeps boundary
/// matching to a bare `\n\n`.
pub fn extend_sse_buffer(buffer: &mut Vec<u8>, chunk: &[u8]) {
    buffer.extend(chunk.iter().copied().filter(|&b| b != b'\r'));
}

/// Splits complete SSE messages out of the assembly buffer, leaving any
/// trailing partial message (including a partially received character) in
/// place for the next network chunk. A message that still fails UTF-8
/// conversion once complete is dropped, not fatal.
pub fn drain_sse_messages(buffer: &mut Vec<u8>) -> Vec<String> {
    let boundary = SSE_MESSAGE_BOUNDARY.as_bytes();
    let mut messages = Vec::new();

    while let Some(boundary_pos) = buffer
        .windows(boundary.len())
        .position(|window| window == boundary)
    {
        let drained: Vec<u8> = buffer.drain(..boundary_pos + boundary.len()).collect();
        let message_bytes = &drained[..boundary_pos];

        match std::str::from_utf8(message_bytes) {
            Ok(message_text) => {
                if !message_text.trim().is_empty() {
                    messages.push(message_text.to_string());
                }
            }
            Err(e) => {
                log::warn!("invalid UTF-8 in SSE message, dropping it: {}", e);
            }
        }
    }

    messages
}

/// Pulls the text payload out of one SSE message. `Ok(None)` covers keep-alive
/// lines and chunks whose candidate carries no text; both are skipped, not
/// forwarded.
pub fn extract_fragment_text(message: &str) -> Result<Option<String>, serde_json::Error> {
    let Some(data_content) = message.strip_prefix(SSE_DATA_PREFIX) else {
        return Ok(None);
    };

    let chunk: GenerateContentResponse = serde_json::from_str(data_content.trim())?;
    Ok(chunk.first_candidate_text())
}
