//! Newline-delimited JSON event transport.
//!
//! Each line is one event: `{"event": "dashboard_update", "data": {"statistics": {...}}}`.
//! Blank lines are skipped. A malformed line is logged and skipped; delivery
//! is best-effort with no acknowledgment.

use serde::Deserialize;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

use super::{LiveError, LiveUpdateChannel};

#[derive(Debug, Deserialize)]
pub struct EventFrame {
    pub event: String,
    #[serde(default, alias = "payload")]
    pub data: Value,
}

/// Parse one line into an event frame. `Ok(None)` for a blank line.
pub fn parse_frame(line: &str) -> Result<Option<EventFrame>, LiveError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .map_err(|e| LiveError::MalformedPayload(e.to_string()))
}

/// Feed every event read from `reader` into `channel` until EOF.
///
/// Returns the number of events that were published.
pub async fn pump<R>(reader: R, channel: &LiveUpdateChannel) -> Result<usize, LiveError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut published = 0;
    while let Some(line) = lines.next_line().await? {
        let frame = match parse_frame(&line) {
            Ok(Some(frame)) => frame,
            Ok(None) => continue,
            Err(err) => {
                warn!("skipping live event: {}", err);
                continue;
            }
        };
        match channel.deliver(&frame.event, frame.data) {
            Ok(true) => published += 1,
            Ok(false) => {}
            Err(err) => warn!(event = %frame.event, "skipping live event: {}", err),
        }
    }
    Ok(published)
}
