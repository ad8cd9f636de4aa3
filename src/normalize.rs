//! Normalize inbound commit records into canonical Commit models.

use chrono::DateTime;

use crate::error::EngineError;
use crate::types::{Commit, InboundCommit};

/// Parse and validate a batch of inbound commits, preserving order.
pub fn commits(raw: &[InboundCommit]) -> Result<Vec<Commit>, EngineError> {
  raw.iter().map(one).collect()
}

/// Parse and validate a single inbound commit.
///
/// The parsed timestamp keeps the commit's own UTC offset so that
/// hour-of-day and calendar-day metrics see the author's local time.
pub fn one(raw: &InboundCommit) -> Result<Commit, EngineError> {
  if raw.hash.is_empty() {
    return Err(EngineError::validation("hash", "must not be empty"));
  }

  let timestamp = DateTime::parse_from_rfc3339(&raw.timestamp)
    .map_err(|e| EngineError::validation("timestamp", &format!("invalid RFC3339: {}", e)))?;

  Ok(Commit {
    hash: raw.hash.clone(),
    timestamp,
    message: raw.message.clone(),
    author_name: raw.author_name.clone(),
    author_email: raw.author_email.clone(),
  })
}
