//! Structured error types for the habit engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("no commits found in repository")]
  NoCommits,

  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  #[error("definition directory not found: {0}")]
  DefinitionDir(String),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

impl EngineError {
  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }
}
