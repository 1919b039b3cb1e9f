//! Structured error types for the callers of the engine.
//!
//! Scoring itself never fails; these cover input validation, entitlement
//! gating, and the stdin/stdout wrapper.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  #[error("validation: every answer is zero; nothing to score")]
  EmptySubmission,

  #[error("entitlement: detailed result requires a completed payment")]
  EntitlementMissing,

  #[error("entitlement: expired at {expired_at}")]
  EntitlementExpired { expired_at: DateTime<Utc> },

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

  /// Name of the offending input field, when there is one.
  pub fn field(&self) -> Option<&str> {
    match self {
      Self::Validation { field, .. } => Some(field),
      Self::EntitlementMissing | Self::EntitlementExpired { .. } => Some("entitlement"),
      _ => None,
    }
  }
}
