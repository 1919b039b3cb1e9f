//! Time-boxed access to the detailed result after a completed payment.
//!
//! The window is passed around explicitly; nothing here reads a clock except
//! through the `now` arguments.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlement {
  pub granted_at: DateTime<Utc>,
  pub expires_at: DateTime<Utc>,
}

impl Entitlement {
  pub fn grant(now: DateTime<Utc>, window: Duration) -> Self {
    Self {
      granted_at: now,
      expires_at: now + window,
    }
  }

  /// Active up to and including `expires_at`.
  pub fn is_active(&self, now: DateTime<Utc>) -> bool {
    now <= self.expires_at
  }

  pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
    if self.is_active(now) {
      self.expires_at - now
    } else {
      Duration::zero()
    }
  }

  pub fn ensure_active(&self, now: DateTime<Utc>) -> Result<(), EngineError> {
    if self.is_active(now) {
      Ok(())
    } else {
      Err(EngineError::EntitlementExpired {
        expired_at: self.expires_at,
      })
    }
  }
}

/// Gate for the detailed result: an entitlement must exist and be active.
pub fn require(entitlement: Option<&Entitlement>, now: DateTime<Utc>) -> Result<(), EngineError> {
  match entitlement {
    Some(e) => e.ensure_active(now),
    None => Err(EngineError::EntitlementMissing),
  }
}
