//! Stable submission fingerprints.
//!
//! Scoring is a pure function of the nine answers, so the fingerprint works
//! as a memoization key: equal answers always yield equal results.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::UserData;

/// `mc-` followed by 16 hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(pub String);

impl fmt::Display for Fingerprint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

pub fn compute(data: &UserData) -> Fingerprint {
  let mut hasher = blake3::Hasher::new();
  for (field, value) in data.fields() {
    hasher.update(field.as_bytes());
    hasher.update(b"=");
    // -0.0 + 0.0 == +0.0, so both zeros hash the same.
    hasher.update(&(value + 0.0).to_bits().to_le_bytes());
    hasher.update(b"|");
  }
  let hex = hasher.finalize().to_hex();
  Fingerprint(format!("mc-{}", &hex[..16]))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn equal_answers_share_a_fingerprint() {
    let a = UserData {
      main_income: 250_000.0,
      ..UserData::default()
    };
    let b = a;
    assert_eq!(compute(&a), compute(&b));
    assert!(compute(&a).0.starts_with("mc-"));
    assert_eq!(compute(&a).0.len(), 19);
  }

  #[test]
  fn signed_zero_is_normalized() {
    let a = UserData {
      waste: -0.0,
      ..UserData::default()
    };
    assert_eq!(compute(&a), compute(&UserData::default()));
  }

  #[test]
  fn moving_an_amount_between_fields_changes_the_key() {
    let a = UserData {
      main_income: 100.0,
      ..UserData::default()
    };
    let b = UserData {
      side_income: 100.0,
      ..UserData::default()
    };
    assert_ne!(compute(&a), compute(&b));
  }
}
