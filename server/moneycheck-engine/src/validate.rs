//! Caller-side checks a submission must pass before it is scored.
//!
//! The engine itself is total over finite non-negative input and never calls
//! this; front ends run it first and send the user back to the form on error.

use crate::error::EngineError;
use crate::types::UserData;

pub fn validate(data: &UserData) -> Result<(), EngineError> {
  for (field, value) in data.fields() {
    if !value.is_finite() {
      return Err(EngineError::validation(field, "must be a finite number"));
    }
    if value < 0.0 {
      return Err(EngineError::validation(field, "must not be negative"));
    }
  }

  // All-zero submissions are not scored.
  if data.fields().iter().all(|(_, value)| *value == 0.0) {
    return Err(EngineError::EmptySubmission);
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_a_single_nonzero_answer() {
    let data = UserData {
      savings: 1.0,
      ..UserData::default()
    };
    assert!(validate(&data).is_ok());
  }

  #[test]
  fn rejects_all_zero() {
    let err = validate(&UserData::default()).unwrap_err();
    assert!(matches!(err, EngineError::EmptySubmission));
  }

  #[test]
  fn rejects_negative_with_field_name() {
    let data = UserData {
      main_income: 100.0,
      waste: -1.0,
      ..UserData::default()
    };
    let err = validate(&data).unwrap_err();
    assert_eq!(err.field(), Some("waste"));
    assert!(err.to_string().contains("negative"));
  }

  #[test]
  fn rejects_non_finite() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
      let data = UserData {
        main_income: 100.0,
        subscription: bad,
        ..UserData::default()
      };
      let err = validate(&data).unwrap_err();
      assert_eq!(err.field(), Some("subscription"));
    }
  }

  #[test]
  fn negative_zero_counts_as_zero() {
    let data = UserData {
      waste: -0.0,
      ..UserData::default()
    };
    assert!(matches!(validate(&data), Err(EngineError::EmptySubmission)));
  }
}
