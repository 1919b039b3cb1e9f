//! Engine configuration with sane defaults.
//!
//! Rule tiers, ratio thresholds, and the action priority order are fixed and
//! live next to the code that evaluates them; only presentation and the
//! caller-side entitlement window are tunable.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;
use crate::messages::{self, Catalog};

/// Language of every sentence the engine produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  #[default]
  En,
  Ja,
}

impl Locale {
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "en" | "en-us" | "en-gb" | "english" => Some(Self::En),
      "ja" | "ja-jp" | "jp" | "japanese" => Some(Self::Ja),
      _ => None,
    }
  }

  pub fn catalog(self) -> &'static Catalog {
    match self {
      Self::En => &messages::EN,
      Self::Ja => &messages::JA,
    }
  }
}

impl FromStr for Locale {
  type Err = EngineError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_str_loose(s).ok_or_else(|| EngineError::validation("locale", "expected en|ja"))
  }
}

#[derive(Debug, Clone)]
pub struct Config {
  pub locale: Locale,
  /// How long a completed payment unlocks the detailed view.
  pub entitlement_window: Duration,
}

impl Config {
  pub fn with_locale(locale: Locale) -> Self {
    Self {
      locale,
      ..Self::default()
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      locale: Locale::En,
      entitlement_window: Duration::hours(24),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn locale_parsing_is_loose() {
    assert_eq!(Locale::from_str_loose(" JA-jp "), Some(Locale::Ja));
    assert_eq!(Locale::from_str_loose("english"), Some(Locale::En));
    assert_eq!(Locale::from_str_loose("fr"), None);
    let err = "fr".parse::<Locale>().unwrap_err();
    assert!(err.to_string().contains("locale"));
  }

  #[test]
  fn default_window_is_one_day() {
    let config = Config::default();
    assert_eq!(config.entitlement_window, Duration::hours(24));
    assert_eq!(config.locale, Locale::En);
  }
}
