//! MoneyCheck Scoring Engine: deterministic, rule-based financial
//! self-assessment.
//!
//! Scores nine monthly figures against fixed S/A/B rule tiers and six
//! safe-division ratios, derives a rank and one personalized action, and for
//! the paid tier adds per-rule breakdowns, advice, and tiered action plans.
//!
//! No DB, no network, no clock in the scoring path; pure computation.

pub mod action;
pub mod config;
pub mod engine;
pub mod entitlement;
pub mod error;
pub mod fingerprint;
pub mod messages;
pub mod plan;
pub mod rank;
pub mod ratio;
pub mod request;
pub mod rules;
pub mod share;
pub mod types;
pub mod validate;

pub use config::{Config, Locale};
pub use engine::Engine;
pub use entitlement::Entitlement;
pub use error::EngineError;
pub use fingerprint::Fingerprint;
pub use types::{DetailedScoreResult, Rank, RuleId, ScoreResult, UserData};
pub use validate::validate;

/// Free-tier result with the default configuration.
pub fn evaluate(data: &UserData) -> ScoreResult {
  Engine::with_defaults().evaluate(data)
}

/// Paid-tier result with the default configuration.
pub fn evaluate_detailed(data: &UserData) -> DetailedScoreResult {
  Engine::with_defaults().evaluate_detailed(data)
}
