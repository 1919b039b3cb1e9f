//! Core engine: scores submissions for the free and detailed tiers.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::action::{self, ActionContext};
use crate::config::Config;
use crate::entitlement::Entitlement;
use crate::plan;
use crate::rank;
use crate::rules::{self, Evaluation};
use crate::types::*;

/// The scoring engine. Holds only configuration; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  /// Entitlement for a payment completed at `now`, sized by the configured
  /// window.
  pub fn grant(&self, now: DateTime<Utc>) -> Entitlement {
    Entitlement::grant(now, self.config.entitlement_window)
  }

  /// Free-tier result.
  pub fn evaluate(&self, data: &UserData) -> ScoreResult {
    let eval = rules::evaluate(data);
    self.summarize(data, &eval, &eval.failed())
  }

  /// Paid-tier result. Its summary is identical to what [`Engine::evaluate`]
  /// returns for the same input.
  pub fn evaluate_detailed(&self, data: &UserData) -> DetailedScoreResult {
    let catalog = self.config.locale.catalog();
    let eval = rules::evaluate(data);
    let failed = eval.failed();
    let summary = self.summarize(data, &eval, &failed);

    DetailedScoreResult {
      summary,
      breakdown: eval.breakdown(),
      detailed_advice: plan::detailed_advice(data, &failed, &eval.ratios, catalog),
      actions_by_difficulty: plan::actions_by_difficulty(data, &failed, &eval.ratios, catalog),
      ratios: eval.ratios,
      failed_rules: failed,
    }
  }

  fn summarize(&self, data: &UserData, eval: &Evaluation, failed: &[RuleId]) -> ScoreResult {
    let catalog = self.config.locale.catalog();
    let total_score = eval.total_score();
    let rank = rank::rank_for(total_score);

    let cx = ActionContext {
      data,
      totals: &eval.totals,
      catalog,
    };
    let personalized_action = action::select(failed, &cx);

    debug!(
      total_score,
      s = eval.s.total,
      a = eval.a.total,
      b = eval.b.total,
      %rank,
      failed = failed.len(),
      "scored submission"
    );

    ScoreResult {
      total_score,
      s_rank_score: eval.s.total,
      a_rank_score: eval.a.total,
      b_rank_score: eval.b.total,
      rank,
      feedback: rank::feedback_for(rank, catalog),
      personalized_action,
    }
  }
}
