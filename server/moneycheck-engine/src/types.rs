//! Core types for the scoring engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::entitlement::Entitlement;
use crate::fingerprint::Fingerprint;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: what the caller sends)
// ---------------------------------------------------------------------------

/// The nine answers of one submission. Amounts are per month except
/// `savings`, which is the current balance. Unknown fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UserData {
  #[serde(alias = "mainIncome")]
  pub main_income: f64,
  #[serde(alias = "sideIncome")]
  pub side_income: f64,
  pub investment: f64,
  pub consumption: f64,
  pub waste: f64,
  pub savings: f64,
  #[serde(alias = "stockIncome")]
  pub stock_income: f64,
  #[serde(alias = "creditPayment")]
  pub credit_payment: f64,
  pub subscription: f64,
}

impl UserData {
  /// Field names paired with their values, in input order.
  pub fn fields(&self) -> [(&'static str, f64); 9] {
    [
      ("main_income", self.main_income),
      ("side_income", self.side_income),
      ("investment", self.investment),
      ("consumption", self.consumption),
      ("waste", self.waste),
      ("savings", self.savings),
      ("stock_income", self.stock_income),
      ("credit_payment", self.credit_payment),
      ("subscription", self.subscription),
    ]
  }
}

/// Aggregates recomputed from `UserData` on every scoring call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
  pub total_income: f64,
  pub total_expense: f64,
  /// `total_expense` plus the credit-card payment.
  pub monthly_expense: f64,
}

impl Totals {
  pub fn of(data: &UserData) -> Self {
    let total_income = data.main_income + data.side_income + data.stock_income;
    let total_expense = data.consumption + data.waste + data.subscription;
    Self {
      total_income,
      total_expense,
      monthly_expense: total_expense + data.credit_payment,
    }
  }
}

// ---------------------------------------------------------------------------
// Rule identifiers and tiers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
  S,
  A,
  B,
}

impl Tier {
  pub fn max_points(self) -> u8 {
    match self {
      Self::S => 48,
      Self::A => 18,
      Self::B => 34,
    }
  }
}

/// Stable identifier of one scoring rule. Declaration order is evaluation
/// order, so the derived `Ord` keeps breakdown maps in rule order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
  IncomeVsExpense,
  HasStock,
  StockCoversConsumption,
  StockCoversSubscription,
  InvestmentVsWaste,
  SavingsVsCredit,
  HasInvestment,
  HasSideIncome,
  InvestmentVsConsumption,
  HasSubscription,
  SideExceedsMain,
  WasteRatioHigh,
  StockToConsumptionLow,
  SavingsToExpenseLow,
  InvestmentRatioLow,
  SubscriptionRatioHigh,
  CreditRatioHigh,
}

impl RuleId {
  pub const ALL: [RuleId; 17] = [
    Self::IncomeVsExpense,
    Self::HasStock,
    Self::StockCoversConsumption,
    Self::StockCoversSubscription,
    Self::InvestmentVsWaste,
    Self::SavingsVsCredit,
    Self::HasInvestment,
    Self::HasSideIncome,
    Self::InvestmentVsConsumption,
    Self::HasSubscription,
    Self::SideExceedsMain,
    Self::WasteRatioHigh,
    Self::StockToConsumptionLow,
    Self::SavingsToExpenseLow,
    Self::InvestmentRatioLow,
    Self::SubscriptionRatioHigh,
    Self::CreditRatioHigh,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Self::IncomeVsExpense => "income_vs_expense",
      Self::HasStock => "has_stock",
      Self::StockCoversConsumption => "stock_covers_consumption",
      Self::StockCoversSubscription => "stock_covers_subscription",
      Self::InvestmentVsWaste => "investment_vs_waste",
      Self::SavingsVsCredit => "savings_vs_credit",
      Self::HasInvestment => "has_investment",
      Self::HasSideIncome => "has_side_income",
      Self::InvestmentVsConsumption => "investment_vs_consumption",
      Self::HasSubscription => "has_subscription",
      Self::SideExceedsMain => "side_exceeds_main",
      Self::WasteRatioHigh => "waste_ratio_high",
      Self::StockToConsumptionLow => "stock_to_consumption_low",
      Self::SavingsToExpenseLow => "savings_to_expense_low",
      Self::InvestmentRatioLow => "investment_ratio_low",
      Self::SubscriptionRatioHigh => "subscription_ratio_high",
      Self::CreditRatioHigh => "credit_ratio_high",
    }
  }

  pub fn tier(self) -> Tier {
    match self {
      Self::IncomeVsExpense
      | Self::HasStock
      | Self::StockCoversConsumption
      | Self::StockCoversSubscription => Tier::S,
      Self::InvestmentVsWaste | Self::SavingsVsCredit | Self::HasInvestment => Tier::A,
      _ => Tier::B,
    }
  }
}

impl fmt::Display for RuleId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ---------------------------------------------------------------------------
// Rank
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
  S,
  A,
  B,
  C,
  D,
}

impl fmt::Display for Rank {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Self::S => "S",
      Self::A => "A",
      Self::B => "B",
      Self::C => "C",
      Self::D => "D",
    };
    f.write_str(s)
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: what we emit)
// ---------------------------------------------------------------------------

/// Free-tier result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
  pub total_score: u8,
  pub s_rank_score: u8,
  pub a_rank_score: u8,
  pub b_rank_score: u8,
  pub rank: Rank,
  pub feedback: String,
  pub personalized_action: String,
}

/// Points awarded per rule, one map per tier.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Breakdown {
  pub s_rank: BTreeMap<RuleId, u8>,
  pub a_rank: BTreeMap<RuleId, u8>,
  pub b_rank: BTreeMap<RuleId, u8>,
}

/// The six percentage ratios (0 whenever the denominator is unusable).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Ratios {
  pub waste_ratio: f64,
  pub stock_to_consumption_ratio: f64,
  pub savings_to_expense_ratio: f64,
  pub investment_to_income_ratio: f64,
  pub subscription_to_income_ratio: f64,
  pub credit_to_income_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ActionsByDifficulty {
  /// Things to do today.
  pub easy: Vec<String>,
  /// One to three months.
  pub medium: Vec<String>,
  /// Six months and longer.
  pub hard: Vec<String>,
}

/// Paid-tier result: the free result plus everything behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedScoreResult {
  #[serde(flatten)]
  pub summary: ScoreResult,
  pub breakdown: Breakdown,
  pub failed_rules: Vec<RuleId>,
  pub ratios: Ratios,
  pub detailed_advice: Vec<String>,
  pub actions_by_difficulty: ActionsByDifficulty,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Wrapped request form: the answers plus the caller's entitlement, if any.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
  pub data: UserData,
  #[serde(default)]
  pub entitlement: Option<Entitlement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
  Free,
  Detailed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
  Free(ScoreResult),
  Detailed(Box<DetailedScoreResult>),
}

impl Outcome {
  pub fn summary(&self) -> &ScoreResult {
    match self {
      Self::Free(s) => s,
      Self::Detailed(d) => &d.summary,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
  pub id: Fingerprint,
  pub plan: Plan,
  pub result: Outcome,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub share_text: Option<String>,
}

/// Structured error output for rejected requests.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn totals_follow_the_aggregate_definitions() {
    let data = UserData {
      main_income: 300_000.0,
      side_income: 20_000.0,
      stock_income: 10_000.0,
      consumption: 80_000.0,
      waste: 20_000.0,
      subscription: 3_000.0,
      credit_payment: 40_000.0,
      ..UserData::default()
    };
    let totals = Totals::of(&data);
    assert_eq!(totals.total_income, 330_000.0);
    assert_eq!(totals.total_expense, 103_000.0);
    assert_eq!(totals.monthly_expense, 143_000.0);
  }

  #[test]
  fn camel_case_aliases_are_accepted() {
    let json = r#"{
      "mainIncome": 1, "sideIncome": 2, "investment": 3, "consumption": 4,
      "waste": 5, "savings": 6, "stockIncome": 7, "creditPayment": 8,
      "subscription": 9, "extra": "ignored"
    }"#;
    let data: UserData = serde_json::from_str(json).unwrap();
    assert_eq!(data.main_income, 1.0);
    assert_eq!(data.stock_income, 7.0);
    assert_eq!(data.credit_payment, 8.0);
  }

  #[test]
  fn rule_ids_serialize_as_snake_case() {
    for id in RuleId::ALL {
      let json = serde_json::to_string(&id).unwrap();
      assert_eq!(json, format!("\"{}\"", id.as_str()));
    }
  }
}
