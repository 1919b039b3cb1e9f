//! The six percentage ratios and the tiered credit they earn.
//!
//! One threshold table serves both the B-tier ratio rules and the detailed
//! ratio display.

use crate::types::{Ratios, RuleId, Totals, UserData};

/// `(numerator / denominator) * 100`, or 0 when the denominator is zero or
/// either operand (or the quotient) is not finite.
pub fn safe_division(numerator: f64, denominator: f64) -> f64 {
  if !numerator.is_finite() || !denominator.is_finite() || denominator == 0.0 {
    return 0.0;
  }
  let result = (numerator / denominator) * 100.0;
  if result.is_finite() {
    result
  } else {
    0.0
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioKind {
  Waste,
  StockToConsumption,
  SavingsToExpense,
  InvestmentToIncome,
  SubscriptionToIncome,
  CreditToIncome,
}

impl RatioKind {
  /// (numerator, denominator) for this ratio.
  pub fn operands(self, data: &UserData, totals: &Totals) -> (f64, f64) {
    match self {
      Self::Waste => (data.waste, totals.total_income),
      Self::StockToConsumption => (data.stock_income, data.consumption),
      Self::SavingsToExpense => (data.savings, totals.monthly_expense),
      Self::InvestmentToIncome => (data.investment, totals.total_income),
      Self::SubscriptionToIncome => (data.subscription, totals.total_income),
      Self::CreditToIncome => (data.credit_payment, totals.total_income),
    }
  }

  pub fn read(self, ratios: &Ratios) -> f64 {
    match self {
      Self::Waste => ratios.waste_ratio,
      Self::StockToConsumption => ratios.stock_to_consumption_ratio,
      Self::SavingsToExpense => ratios.savings_to_expense_ratio,
      Self::InvestmentToIncome => ratios.investment_to_income_ratio,
      Self::SubscriptionToIncome => ratios.subscription_to_income_ratio,
      Self::CreditToIncome => ratios.credit_to_income_ratio,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  /// Lower is better; both bounds inclusive.
  AtMost,
  /// Higher is better; both bounds inclusive.
  AtLeast,
}

/// A three-tier ratio rule: 2 points within `full`, 1 within `partial`, else 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioRule {
  pub kind: RatioKind,
  pub rule: RuleId,
  pub direction: Direction,
  pub full: f64,
  pub partial: f64,
}

pub const FULL_CREDIT: u8 = 2;
pub const PARTIAL_CREDIT: u8 = 1;

pub const RATIO_RULES: [RatioRule; 6] = [
  RatioRule {
    kind: RatioKind::Waste,
    rule: RuleId::WasteRatioHigh,
    direction: Direction::AtMost,
    full: 10.0,
    partial: 20.0,
  },
  RatioRule {
    kind: RatioKind::StockToConsumption,
    rule: RuleId::StockToConsumptionLow,
    direction: Direction::AtLeast,
    full: 100.0,
    partial: 50.0,
  },
  RatioRule {
    kind: RatioKind::SavingsToExpense,
    rule: RuleId::SavingsToExpenseLow,
    direction: Direction::AtLeast,
    full: 600.0,
    partial: 300.0,
  },
  RatioRule {
    kind: RatioKind::InvestmentToIncome,
    rule: RuleId::InvestmentRatioLow,
    direction: Direction::AtLeast,
    full: 20.0,
    partial: 10.0,
  },
  RatioRule {
    kind: RatioKind::SubscriptionToIncome,
    rule: RuleId::SubscriptionRatioHigh,
    direction: Direction::AtMost,
    full: 5.0,
    partial: 10.0,
  },
  RatioRule {
    kind: RatioKind::CreditToIncome,
    rule: RuleId::CreditRatioHigh,
    direction: Direction::AtMost,
    full: 10.0,
    partial: 30.0,
  },
];

impl RatioRule {
  pub fn credit(&self, value: f64) -> u8 {
    let within = |bound: f64| match self.direction {
      Direction::AtMost => value <= bound,
      Direction::AtLeast => value >= bound,
    };
    if within(self.full) {
      FULL_CREDIT
    } else if within(self.partial) {
      PARTIAL_CREDIT
    } else {
      0
    }
  }
}

pub fn compute(data: &UserData, totals: &Totals) -> Ratios {
  let of = |kind: RatioKind| {
    let (numerator, denominator) = kind.operands(data, totals);
    safe_division(numerator, denominator)
  };
  Ratios {
    waste_ratio: of(RatioKind::Waste),
    stock_to_consumption_ratio: of(RatioKind::StockToConsumption),
    savings_to_expense_ratio: of(RatioKind::SavingsToExpense),
    investment_to_income_ratio: of(RatioKind::InvestmentToIncome),
    subscription_to_income_ratio: of(RatioKind::SubscriptionToIncome),
    credit_to_income_ratio: of(RatioKind::CreditToIncome),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn rule(kind: RatioKind) -> RatioRule {
    RATIO_RULES.iter().copied().find(|r| r.kind == kind).unwrap()
  }

  #[test]
  fn safe_division_clamps_unusable_denominators() {
    assert_eq!(safe_division(5.0, 0.0), 0.0);
    assert_eq!(safe_division(0.0, 0.0), 0.0);
    assert_eq!(safe_division(5.0, f64::NAN), 0.0);
    assert_eq!(safe_division(5.0, f64::INFINITY), 0.0);
    assert_eq!(safe_division(f64::INFINITY, 5.0), 0.0);
    assert_eq!(safe_division(f64::MAX, f64::MIN_POSITIVE), 0.0);
  }

  #[test]
  fn safe_division_is_exact_for_normal_inputs() {
    assert_eq!(safe_division(1.0, 4.0), (1.0 / 4.0) * 100.0);
    assert_eq!(safe_division(20_000.0, 310_000.0), (20_000.0 / 310_000.0) * 100.0);
  }

  #[test]
  fn at_most_rules_are_inclusive_at_both_bounds() {
    let waste = rule(RatioKind::Waste);
    assert_eq!(waste.credit(10.0), 2);
    assert_eq!(waste.credit(10.01), 1);
    assert_eq!(waste.credit(20.0), 1);
    assert_eq!(waste.credit(20.01), 0);
  }

  #[test]
  fn at_least_rules_are_inclusive_at_both_bounds() {
    let savings = rule(RatioKind::SavingsToExpense);
    assert_eq!(savings.credit(600.0), 2);
    assert_eq!(savings.credit(599.99), 1);
    assert_eq!(savings.credit(300.0), 1);
    assert_eq!(savings.credit(299.99), 0);
  }

  #[test]
  fn zero_ratio_credit_depends_on_direction() {
    // A zero-denominator ratio reads as 0%, which passes every AtMost rule
    // and fails every AtLeast rule.
    for r in RATIO_RULES {
      let expected = match r.direction {
        Direction::AtMost => 2,
        Direction::AtLeast => 0,
      };
      assert_eq!(r.credit(0.0), expected, "{:?}", r.kind);
    }
  }

  #[test]
  fn compute_uses_monthly_expense_for_savings() {
    let data = UserData {
      main_income: 200_000.0,
      consumption: 50_000.0,
      waste: 20_000.0,
      subscription: 5_000.0,
      credit_payment: 25_000.0,
      savings: 600_000.0,
      ..UserData::default()
    };
    let ratios = compute(&data, &Totals::of(&data));
    assert_eq!(ratios.savings_to_expense_ratio, 600.0);
    assert_eq!(ratios.waste_ratio, 10.0);
    assert_eq!(ratios.stock_to_consumption_ratio, 0.0);
  }
}
