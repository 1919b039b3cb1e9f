//! S/A/B rule tiers evaluated against one submission.
//!
//! Every rule runs on every call; a failing rule scores 0 and its id is
//! appended to its tier's failure list in table order.

use std::collections::BTreeMap;

use crate::ratio::{self, RATIO_RULES};
use crate::types::{Breakdown, Ratios, RuleId, Tier, Totals, UserData};

/// A pass/fail rule worth a fixed number of points.
pub struct BinaryRule {
  pub id: RuleId,
  pub points: u8,
  pub passes: fn(&UserData, &Totals) -> bool,
}

pub const S_TIER: [BinaryRule; 4] = [
  BinaryRule {
    id: RuleId::IncomeVsExpense,
    points: 12,
    passes: |_, t| t.total_income > t.total_expense,
  },
  BinaryRule {
    id: RuleId::HasStock,
    points: 12,
    passes: |d, _| d.stock_income > 0.0,
  },
  BinaryRule {
    id: RuleId::StockCoversConsumption,
    points: 12,
    passes: |d, _| d.consumption < d.stock_income,
  },
  BinaryRule {
    id: RuleId::StockCoversSubscription,
    points: 12,
    passes: |d, _| d.stock_income > d.subscription,
  },
];

pub const A_TIER: [BinaryRule; 3] = [
  BinaryRule {
    id: RuleId::InvestmentVsWaste,
    points: 6,
    passes: |d, _| d.investment > d.waste,
  },
  BinaryRule {
    id: RuleId::SavingsVsCredit,
    points: 6,
    passes: |d, _| d.savings > d.credit_payment,
  },
  BinaryRule {
    id: RuleId::HasInvestment,
    points: 6,
    passes: |d, _| d.investment > 0.0,
  },
];

/// Binary part of the B tier; the ratio part comes from [`RATIO_RULES`].
pub const B_TIER_BINARY: [BinaryRule; 4] = [
  BinaryRule {
    id: RuleId::HasSideIncome,
    points: 2,
    passes: |d, _| d.side_income > 0.0,
  },
  BinaryRule {
    id: RuleId::InvestmentVsConsumption,
    points: 2,
    passes: |d, _| d.investment > d.consumption,
  },
  BinaryRule {
    id: RuleId::HasSubscription,
    points: 2,
    passes: |d, _| d.subscription > 0.0,
  },
  BinaryRule {
    id: RuleId::SideExceedsMain,
    points: 2,
    passes: |d, _| d.main_income < d.side_income,
  },
];

/// Points and failures for one tier.
#[derive(Debug, Clone, PartialEq)]
pub struct TierOutcome {
  pub tier: Tier,
  pub total: u8,
  pub items: BTreeMap<RuleId, u8>,
  pub failed: Vec<RuleId>,
}

impl TierOutcome {
  fn new(tier: Tier) -> Self {
    Self {
      tier,
      total: 0,
      items: BTreeMap::new(),
      failed: Vec::new(),
    }
  }

  fn record(&mut self, id: RuleId, points: u8) {
    debug_assert_eq!(id.tier(), self.tier);
    self.total += points;
    debug_assert!(self.total <= self.tier.max_points());
    self.items.insert(id, points);
    if points == 0 {
      self.failed.push(id);
    }
  }

  fn apply(&mut self, rules: &[BinaryRule], data: &UserData, totals: &Totals) {
    for rule in rules {
      let points = if (rule.passes)(data, totals) {
        rule.points
      } else {
        0
      };
      self.record(rule.id, points);
    }
  }
}

/// Everything the rule pass derives from one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
  pub totals: Totals,
  pub ratios: Ratios,
  pub s: TierOutcome,
  pub a: TierOutcome,
  pub b: TierOutcome,
}

impl Evaluation {
  pub fn total_score(&self) -> u8 {
    self.s.total + self.a.total + self.b.total
  }

  /// Failed rules across all tiers: S, then A, then B.
  pub fn failed(&self) -> Vec<RuleId> {
    self
      .s
      .failed
      .iter()
      .chain(&self.a.failed)
      .chain(&self.b.failed)
      .copied()
      .collect()
  }

  pub fn breakdown(&self) -> Breakdown {
    Breakdown {
      s_rank: self.s.items.clone(),
      a_rank: self.a.items.clone(),
      b_rank: self.b.items.clone(),
    }
  }
}

pub fn evaluate(data: &UserData) -> Evaluation {
  let totals = Totals::of(data);
  let ratios = ratio::compute(data, &totals);

  let mut s = TierOutcome::new(Tier::S);
  s.apply(&S_TIER, data, &totals);

  let mut a = TierOutcome::new(Tier::A);
  a.apply(&A_TIER, data, &totals);

  let mut b = TierOutcome::new(Tier::B);
  b.apply(&B_TIER_BINARY, data, &totals);
  for rule in &RATIO_RULES {
    b.record(rule.rule, rule.credit(rule.kind.read(&ratios)));
  }

  Evaluation {
    totals,
    ratios,
    s,
    a,
    b,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample() -> UserData {
    UserData {
      main_income: 300_000.0,
      side_income: 0.0,
      investment: 50_000.0,
      consumption: 80_000.0,
      waste: 20_000.0,
      savings: 1_000_000.0,
      stock_income: 10_000.0,
      credit_payment: 0.0,
      subscription: 3_000.0,
    }
  }

  #[test]
  fn tables_stay_within_tier_maximums() {
    let sum = |rules: &[BinaryRule]| rules.iter().map(|r| r.points).sum::<u8>();
    assert_eq!(sum(&S_TIER), Tier::S.max_points());
    assert_eq!(sum(&A_TIER), Tier::A.max_points());
    // The B tier is declared out of 34 but its rules can only reach 20.
    let ratio_max = RATIO_RULES.len() as u8 * ratio::FULL_CREDIT;
    assert_eq!(sum(&B_TIER_BINARY) + ratio_max, 20);
    assert!(sum(&B_TIER_BINARY) + ratio_max <= Tier::B.max_points());
  }

  #[test]
  fn every_rule_id_is_declared_once_in_its_tier() {
    let declared: Vec<RuleId> = S_TIER
      .iter()
      .chain(&A_TIER)
      .chain(&B_TIER_BINARY)
      .map(|r| r.id)
      .chain(RATIO_RULES.iter().map(|r| r.rule))
      .collect();
    assert_eq!(declared, RuleId::ALL.to_vec());
    for rule in S_TIER.iter() {
      assert_eq!(rule.id.tier(), Tier::S);
    }
    for rule in A_TIER.iter() {
      assert_eq!(rule.id.tier(), Tier::A);
    }
    for rule in B_TIER_BINARY.iter() {
      assert_eq!(rule.id.tier(), Tier::B);
    }
  }

  #[test]
  fn sample_scores_s_tier_thirty_six() {
    let eval = evaluate(&sample());
    assert_eq!(eval.totals.total_income, 310_000.0);
    assert_eq!(eval.totals.total_expense, 103_000.0);
    assert_eq!(eval.s.total, 36);
    assert_eq!(eval.s.failed, vec![RuleId::StockCoversConsumption]);
    assert_eq!(eval.s.items[&RuleId::StockCoversConsumption], 0);
    assert_eq!(eval.s.items[&RuleId::IncomeVsExpense], 12);
  }

  #[test]
  fn sample_a_and_b_tiers() {
    let eval = evaluate(&sample());
    assert_eq!(eval.a.total, 18);
    assert!(eval.a.failed.is_empty());
    // binary: subscription only (2); ratios: waste 6.45% (2),
    // stock/consumption 12.5% (0), savings/expense 970% (2),
    // investment 16.1% (1), subscription 0.97% (2), credit 0% (2)
    assert_eq!(eval.b.total, 11);
    assert_eq!(
      eval.b.failed,
      vec![
        RuleId::HasSideIncome,
        RuleId::InvestmentVsConsumption,
        RuleId::SideExceedsMain,
        RuleId::StockToConsumptionLow,
      ]
    );
    assert_eq!(eval.total_score(), 65);
  }

  #[test]
  fn partial_credit_is_not_a_failure() {
    let eval = evaluate(&sample());
    assert_eq!(eval.b.items[&RuleId::InvestmentRatioLow], 1);
    assert!(!eval.failed().contains(&RuleId::InvestmentRatioLow));
  }

  #[test]
  fn failures_keep_tier_order() {
    let eval = evaluate(&UserData::default());
    let failed = eval.failed();
    assert_eq!(failed.first(), Some(&RuleId::IncomeVsExpense));
    let tiers: Vec<Tier> = failed.iter().map(|id| id.tier()).collect();
    let mut sorted = tiers.clone();
    sorted.sort();
    assert_eq!(tiers, sorted);
  }

  #[test]
  fn breakdown_covers_every_rule() {
    let breakdown = evaluate(&sample()).breakdown();
    assert_eq!(breakdown.s_rank.len(), 4);
    assert_eq!(breakdown.a_rank.len(), 3);
    assert_eq!(breakdown.b_rank.len(), 10);
  }
}
