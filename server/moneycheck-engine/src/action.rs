//! The single personalized action shown on the free result.
//!
//! A fixed priority table is walked in order and the first failed rule it
//! names decides the sentence. Passive-income failures are not in the table;
//! they only show up in the paid action plan.
//!
//! `has_investment` leads the A tier: with nothing invested `investment_vs_waste`
//! fails as well, and starting to invest is the step that applies.

use crate::messages::{format_amount, render, Catalog};
use crate::types::{RuleId, Totals, UserData};

/// Amounts in suggestions are rounded up to this many currency units.
pub const ROUNDING_STEP: f64 = 1_000.0;

/// Inputs a suggestion may draw on.
pub struct ActionContext<'a> {
  pub data: &'a UserData,
  pub totals: &'a Totals,
  pub catalog: &'a Catalog,
}

impl ActionContext<'_> {
  fn with_amount(&self, template: &str, gap: f64) -> String {
    render(template, &[("amount", format_amount(round_up_to_step(gap)).as_str())])
  }
}

pub struct ActionRule {
  pub rule: RuleId,
  pub suggest: fn(&ActionContext<'_>) -> String,
}

pub const PRIORITY: [ActionRule; 8] = [
  ActionRule {
    rule: RuleId::IncomeVsExpense,
    suggest: |cx| {
      let deficit = cx.totals.total_expense - cx.totals.total_income;
      if deficit > 0.0 {
        cx.with_amount(cx.catalog.reduce_spending, deficit)
      } else {
        cx.with_amount(cx.catalog.raise_income, -deficit)
      }
    },
  },
  ActionRule {
    rule: RuleId::HasInvestment,
    suggest: |cx| cx.catalog.start_investing.to_string(),
  },
  ActionRule {
    rule: RuleId::InvestmentVsWaste,
    suggest: |cx| {
      let needed = cx.data.waste - cx.data.investment + ROUNDING_STEP;
      cx.with_amount(cx.catalog.invest_over_waste, needed)
    },
  },
  ActionRule {
    rule: RuleId::SavingsVsCredit,
    suggest: |cx| cx.catalog.curb_credit.to_string(),
  },
  ActionRule {
    rule: RuleId::HasSideIncome,
    suggest: |cx| cx.catalog.add_side_income.to_string(),
  },
  ActionRule {
    rule: RuleId::InvestmentVsConsumption,
    suggest: |cx| {
      let needed = cx.data.consumption - cx.data.investment + ROUNDING_STEP;
      cx.with_amount(cx.catalog.invest_over_consumption, needed)
    },
  },
  ActionRule {
    rule: RuleId::WasteRatioHigh,
    suggest: |cx| {
      let target = (cx.totals.total_income * 0.1).floor();
      cx.with_amount(cx.catalog.trim_waste, cx.data.waste - target)
    },
  },
  ActionRule {
    rule: RuleId::InvestmentRatioLow,
    suggest: |cx| {
      let target = (cx.totals.total_income * 0.1).floor();
      cx.with_amount(cx.catalog.raise_investment_ratio, target - cx.data.investment)
    },
  },
];

/// Round a gap up to the next step. A gap of zero or less rounds to 0, so a
/// break-even budget is told to raise income by ¥0.
pub fn round_up_to_step(gap: f64) -> u64 {
  ((gap / ROUNDING_STEP).ceil().max(0.0) * ROUNDING_STEP) as u64
}

pub fn select(failed: &[RuleId], cx: &ActionContext<'_>) -> String {
  PRIORITY
    .iter()
    .find(|entry| failed.contains(&entry.rule))
    .map(|entry| (entry.suggest)(cx))
    .unwrap_or_else(|| cx.catalog.default_action.to_string())
}
