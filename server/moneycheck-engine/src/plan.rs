//! Paid-tier action plan (easy / medium / hard) and detailed advice.

use crate::messages::{format_ratio, render, Catalog};
use crate::types::{ActionsByDifficulty, Ratios, RuleId, UserData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
  Easy,
  Medium,
  Hard,
}

/// When a plan step or advice sentence applies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
  Always,
  Failed(RuleId),
  WasteAtLeastInvestment,
  WasteExceedsInvestment,
  WasteRatioAbove(f64),
  InvestmentRatioBelow(f64),
  SavingsRatioBelow(f64),
  NoSideIncome,
}

impl Trigger {
  fn fires(self, data: &UserData, failed: &[RuleId], ratios: &Ratios) -> bool {
    match self {
      Self::Always => true,
      Self::Failed(rule) => failed.contains(&rule),
      Self::WasteAtLeastInvestment => data.investment <= data.waste,
      Self::WasteExceedsInvestment => data.waste > data.investment,
      Self::WasteRatioAbove(limit) => ratios.waste_ratio > limit,
      Self::InvestmentRatioBelow(limit) => ratios.investment_to_income_ratio < limit,
      Self::SavingsRatioBelow(limit) => ratios.savings_to_expense_ratio < limit,
      Self::NoSideIncome => data.side_income == 0.0,
    }
  }
}

pub struct PlanStep {
  pub bucket: Bucket,
  pub trigger: Trigger,
  pub text: fn(&Catalog) -> &'static str,
}

/// Conditional steps first, then the unconditional fillers that keep every
/// bucket non-empty. Order within a bucket is output order.
pub const PLAN: [PlanStep; 15] = [
  PlanStep {
    bucket: Bucket::Easy,
    trigger: Trigger::Failed(RuleId::HasSubscription),
    text: |c| c.cancel_subscriptions,
  },
  PlanStep {
    bucket: Bucket::Easy,
    trigger: Trigger::Failed(RuleId::CreditRatioHigh),
    text: |c| c.review_card_statements,
  },
  PlanStep {
    bucket: Bucket::Easy,
    trigger: Trigger::WasteExceedsInvestment,
    text: |c| c.shift_waste_to_investment,
  },
  PlanStep {
    bucket: Bucket::Easy,
    trigger: Trigger::Always,
    text: |c| c.install_budget_app,
  },
  PlanStep {
    bucket: Bucket::Easy,
    trigger: Trigger::Always,
    text: |c| c.check_balances,
  },
  PlanStep {
    bucket: Bucket::Medium,
    trigger: Trigger::Failed(RuleId::HasInvestment),
    text: |c| c.open_investment_account,
  },
  PlanStep {
    bucket: Bucket::Medium,
    trigger: Trigger::Failed(RuleId::HasSideIncome),
    text: |c| c.start_side_job,
  },
  PlanStep {
    bucket: Bucket::Medium,
    trigger: Trigger::Failed(RuleId::WasteRatioHigh),
    text: |c| c.cap_waste,
  },
  PlanStep {
    bucket: Bucket::Medium,
    trigger: Trigger::Always,
    text: |c| c.review_fixed_costs,
  },
  PlanStep {
    bucket: Bucket::Medium,
    trigger: Trigger::Always,
    text: |c| c.step_up_investment,
  },
  PlanStep {
    bucket: Bucket::Hard,
    trigger: Trigger::Failed(RuleId::HasStock),
    text: |c| c.build_passive_income,
  },
  PlanStep {
    bucket: Bucket::Hard,
    trigger: Trigger::Failed(RuleId::StockCoversConsumption),
    text: |c| c.passive_covers_living,
  },
  PlanStep {
    bucket: Bucket::Hard,
    trigger: Trigger::Failed(RuleId::SideExceedsMain),
    text: |c| c.grow_side_past_main,
  },
  PlanStep {
    bucket: Bucket::Hard,
    trigger: Trigger::Always,
    text: |c| c.long_term_plan,
  },
  PlanStep {
    bucket: Bucket::Hard,
    trigger: Trigger::Always,
    text: |c| c.property_investment,
  },
];

pub fn actions_by_difficulty(
  data: &UserData,
  failed: &[RuleId],
  ratios: &Ratios,
  catalog: &Catalog,
) -> ActionsByDifficulty {
  let mut out = ActionsByDifficulty::default();
  for step in PLAN.iter().filter(|s| s.trigger.fires(data, failed, ratios)) {
    let bucket = match step.bucket {
      Bucket::Easy => &mut out.easy,
      Bucket::Medium => &mut out.medium,
      Bucket::Hard => &mut out.hard,
    };
    bucket.push((step.text)(catalog).to_string());
  }
  out
}

pub struct AdviceRule {
  pub trigger: Trigger,
  pub render: fn(&Catalog, &Ratios) -> String,
}

pub const ADVICE: [AdviceRule; 7] = [
  AdviceRule {
    trigger: Trigger::Failed(RuleId::IncomeVsExpense),
    render: |c, _| c.advice_balance.to_string(),
  },
  AdviceRule {
    trigger: Trigger::Failed(RuleId::HasStock),
    render: |c, _| c.advice_build_stock.to_string(),
  },
  AdviceRule {
    trigger: Trigger::WasteAtLeastInvestment,
    render: |c, _| c.advice_redirect_waste.to_string(),
  },
  AdviceRule {
    trigger: Trigger::WasteRatioAbove(20.0),
    render: |c, r| render(c.advice_waste_ratio, &[("ratio", format_ratio(r.waste_ratio).as_str())]),
  },
  AdviceRule {
    trigger: Trigger::InvestmentRatioBelow(10.0),
    render: |c, r| {
      render(
        c.advice_investment_ratio,
        &[("ratio", format_ratio(r.investment_to_income_ratio).as_str())],
      )
    },
  },
  AdviceRule {
    trigger: Trigger::SavingsRatioBelow(300.0),
    render: |c, _| c.advice_emergency_fund.to_string(),
  },
  AdviceRule {
    trigger: Trigger::NoSideIncome,
    render: |c, _| c.advice_diversify.to_string(),
  },
];

pub fn detailed_advice(
  data: &UserData,
  failed: &[RuleId],
  ratios: &Ratios,
  catalog: &Catalog,
) -> Vec<String> {
  let mut advice: Vec<String> = ADVICE
    .iter()
    .filter(|a| a.trigger.fires(data, failed, ratios))
    .map(|a| (a.render)(catalog, ratios))
    .collect();
  if advice.is_empty() {
    advice.push(catalog.advice_all_good.to_string());
  }
  advice
}
