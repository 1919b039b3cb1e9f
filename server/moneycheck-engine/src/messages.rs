//! Message catalog: every sentence the engine can emit, per locale.
//!
//! Templates carry `{name}` placeholders filled by [`render`]; the only
//! interpolated values are formatted amounts, one-decimal percentages, and
//! the final score/rank/action for share captions.

use crate::types::Rank;

pub struct Catalog {
  // Feedback, one per rank.
  pub feedback_s: &'static str,
  pub feedback_a: &'static str,
  pub feedback_b: &'static str,
  pub feedback_c: &'static str,
  pub feedback_d: &'static str,

  // Personalized actions.
  pub reduce_spending: &'static str,
  pub raise_income: &'static str,
  pub invest_over_waste: &'static str,
  pub curb_credit: &'static str,
  pub start_investing: &'static str,
  pub add_side_income: &'static str,
  pub invest_over_consumption: &'static str,
  pub trim_waste: &'static str,
  pub raise_investment_ratio: &'static str,
  pub default_action: &'static str,

  // Action plan: easy.
  pub cancel_subscriptions: &'static str,
  pub review_card_statements: &'static str,
  pub shift_waste_to_investment: &'static str,
  pub install_budget_app: &'static str,
  pub check_balances: &'static str,

  // Action plan: medium.
  pub open_investment_account: &'static str,
  pub start_side_job: &'static str,
  pub cap_waste: &'static str,
  pub review_fixed_costs: &'static str,
  pub step_up_investment: &'static str,

  // Action plan: hard.
  pub build_passive_income: &'static str,
  pub passive_covers_living: &'static str,
  pub grow_side_past_main: &'static str,
  pub long_term_plan: &'static str,
  pub property_investment: &'static str,

  // Detailed advice.
  pub advice_balance: &'static str,
  pub advice_build_stock: &'static str,
  pub advice_redirect_waste: &'static str,
  pub advice_waste_ratio: &'static str,
  pub advice_investment_ratio: &'static str,
  pub advice_emergency_fund: &'static str,
  pub advice_diversify: &'static str,
  pub advice_all_good: &'static str,

  // Share caption.
  pub share_headline: &'static str,
  pub share_headline_premium: &'static str,
  pub share_score: &'static str,
  pub share_action: &'static str,
  pub share_hashtags: &'static str,
  pub share_premium_tag: &'static str,
}

impl Catalog {
  pub fn feedback(&self, rank: Rank) -> &'static str {
    match rank {
      Rank::S => self.feedback_s,
      Rank::A => self.feedback_a,
      Rank::B => self.feedback_b,
      Rank::C => self.feedback_c,
      Rank::D => self.feedback_d,
    }
  }
}

pub static EN: Catalog = Catalog {
  feedback_s: "Excellent! You are managing your money ideally.",
  feedback_a: "Good. Fine-tuning the details will lift you even higher.",
  feedback_b: "Not bad. Focused improvements can raise your score a lot.",
  feedback_c: "Average. Start with the basic improvements.",
  feedback_d: "There is plenty of room to improve. Revisit the basics.",

  reduce_spending: "Cut your spending by ¥{amount} a month",
  raise_income: "Raise your income by ¥{amount} a month",
  invest_over_waste: "Invest ¥{amount} more each month",
  curb_credit: "Use your credit card less and grow your savings",
  start_investing: "Start investing through a tax-advantaged fund",
  add_side_income: "Add an income stream with side work or freelancing",
  invest_over_consumption: "Invest ¥{amount} more each month so investment outgrows consumption",
  trim_waste: "Cut discretionary spending by ¥{amount} a month to stay under 10% of income",
  raise_investment_ratio: "Invest ¥{amount} more each month to reach 10% of income",
  default_action: "Start by recording your spending in a budgeting app",

  cancel_subscriptions: "Cancel subscriptions you no longer use today",
  review_card_statements: "Check your card statements and stop unneeded charges",
  shift_waste_to_investment: "Cut this month's discretionary budget by ¥10,000 and invest it",
  install_budget_app: "Install a budgeting app and start recording expenses",
  check_balances: "Check your bank balances to see where you stand",

  open_investment_account: "Open a tax-advantaged investment account and invest ¥10,000 a month",
  start_side_job: "Start a side job that uses your skills, targeting ¥50,000 a month",
  cap_waste: "Review discretionary items and keep waste under 10% of income",
  review_fixed_costs: "Review fixed costs (insurance, phone plans) to save ¥10,000-20,000 a month",
  step_up_investment: "Raise your investment step by step to ¥30,000 a month",

  build_passive_income: "Build ¥50,000 a month of passive income with dividend stocks and REITs",
  passive_covers_living: "Build assets whose passive income fully covers your living costs",
  grow_side_past_main: "Grow your side business beyond your main income",
  long_term_plan: "Follow a long-term investment plan towards ¥10 million in assets",
  property_investment: "Build asset income with larger investments such as real estate",

  advice_balance: "Balancing income and expense comes first. Start by reviewing fixed costs.",
  advice_build_stock: "Building passive income with dividend stocks or REITs greatly improves financial stability.",
  advice_redirect_waste: "Redirecting discretionary spending into investment speeds up wealth building. Revisit your priorities.",
  advice_waste_ratio: "Your waste ratio is {ratio}%, which is high. Aim for 10% of income or less.",
  advice_investment_ratio: "Your investment ratio is {ratio}%. Raise it gradually towards 20% of income or more.",
  advice_emergency_fund: "Keep at least six months of expenses in savings as an emergency fund.",
  advice_diversify: "Multiple income sources spread risk and make your finances more stable.",
  advice_all_good: "Your finances are in good shape. Consider a long-term investment strategy to go further.",

  share_headline: "MoneyCheck results!",
  share_headline_premium: "MoneyCheck detailed analysis results!",
  share_score: "Score: {score} pts ({rank} rank)",
  share_action: "Next step: {action}",
  share_hashtags: "#MoneyCheck #MoneyHealth",
  share_premium_tag: "#DetailedAnalysis",
};

pub static JA: Catalog = Catalog {
  feedback_s: "素晴らしい！理想的な資産管理ができています。",
  feedback_a: "良好です。細かい部分を調整すればさらに向上できます。",
  feedback_b: "まずまずです。重点的な改善で大きく向上できます。",
  feedback_c: "平均的です。基本的な改善から始めましょう。",
  feedback_d: "まだ改善の余地が大きくあります。基本から見直しましょう。",

  reduce_spending: "支出を月{amount}円減らしましょう",
  raise_income: "収入を月{amount}円増やしましょう",
  invest_over_waste: "投資額を月{amount}円増やしましょう",
  curb_credit: "クレジットカードの利用を控えて預金を増やしましょう",
  start_investing: "つみたてNISAから投資を始めてみましょう",
  add_side_income: "副業やフリーランスで収入源を増やしましょう",
  invest_over_consumption: "投資額を月{amount}円増やして消費を上回らせましょう",
  trim_waste: "浪費を月{amount}円減らして収入の10%以下にしましょう",
  raise_investment_ratio: "投資額を月{amount}円増やして収入の10%以上にしましょう",
  default_action: "家計簿アプリで支出を記録して現状把握から始めましょう",

  cancel_subscriptions: "使っていないサブスクを今すぐ解約する",
  review_card_statements: "クレジットカードの明細を確認し、不要な支払いを停止する",
  shift_waste_to_investment: "今月の浪費予算を1万円減らしてその分を投資に回す",
  install_budget_app: "家計簿アプリをダウンロードして支出を記録開始",
  check_balances: "銀行口座の残高を確認して現状を把握する",

  open_investment_account: "つみたてNISAの口座を開設して月1万円から投資開始",
  start_side_job: "スキルを活かした副業を月5万円目標で始める",
  cap_waste: "浪費項目を見直して月の浪費を収入の10%以下に抑える",
  review_fixed_costs: "固定費（保険・通信費）を見直して月1-2万円削減",
  step_up_investment: "投資額を段階的に月3万円まで増額する",

  build_passive_income: "配当株・REITでストック収入月5万円を目指す",
  passive_covers_living: "ストック収入で生活費を完全にカバーできる資産を築く",
  grow_side_past_main: "副業を本業収入以上に育てて経済的自由を獲得",
  long_term_plan: "総資産1000万円を目指した長期投資戦略を実行",
  property_investment: "不動産投資などの大型投資で資産収入を構築",

  advice_balance: "収入と支出のバランスを改善することが最優先です。固定費の見直しから始めましょう。",
  advice_build_stock: "配当株やREITでストック収入を構築することで、経済的安定性が大幅に向上します。",
  advice_redirect_waste: "浪費を投資に回すことで、将来の資産形成が加速します。優先順位を見直しましょう。",
  advice_waste_ratio: "浪費比率が{ratio}%と高めです。収入の10%以下を目標にしましょう。",
  advice_investment_ratio: "投資比率が{ratio}%です。収入の20%以上を目標に段階的に増やしましょう。",
  advice_emergency_fund: "緊急資金として、月間支出の6ヶ月分以上の預金を確保することをお勧めします。",
  advice_diversify: "収入源を複数持つことでリスクを分散し、経済的安定性を高められます。",
  advice_all_good: "現在の資産管理は良好です。さらなる向上のため、長期的な投資戦略を検討しましょう。",

  share_headline: "MoneyCheck 診断結果！",
  share_headline_premium: "MoneyCheck 詳細分析結果！",
  share_score: "スコア: {score}点 ({rank}ランク)",
  share_action: "改善アクション: {action}",
  share_hashtags: "#MoneyCheck #資産診断",
  share_premium_tag: "#詳細分析",
};

/// Replace each `{name}` in `template` with its value.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
  let mut out = template.to_string();
  for (name, value) in vars {
    out = out.replace(&format!("{{{}}}", name), value);
  }
  out
}

/// Whole currency units with thousands separators: 1234567 -> "1,234,567".
pub fn format_amount(amount: u64) -> String {
  let digits = amount.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}

/// Percentage with one decimal place, as shown in advice sentences.
pub fn format_ratio(ratio: f64) -> String {
  format!("{:.1}", ratio)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn format_amount_groups_thousands() {
    assert_eq!(format_amount(0), "0");
    assert_eq!(format_amount(999), "999");
    assert_eq!(format_amount(1_000), "1,000");
    assert_eq!(format_amount(1_234_567), "1,234,567");
  }

  #[test]
  fn render_fills_every_placeholder() {
    let s = render(EN.share_score, &[("score", "72"), ("rank", "B")]);
    assert_eq!(s, "Score: 72 pts (B rank)");
    let s = render(JA.reduce_spending, &[("amount", "5,000")]);
    assert_eq!(s, "支出を月5,000円減らしましょう");
  }

  #[test]
  fn format_ratio_uses_one_decimal() {
    assert_eq!(format_ratio(25.0), "25.0");
    assert_eq!(format_ratio(3.2258), "3.2");
  }
}
