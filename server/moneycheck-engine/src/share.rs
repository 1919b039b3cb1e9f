//! Plain-text caption for sharing a result on social media.
//!
//! Uses only the final score, rank, and personalized action.

use crate::config::Locale;
use crate::messages::render;
use crate::types::ScoreResult;

pub fn share_text(result: &ScoreResult, premium: bool, locale: Locale) -> String {
  let c = locale.catalog();
  let headline = if premium {
    c.share_headline_premium
  } else {
    c.share_headline
  };
  let score = render(
    c.share_score,
    &[
      ("score", result.total_score.to_string().as_str()),
      ("rank", result.rank.to_string().as_str()),
    ],
  );
  let action = render(c.share_action, &[("action", result.personalized_action.as_str())]);
  let mut hashtags = c.share_hashtags.to_string();
  if premium {
    hashtags.push(' ');
    hashtags.push_str(c.share_premium_tag);
  }
  format!("{}\n\n{}\n{}\n\n{}", headline, score, action, hashtags)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Rank;

  fn result() -> ScoreResult {
    ScoreResult {
      total_score: 72,
      s_rank_score: 36,
      a_rank_score: 18,
      b_rank_score: 18,
      rank: Rank::B,
      feedback: String::new(),
      personalized_action: "Add an income stream with side work or freelancing".into(),
    }
  }

  #[test]
  fn free_caption_layout() {
    let text = share_text(&result(), false, Locale::En);
    assert_eq!(
      text,
      "MoneyCheck results!\n\nScore: 72 pts (B rank)\n\
       Next step: Add an income stream with side work or freelancing\n\n\
       #MoneyCheck #MoneyHealth"
    );
  }

  #[test]
  fn premium_caption_adds_tag() {
    let text = share_text(&result(), true, Locale::Ja);
    assert!(text.starts_with("MoneyCheck 詳細分析結果！"));
    assert!(text.contains("スコア: 72点 (Bランク)"));
    assert!(text.ends_with("#MoneyCheck #資産診断 #詳細分析"));
  }
}
