//! Rank letter and feedback from the total score.

use crate::messages::Catalog;
use crate::types::Rank;

/// Descending ladder; the first threshold the score reaches wins.
pub const LADDER: [(u8, Rank); 4] = [(90, Rank::S), (80, Rank::A), (70, Rank::B), (60, Rank::C)];

pub fn rank_for(score: u8) -> Rank {
  LADDER
    .iter()
    .find(|(threshold, _)| score >= *threshold)
    .map(|(_, rank)| *rank)
    .unwrap_or(Rank::D)
}

pub fn feedback_for(rank: Rank, catalog: &Catalog) -> String {
  catalog.feedback(rank).to_string()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::messages::EN;

  #[test]
  fn boundaries_are_inclusive() {
    assert_eq!(rank_for(100), Rank::S);
    assert_eq!(rank_for(90), Rank::S);
    assert_eq!(rank_for(89), Rank::A);
    assert_eq!(rank_for(80), Rank::A);
    assert_eq!(rank_for(79), Rank::B);
    assert_eq!(rank_for(70), Rank::B);
    assert_eq!(rank_for(69), Rank::C);
    assert_eq!(rank_for(60), Rank::C);
    assert_eq!(rank_for(59), Rank::D);
    assert_eq!(rank_for(0), Rank::D);
  }

  #[test]
  fn ladder_is_monotonic_over_the_whole_range() {
    let mut prev = rank_for(0);
    for score in 1..=100u8 {
      let rank = rank_for(score);
      assert!(rank <= prev, "rank dropped at {}", score);
      prev = rank;
    }
  }

  #[test]
  fn each_rank_has_distinct_feedback() {
    let all = [Rank::S, Rank::A, Rank::B, Rank::C, Rank::D];
    let texts: std::collections::HashSet<String> =
      all.iter().map(|r| feedback_for(*r, &EN)).collect();
    assert_eq!(texts.len(), all.len());
  }
}
