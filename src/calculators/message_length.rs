//! Commit length analysis: banded penalty for message-length habits, 0-10.

use crate::calculators::{mean, round2, std_dev};
use crate::types::Commit;

/// Higher means more problematic. The mean message length falls into a
/// banded base score (very short messages worst, 30-100 chars best), plus a
/// penalty of up to 3 for high length variation across the history.
pub fn commit_length_analysis(commits: &[Commit]) -> f64 {
  if commits.is_empty() {
    return 0.0;
  }

  let lengths: Vec<f64> = commits
    .iter()
    .map(|c| c.message.chars().count() as f64)
    .collect();
  let average = mean(&lengths);

  let mut score = if average < 10.0 {
    8.0
  } else if average < 30.0 {
    4.0
  } else if average <= 100.0 {
    1.0
  } else if average <= 200.0 {
    3.0
  } else {
    6.0
  };

  let stddev = std_dev(&lengths, average);
  score += (stddev / 50.0).min(3.0);

  round2(score).min(10.0)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::calculators::testutil::commit;

  const TS: &str = "2025-01-15T10:00:00+00:00";

  #[test]
  fn ideal_length_uniform_messages_score_one() {
    // Both messages are 42 chars: base band 1, zero variation penalty.
    let commits = vec![
      commit(TS, "feat: add streaming ingest for push events"),
      commit(TS, "test: cover the empty-repository behavior "),
    ];
    assert_eq!(commit_length_analysis(&commits), 1.0);
  }

  #[test]
  fn very_short_messages_score_worst_band() {
    let commits = vec![commit(TS, "wip"), commit(TS, "fix")];
    assert_eq!(commit_length_analysis(&commits), 8.0);
  }

  #[test]
  fn high_variation_adds_penalty() {
    let long = "x".repeat(400);
    let commits = vec![commit(TS, "ok"), commit(TS, &long)];
    // Mean 201 -> band 6; stddev 199 -> penalty capped at 3; total 9.
    assert_eq!(commit_length_analysis(&commits), 9.0);
  }

  #[test]
  fn empty_list_is_zero() {
    assert_eq!(commit_length_analysis(&[]), 0.0);
  }
}
