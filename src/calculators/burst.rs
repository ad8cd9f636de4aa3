//! Burst work pattern: variability of daily commit counts.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::calculators::{mean, round2, std_dev};
use crate::types::Commit;

/// Coefficient of variation of commits-per-day, scaled by 10 and capped at
/// 20. A steady one-commit-a-day cadence scores 0; feast-and-famine spikes
/// score high.
pub fn burst_work_pattern(commits: &[Commit]) -> f64 {
  if commits.is_empty() {
    return 0.0;
  }

  // Group by the commit's local calendar day.
  let mut by_day: HashMap<NaiveDate, u32> = HashMap::new();
  for commit in commits {
    *by_day.entry(commit.timestamp.date_naive()).or_insert(0) += 1;
  }

  let daily_counts: Vec<f64> = by_day.values().map(|&c| c as f64).collect();
  let avg = mean(&daily_counts);
  let stddev = std_dev(&daily_counts, avg);

  let coefficient_of_variation = if avg > 0.0 { stddev / avg } else { 0.0 };
  round2((coefficient_of_variation * 10.0).min(20.0))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::calculators::testutil::commit;

  #[test]
  fn steady_daily_cadence_scores_zero() {
    let commits: Vec<_> = (10..15)
      .map(|d| commit(&format!("2025-01-{:02}T09:00:00+00:00", d), "work"))
      .collect();
    assert_eq!(burst_work_pattern(&commits), 0.0);
  }

  #[test]
  fn bursty_days_score_high() {
    // 10 commits on one day, then 1 each on the next two.
    let mut commits: Vec<_> = (0..10)
      .map(|i| commit(&format!("2025-01-10T{:02}:00:00+00:00", 8 + i), "burst"))
      .collect();
    commits.push(commit("2025-01-11T09:00:00+00:00", "trickle"));
    commits.push(commit("2025-01-12T09:00:00+00:00", "trickle"));

    // Daily counts [10, 1, 1]: mean 4, stddev ~4.243, cv ~1.061 -> 10.61.
    assert_eq!(burst_work_pattern(&commits), 10.61);
  }

  #[test]
  fn single_day_scores_zero() {
    let commits = vec![
      commit("2025-01-10T09:00:00+00:00", "a"),
      commit("2025-01-10T11:00:00+00:00", "b"),
    ];
    // One bucket: no variation.
    assert_eq!(burst_work_pattern(&commits), 0.0);
  }

  #[test]
  fn empty_list_is_zero() {
    assert_eq!(burst_work_pattern(&[]), 0.0);
  }
}
