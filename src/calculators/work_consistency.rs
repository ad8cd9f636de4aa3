//! Work consistency: how evenly commits spread across the days of the week.

use chrono::Datelike;

use crate::calculators::round2;
use crate::types::Commit;

/// Bucket commits by weekday (Sunday-first) and compare against an even
/// split. Zero deviation from the ideal scores the full 15.
pub fn work_consistency(commits: &[Commit]) -> f64 {
  if commits.is_empty() {
    return 0.0;
  }

  let mut by_weekday = [0u32; 7];
  for commit in commits {
    let day = commit.timestamp.weekday().num_days_from_sunday() as usize;
    by_weekday[day] += 1;
  }

  let total = commits.len() as f64;
  let ideal_per_day = total / 7.0;

  let variance: f64 = by_weekday
    .iter()
    .map(|&count| {
      let diff = count as f64 - ideal_per_day;
      diff * diff
    })
    .sum();

  // Everything on one weekday approaches variance = total^2.
  let max_variance = total * total;
  let consistency = (1.0 - variance / max_variance).max(0.0);
  round2(consistency * 15.0)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::calculators::testutil::commit;

  #[test]
  fn one_commit_per_weekday_scores_full() {
    // 2025-01-12 is a Sunday; seven consecutive days cover every weekday.
    let commits: Vec<_> = (12..19)
      .map(|d| commit(&format!("2025-01-{:02}T10:00:00+00:00", d), "work"))
      .collect();
    assert_eq!(work_consistency(&commits), 15.0);
  }

  #[test]
  fn single_weekday_scores_low() {
    // Four commits, all on Mondays.
    let commits: Vec<_> = [6, 13, 20, 27]
      .iter()
      .map(|d| commit(&format!("2025-01-{:02}T10:00:00+00:00", d), "work"))
      .collect();
    let score = work_consistency(&commits);
    assert!(score < 5.0, "clustered weekdays should score low, got {}", score);
  }

  #[test]
  fn score_stays_within_bounds() {
    let commits = vec![commit("2025-01-15T10:00:00+00:00", "only one")];
    let score = work_consistency(&commits);
    assert!((0.0..=15.0).contains(&score));
  }

  #[test]
  fn empty_list_is_zero() {
    assert_eq!(work_consistency(&[]), 0.0);
  }
}
