//! Commit frequency: commits per day over the active span, scaled to 0-20.

use crate::calculators::round2;
use crate::types::Commit;

const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;

/// One or more commits per day earns the full 20; less scales down linearly.
/// The span is fractional but floored at 1 day so a single commit (or a
/// same-day burst) scores as one full day of activity.
pub fn commit_frequency(commits: &[Commit]) -> f64 {
  if commits.is_empty() {
    return 0.0;
  }

  // Sort a local copy; the shared slice stays untouched.
  let mut sorted: Vec<&Commit> = commits.iter().collect();
  sorted.sort_by_key(|c| c.timestamp);

  let first = sorted[0].timestamp;
  let last = sorted[sorted.len() - 1].timestamp;
  let span_days = ((last - first).num_milliseconds() as f64 / MILLIS_PER_DAY).max(1.0);

  let per_day = commits.len() as f64 / span_days;
  round2((per_day * 20.0).min(20.0))
}
