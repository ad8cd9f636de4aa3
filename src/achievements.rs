//! Achievement evaluator: declarative threshold rules over metric results.

use crate::types::{Achievement, MetricResult};

/// Return the achievements whose requirement holds, in input order.
///
/// A requirement referencing a metric with no result is skipped: not earned,
/// not an error (the definition may target a metric the caller did not
/// configure).
pub fn earned<'a>(
  results: &[MetricResult],
  achievements: &'a [Achievement],
) -> Vec<&'a Achievement> {
  achievements
    .iter()
    .filter(|a| {
      results
        .iter()
        .find(|r| r.metric_id == a.requirement.metric)
        .is_some_and(|r| a.requirement.operator.holds(r.score, a.requirement.value))
    })
    .collect()
}
