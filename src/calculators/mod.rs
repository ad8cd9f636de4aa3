//! Metric calculators and the registry that dispatches to them.
//!
//! Each calculator is a pure function `(&[Commit]) -> f64`: deterministic, no
//! side effects, no dependency on the order calculators run in. The shared
//! commit slice is read-only; calculators that need a time ordering sort a
//! local copy. An empty commit list always yields 0.0.

mod burst;
mod churn;
mod documentation;
mod frequency;
mod message_length;
mod message_quality;
mod time_of_day;
mod work_consistency;

pub use burst::burst_work_pattern;
pub use churn::code_churn;
pub use documentation::documentation_habits;
pub use frequency::commit_frequency;
pub use message_length::commit_length_analysis;
pub use message_quality::commit_message_quality;
pub use time_of_day::time_of_day_analysis;
pub use work_consistency::work_consistency;

use crate::types::{Commit, Metric, MetricResult};

/// Closed registry of calculators, keyed by the `calculator` field of a
/// metric definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calculator {
  CommitFrequency,
  CommitMessageQuality,
  WorkConsistency,
  DocumentationHabits,
  BurstWorkPattern,
  CodeChurn,
  CommitLengthAnalysis,
  TimeOfDayAnalysis,
}

impl Calculator {
  /// Resolve a definition's calculator key, `None` if unknown.
  pub fn from_key(key: &str) -> Option<Self> {
    match key {
      "commit_frequency" => Some(Self::CommitFrequency),
      "commit_message_quality" => Some(Self::CommitMessageQuality),
      "work_consistency" => Some(Self::WorkConsistency),
      "documentation_habits" => Some(Self::DocumentationHabits),
      "burst_work_pattern" => Some(Self::BurstWorkPattern),
      "code_churn" => Some(Self::CodeChurn),
      "commit_length_analysis" => Some(Self::CommitLengthAnalysis),
      "time_of_day_analysis" => Some(Self::TimeOfDayAnalysis),
      _ => None,
    }
  }

  /// Run the calculator over the commit list.
  pub fn compute(self, commits: &[Commit]) -> f64 {
    match self {
      Self::CommitFrequency => commit_frequency(commits),
      Self::CommitMessageQuality => commit_message_quality(commits),
      Self::WorkConsistency => work_consistency(commits),
      Self::DocumentationHabits => documentation_habits(commits),
      Self::BurstWorkPattern => burst_work_pattern(commits),
      Self::CodeChurn => code_churn(commits),
      Self::CommitLengthAnalysis => commit_length_analysis(commits),
      Self::TimeOfDayAnalysis => time_of_day_analysis(commits),
    }
  }
}

/// Evaluate one metric definition against the commit list.
///
/// An unresolvable calculator key degrades to a zero-score result carrying a
/// detail string; it never propagates as an error, so one broken definition
/// cannot abort the rest of the analysis.
pub fn evaluate(commits: &[Commit], metric: &Metric) -> MetricResult {
  let calculator = match Calculator::from_key(&metric.calculator) {
    Some(c) => c,
    None => {
      log::warn!(
        "metric {}: calculator not found: {}",
        metric.id,
        metric.calculator
      );
      return MetricResult {
        metric_id: metric.id.clone(),
        value: 0.0,
        score: 0.0,
        details: Some(format!("calculator not found: {}", metric.calculator)),
      };
    }
  };

  let value = calculator.compute(commits);
  MetricResult {
    metric_id: metric.id.clone(),
    value,
    score: value.clamp(0.0, metric.max),
    details: None,
  }
}

/// Round to 2 decimal places (all metric outputs use this).
pub(crate) fn round2(x: f64) -> f64 {
  (x * 100.0).round() / 100.0
}

/// Arithmetic mean; 0.0 for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
  if values.is_empty() {
    return 0.0;
  }
  values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation around the given mean.
pub(crate) fn std_dev(values: &[f64], mean: f64) -> f64 {
  if values.is_empty() {
    return 0.0;
  }
  let variance =
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
  variance.sqrt()
}

#[cfg(test)]
pub(crate) mod testutil {
  use crate::types::Commit;
  use chrono::DateTime;

  /// Build a commit at the given RFC 3339 timestamp with the given message.
  pub fn commit(ts: &str, message: &str) -> Commit {
    Commit {
      hash: format!("{:x}", message.len() + ts.len()),
      timestamp: DateTime::parse_from_rfc3339(ts).unwrap(),
      message: message.to_string(),
      author_name: "Dev".to_string(),
      author_email: "dev@example.com".to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::testutil::commit;
  use super::*;
  use crate::types::Metric;

  fn metric(calculator: &str, max: f64) -> Metric {
    Metric {
      id: "test-metric".to_string(),
      name: "Test Metric".to_string(),
      description: String::new(),
      weight: 1.0,
      calculator: calculator.to_string(),
      max,
    }
  }

  #[test]
  fn unresolvable_key_degrades_to_zero_with_details() {
    let commits = vec![commit("2025-01-15T10:00:00+00:00", "feat: add thing")];
    let result = evaluate(&commits, &metric("does_not_exist", 20.0));
    assert_eq!(result.value, 0.0);
    assert_eq!(result.score, 0.0);
    let details = result.details.expect("details should be set");
    assert!(details.contains("does_not_exist"));
  }

  #[test]
  fn score_is_clamped_to_metric_max() {
    // Single commit forces frequency to its full 20; a lower declared max wins.
    let commits = vec![commit("2025-01-15T10:00:00+00:00", "feat: add thing")];
    let result = evaluate(&commits, &metric("commit_frequency", 5.0));
    assert_eq!(result.value, 20.0);
    assert_eq!(result.score, 5.0);
    assert!(result.details.is_none());
  }

  #[test]
  fn every_registered_key_resolves() {
    for key in [
      "commit_frequency",
      "commit_message_quality",
      "work_consistency",
      "documentation_habits",
      "burst_work_pattern",
      "code_churn",
      "commit_length_analysis",
      "time_of_day_analysis",
    ] {
      assert!(Calculator::from_key(key).is_some(), "key {} missing", key);
    }
  }

  #[test]
  fn empty_commit_list_yields_zero_everywhere() {
    let commits: Vec<crate::types::Commit> = Vec::new();
    for key in [
      "commit_frequency",
      "commit_message_quality",
      "work_consistency",
      "documentation_habits",
      "burst_work_pattern",
      "code_churn",
      "commit_length_analysis",
      "time_of_day_analysis",
    ] {
      let calc = Calculator::from_key(key).unwrap();
      assert_eq!(calc.compute(&commits), 0.0, "calculator {}", key);
    }
  }
}
