//! Core types for the habit engine (JSON contracts + internal models).

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// One inbound commit record from stdin. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundCommit {
  pub hash: String,
  /// RFC 3339 timestamp, offset included (e.g. "2025-01-15T10:30:00+02:00").
  pub timestamp: String,
  pub message: String,
  #[serde(default)]
  pub author_name: String,
  #[serde(default)]
  pub author_email: String,
}

// ---------------------------------------------------------------------------
// Internal normalized types
// ---------------------------------------------------------------------------

/// Canonical commit after normalization + validation.
///
/// The timestamp keeps the commit's own UTC offset: calendar-day, weekday,
/// and hour-of-day metrics are defined over the author's local time.
#[derive(Debug, Clone)]
pub struct Commit {
  pub hash: String,
  pub timestamp: DateTime<FixedOffset>,
  pub message: String,
  pub author_name: String,
  pub author_email: String,
}

// ---------------------------------------------------------------------------
// Definition types (loaded from data files)
// ---------------------------------------------------------------------------

/// One metric definition, loaded from `<data>/metrics/*.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
  pub id: String,
  pub name: String,
  pub description: String,
  /// Carried for forward compatibility; does not enter the score computation.
  pub weight: f64,
  /// Key into the calculator registry (e.g. "commit_frequency").
  pub calculator: String,
  /// Upper bound for this metric's score.
  pub max: f64,
}

/// Comparison operator for achievement requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
  #[serde(rename = ">=")]
  Ge,
  #[serde(rename = "<=")]
  Le,
  #[serde(rename = ">")]
  Gt,
  #[serde(rename = "<")]
  Lt,
}

impl ComparisonOp {
  /// Apply the operator to (metric score, requirement threshold).
  pub fn holds(self, score: f64, threshold: f64) -> bool {
    match self {
      Self::Ge => score >= threshold,
      Self::Le => score <= threshold,
      Self::Gt => score > threshold,
      Self::Lt => score < threshold,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
  Positive,
  Negative,
  Neutral,
}

/// Threshold rule tying an achievement to one metric's score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requirement {
  pub metric: String,
  pub operator: ComparisonOp,
  pub value: f64,
}

/// One achievement definition, loaded from `<data>/achievements/*.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
  pub id: String,
  pub title: String,
  pub description: String,
  pub requirement: Requirement,
  pub badge: String,
  pub category: AchievementCategory,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// Result of evaluating one metric over the commit list.
#[derive(Debug, Clone, Serialize)]
pub struct MetricResult {
  pub metric_id: String,
  /// Raw calculator output, before clamping.
  pub value: f64,
  /// Clamped to [0, metric.max].
  pub score: f64,
  /// Set when the metric degraded to zero (e.g. unresolvable calculator key).
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<String>,
}

/// Min/max commit timestamp across the analyzed set.
#[derive(Debug, Clone, Serialize)]
pub struct DateRange {
  pub start: DateTime<FixedOffset>,
  pub end: DateTime<FixedOffset>,
}

/// The full analysis for one repository. Read-only after construction.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryAnalysis {
  pub repository: String,
  pub total_commits: usize,
  pub date_range: DateRange,
  /// One result per configured metric, in definition order.
  pub metrics: Vec<MetricResult>,
  pub total_score: f64,
  pub max_score: f64,
}
