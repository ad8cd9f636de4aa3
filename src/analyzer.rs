//! Analysis aggregator: runs every configured metric over the commit list.

use crate::calculators;
use crate::error::EngineError;
use crate::types::{Commit, DateRange, Metric, MetricResult, RepositoryAnalysis};

/// Produce a `RepositoryAnalysis` for a non-empty commit list.
///
/// Metrics are evaluated in definition order and results preserve that
/// order. Per-metric failures degrade to zero-score results inside the
/// dispatcher; only an empty commit list is fatal here (the date range is
/// undefined without commits, so this is checked before any metric runs).
pub fn analyze(
  repository: &str,
  commits: &[Commit],
  metrics: &[Metric],
) -> Result<RepositoryAnalysis, EngineError> {
  if commits.is_empty() {
    return Err(EngineError::NoCommits);
  }

  let start = commits
    .iter()
    .map(|c| c.timestamp)
    .min()
    .ok_or(EngineError::NoCommits)?;
  let end = commits
    .iter()
    .map(|c| c.timestamp)
    .max()
    .ok_or(EngineError::NoCommits)?;

  let mut results: Vec<MetricResult> = Vec::with_capacity(metrics.len());
  let mut total_score = 0.0;
  let mut max_score = 0.0;

  for metric in metrics {
    let result = calculators::evaluate(commits, metric);
    total_score += result.score;
    max_score += metric.max;
    results.push(result);
  }

  Ok(RepositoryAnalysis {
    repository: repository.to_string(),
    total_commits: commits.len(),
    date_range: DateRange { start, end },
    metrics: results,
    total_score,
    max_score,
  })
}
