//! Code churn: message-keyword proxy for rework, scaled to 0-15.

use regex::Regex;

use crate::calculators::round2;
use crate::types::Commit;

/// Per-file churn stats are not part of the commit record, so rework is
/// inferred from message keywords. A higher ratio of fix/refactor/revert
/// style commits scores higher (more problematic).
pub fn code_churn(commits: &[Commit]) -> f64 {
  if commits.is_empty() {
    return 0.0;
  }

  let churn_indicators = Regex::new(r"(?i)fix|refactor|revert|hotfix|patch|bug").unwrap();

  let churn_commits = commits
    .iter()
    .filter(|c| churn_indicators.is_match(&c.message))
    .count();

  let ratio = churn_commits as f64 / commits.len() as f64;
  round2(ratio * 15.0)
}
