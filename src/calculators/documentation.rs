//! Documentation habits: share of doc-related commits, peaking at a 15% ratio.

use regex::Regex;

use crate::calculators::round2;
use crate::types::Commit;

/// The sweet spot is ~15% documentation commits: the score climbs linearly to
/// 20 at that ratio, then falls off steeply (all-docs repositories score 0).
pub fn documentation_habits(commits: &[Commit]) -> f64 {
  if commits.is_empty() {
    return 0.0;
  }

  let doc_keywords = Regex::new(r"(?i)doc|readme|md|changelog|guide|tutorial").unwrap();

  let doc_commits = commits
    .iter()
    .filter(|c| {
      let lowered = c.message.to_lowercase();
      doc_keywords.is_match(&c.message)
        || lowered.contains(".md")
        || lowered.contains("documentation")
    })
    .count();

  let ratio = doc_commits as f64 / commits.len() as f64;

  let score = if ratio <= 0.15 {
    ratio / 0.15 * 20.0
  } else {
    20.0 - (ratio - 0.15) * 50.0
  };

  round2(score.clamp(0.0, 20.0))
}
