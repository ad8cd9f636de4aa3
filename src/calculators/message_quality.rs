//! Commit message quality: per-commit rubric averaged and rescaled to 0-25.

use regex::Regex;

use crate::calculators::round2;
use crate::types::Commit;

/// Score each message on a 0-100 rubric, average, and rescale to 0-25.
///
/// Rubric: +20 length > 10, +15 uppercase first letter, +30 conventional
/// commit prefix, +20 body separated from the subject by a blank line,
/// -10 trivial message (len < 5 or a fix/update/wip/tmp placeholder),
/// -10 uniformly upper-case.
pub fn commit_message_quality(commits: &[Commit]) -> f64 {
  if commits.is_empty() {
    return 0.0;
  }

  let conventional =
    Regex::new(r"^(feat|fix|docs|style|refactor|test|chore)(\(.+\))?: .+").unwrap();
  let placeholder = Regex::new(r"(?i)^(fix|update|wip|tmp)").unwrap();

  let mut total = 0.0;
  for commit in commits {
    let message = commit.message.as_str();
    let len = message.chars().count();
    let mut score: f64 = 0.0;

    if len > 10 {
      score += 20.0;
    }
    if message.chars().next().is_some_and(|c| c.is_uppercase()) {
      score += 15.0;
    }
    if conventional.is_match(message) {
      score += 30.0;
    }
    // Explanatory body: subject, blank line, then at least one more line.
    let lines: Vec<&str> = message.split('\n').collect();
    if lines.len() > 2 && lines[1].trim().is_empty() {
      score += 20.0;
    }
    if len < 5 || placeholder.is_match(message) {
      score -= 10.0;
    }
    if !message.is_empty()
      && message == message.to_uppercase()
      && message != message.to_lowercase()
    {
      score -= 10.0;
    }

    total += score.clamp(0.0, 100.0);
  }

  let average = total / commits.len() as f64;
  round2(average / 100.0 * 25.0)
}
