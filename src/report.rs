//! Plain-text report rendering. Formatting only — no computation beyond
//! percentages, and nothing here feeds back into the analysis.

use std::fmt::Write;

use crate::types::{Achievement, Metric, RepositoryAnalysis};

/// Render the analysis and earned achievements as a terminal-friendly
/// text report.
pub fn render(
  analysis: &RepositoryAnalysis,
  metrics: &[Metric],
  earned: &[&Achievement],
) -> String {
  let mut out = String::new();

  let overall_pct = if analysis.max_score > 0.0 {
    (analysis.total_score / analysis.max_score * 100.0).round()
  } else {
    0.0
  };

  let _ = writeln!(out, "Developer Habits Score");
  let _ = writeln!(out, "{}", "-".repeat(40));
  let _ = writeln!(
    out,
    "{:.1}/{:.1} ({}%)",
    analysis.total_score, analysis.max_score, overall_pct
  );
  let _ = writeln!(out);
  let _ = writeln!(out, "Repository:       {}", analysis.repository);
  let _ = writeln!(out, "Commits analyzed: {}", analysis.total_commits);
  let _ = writeln!(
    out,
    "Date range:       {} - {}",
    analysis.date_range.start.format("%Y-%m-%d"),
    analysis.date_range.end.format("%Y-%m-%d")
  );
  let _ = writeln!(out);

  let _ = writeln!(out, "Metrics");
  let _ = writeln!(out, "{}", "-".repeat(40));
  for result in &analysis.metrics {
    let (name, pct) = match metrics.iter().find(|m| m.id == result.metric_id) {
      Some(m) => (m.name.as_str(), percentage(result.score, m.max)),
      None => (result.metric_id.as_str(), 0),
    };
    let _ = writeln!(out, "  {:<24} {:>6.1}  ({:>3}%)", name, result.score, pct);
    if let Some(details) = &result.details {
      let _ = writeln!(out, "    {}", details);
    }
  }

  let insights = insights(analysis, metrics);
  if !insights.is_empty() {
    let _ = writeln!(out);
    let _ = writeln!(out, "Insights");
    let _ = writeln!(out, "{}", "-".repeat(40));
    for insight in insights {
      let _ = writeln!(out, "  - {}", insight);
    }
  }

  let _ = writeln!(out);
  let _ = writeln!(out, "Achievements");
  let _ = writeln!(out, "{}", "-".repeat(40));
  if earned.is_empty() {
    let _ = writeln!(out, "  none earned yet");
  } else {
    for achievement in earned {
      let _ = writeln!(
        out,
        "  {} {}: {}",
        achievement.badge, achievement.title, achievement.description
      );
    }
  }

  out
}

fn percentage(score: f64, max: f64) -> i64 {
  if max > 0.0 {
    (score / max * 100.0).round() as i64
  } else {
    0
  }
}

/// Rule-based one-liners keyed by metric id and the score's share of its max.
fn insights(analysis: &RepositoryAnalysis, metrics: &[Metric]) -> Vec<String> {
  let mut out = Vec::new();

  for result in &analysis.metrics {
    let Some(metric) = metrics.iter().find(|m| m.id == result.metric_id) else {
      continue;
    };
    let pct = percentage(result.score, metric.max);

    match result.metric_id.as_str() {
      "commit-frequency" => {
        if pct < 50 {
          out.push("Try to commit more consistently to build better habits".to_string());
        } else if pct >= 80 {
          out.push("Great job maintaining consistent commit frequency!".to_string());
        }
      }
      "commit-message-quality" => {
        if pct < 60 {
          out.push("Focus on writing more descriptive commit messages".to_string());
        } else if pct >= 80 {
          out.push("Excellent commit message quality! Very professional.".to_string());
        }
      }
      "work-consistency" => {
        if pct < 40 {
          out.push(
            "Consider spreading your work more evenly throughout the week".to_string(),
          );
        }
      }
      "documentation-habits" => {
        if pct < 50 {
          out.push("Remember to update documentation with your code changes".to_string());
        } else if pct >= 80 {
          out.push(
            "Fantastic documentation habits! Your future self thanks you.".to_string(),
          );
        }
      }
      "burst-work-pattern" => {
        if pct >= 70 {
          out.push("You tend to work in focused bursts - embrace your flow!".to_string());
        } else {
          out.push("You maintain a steady, consistent work pace".to_string());
        }
      }
      _ => {}
    }
  }

  out
}
