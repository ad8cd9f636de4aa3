//! Time-of-day analysis: additive bonuses for unusual commit-hour patterns.

use chrono::Timelike;

use crate::calculators::round2;
use crate::types::Commit;

const NIGHT_OWL_HOURS: [u32; 6] = [22, 23, 0, 1, 2, 3];
const EARLY_BIRD_HOURS: [u32; 4] = [5, 6, 7, 8];
const NORMAL_HOURS: [u32; 9] = [9, 10, 11, 12, 13, 14, 15, 16, 17];
const LATE_NIGHT_HOURS: [u32; 5] = [0, 1, 2, 3, 4];

/// Higher scores mean more unusual hours. Uses the commit's own local hour
/// (the preserved UTC offset), not the host timezone.
pub fn time_of_day_analysis(commits: &[Commit]) -> f64 {
  if commits.is_empty() {
    return 0.0;
  }

  let mut hour_counts = [0u32; 24];
  for commit in commits {
    hour_counts[commit.timestamp.hour() as usize] += 1;
  }

  let total = commits.len() as f64;
  let ratio_of = |hours: &[u32]| -> f64 {
    hours.iter().map(|&h| hour_counts[h as usize]).sum::<u32>() as f64 / total
  };

  let night_owl = ratio_of(&NIGHT_OWL_HOURS);
  let early_bird = ratio_of(&EARLY_BIRD_HOURS);
  let normal = ratio_of(&NORMAL_HOURS);
  let late_night = ratio_of(&LATE_NIGHT_HOURS);

  let mut score = 0.0;
  if night_owl > 0.4 {
    score += 6.0;
  } else if night_owl > 0.2 {
    score += 3.0;
  }
  if early_bird > 0.4 {
    score += 2.0;
  }
  if normal < 0.3 {
    score += 4.0;
  }
  if late_night > 0.2 {
    score += 3.0;
  }

  round2(score).min(10.0)
}
