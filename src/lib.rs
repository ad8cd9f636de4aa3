//! Habit Engine — gamified developer-habits scoring, deterministic and
//! rule-based.
//!
//! Takes an ordered list of commit records, runs a set of independent metric
//! calculators over them (frequency, message quality, consistency,
//! documentation, burstiness, churn, message length, time of day), sums the
//! clamped scores into a total, and evaluates declarative achievement
//! thresholds against the per-metric results.
//!
//! No AI, no DB, no network; pure computation over an in-memory commit list.

pub mod achievements;
pub mod analyzer;
pub mod calculators;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod report;
pub mod types;

pub use analyzer::analyze;
pub use error::EngineError;
pub use types::{Achievement, Commit, InboundCommit, Metric, RepositoryAnalysis};
