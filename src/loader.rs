//! Definition loader: metric and achievement JSON files, one per file.
//!
//! A missing directory is fatal; a file that fails to parse or validate is
//! logged and skipped so one bad contributor file never takes down the run.
//! Listings are sorted by file name, which fixes definition order (and
//! therefore metric output order) across platforms.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::EngineError;
use crate::types::{Achievement, Metric};

/// Load all metric definitions from `<dir>/*.json`.
pub fn load_metrics(dir: &Path) -> Result<Vec<Metric>, EngineError> {
  load_definitions(dir, "metric", |metric: &Metric| {
    if metric.id.is_empty() {
      return Some("id must not be empty".to_string());
    }
    if !metric.max.is_finite() || metric.max <= 0.0 {
      return Some(format!("max must be positive, got {}", metric.max));
    }
    None
  })
}

/// Load all achievement definitions from `<dir>/*.json`.
pub fn load_achievements(dir: &Path) -> Result<Vec<Achievement>, EngineError> {
  load_definitions(dir, "achievement", |a: &Achievement| {
    if a.id.is_empty() {
      return Some("id must not be empty".to_string());
    }
    if !a.requirement.value.is_finite() {
      return Some(format!(
        "requirement.value must be finite, got {}",
        a.requirement.value
      ));
    }
    None
  })
}

fn load_definitions<T, F>(dir: &Path, kind: &str, invalid: F) -> Result<Vec<T>, EngineError>
where
  T: serde::de::DeserializeOwned,
  F: Fn(&T) -> Option<String>,
{
  if !dir.is_dir() {
    return Err(EngineError::DefinitionDir(dir.display().to_string()));
  }

  let mut files: Vec<PathBuf> = fs::read_dir(dir)?
    .filter_map(|entry| entry.ok())
    .map(|entry| entry.path())
    .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
    .collect();
  files.sort();

  let mut definitions = Vec::with_capacity(files.len());
  for path in files {
    let contents = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) => {
        log::warn!("skipping {} file {}: {}", kind, path.display(), e);
        continue;
      }
    };
    let definition: T = match serde_json::from_str(&contents) {
      Ok(d) => d,
      Err(e) => {
        log::warn!("skipping {} file {}: {}", kind, path.display(), e);
        continue;
      }
    };
    if let Some(reason) = invalid(&definition) {
      log::warn!("skipping {} file {}: {}", kind, path.display(), reason);
      continue;
    }
    definitions.push(definition);
  }
  Ok(definitions)
}
