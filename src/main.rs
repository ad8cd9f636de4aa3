//! Binary entrypoint: read one JSON object from stdin, write the report to
//! stdout.
//!
//! Usage:
//!   habit-engine [--data <dir>] [--pretty] < input.json
//!
//! Input: {"repository": "...", "commits": [{hash, timestamp, message,
//! author_name, author_email}, ...]}. Metric and achievement definitions are
//! loaded from `<dir>/metrics` and `<dir>/achievements` (default `data/`).
//! Output is a JSON report, or a plain-text one with `--pretty`.

use std::env;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use habit_engine::types::Achievement;
use habit_engine::{achievements, analyzer, loader, normalize, report};
use habit_engine::{InboundCommit, RepositoryAnalysis};

#[derive(Debug, Deserialize)]
struct Input {
  repository: String,
  commits: Vec<InboundCommit>,
}

#[derive(Debug, Serialize)]
struct Output<'a> {
  analysis: &'a RepositoryAnalysis,
  achievements: Vec<&'a Achievement>,
}

fn main() {
  env_logger::init();
  if let Err(e) = run() {
    let _ = writeln!(io::stderr(), "habit-engine error: {}", e);
    std::process::exit(1);
  }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
  let args: Vec<String> = env::args().collect();
  let pretty = args.iter().any(|a| a == "--pretty");
  let data_dir = match args.iter().position(|a| a == "--data") {
    Some(i) => PathBuf::from(args.get(i + 1).ok_or("--data requires a directory")?),
    None => PathBuf::from("data"),
  };

  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;
  let input: Input = serde_json::from_str(&raw)?;

  let metrics = loader::load_metrics(&data_dir.join("metrics"))?;
  let achievement_defs = loader::load_achievements(&data_dir.join("achievements"))?;

  let commits = normalize::commits(&input.commits)?;
  let analysis = analyzer::analyze(&input.repository, &commits, &metrics)?;
  let earned = achievements::earned(&analysis.metrics, &achievement_defs);

  let stdout = io::stdout();
  let mut out = stdout.lock();
  if pretty {
    out.write_all(report::render(&analysis, &metrics, &earned).as_bytes())?;
  } else {
    let output = Output {
      analysis: &analysis,
      achievements: earned,
    };
    serde_json::to_writer(&mut out, &output)?;
    writeln!(out)?;
  }
  Ok(())
}
