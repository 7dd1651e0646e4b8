//! Report pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: load the name roster and the arrival lines
//! 2. **Process**: parse, derive, and admit each arrival in input order
//! 3. **Output**: group by habitat and write the population report
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. The whole run is sequential: records are admitted and ID-assigned
//! in the exact order lines appear in the arrivals file.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use zoo_ingest::{SourceLine, load_names, parse_arrival, read_lines};
use zoo_model::{AnimalRecord, Registry};
use zoo_report::write_population;

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    /// Candidate names in roster order.
    pub names: Vec<String>,
    /// Non-blank arrival lines with their original file numbering.
    pub arrivals: Vec<SourceLine>,
}

/// Loads both input files. Either file failing to open aborts the run; no
/// report is written.
pub fn ingest(names_path: &Path, arrivals_path: &Path) -> Result<IngestResult> {
    let names = load_names(names_path).context("load name roster")?;
    let arrivals = read_lines(arrivals_path).context("load arrivals")?;
    Ok(IngestResult { names, arrivals })
}

/// Result of the process stage.
#[derive(Debug)]
pub struct ProcessResult {
    /// Admitted residents in arrival order.
    pub animals: Vec<AnimalRecord>,
    /// Arrival lines that were skipped with a warning.
    pub skipped: Vec<SkippedLine>,
}

/// An arrival line that could not be parsed.
#[derive(Debug, Clone)]
pub struct SkippedLine {
    pub number: usize,
    pub text: String,
    pub reason: String,
}

/// Parses each arrival line and admits it through the registry. Malformed
/// lines are skipped with a warning; processing always continues.
pub fn process(arrivals: &[SourceLine], names: Vec<String>) -> ProcessResult {
    let mut registry = Registry::new(names);
    let mut animals = Vec::new();
    let mut skipped = Vec::new();
    for line in arrivals {
        match parse_arrival(&line.text) {
            Ok(arrival) => animals.push(registry.admit(arrival)),
            Err(error) => {
                warn!(line = line.number, %error, "skipping arrival line");
                skipped.push(SkippedLine {
                    number: line.number,
                    text: line.text.clone(),
                    reason: error.to_string(),
                });
            }
        }
    }
    ProcessResult { animals, skipped }
}

/// Writes the population report, overwriting any previous output. Returns
/// `false` when `dry_run` suppressed the write.
pub fn output(path: &Path, animals: &[AnimalRecord], dry_run: bool) -> Result<bool> {
    if dry_run {
        return Ok(false);
    }
    write_population(path, animals)?;
    Ok(true)
}
