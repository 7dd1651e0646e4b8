//! Line-oriented input with blank-line skipping.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{IngestError, Result};

/// One non-blank input line, numbered 1-based against the original file so
/// warnings point at the right place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

/// Reads a line-oriented text file, skipping blank (whitespace-only) lines.
pub fn read_lines(path: &Path) -> Result<Vec<SourceLine>> {
    let contents = fs::read_to_string(path).map_err(|source| IngestError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Vec<SourceLine> = contents
        .lines()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(index, text)| SourceLine {
            number: index + 1,
            text: text.to_string(),
        })
        .collect();
    debug!(path = %path.display(), count = lines.len(), "read input lines");
    Ok(lines)
}
