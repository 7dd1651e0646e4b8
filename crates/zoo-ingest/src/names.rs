//! Candidate name roster loading.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// Loads the candidate name roster: one name per line, surrounding whitespace
/// trimmed, blank lines skipped, file order preserved.
pub fn load_names(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| IngestError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let names: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    debug!(path = %path.display(), count = names.len(), "loaded name roster");
    Ok(names)
}
