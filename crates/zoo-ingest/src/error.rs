//! Error types for zoo data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run: an input file could not be read at all.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file missing or unreadable.
    #[error("failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Errors local to a single arrival line. The line is skipped with a warning
/// and the run continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Fewer than the five comma-separated clauses the grammar requires.
    #[error("expected at least 5 comma-separated clauses, found {found}")]
    IncompleteLine { found: usize },

    /// The age token is not a non-negative integer.
    #[error("age is not a number: '{token}'")]
    BadAge { token: String },

    /// The weight token is not a non-negative integer.
    #[error("weight is not a number: '{token}'")]
    BadWeight { token: String },

    /// A clause has fewer words than the grammar reads from it.
    #[error("clause is missing expected words: '{clause}'")]
    MalformedClause { clause: String },
}
