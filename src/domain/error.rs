use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for a classification run.
///
/// Every variant aborts the whole run; there is no per-line recovery.
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Cannot open input file '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Read error at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing score field at line {line}: found {fields} field(s), expected at least 2")]
    MissingField { line: usize, fields: usize },

    #[error("Invalid score '{field}' at line {line}: {reason}")]
    InvalidScore {
        line: usize,
        field: String,
        reason: String,
    },

    #[error("Output error: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },
}

impl ClassifierError {
    /// Line number the error refers to, if it was raised while processing a line.
    pub fn line(&self) -> Option<usize> {
        match self {
            ClassifierError::Read { line, .. }
            | ClassifierError::MissingField { line, .. }
            | ClassifierError::InvalidScore { line, .. } => Some(*line),
            ClassifierError::Open { .. } | ClassifierError::Write { .. } => None,
        }
    }
}
