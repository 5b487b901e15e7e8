use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing a board for solving.
///
/// All of these are detected before traversal starts; the solver itself never fails.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("failed to read input file {path:?}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open {path:?} for writing")]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("illegal character {character:?} in dictionary word {word:?} (line {line})")]
    MalformedDictionaryEntry {
        line: usize,
        word: String,
        character: char,
    },

    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, SolverError>;
