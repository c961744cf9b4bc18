//! Error types for CSV scanning and fixture loading

use thiserror::Error;

/// Failure reported by a strict-mode parse
///
/// Lines and columns are 1-based. Columns count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Opening quote with no closing quote before the end of the line
    #[error("malformed field at line {line}, column {column}: no closing quote found")]
    MalformedField { line: usize, column: usize },

    /// Closing quote followed by something other than a delimiter or end of line
    #[error("unexpected character {found:?} after closing quote at line {line}, column {column}")]
    UnexpectedCharacterAfterQuote {
        line: usize,
        column: usize,
        found: char,
    },
}

impl ParseError {
    /// Line the error was found on
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedField { line, .. } => *line,
            ParseError::UnexpectedCharacterAfterQuote { line, .. } => *line,
        }
    }

    /// Column the error points at
    pub fn column(&self) -> usize {
        match self {
            ParseError::MalformedField { column, .. } => *column,
            ParseError::UnexpectedCharacterAfterQuote { column, .. } => *column,
        }
    }
}

/// Crate-level error for loading, configuring and parsing
#[derive(Debug, Error)]
pub enum CsvError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid parser options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, CsvError>;
