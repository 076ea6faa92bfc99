//! Error types for moxifier

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Broad class of a [`MoxifyError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not a well-formed Dragon Shield export
    Format,
    /// A file could not be opened, read or written
    Io,
    /// A field holds a value that cannot be used (e.g. a non-numeric quantity)
    Value,
}

/// Unified error type for moxifier operations
#[derive(Debug, Error)]
pub enum MoxifyError {
    /// Input file does not exist
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Input file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created or written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File has no delimiter declaration line at all
    #[error("missing delimiter declaration in {}", path.display())]
    MissingDelimiter { path: PathBuf },

    /// First line is not a `sep=<char>` style declaration
    #[error("invalid delimiter declaration {line:?} in {}", path.display())]
    InvalidDelimiter { path: PathBuf, line: String },

    /// Header row lacks a column the converter depends on
    #[error("required column '{column}' not found in {}", path.display())]
    MissingColumn { column: &'static str, path: PathBuf },

    /// Data row ends before a required column
    #[error("row {row} in {} has no value for column '{column}'", path.display())]
    IncompleteRow {
        row: u64,
        column: &'static str,
        path: PathBuf,
    },

    /// CSV reader failed on the body of the file
    #[error("failed to parse CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Quantity is not a non-negative integer
    #[error("invalid quantity {value:?} for card '{card}': {source}")]
    InvalidQuantity {
        card: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Card total no longer fits a u64
    #[error("card count overflows at '{card}'")]
    CountOverflow { card: String },
}

impl MoxifyError {
    /// Classifies the error into format, I/O or value problems
    pub fn kind(&self) -> ErrorKind {
        match self {
            MoxifyError::FileNotFound { .. }
            | MoxifyError::Read { .. }
            | MoxifyError::Write { .. } => ErrorKind::Io,
            MoxifyError::Csv { source, .. } if source.is_io_error() => ErrorKind::Io,
            MoxifyError::MissingDelimiter { .. }
            | MoxifyError::InvalidDelimiter { .. }
            | MoxifyError::MissingColumn { .. }
            | MoxifyError::IncompleteRow { .. }
            | MoxifyError::Csv { .. } => ErrorKind::Format,
            MoxifyError::InvalidQuantity { .. } | MoxifyError::CountOverflow { .. } => {
                ErrorKind::Value
            }
        }
    }
}

/// Result alias for moxifier operations
pub type Result<T> = std::result::Result<T, MoxifyError>;
