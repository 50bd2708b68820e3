//! Error types and handling infrastructure for seqprep.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types and `anyhow` for application-level error handling with context.
//!
//! ## Design Principles
//!
//! - **Named failures**: every distinct failure mode gets its own variant so
//!   callers can match on it instead of parsing messages
//! - **Fix-it-in-one-pass validation**: validation errors enumerate every
//!   offending value rather than failing on the first bad row
//! - **Consistency**: standardized Result type across all modules

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for seqprep operations.
///
/// This enum covers all possible error conditions that can occur during
/// file access, validation, archiving, and pipeline transformations.
#[derive(Error, Debug)]
pub enum SeqprepError {
    /// File system related errors (open/read/write failures)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// An empty or otherwise unusable path was supplied at construction
    #[error("Invalid path: {message}")]
    InvalidPath { message: String },

    /// The resolved absolute path does not exist on disk
    #[error("Could not find file '{path}'")]
    NotFound { path: PathBuf },

    /// A directory was required but the path is not one
    #[error("Not a valid directory: '{path}'")]
    NotADirectory { path: PathBuf },

    /// A file pattern resolved to more than one file
    #[error("Found multiple matches for the file pattern '{pattern}': {matches:?}")]
    AmbiguousMatch {
        pattern: String,
        matches: Vec<PathBuf>,
    },

    /// A file pattern resolved to no file at all
    #[error("Found no matches for pattern '{pattern}'")]
    NoMatch { pattern: String },

    /// A TSV data row had the wrong number of fields
    #[error(
        "There was a problem parsing file '{path}': found {found} columns at line {line}, expected {expected}"
    )]
    ColumnCount {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    /// One or more values in a TSV column failed its regex full-match
    #[error("Found out-of-pattern data for column '{column}': {values:?}")]
    PatternMismatch { column: String, values: Vec<String> },

    /// A supplied column pattern is not a valid regular expression
    #[error("Invalid pattern for column '{column}': {message}")]
    InvalidPattern { column: String, message: String },

    /// A field could not be parsed as its declared column type
    #[error("Could not parse value '{value}' for column '{column}' as {dtype}")]
    FieldParse {
        column: String,
        value: String,
        dtype: String,
    },

    /// Archive creation or extraction errors
    #[error("Archive operation failed: {message}")]
    Archive { message: String },

    /// JSON parsing or serialization errors
    #[error("JSON operation failed: {message}")]
    Json { message: String },

    /// A FASTA file contained no records where at least one was required
    #[error("FASTA file contains no records: '{path}'")]
    EmptyFasta { path: PathBuf },

    /// The requested object does not exist in the object store
    #[error("Object '{key}' does not exist in the store")]
    ObjectNotFound { key: String },
}

/// Standard Result type for seqprep operations.
///
/// This type alias provides a consistent error handling interface across
/// all modules in the seqprep codebase.
pub type Result<T> = std::result::Result<T, SeqprepError>;

impl SeqprepError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create an InvalidPath error with a descriptive message
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPath {
            message: message.into(),
        }
    }

    /// Create an Archive error with a descriptive message
    pub fn archive(message: impl Into<String>) -> Self {
        Self::Archive {
            message: message.into(),
        }
    }

    /// Create a Json error with a descriptive message
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }
}

// Automatic conversion from io::Error to SeqprepError
impl From<std::io::Error> for SeqprepError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
                // The path context is lost here; call sites that know the
                // path use NotFound { path } directly instead.
                message: "File not found".to_string(),
                source: err,
            },
            std::io::ErrorKind::PermissionDenied => Self::FileError {
                message: "Permission denied".to_string(),
                source: err,
            },
            _ => Self::FileError {
                message: "IO operation failed".to_string(),
                source: err,
            },
        }
    }
}

impl From<serde_json::Error> for SeqprepError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
        }
    }
}
