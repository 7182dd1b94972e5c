//! Error types and handling infrastructure for lexlookup.
//!
//! Loading a word list can fail in many ways (missing file, broken compression,
//! malformed lines, unsorted input). Searching cannot fail: a lookup either finds
//! a record or it doesn't, and that is expressed with `Option`, not with this type.
//!
//! The library uses `thiserror` for [`LookupError`]; the binary wraps it in
//! `anyhow` for top-level reporting.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for lexlookup operations.
#[derive(Error, Debug)]
pub enum LookupError {
    /// File system related errors (permission denied, read failures, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found specifically (common case for user feedback)
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// Word list exists but contains no bytes
    #[error("File is empty: {path}")]
    EmptyFile { path: PathBuf },

    /// Memory mapping related errors
    #[error("Memory mapping failed: {message}")]
    MemoryMappingError { message: String },

    /// Compression format detection or decompression errors
    #[error("Compression error: {message}")]
    CompressionError { message: String },

    /// A word list line that cannot be turned into a record (1-based line number)
    #[error("Malformed record on line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    /// Records are not in ascending byte order of their variant
    #[error(
        "Word list is not sorted: record {position} ({current:?}) sorts before its predecessor ({previous:?})"
    )]
    UnsortedInput {
        position: usize,
        previous: String,
        current: String,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for lexlookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;

impl LookupError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a MemoryMappingError with a descriptive message
    pub fn memory_mapping(message: impl Into<String>) -> Self {
        Self::MemoryMappingError {
            message: message.into(),
        }
    }

    /// Create a CompressionError with a descriptive message
    pub fn compression(message: impl Into<String>) -> Self {
        Self::CompressionError {
            message: message.into(),
        }
    }

    /// Create a MalformedRecord error for a 1-based line number
    pub fn malformed(line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

// Automatic conversion from io::Error to LookupError
impl From<std::io::Error> for LookupError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::FileError {
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_messages() {
        let path = PathBuf::from("/data/fullforms.csv");

        let file_not_found = LookupError::FileNotFound { path: path.clone() };
        assert_eq!(
            file_not_found.to_string(),
            "File not found: /data/fullforms.csv"
        );

        let empty = LookupError::EmptyFile { path };
        assert_eq!(empty.to_string(), "File is empty: /data/fullforms.csv");

        let malformed = LookupError::malformed(17, "expected 5 fields, found 3");
        assert_eq!(
            malformed.to_string(),
            "Malformed record on line 17: expected 5 fields, found 3"
        );
    }

    #[test]
    fn test_unsorted_message_names_both_records() {
        let err = LookupError::UnsortedInput {
            position: 4,
            previous: "kat".to_string(),
            current: "hund".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("record 4"));
        assert!(message.contains("\"kat\""));
        assert!(message.contains("\"hund\""));
    }

    #[test]
    fn test_error_constructors() {
        assert!(matches!(
            LookupError::compression("bad gzip header"),
            LookupError::CompressionError { .. }
        ));
        assert!(matches!(
            LookupError::config("unknown key"),
            LookupError::ConfigError { .. }
        ));
        assert_eq!(
            LookupError::invalid_argument("no word list").to_string(),
            "Invalid argument: no word list"
        );
        assert!(matches!(
            LookupError::other("Unknown error"),
            LookupError::Other { .. }
        ));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: LookupError = io_err.into();

        match err {
            LookupError::FileError { message, .. } => {
                assert_eq!(message, "Permission denied");
            }
            _ => panic!("Expected FileError variant"),
        }
    }
}
