//! Shared error types for report generation
//!
//! Structural problems in the authored data (a table row with the wrong
//! number of cells, an unsupported heading level) are unrecoverable and
//! abort generation. Data-availability problems (missing statistics, dangling
//! component references) never surface here; they degrade to placeholders.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for framework-matrix operations
#[derive(Debug, Error)]
pub enum ReportError {
    /// Heading level outside the supported `1..=2` range
    #[error("Markup error: heading level {level} is not supported (expected 1 or 2)")]
    InvalidHeadingLevel { level: u8 },

    /// Table row whose cell count differs from the header
    #[error("Markup error: table row {row} has {actual} cells but the header has {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Catalog document could not be read or deserialized
    #[error("Data error: {message}")]
    Data {
        message: String,
        path: Option<PathBuf>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Repository statistics lookup failures
    #[error("Stats error for {repository}: {message}")]
    Stats { repository: String, message: String },
}

impl ReportError {
    /// Create a data error with path context.
    pub fn data_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Data {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a file system error carrying the underlying I/O error.
    pub fn io_with_path(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create a stats error for a repository URL.
    pub fn stats(repository: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Stats {
            repository: repository.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<serde_yaml::Error> for ReportError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Data {
            message: err.to_string(),
            path: None,
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_length_message_names_counts() {
        let err = ReportError::RowLength {
            row: 2,
            expected: 3,
            actual: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("row 2"));
        assert!(msg.contains("4 cells"));
        assert!(msg.contains("header has 3"));
    }

    #[test]
    fn test_stats_error_names_repository() {
        let err = ReportError::stats("https://github.com/acme/ui", "404 Not Found");
        assert!(err.to_string().contains("acme/ui"));
    }

    #[test]
    fn test_io_error_conversion_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ReportError = io.into();
        assert!(err.source().is_some());
    }
}
