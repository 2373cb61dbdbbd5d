//! Error types for roster cleaning.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the fallible parts of the crate.
///
/// The cleaning functions themselves never fail; only configuration
/// loading and `DataFrame` rewriting can.
#[derive(Debug, Error)]
pub enum CleanError {
    // === Configuration Errors ===
    /// Configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`crate::CleaningConfig`].
    #[error("failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Configuration text could not be parsed or rendered.
    #[error("invalid config: {message}")]
    InvalidConfig { message: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for CleanError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CleanError::ConfigParse {
            path: PathBuf::from("/etc/pfc/clean.toml"),
            message: "expected a table".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse config /etc/pfc/clean.toml: expected a table"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("goals".into());
        let err: CleanError = polars_err.into();
        assert!(matches!(err, CleanError::DataFrame { .. }));
    }
}
