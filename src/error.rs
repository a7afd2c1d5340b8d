//! This module defines all error types used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A transition record could not be mapped to a uniform edge
    #[error("Normalization error in record {index}: {message}")]
    Normalization { index: usize, message: String },

    /// The sink could not store the rendered document.
    ///
    /// The underlying cause is logged at the failure site, not carried here.
    #[error("Failed to persist graph document")]
    Persist,

    /// Transition table parsing errors
    #[error("Table parsing error in {file:?}: {message}")]
    TableParse { file: PathBuf, message: String },

    /// Requested machine is not defined in the loaded tables
    #[error("Unknown state machine: {0}")]
    UnknownMachine(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),

    /// Wrapped anyhow errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a custom error with a message
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Create a normalization error for the record at `index`
    pub fn normalization(index: usize, msg: impl Into<String>) -> Self {
        Self::Normalization {
            index,
            message: msg.into(),
        }
    }

    /// Check if error is a persistence failure
    pub fn is_persist(&self) -> bool {
        matches!(self, Error::Persist)
    }
}

// Implement From traits for common external error types

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::TableParse {
            file: PathBuf::from("unknown"),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::TableParse {
            file: PathBuf::from("unknown"),
            message: format!("JSON error: {}", err),
        }
    }
}

// Helper macros for creating errors

/// Create a custom error with formatting
#[macro_export]
macro_rules! custom_error {
    ($($arg:tt)*) => {
        $crate::error::Error::Custom(format!($($arg)*))
    };
}

/// Bail with a custom error message
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::custom_error!($($arg)*))
    };
}

/// Ensure a condition is true or return error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = Error::custom("test error");
        assert_eq!(err.to_string(), "test error");

        let err = Error::normalization(3, "missing field `event`");
        assert_eq!(
            err.to_string(),
            "Normalization error in record 3: missing field `event`"
        );
    }

    #[test]
    fn test_persist_is_generic() {
        let err = Error::Persist;
        assert!(err.is_persist());
        assert_eq!(err.to_string(), "Failed to persist graph document");

        let err = Error::custom("other");
        assert!(!err.is_persist());
    }

    #[test]
    fn test_toml_error_conversion() {
        let err: Error = toml::from_str::<toml::Table>("= broken").unwrap_err().into();
        assert!(matches!(err, Error::TableParse { .. }));
    }

    fn check_positive(n: i32) -> Result<i32> {
        crate::ensure!(n > 0, "expected positive, got {}", n);
        Ok(n)
    }

    #[test]
    fn test_ensure_macro() {
        assert_eq!(check_positive(2).unwrap(), 2);
        assert_eq!(
            check_positive(-1).unwrap_err().to_string(),
            "expected positive, got -1"
        );
    }
}
