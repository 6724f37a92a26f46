//! Error types for the neuronorm library.
//!
//! The scoring core itself signals unavailability (age outside a battery's
//! normative range, stratum gaps) by returning `None` and never constructs
//! an error. The structured errors below exist for the layers around the
//! core: administration decoding, report persistence, and the CLI.

use std::io;

use thiserror::Error;

/// Main result type for neuronorm operations.
pub type Result<T> = std::result::Result<T, NeuronormError>;

/// Comprehensive error type for all neuronorm operations.
#[derive(Error, Debug)]
pub enum NeuronormError {
    /// I/O related errors (reading administrations, writing reports)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An administration referenced a test code the registry does not know
    #[error("Unknown test code: {code}")]
    UnknownTest {
        /// The unrecognized code
        code: String,
    },

    /// Validation errors for administration input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generic internal errors
    #[error("Internal error: {message}")]
    Internal {
        /// Error description
        message: String,
    },
}

impl NeuronormError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new unknown-test error
    pub fn unknown_test(code: impl Into<String>) -> Self {
        Self::UnknownTest { code: code.into() }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new validation error with field context
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<io::Error> for NeuronormError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for NeuronormError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NeuronormError::unknown_test("WXYZ");
        assert_eq!(err.to_string(), "Unknown test code: WXYZ");

        let err = NeuronormError::validation("age must be numeric");
        assert_eq!(err.to_string(), "Validation error: age must be numeric");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing file");
        let err: NeuronormError = io_err.into();
        assert!(matches!(err, NeuronormError::Io { .. }));
    }

    #[test]
    fn test_from_serde_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: NeuronormError = serde_err.into();
        assert!(matches!(err, NeuronormError::Serialization { .. }));
    }
}
