//! Error types for chroma-wcag operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in chroma-wcag operations.
///
/// Color math itself is total. The conversion core validates only at the
/// hex boundary: parsing rejects malformed strings and formatting rejects
/// channels two hex digits cannot carry. Other range checks happen only
/// where a caller opts in through a `checked` constructor.
#[derive(Error, Debug)]
pub enum Error {
    /// Hex color string is not 3 or 6 hex digits after an optional `#`.
    #[error("invalid hex color '{input}': {reason}")]
    InvalidFormat {
        /// The rejected input, verbatim.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A color component fell outside its domain in a checked constructor
    /// or could not be written as hex.
    #[error("{component} = {value} is out of range ({min} to {max})")]
    OutOfRange {
        /// Component name (e.g. "red", "saturation").
        component: &'static str,
        /// Offending value.
        value: f64,
        /// Lower bound, inclusive.
        min: f64,
        /// Upper bound, inclusive except for the cyclic hue.
        max: f64,
    },

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: &'static str,
        /// Error message describing why the value is invalid.
        message: String,
    },

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn invalid_format(input: &str, reason: &'static str) -> Self {
        Self::InvalidFormat {
            input: input.to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_display() {
        let err = Error::invalid_format("#12", "expected 3 or 6 hex digits");
        let msg = err.to_string();
        assert!(msg.contains("#12"));
        assert!(msg.contains("3 or 6"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = Error::OutOfRange {
            component: "red",
            value: 300.0,
            min: 0.0,
            max: 255.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("red"));
        assert!(msg.contains("300"));
        assert!(msg.contains("255"));
    }

    #[test]
    fn test_config_parse_display_has_line() {
        let err = Error::ConfigParse {
            line: 7,
            message: "bad value".to_string(),
        };
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_io_from() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
