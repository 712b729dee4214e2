//! Configuration errors.

use thiserror::Error;

/// Problems with operator-supplied signal timings.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// A duration parsed but falls outside the accepted range
    #[error("{phase} duration {value}s is outside {min}..={max} seconds")]
    OutOfRange {
        phase: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A duration field is not a whole number of seconds
    #[error("{phase} duration '{text}' is not a whole number of seconds")]
    NotANumber { phase: &'static str, text: String },

    /// A configuration document could not be decoded
    #[error("Malformed configuration: {0}")]
    Malformed(String),
}
