//! # Error Types
//!
//! Errors raised while parsing raw operator strings into primitives.

use thiserror::Error;

/// Errors that can occur while parsing addresses, amounts and hex blobs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was empty or whitespace.
    #[error("empty value")]
    Empty,

    /// Hex payload had the wrong number of characters.
    #[error("expected {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Input contained non-hex characters.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Input is not a decimal or `0x`-prefixed hex integer.
    #[error("invalid integer: {0}")]
    InvalidInteger(String),

    /// Colon-separated input had the wrong shape.
    #[error("expected {expected}, got '{value}'")]
    InvalidShape { expected: &'static str, value: String },
}
