//! # Parser Error Types
//!
//! This module defines the error types of the ingredient parser. A missing unit
//! is not an error: it is reported as `unit: None` in a successful result. Only
//! malformed input fails at parse time; alias conflicts fail when a table is built.

use crate::ingredient_model::{Language, UnitId};

/// Errors raised by the parser and by table construction
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Input is not parseable text (empty, control characters, too long, not UTF-8)
    InvalidInput(String),
    /// Two aliases share a normalized key and language but name different units
    AmbiguousAlias {
        key: String,
        language: Language,
        first: UnitId,
        second: UnitId,
    },
    /// Configuration value out of range or malformed
    Config(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            ParseError::AmbiguousAlias {
                key,
                language,
                first,
                second,
            } => write!(
                f,
                "Ambiguous alias '{key}' ({}): maps to both {} and {}",
                language.code(),
                first.as_str(),
                second.as_str()
            ),
            ParseError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl From<std::str::Utf8Error> for ParseError {
    fn from(err: std::str::Utf8Error) -> Self {
        ParseError::InvalidInput(format!("input is not valid UTF-8 ({err})"))
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ParseError>;
