//! Error types
//!
//! Public formatting functions never fail; these errors surface from the strict
//! variants and from loading data.

use thiserror::Error;

/// Why a raw keystroke value was refused by the input parser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// More than one decimal point was typed
    #[error("more than one decimal point")]
    MultipleDecimalPoints,

    /// A character other than a digit, "," or "." was typed
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),

    /// The value passed the character checks but could not be split into parts
    #[error("malformed amount: {0}")]
    Malformed(String),
}

/// Error type for numeral script table operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The specified script was not found
    #[error("numeral script not found: {0}")]
    NotFound(String),

    /// An error occurred while parsing the embedded glyph tables
    #[error("error parsing numeral script data: {0}")]
    ParseError(String),
}

/// Error loading a converter configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be deserialized
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is outside its allowed range
    #[error("invalid config: {0}")]
    Invalid(String),
}
