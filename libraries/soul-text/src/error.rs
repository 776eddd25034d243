/// Text utility errors
use thiserror::Error;

/// Result type alias using `TextError`
pub type Result<T> = std::result::Result<T, TextError>;

/// Errors from the strict parsing and configuration APIs.
///
/// The lenient entry points (`parse_time`, `parse_rating`, all splitters)
/// never return these; they fall back to a default value instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// Text is not a colon-separated duration
    #[error("Invalid time: {0:?}")]
    InvalidTime(String),

    /// Text is not a run of rating glyphs
    #[error("Invalid rating: {0:?}")]
    InvalidRating(String),

    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<config::ConfigError> for TextError {
    fn from(err: config::ConfigError) -> Self {
        TextError::Config(err.to_string())
    }
}
