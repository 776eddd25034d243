//! Soul Player Text
//!
//! Metadata splitting and human-readable formatting for Soul Player.
//!
//! This crate provides:
//! - Subtitle, performer, and disc-number extraction from titles and albums
//! - Word-boundary-safe splitting of multi-value tags
//! - Tag path splitting (`~`-separated, `~#` numeric tags)
//! - Duration, rating, and file size formatting with exact inverse parsers
//!
//! Every function is pure and total. Malformed input degrades to "no
//! match" (the value comes back unchanged) or to a zero value, never an
//! error. Strict `try_*` parsers are available where a caller needs to
//! know why text was rejected.
//!
//! # Example
//!
//! ```rust
//! use soul_text::{format_time, parse_time, split_people, split_title, DEFAULT_SPLITTERS};
//!
//! let (title, versions) = split_title("Heroes (Live, Remastered)", DEFAULT_SPLITTERS);
//! assert_eq!(title, "Heroes");
//! assert_eq!(versions, vec!["Live", "Remastered"]);
//!
//! let (title, people) = split_people("Song (feat. A & B)");
//! assert_eq!(title, "Song");
//! assert_eq!(people, vec!["A", "B"]);
//!
//! assert_eq!(parse_time(&format_time(754)), 754);
//! ```

#![forbid(unsafe_code)]

mod config;
mod delimiters;
mod error;
mod format;
mod split;

pub use config::{
    RatingSettings, TextConfig, TimeSettings, UnitLabel, UnitLabels, ENV_PREFIX, RATING_GLYPH,
    RATING_PRECISION,
};
pub use delimiters::{
    BRACKETED_DISC_KEYWORDS, DEFAULT_SPLITTERS, DISC_KEYWORDS, FEATURING_KEYWORDS,
    FEATURING_PREFIXES, NUMERIC_TAG_PREFIX, PEOPLE_SPLITTERS, SUBTITLE_DELIMITERS, TAG_SEPARATOR,
};
pub use error::{Result, TextError};
pub use format::{
    format_rating, format_size, format_time, format_time_long, parse_rating, parse_time,
    try_parse_time, TextFormatter,
};
pub use split::{find_subtitle, split_album, split_people, split_title, split_value, tagsplit};
