//! Human-readable rendering of durations, ratings, and file sizes
//!
//! Each `format_*` with a `parse_*` counterpart round-trips exactly. The
//! lenient parsers return zero for text they cannot read; the `try_*`
//! variants report why instead.

use crate::config::TextConfig;
use crate::error::{Result, TextError};
use std::sync::OnceLock;
use tracing::trace;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const YEAR: u64 = 365 * DAY;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;

/// Absorbs float error so that `3.0 * 0.1 / 0.1` still counts as three steps.
const RATING_EPSILON: f64 = 1e-9;

/// Formatter for the configurable outputs (rating glyphs, long durations).
///
/// The free functions of this module use a formatter with default settings.
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    /// Create a formatter, rejecting an invalid configuration
    pub fn new(config: TextConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the active configuration
    pub fn config(&self) -> &TextConfig {
        &self.config
    }

    /// Describe a duration by its two largest non-zero units
    pub fn format_time_long(&self, seconds: i64) -> String {
        let time = &self.config.time;
        if seconds < 1 {
            return time.no_time.clone();
        }

        let units = [
            (YEAR, &time.units.year),
            (DAY, &time.units.day),
            (HOUR, &time.units.hour),
            (MINUTE, &time.units.minute),
            (1, &time.units.second),
        ];

        let mut remaining = seconds.unsigned_abs();
        let mut parts = Vec::with_capacity(2);
        for (size, label) in units {
            let count = remaining / size;
            remaining %= size;
            if count > 0 {
                parts.push(label.render(count));
                if parts.len() == 2 {
                    break;
                }
            }
        }

        parts.join(&time.separator)
    }

    /// Render a rating in `[0, 1]` as one glyph per precision step
    pub fn format_rating(&self, value: f64) -> String {
        if value.is_nan() {
            return String::new();
        }

        let rating = &self.config.rating;
        let steps = (value.clamp(0.0, 1.0) / rating.precision + RATING_EPSILON).floor() as usize;
        rating.glyph.to_string().repeat(steps)
    }

    /// Read back a rating produced by `format_rating`
    pub fn try_parse_rating(&self, text: &str) -> Result<f64> {
        let rating = &self.config.rating;
        let text = text.trim();

        let mut steps = 0u32;
        for c in text.chars() {
            if c != rating.glyph {
                return Err(TextError::InvalidRating(text.to_string()));
            }
            steps += 1;
        }

        Ok((f64::from(steps) * rating.precision).min(1.0))
    }

    /// Read back a rating, falling back to `0.0`
    pub fn parse_rating(&self, text: &str) -> f64 {
        self.try_parse_rating(text).unwrap_or_else(|err| {
            trace!("{}, using 0", err);
            0.0
        })
    }
}

fn default_formatter() -> &'static TextFormatter {
    static FORMATTER: OnceLock<TextFormatter> = OnceLock::new();
    FORMATTER.get_or_init(TextFormatter::default)
}

/// Format seconds as `M:SS`, or `H:MM:SS` from one hour up
///
/// ```
/// use soul_text::format_time;
///
/// assert_eq!(format_time(65), "1:05");
/// assert_eq!(format_time(-124), "-2:04");
/// assert_eq!(format_time(3725), "1:02:05");
/// ```
pub fn format_time(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let magnitude = seconds.unsigned_abs();

    if magnitude >= HOUR {
        format!(
            "{}{}:{:02}:{:02}",
            sign,
            magnitude / HOUR,
            magnitude % HOUR / MINUTE,
            magnitude % MINUTE
        )
    } else {
        format!("{}{}:{:02}", sign, magnitude / MINUTE, magnitude % MINUTE)
    }
}

/// Parse colon-separated time text, most significant field first
///
/// Fields may also be separated by `.`. A single leading `-` negates the
/// whole value.
pub fn try_parse_time(text: &str) -> Result<i64> {
    let invalid = || TextError::InvalidTime(text.to_string());

    let trimmed = text.trim();
    let (negative, fields) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    if fields.is_empty() {
        return Err(invalid());
    }

    let mut magnitude: u64 = 0;
    for field in fields.split([':', '.']) {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value: u64 = field.parse().map_err(|_| invalid())?;
        magnitude = magnitude
            .checked_mul(60)
            .and_then(|t| t.checked_add(value))
            .ok_or_else(invalid)?;
    }

    // The magnitude of i64::MIN only fits once negated.
    let seconds = if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    };
    seconds.ok_or_else(invalid)
}

/// Parse time text, returning `0` for anything unreadable
pub fn parse_time(text: &str) -> i64 {
    try_parse_time(text).unwrap_or_else(|err| {
        trace!("{}, using 0", err);
        0
    })
}

/// Describe a duration in words, e.g. `"1 hour, 1 second"`
pub fn format_time_long(seconds: i64) -> String {
    default_formatter().format_time_long(seconds)
}

/// Render a rating as repeated ♪ glyphs; zero is the empty string
pub fn format_rating(value: f64) -> String {
    default_formatter().format_rating(value)
}

/// Count the ♪ glyphs of a formatted rating, returning `0.0` on other text
pub fn parse_rating(text: &str) -> f64 {
    default_formatter().parse_rating(text)
}

/// Format a byte count with binary (1024-based) units
///
/// Precision drops as the integer part grows: `1.50KB`, `15KB`, `1.50MB`,
/// `15.0MB`, `150MB`. The unit is chosen after rounding, so a value just
/// below a boundary prints as the next unit (`1.0GB`, never `1024MB`).
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        return format!("{}B", bytes);
    }

    let kib = bytes as f64 / KIB as f64;
    let mib = bytes as f64 / MIB as f64;

    if rounded(mib, 0) >= 1024.0 {
        format!("{:.1}GB", bytes as f64 / GIB as f64)
    } else if rounded(mib, 1) >= 100.0 {
        format!("{:.0}MB", mib)
    } else if rounded(mib, 2) >= 10.0 {
        format!("{:.1}MB", mib)
    } else if rounded(kib, 0) >= 1024.0 {
        format!("{:.2}MB", mib)
    } else if rounded(kib, 2) >= 10.0 {
        format!("{:.0}KB", kib)
    } else {
        format!("{:.2}KB", kib)
    }
}

/// `value` as it prints with `decimals` places
fn rounded(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
