/// Formatter configuration
use crate::error::{Result, TextError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Default step between rating glyphs (four glyphs for a full rating)
pub const RATING_PRECISION: f64 = 0.25;

/// Default rating glyph (♪)
pub const RATING_GLYPH: char = '\u{266A}';

/// Environment variable prefix for overrides, e.g. `SOUL_TEXT_RATING__GLYPH`
pub const ENV_PREFIX: &str = "SOUL_TEXT";

/// Settings for rating glyphs and long duration labels
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TextConfig {
    #[serde(default = "default_rating")]
    pub rating: RatingSettings,

    #[serde(default = "default_time")]
    pub time: TimeSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RatingSettings {
    /// Rating value represented by one glyph
    #[serde(default = "default_precision")]
    pub precision: f64,

    #[serde(default = "default_glyph")]
    pub glyph: char,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TimeSettings {
    /// Joins the two units of a long duration
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Shown for durations under one second
    #[serde(default = "default_no_time")]
    pub no_time: String,

    #[serde(default)]
    pub units: UnitLabels,
}

/// Labels for each unit of a long duration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UnitLabels {
    #[serde(default = "default_year")]
    pub year: UnitLabel,
    #[serde(default = "default_day")]
    pub day: UnitLabel,
    #[serde(default = "default_hour")]
    pub hour: UnitLabel,
    #[serde(default = "default_minute")]
    pub minute: UnitLabel,
    #[serde(default = "default_second")]
    pub second: UnitLabel,
}

/// Singular and plural form of a unit name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UnitLabel {
    pub singular: String,
    pub plural: String,
}

impl UnitLabel {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }

    /// Render `count` with the singular form for exactly one
    pub fn render(&self, count: u64) -> String {
        if count == 1 {
            format!("{} {}", count, self.singular)
        } else {
            format!("{} {}", count, self.plural)
        }
    }

    fn is_blank(&self) -> bool {
        self.singular.trim().is_empty() || self.plural.trim().is_empty()
    }
}

impl UnitLabels {
    fn iter(&self) -> impl Iterator<Item = (&'static str, &UnitLabel)> {
        [
            ("year", &self.year),
            ("day", &self.day),
            ("hour", &self.hour),
            ("minute", &self.minute),
            ("second", &self.second),
        ]
        .into_iter()
    }
}

impl TextConfig {
    /// Load configuration from an optional TOML file and the environment
    ///
    /// Missing files are skipped. Environment variables use the
    /// `SOUL_TEXT_` prefix with `__` between nested keys, e.g.
    /// `SOUL_TEXT_TIME__SEPARATOR`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            if path.exists() {
                debug!("Loading text config from {}", path.display());
                settings = settings.add_source(config::File::from(path));
            } else {
                debug!("Text config {} not found, using defaults", path.display());
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: TextConfig = settings.build()?.try_deserialize()?;
        config.validate()?;

        info!(
            "Text config loaded (rating precision {}, glyph {:?})",
            config.rating.precision, config.rating.glyph
        );
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let precision = self.rating.precision;
        if !precision.is_finite() || precision <= 0.0 || precision > 1.0 {
            return Err(TextError::Config(format!(
                "rating precision must be in (0, 1], got {}",
                precision
            )));
        }

        if self.rating.glyph.is_whitespace() || self.rating.glyph.is_control() {
            return Err(TextError::Config(format!(
                "rating glyph must be visible, got {:?}",
                self.rating.glyph
            )));
        }

        if self.time.separator.is_empty() {
            return Err(TextError::Config("time separator is empty".to_string()));
        }

        if let Some((name, _)) = self.time.units.iter().find(|(_, label)| label.is_blank()) {
            return Err(TextError::Config(format!("label for unit {} is empty", name)));
        }

        Ok(())
    }
}

// Default values
fn default_rating() -> RatingSettings {
    RatingSettings {
        precision: default_precision(),
        glyph: default_glyph(),
    }
}

fn default_precision() -> f64 {
    RATING_PRECISION
}

fn default_glyph() -> char {
    RATING_GLYPH
}

fn default_time() -> TimeSettings {
    TimeSettings {
        separator: default_separator(),
        no_time: default_no_time(),
        units: UnitLabels::default(),
    }
}

fn default_separator() -> String {
    ", ".to_string()
}

fn default_no_time() -> String {
    "No time information".to_string()
}

fn default_year() -> UnitLabel {
    UnitLabel::new("year", "years")
}

fn default_day() -> UnitLabel {
    UnitLabel::new("day", "days")
}

fn default_hour() -> UnitLabel {
    UnitLabel::new("hour", "hours")
}

fn default_minute() -> UnitLabel {
    UnitLabel::new("minute", "minutes")
}

fn default_second() -> UnitLabel {
    UnitLabel::new("second", "seconds")
}

impl Default for UnitLabels {
    fn default() -> Self {
        Self {
            year: default_year(),
            day: default_day(),
            hour: default_hour(),
            minute: default_minute(),
            second: default_second(),
        }
    }
}

impl Default for RatingSettings {
    fn default() -> Self {
        default_rating()
    }
}

impl Default for TimeSettings {
    fn default() -> Self {
        default_time()
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            rating: default_rating(),
            time: default_time(),
        }
    }
}
