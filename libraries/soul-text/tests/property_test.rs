//! Property-based tests for splitting and formatting
//!
//! Uses proptest to check the round-trip laws and the "never corrupt the
//! input" guarantees across many random inputs.

use proptest::prelude::*;
use soul_text::{
    find_subtitle, format_rating, format_size, format_time, format_time_long, parse_rating,
    parse_time, split_album, split_people, split_title, split_value, tagsplit, DEFAULT_SPLITTERS,
    RATING_PRECISION,
};

// ===== Helpers =====

fn arbitrary_word() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,12}"
}

fn arbitrary_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arbitrary_word(), 1..6)
}

// ===== Property Tests =====

proptest! {
    /// Property: format_time and parse_time are exact inverses
    #[test]
    fn time_round_trip(seconds in any::<i64>()) {
        prop_assert_eq!(parse_time(&format_time(seconds)), seconds);
    }

    /// Property: negative durations differ from positive ones only by the sign
    #[test]
    fn negative_time_has_single_leading_minus(seconds in 1i64..1_000_000) {
        let positive = format_time(seconds);
        let negative = format_time(-seconds);
        prop_assert_eq!(negative, format!("-{}", positive));
    }

    /// Property: parse_time never panics and text without digits parses to zero
    #[test]
    fn parse_time_total(text in "[^0-9]*") {
        prop_assert_eq!(parse_time(&text), 0);
    }

    /// Property: long durations show one or two units, never a zero count
    #[test]
    fn time_long_unit_count(seconds in 1i64..10_000_000_000) {
        let text = format_time_long(seconds);
        let parts: Vec<&str> = text.split(", ").collect();
        prop_assert!(!parts.is_empty() && parts.len() <= 2, "{}", text);
        prop_assert!(parts.iter().all(|p| !p.starts_with("0 ")), "{}", text);
    }

    /// Property: rating glyph count equals the number of whole precision steps
    #[test]
    fn rating_glyph_count(value in 0.0f64..=1.0) {
        let expected = (value / RATING_PRECISION + 1e-9).floor() as usize;
        prop_assert_eq!(format_rating(value).chars().count(), expected);
    }

    /// Property: parsing a formatted rating recovers the whole steps
    #[test]
    fn rating_round_trip(steps in 0u32..=4) {
        let value = f64::from(steps) * RATING_PRECISION;
        prop_assert_eq!(parse_rating(&format_rating(value)), value);
    }

    /// Property: sizes below 1 KiB are printed verbatim, larger ones use a unit
    #[test]
    fn size_has_unit_suffix(bytes in any::<u64>()) {
        let text = format_size(bytes);
        if bytes < 1024 {
            prop_assert_eq!(text, format!("{}B", bytes));
        } else {
            prop_assert!(
                text.ends_with("KB") || text.ends_with("MB") || text.ends_with("GB"),
                "{}",
                text
            );
        }
    }

    /// Property: no size prints the upper limit of its own unit
    #[test]
    fn size_never_shows_unit_limit(bytes in any::<u64>()) {
        let text = format_size(bytes);
        for limit in ["10.00KB", "1024KB", "10.00MB", "100.0MB", "1024MB"] {
            prop_assert_ne!(text.as_str(), limit);
        }
    }

    /// Property: a delimiter after a bracketed word still splits
    #[test]
    fn split_value_after_bracket(words in arbitrary_words()) {
        let joined = words
            .iter()
            .map(|w| format!("({})", w))
            .collect::<Vec<_>>()
            .join(" & ");
        let parts = split_value(&joined, DEFAULT_SPLITTERS);
        prop_assert_eq!(parts.len(), words.len(), "{}", joined);
    }

    /// Property: joining words with ", " and splitting gives the words back
    #[test]
    fn split_value_recovers_items(words in arbitrary_words()) {
        let joined = words.join(", ");
        let parts = split_value(&joined, DEFAULT_SPLITTERS);
        prop_assert_eq!(parts, words.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// Property: a bracketed suffix is recovered exactly
    #[test]
    fn subtitle_recovers_suffix(base in arbitrary_words(), sub in arbitrary_words()) {
        let base = base.join(" ");
        let sub = sub.join(" ");
        let title = format!("{} ({})", base, sub);
        prop_assert_eq!(find_subtitle(&title), (base.as_str(), Some(sub.as_str())));
    }

    /// Property: text without brackets or keywords comes back untouched
    #[test]
    fn plain_text_is_unchanged(words in arbitrary_words()) {
        let text = words.join(" ");
        prop_assert_eq!(split_title(&text, DEFAULT_SPLITTERS), (text.as_str(), vec![]));
        prop_assert_eq!(find_subtitle(&text), (text.as_str(), None));
    }

    /// Property: disc numbers are recovered from "<name> disc <n>"
    #[test]
    fn album_disc_recovered(name in arbitrary_words(), disc in 1u32..100) {
        let name = name.join(" ");
        let album = format!("{} disc {}", name, disc);
        let disc = disc.to_string();
        prop_assert_eq!(split_album(&album), (name.as_str(), Some(disc.as_str())));
    }

    /// Property: splitters never panic on arbitrary unicode
    #[test]
    fn splitters_are_total(text in "\\PC*") {
        let _ = find_subtitle(&text);
        let _ = split_title(&text, DEFAULT_SPLITTERS);
        let _ = split_album(&text);
        let _ = split_people(&text);
        let tags = tagsplit(&text);
        prop_assert!(!tags.is_empty() || text.chars().skip(1).any(|c| c == '~'));
    }

    /// Property: plain tag paths split into their components
    #[test]
    fn tagsplit_plain_components(words in prop::collection::vec("[a-z]{1,8}", 2..5)) {
        let tag = words.join("~");
        prop_assert_eq!(tagsplit(&tag), words.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
