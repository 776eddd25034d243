//! Pattern-based segmentation of free-form metadata strings
//!
//! Every function here is total: input that does not match the expected
//! shape comes back unchanged as the base, with `None` or an empty list as
//! the secondary result. All outputs borrow from the input.

use crate::delimiters::{
    BRACKETED_DISC_KEYWORDS, DEFAULT_SPLITTERS, DISC_KEYWORDS, FEATURING_KEYWORDS,
    FEATURING_PREFIXES, NUMERIC_TAG_PREFIX, PEOPLE_SPLITTERS, SUBTITLE_DELIMITERS, TAG_SEPARATOR,
};
use regex::{Regex, RegexBuilder};
use std::cmp::Reverse;
use std::sync::OnceLock;
use tracing::{trace, warn};

/// Split a trailing bracketed subtitle off `value`.
///
/// The closing delimiter must be the last non-whitespace character, and the
/// opener is the nearest matching one before it. An opener at the very
/// start or a blank subtitle is not a match. Neither is a bracketed
/// subtitle that contains any closing bracket, e.g. `foo (a] b)`.
///
/// The returned subtitle is trimmed, so `foo ( baz )` yields `baz`.
///
/// ```
/// use soul_text::find_subtitle;
///
/// assert_eq!(find_subtitle("Song (Live)"), ("Song", Some("Live")));
/// assert_eq!(find_subtitle("Song (Live]"), ("Song (Live]", None));
/// ```
pub fn find_subtitle(value: &str) -> (&str, Option<&str>) {
    let trimmed = value.trim_end();

    for &(open, close) in SUBTITLE_DELIMITERS {
        let Some(inner) = trimmed.strip_suffix(close) else {
            continue;
        };
        let Some(start) = inner.rfind(open) else {
            continue;
        };
        if start == 0 {
            continue;
        }

        let base = inner[..start].trim_end();
        let subtitle = inner[start + open.len_utf8()..].trim();
        if base.is_empty() || subtitle.is_empty() {
            continue;
        }
        if open != close && subtitle.contains(is_closing_bracket) {
            trace!("Stray closer inside {}{} in {:?}, not a subtitle", open, close, value);
            continue;
        }

        return (base, Some(subtitle));
    }

    (value, None)
}

/// Split `value` on any of `splitters`, never matching a token inside a
/// larger word.
///
/// Parts are trimmed and empty parts dropped. An empty splitter list returns
/// the value as a single item. Matching is case-sensitive.
///
/// ```
/// use soul_text::split_value;
///
/// assert_eq!(
///     split_value("Andromeda and the Band", &["and"]),
///     vec!["Andromeda", "the Band"]
/// );
/// ```
pub fn split_value<'a>(value: &'a str, splitters: &[&str]) -> Vec<&'a str> {
    if splitters == DEFAULT_SPLITTERS {
        return split_with(value, default_splitter());
    }

    match splitter_regex(splitters, false) {
        Some(re) => split_with(value, &re),
        None => vec![value],
    }
}

/// Split a title into its base and the items of a bracketed subtitle.
///
/// Without a subtitle the original value comes back untouched.
pub fn split_title<'a>(value: &'a str, splitters: &[&str]) -> (&'a str, Vec<&'a str>) {
    match find_subtitle(value) {
        (base, Some(subtitle)) => (base, split_value(subtitle, splitters)),
        (_, None) => (value, Vec::new()),
    }
}

/// Split a disc number off an album name.
///
/// Recognizes `Album (Disc 2)`, `Album ~disk 3~`, and `Album disc 1/2`. The
/// keyword must be a whole word followed by a number or `n/m` fraction.
pub fn split_album(value: &str) -> (&str, Option<&str>) {
    if let (base, Some(subtitle)) = find_subtitle(value) {
        if let Some(caps) = bracketed_disc_regex().captures(subtitle) {
            if let Some(disc) = caps.name("disc") {
                return (base, Some(disc.as_str()));
            }
        }
    }

    let trimmed = value.trim();
    if let Some(caps) = trailing_disc_regex().captures(trimmed) {
        if let (Some(name), Some(disc)) = (caps.name("name"), caps.name("disc")) {
            return (name.as_str(), Some(disc.as_str()));
        }
    }

    (value, None)
}

/// Split a performer list off a title.
///
/// Handles `Song (with A & B)`, `Song (feat. A)`, and unbracketed
/// `Song featuring A, B`. A leading `with`/`feat.` inside brackets is
/// consumed once; `with` never splits the list itself.
pub fn split_people(value: &str) -> (&str, Vec<&str>) {
    if let (base, Some(subtitle)) = find_subtitle(value) {
        let performers = strip_featuring_prefix(subtitle);
        return (base, split_with(performers, people_splitter()));
    }

    if let Some(caps) = featuring_regex().captures(value.trim()) {
        if let (Some(base), Some(rest)) = (caps.name("base"), caps.name("rest")) {
            return (base.as_str(), split_with(rest.as_str(), people_splitter()));
        }
    }

    (value, Vec::new())
}

/// Split a tag path into its tag names.
///
/// `~` separates tags. A leading `~` only marks the path as synthetic and is
/// dropped, unless it starts a numeric `~#` tag, which always stays whole.
///
/// ```
/// use soul_text::tagsplit;
///
/// assert_eq!(tagsplit("~foo~~bar"), vec!["foo", "~bar"]);
/// assert_eq!(tagsplit("~#foo~~#bar"), vec!["~#foo", "~#bar"]);
/// ```
pub fn tagsplit(tag: &str) -> Vec<&str> {
    let mut chars = tag.chars();
    chars.next();
    if !chars.as_str().contains(TAG_SEPARATOR) {
        return vec![tag];
    }

    let body = if tag.starts_with(TAG_SEPARATOR) && !tag.starts_with(NUMERIC_TAG_PREFIX) {
        &tag[TAG_SEPARATOR.len_utf8()..]
    } else {
        tag
    };

    let mut tags = Vec::new();
    let mut offset = 0;
    let mut pending_tilde = false;
    for segment in body.split(TAG_SEPARATOR) {
        let end = offset + segment.len();
        if segment.is_empty() {
            pending_tilde = true;
        } else if pending_tilde {
            // Keep the separator that precedes this segment, e.g. `~bar`.
            tags.push(&body[offset - TAG_SEPARATOR.len_utf8()..end]);
            pending_tilde = false;
        } else {
            tags.push(&body[offset..end]);
        }
        offset = end + TAG_SEPARATOR.len_utf8();
    }

    tags
}

fn is_closing_bracket(c: char) -> bool {
    SUBTITLE_DELIMITERS
        .iter()
        .any(|&(open, close)| open != close && c == close)
}

fn split_with<'a>(value: &'a str, re: &Regex) -> Vec<&'a str> {
    re.split(value)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

fn strip_featuring_prefix(text: &str) -> &str {
    for prefix in FEATURING_PREFIXES {
        let Some(head) = text.get(..prefix.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(prefix) {
            continue;
        }
        let rest = &text[prefix.len()..];
        if rest.starts_with(char::is_whitespace) {
            return rest.trim_start();
        }
    }
    text
}

/// Build `\s*(?:tok|...)\s*` for the given tokens, longest first so that
/// `featuring` wins over `feat`.
fn splitter_regex(splitters: &[&str], case_insensitive: bool) -> Option<Regex> {
    let mut tokens: Vec<&str> = splitters
        .iter()
        .copied()
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.is_empty() {
        return None;
    }
    tokens.sort_by_key(|token| Reverse(token.len()));

    let pattern = format!(r"\s*(?:{})\s*", alternation(&tokens));
    match RegexBuilder::new(&pattern)
        .case_insensitive(case_insensitive)
        .build()
    {
        Ok(re) => Some(re),
        Err(err) => {
            warn!("Failed to build splitter pattern {:?}: {}", pattern, err);
            None
        }
    }
}

fn alternation(tokens: &[&str]) -> String {
    tokens
        .iter()
        .map(|token| word_bounded(token))
        .collect::<Vec<_>>()
        .join("|")
}

/// Escape `token`, adding `\b` on each side that is a word character.
///
/// `and` becomes `\band\b` and `feat.` becomes `\bfeat\.`, while `,` stays
/// bare so it still splits after punctuation like `(UK),`.
fn word_bounded(token: &str) -> String {
    let lead = if token.starts_with(is_word_char) { r"\b" } else { "" };
    let trail = if token.ends_with(is_word_char) { r"\b" } else { "" };
    format!("{}{}{}", lead, regex::escape(token), trail)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn default_splitter() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        splitter_regex(DEFAULT_SPLITTERS, false).expect("default splitter pattern is valid")
    })
}

fn people_splitter() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        splitter_regex(PEOPLE_SPLITTERS, true).expect("people splitter pattern is valid")
    })
}

fn featuring_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        let mut keywords = FEATURING_KEYWORDS.to_vec();
        keywords.sort_by_key(|keyword| Reverse(keyword.len()));
        let pattern = format!(
            r"(?i)^(?P<base>.*?\S)\s+(?:{})\s+(?P<rest>\S.*)$",
            alternation(&keywords)
        );
        Regex::new(&pattern).expect("featuring pattern is valid")
    })
}

fn bracketed_disc_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        let mut keywords = [BRACKETED_DISC_KEYWORDS, DISC_KEYWORDS].concat();
        keywords.sort_by_key(|keyword| Reverse(keyword.len()));
        let pattern = format!(
            r"(?i)^(?:{})\s*(?P<disc>\d+(?:/\d+)?)$",
            alternation(&keywords)
        );
        Regex::new(&pattern).expect("bracketed disc pattern is valid")
    })
}

fn trailing_disc_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        let pattern = format!(
            r"(?i)^(?P<name>.*\S)\s+(?:{})\s+(?P<disc>\d+(?:/\d+)?)$",
            alternation(DISC_KEYWORDS)
        );
        Regex::new(&pattern).expect("disc pattern is valid")
    })
}
