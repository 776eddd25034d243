//! Fixed delimiter, conjunction, and keyword tables shared by the splitters.

/// Bracket pairs that can enclose a trailing subtitle, in match order.
///
/// The wave dash and the fullwidth forms cover titles written in CJK
/// scripts, where ASCII brackets and tildes are rare.
pub const SUBTITLE_DELIMITERS: &[(char, char)] = &[
    ('[', ']'),
    ('(', ')'),
    ('~', '~'),
    ('\u{301C}', '\u{301C}'), // 〜 wave dash
    ('\u{FF5E}', '\u{FF5E}'), // ～ fullwidth tilde
    ('\u{FF08}', '\u{FF09}'), // （ ） fullwidth parentheses
    ('\u{FF3B}', '\u{FF3D}'), // ［ ］ fullwidth square brackets
];

/// Default tokens for `split_value` and `split_title`.
pub const DEFAULT_SPLITTERS: &[&str] = &[",", "&"];

/// Tokens separating performers inside a people list.
///
/// `with` is not a splitter; it only introduces a bracketed list.
pub const PEOPLE_SPLITTERS: &[&str] = &[",", "and", "&", "feat.", "featuring", "ft."];

/// Leading words stripped from a bracketed performer list, e.g. `(with X)`.
pub const FEATURING_PREFIXES: &[&str] = &["featuring", "feat.", "feat", "ft.", "ft", "with", "w/"];

/// Words that introduce performers in an unbracketed title.
pub const FEATURING_KEYWORDS: &[&str] = &["featuring", "feat.", "feat", "ft.", "ft"];

/// Words that mark a disc number in an album name.
pub const DISC_KEYWORDS: &[&str] = &["disc", "disk", "cd"];

/// Extra disc markers accepted only inside a bracketed subtitle.
pub const BRACKETED_DISC_KEYWORDS: &[&str] = &["vol.", "vol"];

/// Separator between sub-tags in a tag path.
pub const TAG_SEPARATOR: char = '~';

/// Prefix of a numeric tag, e.g. `~#playcount`.
pub const NUMERIC_TAG_PREFIX: &str = "~#";
