//! `%` wildcard escaping for `$iLike` patterns.
//!
//! A pattern uses `%` as a multi-character wildcard; a literal percent
//! sign is stored as the two-character sequence `\%`.

/// The escaped literal percent sequence.
pub const ESCAPED_PERCENT: &str = "\\%";

/// Escape every literal `%` so the pattern engine treats it as text.
pub fn escape(value: &str) -> String {
    value.replace('%', ESCAPED_PERCENT)
}

/// Undo [`escape`]: every `\%` becomes a literal `%` again.
pub fn unescape(pattern: &str) -> String {
    pattern.replace(ESCAPED_PERCENT, "%")
}

/// True when the pattern carries an escaped literal percent.
pub fn has_escaped_percent(pattern: &str) -> bool {
    pattern.contains(ESCAPED_PERCENT)
}
