//! Splits raw stack trace text into logical lines.

/// Split a raw trace into trimmed, non-empty lines in original order
///
/// **Public** - first step of every fingerprint computation
///
/// Leading and trailing ASCII whitespace (including vertical tab) is
/// stripped from each line while inner whitespace is kept. Non-ASCII
/// spaces such as U+3000 are content and survive trimming. Lines that are blank after trimming never appear in
/// the result. Every string is valid input; an empty or whitespace-only
/// trace yields an empty vector.
pub fn tokenize(raw: &str) -> Vec<&str> {
    raw.lines()
        .map(trim_ascii_whitespace)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Trim space, tab, line feed, vertical tab, form feed and carriage return
///
/// **Private** - internal helper for tokenize
fn trim_ascii_whitespace(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b')
}
