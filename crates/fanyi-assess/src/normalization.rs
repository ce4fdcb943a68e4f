//! Answer normalization for translation comparison.
//!
//! Both the reference translation and the learner's answer go through the same
//! normalization before any scoring. Only the comparison forms are normalized;
//! the original-case tokens are kept around for display.

/// Punctuation stripped before comparison.
///
/// Apostrophes are deliberately absent so contracted forms like `don't` stay a
/// single comparable token.
pub const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
    '~', '(', ')',
];

/// Normalize a string for answer comparison.
///
/// Applies the following transformations in order:
/// 1. Lowercase
/// 2. Strip the [`PUNCTUATION`] set
/// 3. Collapse runs of two or more whitespace characters into one space
/// 4. Trim
///
/// A single tab or newline between words is kept as is. Never fails; empty or
/// punctuation-only input yields an empty string.
pub fn normalize(s: &str) -> String {
    let stripped: String = s
        .to_lowercase()
        .chars()
        .filter(|c| !PUNCTUATION.contains(c))
        .collect();

    collapse_whitespace_runs(&stripped).trim().to_string()
}

fn collapse_whitespace_runs(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() && chars.peek().is_some_and(|n| n.is_whitespace()) {
            while chars.next_if(|n| n.is_whitespace()).is_some() {}
            out.push(' ');
        } else {
            out.push(c);
        }
    }

    out
}

/// Split a sentence into whitespace-separated tokens, dropping empties.
pub fn tokenize(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Number of characters in `s`, as used by every length rule in the engine.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}
