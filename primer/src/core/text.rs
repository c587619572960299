//! Pure string helpers: split, count, trim, join.
//!
//! All functions are total. Degenerate inputs (empty strings, empty slices,
//! delimiters that never occur) produce well-defined results.

use std::borrow::Borrow;

/// Split `s` on every literal occurrence of `delimiter`.
///
/// Parts are returned verbatim, surrounding whitespace included. When the
/// delimiter does not occur the result is `[s]`. An empty delimiter splits
/// `s` into one part per character.
pub fn split<'a>(s: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        return s
            .char_indices()
            .map(|(start, ch)| &s[start..start + ch.len_utf8()])
            .collect();
    }
    s.split(delimiter).collect()
}

/// Count non-overlapping occurrences of `sub`, scanning left to right.
///
/// An empty `sub` matches at every character boundary.
pub fn count(s: &str, sub: &str) -> usize {
    if sub.is_empty() {
        return s.chars().count() + 1;
    }
    s.matches(sub).count()
}

/// Strip leading and trailing whitespace. Interior whitespace is untouched.
pub fn trim(s: &str) -> &str {
    s.trim()
}

/// Concatenate `parts` with exactly one `separator` between neighbours.
pub fn join<S: Borrow<str>>(parts: &[S], separator: &str) -> String {
    parts.join(separator)
}
