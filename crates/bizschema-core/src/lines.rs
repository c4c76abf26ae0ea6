//! Parsing for multi-line text fields (social profiles, areas served).
//!
//! The UI layer hands these over as raw newline-delimited strings; nothing is
//! parsed at input time. The module is crate-private so [`crate::build`] owns
//! the only call sites.

/// Split a text block into trimmed, non-empty lines, order preserved.
pub(crate) fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize a scalar text field: trim surrounding whitespace and treat the
/// empty string as absent.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
