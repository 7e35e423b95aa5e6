//! Case-insensitive substring matching for search patterns.

/// True iff `pattern` occurs contiguously in `haystack`, ignoring case.
///
/// An empty pattern matches every haystack. Both sides are folded with
/// [`char::to_lowercase`] before a plain quadratic scan.
pub fn contains_ignore_case(haystack: &str, pattern: &str) -> bool {
    let pattern = fold(pattern);
    if pattern.is_empty() {
        return true;
    }
    let haystack = fold(haystack);
    if pattern.len() > haystack.len() {
        return false;
    }
    (0..=haystack.len() - pattern.len())
        .any(|start| haystack[start..start + pattern.len()] == pattern[..])
}

fn fold(value: &str) -> Vec<char> {
    value.chars().flat_map(char::to_lowercase).collect()
}
