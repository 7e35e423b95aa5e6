//! Syntactic construction of absolute paths from user-supplied fragments.
//!
//! Resolution never touches the filesystem. Whether the result exists is
//! decided by the operation that consumes it.

use std::path::MAIN_SEPARATOR;

/// Size of the resolved-path buffer in bytes. Resolved paths hold at most
/// `MAX_PATH_BYTES - 1` bytes.
pub const MAX_PATH_BYTES: usize = 1024;

const FOREIGN_SEPARATOR: char = if cfg!(windows) { '/' } else { '\\' };

/// Resolve `fragment` against `base` using the default [`MAX_PATH_BYTES`] limit.
pub fn resolve(base: &str, fragment: &str) -> String {
    resolve_with_limit(base, fragment, MAX_PATH_BYTES)
}

/// Resolve `fragment` against `base`, truncating the result to `limit - 1` bytes.
///
/// Absolute fragments are returned as-is (separators normalized). Relative
/// fragments are appended to `base` with a single separator between them.
/// Truncation cuts on a UTF-8 character boundary and is silent.
pub fn resolve_with_limit(base: &str, fragment: &str, limit: usize) -> String {
    let fragment = normalize_separators(fragment);
    let mut resolved = if is_absolute(&fragment) {
        fragment
    } else {
        let base = normalize_separators(base);
        let mut joined = String::with_capacity(base.len() + 1 + fragment.len());
        joined.push_str(&base);
        if !base.ends_with(MAIN_SEPARATOR) {
            joined.push(MAIN_SEPARATOR);
        }
        joined.push_str(&fragment);
        joined
    };
    truncate_on_char_boundary(&mut resolved, limit.saturating_sub(1));
    resolved
}

/// True when `fragment` starts at a filesystem root.
///
/// A leading `/` or `\` always counts. On Windows a drive prefix (`C:`) counts too.
pub fn is_absolute(fragment: &str) -> bool {
    let bytes = fragment.as_bytes();
    match bytes.first() {
        Some(b'/') | Some(b'\\') => true,
        Some(first) if cfg!(windows) => {
            first.is_ascii_alphabetic() && bytes.get(1) == Some(&b':')
        }
        _ => false,
    }
}

/// Replace the non-native separator with [`MAIN_SEPARATOR`].
pub fn normalize_separators(path: &str) -> String {
    path.replace(FOREIGN_SEPARATOR, &MAIN_SEPARATOR.to_string())
}

fn truncate_on_char_boundary(value: &mut String, max_bytes: usize) {
    if value.len() <= max_bytes {
        return;
    }
    let mut cut = max_bytes;
    while !value.is_char_boundary(cut) {
        cut -= 1;
    }
    value.truncate(cut);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> String {
        format!("{MAIN_SEPARATOR}home{MAIN_SEPARATOR}user")
    }

    #[test]
    fn relative_fragment_is_joined_under_base() {
        let resolved = resolve(&base(), "sub/dir");
        assert!(resolved.starts_with(&base()));
        assert_eq!(
            resolved,
            format!("{}{MAIN_SEPARATOR}sub{MAIN_SEPARATOR}dir", base())
        );
    }

    #[test]
    fn absolute_fragment_ignores_base() {
        let fragment = format!("{MAIN_SEPARATOR}already{MAIN_SEPARATOR}absolute");
        assert_eq!(resolve(&base(), &fragment), fragment);
        assert_eq!(resolve("", &fragment), fragment);
    }

    #[test]
    fn foreign_separators_are_normalized() {
        let fragment = format!("a{FOREIGN_SEPARATOR}b");
        assert_eq!(
            resolve(&base(), &fragment),
            format!("{}{MAIN_SEPARATOR}a{MAIN_SEPARATOR}b", base())
        );
    }

    #[test]
    fn base_with_trailing_separator_is_not_doubled() {
        let root = MAIN_SEPARATOR.to_string();
        assert_eq!(resolve(&root, "etc"), format!("{MAIN_SEPARATOR}etc"));
    }

    #[test]
    fn over_long_fragment_is_truncated() {
        let fragment = "a".repeat(5000);
        let resolved = resolve(&base(), &fragment);
        assert_eq!(resolved.len(), MAX_PATH_BYTES - 1);
        assert!(resolved.starts_with(&base()));
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        let fragment = "é".repeat(10);
        let resolved = resolve_with_limit("", &fragment, 6);
        // 5 bytes available; "é" is 2 bytes wide.
        assert_eq!(resolved, format!("{MAIN_SEPARATOR}éé"));
    }

    #[test]
    fn plain_names_are_relative() {
        assert!(!is_absolute("notes.txt"));
        assert!(!is_absolute(""));
        assert!(is_absolute("/tmp"));
        assert!(is_absolute("\\server"));
    }

    #[cfg(windows)]
    #[test]
    fn drive_prefix_is_absolute_on_windows() {
        assert!(is_absolute("C:\\Users"));
        assert_eq!(resolve("D:\\base", "C:/x"), "C:\\x");
    }
}
