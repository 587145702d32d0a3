//! Path normalization and manipulation.
//!
//! Paths are `/`-joined name components. The empty string denotes the root
//! container. Normalization drops empty components, which strips leading
//! and trailing separators and collapses repeated ones; it is idempotent.

/// Path separator.
pub const SEPARATOR: char = '/';

/// Normalize a path: drop empty components, rejoin with `/`.
///
/// `"a/"`, `"/a"`, and `"//a"` all normalize to `"a"`. The root normalizes
/// to `""`.
pub fn normalize(path: &str) -> String {
    path.split(SEPARATOR)
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Join a normalized parent path and a leaf name.
pub fn join(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        normalize(name)
    } else {
        normalize(&format!("{}/{}", parent, name))
    }
}

/// Parent prefix of a normalized path. The parent of a top-level path is
/// the root, `""`.
pub fn parent(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// Final component of a normalized path.
pub fn file_name(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}
