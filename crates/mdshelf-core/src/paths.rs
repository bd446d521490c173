//! Lexical path resolution.
//!
//! Link destinations are resolved against a document's *pre-move*
//! directory, and by the time rewriting runs those old paths no longer
//! exist on disk, so `fs::canonicalize` is off the table. Everything here
//! works on path components alone.

use std::path::{Component, Path, PathBuf};

/// Collapse `.` and `..` components without touching the filesystem.
///
/// `..` above the root of an absolute path is dropped; leading `..`
/// components of a relative path are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}

/// Resolve a link destination against a base directory, lexically.
///
/// An absolute destination is normalized as-is; a relative one is joined
/// onto `base_dir` first.
pub fn resolve_lexical(base_dir: &Path, destination: &str) -> PathBuf {
    normalize(&base_dir.join(destination))
}

/// Compute the relative path from `base` to `target`.
///
/// Both paths must be absolute and already normalized. Climbs out of the
/// non-shared suffix of `base` with `..` components, then descends into
/// `target`.
pub fn relative_from(target: &Path, base: &Path) -> PathBuf {
    let target_parts: Vec<Component> = target.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    let shared = target_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in shared..base_parts.len() {
        out.push("..");
    }
    for component in &target_parts[shared..] {
        out.push(component);
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_dot_and_dotdot() {
        assert_eq!(
            normalize(Path::new("/vault/./api/../guide/x.md")),
            PathBuf::from("/vault/guide/x.md")
        );
        assert_eq!(normalize(Path::new("/vault/../../x")), PathBuf::from("/x"));
        assert_eq!(normalize(Path::new("../a/./b")), PathBuf::from("../a/b"));
    }

    #[test]
    fn resolve_lexical_joins_relative_destinations() {
        assert_eq!(
            resolve_lexical(Path::new("/vault"), "api_auth.md"),
            PathBuf::from("/vault/api_auth.md")
        );
        assert_eq!(
            resolve_lexical(Path::new("/vault/api"), "../guide/guide_intro.md"),
            PathBuf::from("/vault/guide/guide_intro.md")
        );
    }

    #[test]
    fn resolve_lexical_keeps_absolute_destinations() {
        assert_eq!(
            resolve_lexical(Path::new("/vault"), "/elsewhere/x.md"),
            PathBuf::from("/elsewhere/x.md")
        );
    }

    #[test]
    fn relative_from_descends_into_sibling_directories() {
        assert_eq!(
            relative_from(
                Path::new("/vault/group2/group2_file0.md"),
                Path::new("/vault/group1")
            ),
            PathBuf::from("../group2/group2_file0.md")
        );
    }

    #[test]
    fn relative_from_within_same_directory_is_bare_name() {
        assert_eq!(
            relative_from(
                Path::new("/vault/group1/group1_file1.md"),
                Path::new("/vault/group1")
            ),
            PathBuf::from("group1_file1.md")
        );
    }

    #[test]
    fn relative_from_identical_paths_is_dot() {
        assert_eq!(
            relative_from(Path::new("/vault/a"), Path::new("/vault/a")),
            PathBuf::from(".")
        );
    }
}
