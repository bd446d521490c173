//! Directory scanning.

use std::fs;
use std::path::Path;

use tracing::debug;

use mdshelf_core::{Result, ShelfError};

/// An immediate entry of the scanned folder. Discarded after filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedEntry {
    pub name: String,
    pub is_dir: bool,
}

/// List a folder's immediate entries in directory iteration order.
///
/// No recursion into subdirectories.
///
/// # Errors
///
/// Returns [`ShelfError::Scan`] if the folder cannot be read.
pub fn scan_folder(folder: &Path) -> Result<Vec<ScannedEntry>> {
    let read_dir = fs::read_dir(folder).map_err(|e| ShelfError::Scan {
        path: folder.to_path_buf(),
        source: e,
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| ShelfError::Scan {
            path: folder.to_path_buf(),
            source: e,
        })?;
        let file_type = entry.file_type().map_err(|e| ShelfError::Scan {
            path: entry.path(),
            source: e,
        })?;
        entries.push(ScannedEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: file_type.is_dir(),
        });
    }

    debug!(folder = %folder.display(), count = entries.len(), "scanned folder");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_tags_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("note.md"), "x").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let mut entries = scan_folder(dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            entries,
            vec![
                ScannedEntry {
                    name: "note.md".to_string(),
                    is_dir: false
                },
                ScannedEntry {
                    name: "sub".to_string(),
                    is_dir: true
                },
            ]
        );
    }

    #[test]
    fn scan_missing_folder_is_a_scan_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = scan_folder(&missing).unwrap_err();
        assert!(matches!(err, ShelfError::Scan { .. }));
        assert!(err.to_string().contains("nope"));
    }
}
