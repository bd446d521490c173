//! The old-path→new-path index built by relocation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Mapping from pre-move absolute path to post-move absolute path.
///
/// Covers only documents that actually moved. Built once by the relocator,
/// then consumed read-only by the link rewriter; every key existed before
/// the run and every value exists after the move phase. The relocator's
/// collision check keeps the mapping injective.
#[derive(Debug, Clone, Default)]
pub struct PathIndex {
    entries: BTreeMap<PathBuf, PathBuf>,
}

impl PathIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed move.
    pub fn record(&mut self, old: PathBuf, new: PathBuf) {
        self.entries.insert(old, new);
    }

    /// Look up the post-move path for a pre-move absolute path.
    pub fn lookup(&self, old: &Path) -> Option<&Path> {
        self.entries.get(old).map(PathBuf::as_path)
    }

    /// Iterate over (old, new) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &Path)> {
        self.entries
            .iter()
            .map(|(old, new)| (old.as_path(), new.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_recorded_moves_only() {
        let mut index = PathIndex::new();
        index.record(
            PathBuf::from("/vault/api_auth.md"),
            PathBuf::from("/vault/api/api_auth.md"),
        );

        assert_eq!(
            index.lookup(Path::new("/vault/api_auth.md")),
            Some(Path::new("/vault/api/api_auth.md"))
        );
        assert_eq!(index.lookup(Path::new("/vault/readme.md")), None);
        assert_eq!(index.len(), 1);
    }
}
