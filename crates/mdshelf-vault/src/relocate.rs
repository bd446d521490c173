//! Moving grouped documents into their subdirectories.

use std::fs;
use std::path::Path;

use tracing::debug;

use mdshelf_core::paths::normalize;
use mdshelf_core::{DocumentGroups, PathIndex, Result, ShelfError};

/// Create a subdirectory per actionable group and move each member into
/// it, preserving base names. Returns the old→new [`PathIndex`] covering
/// every file that moved.
///
/// Moves are not transactional: the first failure aborts with files moved
/// so far left in place.
///
/// # Errors
///
/// Returns [`ShelfError::Relocation`] on directory creation or move
/// failure, and [`ShelfError::DestinationExists`] rather than overwriting
/// a file already present at a move target.
pub fn relocate_groups(folder: &Path, groups: &DocumentGroups) -> Result<PathIndex> {
    // Index keys must match what `resolve_lexical` produces during the
    // rewrite phase, so the folder path is normalized as well as
    // absolutized: a caller-spelled `docs/../docs` would otherwise leave
    // `..` components in every key and miss every lookup.
    let folder = std::path::absolute(folder)
        .map(|p| normalize(&p))
        .map_err(|e| ShelfError::Relocation {
            path: folder.to_path_buf(),
            source: e,
        })?;

    let mut index = PathIndex::new();
    for (key, members) in groups.actionable() {
        let group_dir = folder.join(key);
        fs::create_dir_all(&group_dir).map_err(|e| ShelfError::Relocation {
            path: group_dir.clone(),
            source: e,
        })?;

        for name in members {
            let old = folder.join(name);
            let new = group_dir.join(name);
            if new == old {
                // An empty group key resolves to the folder itself.
                continue;
            }
            // symlink_metadata instead of exists(): a dangling symlink at
            // the destination is still an occupant.
            if new.symlink_metadata().is_ok() {
                return Err(ShelfError::DestinationExists { path: new });
            }
            fs::rename(&old, &new).map_err(|e| ShelfError::Relocation {
                path: old.clone(),
                source: e,
            })?;
            debug!(from = %old.display(), to = %new.display(), "moved document");
            index.record(old, new);
        }
    }

    Ok(index)
}
