//! # mdshelf-vault
//!
//! Filesystem operations for the mdshelf folder refactorer.
//!
//! The refactor runs in four strictly sequential phases: scan the folder,
//! partition documents by filename convention, relocate actionable groups
//! into subdirectories, then rewrite intra-collection links using the
//! old→new path index built during relocation. The index is the only
//! state threaded from the move phase into the rewrite phase, and it is
//! complete before the first rewrite. Single-threaded and single-tenant:
//! nothing guards against a concurrent run on the same folder.

pub mod relocate;
pub mod rewrite;
pub mod scan;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use mdshelf_core::group::ensure_eligible;
use mdshelf_core::{DocumentGroups, Result, DOC_EXTENSION};

use scan::ScannedEntry;

/// Outcome of a successful refactor run.
#[derive(Debug, Clone, Serialize)]
pub struct RefactorReport {
    pub folder: PathBuf,
    /// Keys of the actionable groups, i.e. the subdirectories populated.
    pub groups: Vec<String>,
    pub files_moved: usize,
    pub links_rewritten: usize,
}

/// Dry-run view of what a refactor would do.
#[derive(Debug, Clone, Serialize)]
pub struct RefactorPlan {
    pub folder: PathBuf,
    pub groups: Vec<PlannedGroup>,
    /// Documents that would stay in the root folder.
    pub singletons: Vec<String>,
}

/// One actionable group in a [`RefactorPlan`].
#[derive(Debug, Clone, Serialize)]
pub struct PlannedGroup {
    pub key: String,
    pub destination: PathBuf,
    pub members: Vec<String>,
}

/// Filter scanned entries to document files and enforce the eligibility
/// threshold.
///
/// # Errors
///
/// Returns [`mdshelf_core::ShelfError::NotEligible`] when the folder has
/// too few documents; no filesystem mutation has happened at that point.
fn eligible_documents(entries: &[ScannedEntry]) -> Result<Vec<String>> {
    let names: Vec<String> = entries
        .iter()
        .filter(|entry| !entry.is_dir && entry.name.ends_with(DOC_EXTENSION))
        .map(|entry| entry.name.clone())
        .collect();
    ensure_eligible(names.len())?;
    Ok(names)
}

/// Reorganize a flat folder of markdown documents into subdirectories
/// named after filename-prefix groups, rewriting intra-collection links
/// so they still resolve from the new locations.
///
/// Stops at the first error; files already moved stay moved (no
/// rollback), so a failed run leaves the folder in an intermediate state.
///
/// # Errors
///
/// Propagates the first [`mdshelf_core::ShelfError`] from any phase.
pub fn refactor_folder(folder: &Path) -> Result<RefactorReport> {
    info!(folder = %folder.display(), "refactoring folder");

    let entries = scan::scan_folder(folder)?;
    let documents = eligible_documents(&entries)?;
    let groups = DocumentGroups::partition(documents);

    let index = relocate::relocate_groups(folder, &groups)?;
    let links_rewritten = rewrite::rewrite_links(&index)?;

    let report = RefactorReport {
        folder: folder.to_path_buf(),
        groups: groups.actionable().map(|(key, _)| key.to_string()).collect(),
        files_moved: index.len(),
        links_rewritten,
    };
    info!(
        moved = report.files_moved,
        links = report.links_rewritten,
        "refactor complete"
    );
    Ok(report)
}

/// Compute the grouping a refactor would apply, without touching the
/// filesystem. Shares the eligibility gate with [`refactor_folder`].
///
/// # Errors
///
/// Propagates scan failures and the `NotEligible` condition.
pub fn plan_folder(folder: &Path) -> Result<RefactorPlan> {
    let entries = scan::scan_folder(folder)?;
    let documents = eligible_documents(&entries)?;
    let groups = DocumentGroups::partition(documents);

    Ok(RefactorPlan {
        folder: folder.to_path_buf(),
        groups: groups
            .actionable()
            .map(|(key, members)| PlannedGroup {
                key: key.to_string(),
                destination: folder.join(key),
                members: members.to_vec(),
            })
            .collect(),
        singletons: groups.singletons().map(str::to_string).collect(),
    })
}
