//! Error types for mdshelf.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level result type for mdshelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Top-level error type for mdshelf.
///
/// Every variant is terminal for the run: there is no retry and no
/// partial-success reporting. A failed refactor may leave the folder in an
/// intermediate state (some files moved, some links not yet rewritten); the
/// path carried by the variant is the starting point for manual inspection.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// The folder could not be scanned at all.
    #[error("failed to read directory {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The folder holds too few documents to be worth reorganizing.
    #[error("folder has {count} markdown files, no refactoring needed (threshold is >{threshold})")]
    NotEligible { count: usize, threshold: usize },

    /// Directory creation or file move failed during relocation.
    #[error("failed to relocate {}: {source}", path.display())]
    Relocation {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A move target already exists; refusing to overwrite it.
    #[error("destination already exists: {}", path.display())]
    DestinationExists { path: PathBuf },

    /// Reading or writing a document failed during link rewriting.
    #[error("failed to rewrite links in {}: {source}", path.display())]
    Rewrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A document could not be parsed during link rewriting.
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
}
