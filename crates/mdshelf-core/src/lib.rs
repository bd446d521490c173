//! # mdshelf-core
//!
//! Core types for the mdshelf folder refactorer.
//!
//! This crate defines the foundational pieces used across all other
//! mdshelf crates:
//! - Error hierarchy ([`ShelfError`], [`Result`])
//! - Group key derivation and the [`DocumentGroups`] partition
//! - [`PathIndex`] — the old-path→new-path mapping produced by relocation
//!   and consumed by link rewriting
//! - Lexical path helpers ([`paths`]) for resolving link destinations
//!   against directories that no longer exist on disk

pub mod error;
pub mod group;
pub mod index;
pub mod paths;

pub use error::{Result, ShelfError};
pub use group::{group_key, DocumentGroups, DOC_EXTENSION, FALLBACK_GROUP, GROUP_THRESHOLD};
pub use index::PathIndex;
