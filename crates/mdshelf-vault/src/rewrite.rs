//! Rewriting links inside relocated documents.
//!
//! Link authors wrote destinations relative to where the file used to
//! live, so resolution happens against the *old* parent directory; the
//! replacement is computed from the *new* one. Both sides come from the
//! [`PathIndex`] built by relocation, which is complete before the first
//! rewrite happens.

use std::fs;
use std::path::Path;

use tracing::debug;

use mdshelf_core::paths::{relative_from, resolve_lexical};
use mdshelf_core::{PathIndex, Result, ShelfError, DOC_EXTENSION};
use mdshelf_parser::Visitor;

/// Rewrite links in every moved document. Returns the number of link
/// destinations that changed.
///
/// Documents are written back in place at their new paths; destinations
/// that resolve outside the moved set, non-document destinations, and
/// URLs stay byte-identical.
///
/// # Errors
///
/// Returns [`ShelfError::Rewrite`] on read/write failure and
/// [`ShelfError::Parse`] if a document cannot be parsed.
pub fn rewrite_links(index: &PathIndex) -> Result<usize> {
    let mut links_rewritten = 0;

    for (old, new) in index.iter() {
        let source = fs::read_to_string(new).map_err(|e| ShelfError::Rewrite {
            path: new.to_path_buf(),
            source: e,
        })?;
        let mut doc = mdshelf_parser::parse(&source).map_err(|e| ShelfError::Parse {
            path: new.to_path_buf(),
            message: e.to_string(),
        })?;

        let old_dir = parent_of(old)?;
        let new_dir = parent_of(new)?;
        let mut rewriter = LinkRewriter {
            index,
            old_dir,
            new_dir,
            rewritten: 0,
        };
        doc.walk(&mut rewriter);

        fs::write(new, doc.to_string()).map_err(|e| ShelfError::Rewrite {
            path: new.to_path_buf(),
            source: e,
        })?;

        debug!(path = %new.display(), rewritten = rewriter.rewritten, "rewrote document");
        links_rewritten += rewriter.rewritten;
    }

    Ok(links_rewritten)
}

fn parent_of(path: &Path) -> Result<&Path> {
    path.parent().ok_or_else(|| ShelfError::Rewrite {
        path: path.to_path_buf(),
        source: std::io::Error::other("path has no parent directory"),
    })
}

struct LinkRewriter<'a> {
    index: &'a PathIndex,
    old_dir: &'a Path,
    new_dir: &'a Path,
    rewritten: usize,
}

impl Visitor for LinkRewriter<'_> {
    fn visit_link(&mut self, _label: &mut String, destination: &mut String) {
        // Non-document links and network addresses are untouched.
        if !destination.ends_with(DOC_EXTENSION) || destination.starts_with("http") {
            return;
        }

        let resolved = resolve_lexical(self.old_dir, destination);
        if let Some(new_target) = self.index.lookup(&resolved) {
            let relative = relative_from(new_target, self.new_dir);
            *destination = relative.to_string_lossy().into_owned();
            self.rewritten += 1;
        }
    }
}
