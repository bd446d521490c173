//! Filename-convention grouping.
//!
//! Documents are clustered by a key derived from the filename alone:
//! the stem up to the first `_`, else up to the first `-`, else the
//! reserved `"common"` key. Key derivation is a pure function so the
//! grouping rule can be tested without touching the filesystem.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShelfError};

/// Extension identifying managed documents. Case-sensitive exact suffix.
pub const DOC_EXTENSION: &str = ".md";

/// A folder with this many documents or fewer is left alone.
pub const GROUP_THRESHOLD: usize = 10;

/// Key assigned to documents whose stem has neither `_` nor `-`.
pub const FALLBACK_GROUP: &str = "common";

/// Derive the group key for a document file name.
///
/// The extension is stripped first, so `api-notes.md` groups under `api`
/// while `readme.md` falls back to [`FALLBACK_GROUP`]. `_` wins over `-`
/// when both appear.
pub fn group_key(file_name: &str) -> String {
    let stem = file_name.strip_suffix(DOC_EXTENSION).unwrap_or(file_name);
    if let Some((prefix, _)) = stem.split_once('_') {
        prefix.to_string()
    } else if let Some((prefix, _)) = stem.split_once('-') {
        prefix.to_string()
    } else {
        FALLBACK_GROUP.to_string()
    }
}

/// Fail with [`ShelfError::NotEligible`] unless the folder holds strictly
/// more documents than [`GROUP_THRESHOLD`].
pub fn ensure_eligible(count: usize) -> Result<()> {
    if count <= GROUP_THRESHOLD {
        return Err(ShelfError::NotEligible {
            count,
            threshold: GROUP_THRESHOLD,
        });
    }
    Ok(())
}

/// A partition of document file names into groups by derived key.
///
/// Every input name belongs to exactly one group; order within a group
/// preserves insertion (scan) order. Groups with a single member are
/// retained but non-actionable — their files never move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentGroups {
    groups: BTreeMap<String, Vec<String>>,
}

impl DocumentGroups {
    /// Partition file names by [`group_key`].
    pub fn partition<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for name in names {
            groups.entry(group_key(&name)).or_default().push(name);
        }
        Self { groups }
    }

    /// Groups with more than one member, eligible for relocation.
    pub fn actionable(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .filter(|(_, members)| members.len() > 1)
            .map(|(key, members)| (key.as_str(), members.as_slice()))
    }

    /// File names of single-member groups, which stay in the root folder.
    pub fn singletons(&self) -> impl Iterator<Item = &str> {
        self.groups
            .values()
            .filter(|members| members.len() == 1)
            .map(|members| members[0].as_str())
    }

    /// Total number of documents across all groups.
    pub fn document_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Number of distinct groups, actionable or not.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn underscore_wins_over_dash() {
        assert_eq!(group_key("api_auth.md"), "api");
        assert_eq!(group_key("api-v2_draft.md"), "api-v2");
    }

    #[test]
    fn dash_used_when_no_underscore() {
        assert_eq!(group_key("guide-intro.md"), "guide");
    }

    #[test]
    fn plain_stem_falls_back_to_common() {
        assert_eq!(group_key("readme.md"), "common");
        assert_eq!(group_key("notes.md"), "common");
    }

    #[test]
    fn extension_is_stripped_before_splitting() {
        // Without stripping, the `-` in no-dash stems would never matter,
        // but the extension dot must not interfere either.
        assert_eq!(group_key("a.md"), "common");
        assert_eq!(group_key("a_b.md"), "a");
    }

    #[test]
    fn leading_separator_yields_empty_key() {
        assert_eq!(group_key("_orphan.md"), "");
    }

    #[test]
    fn eligibility_gate_is_strict() {
        assert!(ensure_eligible(10).is_err());
        assert!(ensure_eligible(0).is_err());
        assert!(ensure_eligible(11).is_ok());
    }

    #[test]
    fn partition_keeps_scan_order_within_groups() {
        let groups = DocumentGroups::partition(
            ["api_b.md", "guide_x.md", "api_a.md"]
                .into_iter()
                .map(String::from),
        );
        let api: Vec<_> = groups
            .actionable()
            .find(|(key, _)| *key == "api")
            .map(|(_, members)| members.to_vec())
            .unwrap();
        assert_eq!(api, vec!["api_b.md".to_string(), "api_a.md".to_string()]);
    }

    #[test]
    fn singletons_are_not_actionable() {
        let groups = DocumentGroups::partition(
            ["api_a.md", "api_b.md", "lone_note.md"]
                .into_iter()
                .map(String::from),
        );
        assert_eq!(groups.actionable().count(), 1);
        let singles: Vec<_> = groups.singletons().collect();
        assert_eq!(singles, vec!["lone_note.md"]);
    }

    proptest! {
        #[test]
        fn key_derivation_is_deterministic(name in "[a-z0-9_.-]{1,20}\\.md") {
            prop_assert_eq!(group_key(&name), group_key(&name));
        }

        #[test]
        fn key_never_contains_a_separator_it_split_on(stem in "[a-z0-9.-]{0,8}_[a-z0-9_.-]{0,8}") {
            let name = format!("{stem}.md");
            prop_assert!(!group_key(&name).contains('_'));
        }

        #[test]
        fn partition_covers_every_document(names in proptest::collection::vec("[a-z0-9_-]{1,12}\\.md", 0..40)) {
            let total = names.len();
            let groups = DocumentGroups::partition(names);
            prop_assert_eq!(groups.document_count(), total);
        }
    }
}
