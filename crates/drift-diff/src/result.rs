//! The result of comparing two documents.

use drift_types::Node;
use indexmap::IndexMap;
use serde::Serialize;

/// All differences found between two documents (or two subtrees).
///
/// Each map is keyed by the path of the difference: `.name` segments for
/// mapping descent, `[key]` segments for sequence elements identified by
/// their first field. A path appears in at most one of the three maps, at
/// the exact leaf where the difference was detected, never redundantly at
/// both a parent and a descendant.
///
/// Entries keep encounter order for readable reports, but no ordering is
/// guaranteed to callers.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DocumentDiff {
    /// Paths present only in the right document, with the value found there.
    pub added: IndexMap<String, Node>,
    /// Paths present only in the left document, with the value found there.
    pub removed: IndexMap<String, Node>,
    /// Paths present in both documents whose leaf values differ.
    pub modified: IndexMap<String, Modification>,
}

/// The old and new values recorded for a modified path.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Modification {
    pub old: Node,
    pub new: Node,
}

impl DocumentDiff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the two documents were identical.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    /// Total number of differences.
    pub fn len(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }

    /// Number of added paths.
    pub fn additions(&self) -> usize {
        self.added.len()
    }

    /// Number of removed paths.
    pub fn removals(&self) -> usize {
        self.removed.len()
    }

    /// Number of modified paths.
    pub fn modifications(&self) -> usize {
        self.modified.len()
    }

    /// Fold a sub-comparison into this diff.
    ///
    /// Every recursion owns a distinct path prefix, so keys never collide
    /// and merging is a plain union.
    pub(crate) fn merge(&mut self, other: DocumentDiff) {
        self.added.extend(other.added);
        self.removed.extend(other.removed);
        self.modified.extend(other.modified);
    }
}
