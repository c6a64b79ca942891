// Collaborator stores: roots with their derivation history, and patterns
//
// The engine itself only reads from these. `RootIndex` and `PatternTable`
// are the in-memory implementations the `Morphology` facade owns;
// persistent backends implement the same traits.

mod patterns;
mod roots;

pub use patterns::PatternTable;
pub use roots::{RootEntry, RootIndex};

use sarf_core::derivation::DerivedWord;
use sarf_core::pattern::{Pattern, PatternError};
use sarf_core::root::Root;

/// Ordered index of roots, each owning its derivation history.
pub trait RootStore {
    /// Find the entry for a root.
    fn lookup(&self, root: &Root) -> Option<&RootEntry>;

    /// Insert a root, classifying it once. Inserting an existing root
    /// returns the existing entry unchanged.
    fn insert(&mut self, root: Root) -> &RootEntry;

    /// Remove a root together with its history.
    fn remove(&mut self, root: &Root) -> Option<RootEntry>;

    /// All entries in ascending root order.
    fn iter(&self) -> Box<dyn Iterator<Item = &RootEntry> + '_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record one generation of `word` from `root` under `pattern_id`.
    ///
    /// Appends a new history record, or bumps the usage count when the same
    /// (pattern id, word) pair was recorded before. Returns `None` when the
    /// root is not indexed.
    fn record_derivation(
        &mut self,
        root: &Root,
        pattern_id: &str,
        word: &str,
    ) -> Option<&DerivedWord>;
}

/// Keyed table of patterns that remembers insertion order.
pub trait PatternStore {
    fn get(&self, id: &str) -> Option<&Pattern>;

    /// Insert a pattern, or replace the one with the same id in place.
    /// Returns the replaced pattern. Malformed records are rejected.
    fn put(&mut self, pattern: Pattern) -> Result<Option<Pattern>, PatternError>;

    fn remove(&mut self, id: &str) -> Option<Pattern>;

    /// All patterns in insertion order.
    fn list(&self) -> &[Pattern];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
