// In-memory root index

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sarf_core::derivation::DerivedWord;
use sarf_core::enums::VerbCategory;
use sarf_core::root::Root;

use super::RootStore;
use crate::classifier::classify;

/// A root with its cached category and derivation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootEntry {
    root: Root,
    category: VerbCategory,
    derivations: Vec<DerivedWord>,
}

impl RootEntry {
    pub fn new(root: Root) -> Self {
        Self {
            root,
            category: classify(&root),
            derivations: Vec::new(),
        }
    }

    pub fn root(&self) -> Root {
        self.root
    }

    pub fn category(&self) -> VerbCategory {
        self.category
    }

    /// History in the order records were first made.
    pub fn derivations(&self) -> &[DerivedWord] {
        &self.derivations
    }

    /// The record for a pattern, if the root was ever generated under it.
    pub fn derivation(&self, pattern_id: &str) -> Option<&DerivedWord> {
        self.derivations.iter().find(|d| d.pattern_id == pattern_id)
    }

    fn record(&mut self, pattern_id: &str, word: &str) -> &DerivedWord {
        let existing = self
            .derivations
            .iter()
            .position(|d| d.pattern_id == pattern_id && d.word == word);
        let i = match existing {
            Some(i) => {
                self.derivations[i].touch();
                i
            }
            None => {
                self.derivations.push(DerivedWord::new(pattern_id, word));
                self.derivations.len() - 1
            }
        };
        &self.derivations[i]
    }
}

/// Roots keyed by their letters, iterated in ascending order.
#[derive(Debug, Clone, Default)]
pub struct RootIndex {
    entries: BTreeMap<Root, RootEntry>,
}

impl RootIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RootStore for RootIndex {
    fn lookup(&self, root: &Root) -> Option<&RootEntry> {
        self.entries.get(root)
    }

    fn insert(&mut self, root: Root) -> &RootEntry {
        self.entries
            .entry(root)
            .or_insert_with(|| RootEntry::new(root))
    }

    fn remove(&mut self, root: &Root) -> Option<RootEntry> {
        self.entries.remove(root)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &RootEntry> + '_> {
        Box::new(self.entries.values())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn record_derivation(
        &mut self,
        root: &Root,
        pattern_id: &str,
        word: &str,
    ) -> Option<&DerivedWord> {
        let entry = self.entries.get_mut(root)?;
        Some(entry.record(pattern_id, word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root(s: &str) -> Root {
        Root::parse(s).unwrap()
    }

    #[test]
    fn insert_classifies_once() {
        let mut index = RootIndex::new();
        let entry = index.insert(root("قال"));
        assert_eq!(entry.category(), VerbCategory::WeakMedialWaw);
        assert!(entry.derivations().is_empty());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut index = RootIndex::new();
        index.insert(root("كتب"));
        index.record_derivation(&root("كتب"), "فاعل", "كَاتِب");
        let again = index.insert(root("كتب"));
        assert_eq!(again.derivations().len(), 1);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn iterates_in_key_order() {
        let mut index = RootIndex::new();
        for r in ["كتب", "درس", "رسم", "خرج"] {
            index.insert(root(r));
        }
        let keys: Vec<String> = index.iter().map(|e| e.root().to_string()).collect();
        assert_eq!(keys, vec!["خرج", "درس", "رسم", "كتب"]);
    }

    #[test]
    fn record_appends_then_increments() {
        let mut index = RootIndex::new();
        let r = root("كتب");
        index.insert(r);
        let first = index.record_derivation(&r, "فاعل", "كَاتِب").unwrap();
        assert_eq!(first.usage_count, 1);
        let second = index.record_derivation(&r, "فاعل", "كَاتِب").unwrap();
        assert_eq!(second.usage_count, 2);
        index.record_derivation(&r, "مفعول", "مَكْتُوب");

        let entry = index.lookup(&r).unwrap();
        assert_eq!(entry.derivations().len(), 2);
        assert_eq!(entry.derivation("فاعل").unwrap().usage_count, 2);
        assert_eq!(entry.derivation("مفعول").unwrap().usage_count, 1);
    }

    #[test]
    fn changed_word_is_a_new_record() {
        let mut index = RootIndex::new();
        let r = root("كتب");
        index.insert(r);
        index.record_derivation(&r, "x", "كاتب");
        index.record_derivation(&r, "x", "كتاب");
        assert_eq!(index.lookup(&r).unwrap().derivations().len(), 2);
    }

    #[test]
    fn record_needs_indexed_root() {
        let mut index = RootIndex::new();
        assert!(index.record_derivation(&root("كتب"), "فاعل", "كاتب").is_none());
    }

    #[test]
    fn remove_drops_history() {
        let mut index = RootIndex::new();
        let r = root("كتب");
        index.insert(r);
        index.record_derivation(&r, "فاعل", "كاتب");
        let removed = index.remove(&r).unwrap();
        assert_eq!(removed.derivations().len(), 1);
        assert!(index.lookup(&r).is_none());
        assert!(index.is_empty());
    }

    #[test]
    fn entry_serializes_root_as_string() {
        let entry = RootEntry::new(root("بقي"));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["root"], "بقي");
        assert_eq!(json["category"], "weak-final-ya");
        assert_eq!(json["derivations"], serde_json::json!([]));
    }
}
