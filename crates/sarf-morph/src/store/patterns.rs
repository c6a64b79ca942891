// In-memory pattern table

use hashbrown::HashMap;

use sarf_core::pattern::{Pattern, PatternError};

use super::PatternStore;

/// Patterns keyed by id, listed in insertion order.
///
/// Replacing a pattern keeps its position; removal shifts the later ones
/// down.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    patterns: Vec<Pattern>,
    /// Maps a pattern id to its index in `patterns`.
    index: HashMap<String, usize>,
}

impl PatternTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from records, later duplicates replacing earlier ones.
    pub fn from_patterns(
        patterns: impl IntoIterator<Item = Pattern>,
    ) -> Result<Self, PatternError> {
        let mut table = Self::new();
        for pattern in patterns {
            table.put(pattern)?;
        }
        Ok(table)
    }

    fn reindex_from(&mut self, start: usize) {
        for (i, p) in self.patterns.iter().enumerate().skip(start) {
            self.index.insert(p.id.clone(), i);
        }
    }
}

impl PatternStore for PatternTable {
    fn get(&self, id: &str) -> Option<&Pattern> {
        self.index.get(id).map(|&i| &self.patterns[i])
    }

    fn put(&mut self, pattern: Pattern) -> Result<Option<Pattern>, PatternError> {
        pattern.check()?;
        match self.index.get(&pattern.id) {
            Some(&i) => Ok(Some(std::mem::replace(&mut self.patterns[i], pattern))),
            None => {
                self.index.insert(pattern.id.clone(), self.patterns.len());
                self.patterns.push(pattern);
                Ok(None)
            }
        }
    }

    fn remove(&mut self, id: &str) -> Option<Pattern> {
        let i = self.index.remove(id)?;
        let removed = self.patterns.remove(i);
        self.reindex_from(i);
        Some(removed)
    }

    fn list(&self) -> &[Pattern] {
        &self.patterns
    }
}
