// Morphology: top-level integration point for root-and-pattern derivation.
//
// Owns a root store and a pattern store and exposes classification,
// generation and validation keyed by plain strings. Input roots are parsed
// here, at the boundary; everything below works on validated `Root`s.
//
// Design notes:
// - The pure engine (classifier, substitution, rules, validator) never
//   touches the stores; the handle reads patterns and writes history.
// - Generation records history only for indexed roots. Validation and
//   `generate_all` take `&self` and record nothing.

use sarf_core::enums::VerbCategory;
use sarf_core::pattern::{Pattern, PatternError};
use sarf_core::root::{Root, RootError};

use crate::classifier::classify;
use crate::store::{PatternStore, PatternTable, RootEntry, RootIndex, RootStore};
use crate::transform::generate_with_category;
use crate::validator::{Validation, validate};

/// Error type for handle operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MorphologyError {
    /// The root text is not three Arabic letters.
    #[error("invalid root: {0}")]
    InvalidRoot(#[from] RootError),

    /// A pattern record failed its checks.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] PatternError),

    /// No pattern with this id is stored.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// The root is not indexed.
    #[error("unknown root: {0}")]
    UnknownRoot(String),
}

/// Roots indexed by [`Morphology::with_defaults`].
pub const DEFAULT_ROOTS: [&str; 4] = ["كتب", "رسم", "درس", "خرج"];

/// The built-in pattern set, in validation order.
///
/// Past tense, agent noun, patient noun, the two present-tense persons and
/// the imperative.
pub fn default_patterns() -> Vec<Pattern> {
    [
        ("فعل", "فَعَلَ", "Past tense, third person masculine"),
        ("فاعل", "فَاعِل", "Agent noun (active participle)"),
        ("مفعول", "مَفْعُول", "Patient noun (passive participle)"),
        ("يفعل", "يَفْعَلُ", "Present tense, third person masculine"),
        ("تفعل", "تَفْعَلُ", "Present tense, second person / third feminine"),
        ("أمر", "اِفْعَلْ", "Imperative"),
    ]
    .into_iter()
    .map(|(id, template, description)| Pattern {
        id: id.to_string(),
        template: template.to_string(),
        description: description.to_string(),
        class: None,
    })
    .collect()
}

/// Facade over a root store and a pattern store.
///
/// Generic over the store implementations; the defaults are the in-memory
/// [`RootIndex`] and [`PatternTable`]. With the default stores the handle is
/// `Send + Sync`; share it behind an `RwLock` when writers run concurrently
/// with readers.
#[derive(Debug, Clone, Default)]
pub struct Morphology<R = RootIndex, P = PatternTable> {
    roots: R,
    patterns: P,
}

impl Morphology {
    /// Empty handle: no roots, no patterns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle seeded with [`default_patterns`] and [`DEFAULT_ROOTS`].
    pub fn with_defaults() -> Result<Self, MorphologyError> {
        let mut roots = RootIndex::new();
        for letters in DEFAULT_ROOTS {
            roots.insert(Root::parse(letters)?);
        }
        let patterns = PatternTable::from_patterns(default_patterns())?;
        Ok(Self { roots, patterns })
    }
}

impl<R: RootStore, P: PatternStore> Morphology<R, P> {
    /// Build a handle over existing stores.
    pub fn with_stores(roots: R, patterns: P) -> Self {
        Self { roots, patterns }
    }

    // =========================================================================
    // Roots
    // =========================================================================

    /// Index a root. Adding a root twice keeps its history.
    pub fn add_root(&mut self, letters: &str) -> Result<&RootEntry, MorphologyError> {
        let root = Root::parse(letters)?;
        Ok(self.roots.insert(root))
    }

    /// Remove a root and its history.
    pub fn remove_root(&mut self, letters: &str) -> Result<RootEntry, MorphologyError> {
        let root = Root::parse(letters)?;
        self.roots
            .remove(&root)
            .ok_or_else(|| MorphologyError::UnknownRoot(root.to_string()))
    }

    pub fn root(&self, letters: &str) -> Result<&RootEntry, MorphologyError> {
        let root = Root::parse(letters)?;
        self.roots
            .lookup(&root)
            .ok_or_else(|| MorphologyError::UnknownRoot(root.to_string()))
    }

    /// Indexed roots in ascending order.
    pub fn roots(&self) -> impl Iterator<Item = &RootEntry> + '_ {
        self.roots.iter()
    }

    // =========================================================================
    // Patterns
    // =========================================================================

    /// Add a pattern, or replace the one with the same id.
    pub fn add_pattern(&mut self, pattern: Pattern) -> Result<Option<Pattern>, MorphologyError> {
        Ok(self.patterns.put(pattern)?)
    }

    pub fn remove_pattern(&mut self, id: &str) -> Result<Pattern, MorphologyError> {
        self.patterns
            .remove(id)
            .ok_or_else(|| MorphologyError::UnknownPattern(id.to_string()))
    }

    pub fn pattern(&self, id: &str) -> Result<&Pattern, MorphologyError> {
        self.patterns
            .get(id)
            .ok_or_else(|| MorphologyError::UnknownPattern(id.to_string()))
    }

    /// Patterns in validation order.
    pub fn patterns(&self) -> &[Pattern] {
        self.patterns.list()
    }

    // =========================================================================
    // Engine
    // =========================================================================

    /// Category of a root, from the index when the root is indexed.
    pub fn classify(&self, letters: &str) -> Result<VerbCategory, MorphologyError> {
        let root = Root::parse(letters)?;
        Ok(self.category_of(&root))
    }

    fn category_of(&self, root: &Root) -> VerbCategory {
        self.roots
            .lookup(root)
            .map_or_else(|| classify(root), RootEntry::category)
    }

    /// Derive a word and record it in the root's history.
    ///
    /// Roots that are not indexed are still derived, without a record.
    pub fn generate(&mut self, letters: &str, pattern_id: &str) -> Result<String, MorphologyError> {
        let root = Root::parse(letters)?;
        let category = self.category_of(&root);
        let pattern = self
            .patterns
            .get(pattern_id)
            .ok_or_else(|| MorphologyError::UnknownPattern(pattern_id.to_string()))?;
        let word = generate_with_category(&root, category, pattern);
        self.roots.record_derivation(&root, &pattern.id, &word);
        Ok(word)
    }

    /// Derive a root under every pattern, as (pattern id, word) pairs in
    /// pattern order. Nothing is recorded.
    pub fn generate_all(&self, letters: &str) -> Result<Vec<(String, String)>, MorphologyError> {
        let root = Root::parse(letters)?;
        let category = self.category_of(&root);
        Ok(self
            .patterns
            .list()
            .iter()
            .map(|p| (p.id.clone(), generate_with_category(&root, category, p)))
            .collect())
    }

    /// Check a word against every stored pattern for the given root.
    pub fn validate(&self, word: &str, letters: &str) -> Result<Validation, MorphologyError> {
        let root = Root::parse(letters)?;
        Ok(validate(word, &root, self.patterns.list()))
    }
}
