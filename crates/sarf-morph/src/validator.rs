// Validation of candidate words by forward regeneration

use serde::Serialize;

use sarf_core::pattern::Pattern;
use sarf_core::root::Root;

use crate::classifier::classify;
use crate::normalizer::normalize;
use crate::transform::generate_with_category;

/// Outcome of validating a word against a root.
///
/// A word that matches no pattern is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Validation {
    /// Id of the first pattern whose regenerated word matched.
    pub matched_pattern: Option<String>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.matched_pattern.is_some()
    }
}

/// Check whether `word` is a derivation of `root` under one of `patterns`.
///
/// The root is classified once. Each pattern is regenerated in iteration
/// order and compared under [`normalize`]; the first match wins, so callers
/// control precedence through the order they pass patterns in.
pub fn validate<'a, I>(word: &str, root: &Root, patterns: I) -> Validation
where
    I: IntoIterator<Item = &'a Pattern>,
{
    let target = normalize(word);
    let category = classify(root);
    let matched_pattern = patterns
        .into_iter()
        .find(|p| normalize(&generate_with_category(root, category, p)) == target)
        .map(|p| p.id.clone());
    Validation { matched_pattern }
}
