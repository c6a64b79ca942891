// Morphological pattern (scheme) record

use serde::{Deserialize, Serialize};

use crate::character::{
    ALEF, ALEF_HAMZA_ABOVE, ALEF_HAMZA_BELOW, ALEF_WASLA, FIRST_RADICAL_MARKER,
    SECOND_RADICAL_MARKER, SHADDA, THIRD_RADICAL_MARKER, YA, letters,
};
use crate::enums::PatternClass;

/// Error type for malformed pattern records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern id must not be empty")]
    EmptyId,
    #[error("pattern {id:?} has no radical slot (ف, ع or ل) in its template")]
    NoRadicalSlot { id: String },
}

/// A template with three radical slots plus fixed letters and diacritics.
///
/// The template spells the placeholder word فعل: every ف, ع and ل is a slot
/// for the first, second and third radical. All other characters are copied
/// verbatim into derived words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Unique identifier, distinct from the template text.
    pub id: String,
    /// Template string, usually vowelled: "فَاعِل".
    pub template: String,
    /// Free-text description of the grammatical function.
    #[serde(default)]
    pub description: String,
    /// Explicit class. When absent the class is inferred from the template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<PatternClass>,
}

impl Pattern {
    /// Create a pattern, checking that it has an id and at least one slot.
    pub fn new(
        id: impl Into<String>,
        template: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, PatternError> {
        let pattern = Self {
            id: id.into(),
            template: template.into(),
            description: description.into(),
            class: None,
        };
        pattern.check()?;
        Ok(pattern)
    }

    /// Override the inferred class.
    pub fn with_class(mut self, class: PatternClass) -> Self {
        self.class = Some(class);
        self
    }

    /// Verify the record invariants. Deserialized records bypass `new`, so
    /// stores call this before accepting a pattern.
    pub fn check(&self) -> Result<(), PatternError> {
        if self.id.trim().is_empty() {
            return Err(PatternError::EmptyId);
        }
        if !self.template.chars().any(is_radical_marker) {
            return Err(PatternError::NoRadicalSlot {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    /// The class the rule engine dispatches on.
    pub fn class(&self) -> PatternClass {
        self.class.unwrap_or_else(|| infer_class(&self.template))
    }
}

/// Check whether a template character is one of the three radical markers.
pub fn is_radical_marker(c: char) -> bool {
    matches!(
        c,
        FIRST_RADICAL_MARKER | SECOND_RADICAL_MARKER | THIRD_RADICAL_MARKER
    )
}

/// Infer a pattern's class from the letter skeleton of its template.
///
/// - فعل without shadda: base form
/// - contains فاعل: agent noun
/// - م prefix with فعول: patient noun
/// - ي before the first radical: present, third person masculine
/// - ت, ن or أ before the first radical: present, other persons
/// - bare alef (or wasla / hamza-below alef) before the first radical: imperative
pub fn infer_class(template: &str) -> PatternClass {
    let skeleton: Vec<char> = letters(template).collect();
    let text: String = skeleton.iter().collect();

    if text == "فعل" {
        if template.contains(SHADDA) {
            return PatternClass::Other;
        }
        return PatternClass::Base;
    }
    if text.contains("فاعل") {
        return PatternClass::AgentNoun;
    }
    if skeleton.first() == Some(&'م') && text.contains("فعول") {
        return PatternClass::PatientNoun;
    }
    match skeleton.as_slice() {
        [YA, FIRST_RADICAL_MARKER, ..] => PatternClass::Present3rdMasc,
        ['ت' | 'ن' | ALEF_HAMZA_ABOVE, FIRST_RADICAL_MARKER, ..] => PatternClass::PresentOther,
        [ALEF | ALEF_HAMZA_BELOW | ALEF_WASLA, FIRST_RADICAL_MARKER, ..] => PatternClass::Imperative,
        _ => PatternClass::Other,
    }
}
