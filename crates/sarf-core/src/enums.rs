// Shared enums: VerbCategory, PatternClass

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural class of a triliteral root.
///
/// Determined solely by which radical positions hold a weak letter or a
/// glottal stop. Every well-formed root maps to exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerbCategory {
    /// No weak, glottal or doubled radical: كتب.
    Regular,
    /// Glottal first radical: أكل.
    GlottalInitial,
    /// Glottal second radical: سأل.
    GlottalMedial,
    /// Glottal third radical: قرأ.
    GlottalFinal,
    /// Weak first radical: وجد.
    WeakInitial,
    /// Hollow root whose middle radical is waw (or alef from waw): قال.
    WeakMedialWaw,
    /// Hollow root whose middle radical is ya: بيع.
    WeakMedialYa,
    /// Defective root ending in ya or alef-maqsura: بقي.
    WeakFinalYa,
    /// Defective root ending in waw or alef: دعا.
    WeakFinalWaw,
    /// Weak first and third radicals: وقى.
    DoublyWeakSeparated,
    /// Weak second and third radicals: طوى.
    DoublyWeakAdjacent,
    /// Identical second and third radicals: مدد.
    Doubled,
}

impl VerbCategory {
    /// All categories, in classification priority order.
    pub const ALL: [VerbCategory; 12] = [
        VerbCategory::Doubled,
        VerbCategory::GlottalInitial,
        VerbCategory::GlottalMedial,
        VerbCategory::GlottalFinal,
        VerbCategory::DoublyWeakSeparated,
        VerbCategory::DoublyWeakAdjacent,
        VerbCategory::WeakInitial,
        VerbCategory::WeakMedialWaw,
        VerbCategory::WeakMedialYa,
        VerbCategory::WeakFinalYa,
        VerbCategory::WeakFinalWaw,
        VerbCategory::Regular,
    ];

    /// Traditional Arabic grammatical label.
    pub fn arabic_name(self) -> &'static str {
        match self {
            VerbCategory::Regular => "صحيح سالم",
            VerbCategory::GlottalInitial => "مهموز الفاء",
            VerbCategory::GlottalMedial => "مهموز العين",
            VerbCategory::GlottalFinal => "مهموز اللام",
            VerbCategory::WeakInitial => "مثال",
            VerbCategory::WeakMedialWaw => "أجوف واوي",
            VerbCategory::WeakMedialYa => "أجوف يائي",
            VerbCategory::WeakFinalYa => "ناقص يائي",
            VerbCategory::WeakFinalWaw => "ناقص واوي",
            VerbCategory::DoublyWeakSeparated => "لفيف مفروق",
            VerbCategory::DoublyWeakAdjacent => "لفيف مقرون",
            VerbCategory::Doubled => "مضاعف",
        }
    }

    /// Stable identifier, matching the serde form.
    pub fn as_str(self) -> &'static str {
        match self {
            VerbCategory::Regular => "regular",
            VerbCategory::GlottalInitial => "glottal-initial",
            VerbCategory::GlottalMedial => "glottal-medial",
            VerbCategory::GlottalFinal => "glottal-final",
            VerbCategory::WeakInitial => "weak-initial",
            VerbCategory::WeakMedialWaw => "weak-medial-waw",
            VerbCategory::WeakMedialYa => "weak-medial-ya",
            VerbCategory::WeakFinalYa => "weak-final-ya",
            VerbCategory::WeakFinalWaw => "weak-final-waw",
            VerbCategory::DoublyWeakSeparated => "doubly-weak-separated",
            VerbCategory::DoublyWeakAdjacent => "doubly-weak-adjacent",
            VerbCategory::Doubled => "doubled",
        }
    }
}

impl fmt::Display for VerbCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammatical function of a pattern, as far as the rule engine cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternClass {
    /// Past-tense base form: فعل.
    Base,
    /// Active participle: فاعل.
    AgentNoun,
    /// Passive participle: مفعول.
    PatientNoun,
    /// Imperative with the initial augment: افعل.
    Imperative,
    /// Present tense, third person masculine: يفعل.
    #[serde(rename = "present-3rd-masc")]
    Present3rdMasc,
    /// Present tense, other persons: تفعل, نفعل, أفعل.
    PresentOther,
    /// Any shape with no category-specific realization.
    Other,
}

impl PatternClass {
    /// Whether this is one of the present-tense classes.
    pub fn is_present(self) -> bool {
        matches!(self, PatternClass::Present3rdMasc | PatternClass::PresentOther)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PatternClass::Base => "base",
            PatternClass::AgentNoun => "agent-noun",
            PatternClass::PatientNoun => "patient-noun",
            PatternClass::Imperative => "imperative",
            PatternClass::Present3rdMasc => "present-3rd-masc",
            PatternClass::PresentOther => "present-other",
            PatternClass::Other => "other",
        }
    }
}

impl fmt::Display for PatternClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
