// Transformation rule engine: category- and pattern-specific repairs
//
// Substitution alone spells every root the same way. Roots with weak,
// glottal or doubled radicals need their substituted stem rewritten before
// it is a real word. The rewrites are grouped by rule family; this module
// only dispatches on (category, pattern class).

mod doubled;
mod glottal;
mod weak;

use sarf_core::enums::{PatternClass, VerbCategory};
use sarf_core::pattern::Pattern;
use sarf_core::root::Root;

use crate::classifier::classify;
use crate::stem::Stem;

use weak::Family;

/// Apply the repairs for `category` under `class` to a substituted stem.
///
/// Total and idempotent: a combination with no specific realization leaves
/// the stem unchanged, and applying the rules to their own output is a
/// no-op. Rules key on radical slots, so a radical a rule deletes is not
/// found on a second pass.
pub fn transform(stem: &mut Stem, root: &Root, category: VerbCategory, class: PatternClass) {
    use PatternClass as P;
    use VerbCategory as C;

    match (category, class) {
        (C::Regular, _) | (_, P::Other) => {}

        (C::GlottalInitial, P::Imperative) => glottal::drop_initial(stem),
        (C::GlottalInitial, _) => glottal::merge_initial_madda(stem),

        (C::GlottalMedial, P::AgentNoun) => glottal::seat_medial_on_ya(stem),
        (C::GlottalMedial, P::PatientNoun) => glottal::seat_medial_on_waw(stem),
        (C::GlottalMedial, P::Present3rdMasc | P::PresentOther) => {
            glottal::drop_vowel_after_medial(stem)
        }
        (C::GlottalMedial, P::Base | P::Imperative) => {}

        (C::GlottalFinal, P::AgentNoun) => glottal::seat_final_on_ya(stem),
        (C::GlottalFinal, P::PatientNoun) => glottal::final_on_line(stem),
        (C::GlottalFinal, _) => {}

        (C::WeakInitial, P::Present3rdMasc | P::PresentOther) => weak::initial_present(stem),
        (C::WeakInitial, P::Imperative) => weak::initial_imperative(stem),
        (C::WeakInitial, _) => {}

        (C::WeakMedialWaw, _) => weak::hollow(stem, Family::Waw, class),
        (C::WeakMedialYa, _) => weak::hollow(stem, Family::Ya, class),

        (C::WeakFinalYa | C::WeakFinalWaw | C::DoublyWeakSeparated, _) => {
            weak::defective(stem, Family::of(root.third()), class)
        }
        (C::DoublyWeakAdjacent, _) => {
            weak::defective(stem, Family::of(root.third()), class);
            weak::drop_duplicate_medial_vowel(stem);
        }

        (C::Doubled, _) => doubled::assimilate(stem),
    }
}

/// Derive the surface word for a root under a pattern, with the category
/// already known (e.g. cached on a root record).
pub fn generate_with_category(root: &Root, category: VerbCategory, pattern: &Pattern) -> String {
    let mut stem = Stem::substitute(root, &pattern.template);
    transform(&mut stem, root, category, pattern.class());
    stem.to_string()
}

/// Derive the surface word for a root under a pattern.
///
/// Classification, substitution and the rule engine in sequence. The word
/// keeps the template's diacritics; compare through
/// [`normalize`](crate::normalizer::normalize).
pub fn generate(root: &Root, pattern: &Pattern) -> String {
    generate_with_category(root, classify(root), pattern)
}
