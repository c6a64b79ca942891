// Root classification into structural categories

use sarf_core::character::{ALEF, is_glottal, is_weak_at, is_ya_family};
use sarf_core::enums::VerbCategory;
use sarf_core::root::Root;

/// Whether the first radical carries a glottal stop.
///
/// A bare alef can only open a root as a hamza whose seat was typed
/// without the mark, so it counts as glottal here.
fn is_glottal_initial(c: char) -> bool {
    is_glottal(c) || c == ALEF
}

/// Assign a root to its structural category.
///
/// Rules are checked in priority order and the first match wins:
///
/// 1. identical second and third radicals: doubled
/// 2. glottal first, second, then third radical
/// 3. weak first and third radicals: doubly weak, separated
/// 4. weak second and third radicals: doubly weak, adjacent
/// 5. weak first, second, then third radical
/// 6. anything else: regular
///
/// Doubling and glottal stops are checked before weakness so that a root
/// with a hamza and an incidental long-vowel letter is not read as weak.
pub fn classify(root: &Root) -> VerbCategory {
    let [r1, r2, r3] = root.letters();

    if r2 == r3 {
        return VerbCategory::Doubled;
    }
    if is_glottal_initial(r1) {
        return VerbCategory::GlottalInitial;
    }
    if is_glottal(r2) {
        return VerbCategory::GlottalMedial;
    }
    if is_glottal(r3) {
        return VerbCategory::GlottalFinal;
    }

    let weak1 = is_weak_at(1, r1);
    let weak2 = is_weak_at(2, r2);
    let weak3 = is_weak_at(3, r3);

    match (weak1, weak2, weak3) {
        (true, _, true) => VerbCategory::DoublyWeakSeparated,
        (_, true, true) => VerbCategory::DoublyWeakAdjacent,
        (true, _, _) => VerbCategory::WeakInitial,
        (_, true, _) if is_ya_family(r2) => VerbCategory::WeakMedialYa,
        (_, true, _) => VerbCategory::WeakMedialWaw,
        (_, _, true) if is_ya_family(r3) => VerbCategory::WeakFinalYa,
        (_, _, true) => VerbCategory::WeakFinalWaw,
        _ => VerbCategory::Regular,
    }
}
