// Repairs for roots whose second and third radicals are identical

use sarf_core::character::{SHADDA, SUKUN};

use crate::stem::{Slot, Stem};

/// Realize adjacent identical radicals as a doubled consonant.
///
/// When the template puts the second and third radicals side by side and the
/// third is not closed by sukun, the second loses its vowel and the third
/// takes shadda. Both letters stay written (مَدَدَ → مَددَّ); a vowel lost
/// from the second radical moves back onto an unvowelled first radical
/// (يَمْدَدُ → يَمَددُّ). Templates that separate the pair with a long
/// vowel (مَفْعُول) or close the third radical (اِفْعَلْ) are left as is.
pub(crate) fn assimilate(stem: &mut Stem) {
    let (Some(i), Some(j)) = (stem.radical_index(2), stem.radical_index(3)) else {
        return;
    };
    if j != i + 1 {
        return;
    }
    let (r2, r3) = (&stem.segments()[i], &stem.segments()[j]);
    if r2.letter != r3.letter || r3.has_mark(SUKUN) || r3.has_mark(SHADDA) {
        return;
    }

    let moved = r2.has_vowel().then(|| r2.marks.clone());
    if let Some(marks) = moved {
        let before = i.checked_sub(1).and_then(|k| stem.get_mut(k));
        if let Some(r1) = before.filter(|s| s.slot == Slot::Radical(1) && !s.has_vowel()) {
            r1.marks = marks;
        }
    }
    if let Some(r2) = stem.get_mut(i) {
        r2.marks.clear();
    }
    if let Some(r3) = stem.get_mut(j) {
        r3.add_shadda();
    }
}
