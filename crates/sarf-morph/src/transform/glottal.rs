// Repairs for roots with a glottal stop (hamza) radical

use sarf_core::character::{
    ALEF_MADDA, HAMZA, WAW, WAW_HAMZA, YA_HAMZA, is_alef_form, is_glottal,
};

use crate::stem::Stem;

fn is_alef_or_hamza(c: char) -> bool {
    is_alef_form(c) || c == HAMZA
}

/// Merge the first radical with an adjacent template alef into alef-madda.
///
/// Covers a template alef after the radical (فاعل: أ + ا → آكل) and a
/// template alef-form prefix before an unvowelled radical (أفعل: أ + أْ → آكل).
/// The template letter is removed; the radical slot holds the madda.
pub(crate) fn merge_initial_madda(stem: &mut Stem) {
    let Some(i) = stem.radical_index(1) else {
        return;
    };
    let r1 = &stem.segments()[i];
    let (letter, vowelled) = (r1.letter, r1.has_vowel());
    if !is_alef_or_hamza(letter) || letter == ALEF_MADDA {
        return;
    }

    let next_is_alef = stem
        .get(i + 1)
        .is_some_and(|s| s.is_template() && is_alef_form(s.letter));
    if next_is_alef {
        let absorbed = stem.remove(i + 1);
        if let Some(r1) = stem.get_mut(i) {
            r1.letter = ALEF_MADDA;
            r1.marks = absorbed.marks;
        }
        return;
    }

    let prev_is_alef = i > 0
        && stem
            .get(i - 1)
            .is_some_and(|s| s.is_template() && is_alef_or_hamza(s.letter));
    if prev_is_alef && !vowelled {
        let absorbed = stem.remove(i - 1);
        if let Some(r1) = stem.get_mut(i - 1) {
            r1.letter = ALEF_MADDA;
            r1.marks = absorbed.marks;
        }
    }
}

/// Imperative: the augment absorbs the glottal first radical, which is
/// dropped (اِفْعَلْ with أكل → اِكَلْ).
pub(crate) fn drop_initial(stem: &mut Stem) {
    let Some(i) = stem.radical_index(1) else {
        return;
    };
    if is_alef_or_hamza(stem.segments()[i].letter) {
        stem.remove(i);
    }
}

/// Agent noun: a glottal second radical after the template long vowel sits
/// on ya (سائل).
pub(crate) fn seat_medial_on_ya(stem: &mut Stem) {
    let Some(i) = stem.radical_index(2) else {
        return;
    };
    let after_vowel = i > 0 && stem.get(i - 1).is_some_and(|s| s.is_template_vowel());
    if !after_vowel {
        return;
    }
    if let Some(r2) = stem.get_mut(i).filter(|s| is_glottal(s.letter)) {
        r2.letter = YA_HAMZA;
    }
}

/// Patient noun: a glottal second radical before the template waw sits on
/// waw (مسؤول).
pub(crate) fn seat_medial_on_waw(stem: &mut Stem) {
    let Some(i) = stem.radical_index(2) else {
        return;
    };
    let before_waw = stem
        .get(i + 1)
        .is_some_and(|s| s.is_template() && s.letter == WAW);
    if !before_waw {
        return;
    }
    if let Some(r2) = stem.get_mut(i).filter(|s| is_glottal(s.letter)) {
        r2.letter = WAW_HAMZA;
    }
}

/// Present tense: template long vowels right after a glottal second
/// radical are dropped.
pub(crate) fn drop_vowel_after_medial(stem: &mut Stem) {
    let Some(i) = stem.radical_index(2) else {
        return;
    };
    if !is_glottal(stem.segments()[i].letter) {
        return;
    }
    while stem.get(i + 1).is_some_and(|s| s.is_template_vowel()) {
        stem.remove(i + 1);
    }
}

/// Agent noun: a glottal third radical sits on ya (قارئ).
pub(crate) fn seat_final_on_ya(stem: &mut Stem) {
    if let Some(r3) = stem.radical_mut(3).filter(|s| is_glottal(s.letter)) {
        r3.letter = YA_HAMZA;
    }
}

/// Patient noun: a glottal third radical after the template waw is written
/// on the line (مقروء).
pub(crate) fn final_on_line(stem: &mut Stem) {
    let Some(i) = stem.radical_index(3) else {
        return;
    };
    let after_waw = i > 0
        && stem
            .get(i - 1)
            .is_some_and(|s| s.is_template() && s.letter == WAW);
    if !after_waw {
        return;
    }
    if let Some(r3) = stem.get_mut(i).filter(|s| is_glottal(s.letter)) {
        r3.letter = HAMZA;
    }
}
