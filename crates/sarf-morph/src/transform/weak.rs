// Repairs for roots with weak (long-vowel) radicals

use sarf_core::character::{
    ALEF, ALEF_MAQSURA, DAMMA, KASRA, KASRATAN, WAW, YA, YA_HAMZA, is_alef_form, is_ya_family,
};
use sarf_core::enums::PatternClass;

use crate::stem::{Slot, Stem};

/// Which long vowel a weak radical belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Family {
    /// Waw, or alef written for an underlying waw.
    Waw,
    /// Ya or alef-maqsura.
    Ya,
}

impl Family {
    pub(crate) fn of(c: char) -> Self {
        if is_ya_family(c) { Family::Ya } else { Family::Waw }
    }

    fn letter(self) -> char {
        match self {
            Family::Waw => WAW,
            Family::Ya => YA,
        }
    }

    /// The short vowel that precedes this long vowel.
    fn vowel(self) -> char {
        match self {
            Family::Waw => DAMMA,
            Family::Ya => KASRA,
        }
    }
}

/// Remove the imperative augment (leading template alef) once the first
/// remaining consonant carries a vowel.
fn drop_augment(stem: &mut Stem) {
    while stem
        .get(0)
        .is_some_and(|s| s.is_template() && is_alef_form(s.letter))
    {
        stem.remove(0);
    }
}

fn set_radical_vowel(stem: &mut Stem, position: u8, vowel: char) {
    if let Some(seg) = stem.radical_mut(position) {
        seg.set_vowel(vowel);
    }
}

// ---------------------------------------------------------------------------
// Weak first radical
// ---------------------------------------------------------------------------

/// Present tense: an initial waw falls away and the second radical takes
/// kasra (يَوْجَدُ → يَجِدُ). Ya-initial roots keep their radical.
pub(crate) fn initial_present(stem: &mut Stem) {
    let Some(i) = stem.radical_index(1) else {
        return;
    };
    if stem.segments()[i].letter != WAW {
        return;
    }
    stem.remove(i);
    set_radical_vowel(stem, 2, KASRA);
}

/// Imperative: the initial waw and the augment both fall away (جِدْ).
pub(crate) fn initial_imperative(stem: &mut Stem) {
    let Some(i) = stem.radical_index(1) else {
        return;
    };
    if stem.segments()[i].letter != WAW {
        return;
    }
    stem.remove(i);
    drop_augment(stem);
    set_radical_vowel(stem, 2, KASRA);
}

// ---------------------------------------------------------------------------
// Weak second radical (hollow roots)
// ---------------------------------------------------------------------------

/// Hollow roots: realize the weak middle radical for the pattern class.
pub(crate) fn hollow(stem: &mut Stem, family: Family, class: PatternClass) {
    let Some(i) = stem.radical_index(2) else {
        return;
    };
    match class {
        PatternClass::Base => {
            if let Some(r2) = stem.get_mut(i) {
                r2.letter = ALEF;
                r2.marks.clear();
            }
        }
        PatternClass::AgentNoun => {
            let after_vowel = i > 0 && stem.get(i - 1).is_some_and(|s| s.is_template_vowel());
            if let Some(r2) = stem.get_mut(i).filter(|_| after_vowel) {
                r2.letter = YA_HAMZA;
            }
        }
        PatternClass::Present3rdMasc | PatternClass::PresentOther => {
            if let Some(r2) = stem.get_mut(i) {
                r2.letter = family.letter();
                r2.marks.clear();
            }
            set_radical_vowel(stem, 1, family.vowel());
        }
        PatternClass::Imperative => {
            stem.remove(i);
            set_radical_vowel(stem, 1, family.vowel());
            drop_augment(stem);
        }
        PatternClass::PatientNoun => match family {
            Family::Waw => {
                stem.remove(i);
                set_radical_vowel(stem, 1, DAMMA);
            }
            Family::Ya => {
                let before_waw = stem
                    .get(i + 1)
                    .is_some_and(|s| s.is_template() && s.letter == WAW);
                if before_waw {
                    stem.remove(i + 1);
                    if let Some(r2) = stem.get_mut(i) {
                        r2.letter = YA;
                        r2.marks.clear();
                    }
                    set_radical_vowel(stem, 1, KASRA);
                }
            }
        },
        PatternClass::Other => {}
    }
}

// ---------------------------------------------------------------------------
// Weak third radical (defective roots)
// ---------------------------------------------------------------------------

/// Defective roots: realize the weak final radical for the pattern class.
pub(crate) fn defective(stem: &mut Stem, family: Family, class: PatternClass) {
    let Some(i) = stem.radical_index(3) else {
        return;
    };
    match class {
        PatternClass::Base => {
            if let Some(r3) = stem
                .get_mut(i)
                .filter(|s| family == Family::Waw && s.letter == WAW)
            {
                r3.letter = ALEF;
                r3.marks.clear();
            }
        }
        PatternClass::AgentNoun | PatternClass::Imperative => {
            truncate_final(stem, i);
            if class == PatternClass::AgentNoun {
                mark_nunation(stem);
            }
        }
        PatternClass::Present3rdMasc | PatternClass::PresentOther => {
            if let Some(r3) = stem.get_mut(i) {
                r3.letter = family.letter();
                r3.marks.clear();
            }
            set_radical_vowel(stem, 2, family.vowel());
        }
        PatternClass::PatientNoun => match family {
            Family::Waw => {
                let after_waw = i > 0
                    && stem
                        .get(i - 1)
                        .is_some_and(|s| s.is_template() && s.letter == WAW);
                if after_waw {
                    stem.remove(i);
                    if let Some(waw) = stem.get_mut(i - 1) {
                        waw.add_shadda();
                    }
                }
            }
            Family::Ya => {
                if let Some(r3) = stem.get_mut(i).filter(|s| s.letter == ALEF_MAQSURA) {
                    r3.letter = YA;
                }
            }
        },
        PatternClass::Other => {}
    }
}

/// Delete the final weak radical at `i` and a template long vowel right
/// before it.
fn truncate_final(stem: &mut Stem, i: usize) {
    stem.remove(i);
    if i > 0 && stem.get(i - 1).is_some_and(|s| s.is_template_vowel()) {
        stem.remove(i - 1);
    }
}

/// Agent noun of a defective root ends in kasratan on the second radical
/// (بَاقٍ).
fn mark_nunation(stem: &mut Stem) {
    let ends_on_medial = stem
        .segments()
        .last()
        .is_some_and(|s| s.slot == Slot::Radical(2));
    if ends_on_medial {
        set_radical_vowel(stem, 2, KASRATAN);
    }
}

/// Adjacent doubly-weak roots: a template long vowel just before the final
/// radical that repeats the middle radical's letter is dropped, and the
/// final radical takes the doubling (مَطْوُوي → مَطْوِيّ).
pub(crate) fn drop_duplicate_medial_vowel(stem: &mut Stem) {
    let (Some(j), Some(i)) = (stem.radical_index(2), stem.radical_index(3)) else {
        return;
    };
    if i == 0 {
        return;
    }
    let medial = stem.segments()[j].letter;
    let duplicate = stem
        .get(i - 1)
        .is_some_and(|s| s.is_template_vowel() && s.letter == medial);
    if !duplicate {
        return;
    }
    stem.remove(i - 1);
    set_radical_vowel(stem, 2, KASRA);
    if let Some(r3) = stem.radical_mut(3) {
        r3.add_shadda();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sarf_core::root::Root;

    fn stem(root: &str, template: &str) -> Stem {
        Stem::substitute(&Root::parse(root).unwrap(), template)
    }

    #[test]
    fn family_of_letters() {
        assert_eq!(Family::of(YA), Family::Ya);
        assert_eq!(Family::of(ALEF_MAQSURA), Family::Ya);
        assert_eq!(Family::of(WAW), Family::Waw);
        assert_eq!(Family::of(ALEF), Family::Waw);
    }

    #[test]
    fn waw_initial_present_and_imperative() {
        let mut present = stem("وجد", "يَفْعَلُ");
        initial_present(&mut present);
        assert_eq!(present.to_string(), "يَجِدُ");

        let mut imperative = stem("وجد", "اِفْعَلْ");
        initial_imperative(&mut imperative);
        assert_eq!(imperative.to_string(), "جِدْ");
    }

    #[test]
    fn ya_initial_keeps_radical() {
        let mut present = stem("يبس", "يَفْعَلُ");
        initial_present(&mut present);
        assert_eq!(present.letters(), "ييبس");
    }

    #[test]
    fn hollow_forms() {
        let cases = [
            ("فَعَلَ", PatternClass::Base, "قال"),
            ("فَاعِل", PatternClass::AgentNoun, "قائل"),
            ("يَفْعَلُ", PatternClass::Present3rdMasc, "يقول"),
            ("اِفْعَلْ", PatternClass::Imperative, "قل"),
            ("مَفْعُول", PatternClass::PatientNoun, "مقول"),
        ];
        for (template, class, expected) in cases {
            let mut s = stem("قول", template);
            hollow(&mut s, Family::Waw, class);
            assert_eq!(s.letters(), expected, "{template}");
        }
    }

    #[test]
    fn hollow_ya_forms() {
        let cases = [
            ("فَعَلَ", PatternClass::Base, "باع"),
            ("فَاعِل", PatternClass::AgentNoun, "بائع"),
            ("يَفْعَلُ", PatternClass::Present3rdMasc, "يبيع"),
            ("اِفْعَلْ", PatternClass::Imperative, "بع"),
            ("مَفْعُول", PatternClass::PatientNoun, "مبيع"),
        ];
        for (template, class, expected) in cases {
            let mut s = stem("بيع", template);
            hollow(&mut s, Family::Ya, class);
            assert_eq!(s.letters(), expected, "{template}");
        }
    }

    #[test]
    fn hollow_present_vowels() {
        let mut s = stem("قال", "يَفْعَلُ");
        hollow(&mut s, Family::Waw, PatternClass::Present3rdMasc);
        assert_eq!(s.to_string(), "يَقُولُ");
    }

    #[test]
    fn defective_forms() {
        let cases = [
            ("بقي", Family::Ya, "فَاعِل", PatternClass::AgentNoun, "باق"),
            ("بقي", Family::Ya, "اِفْعَلْ", PatternClass::Imperative, "ابق"),
            ("بقي", Family::Ya, "يَفْعَلُ", PatternClass::Present3rdMasc, "يبقي"),
            ("دعا", Family::Waw, "يَفْعَلُ", PatternClass::Present3rdMasc, "يدعو"),
            ("دعا", Family::Waw, "فَاعِل", PatternClass::AgentNoun, "داع"),
            ("دعا", Family::Waw, "مَفْعُول", PatternClass::PatientNoun, "مدعو"),
            ("دعو", Family::Waw, "فَعَلَ", PatternClass::Base, "دعا"),
            ("رمى", Family::Ya, "مَفْعُول", PatternClass::PatientNoun, "مرموي"),
        ];
        for (root, family, template, class, expected) in cases {
            let mut s = stem(root, template);
            defective(&mut s, family, class);
            assert_eq!(s.letters(), expected, "{root} {template}");
        }
    }

    #[test]
    fn defective_agent_has_nunation() {
        let mut s = stem("بقي", "فَاعِل");
        defective(&mut s, Family::Ya, PatternClass::AgentNoun);
        assert_eq!(s.to_string(), "بَاقٍ");
    }

    #[test]
    fn waw_patient_doubles_template_waw() {
        let mut s = stem("دعا", "مَفْعُول");
        defective(&mut s, Family::Waw, PatternClass::PatientNoun);
        assert_eq!(s.to_string(), "مَدْعُوّ");
    }

    #[test]
    fn truncation_takes_template_vowel() {
        let mut s = stem("بقي", "فَعِيل");
        defective(&mut s, Family::Ya, PatternClass::AgentNoun);
        assert_eq!(s.letters(), "بق");
    }

    #[test]
    fn duplicate_medial_vowel() {
        let mut s = stem("طوى", "مَفْعُول");
        defective(&mut s, Family::Ya, PatternClass::PatientNoun);
        drop_duplicate_medial_vowel(&mut s);
        assert_eq!(s.letters(), "مطوي");
        drop_duplicate_medial_vowel(&mut s);
        assert_eq!(s.letters(), "مطوي");
    }
}
