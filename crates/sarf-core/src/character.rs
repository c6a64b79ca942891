// Arabic character classification and constants

// ---------------------------------------------------------------------------
// Letters
// ---------------------------------------------------------------------------

pub const HAMZA: char = '\u{0621}'; // ء
pub const ALEF_MADDA: char = '\u{0622}'; // آ
pub const ALEF_HAMZA_ABOVE: char = '\u{0623}'; // أ
pub const WAW_HAMZA: char = '\u{0624}'; // ؤ
pub const ALEF_HAMZA_BELOW: char = '\u{0625}'; // إ
pub const YA_HAMZA: char = '\u{0626}'; // ئ
pub const ALEF: char = '\u{0627}'; // ا
pub const TA_MARBUTA: char = '\u{0629}'; // ة
pub const HA: char = '\u{0647}'; // ه
pub const WAW: char = '\u{0648}'; // و
pub const ALEF_MAQSURA: char = '\u{0649}'; // ى
pub const YA: char = '\u{064A}'; // ي
pub const ALEF_WASLA: char = '\u{0671}'; // ٱ

// ---------------------------------------------------------------------------
// Radical placeholders
//
// Templates spell the triliteral placeholder word فعل: each occurrence of
// these letters marks a radical slot.
// ---------------------------------------------------------------------------

/// First-radical marker (fa).
pub const FIRST_RADICAL_MARKER: char = '\u{0641}'; // ف
/// Second-radical marker (ain).
pub const SECOND_RADICAL_MARKER: char = '\u{0639}'; // ع
/// Third-radical marker (lam).
pub const THIRD_RADICAL_MARKER: char = '\u{0644}'; // ل

// ---------------------------------------------------------------------------
// Diacritics (harakat)
// ---------------------------------------------------------------------------

pub const FATHATAN: char = '\u{064B}';
pub const DAMMATAN: char = '\u{064C}';
pub const KASRATAN: char = '\u{064D}';
pub const FATHA: char = '\u{064E}';
pub const DAMMA: char = '\u{064F}';
pub const KASRA: char = '\u{0650}';
pub const SHADDA: char = '\u{0651}';
pub const SUKUN: char = '\u{0652}';
pub const SUPERSCRIPT_ALEF: char = '\u{0670}';

/// Check whether a character is a combining short-vowel, nunation,
/// doubling or vowel-absence mark.
pub fn is_diacritic(c: char) -> bool {
    matches!(c, FATHATAN..=SUKUN | SUPERSCRIPT_ALEF)
}

/// Check whether a character belongs to the basic Arabic letter block
/// (hamza through ya, excluding tatweel and the Persian/Urdu extensions).
pub fn is_arabic_letter(c: char) -> bool {
    matches!(c, '\u{0621}'..='\u{063A}' | '\u{0641}'..='\u{064A}')
}

/// Check whether a character may stand as a root radical.
///
/// Ta-marbuta is a feminine ending and never a radical.
pub fn is_radical_letter(c: char) -> bool {
    is_arabic_letter(c) && c != TA_MARBUTA
}

/// Check whether a character carries a glottal stop (hamza), standalone
/// or seated on alef, waw or ya.
pub fn is_glottal(c: char) -> bool {
    matches!(
        c,
        HAMZA | ALEF_MADDA | ALEF_HAMZA_ABOVE | WAW_HAMZA | ALEF_HAMZA_BELOW | YA_HAMZA
    )
}

/// Check whether a character is one of the alef forms, with or without hamza.
pub fn is_alef_form(c: char) -> bool {
    matches!(
        c,
        ALEF | ALEF_MADDA | ALEF_HAMZA_ABOVE | ALEF_HAMZA_BELOW | ALEF_WASLA
    )
}

/// Check whether a character is a long-vowel letter (alef, waw, ya or
/// alef-maqsura).
pub fn is_long_vowel(c: char) -> bool {
    matches!(c, ALEF | WAW | YA | ALEF_MAQSURA)
}

/// Check whether a character is a weak letter in the given radical position
/// (1-based).
///
/// The first radical is weak only as waw or ya. In the second and third
/// positions alef and alef-maqsura also count: they are the written form of
/// an underlying waw or ya.
pub fn is_weak_at(position: usize, c: char) -> bool {
    match position {
        1 => matches!(c, WAW | YA),
        _ => is_long_vowel(c),
    }
}

/// Check whether a weak letter belongs to the ya family (ya, alef-maqsura).
/// Alef and waw belong to the waw family.
pub fn is_ya_family(c: char) -> bool {
    matches!(c, YA | ALEF_MAQSURA)
}

/// Iterate over the letters of a string, skipping diacritics.
pub fn letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().filter(|&c| !is_diacritic(c))
}
