// Text normalization for comparing generated and candidate words

use sarf_core::character::{
    ALEF, ALEF_HAMZA_ABOVE, ALEF_HAMZA_BELOW, ALEF_MADDA, ALEF_MAQSURA, ALEF_WASLA, HA,
    TA_MARBUTA, WAW, WAW_HAMZA, YA, YA_HAMZA, is_diacritic,
};

/// Remove all combining diacritics, keeping the letters as written.
pub fn strip_diacritics(text: &str) -> String {
    text.chars().filter(|&c| !is_diacritic(c)).collect()
}

/// Fold a single letter to its comparison form.
fn fold(c: char) -> char {
    match c {
        ALEF_HAMZA_ABOVE | ALEF_HAMZA_BELOW | ALEF_MADDA | ALEF_WASLA => ALEF,
        WAW_HAMZA => WAW,
        YA_HAMZA | ALEF_MAQSURA => YA,
        TA_MARBUTA => HA,
        other => other,
    }
}

/// Normalize Arabic text for comparison.
///
/// Diacritics are removed first, then alef variants fold to bare alef,
/// hamza-on-waw to waw, hamza-on-ya and alef-maqsura to ya, and ta-marbuta
/// to ha. Surrounding whitespace is trimmed. Two words are considered the
/// same derivation exactly when their normalized forms are equal.
pub fn normalize(text: &str) -> String {
    strip_diacritics(text).chars().map(fold).collect::<String>().trim().to_string()
}
