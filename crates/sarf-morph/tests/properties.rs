//! Property-based tests for the derivation pipeline.
//!
//! 1. **Classification**: total and deterministic over every letter triple
//! 2. **Rule idempotence**: rewriting a rewritten stem changes nothing
//! 3. **Normalization idempotence**: normalize(normalize(x)) = normalize(x)
//! 4. **Round trip**: a generated word validates against its own root

use proptest::prelude::*;
use sarf_core::enums::VerbCategory;
use sarf_core::pattern::Pattern;
use sarf_core::root::Root;
use sarf_morph::normalizer::normalize;
use sarf_morph::stem::Stem;
use sarf_morph::transform::{generate, transform};
use sarf_morph::{classify, validate};

const TEMPLATES: [&str; 11] = [
    "فَعَلَ",
    "فَاعِل",
    "مَفْعُول",
    "يَفْعَلُ",
    "تَفْعَلُ",
    "اِفْعَلْ",
    "أَفْعَلُ",
    "نَفْعَلُ",
    "فَعَّلَ",
    "مَفْعَل",
    "اِسْتَفْعَلَ",
];

const DEFAULT_TEMPLATES: [(&str, &str); 6] = [
    ("فعل", "فَعَلَ"),
    ("فاعل", "فَاعِل"),
    ("مفعول", "مَفْعُول"),
    ("يفعل", "يَفْعَلُ"),
    ("تفعل", "تَفْعَلُ"),
    ("أمر", "اِفْعَلْ"),
];

fn radical_letters() -> Vec<char> {
    ('\u{0621}'..='\u{063A}')
        .chain('\u{0641}'..='\u{064A}')
        .filter(|&c| c != 'ة')
        .collect()
}

// Roots weighted towards weak and glottal letters so every category shows up.
fn arb_root() -> impl Strategy<Value = Root> {
    let special = prop::sample::select(vec!['ا', 'و', 'ي', 'ى', 'ء', 'أ', 'إ', 'آ', 'ؤ', 'ئ']);
    let any_letter = prop::sample::select(radical_letters());
    let letter = prop_oneof![1 => special, 2 => any_letter];
    (letter.clone(), letter.clone(), letter).prop_map(|(a, b, c)| {
        let text: String = [a, b, c].iter().collect();
        Root::parse(&text).unwrap()
    })
}

fn arb_template() -> impl Strategy<Value = &'static str> {
    prop::sample::select(TEMPLATES.to_vec())
}

fn arb_text() -> impl Strategy<Value = String> {
    let arabic = prop::char::range('\u{0600}', '\u{06FF}');
    let ch = prop_oneof![3 => arabic, 1 => any::<char>()];
    prop::collection::vec(ch, 0..24).prop_map(|chars| chars.into_iter().collect())
}

fn default_patterns() -> Vec<Pattern> {
    DEFAULT_TEMPLATES
        .iter()
        .map(|&(id, template)| Pattern::new(id, template, "").unwrap())
        .collect()
}

// ============================================================================
// Classification
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn classify_is_total(root in arb_root()) {
        let category = classify(&root);
        prop_assert!(VerbCategory::ALL.contains(&category));
    }

    #[test]
    fn classify_is_deterministic(root in arb_root()) {
        let first = classify(&root);
        for _ in 0..3 {
            prop_assert_eq!(classify(&root), first);
        }
        let reparsed = Root::parse(&root.to_string()).unwrap();
        prop_assert_eq!(classify(&reparsed), first);
    }

    #[test]
    fn doubled_wins_when_last_two_match(root in arb_root()) {
        if root.second() == root.third() {
            prop_assert_eq!(classify(&root), VerbCategory::Doubled);
        }
    }
}

// ============================================================================
// Rule engine
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn transform_is_idempotent(root in arb_root(), template in arb_template()) {
        let category = classify(&root);
        let class = sarf_core::pattern::infer_class(template);
        let mut stem = Stem::substitute(&root, template);
        transform(&mut stem, &root, category, class);
        let once = stem.clone();
        transform(&mut stem, &root, category, class);
        prop_assert_eq!(stem, once, "{} under {}", root, template);
    }

    #[test]
    fn regular_roots_are_substituted_verbatim(root in arb_root(), template in arb_template()) {
        if classify(&root) == VerbCategory::Regular {
            let pattern = Pattern::new("p", template, "").unwrap();
            prop_assert_eq!(generate(&root, &pattern), sarf_morph::substitute(&root, template));
        }
    }
}

// ============================================================================
// Normalization
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn normalize_is_idempotent(text in arb_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_removes_marks(text in arb_text()) {
        let normalized = normalize(&text);
        prop_assert!(!normalized.chars().any(sarf_core::character::is_diacritic));
    }
}

// ============================================================================
// Round trip
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn generated_word_validates(root in arb_root(), index in 0usize..DEFAULT_TEMPLATES.len()) {
        let patterns = default_patterns();
        let pattern = &patterns[index];
        let word = generate(&root, pattern);

        let result = validate(&word, &root, &patterns);
        prop_assert!(result.is_valid(), "{} under {}: {}", root, pattern.id, word);

        // Distinct patterns may fold to the same word; the match must at
        // least regenerate the same normalized form.
        let matched_id = result.matched_pattern.unwrap();
        let matched = patterns.iter().find(|p| p.id == matched_id).unwrap();
        prop_assert_eq!(normalize(&generate(&root, matched)), normalize(&word));
        prop_assert!(patterns.iter().position(|p| p.id == matched_id).unwrap() <= index);
    }
}
