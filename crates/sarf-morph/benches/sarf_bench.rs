// Criterion benchmarks for sarf-morph.
//
// Uses the root table from the golden test data when it is present and a
// small built-in list otherwise.
//
// Run:
//   cargo bench -p sarf-morph

use criterion::{Criterion, criterion_group, criterion_main};
use sarf_morph::Morphology;
use sarf_morph::normalizer::normalize;

// ---------------------------------------------------------------------------
// Input data
// ---------------------------------------------------------------------------

const FALLBACK_ROOTS: [&str; 6] = ["كتب", "قال", "بقي", "أكل", "مدد", "طوى"];

fn load_roots() -> Vec<String> {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/golden/derivations.json");
    let roots: Vec<String> = std::fs::read_to_string(&path)
        .ok()
        .and_then(|s| serde_json::from_str::<serde_json::Value>(&s).ok())
        .and_then(|v| {
            v["derivations"].as_array().map(|cases| {
                cases
                    .iter()
                    .filter_map(|c| c["root"].as_str().map(str::to_string))
                    .collect()
            })
        })
        .unwrap_or_default();
    if roots.is_empty() {
        FALLBACK_ROOTS.iter().map(|r| r.to_string()).collect()
    } else {
        roots
    }
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Classify every root.
fn bench_classify(c: &mut Criterion) {
    let m = Morphology::with_defaults().expect("built-in morphology");
    let roots = load_roots();

    c.bench_function("classify_roots", |b| {
        b.iter(|| {
            for root in &roots {
                std::hint::black_box(m.classify(root).ok());
            }
        });
    });
}

/// Derive every root under all built-in patterns.
fn bench_generate_all(c: &mut Criterion) {
    let m = Morphology::with_defaults().expect("built-in morphology");
    let roots = load_roots();

    c.bench_function("generate_all_patterns", |b| {
        b.iter(|| {
            for root in &roots {
                std::hint::black_box(m.generate_all(root).ok());
            }
        });
    });
}

/// Validate each root's agent noun, which matches on the second pattern.
fn bench_validate(c: &mut Criterion) {
    let m = Morphology::with_defaults().expect("built-in morphology");
    let cases: Vec<(String, String)> = load_roots()
        .into_iter()
        .filter_map(|root| {
            let all = m.generate_all(&root).ok()?;
            let (_, word) = all.into_iter().nth(1)?;
            Some((word, root))
        })
        .collect();

    c.bench_function("validate_agent_nouns", |b| {
        b.iter(|| {
            for (word, root) in &cases {
                std::hint::black_box(m.validate(word, root).ok());
            }
        });
    });
}

/// Normalize a vowelled sentence-length string.
fn bench_normalize(c: &mut Criterion) {
    let text = "قَالَ الكَاتِبُ إِنَّ المَسْؤُولَ قَرَأَ الرِّسَالَةَ ".repeat(8);

    c.bench_function("normalize_vowelled_text", |b| {
        b.iter(|| std::hint::black_box(normalize(&text)));
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_generate_all,
    bench_validate,
    bench_normalize,
);
criterion_main!(benches);
