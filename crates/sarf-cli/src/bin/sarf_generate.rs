// sarf-generate: Derive words from triliteral roots.
//
// Prints one line per derived word: root, pattern id and word, separated by
// tabs. Words keep the template's diacritics unless --strip is given.
//
// Usage:
//   sarf-generate [-p PATTERNS] [--strip] [--json] [ROOT [PATTERN_ID...]]
//
// Options:
//   -p, --patterns PATH   JSON pattern file
//   --strip               Print words without diacritics
//   --json                Print one JSON object per word
//   -h, --help            Print help

use std::io::{self, Write};

use sarf_morph::normalizer::strip_diacritics;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (patterns_path, args) = sarf_cli::parse_patterns_path(&args);

    if sarf_cli::wants_help(&args) {
        println!("sarf-generate: Derive Arabic words from triliteral roots.");
        println!();
        println!("Usage: sarf-generate [-p PATTERNS] [--strip] [--json] [ROOT [PATTERN_ID...]]");
        println!();
        println!("With ROOT and PATTERN_ID arguments, derives the root under each");
        println!("given pattern. With ROOT alone, derives it under every pattern.");
        println!("Otherwise reads roots from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -p, --patterns PATH   JSON pattern file");
        println!("  --strip               Print words without diacritics");
        println!("  --json                Print one JSON object per word");
        println!("  -h, --help            Print this help");
        return;
    }

    let strip = args.iter().any(|a| a == "--strip");
    let json = sarf_cli::wants_json(&args);
    let positional = sarf_cli::positional(&args);

    let mut m = sarf_cli::load_morphology(patterns_path.as_deref())
        .unwrap_or_else(|e| sarf_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut emit = |root: &str, pattern_id: &str, word: &str| {
        let word = if strip {
            strip_diacritics(word)
        } else {
            word.to_string()
        };
        if json {
            let value = serde_json::json!({ "root": root, "pattern": pattern_id, "word": word });
            let _ = writeln!(out, "{value}");
        } else {
            let _ = writeln!(out, "{root}\t{pattern_id}\t{word}");
        }
    };

    match positional.split_first() {
        Some((root, pattern_ids)) if !pattern_ids.is_empty() => {
            for pattern_id in pattern_ids {
                match m.generate(root, pattern_id) {
                    Ok(word) => emit(root, pattern_id, &word),
                    Err(e) => eprintln!("{root} / {pattern_id}: {e}"),
                }
            }
        }
        Some((root, _)) => match m.generate_all(root) {
            Ok(words) => {
                for (pattern_id, word) in words {
                    emit(root, &pattern_id, &word);
                }
            }
            Err(e) => sarf_cli::fatal(&format!("{root}: {e}")),
        },
        None => {
            for root in sarf_cli::stdin_lines() {
                match m.generate_all(&root) {
                    Ok(words) => {
                        for (pattern_id, word) in words {
                            emit(&root, &pattern_id, &word);
                        }
                    }
                    Err(e) => eprintln!("{root}: {e}"),
                }
            }
        }
    }
}
