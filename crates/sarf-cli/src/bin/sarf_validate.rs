// sarf-validate: Check whether words derive from a given root.
//
// Reads "WORD ROOT" pairs and reports, for each, whether regenerating the
// root under the known patterns reproduces the word:
//   V: word root pattern_id    (valid, matched pattern)
//   X: word root               (no pattern matches)
//
// Usage:
//   sarf-validate [-p PATTERNS] [--json] [WORD ROOT]
//
// Options:
//   -p, --patterns PATH   JSON pattern file
//   --json                Print one JSON object per pair
//   -h, --help            Print help

use std::io::{self, Write};

use sarf_morph::Morphology;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (patterns_path, args) = sarf_cli::parse_patterns_path(&args);

    if sarf_cli::wants_help(&args) {
        println!("sarf-validate: Check Arabic words against a root.");
        println!();
        println!("Usage: sarf-validate [-p PATTERNS] [--json] [WORD ROOT]");
        println!();
        println!("If WORD and ROOT are given, validates that pair. Otherwise");
        println!("reads \"WORD ROOT\" pairs from stdin (one per line). Prints:");
        println!("  V: word root pattern_id    (derivation found)");
        println!("  X: word root               (no pattern matches)");
        println!();
        println!("Options:");
        println!("  -p, --patterns PATH   JSON pattern file");
        println!("  --json                Print one JSON object per pair");
        println!("  -h, --help            Print this help");
        return;
    }

    let json = sarf_cli::wants_json(&args);
    let positional = sarf_cli::positional(&args);

    let m = sarf_cli::load_morphology(patterns_path.as_deref())
        .unwrap_or_else(|e| sarf_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut check = |word: &str, root: &str, m: &Morphology| {
        let result = match m.validate(word, root) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("{word} {root}: {e}");
                return;
            }
        };
        if json {
            let value = serde_json::json!({
                "word": word,
                "root": root,
                "valid": result.is_valid(),
                "matched_pattern": result.matched_pattern,
            });
            let _ = writeln!(out, "{value}");
        } else {
            match &result.matched_pattern {
                Some(id) => {
                    let _ = writeln!(out, "V: {word} {root} {id}");
                }
                None => {
                    let _ = writeln!(out, "X: {word} {root}");
                }
            }
        }
    };

    match positional.as_slice() {
        [] => {
            for line in sarf_cli::stdin_lines() {
                let mut parts = line.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(word), Some(root), None) => check(word, root, &m),
                    _ => eprintln!("expected \"WORD ROOT\": {line}"),
                }
            }
        }
        [word, root] => check(word, root, &m),
        _ => sarf_cli::fatal("expected WORD ROOT arguments"),
    }
}
