// sarf-classify: Structural category of triliteral roots.
//
// Prints one line per root: the root, its category id and the traditional
// Arabic label, separated by tabs.
//
// Usage:
//   sarf-classify [-p PATTERNS] [--json] [ROOT...]
//
// Options:
//   -p, --patterns PATH   JSON pattern file
//   --json                Print one JSON object per root
//   -h, --help            Print help

use std::io::{self, Write};

use sarf_morph::Morphology;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (patterns_path, args) = sarf_cli::parse_patterns_path(&args);

    if sarf_cli::wants_help(&args) {
        println!("sarf-classify: Classify Arabic triliteral roots.");
        println!();
        println!("Usage: sarf-classify [-p PATTERNS] [--json] [ROOT...]");
        println!();
        println!("If ROOT arguments are given, classifies each root.");
        println!("Otherwise reads roots from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -p, --patterns PATH   JSON pattern file");
        println!("  --json                Print one JSON object per root");
        println!("  -h, --help            Print this help");
        return;
    }

    let json = sarf_cli::wants_json(&args);
    let roots = sarf_cli::positional(&args);

    let m = sarf_cli::load_morphology(patterns_path.as_deref())
        .unwrap_or_else(|e| sarf_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut classify_root = |root: &str, m: &Morphology| match m.classify(root) {
        Ok(category) if json => {
            let value = serde_json::json!({
                "root": root,
                "category": category,
                "label": category.arabic_name(),
            });
            let _ = writeln!(out, "{value}");
        }
        Ok(category) => {
            let _ = writeln!(out, "{root}\t{category}\t{}", category.arabic_name());
        }
        Err(e) => eprintln!("{root}: {e}"),
    };

    if roots.is_empty() {
        for line in sarf_cli::stdin_lines() {
            classify_root(&line, &m);
        }
    } else {
        for root in &roots {
            classify_root(root, &m);
        }
    }
}
