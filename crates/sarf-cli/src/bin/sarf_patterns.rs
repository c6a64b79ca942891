// sarf-patterns: List the patterns a tool run would use.
//
// Prints one line per pattern in validation order: id, template, class and
// description, separated by tabs. Useful for checking which pattern file
// the search path picked up.
//
// Usage:
//   sarf-patterns [-p PATTERNS] [--json]
//
// Options:
//   -p, --patterns PATH   JSON pattern file
//   --json                Print the pattern list as a JSON array
//   -h, --help            Print help

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (patterns_path, args) = sarf_cli::parse_patterns_path(&args);

    if sarf_cli::wants_help(&args) {
        println!("sarf-patterns: List derivation patterns.");
        println!();
        println!("Usage: sarf-patterns [-p PATTERNS] [--json]");
        println!();
        println!("Options:");
        println!("  -p, --patterns PATH   JSON pattern file");
        println!("  --json                Print the pattern list as a JSON array");
        println!("  -h, --help            Print this help");
        return;
    }

    let m = sarf_cli::load_morphology(patterns_path.as_deref())
        .unwrap_or_else(|e| sarf_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if sarf_cli::wants_json(&args) {
        match serde_json::to_string_pretty(m.patterns()) {
            Ok(text) => {
                let _ = writeln!(out, "{text}");
            }
            Err(e) => sarf_cli::fatal(&format!("failed to serialize patterns: {e}")),
        }
        return;
    }

    for p in m.patterns() {
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}",
            p.id,
            p.template,
            p.class(),
            p.description
        );
    }
}
