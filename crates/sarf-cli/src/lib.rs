// sarf-cli: shared utilities for CLI tools.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::process;

use sarf_core::pattern::Pattern;
use sarf_morph::handle::DEFAULT_ROOTS;
use sarf_morph::{Morphology, MorphologyError};

/// Pattern file name looked up in the home and working directories.
const PATTERNS_FILE: &str = "patterns.json";

/// Environment variable naming a pattern file.
const PATTERNS_ENV: &str = "SARF_PATTERNS";

/// Create a Morphology handle, loading patterns from the first file found.
///
/// Search order:
/// 1. `patterns_path` argument (if provided; must exist)
/// 2. `SARF_PATTERNS` environment variable
/// 3. `~/.sarf/patterns.json`
/// 4. `./patterns.json`
///
/// Without a pattern file the built-in patterns are used. The starter roots
/// are indexed either way.
pub fn load_morphology(patterns_path: Option<&str>) -> Result<Morphology, String> {
    if let Some(p) = patterns_path {
        if !Path::new(p).is_file() {
            return Err(format!("pattern file not found: {p}"));
        }
    }

    let Some(path) = build_search_paths(patterns_path)
        .into_iter()
        .find(|p| p.is_file())
    else {
        return Morphology::with_defaults().map_err(|e| format!("built-in morphology: {e}"));
    };

    let patterns = load_patterns_file(&path)?;
    build_morphology(patterns).map_err(|e| format!("{}: {e}", path.display()))
}

/// Read a JSON array of pattern records.
pub fn load_patterns_file(path: &Path) -> Result<Vec<Pattern>, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("failed to parse {}: {}", path.display(), e))
}

fn build_morphology(patterns: Vec<Pattern>) -> Result<Morphology, MorphologyError> {
    let mut m = Morphology::new();
    for root in DEFAULT_ROOTS {
        m.add_root(root)?;
    }
    for pattern in patterns {
        m.add_pattern(pattern)?;
    }
    Ok(m)
}

/// Build the list of files to try as the pattern file.
fn build_search_paths(patterns_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = patterns_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(PATTERNS_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".sarf").join(PATTERNS_FILE));
    }

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(PATTERNS_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--patterns=PATH`, `--patterns PATH` or `-p PATH` argument.
///
/// Returns `(patterns_path, remaining_args)`.
pub fn parse_patterns_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut patterns_path = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--patterns=") {
            patterns_path = Some(val.to_string());
        } else if arg == "--patterns" || arg == "-p" {
            match iter.next() {
                Some(val) => patterns_path = Some(val.clone()),
                None => fatal(&format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (patterns_path, remaining)
}

/// Positional arguments: everything that is not an option.
pub fn positional(args: &[String]) -> Vec<String> {
    args.iter().filter(|a| !a.starts_with('-')).cloned().collect()
}

/// Non-empty trimmed lines from stdin. A read error ends the input.
pub fn stdin_lines() -> impl Iterator<Item = String> {
    io::stdin()
        .lock()
        .lines()
        .map_while(|line| match line {
            Ok(l) => Some(l),
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                None
            }
        })
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check if `--json` is in the args.
pub fn wants_json(args: &[String]) -> bool {
    args.iter().any(|a| a == "--json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sarf-cli-{}-{name}", process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn parses_patterns_path_forms() {
        let (p, rest) = parse_patterns_path(&args(&["--patterns=a.json", "كتب"]));
        assert_eq!(p.as_deref(), Some("a.json"));
        assert_eq!(rest, args(&["كتب"]));

        let (p, rest) = parse_patterns_path(&args(&["-p", "b.json", "--json"]));
        assert_eq!(p.as_deref(), Some("b.json"));
        assert_eq!(rest, args(&["--json"]));

        let (p, rest) = parse_patterns_path(&args(&["كتب"]));
        assert_eq!(p, None);
        assert_eq!(rest, args(&["كتب"]));
    }

    #[test]
    fn explicit_path_searched_first() {
        let paths = build_search_paths(Some("/tmp/mine.json"));
        assert_eq!(paths[0], PathBuf::from("/tmp/mine.json"));
        assert!(paths.last().unwrap().ends_with(PATTERNS_FILE));
    }

    #[test]
    fn flags_and_positionals() {
        let a = args(&["كتب", "--json", "-h", "فاعل"]);
        assert!(wants_help(&a));
        assert!(wants_json(&a));
        assert_eq!(positional(&a), args(&["كتب", "فاعل"]));
    }

    #[test]
    fn loads_pattern_file() {
        let path = temp_file(
            "ok.json",
            r#"[{"id":"فاعل","template":"فَاعِل","description":"Agent"},
                {"id":"فعيل","template":"فَعِيل","class":"agent-noun"}]"#,
        );
        let m = load_morphology(path.to_str()).unwrap();
        let ids: Vec<&str> = m.patterns().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["فاعل", "فعيل"]);
        assert!(m.root("كتب").is_ok());
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn rejects_bad_pattern_files() {
        let malformed = temp_file("bad.json", "{ not json");
        assert!(load_morphology(malformed.to_str()).unwrap_err().contains("failed to parse"));
        std::fs::remove_file(malformed).unwrap();

        let invalid = temp_file("invalid.json", r#"[{"id":"x","template":"مكتب"}]"#);
        assert!(load_morphology(invalid.to_str()).unwrap_err().contains("radical slot"));
        std::fs::remove_file(invalid).unwrap();
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let err = load_morphology(Some("/nonexistent/sarf/patterns.json")).unwrap_err();
        assert!(err.contains("not found"));
    }
}
