// stava-cli: shared utilities for CLI tools.
//
// The tools consume a pre-flattened SALDO export rather than the raw
// XML morphology: one JSON object per line with the written form and
// its tags. Parsing the raw lexical resource is outside the library;
// this crate is the "external collaborator" that feeds the classifier.

use std::path::PathBuf;
use std::process;

use serde::Deserialize;
use stava_sv::{LexEntry, Lexicon, StavaHandle};

/// Lexicon file name: one JSON object per line,
/// `{"word": "...", "pos": "nn", "msd": "c"}`.
const LEXICON_FILE: &str = "saldo.jsonl";

/// Optional supplementary place-name list, one name per line.
const PLACE_NAMES_FILE: &str = "ortnamn.txt";

/// One line of the flattened SALDO export.
#[derive(Debug, Deserialize)]
struct RawEntry {
    word: String,
    pos: String,
    #[serde(default)]
    msd: String,
}

/// Search for lexicon files and create a `StavaHandle`.
///
/// Search order:
/// 1. `lex_path` argument (if provided)
/// 2. `STAVA_LEX_PATH` environment variable
/// 3. `~/.stava`
/// 4. Current working directory
pub fn load_handle(lex_path: Option<&str>) -> Result<StavaHandle, String> {
    let search_paths = build_search_paths(lex_path);

    for dir in &search_paths {
        let lexicon_path = dir.join(LEXICON_FILE);
        if lexicon_path.is_file() {
            let mut lexicon = load_lexicon_file(&lexicon_path)?;

            let place_names_path = dir.join(PLACE_NAMES_FILE);
            if place_names_path.is_file() {
                let contents = std::fs::read_to_string(&place_names_path).map_err(|e| {
                    format!("failed to read {}: {}", place_names_path.display(), e)
                })?;
                lexicon.add_place_names(contents.lines().filter(|l| !l.trim().is_empty()));
            }

            return Ok(StavaHandle::new(lexicon));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        LEXICON_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Parse a JSON-lines lexicon file into classified word-form sets.
fn load_lexicon_file(path: &PathBuf) -> Result<Lexicon, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;

    let mut entries = Vec::new();
    for (lineno, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let raw: RawEntry = serde_json::from_str(line).map_err(|e| {
            format!("{}:{}: invalid lexicon entry: {}", path.display(), lineno + 1, e)
        })?;
        entries.push(LexEntry::new(raw.word, &raw.pos, &raw.msd));
    }
    Ok(Lexicon::classify(entries))
}

/// Build the list of directories to search for lexicon files.
fn build_search_paths(lex_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. Explicit path from argument
    if let Some(p) = lex_path {
        paths.push(PathBuf::from(p));
    }

    // 2. STAVA_LEX_PATH environment variable
    if let Ok(env_path) = std::env::var("STAVA_LEX_PATH") {
        paths.push(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".stava"));
    }

    // 4. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--lex-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(lex_path, remaining_args)`.
pub fn parse_lex_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut lex_path = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix("--lex-path=") {
            lex_path = Some(val.to_string());
        } else if arg == "--lex-path" || arg == "-d" {
            if i + 1 < args.len() {
                lex_path = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {} requires a value", arg);
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (lex_path, remaining)
}

/// Whether the args ask for help.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "-h" || a == "--help")
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
