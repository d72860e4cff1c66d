// stava-compounds: Segment compound words from stdin.
//
// Reads words from stdin (one per line) and prints the segmentation of
// each word into its lexical parts:
//   C: part+part+part   (segmented, or a dictionary word returned whole)
//   W: word             (not decomposable)
//
// Usage:
//   stava-compounds [-d LEX_PATH]
//
// Options:
//   -d, --lex-path PATH   Directory containing saldo.jsonl (and
//                         optionally ortnamn.txt)
//   -h, --help            Print help

use std::io::{self, BufRead, Write};

use stava_sv::SegmentError;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lex_path, args) = stava_cli::parse_lex_path(&args);

    if stava_cli::wants_help(&args) {
        println!("stava-compounds: Segment compound words from stdin.");
        println!();
        println!("Usage: stava-compounds [-d LEX_PATH]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: part+part+part   (segmented)");
        println!("  W: word             (not decomposable)");
        println!();
        println!("Options:");
        println!("  -d, --lex-path PATH   Directory containing saldo.jsonl");
        println!("  -h, --help            Print this help");
        return;
    }

    let handle = stava_cli::load_handle(lex_path.as_deref())
        .unwrap_or_else(|e| stava_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        match handle.compounds(word) {
            Ok(seg) => {
                let _ = writeln!(out, "C: {seg}");
            }
            Err(SegmentError::NotCompound(normalized)) => {
                let _ = writeln!(out, "W: {normalized}");
            }
            Err(SegmentError::EmptyWord) => {
                // Blank after normalization (e.g. a lone hyphen); skip.
            }
        }
    }
}
