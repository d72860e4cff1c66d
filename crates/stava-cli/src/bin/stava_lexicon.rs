// stava-lexicon: Inspect the classified word-form sets.
//
// With no input, prints the sizes of the prefix and tail sets. With
// words on stdin, reports the set membership of each word:
//   PT: word   (in both sets)
//   P:  word   (prefix set only)
//   T:  word   (tail set only)
//   -:  word   (in neither set)
//
// Usage:
//   stava-lexicon [-d LEX_PATH] [--stats]
//
// Options:
//   -d, --lex-path PATH   Directory containing saldo.jsonl
//   --stats               Print set sizes and exit without reading stdin
//   -h, --help            Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (lex_path, args) = stava_cli::parse_lex_path(&args);

    if stava_cli::wants_help(&args) {
        println!("stava-lexicon: Inspect the classified word-form sets.");
        println!();
        println!("Usage: stava-lexicon [-d LEX_PATH] [--stats]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  PT: word   (prefix and tail set)");
        println!("  P:  word   (prefix set only)");
        println!("  T:  word   (tail set only)");
        println!("  -:  word   (neither set)");
        println!();
        println!("Options:");
        println!("  -d, --lex-path PATH   Directory containing saldo.jsonl");
        println!("  --stats               Print set sizes and exit");
        println!("  -h, --help            Print this help");
        return;
    }

    let stats_only = args.iter().any(|a| a == "--stats");

    let handle = stava_cli::load_handle(lex_path.as_deref())
        .unwrap_or_else(|e| stava_cli::fatal(&e));
    let lexicon = handle.lexicon();

    if stats_only {
        println!("prefix forms: {}", lexicon.prefix_count());
        println!("tail forms:   {}", lexicon.tail_count());
        return;
    }

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

        let normalized = stava_sv::segmenter::normalize(word);
        let tag = match (lexicon.is_prefix(&normalized), lexicon.is_tail(&normalized)) {
            (true, true) => "PT:",
            (true, false) => "P: ",
            (false, true) => "T: ",
            (false, false) => "-: ",
        };
        let _ = writeln!(out, "{tag} {normalized}");
    }
}
