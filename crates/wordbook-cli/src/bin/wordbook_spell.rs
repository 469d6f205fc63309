// wordbook-spell: Check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word
// is present in the dictionary:
//   C: word    (correct)
//   W: word    (wrong / not in dictionary)
//
// Usage:
//   wordbook-spell [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Dictionary file (or directory with words.csv)
//   -s, --suggest           Also print suggestions for unknown words
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = wordbook_cli::parse_dict_path(&args);

    if wordbook_cli::wants_help(&args) {
        println!("wordbook-spell: Check spelling of words from stdin.");
        println!();
        println!("Usage: wordbook-spell [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (not in dictionary)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file (or directory with words.csv)");
        println!("  -s, --suggest           Also print suggestions for unknown words");
        println!("  -h, --help              Print this help");
        return;
    }

    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");

    let handle = wordbook_cli::load_handle(dict_path.as_deref())
        .unwrap_or_else(|e| wordbook_cli::fatal(&e));
    log::debug!("dictionary loaded with {} entries", handle.len());

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

        if handle.spell(word) {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_suggestions {
                for suggestion in handle.suggest(word) {
                    let _ = writeln!(out, "S: {suggestion}");
                }
            }
        }
    }
}
