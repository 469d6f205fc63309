// wordbook-correct: Chase corrections through suggestion chains.
//
// Reads words from argv or stdin (one per line) and runs the depth-bounded
// autocorrect search for each word that is not in the dictionary. Prints
// one line per word:
//   word -> correction
//   word -> (no result)
//
// Usage:
//   wordbook-correct [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH   Dictionary file (or directory with words.csv)
//   --depth N               Search depth budget (default: 2)
//   -h, --help              Print help

use std::io::{self, BufRead, Write};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = wordbook_cli::parse_dict_path(&args);

    if wordbook_cli::wants_help(&args) {
        println!("wordbook-correct: Chase corrections through suggestion chains.");
        println!();
        println!("Usage: wordbook-correct [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, corrects each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file (or directory with words.csv)");
        println!("  --depth N               Search depth budget (default: 2)");
        println!("  -h, --help              Print this help");
        return;
    }

    let mut depth: usize = wordbook::DEFAULT_MAX_DEPTH;
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--depth" {
            if i + 1 < args.len() {
                depth = args[i + 1]
                    .parse()
                    .unwrap_or_else(|_| wordbook_cli::fatal("invalid number for --depth"));
                skip_next = true;
            } else {
                wordbook_cli::fatal("--depth requires a value");
            }
        } else if !arg.starts_with('-') {
            words.push(arg.clone());
        }
    }

    let handle = wordbook_cli::load_handle(dict_path.as_deref())
        .unwrap_or_else(|e| wordbook_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let correct_word = |word: &str,
                        handle: &wordbook::WordbookHandle,
                        out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        if handle.spell(word) {
            let _ = writeln!(out, "{word} (correct)");
            return;
        }
        match handle.autocorrect_at(word, depth) {
            Some(corrected) => {
                let _ = writeln!(out, "{word} -> {corrected}");
            }
            None => {
                let _ = writeln!(out, "{word} -> (no result)");
            }
        }
    };

    if words.is_empty() {
        let stdin = io::stdin();
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
            correct_word(word, &handle, &mut out);
        }
    } else {
        for word in &words {
            correct_word(word, &handle, &mut out);
        }
    }
}
