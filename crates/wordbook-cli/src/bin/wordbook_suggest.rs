// wordbook-suggest: Generate spelling suggestions for words.
//
// Reads words from argv or stdin (one per line) and prints suggestions
// for words that are not in the dictionary. Known words are printed
// as-is.
//
// Usage:
//   wordbook-suggest [-d DICT_PATH] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH      Dictionary file (or directory with words.csv)
//   -n, --max-suggestions N   Print at most N suggestions (0 = all, default)
//   -h, --help                Print help

use std::io::{self, BufRead, Write};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = wordbook_cli::parse_dict_path(&args);

    if wordbook_cli::wants_help(&args) {
        println!("wordbook-suggest: Generate spelling suggestions.");
        println!();
        println!("Usage: wordbook-suggest [-d DICT_PATH] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH      Dictionary file (or directory with words.csv)");
        println!("  -n, --max-suggestions N   Print at most N suggestions (0 = all, default)");
        println!("  -h, --help                Print this help");
        return;
    }

    let mut max_suggestions: usize = 0;
    let mut words: Vec<String> = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "-n" || arg == "--max-suggestions" {
            if i + 1 < args.len() {
                max_suggestions = args[i + 1]
                    .parse()
                    .unwrap_or_else(|_| wordbook_cli::fatal("invalid number for --max-suggestions"));
                skip_next = true;
            } else {
                wordbook_cli::fatal("--max-suggestions requires a value");
            }
        } else if !arg.starts_with('-') {
            words.push(arg.clone());
        }
    }

    let handle = wordbook_cli::load_handle(dict_path.as_deref())
        .unwrap_or_else(|e| wordbook_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let suggest_word = |word: &str,
                        handle: &wordbook::WordbookHandle,
                        out: &mut io::BufWriter<io::StdoutLock<'_>>| {
        if handle.spell(word) {
            let _ = writeln!(out, "{word} (correct)");
        } else {
            let mut suggestions = handle.suggest(word);
            if max_suggestions > 0 {
                suggestions.truncate(max_suggestions);
            }
            if suggestions.is_empty() {
                let _ = writeln!(out, "{word}: (no suggestions)");
            } else {
                let _ = writeln!(out, "{word}:");
                for s in &suggestions {
                    let _ = writeln!(out, "  {s}");
                }
            }
        }
    };

    if words.is_empty() {
        // Read from stdin
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
            suggest_word(word, &handle, &mut out);
        }
    } else {
        for word in &words {
            suggest_word(word, &handle, &mut out);
        }
    }
}
