// wordbook-dict: Inspect and edit the dictionary file.
//
// With no operation, prints every dictionary entry in order (one per
// line). Deletion removes the first occurrence of a word and rewrites the
// dictionary file.
//
// Usage:
//   wordbook-dict [-d DICT_PATH] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Dictionary file (or directory with words.csv)
//   --delete WORD           Delete the first occurrence of WORD and persist
//   --count                 Print the number of entries instead of the list
//   -h, --help              Print help

use std::io::{self, Write};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, args) = wordbook_cli::parse_dict_path(&args);

    if wordbook_cli::wants_help(&args) {
        println!("wordbook-dict: Inspect and edit the dictionary file.");
        println!();
        println!("Usage: wordbook-dict [-d DICT_PATH] [OPTIONS]");
        println!();
        println!("With no operation, prints every entry in dictionary order.");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Dictionary file (or directory with words.csv)");
        println!("  --delete WORD           Delete the first occurrence of WORD and persist");
        println!("  --count                 Print the number of entries instead of the list");
        println!("  -h, --help              Print this help");
        return;
    }

    let mut delete_word: Option<String> = None;
    let mut count_only = false;
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--delete" {
            if i + 1 < args.len() {
                delete_word = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                wordbook_cli::fatal("--delete requires a value");
            }
        } else if arg == "--count" {
            count_only = true;
        }
    }

    let mut handle = wordbook_cli::load_handle(dict_path.as_deref())
        .unwrap_or_else(|e| wordbook_cli::fatal(&e));

    if let Some(word) = delete_word {
        match handle.delete(&word) {
            Ok(()) => {
                log::debug!("deleted {word:?}, {} entries remain", handle.len());
                println!("deleted: {word}");
            }
            Err(e) => wordbook_cli::fatal(&e.to_string()),
        }
        return;
    }

    if count_only {
        println!("{}", handle.len());
        return;
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for word in handle.words() {
        let _ = writeln!(out, "{word}");
    }
}
