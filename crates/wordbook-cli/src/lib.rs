// wordbook-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use wordbook::{WordbookError, WordbookHandle};

/// Dictionary file name looked for inside search directories.
const DICT_FILE: &str = "words.csv";

/// Search for a dictionary file and create a WordbookHandle.
///
/// Search order:
/// 1. `dict_path` argument (a file, or a directory containing `words.csv`)
/// 2. `WORDBOOK_DICT_PATH` environment variable (same interpretation)
/// 3. `~/.wordbook/words.csv`
/// 4. `/etc/wordbook/words.csv` and `/usr/share/wordbook/words.csv`
/// 5. `words.csv` in the current working directory
pub fn load_handle(dict_path: Option<&str>) -> Result<WordbookHandle, String> {
    let search_paths = build_search_paths(dict_path);

    for candidate in &search_paths {
        if candidate.is_file() {
            log::debug!("loading dictionary from {}", candidate.display());
            return WordbookHandle::open(candidate)
                .map_err(|e: WordbookError| format!("failed to open dictionary: {e}"));
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        DICT_FILE,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate dictionary files, in search order.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // A path argument or env var may point at the file itself or at a
    // directory holding the standard file name.
    let mut push_file_or_dir = |p: PathBuf| {
        if p.is_dir() {
            paths.push(p.join(DICT_FILE));
        } else {
            paths.push(p);
        }
    };

    // 1. Explicit path from argument
    if let Some(p) = dict_path {
        push_file_or_dir(PathBuf::from(p));
    }

    // 2. WORDBOOK_DICT_PATH environment variable
    if let Ok(env_path) = std::env::var("WORDBOOK_DICT_PATH") {
        push_file_or_dir(PathBuf::from(env_path));
    }

    // 3. Home directory
    if let Some(home) = home_dir() {
        paths.push(home.join(".wordbook").join(DICT_FILE));
    }

    // 4. System paths
    paths.push(PathBuf::from("/etc/wordbook").join(DICT_FILE));
    paths.push(PathBuf::from("/usr/share/wordbook").join(DICT_FILE));

    // 5. Current directory (fallback for local development)
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(DICT_FILE));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut dict_path = None;
    let mut remaining = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if let Some(val) = arg.strip_prefix("--dict-path=") {
            dict_path = Some(val.to_string());
        } else if arg == "--dict-path" || arg == "-d" {
            match args.get(i + 1) {
                Some(val) => {
                    dict_path = Some(val.clone());
                    i += 1;
                }
                None => {
                    eprintln!("error: {arg} requires a value");
                    process::exit(1);
                }
            }
        } else {
            remaining.push(arg.clone());
        }
        i += 1;
    }

    (dict_path, remaining)
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
