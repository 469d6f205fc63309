// CSV-backed dictionary persistence.
//
// The dictionary file is a single-column CSV: one word per row. Rows with
// extra fields keep only the first field; blank rows are skipped.

use std::fs;
use std::io;
use std::path::Path;

/// Error type for dictionary file I/O.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to read dictionary file: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write dictionary file: {0}")]
    Write(#[source] io::Error),
}

/// Parse dictionary file contents into a word list.
///
/// Takes the first comma-separated field of each row and skips blank rows.
/// CRLF line endings are accepted. Row order and duplicate entries are
/// preserved.
pub fn parse_words(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter_map(|line| line.split(',').next())
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load the word list from a dictionary file.
pub fn load_words(path: &Path) -> Result<Vec<String>, StorageError> {
    let contents = fs::read_to_string(path).map_err(StorageError::Read)?;
    Ok(parse_words(&contents))
}

/// Persist the full word list to a dictionary file, one word per row.
///
/// The file is rewritten from scratch on every call; this runs after each
/// deletion so the file always reflects the in-memory collection.
pub fn save_words(path: &Path, words: &[String]) -> Result<(), StorageError> {
    let mut contents = String::with_capacity(words.iter().map(|w| w.len() + 1).sum());
    for word in words {
        contents.push_str(word);
        contents.push('\n');
    }
    fs::write(path, contents).map_err(StorageError::Write)
}
