// WordbookHandle: top-level integration point for dictionary lookup.
//
// Owns the dictionary store and ties the pieces together: membership
// checks, the suggestion scan, the autocorrect chase, and deletion with
// persistence. The lookup flow runs the stages in fixed order: a direct
// hit wins, near matches are filtered by leading character, and only when
// the scan comes up empty does the autocorrect search run.
//
// Design notes:
// - Queries take `&self` and deletion takes `&mut self`, so the borrow
//   checker enforces the single-writer discipline the shared store needs.
//   There is no internal locking; callers that serve concurrent requests
//   must wrap the handle in their own synchronization.
// - When the handle was opened from a file, every deletion rewrites that
//   file in full, keeping the persisted collection in step with memory.

use std::path::PathBuf;

use crate::autocorrect::{self, DEFAULT_MAX_DEPTH};
use crate::storage::{self, StorageError};
use crate::store::DictionaryStore;
use crate::suggest;

/// Error type for handle operations.
#[derive(Debug, thiserror::Error)]
pub enum WordbookError {
    /// The dictionary file could not be loaded or persisted.
    #[error("dictionary storage error: {0}")]
    Storage(#[from] StorageError),

    /// Deletion was requested for a word that is not in the dictionary.
    #[error("word not found in dictionary: {0}")]
    WordNotFound(String),
}

/// Outcome of a full lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The word is in the dictionary.
    Found,
    /// Near matches within the edit-distance threshold, after the
    /// leading-character filter.
    Suggestions(Vec<String>),
    /// The scan found nothing but the autocorrect search produced a word.
    Corrected(String),
    /// Nothing to offer.
    NoMatch,
}

/// Prefer suggestions that share the query's leading character.
///
/// Returns the subset of `found` starting with the query's first character
/// when that subset is non-empty, otherwise the full list unchanged. A
/// query with no first character (the empty string) gets the full list.
fn prefix_filtered(word: &str, found: Vec<String>) -> Vec<String> {
    let Some(first) = word.chars().next() else {
        return found;
    };
    let matching: Vec<String> = found
        .iter()
        .filter(|s| s.starts_with(first))
        .cloned()
        .collect();
    if matching.is_empty() { found } else { matching }
}

/// Top-level handle owning the dictionary store.
///
/// Created either over an in-memory word list ([`WordbookHandle::from_words`])
/// or from a CSV dictionary file ([`WordbookHandle::open`]), which is loaded
/// once and rewritten after every deletion.
pub struct WordbookHandle {
    /// The shared word collection all queries and deletions go through.
    store: DictionaryStore,

    /// Backing file, if the handle was opened from one.
    dict_path: Option<PathBuf>,

    /// Depth budget for the autocorrect search.
    max_depth: usize,
}

impl WordbookHandle {
    /// Create a handle over an in-memory word list, with no persistence.
    pub fn from_words(words: Vec<String>) -> Self {
        Self {
            store: DictionaryStore::from_words(words),
            dict_path: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Open a handle backed by a CSV dictionary file.
    ///
    /// The word list is loaded here, once; deletions rewrite the file.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, WordbookError> {
        let path = path.into();
        let words = storage::load_words(&path)?;
        Ok(Self {
            store: DictionaryStore::from_words(words),
            dict_path: Some(path),
            max_depth: DEFAULT_MAX_DEPTH,
        })
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Whether `word` is spelled correctly, i.e. present in the dictionary.
    pub fn spell(&self, word: &str) -> bool {
        self.store.contains(word)
    }

    /// Dictionary words within the edit-distance threshold of `word`, in
    /// dictionary order, without the leading-character filter.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        suggest::suggestions(word, self.store.words())
    }

    /// Run the autocorrect search for `word` at the configured depth.
    pub fn autocorrect(&self, word: &str) -> Option<String> {
        self.autocorrect_at(word, self.max_depth)
    }

    /// Run the autocorrect search with an explicit depth budget.
    ///
    /// A budget of 0 returns `word` itself; see [`autocorrect::autocorrect`]
    /// for the traversal contract.
    pub fn autocorrect_at(&self, word: &str, max_depth: usize) -> Option<String> {
        autocorrect::autocorrect(word, max_depth, self.store.words())
    }

    /// Look up `word` and report the best available outcome.
    ///
    /// Stages, in order:
    /// 1. Direct dictionary hit -> [`Lookup::Found`].
    /// 2. Suggestion scan; a non-empty result is narrowed by the
    ///    leading-character filter -> [`Lookup::Suggestions`].
    /// 3. Autocorrect chase -> [`Lookup::Corrected`] or [`Lookup::NoMatch`].
    pub fn lookup(&self, word: &str) -> Lookup {
        if self.store.contains(word) {
            return Lookup::Found;
        }
        let found = self.suggest(word);
        if !found.is_empty() {
            return Lookup::Suggestions(prefix_filtered(word, found));
        }
        match self.autocorrect(word) {
            Some(corrected) => Lookup::Corrected(corrected),
            None => Lookup::NoMatch,
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Delete the first occurrence of `word` from the dictionary.
    ///
    /// Fails with [`WordbookError::WordNotFound`] when the word is absent;
    /// the store is left untouched in that case. When the handle is
    /// file-backed, the whole collection is persisted after the removal; a
    /// persist failure surfaces as a storage error (the in-memory removal
    /// has already happened at that point).
    pub fn delete(&mut self, word: &str) -> Result<(), WordbookError> {
        if !self.store.remove(word) {
            return Err(WordbookError::WordNotFound(word.to_string()));
        }
        if let Some(path) = &self.dict_path {
            storage::save_words(path, self.store.words())?;
        }
        Ok(())
    }

    // =========================================================================
    // Accessors and options
    // =========================================================================

    /// The full word list in dictionary order.
    pub fn words(&self) -> &[String] {
        self.store.words()
    }

    /// Number of dictionary entries, counting duplicates.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Set the depth budget for the autocorrect search.
    pub fn set_max_depth(&mut self, value: usize) {
        self.max_depth = value;
    }

    /// Return the crate version (from Cargo.toml).
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
