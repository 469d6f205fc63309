// WASM bindings for wordbook dictionary lookup.
//
// Provides a `WasmWordbook` class exported via wasm-bindgen that wraps the
// `WordbookHandle`. Lookup outcomes are serialized to JavaScript values
// using serde-wasm-bindgen; the dictionary itself is passed in as CSV text
// (one word per row), since the browser side owns file access.
//
// Usage from JavaScript:
//
//   const book = new WasmWordbook(csvText);
//   book.spell("apple");          // => true
//   book.suggest("appl");         // => ["apple", "apply", ...]
//   book.autocorrect("coot");     // => "cat" or undefined
//   book.lookup("appl");          // => { kind: "suggestions", suggestions: [...] }
//   book.deleteWord("apple");     // throws if the word is absent
//   book.words();                 // => the full dictionary listing

use serde::Serialize;
use wasm_bindgen::prelude::*;

use wordbook::storage::parse_words;
use wordbook::{Lookup, WordbookError, WordbookHandle};

/// Serializable representation of a lookup outcome.
///
/// `kind` is one of "found", "suggestions", "corrected" or "noMatch";
/// `suggestions` is non-empty only for "suggestions", `corrected` is set
/// only for "corrected".
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsLookup {
    kind: String,
    suggestions: Vec<String>,
    corrected: Option<String>,
}

impl From<Lookup> for JsLookup {
    fn from(outcome: Lookup) -> Self {
        match outcome {
            Lookup::Found => JsLookup {
                kind: "found".to_string(),
                suggestions: Vec::new(),
                corrected: None,
            },
            Lookup::Suggestions(words) => JsLookup {
                kind: "suggestions".to_string(),
                suggestions: words,
                corrected: None,
            },
            Lookup::Corrected(word) => JsLookup {
                kind: "corrected".to_string(),
                suggestions: Vec::new(),
                corrected: Some(word),
            },
            Lookup::NoMatch => JsLookup {
                kind: "noMatch".to_string(),
                suggestions: Vec::new(),
                corrected: None,
            },
        }
    }
}

fn wordbook_error_to_js(e: WordbookError) -> JsError {
    JsError::new(&e.to_string())
}

/// Dictionary lookup engine for WebAssembly.
///
/// Wraps an in-memory dictionary; deletions mutate only the in-memory
/// collection, and the caller can read back `words()` to persist them.
#[wasm_bindgen]
pub struct WasmWordbook {
    handle: WordbookHandle,
}

#[wasm_bindgen]
impl WasmWordbook {
    /// Create a new WasmWordbook from dictionary CSV text (one word per
    /// row; only the first field of each row is used).
    #[wasm_bindgen(constructor)]
    pub fn new(csv_text: &str) -> WasmWordbook {
        WasmWordbook {
            handle: WordbookHandle::from_words(parse_words(csv_text)),
        }
    }

    /// Whether the word is present in the dictionary.
    pub fn spell(&self, word: &str) -> bool {
        self.handle.spell(word)
    }

    /// Dictionary words within the edit-distance threshold, in dictionary
    /// order and without the leading-character filter.
    pub fn suggest(&self, word: &str) -> Vec<String> {
        self.handle.suggest(word)
    }

    /// Run the depth-bounded autocorrect search. Returns `undefined` when
    /// no correction chain resolves.
    pub fn autocorrect(&self, word: &str) -> Option<String> {
        self.handle.autocorrect(word)
    }

    /// Full lookup flow. Returns an object with fields `kind`
    /// ("found", "suggestions", "corrected", "noMatch"), `suggestions`
    /// and `corrected`.
    pub fn lookup(&self, word: &str) -> Result<JsValue, JsError> {
        let outcome: JsLookup = self.handle.lookup(word).into();
        serde_wasm_bindgen::to_value(&outcome).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Delete the first occurrence of a word from the dictionary.
    ///
    /// Throws when the word is not present.
    #[wasm_bindgen(js_name = "deleteWord")]
    pub fn delete_word(&mut self, word: &str) -> Result<(), JsError> {
        self.handle.delete(word).map_err(wordbook_error_to_js)
    }

    /// The full dictionary listing, in order.
    pub fn words(&self) -> Vec<String> {
        self.handle.words().to_vec()
    }

    /// Number of dictionary entries, counting duplicates.
    #[wasm_bindgen(js_name = "wordCount")]
    pub fn word_count(&self) -> usize {
        self.handle.len()
    }

    /// Set the depth budget for the autocorrect search.
    #[wasm_bindgen(js_name = "setMaxDepth")]
    pub fn set_max_depth(&mut self, value: usize) {
        self.handle.set_max_depth(value);
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        WordbookHandle::version().to_string()
    }

    /// Release resources held by this instance.
    ///
    /// In practice WASM memory is managed by the garbage collector, but
    /// this method allows explicit cleanup.
    pub fn terminate(self) {
        // Drop self, releasing all resources.
    }
}
