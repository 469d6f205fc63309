// Depth-bounded autocorrect search over suggestion chains.

use crate::suggest::suggestions;

/// Default depth budget for the autocorrect search.
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Chase a correction for `word` by re-querying suggestions for each
/// candidate, up to `max_depth` levels deep.
///
/// The traversal is depth-first with first-success semantics: suggestions
/// are explored in dictionary order and the first branch that survives to
/// depth 0 wins. There is no scoring between branches, so the result is
/// the first word reachable through the suggestion ordering, not
/// necessarily the closest correction.
///
/// When the depth budget runs out, the word held at that point is returned
/// as-is, whether or not it is a dictionary entry; the result is never
/// re-validated against the dictionary, and callers that need a validated
/// word must check it themselves. In particular
/// `autocorrect(word, 0, ..)` returns `Some(word)` unchanged.
///
/// Returns `None` when every branch dies out before the budget is spent.
/// Worst-case cost is unbounded in the dictionary size: each level may fan
/// out to the full suggestion set of its word.
pub fn autocorrect(word: &str, max_depth: usize, dictionary: &[String]) -> Option<String> {
    // Explicit worklist instead of recursion; each entry carries its
    // remaining depth budget. Children are pushed in reverse so the first
    // suggestion is expanded first, matching recursive depth-first order.
    let mut worklist: Vec<(String, usize)> = vec![(word.to_string(), max_depth)];

    while let Some((candidate, depth)) = worklist.pop() {
        if depth == 0 {
            return Some(candidate);
        }
        let found = suggestions(&candidate, dictionary);
        for next in found.into_iter().rev() {
            worklist.push((next, depth - 1));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn depth_zero_returns_input_unchanged() {
        let dictionary = dict(&["cat", "cot", "dot"]);
        assert_eq!(autocorrect("cat", 0, &dictionary), Some("cat".to_string()));
    }

    #[test]
    fn depth_zero_does_not_validate_against_dictionary() {
        // The exhaustion base case returns whatever word it holds, even
        // when that word is not a dictionary entry.
        let dictionary = dict(&["cat", "cot", "dot"]);
        assert_eq!(
            autocorrect("zzzzzz", 0, &dictionary),
            Some("zzzzzz".to_string())
        );
    }

    #[test]
    fn two_hop_chain_resolves() {
        // "coot" is within the threshold of "cot" (and "cat", "dot"), so a
        // depth-2 search expands the first suggestion and lands on a
        // dictionary word.
        let dictionary = dict(&["cat", "cot", "dot"]);
        let corrected = autocorrect("coot", 2, &dictionary);
        assert_eq!(corrected, Some("cat".to_string()));
        assert!(dictionary.contains(corrected.as_ref().unwrap()));
    }

    #[test]
    fn first_success_follows_suggestion_order() {
        // Both "bat" and "rat" are within the threshold of "bzt"; the
        // dictionary lists "bat" first, so its branch wins.
        let dictionary = dict(&["bat", "rat"]);
        assert_eq!(autocorrect("bzt", 1, &dictionary), Some("bat".to_string()));
    }

    #[test]
    fn no_suggestions_means_no_result() {
        let dictionary = dict(&["apple", "banana"]);
        assert_eq!(autocorrect("xyz123", 2, &dictionary), None);
    }

    #[test]
    fn empty_dictionary_means_no_result() {
        assert_eq!(autocorrect("word", 2, &[]), None);
    }

    #[test]
    fn empty_word_does_not_panic() {
        let dictionary = dict(&["at", "on"]);
        // "" is within distance 2 of both entries; depth 1 returns the first.
        assert_eq!(autocorrect("", 1, &dictionary), Some("at".to_string()));
    }

    #[test]
    fn deeper_budget_still_terminates() {
        let dictionary = dict(&["aa", "ab", "ba"]);
        // Every entry suggests every other, but the budget bounds the walk.
        let corrected = autocorrect("az", 3, &dictionary);
        assert_eq!(corrected, Some("aa".to_string()));
    }
}
