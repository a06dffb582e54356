//! Backtracking decrypter for monoalphabetic substitution ciphers

use crate::prelude::*;
use crate::tokenizer::Tokenizer;
use crate::translator::{Translator, UNKNOWN};
use crate::wordlist::WordList;

/// Does this translation still carry any unknown letter?
fn is_fully_translated(translation: &str) -> bool {
    !translation.contains(UNKNOWN)
}

/// Enumerates every full decoding of a ciphertext against a word list.
///
/// The search threads one shared [`Translator`] through every recursion
/// frame; each frame undoes exactly what it pushed (or inherited) on every
/// exit path, so a finished [`crack`] always leaves the mapping as it
/// found it. A single instance must not be shared across concurrent
/// searches.
///
/// [`crack`]: Decrypter::crack
#[derive(Debug, Default)]
pub struct Decrypter {
    dictionary: WordList,
    translator: Translator,
    tokenizer: Tokenizer,
    words_used: Vec<String>,
}

impl Decrypter {
    /// Decrypter with an empty dictionary and the default separator set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the word list from the named file. On failure the dictionary
    /// is left empty and later [`crack`](Decrypter::crack) calls find
    /// nothing.
    pub fn load(&mut self, name: &str) -> Result<()> {
        self.dictionary.load(name)
    }

    /// Load the word list from a buffered source.
    pub fn load_words(&mut self, reader: impl BufRead) -> Result<()> {
        self.dictionary.load_from(reader)
    }

    /// Every fully-decoded plaintext of `ciphertext`, alphabetically
    /// sorted. Duplicates are kept when distinct mapping paths reach the
    /// same plaintext. A ciphertext with no tokens yields nothing.
    pub fn crack(&mut self, ciphertext: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(ciphertext);
        if tokens.is_empty() {
            return Vec::new();
        }
        self.crack_frame(ciphertext, &tokens)
    }

    // One recursion frame: choose a pivot word, try every dictionary
    // candidate for it, and hand the extended mapping to a child frame
    // while unknowns remain. The frame's exit contract: undo whatever
    // mapping was current when it was entered, exactly once.
    fn crack_frame(&mut self, ciphertext: &str, tokens: &[String]) -> Vec<String> {
        let pivot = match self.select_pivot(tokens) {
            Some(pivot) => pivot,
            None => {
                // every unused token is already fully resolved
                self.translator.pop_mapping();
                return Vec::new();
            }
        };
        self.words_used.push(pivot.clone());

        let partial = self.translator.translation(&pivot);
        let candidates = self.dictionary.find_candidates(&pivot, &partial);
        if candidates.is_empty() {
            self.words_used.pop();
            self.translator.pop_mapping();
            return Vec::new();
        }

        let mut solutions = Vec::new();
        for candidate in &candidates {
            if !self.translator.push_mapping(&pivot, candidate) {
                continue;
            }
            if !self.resolved_words_are_valid(ciphertext) {
                self.translator.pop_mapping();
                continue;
            }
            let translation = self.translator.translation(ciphertext);
            if is_fully_translated(&translation) {
                solutions.push(translation);
                self.translator.pop_mapping();
            } else {
                // the child frame owns popping the mapping pushed above
                solutions.extend(self.crack_frame(ciphertext, tokens));
            }
        }

        self.translator.pop_mapping();
        self.words_used.pop();
        solutions.sort();
        solutions
    }

    // The most constraining unused token: the one whose translation has
    // the most unknown letters, earliest occurrence winning ties. None
    // when no unused token has an unknown left to resolve.
    fn select_pivot(&self, tokens: &[String]) -> Option<String> {
        let mut most_unknowns = 0;
        let mut best = None;
        for (i, token) in tokens.iter().enumerate() {
            if self.words_used.iter().any(|used| used == token) {
                continue;
            }
            let translation = self.translator.translation(token);
            let unknowns = translation.chars().filter(|&ch| ch == UNKNOWN).count();
            if unknowns > most_unknowns {
                most_unknowns = unknowns;
                best = Some(i);
            }
        }
        best.map(|i| tokens[i].clone())
    }

    // Under the current mapping, every word that has become fully
    // resolved must be a dictionary word.
    fn resolved_words_are_valid(&self, ciphertext: &str) -> bool {
        let translation = self.translator.translation(ciphertext);
        for word in self.tokenizer.tokenize(&translation) {
            if is_fully_translated(&word) && !self.dictionary.contains(&word) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decrypter_with(words: &[&str]) -> Decrypter {
        let mut dec = Decrypter::new();
        dec.load_words(words.join("\n").as_bytes()).unwrap();
        dec
    }

    #[test]
    /// Verifies only the pattern-compatible word decodes a single token.
    fn single_word_single_solution() {
        let mut dec = decrypter_with(&["cat", "puppy"]);
        assert_eq!(dec.crack("xyz"), vec!["cat"]);
    }

    #[test]
    /// Verifies ambiguous ciphertexts yield every decoding, sorted.
    fn ambiguous_token_yields_all_solutions_sorted() {
        let mut dec = decrypter_with(&["see", "bee"]);
        assert_eq!(dec.crack("xyy"), vec!["bee", "see"]);
    }

    #[test]
    /// Verifies cross-word letter constraints propagate.
    fn constraints_propagate_across_words() {
        let mut dec = decrypter_with(&["rat", "tar", "art"]);
        // the second token must decode to the first one reversed
        assert_eq!(dec.crack("xyz zyx"), vec!["rat tar", "tar rat"]);
    }

    #[test]
    /// Verifies the search recurses when one candidate leaves a word
    /// unresolved, and rejects branches that claim a letter twice.
    fn recursion_with_backtracking() {
        let mut dec = decrypter_with(&["cat", "car", "at"]);
        // "cat" for the pivot claims t, leaving "yw" unsolvable; only
        // "car at" survives
        assert_eq!(dec.crack("xyz yw"), vec!["car at"]);
    }

    #[test]
    /// Verifies fully-resolved non-words prune a branch.
    fn invalid_resolved_word_prunes_branch() {
        let mut dec = decrypter_with(&["rat", "tar"]);
        // "rat" decodes the first token but makes the second "tar"
        // reversed; both decodings resolve both tokens, so only pairs in
        // the dictionary survive
        assert_eq!(dec.crack("xyz zyx"), vec!["rat tar", "tar rat"]);
        let mut dec = decrypter_with(&["rat", "bag"]);
        assert!(dec.crack("xyz zyx").is_empty());
    }

    #[test]
    /// Verifies duplicated solution texts are kept.
    fn duplicate_dictionary_words_duplicate_solutions() {
        let mut dec = decrypter_with(&["cat", "cat"]);
        assert_eq!(dec.crack("xyz"), vec!["cat", "cat"]);
    }

    #[test]
    /// Verifies case and punctuation of the ciphertext survive decoding.
    fn case_and_punctuation_survive() {
        let mut dec = decrypter_with(&["cat"]);
        assert_eq!(dec.crack("Xyz!"), vec!["Cat!"]);
    }

    #[test]
    /// Verifies a ciphertext with no tokens yields nothing and no panic.
    fn zero_tokens_yield_nothing() {
        let mut dec = decrypter_with(&["cat"]);
        assert!(dec.crack("").is_empty());
        assert!(dec.crack("0123 ,;:.!").is_empty());
    }

    #[test]
    /// Verifies the pivot guard: tokens with no unknown letters (here,
    /// apostrophe-only tokens) leave nothing to pivot on.
    fn no_pivot_available_yields_nothing() {
        let mut dec = decrypter_with(&["cat"]);
        assert!(dec.crack("''' ''").is_empty());
    }

    #[test]
    /// Verifies an unloadable dictionary fails the load and later cracks
    /// come back empty.
    fn unloaded_dictionary_cracks_nothing() {
        let mut dec = Decrypter::new();
        assert!(dec.load("/no/such/words.txt").is_err());
        assert!(dec.crack("xyz").is_empty());
    }

    #[test]
    /// Verifies a crack leaves no residual mapping behind: running the
    /// same search twice gives identical answers.
    fn search_state_is_restored_between_cracks() {
        let mut dec = decrypter_with(&["rat", "tar", "art"]);
        let first = dec.crack("xyz zyx");
        let second = dec.crack("xyz zyx");
        assert_eq!(first, second);
        assert_eq!(first, vec!["rat tar", "tar rat"]);
    }

    #[test]
    /// Verifies a longer sentence decodes through several frames.
    fn multi_word_sentence() {
        let mut dec = decrypter_with(&["the", "cat", "sat", "hat"]);
        // only "the" leaves the trailing letter of "qrz"/"nrz" satisfiable
        let solutions = dec.crack("zgd qrz nrz");
        assert_eq!(solutions, vec!["the cat sat", "the sat cat"]);
    }
}
