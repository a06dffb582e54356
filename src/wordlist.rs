//! Word list indexed by letter-repetition pattern

use crate::hash::HashTable;
use crate::prelude::*;
use crate::translator::UNKNOWN;

/// Canonical pattern key for a word: each newly seen letter takes the next
/// unused capital letter, repeats reuse theirs, and anything that is not a
/// letter (in practice, apostrophes) passes through unchanged.
/// Case-insensitive, so `Puppy` and `puppy` both yield `ABCCD`.
#[must_use]
pub fn letter_pattern(word: &str) -> String {
    let mut seen = [0_u8; 26];
    let mut next = 0_u8;
    let mut pattern = String::with_capacity(word.len());
    for ch in word.chars() {
        if ch.is_ascii_alphabetic() {
            let idx = (ch.to_ascii_lowercase() as u8 - b'a') as usize;
            if seen[idx] == 0 {
                seen[idx] = b'A' + next;
                next += 1;
            }
            pattern.push(seen[idx] as char);
        } else {
            pattern.push(ch);
        }
    }
    pattern
}

/// Dictionary answering membership and pattern-compatible candidate queries.
///
/// Words sharing a pattern key are kept in insertion order, duplicates and
/// all; a second table answers `contains` in O(1).
#[derive(Debug, Clone, Default)]
pub struct WordList {
    by_pattern: HashTable<String, Vec<String>>,
    members: HashTable<String, bool>,
}

impl WordList {
    /// Empty word list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load one word per line from the named file (gzip handled
    /// transparently). Prior contents are dropped first, so a failed open
    /// leaves the list empty rather than half of what it was.
    pub fn load(&mut self, name: &str) -> Result<()> {
        self.by_pattern.reset();
        self.members.reset();
        let reader = get_reader(name)?;
        self.read_words(reader)
    }

    /// Load one word per line from an in-memory or otherwise buffered source.
    pub fn load_from(&mut self, reader: impl BufRead) -> Result<()> {
        self.by_pattern.reset();
        self.members.reset();
        self.read_words(reader)
    }

    fn read_words(&mut self, reader: impl BufRead) -> Result<()> {
        for line in reader.lines() {
            let line = line?;
            if let Some(word) = accept_word(&line) {
                let pattern = letter_pattern(&word);
                match self.by_pattern.find_mut(&pattern) {
                    Some(group) => group.push(word.clone()),
                    None => self.by_pattern.associate(pattern, vec![word.clone()]),
                }
                self.members.associate(word, true);
            }
        }
        Ok(())
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.members.find(&word.to_ascii_lowercase()).is_some()
    }

    /// Every dictionary word consistent with `cipher_word` under its current
    /// `partial` translation (same length, unresolved positions marked `?`).
    ///
    /// Results come back in dictionary insertion order. Any malformed input
    /// (length mismatch, a character outside letters/apostrophe/`?`, or a
    /// structural apostrophe mismatch between the two arguments) empties the
    /// whole result rather than skipping one candidate.
    #[must_use]
    pub fn find_candidates(&self, cipher_word: &str, partial: &str) -> Vec<String> {
        if cipher_word.len() != partial.len() {
            return Vec::new();
        }
        let cipher: Vec<u8> = cipher_word.bytes().map(|b| b.to_ascii_lowercase()).collect();
        let translation: Vec<u8> = partial.bytes().map(|b| b.to_ascii_lowercase()).collect();
        for i in 0..cipher.len() {
            if !cipher[i].is_ascii_alphabetic() && cipher[i] != b'\'' {
                return Vec::new();
            }
            if !translation[i].is_ascii_alphabetic()
                && translation[i] != b'\''
                && translation[i] != UNKNOWN as u8
            {
                return Vec::new();
            }
        }

        let group = match self.by_pattern.find(&letter_pattern(cipher_word)) {
            Some(group) => group,
            None => return Vec::new(),
        };

        let mut candidates = Vec::new();
        'words: for word in group {
            // words in the group share the cipher word's pattern, hence its length
            let w = word.as_bytes();
            for j in 0..w.len() {
                match translation[j] {
                    b'?' => {
                        if !cipher[j].is_ascii_alphabetic() {
                            return Vec::new();
                        }
                    }
                    b'\'' => {
                        if cipher[j] != b'\'' {
                            return Vec::new();
                        }
                        if w[j] != b'\'' {
                            continue 'words;
                        }
                    }
                    resolved => {
                        if !cipher[j].is_ascii_alphabetic() {
                            return Vec::new();
                        }
                        if w[j] != resolved {
                            continue 'words;
                        }
                    }
                }
            }
            candidates.push(word.clone());
        }
        candidates
    }
}

// A line is accepted iff every character is a letter or apostrophe;
// accepted words come back lowercased. Empty lines are not words.
fn accept_word(line: &str) -> Option<String> {
    if line.is_empty() {
        return None;
    }
    let mut word = String::with_capacity(line.len());
    for ch in line.chars() {
        if ch.is_ascii_alphabetic() {
            word.push(ch.to_ascii_lowercase());
        } else if ch == '\'' {
            word.push(ch);
        } else {
            return None;
        }
    }
    Some(word)
}
