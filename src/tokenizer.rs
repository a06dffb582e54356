//! Split text into maximal runs of non-separator characters

use lazy_static::lazy_static;

/// Separator set used by the decrypter: digits, space, and common punctuation.
pub const DEFAULT_SEPARATORS: &str = "0123456789 ,;:.!()[]{}-\"#$%^&";

lazy_static! {
    static ref DEFAULT_TABLE: [bool; 256] = separator_table(DEFAULT_SEPARATORS);
}

fn separator_table(separators: &str) -> [bool; 256] {
    let mut table = [false; 256];
    for b in separators.bytes() {
        table[b as usize] = true;
    }
    table
}

/// Splits strings on a fixed separator set, never altering case or content.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    table: [bool; 256],
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::default_separators()
    }
}

impl Tokenizer {
    /// Tokenizer splitting on every byte of `separators`.
    #[must_use]
    pub fn new(separators: &str) -> Self {
        Self { table: separator_table(separators) }
    }

    /// Tokenizer using [`DEFAULT_SEPARATORS`].
    #[must_use]
    pub fn default_separators() -> Self {
        Self { table: *DEFAULT_TABLE }
    }

    const fn is_separator(&self, b: u8) -> bool {
        self.table[b as usize]
    }

    /// Split `text` into tokens, left to right. Empty or all-separator
    /// input yields no tokens.
    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        for ch in text.chars() {
            if ch.is_ascii() && self.is_separator(ch as u8) {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            } else {
                current.push(ch);
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Verifies default separators split words and drop punctuation runs.
    fn splits_on_default_separators() {
        let tok = Tokenizer::default_separators();
        assert_eq!(tok.tokenize("Hello, world! 42 times."), vec!["Hello", "world", "times"]);
    }

    #[test]
    /// Verifies apostrophes are not separators and case is untouched.
    fn keeps_apostrophes_and_case() {
        let tok = Tokenizer::default_separators();
        assert_eq!(tok.tokenize("Don't STOP"), vec!["Don't", "STOP"]);
    }

    #[test]
    /// Verifies empty and all-separator input yield zero tokens.
    fn empty_input_yields_no_tokens() {
        let tok = Tokenizer::default_separators();
        assert!(tok.tokenize("").is_empty());
        assert!(tok.tokenize("0123 ,;:.!-").is_empty());
    }

    #[test]
    /// Verifies a custom separator set is honored.
    fn custom_separators() {
        let tok = Tokenizer::new("|");
        assert_eq!(tok.tokenize("a b|c d"), vec!["a b", "c d"]);
    }
}
