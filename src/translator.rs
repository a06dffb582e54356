//! Bijective cipher/plain letter mapping with snapshot undo

use crate::hash::HashTable;

/// Sentinel a letter maps to before any association is pushed for it.
pub const UNKNOWN: char = '?';

type Mapping = HashTable<char, char>;

fn unknown_mapping() -> Mapping {
    let mut mapping = Mapping::new();
    for ch in 'a'..='z' {
        mapping.associate(ch, UNKNOWN);
    }
    mapping
}

/// The active cipher-to-plain letter mapping, its inverse, and a stack of
/// prior snapshots so trial mappings can be undone exactly.
///
/// Every mutation is stack-disciplined: a successful [`push_mapping`]
/// either fully applies or (on conflict) changes nothing, and one later
/// [`pop_mapping`] restores the mapping that preceded it.
///
/// [`push_mapping`]: Translator::push_mapping
/// [`pop_mapping`]: Translator::pop_mapping
#[derive(Debug, Clone)]
pub struct Translator {
    cipher_to_plain: Mapping,
    plain_to_cipher: Mapping,
    undo: Vec<(Mapping, Mapping)>,
    pushes: usize,
    pops: usize,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    /// Translator with every letter a-z unmapped in both directions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cipher_to_plain: unknown_mapping(),
            plain_to_cipher: unknown_mapping(),
            undo: Vec::new(),
            pushes: 0,
            pops: 0,
        }
    }

    // A pairing conflicts when either letter is already mapped elsewhere.
    fn is_inconsistent(&self, cipher: char, plain: char) -> bool {
        if let Some(&mapped) = self.cipher_to_plain.find(&cipher) {
            if mapped != UNKNOWN && mapped != plain {
                return true;
            }
        }
        if let Some(&mapped) = self.plain_to_cipher.find(&plain) {
            if mapped != UNKNOWN && mapped != cipher {
                return true;
            }
        }
        false
    }

    /// Associate each letter of `cipher` with the same position of `plain`,
    /// snapshotting the current mapping first so it can be popped back.
    ///
    /// Returns false, changing nothing, if the fragments differ in length,
    /// contain anything non-alphabetic, or conflict with the current mapping.
    pub fn push_mapping(&mut self, cipher: &str, plain: &str) -> bool {
        if cipher.len() != plain.len() {
            return false;
        }
        let mut pairs = Vec::with_capacity(cipher.len());
        for (c, p) in cipher.chars().zip(plain.chars()) {
            let c = c.to_ascii_lowercase();
            let p = p.to_ascii_lowercase();
            if !c.is_ascii_alphabetic() || !p.is_ascii_alphabetic() || self.is_inconsistent(c, p) {
                return false;
            }
            pairs.push((c, p));
        }

        self.undo.push((self.cipher_to_plain.clone(), self.plain_to_cipher.clone()));
        for (c, p) in pairs {
            self.cipher_to_plain.associate(c, p);
            self.plain_to_cipher.associate(p, c);
        }
        self.pushes += 1;
        true
    }

    /// Discard the current mapping and restore the most recent snapshot.
    /// Returns false, changing nothing, when there is nothing to undo.
    pub fn pop_mapping(&mut self) -> bool {
        if self.pops == self.pushes {
            return false;
        }
        match self.undo.pop() {
            Some((cipher_to_plain, plain_to_cipher)) => {
                self.cipher_to_plain = cipher_to_plain;
                self.plain_to_cipher = plain_to_cipher;
                self.pops += 1;
                true
            }
            None => false,
        }
    }

    fn mapped(&self, cipher: char) -> char {
        match self.cipher_to_plain.find(&cipher) {
            Some(&plain) => plain,
            None => UNKNOWN,
        }
    }

    /// Translate `text` through the current mapping. Letters keep their
    /// case, unmapped letters come out as `?`, and everything else passes
    /// through unchanged. Output length always equals input length.
    #[must_use]
    pub fn translation(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            if ch.is_ascii_uppercase() {
                out.push(self.mapped(ch.to_ascii_lowercase()).to_ascii_uppercase());
            } else if ch.is_ascii_lowercase() {
                out.push(self.mapped(ch));
            } else {
                out.push(ch);
            }
        }
        out
    }
}
