//! Generic chained hash table with doubling growth

use fnv::FnvHasher;
use std::hash::{Hash, Hasher};

/// Bucket count a fresh or reset table starts with.
const INITIAL_BUCKETS: usize = 100;
/// Load factor above which the bucket array doubles.
const DEFAULT_MAX_LOAD: f64 = 0.5;

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    val: V,
    next: Option<usize>,
}

/// Exact-match key/value store. Entries live in an arena and buckets chain
/// them by index; growth relocates chain links, never the entries themselves.
#[derive(Debug, Clone)]
pub struct HashTable<K, V> {
    buckets: Vec<Option<usize>>,
    entries: Vec<Entry<K, V>>,
    max_load: f64,
}

impl<K: Hash + Eq, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> HashTable<K, V> {
    /// New table with the default maximum load factor of 0.5.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_load(DEFAULT_MAX_LOAD)
    }

    /// New table with the given maximum load factor, clamped into `(0, 2]`.
    #[must_use]
    pub fn with_max_load(max_load: f64) -> Self {
        let mut max = max_load;
        if max <= 0.0 {
            max = DEFAULT_MAX_LOAD;
        }
        if max > 2.0 {
            max = 2.0;
        }
        Self { buckets: vec![None; INITIAL_BUCKETS], entries: Vec::new(), max_load: max }
    }

    fn bucket_index(&self, key: &K) -> usize {
        let mut hasher = FnvHasher::default();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.buckets.len()
    }

    /// Insert `val` under `key`, overwriting in place if the key exists.
    pub fn associate(&mut self, key: K, val: V) {
        if let Some(slot) = self.find_mut(&key) {
            *slot = val;
            return;
        }
        let bucket = self.bucket_index(&key);
        let idx = self.entries.len();
        self.entries.push(Entry { key, val, next: self.buckets[bucket] });
        self.buckets[bucket] = Some(idx);
        if self.load_factor() > self.max_load {
            self.grow();
        }
    }

    // Double the bucket array and rethread every chain. Entries keep their
    // arena slots, so values are never copied.
    fn grow(&mut self) {
        let new_len = self.buckets.len() * 2;
        self.buckets = vec![None; new_len];
        for i in 0..self.entries.len() {
            let bucket = self.bucket_index(&self.entries[i].key);
            self.entries[i].next = self.buckets[bucket];
            self.buckets[bucket] = Some(i);
        }
    }

    /// Shared reference to the value under `key`, if any.
    #[must_use]
    pub fn find(&self, key: &K) -> Option<&V> {
        let mut at = self.buckets[self.bucket_index(key)];
        while let Some(i) = at {
            let entry = &self.entries[i];
            if entry.key == *key {
                return Some(&entry.val);
            }
            at = entry.next;
        }
        None
    }

    /// Mutable reference to the value under `key`, if any.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut at = self.buckets[self.bucket_index(key)];
        while let Some(i) = at {
            if self.entries[i].key == *key {
                return Some(&mut self.entries[i].val);
            }
            at = self.entries[i].next;
        }
        None
    }

    /// Drop every entry and restore the initial bucket count.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.buckets.clear();
        self.buckets.resize(INITIAL_BUCKETS, None);
    }

    /// Number of entries in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the table empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current entries-per-bucket ratio.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.entries.len() as f64 / self.buckets.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Verifies insert, lookup, and overwrite-in-place.
    fn associate_and_find() {
        let mut table = HashTable::new();
        assert!(table.is_empty());
        table.associate("alpha".to_string(), 1);
        table.associate("beta".to_string(), 2);
        assert_eq!(table.find(&"alpha".to_string()), Some(&1));
        assert_eq!(table.find(&"beta".to_string()), Some(&2));
        assert_eq!(table.find(&"gamma".to_string()), None);

        table.associate("alpha".to_string(), 10);
        assert_eq!(table.find(&"alpha".to_string()), Some(&10));
        assert_eq!(table.len(), 2);
    }

    #[test]
    /// Verifies every association survives bucket doubling.
    fn growth_preserves_entries() {
        let mut table = HashTable::new();
        for i in 0..500_u32 {
            table.associate(i, i * 3);
        }
        assert_eq!(table.len(), 500);
        for i in 0..500_u32 {
            assert_eq!(table.find(&i), Some(&(i * 3)));
        }
        // 500 entries never fit 100 buckets at a 0.5 max load
        assert!(table.load_factor() <= 0.5 + f64::EPSILON);
    }

    #[test]
    /// Verifies reset restores the original bucket geometry.
    fn reset_restores_initial_buckets() {
        let mut table = HashTable::new();
        for i in 0..500_u32 {
            table.associate(i, ());
        }
        table.reset();
        assert!(table.is_empty());
        assert_eq!(table.find(&7), None);

        // ten fresh entries against 100 buckets reads as exactly 0.1
        for i in 0..10_u32 {
            table.associate(i, ());
        }
        assert!((table.load_factor() - 0.1).abs() < 1e-9);
    }

    #[test]
    /// Verifies out-of-range load factors fall back into `(0, 2]`.
    fn load_factor_is_clamped() {
        let mut table = HashTable::with_max_load(-3.0);
        // behaves like the 0.5 default: 60 entries force at least one doubling
        for i in 0..60_u32 {
            table.associate(i, ());
        }
        assert!(table.load_factor() <= 0.5 + f64::EPSILON);

        let mut sticky = HashTable::with_max_load(99.0);
        // clamped to 2.0: 150 entries in 100 buckets is legal, no doubling yet
        for i in 0..150_u32 {
            sticky.associate(i, ());
        }
        assert!((sticky.load_factor() - 1.5).abs() < 1e-9);
    }

    #[test]
    /// Verifies mutable lookup edits in place.
    fn find_mut_edits_value() {
        let mut table = HashTable::new();
        table.associate('q', vec![1]);
        table.find_mut(&'q').unwrap().push(2);
        assert_eq!(table.find(&'q'), Some(&vec![1, 2]));
    }
}
