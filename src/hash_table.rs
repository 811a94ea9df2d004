//! A generic chained hash table with automatic growth.
//!
//! This is the storage primitive underneath [`crate::word_list::WordList`]:
//! pattern strings map to their bucket of dictionary words, and a tiny
//! `HashTable<char, char>` acts as the first-occurrence registry during
//! pattern generation.
//!
//! Buckets are owned `Vec`s of entries rather than pointer chains; growth is
//! a bulk rebuild into a fresh bucket array. Relative order of entries
//! within the table is not preserved across a rebuild (and nothing in this
//! crate relies on it).

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Bucket count every table starts with (and returns to on [`HashTable::reset`]).
const DEFAULT_BUCKET_COUNT: usize = 100;

/// Maximum load factor used when the caller passes a non-positive value.
const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.5;

/// Upper clamp for the configurable maximum load factor.
const MAX_LOAD_FACTOR_CEILING: f64 = 2.0;

#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Chained hash table: `associate` inserts or overwrites, `find` never
/// allocates, and exceeding the maximum load factor on insertion of a *new*
/// key doubles the bucket count (it never shrinks).
///
/// All operations are total: there is no error path, and `find` on an
/// absent key is `None`, not a fault. The table has a single logical owner;
/// it is not meant for concurrent mutation.
#[derive(Debug)]
pub struct HashTable<K, V> {
    buckets: Vec<Vec<Entry<K, V>>>,
    items: usize,
    max_load_factor: f64,
}

impl<K: Hash + Eq, V> HashTable<K, V> {
    /// Create a table with the default maximum load factor (0.5).
    pub fn new() -> Self {
        Self::with_max_load_factor(DEFAULT_MAX_LOAD_FACTOR)
    }

    /// Create a table with a caller-chosen maximum load factor.
    ///
    /// The factor is clamped to (0.0, 2.0]: non-positive (or NaN) values
    /// fall back to 0.5, values above 2.0 are capped at 2.0.
    pub fn with_max_load_factor(max_load_factor: f64) -> Self {
        let max_load_factor = if max_load_factor.is_nan() || max_load_factor <= 0.0 {
            DEFAULT_MAX_LOAD_FACTOR
        } else if max_load_factor > MAX_LOAD_FACTOR_CEILING {
            MAX_LOAD_FACTOR_CEILING
        } else {
            max_load_factor
        };

        Self {
            buckets: Self::empty_buckets(DEFAULT_BUCKET_COUNT),
            items: 0,
            max_load_factor,
        }
    }

    /// Discard all entries and return to the initial bucket count.
    pub fn reset(&mut self) {
        self.buckets = Self::empty_buckets(DEFAULT_BUCKET_COUNT);
        self.items = 0;
    }

    /// Insert `value` under `key`, overwriting in place if the key is
    /// already present (no growth, no item-count change in that case).
    ///
    /// After inserting a *new* key, if the load factor exceeds the
    /// configured maximum the bucket count doubles and every entry is
    /// rehashed.
    pub fn associate(&mut self, key: K, value: V) {
        let ix = self.bucket_index(&key);
        if let Some(entry) = self.buckets[ix].iter_mut().find(|e| e.key == key) {
            entry.value = value;
            return;
        }

        self.buckets[ix].push(Entry { key, value });
        self.items += 1;
        if self.load_factor() > self.max_load_factor {
            self.grow();
        }
    }

    /// Look up `key`, returning a reference to its value if present.
    pub fn find(&self, key: &K) -> Option<&V> {
        let ix = self.bucket_index(key);
        self.buckets[ix]
            .iter()
            .find(|e| e.key == *key)
            .map(|e| &e.value)
    }

    /// Look up `key`, returning a mutable reference to its value if present.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        let ix = self.bucket_index(key);
        self.buckets[ix]
            .iter_mut()
            .find(|e| e.key == *key)
            .map(|e| &mut e.value)
    }

    /// Number of live key/value pairs.
    pub fn item_count(&self) -> usize {
        self.items
    }

    /// Ratio of stored items to bucket count.
    pub fn load_factor(&self) -> f64 {
        self.items as f64 / self.buckets.len() as f64
    }

    fn empty_buckets(count: usize) -> Vec<Vec<Entry<K, V>>> {
        (0..count).map(|_| Vec::new()).collect()
    }

    fn bucket_index(&self, key: &K) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.buckets.len()
    }

    /// Double the bucket count and rehash every entry into the new array.
    fn grow(&mut self) {
        let doubled = Self::empty_buckets(self.buckets.len() * 2);
        let old = std::mem::replace(&mut self.buckets, doubled);
        for bucket in old {
            for entry in bucket {
                let ix = self.bucket_index(&entry.key);
                self.buckets[ix].push(entry);
            }
        }
    }
}

impl<K: Hash + Eq, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
