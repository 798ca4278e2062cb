// File: src/core/dictionary.rs
use crate::core::ordered::{KeyCompare, OrderedSet};
use crate::core::symbol::Symbol;
use serde::{Deserialize, Serialize};

/// A registered symbol and the value it stands for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry<V> {
    pub key: Symbol,
    pub value: V,
}

/// Orders entries by key symbol alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByKey;

impl<V> KeyCompare<DictionaryEntry<V>> for ByKey {
    fn less(&self, a: &DictionaryEntry<V>, b: &DictionaryEntry<V>) -> bool {
        a.key < b.key
    }
}

/// Symbols mapped to values, kept sorted by key for binary-search lookup.
///
/// Inserting a key that is already present is refused; there is no
/// overwrite. Remove-then-insert is the caller's job.
#[derive(Debug, Clone)]
pub struct Dictionary<V> {
    entries: OrderedSet<DictionaryEntry<V>, ByKey>,
}

impl<V> Default for Dictionary<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Dictionary<V> {
    pub fn new() -> Self {
        Self {
            entries: OrderedSet::with_comparator(ByKey),
        }
    }

    /// Stores an independent copy of `key`. Returns false if the key exists.
    pub fn insert(&mut self, key: Symbol, value: V) -> bool {
        let inserted = self.entries.add(DictionaryEntry { key, value });
        if !inserted {
            log::debug!("dictionary insert refused: key already registered");
        }
        inserted
    }

    /// Index of the first entry whose key is not less than `key`. O(log n).
    pub fn lower_bound(&self, key: &Symbol) -> usize {
        self.entries.lower_bound_by(|entry| entry.key < *key)
    }

    pub fn get(&self, key: &Symbol) -> Option<&V> {
        let i = self.lower_bound(key);
        self.entries
            .at(i)
            .ok()
            .filter(|entry| entry.key == *key)
            .map(|entry| &entry.value)
    }

    pub fn contains(&self, key: &Symbol) -> bool {
        self.get(key).is_some()
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &DictionaryEntry<V>> {
        self.entries.iter()
    }
}

impl<V> FromIterator<(Symbol, V)> for Dictionary<V> {
    /// Later duplicates of a key are dropped, as with `insert`.
    fn from_iter<I: IntoIterator<Item = (Symbol, V)>>(iter: I) -> Self {
        let mut dictionary = Dictionary::new();
        for (key, value) in iter {
            dictionary.insert(key, value);
        }
        dictionary
    }
}
