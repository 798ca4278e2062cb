// --- File: src/core/ordered.rs
use crate::error::{GlyphError, Result};
use std::cmp::Ordering;

/// A strict weak ordering over `T`.
pub trait KeyCompare<T> {
    fn less(&self, a: &T, b: &T) -> bool;
}

impl<T, F> KeyCompare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Orders values by their `Ord` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: Ord> KeyCompare<T> for Natural {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// A vector kept in the order of a caller-supplied comparator.
///
/// Two elements are considered equal when neither is `less` than the other.
/// `push` and `insert` bypass the ordering so callers can build a raw
/// sequence and `sort_and_unique` it later.
#[derive(Debug, Clone)]
pub struct OrderedSet<T, C = Natural> {
    values: Vec<T>,
    comparator: C,
}

impl<T: Ord> OrderedSet<T, Natural> {
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T: Ord> Default for OrderedSet<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: KeyCompare<T>> OrderedSet<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self { values: Vec::new(), comparator }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn at(&self, index: usize) -> Result<&T> {
        self.values.get(index).ok_or(GlyphError::IndexOutOfRange {
            index,
            len: self.values.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// First index whose element is not less than `value`, or `len()`.
    /// O(log n); assumes the elements are currently sorted.
    pub fn lower_bound(&self, value: &T) -> usize {
        self.values
            .partition_point(|existing| self.comparator.less(existing, value))
    }

    /// Lower bound against a probe that is not itself a `T`.
    /// `is_before` must be true exactly for the elements ordered before the probe.
    pub fn lower_bound_by<F>(&self, is_before: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.values.partition_point(is_before)
    }

    /// Sorted insertion. Returns false, leaving the set untouched, when an
    /// equal element is already present.
    pub fn add(&mut self, value: T) -> bool {
        let i = self.lower_bound(&value);
        if i == self.values.len() || self.comparator.less(&value, &self.values[i]) {
            self.values.insert(i, value);
            true
        } else {
            false
        }
    }

    /// Sorted insertion that keeps duplicates.
    pub fn add_multi(&mut self, value: T) {
        let i = self.lower_bound(&value);
        self.values.insert(i, value);
    }

    /// Positional insertion without any ordering check. `index` may equal `len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.values.len() {
            return Err(GlyphError::IndexOutOfRange {
                index,
                len: self.values.len(),
            });
        }
        self.values.insert(index, value);
        Ok(())
    }

    /// Append without an ordering check.
    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.values.pop()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.values.retain(keep);
    }

    /// Stable sort by the comparator.
    pub fn sort(&mut self) -> &mut Self {
        let comparator = &self.comparator;
        self.values.sort_by(|a, b| {
            if comparator.less(a, b) {
                Ordering::Less
            } else if comparator.less(b, a) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        self
    }

    /// Sort, then keep the first element of every run of equal elements.
    pub fn sort_and_unique(&mut self) -> &mut Self {
        self.sort();
        let comparator = &self.comparator;
        // dedup_by hands us (current, previous-kept); sorted means equal iff !less(prev, cur)
        self.values.dedup_by(|current, kept| !comparator.less(kept, current));
        self
    }
}

impl<'a, T, C> IntoIterator for &'a OrderedSet<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
