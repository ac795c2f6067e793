//! Insertion-ordered grouping
//!
//! Aggregators fold records into per-key accumulators. Keys come out in the
//! order they were first seen, which is what the top-performer tie-break
//! and every report table rely on.

use ahash::AHashMap as HashMap; // Fast non-cryptographic hasher

/// Per-group state that can absorb another state for the same group
///
/// `merge` must be associative, so a slice can be folded in chunks and the
/// partial results merged in order.
pub trait Accumulator {
    fn merge(&mut self, other: Self);
}

/// Map from group key to accumulator that remembers first-seen order
#[derive(Debug, Clone)]
pub struct OrderedGroups<A> {
    index: HashMap<String, usize>,
    entries: Vec<(String, A)>,
}

impl<A> Default for OrderedGroups<A> {
    fn default() -> Self {
        Self { index: HashMap::new(), entries: Vec::new() }
    }
}

impl<A: Accumulator> OrderedGroups<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `value` into the group `key`, creating it at the end if new
    pub fn add(&mut self, key: &str, value: A) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1.merge(value),
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), value));
            }
        }
    }

    /// Folds `other` in after our own groups; keys new to us keep
    /// `other`'s relative order
    pub fn merge_groups(mut self, other: Self) -> Self {
        for (key, value) in other.entries {
            self.add(&key, value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&A> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &A)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn into_entries(self) -> Vec<(String, A)> {
        self.entries
    }
}

impl<A: Accumulator, K: AsRef<str>> FromIterator<(K, A)> for OrderedGroups<A> {
    fn from_iter<I: IntoIterator<Item = (K, A)>>(iter: I) -> Self {
        let mut groups = Self::new();
        for (key, value) in iter {
            groups.add(key.as_ref(), value);
        }
        groups
    }
}
