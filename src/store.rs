//! Immutable, sorted record store.
//!
//! A [`RecordStore`] is built once from the complete, already sorted output of
//! a load and is read-only afterwards. There is no insert, update or remove:
//! search correctness depends on the ordering established at construction.
//!
//! ## Ordering
//!
//! Records must be non-decreasing by [`WordRecord::variant`] under
//! [`compare_variants`], which is plain byte order over UTF-8. Duplicate
//! variants are allowed.

use crate::error::{LookupError, Result};
use crate::record::WordRecord;
use crate::search::{self, compare_variants};
use std::cmp::Ordering;

/// Ordered, read-only sequence of word records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<WordRecord>,
}

impl RecordStore {
    /// Build a store from records the caller guarantees are sorted
    ///
    /// # Preconditions
    /// `records` must be non-decreasing by variant in byte order. This is not
    /// checked in release builds; lookups on an unsorted store return
    /// unspecified results. Debug builds assert the ordering.
    ///
    /// Use [`RecordStore::from_unsorted_checked`] for untrusted input.
    pub fn from_sorted(records: Vec<WordRecord>) -> Self {
        debug_assert!(
            first_unsorted_position(&records).is_none(),
            "RecordStore::from_sorted called with records out of variant order"
        );
        Self { records }
    }

    /// Build a store after verifying the ordering invariant
    ///
    /// Costs one extra O(n) pass. Fails with [`LookupError::UnsortedInput`]
    /// naming the first record that sorts before its predecessor.
    pub fn from_unsorted_checked(records: Vec<WordRecord>) -> Result<Self> {
        verify_sorted(&records)?;
        Ok(Self { records })
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`, or `None` when the index is out of bounds
    pub fn get(&self, index: usize) -> Option<&WordRecord> {
        self.records.get(index)
    }

    /// All records in variant order
    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    /// Iterate over records in variant order
    pub fn iter(&self) -> std::slice::Iter<'_, WordRecord> {
        self.records.iter()
    }

    /// Exact-match lookup; see [`search::search`]
    pub fn search(&self, query: &str) -> Option<usize> {
        search::search(self, query)
    }

    /// Exact-match lookup returning the record itself
    pub fn lookup(&self, query: &str) -> Option<&WordRecord> {
        self.search(query).and_then(|index| self.get(index))
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a WordRecord;
    type IntoIter = std::slice::Iter<'a, WordRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Check that `records` are non-decreasing by variant
pub fn verify_sorted(records: &[WordRecord]) -> Result<()> {
    match first_unsorted_position(records) {
        None => Ok(()),
        Some(position) => Err(LookupError::UnsortedInput {
            position,
            previous: records[position - 1].variant().to_string(),
            current: records[position].variant().to_string(),
        }),
    }
}

/// Index of the first record that sorts strictly before its predecessor
fn first_unsorted_position(records: &[WordRecord]) -> Option<usize> {
    records
        .windows(2)
        .position(|pair| compare_variants(pair[1].variant(), pair[0].variant()) == Ordering::Less)
        .map(|i| i + 1)
}
