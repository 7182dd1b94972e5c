//! Iterative binary search over a sorted record store.

use crate::record::WordRecord;
use crate::search::comparator::compare;
use crate::store::RecordStore;
use std::cmp::Ordering;

/// Find a record whose variant equals `query`
///
/// Returns the index of *some* matching record, or `None` when no record
/// matches. With duplicate variants the index is whichever match the
/// bisection probes first; it is not necessarily the first or last of the run.
///
/// The empty string is an ordinary key.
///
/// # Preconditions
/// `store` must be sorted by variant (guaranteed by
/// [`RecordStore::from_unsorted_checked`], assumed by
/// [`RecordStore::from_sorted`]). On an unsorted store the result is
/// unspecified.
///
/// # Performance
/// * At most `ceil(log2(n + 1))` comparisons
/// * O(1) extra space, no recursion
pub fn search(store: &RecordStore, query: &str) -> Option<usize> {
    search_by(store, |record| compare(query, record))
}

/// Bisect `store` with a caller-supplied three-way comparison
///
/// `cmp` returns the ordering of the sought key relative to the record it is
/// given, as [`compare`] does. Probes the same midpoints as [`search`].
pub fn search_by<F>(store: &RecordStore, mut cmp: F) -> Option<usize>
where
    F: FnMut(&WordRecord) -> Ordering,
{
    let records = store.records();

    // Half-open [low, high) over the closed range [low, high - 1]
    let mut low = 0usize;
    let mut high = records.len();

    while low < high {
        // floor((low + (high - 1)) / 2) without overflow
        let mid = low + (high - 1 - low) / 2;
        match cmp(&records[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => high = mid,
            Ordering::Greater => low = mid + 1,
        }
    }

    None
}
