//! Key comparison used by both the store's ordering invariant and search.
//!
//! Ordering is byte-wise over the UTF-8 encoding, which for valid UTF-8 is the
//! same as Unicode code point order. It is neither case-folded nor
//! locale-collated: word lists must be pre-sorted the same way (e.g. with
//! `LC_ALL=C sort`).

use crate::record::WordRecord;
use std::cmp::Ordering;

/// Order `query` relative to the record's variant
///
/// `Less` when the query sorts strictly before `record.variant()`, `Greater`
/// when strictly after, `Equal` otherwise.
#[inline]
pub fn compare(query: &str, record: &WordRecord) -> Ordering {
    compare_variants(query, record.variant())
}

/// Order two variants
#[inline]
pub fn compare_variants(left: &str, right: &str) -> Ordering {
    left.as_bytes().cmp(right.as_bytes())
}
