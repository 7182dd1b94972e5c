//! Exact-match search over a [`RecordStore`](crate::store::RecordStore).
//!
//! - [`comparator`] - the single byte-wise ordering shared with the store
//! - [`binary`] - iterative bisection returning an index or `None`

pub mod binary;
pub mod comparator;

pub use binary::{search, search_by};
pub use comparator::{compare, compare_variants};
