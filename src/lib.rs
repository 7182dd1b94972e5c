//! # lexlookup - Exact-Match Word List Lookup
//!
//! Loads a pre-sorted, tab-separated full-form word list into memory and
//! answers exact-match queries against it in logarithmic time.
//!
//! ## Features
//!
//! - **Byte-order binary search**: iterative, at most `ceil(log2(n + 1))` comparisons
//! - **Immutable store**: built once, shared read-only by every lookup
//! - **Compression Support**: Transparent handling of gzip, bzip2, xz and zstd lists
//! - **Large lists**: memory-mapped parsing above a configurable size
//!
//! ## Architecture
//!
//! - [`record`] - The word record data model
//! - [`store`] - Sorted, read-only record store and its ordering check
//! - [`search`] - Comparator and exact-match binary search
//! - [`loader`] - Path validation, decompression and line parsing
//! - [`render`] - User-facing text for lookup outcomes
//! - [`app`] - Ownership of the store and the lookup entry points
//! - [`config`] - Runtime settings, optionally read from TOML
//! - [`error`] - Centralized error types and handling

// Core modules
pub mod error;
pub mod record;
pub mod search;
pub mod store;

// Collaborators around the core
pub mod app;
pub mod config;
pub mod loader;
pub mod render;

// Re-export commonly used types for convenience
pub use error::{LookupError, Result};

// Public API surface for external usage
pub use app::{Application, LookupOutcome};
pub use config::LookupConfig;
pub use loader::{load_word_list, WordListLoader};
pub use record::WordRecord;
pub use search::{compare, search};
pub use store::RecordStore;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
