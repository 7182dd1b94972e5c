//! Word list loading.
//!
//! Turns a tab-separated full-form list on disk (optionally compressed) into
//! a sorted [`RecordStore`](crate::store::RecordStore). Everything here runs
//! before the first lookup; the store it yields is never touched again.

pub mod compression;
pub mod factory;
pub mod parser;
pub mod validation;

pub use compression::{detect_compression, CompressionType};
pub use factory::{load_word_list, WordListBytes, WordListLoader};
pub use parser::{parse_line, parse_word_list, FIELD_COUNT};
pub use validation::validate_word_list_path;
