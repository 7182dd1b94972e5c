//! Word list loading: from a path on disk to a finished [`RecordStore`].
//!
//! # Process
//! 1. Validate the path (exists, regular file, not empty, readable)
//! 2. Detect compression and pick a [`WordListBytes`] strategy
//! 3. Parse every line into a [`WordRecord`](crate::record::WordRecord)
//! 4. Optionally verify the variant ordering
//!
//! Parsing runs on the blocking thread pool so a large list does not stall
//! the async runtime.

use crate::config::{LookupConfig, DEFAULT_MEMORY_THRESHOLD};
use crate::error::{LookupError, Result};
use crate::loader::compression::{detect_compression, read_decompressed, CompressionType};
use crate::loader::parser::parse_word_list;
use crate::loader::validation::validate_word_list_path;
use crate::store::RecordStore;
use log::{debug, info};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;
use std::time::Instant;

/// Raw word list bytes, owned or memory-mapped
#[derive(Debug)]
pub enum WordListBytes {
    /// Small plain files and every decompressed file
    InMemory(Vec<u8>),
    /// Plain files at or above the memory threshold
    MemoryMapped(Mmap),
}

impl WordListBytes {
    /// Get the underlying bytes regardless of storage strategy
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            WordListBytes::InMemory(vec) => vec.as_slice(),
            WordListBytes::MemoryMapped(mmap) => &mmap[..],
        }
    }
}

/// Loads word lists into record stores.
#[derive(Debug, Clone)]
pub struct WordListLoader {
    verify_sorted: bool,
    memory_threshold: u64,
}

impl Default for WordListLoader {
    fn default() -> Self {
        Self {
            verify_sorted: false,
            memory_threshold: DEFAULT_MEMORY_THRESHOLD,
        }
    }
}

impl WordListLoader {
    /// Loader that trusts the file's ordering
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader configured from [`LookupConfig`]
    pub fn from_config(config: &LookupConfig) -> Self {
        Self {
            verify_sorted: config.verify_sorted,
            memory_threshold: config.memory_threshold,
        }
    }

    /// Enable or disable the O(n) sortedness check
    pub fn verify_sorted(mut self, verify: bool) -> Self {
        self.verify_sorted = verify;
        self
    }

    /// Set the size at which plain files are memory-mapped
    pub fn memory_threshold(mut self, bytes: u64) -> Self {
        self.memory_threshold = bytes;
        self
    }

    /// Load, parse and (optionally) verify a word list
    ///
    /// # Errors
    /// * Path validation errors (missing, not a file, empty, unreadable)
    /// * [`LookupError::CompressionError`] for corrupt compressed input
    /// * [`LookupError::MalformedRecord`] for lines that are not 5 tab-separated UTF-8 fields
    /// * [`LookupError::UnsortedInput`] when verification is enabled and fails
    pub async fn load(&self, path: &Path) -> Result<RecordStore> {
        let started = Instant::now();

        validate_word_list_path(path)?;
        let compression = detect_compression(path).await?;
        debug!(
            "Opening word list {} (compression: {})",
            path.display(),
            compression.name()
        );

        let bytes = self.read_bytes(path, compression).await?;
        let verify = self.verify_sorted;

        let store = tokio::task::spawn_blocking(move || -> Result<RecordStore> {
            let records = parse_word_list(bytes.as_bytes())?;
            if verify {
                RecordStore::from_unsorted_checked(records)
            } else {
                Ok(RecordStore::from_sorted(records))
            }
        })
        .await
        .map_err(|e| LookupError::other(format!("Word list parsing task failed: {e}")))??;

        info!(
            "Data loaded. Total words: {} ({} ms)",
            store.len(),
            started.elapsed().as_millis()
        );

        Ok(store)
    }

    async fn read_bytes(&self, path: &Path, compression: CompressionType) -> Result<WordListBytes> {
        if compression.is_compressed() {
            return Ok(WordListBytes::InMemory(
                read_decompressed(path, compression).await?,
            ));
        }

        let file = File::open(path).map_err(|e| {
            LookupError::file_error(format!("Failed to open file: {}", path.display()), e)
        })?;
        let file_size = file
            .metadata()
            .map_err(|e| LookupError::file_error("Failed to get file metadata", e))?
            .len();

        if file_size < self.memory_threshold {
            let content = tokio::fs::read(path)
                .await
                .map_err(|e| LookupError::file_error("Failed to read file", e))?;
            Ok(WordListBytes::InMemory(content))
        } else {
            debug!("Memory-mapping {} ({} bytes)", path.display(), file_size);
            // SAFETY: the mapping is read-only and dropped once parsing completes
            let mmap = unsafe {
                Mmap::map(&file).map_err(|e| {
                    LookupError::memory_mapping(format!(
                        "Failed to memory map file {}: {}",
                        path.display(),
                        e
                    ))
                })?
            };
            Ok(WordListBytes::MemoryMapped(mmap))
        }
    }
}

/// Load a word list with default settings
pub async fn load_word_list(path: &Path) -> Result<RecordStore> {
    WordListLoader::new().load(path).await
}
