//! Application orchestration layer
//!
//! Owns the loaded [`RecordStore`] and connects user input to search and
//! rendering. Lookups are plain synchronous calls; the only async step is
//! loading, which finishes before an `Application` exists.

use crate::config::LookupConfig;
use crate::error::Result;
use crate::loader::WordListLoader;
use crate::record::WordRecord;
use crate::render::ResultRenderer;
use crate::store::RecordStore;
use log::debug;
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;

/// Result of one user lookup, before presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome<'a> {
    /// Input was empty after trimming; search was not run
    EmptyQuery,
    /// A record with this variant exists
    Found {
        index: usize,
        record: &'a WordRecord,
    },
    /// No record has this variant
    NotFound { query: String },
}

impl LookupOutcome<'_> {
    /// Whether the lookup hit a record
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Application orchestrator - owns the store, delegates to search and rendering
pub struct Application {
    store: RecordStore,
    renderer: Box<dyn ResultRenderer>,
}

impl Application {
    /// Wrap an already loaded store
    pub fn new(store: RecordStore, renderer: Box<dyn ResultRenderer>) -> Self {
        Self { store, renderer }
    }

    /// Load the word list at `path` using `config` and wrap the result
    pub async fn load(
        path: &Path,
        config: &LookupConfig,
        renderer: Box<dyn ResultRenderer>,
    ) -> Result<Self> {
        let store = WordListLoader::from_config(config).load(path).await?;
        Ok(Self::new(store, renderer))
    }

    /// The loaded records
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Trim `input`, reject empty input, and search for the rest
    pub fn lookup(&self, input: &str) -> LookupOutcome<'_> {
        let query = input.trim();
        if query.is_empty() {
            return LookupOutcome::EmptyQuery;
        }

        let started = Instant::now();
        let index = self.store.search(query);
        debug!(
            "Binary search for {:?} took {:?} over {} records",
            query,
            started.elapsed(),
            self.store.len()
        );

        match index.and_then(|i| self.store.get(i).map(|record| (i, record))) {
            Some((index, record)) => LookupOutcome::Found { index, record },
            None => LookupOutcome::NotFound {
                query: query.to_string(),
            },
        }
    }

    /// Render a lookup of `input` as one line of text
    pub fn render_lookup(&self, input: &str) -> (String, bool) {
        let outcome = self.lookup(input);
        (self.renderer.render(&outcome), outcome.is_found())
    }

    /// Look up each query and write one rendered line per query
    ///
    /// Returns whether every query was found.
    pub fn run_queries<I, S, W>(&self, queries: I, out: &mut W) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        let mut all_found = true;
        for query in queries {
            let (line, found) = self.render_lookup(query.as_ref());
            writeln!(out, "{line}")?;
            all_found &= found;
        }
        Ok(all_found)
    }

    /// Line-oriented interactive session: one lookup per input line until EOF
    ///
    /// `prompt` is written before each read when present.
    pub fn run_interactive<R, W>(&self, input: R, out: &mut W, prompt: Option<&str>) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        let mut lines = input.lines();
        loop {
            if let Some(prompt) = prompt {
                write!(out, "{prompt}")?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let (rendered, _) = self.render_lookup(&line?);
            writeln!(out, "{rendered}")?;
        }
        Ok(())
    }
}
