//! Presentation of lookup outcomes.
//!
//! The core only reports an index or "not found"; everything a user reads is
//! produced here. Messages are Danish, matching the word lists this tool is
//! used with.

use crate::app::LookupOutcome;
use crate::record::WordRecord;

/// Shown when the query is empty after trimming
pub const MSG_EMPTY_QUERY: &str = "Indtast venligst et ord.";
/// Prefix for a successful lookup
pub const MSG_FOUND: &str = "Fundet";
/// Shown when no record matches
pub const MSG_NOT_FOUND: &str = "Ord ikke fundet.";

/// Turns a lookup outcome into one line of user-facing text
pub trait ResultRenderer {
    /// Format `outcome` without a trailing newline
    fn render(&self, outcome: &LookupOutcome<'_>) -> String;
}

/// `Fundet: <variant> (<part of speech>)`
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl ResultRenderer for TextRenderer {
    fn render(&self, outcome: &LookupOutcome<'_>) -> String {
        match outcome {
            LookupOutcome::EmptyQuery => MSG_EMPTY_QUERY.to_string(),
            LookupOutcome::Found { record, .. } => format!(
                "{MSG_FOUND}: {} ({})",
                record.variant(),
                record.part_of_speech()
            ),
            LookupOutcome::NotFound { .. } => MSG_NOT_FOUND.to_string(),
        }
    }
}

/// Like [`TextRenderer`], plus headword, homograph and identifier
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailedRenderer;

impl DetailedRenderer {
    fn describe(record: &WordRecord) -> String {
        let mut line = format!(
            "{MSG_FOUND}: {} ({}) opslagsord: {}",
            record.variant(),
            record.part_of_speech(),
            record.headword()
        );
        if !record.homograph().is_empty() {
            line.push_str(&format!(" [{}]", record.homograph()));
        }
        line.push_str(&format!(" id: {}", record.id()));
        line
    }
}

impl ResultRenderer for DetailedRenderer {
    fn render(&self, outcome: &LookupOutcome<'_>) -> String {
        match outcome {
            LookupOutcome::Found { record, .. } => Self::describe(record),
            LookupOutcome::NotFound { query } => format!("{MSG_NOT_FOUND} ({query})"),
            LookupOutcome::EmptyQuery => TextRenderer.render(outcome),
        }
    }
}
