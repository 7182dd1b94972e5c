//! Tab-separated word list parsing.
//!
//! Each line holds exactly [`FIELD_COUNT`] fields in the order
//! `variant, headword, homograph, partOfSpeech, id`. Lines end in `\n` or
//! `\r\n`; blank lines at the end of the file are ignored, blank lines anywhere
//! else are malformed records. Line boundaries are found with memchr.

use crate::error::{LookupError, Result};
use crate::record::WordRecord;
use memchr::memchr;

/// Number of tab-separated columns in a word list line
pub const FIELD_COUNT: usize = 5;

const FIELD_SEPARATOR: char = '\t';
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse a complete word list into records, preserving file order
///
/// Sortedness is not checked here; see
/// [`RecordStore::from_unsorted_checked`](crate::store::RecordStore::from_unsorted_checked).
pub fn parse_word_list(data: &[u8]) -> Result<Vec<WordRecord>> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    let data = trim_trailing_newlines(data);

    if data.is_empty() {
        return Ok(Vec::new());
    }

    // One record per line once trailing newlines are gone
    let estimated = memchr::memchr_iter(b'\n', data).count() + 1;
    let mut records = Vec::with_capacity(estimated);

    let mut pos = 0;
    let mut line_number = 1;
    while pos <= data.len() {
        let end = match memchr(b'\n', &data[pos..]) {
            Some(offset) => pos + offset,
            None => data.len(),
        };

        let raw = &data[pos..end];
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = std::str::from_utf8(raw).map_err(|e| {
            LookupError::malformed(
                line_number,
                format!("invalid UTF-8 at byte {}", e.valid_up_to()),
            )
        })?;

        records.push(parse_line(line, line_number)?);

        pos = end + 1;
        line_number += 1;
    }

    Ok(records)
}

/// Parse one line (without its terminator) into a record
///
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_line(line: &str, line_number: usize) -> Result<WordRecord> {
    let mut fields = line.split(FIELD_SEPARATOR);

    let mut columns: [&str; FIELD_COUNT] = [""; FIELD_COUNT];
    for (index, slot) in columns.iter_mut().enumerate() {
        *slot = fields.next().ok_or_else(|| {
            LookupError::malformed(
                line_number,
                format!("expected {FIELD_COUNT} tab-separated fields, found {index}"),
            )
        })?;
    }

    let extra = fields.count();
    if extra > 0 {
        return Err(LookupError::malformed(
            line_number,
            format!(
                "expected {FIELD_COUNT} tab-separated fields, found {}",
                FIELD_COUNT + extra
            ),
        ));
    }

    let [variant, headword, homograph, part_of_speech, id] = columns;
    Ok(WordRecord::new(
        variant,
        headword,
        homograph,
        part_of_speech,
        id,
    ))
}

fn trim_trailing_newlines(mut data: &[u8]) -> &[u8] {
    while let Some((&last, rest)) = data.split_last() {
        if last == b'\n' || last == b'\r' {
            data = rest;
        } else {
            break;
        }
    }
    data
}
