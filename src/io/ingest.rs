//! Title CSV ingest.
//!
//! The first row is always skipped, whatever it contains. Every following
//! row contributes its first column as a title; any extra columns (e.g. the
//! enrichment of a previous run) are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::TitleQuery;
use crate::error::AppError;

/// Read the ordered titles from the table at `path`.
pub fn load_titles(path: &Path) -> Result<Vec<TitleQuery>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::resource(format!("Failed to open CSV '{}': {e}", path.display())))?;
    read_titles(file)
        .map_err(|e| AppError::new(e.exit_code(), format!("{}: {e}", path.display())))
}

/// Read titles from any CSV source.
///
/// A blank line after the header is a row without a title, just like a row
/// whose first column is empty.
pub fn read_titles<R: Read>(mut source: R) -> Result<Vec<TitleQuery>, AppError> {
    let mut input = Vec::new();
    source
        .read_to_end(&mut input)
        .map_err(|e| AppError::resource(format!("Failed to read CSV: {e}")))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input.as_slice());

    let mut record = StringRecord::new();
    let mut titles = Vec::new();
    let mut seen_header = false;
    let mut prev_ended_cr = false;

    loop {
        let start = reader.position().clone();
        let more = reader
            .read_record(&mut record)
            .map_err(|e| AppError::resource(format!("Failed to read CSV: {e}")))?;
        let consumed = &input[start.byte() as usize..reader.position().byte() as usize];

        // The reader starts each read where the previous record ended, so a
        // read that begins inside a CRLF terminator is one line behind.
        let line = start.line() as usize + usize::from(prev_ended_cr);
        if seen_header && skipped_blank_line(consumed, prev_ended_cr) {
            return Err(AppError::format(format!("line {line}: row has no title")));
        }
        prev_ended_cr = consumed.last() == Some(&b'\r');

        if !more {
            break;
        }
        if !seen_header {
            seen_header = true;
            continue;
        }

        let title = match record.get(0) {
            Some(t) if !t.trim().is_empty() => t.to_string(),
            _ => {
                return Err(AppError::format(format!("line {line}: row has no title")));
            }
        };
        titles.push(TitleQuery { title, line });
    }

    Ok(titles)
}

/// Whether the bytes consumed by one read start with an empty line.
///
/// The csv reader drops empty lines silently; they show up only as line
/// terminators ahead of the record.
fn skipped_blank_line(consumed: &[u8], prev_ended_cr: bool) -> bool {
    let mut lead = consumed;
    // `\n` of the previous record's CRLF.
    if prev_ended_cr && lead.first() == Some(&b'\n') {
        lead = &lead[1..];
    }
    matches!(lead.first(), Some(b'\r' | b'\n'))
}
