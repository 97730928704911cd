//! Write enriched records back to a CSV table.
//!
//! The target is truncated before writing; nothing of the previous content
//! is kept.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{EnrichedRecord, OUTPUT_HEADER};
use crate::error::AppError;

/// Overwrite `path` with the header and one row per record, in order.
pub fn write_records_csv(path: &Path, records: &[EnrichedRecord]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::resource(format!("Failed to create CSV '{}': {e}", path.display())))?;
    write_records(file, records)
        .map_err(|e| AppError::resource(format!("Failed to write CSV '{}': {e}", path.display())))
}

/// Serialize the header and records to any writer.
pub fn write_records<W: Write>(sink: W, records: &[EnrichedRecord]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(OUTPUT_HEADER)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.flush()?;
    Ok(())
}
