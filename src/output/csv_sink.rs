// src/output/csv_sink.rs
// =============================================================================
// This module writes the final records as a CSV table.
//
// - The header row is always written, even for zero records
// - Columns follow ExhibitorRecord::columns()
// - Lines end in "\n"; fields with commas, quotes or newlines are quoted
// - An existing file at the destination is overwritten
// =============================================================================

use std::io;
use std::path::Path;

use crate::error::ScrapeError;
use crate::scrape::ExhibitorRecord;

pub const HEADER: [&str; 7] = [
    "Company_Name",
    "Link_Company",
    "Booth_Number",
    "Link_Booth",
    "About the Company",
    "Company's Categories",
    "Digital Press Releases",
];

// Writes the header and one row per record to any writer
pub fn write_records<W: io::Write>(records: &[ExhibitorRecord], writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for record in records {
        csv_writer.write_record(record.columns())?;
    }
    csv_writer.flush()?;

    Ok(())
}

// Writes the table to `path`, replacing any existing file
pub fn write_csv(records: &[ExhibitorRecord], path: &Path) -> Result<(), ScrapeError> {
    let to_output_error = |source: csv::Error| ScrapeError::Output {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::create(path).map_err(|e| to_output_error(e.into()))?;
    write_records(records, file).map_err(to_output_error)
}
