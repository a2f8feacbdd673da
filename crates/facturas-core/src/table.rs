//! Tabular output of extracted records.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::record::{ExtractedRecord, HEADERS};

/// Writes records as a header row plus one row per record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableWriter {
    format: OutputFormat,
}

impl TableWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Write `records` to any writer, in input order.
    pub fn write<W: Write>(&self, records: &[ExtractedRecord], destination: W) -> Result<()> {
        match self.format {
            OutputFormat::Csv => write_csv(records, destination),
            OutputFormat::Json => write_json(records, destination),
        }
    }

    /// Create (or truncate) `path` and write `records` to it.
    pub fn write_to_path(&self, records: &[ExtractedRecord], path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write(records, &mut writer)?;
        writer.flush()?;
        debug!("Wrote {} records to {}", records.len(), path.display());
        Ok(())
    }
}

fn write_csv<W: Write>(records: &[ExtractedRecord], destination: W) -> Result<()> {
    // CRLF rows, minimal quoting: what spreadsheet tools expect
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(destination);

    wtr.write_record(HEADERS)?;
    for record in records {
        wtr.write_record(record.to_row())?;
    }

    wtr.flush()?;
    Ok(())
}

fn write_json<W: Write>(records: &[ExtractedRecord], mut destination: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut destination, records)?;
    destination.write_all(b"\n")?;
    Ok(())
}
