//! Record Writer
//!
//! Rewrites a record file from scratch. Not atomic: a failure part way
//! through leaves the file truncated at that point.
//!
//! Every field is quoted, so surrounding whitespace survives a reload and
//! the reader can tell these files apart from legacy ones.

use std::fs::File;
use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};

use super::Record;
use crate::error::Result;

/// Writes records to a freshly truncated file
pub struct RecordWriter {
    writer: csv::Writer<File>,
    written: u64,
}

impl RecordWriter {
    /// Create or truncate a record file
    pub fn create(path: &Path) -> Result<Self> {
        let writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Always)
            .from_path(path)?;

        Ok(Self { writer, written: 0 })
    }

    /// Append one record
    pub fn write<T: Record>(&mut self, record: &T) -> Result<()> {
        self.writer.serialize(record)?;
        self.written += 1;
        Ok(())
    }

    /// Records written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush buffered rows to disk and return the record count
    pub fn finish(mut self) -> Result<u64> {
        self.writer.flush()?;
        Ok(self.written)
    }
}
