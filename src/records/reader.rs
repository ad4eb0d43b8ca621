//! Record Reader
//!
//! Reads rows from a record file. Rows that cannot be decoded are reported
//! as [`ReadOutcome::Malformed`] so the caller can skip them; only I/O
//! failures end the read.
//!
//! The layout is picked per file from its first non-empty line:
//! - starts with `"` → CSV as written by [`RecordWriter`](super::RecordWriter)
//! - anything else → legacy rows split on [`LEGACY_SEPARATOR`]
//!
//! Field contents are never trimmed in either layout.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::marker::PhantomData;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use super::Record;
use crate::error::Result;

/// Field separator of files written before the CSV format
pub const LEGACY_SEPARATOR: &str = ", ";

/// Result of reading one row
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome<T> {
    /// Row decoded successfully
    Record { line: u64, record: T },

    /// Row present but not decodable
    Malformed { line: u64, message: String },
}

enum Rows {
    Csv(csv::Reader<BufReader<File>>),
    Legacy {
        lines: Lines<BufReader<File>>,
        line: u64,
    },
}

/// Opens record files for reading
pub struct RecordReader {
    rows: Rows,
}

impl RecordReader {
    /// Open a record file; fails if the file does not exist
    pub fn open(path: &Path) -> Result<Self> {
        let mut file = BufReader::new(File::open(path)?);

        // fill_buf peeks without consuming
        let legacy = file
            .fill_buf()?
            .iter()
            .copied()
            .find(|b| !matches!(b, b'\r' | b'\n'))
            .is_some_and(|b| b != b'"');

        let rows = if legacy {
            Rows::Legacy {
                lines: file.lines(),
                line: 0,
            }
        } else {
            Rows::Csv(
                ReaderBuilder::new()
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(file),
            )
        };

        Ok(Self { rows })
    }

    /// Whether the file uses the legacy `, ` layout
    pub fn is_legacy(&self) -> bool {
        matches!(self.rows, Rows::Legacy { .. })
    }

    /// Iterate over the rows as records of type `T`
    pub fn records<T: Record>(self) -> RecordIter<T> {
        RecordIter {
            rows: self.rows,
            row: StringRecord::new(),
            _marker: PhantomData,
        }
    }
}

/// Iterator over decoded rows
pub struct RecordIter<T> {
    rows: Rows,
    row: StringRecord,
    _marker: PhantomData<T>,
}

impl<T: Record> Iterator for RecordIter<T> {
    type Item = Result<ReadOutcome<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.rows {
            Rows::Csv(reader) => match reader.read_record(&mut self.row) {
                Ok(false) => None,
                Ok(true) => {
                    let line = self.row.position().map_or(0, |p| p.line());
                    Some(Ok(decode(&self.row, line)))
                }
                Err(e) if e.is_io_error() => Some(Err(e.into())),
                Err(e) => {
                    let line = e.position().map_or(0, |p| p.line());
                    Some(Ok(ReadOutcome::Malformed {
                        line,
                        message: e.to_string(),
                    }))
                }
            },
            Rows::Legacy { lines, line } => loop {
                let text = match lines.next()? {
                    Ok(text) => text,
                    Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                        *line += 1;
                        return Some(Ok(ReadOutcome::Malformed {
                            line: *line,
                            message: e.to_string(),
                        }));
                    }
                    Err(e) => return Some(Err(e.into())),
                };
                *line += 1;

                if text.is_empty() {
                    continue;
                }

                let row: StringRecord = text.split(LEGACY_SEPARATOR).collect();
                return Some(Ok(decode(&row, *line)));
            },
        }
    }
}

fn decode<T: Record>(row: &StringRecord, line: u64) -> ReadOutcome<T> {
    if row.len() != T::FIELDS {
        return ReadOutcome::Malformed {
            line,
            message: format!("expected {} fields, found {}", T::FIELDS, row.len()),
        };
    }

    match row.deserialize::<T>(None) {
        Ok(record) => ReadOutcome::Record { line, record },
        Err(e) => ReadOutcome::Malformed {
            line,
            message: e.to_string(),
        },
    }
}
