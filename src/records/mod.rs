//! Record Files Module
//!
//! Durable line-oriented storage for accounts and reservations.
//!
//! ## Responsibilities
//! - Map in-memory accounts/reservations to flat records and back
//! - Read record files, separating malformed lines from I/O failures
//! - Rewrite record files in full on save
//! - Report what a load or save did
//!
//! ## File Format
//! One record per line, no header, every field quoted. Field contents are
//! kept exactly, surrounding whitespace included. Files written with the
//! older unquoted `, ` separator are detected and still load.
//!
//! ```text
//! accounts.txt
//! ┌────────┬──────────┬──────────┬───────────┐
//! │ name   │ username │ password │ isManager │
//! └────────┴──────────┴──────────┴───────────┘
//!   "Smith, Ann","ann","pw1","false"
//!
//! reservations.txt
//! ┌──────────┬────────────┬────────────┬────────────┐
//! │ username │ roomNumber │ MM/dd/yyyy │ MM/dd/yyyy │
//! └──────────┴────────────┴────────────┴────────────┘
//!   "ann","110","01/10/2024","01/12/2024"
//! ```

mod entry;
mod reader;
mod report;
mod writer;

pub use entry::{AccountRecord, Record, ReservationRecord};
pub use reader::{ReadOutcome, RecordIter, RecordReader, LEGACY_SEPARATOR};
pub use report::{LoadReport, SaveReport};
pub use writer::RecordWriter;
