//! Time intervals
//!
//! Closed calendar-date ranges used by reservations and availability queries.

use std::fmt;

use chrono::NaiveDate;

use crate::error::Result;

/// Date format used in record files and on the command line (`MM/dd/yyyy`)
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Closed interval `[start, end]` of calendar days
///
/// `start <= end` is expected but not enforced here; see
/// [`TimeInterval::is_well_formed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl TimeInterval {
    /// Create an interval from two dates
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse an interval from two `MM/dd/yyyy` strings
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// True iff the two intervals share at least one day.
    ///
    /// Both ends are inclusive, so intervals touching on a single day
    /// (`self.end == other.start`) overlap.
    pub fn overlap(&self, other: &TimeInterval) -> bool {
        !(self.end < other.start || other.end < self.start)
    }

    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// Number of nights between start and end (negative if inverted)
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format(DATE_FORMAT),
            self.end.format(DATE_FORMAT)
        )
    }
}

/// Parse a single `MM/dd/yyyy` date
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
}

/// Format a date as `MM/dd/yyyy`
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
