//! Load and save reports

/// What a load did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Accounts added to the store
    pub accounts_loaded: u64,

    /// Account rows skipped because the username was already loaded
    pub duplicate_accounts: u64,

    /// Reservations attached to accounts
    pub reservations_loaded: u64,

    /// Reservation rows skipped because the account or room is unknown
    pub reservations_unresolved: u64,

    /// Rows in either file that could not be decoded
    pub records_malformed: u64,
}

impl LoadReport {
    /// Total rows skipped for any reason
    pub fn records_skipped(&self) -> u64 {
        self.duplicate_accounts + self.reservations_unresolved + self.records_malformed
    }
}

/// What a save did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveReport {
    pub accounts_written: u64,
    pub reservations_written: u64,
}
