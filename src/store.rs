//! Store Module
//!
//! The reservation store that owns all in-memory state.
//!
//! ## Responsibilities
//! - Seed the room catalog and load accounts/reservations from disk
//! - Answer identity, authentication, and availability queries
//! - Accept new accounts and bookings
//! - Write everything back to the record files on request

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::{Result, StoreError};
use crate::model::{Account, Reservation, Room, RoomCatalog, RoomNumber, TimeInterval};
use crate::records::{
    AccountRecord, LoadReport, ReadOutcome, RecordReader, RecordWriter, ReservationRecord,
    SaveReport,
};

/// A store shared between threads behind a single lock
pub type SharedStore = Arc<Mutex<ReservationStore>>;

/// The in-memory reservation store
///
/// ## Concurrency Model: Exclusive Access
///
/// - Queries take `&self`, mutations take `&mut self`
/// - No internal locking: one owner at a time, enforced by the borrow checker
/// - Threads that need to share a store use [`SharedStore`]
///   (one `parking_lot::Mutex` around the whole store)
///
/// ## Booking conflicts
/// [`ReservationStore::book`] does not check availability. Callers run
/// [`ReservationStore::is_room_available`] right before booking.
#[derive(Debug)]
pub struct ReservationStore {
    /// Store configuration (owns the room catalog)
    config: Config,

    /// Path of the account record file
    accounts_path: PathBuf,

    /// Path of the reservation record file
    reservations_path: PathBuf,

    /// All accounts, in load/insertion order; each owns its reservations
    accounts: Vec<Account>,

    /// Outcome of the most recent load attempt
    last_load_ok: bool,
}

impl ReservationStore {
    // =========================================================================
    // Internal Path Constants
    // =========================================================================
    pub const ACCOUNTS_FILENAME: &'static str = "accounts.txt";
    pub const RESERVATIONS_FILENAME: &'static str = "reservations.txt";

    /// Open a store with the given config
    ///
    /// On startup:
    /// 1. Create data directory if needed
    /// 2. Seed the room catalog from config
    /// 3. Load record files (if `load_on_open`)
    ///
    /// A failed load does not fail the open; check
    /// [`ReservationStore::last_load_succeeded`].
    pub fn open(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.data_dir)?;

        let accounts_path = config.data_dir.join(Self::ACCOUNTS_FILENAME);
        let reservations_path = config.data_dir.join(Self::RESERVATIONS_FILENAME);
        let load_on_open = config.load_on_open;

        let mut store = Self {
            config,
            accounts_path,
            reservations_path,
            accounts: Vec::new(),
            last_load_ok: false,
        };

        if load_on_open {
            store.load_from_storage();
        }

        Ok(store)
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_dir(path).build())
    }

    /// Wrap the store for sharing between threads
    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Load both record files, logging any failure
    ///
    /// Returns false if either file could not be read.
    pub fn load_from_storage(&mut self) -> bool {
        match self.load() {
            Ok(_) => true,
            Err(e) => {
                error!(
                    data_dir = %self.config.data_dir.display(),
                    "Failed to load record files: {}", e
                );
                false
            }
        }
    }

    /// Load both record files, replacing the in-memory accounts
    ///
    /// Steps:
    /// 1. Open both files (missing file → error, state untouched)
    /// 2. Read accounts, indexing them in order
    /// 3. Read reservations, resolving username and room number
    /// 4. Swap the loaded accounts in
    ///
    /// Rows that are malformed, duplicate an account, or reference an
    /// unknown account/room are skipped with a warning.
    ///
    /// The files replace the in-memory accounts rather than add to them:
    /// accounts and bookings made since the last save are discarded. Call
    /// [`ReservationStore::save`] first to keep them.
    pub fn load(&mut self) -> Result<LoadReport> {
        let result = self.read_records();
        self.last_load_ok = result.is_ok();
        let (accounts, report) = result?;

        // Step 4: Swap in
        self.accounts = accounts;

        info!(
            accounts = report.accounts_loaded,
            reservations = report.reservations_loaded,
            skipped = report.records_skipped(),
            "Loaded record files"
        );

        Ok(report)
    }

    /// Steps 1-3 of [`ReservationStore::load`]; leaves `self` untouched
    fn read_records(&self) -> Result<(Vec<Account>, LoadReport)> {
        let account_rows = RecordReader::open(&self.accounts_path)?;
        let reservation_rows = RecordReader::open(&self.reservations_path)?;
        if account_rows.is_legacy() || reservation_rows.is_legacy() {
            debug!("Reading legacy comma-space record files");
        }

        let mut accounts: Vec<Account> = Vec::new();
        let mut report = LoadReport::default();

        // Step 2: Accounts
        for outcome in account_rows.records::<AccountRecord>() {
            match outcome? {
                ReadOutcome::Record { line, record } => {
                    if accounts.iter().any(|a| a.username() == record.username) {
                        warn!(line, username = %record.username, "Skipping duplicate account");
                        report.duplicate_accounts += 1;
                        continue;
                    }
                    let index = accounts.len();
                    accounts.push(record.into_account(index));
                    report.accounts_loaded += 1;
                }
                ReadOutcome::Malformed { line, message } => {
                    warn!(line, "Skipping malformed account record: {}", message);
                    report.records_malformed += 1;
                }
            }
        }

        // Step 3: Reservations
        for outcome in reservation_rows.records::<ReservationRecord>() {
            let (line, record) = match outcome? {
                ReadOutcome::Record { line, record } => (line, record),
                ReadOutcome::Malformed { line, message } => {
                    warn!(line, "Skipping malformed reservation record: {}", message);
                    report.records_malformed += 1;
                    continue;
                }
            };

            let Some(account) = accounts
                .iter_mut()
                .find(|a| a.username() == record.username)
            else {
                warn!(line, username = %record.username, "Couldn't find account for reservation");
                report.reservations_unresolved += 1;
                continue;
            };

            let Some(room) = self.config.catalog.find(record.room_number).copied() else {
                warn!(line, room = record.room_number, "Couldn't find room for reservation");
                report.reservations_unresolved += 1;
                continue;
            };

            let interval = match record.interval() {
                Ok(interval) => interval,
                Err(e) => {
                    warn!(line, "Skipping reservation with bad dates: {}", e);
                    report.records_malformed += 1;
                    continue;
                }
            };

            if !interval.is_well_formed() {
                warn!(line, %interval, "Reservation ends before it starts");
            }

            account.add_reservation(Reservation::new(record.username, room, interval));
            report.reservations_loaded += 1;
        }

        Ok((accounts, report))
    }

    /// Save both record files, logging any failure
    pub fn save_to_storage(&self) -> bool {
        match self.save() {
            Ok(_) => true,
            Err(e) => {
                error!(
                    data_dir = %self.config.data_dir.display(),
                    "Failed to save record files: {}", e
                );
                false
            }
        }
    }

    /// Rewrite both record files from the in-memory state
    ///
    /// Not atomic: a failure leaves the file being written truncated.
    pub fn save(&self) -> Result<SaveReport> {
        let mut account_out = RecordWriter::create(&self.accounts_path)?;
        let mut reservation_out = RecordWriter::create(&self.reservations_path)?;

        for account in &self.accounts {
            account_out.write(&AccountRecord::from_account(account))?;
            for reservation in account.reservations() {
                reservation_out.write(&ReservationRecord::from_reservation(reservation))?;
            }
        }

        let report = SaveReport {
            accounts_written: account_out.finish()?,
            reservations_written: reservation_out.finish()?,
        };

        info!(
            accounts = report.accounts_written,
            reservations = report.reservations_written,
            "Saved record files"
        );

        Ok(report)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Exact-match lookup by username
    pub fn find_account_by_username(&self, username: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.username() == username)
    }

    /// Lookup within the room's hundreds band
    pub fn find_room_by_number(&self, number: RoomNumber) -> Option<&Room> {
        self.config.catalog.find(number)
    }

    /// True iff some account has exactly this username and password
    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.accounts
            .iter()
            .any(|a| a.username() == username && a.password() == password)
    }

    pub fn list_accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// All rooms, available or not, in catalog order
    pub fn list_rooms(&self) -> &[Room] {
        self.config.catalog.rooms()
    }

    /// Rooms free for the whole of `duration`, in catalog order
    ///
    /// A room is removed if any reservation on it overlaps `duration`
    /// (touching on a boundary day counts).
    pub fn available_rooms(&self, duration: &TimeInterval) -> Vec<Room> {
        let mut available = self.config.catalog.rooms().to_vec();

        for reservation in self.accounts.iter().flat_map(Account::reservations) {
            if reservation.interval().overlap(duration) {
                available.retain(|room| room != reservation.room());
            }
        }

        available
    }

    /// Advisory check: is `number` a catalog room with no overlapping reservation?
    pub fn is_room_available(&self, number: RoomNumber, duration: &TimeInterval) -> bool {
        self.find_room_by_number(number).is_some()
            && !self
                .accounts
                .iter()
                .flat_map(Account::reservations)
                .any(|r| r.room().number() == number && r.interval().overlap(duration))
    }

    /// Every reservation on a room, in account order
    pub fn reservations_for_room(&self, number: RoomNumber) -> Vec<&Reservation> {
        self.accounts
            .iter()
            .flat_map(Account::reservations)
            .filter(|r| r.room().number() == number)
            .collect()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Insert an account unless its username is taken
    pub fn add_account(&mut self, account: Account) -> bool {
        if self.find_account_by_username(account.username()).is_some() {
            debug!(username = account.username(), "Rejecting duplicate username");
            return false;
        }

        debug!(username = account.username(), role = account.role().as_str(), "Adding account");
        self.accounts.push(account);
        true
    }

    /// Attach a reservation to an account
    ///
    /// Resolves the account and room; does NOT check availability.
    pub fn book(
        &mut self,
        username: &str,
        room_number: RoomNumber,
        interval: TimeInterval,
    ) -> Result<&Reservation> {
        if !interval.is_well_formed() {
            return Err(StoreError::InvalidInterval {
                start: interval.start(),
                end: interval.end(),
            });
        }

        let room = *self
            .find_room_by_number(room_number)
            .ok_or(StoreError::UnknownRoom(room_number))?;

        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.username() == username)
            .ok_or_else(|| StoreError::UnknownAccount(username.to_string()))?;

        debug!(username, room = room_number, %interval, "Booking room");
        Ok(account.add_reservation(Reservation::new(username, room, interval)))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Whether the most recent load succeeded
    pub fn last_load_succeeded(&self) -> bool {
        self.last_load_ok
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Total reservations across all accounts
    pub fn reservation_count(&self) -> usize {
        self.accounts.iter().map(|a| a.reservations().len()).sum()
    }

    pub fn catalog(&self) -> &RoomCatalog {
        &self.config.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    pub fn accounts_path(&self) -> &Path {
        &self.accounts_path
    }

    pub fn reservations_path(&self) -> &Path {
        &self.reservations_path
    }
}
