//! Rooms and the room catalog
//!
//! The catalog is fixed at startup and never persisted. Rooms are grouped
//! into bands by hundreds digit (1xx, 5xx, ...) so lookups only scan the
//! band a number falls into.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use std::ops::Range;

use crate::error::{Result, StoreError};

/// Room number (e.g. 110, 540)
pub type RoomNumber = u32;

/// A bookable room
///
/// Equality and hashing use the room number only.
#[derive(Debug, Clone, Copy)]
pub struct Room {
    number: RoomNumber,
    nightly_rate: u32,
}

impl Room {
    pub fn new(number: RoomNumber, nightly_rate: u32) -> Self {
        Self {
            number,
            nightly_rate,
        }
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    pub fn nightly_rate(&self) -> u32 {
        self.nightly_rate
    }

    /// Hundreds digit(s) of the room number
    fn band(&self) -> u32 {
        self.number / 100
    }
}

impl PartialEq for Room {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Room {}

impl Hash for Room {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

/// Fixed, ordered set of rooms with a band index
#[derive(Debug, Clone)]
pub struct RoomCatalog {
    /// Rooms sorted by number
    rooms: Vec<Room>,

    /// Band (number / 100) → index range into `rooms`
    bands: BTreeMap<u32, Range<usize>>,
}

impl RoomCatalog {
    /// Rates for the two standard bands
    pub const STANDARD_RATE: u32 = 100;
    pub const PREMIUM_RATE: u32 = 300;

    /// The standard catalog: 100..=190 at 100, 500..=590 at 300
    pub fn standard() -> Self {
        let standard = (100..=190).step_by(10).map(|n| Room::new(n, Self::STANDARD_RATE));
        let premium = (500..=590).step_by(10).map(|n| Room::new(n, Self::PREMIUM_RATE));

        Self::index(standard.chain(premium).collect())
    }

    /// Build a catalog from an arbitrary room list
    ///
    /// Rooms are sorted by number. Duplicate numbers and empty lists are rejected.
    pub fn from_rooms(mut rooms: Vec<Room>) -> Result<Self> {
        if rooms.is_empty() {
            return Err(StoreError::Config("room catalog is empty".to_string()));
        }

        rooms.sort_by_key(Room::number);
        if let Some(pair) = rooms.windows(2).find(|w| w[0].number == w[1].number) {
            return Err(StoreError::Config(format!(
                "duplicate room number in catalog: {}",
                pair[0].number
            )));
        }

        Ok(Self::index(rooms))
    }

    /// Build the band index over rooms already sorted by number
    fn index(rooms: Vec<Room>) -> Self {
        let mut bands: BTreeMap<u32, Range<usize>> = BTreeMap::new();
        for (i, room) in rooms.iter().enumerate() {
            bands
                .entry(room.band())
                .and_modify(|range| range.end = i + 1)
                .or_insert(i..i + 1);
        }
        Self { rooms, bands }
    }

    /// Find a room by number, scanning only its band
    pub fn find(&self, number: RoomNumber) -> Option<&Room> {
        let range = self.bands.get(&(number / 100))?;
        self.rooms[range.clone()]
            .iter()
            .find(|room| room.number == number)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Band digits present in the catalog, ascending
    pub fn bands(&self) -> impl Iterator<Item = u32> + '_ {
        self.bands.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
