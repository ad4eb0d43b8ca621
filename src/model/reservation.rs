//! Reservations

use super::{Room, TimeInterval};

/// A room booked by an account for a closed date interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    /// Username of the owning account
    account: String,
    room: Room,
    interval: TimeInterval,
}

impl Reservation {
    pub fn new(account: impl Into<String>, room: Room, interval: TimeInterval) -> Self {
        Self {
            account: account.into(),
            room,
            interval,
        }
    }

    /// Username of the account holding this reservation
    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn interval(&self) -> &TimeInterval {
        &self.interval
    }

    /// Nights × nightly rate; inverted intervals cost nothing
    pub fn total_cost(&self) -> u64 {
        let nights = self.interval.nights().max(0) as u64;
        nights * u64::from(self.room.nightly_rate())
    }

    pub(crate) fn rebind(&mut self, username: &str) {
        if self.account != username {
            self.account = username.to_string();
        }
    }
}
