//! Record definitions
//!
//! Flat, serde-friendly shapes of the two record kinds.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::interval::format_date;
use crate::model::{Account, Reservation, Role, RoomNumber, TimeInterval};

/// A row in one of the record files
pub trait Record: Serialize + DeserializeOwned {
    /// Number of fields a well-formed row carries
    const FIELDS: usize;
}

/// One line of `accounts.txt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub name: String,
    pub username: String,
    pub password: String,
    #[serde(deserialize_with = "manager_flag")]
    pub is_manager: bool,
}

impl Record for AccountRecord {
    const FIELDS: usize = 4;
}

impl AccountRecord {
    pub fn from_account(account: &Account) -> Self {
        Self {
            name: account.name().to_string(),
            username: account.username().to_string(),
            password: account.password().to_string(),
            is_manager: account.is_manager(),
        }
    }

    /// Build the account this record describes, tagged with its load index
    pub fn into_account(self, index: usize) -> Account {
        Account::new(
            self.name,
            self.username,
            self.password,
            Role::from_manager_flag(self.is_manager),
        )
        .with_index(index)
    }
}

/// One line of `reservations.txt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRecord {
    pub username: String,
    pub room_number: RoomNumber,
    /// `MM/dd/yyyy`
    pub start: String,
    /// `MM/dd/yyyy`
    pub end: String,
}

impl Record for ReservationRecord {
    const FIELDS: usize = 4;
}

impl ReservationRecord {
    pub fn from_reservation(reservation: &Reservation) -> Self {
        let interval = reservation.interval();
        Self {
            username: reservation.account().to_string(),
            room_number: reservation.room().number(),
            start: format_date(interval.start()),
            end: format_date(interval.end()),
        }
    }

    /// Parse the stored dates
    pub fn interval(&self) -> Result<TimeInterval> {
        TimeInterval::parse(&self.start, &self.end)
    }
}

/// `true`/`false` in any letter case, surrounding whitespace ignored
fn manager_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let flag = raw.trim();
    if flag.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if flag.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(de::Error::custom(format!("invalid manager flag: {raw:?}")))
    }
}
