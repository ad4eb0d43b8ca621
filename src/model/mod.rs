//! Model Module
//!
//! In-memory entities held by the reservation store.
//!
//! ## Responsibilities
//! - Closed date intervals and their overlap rule
//! - Rooms and the fixed, banded room catalog
//! - Accounts (guest or manager) and the reservations they own
//!
//! ## Ownership
//! ```text
//! ReservationStore
//!   ├── RoomCatalog ── Room, Room, ...          (fixed at startup)
//!   └── Vec<Account>
//!         └── Vec<Reservation>
//!               ├── account: username       (back-reference by key)
//!               ├── room: Room              (copy of catalog entry)
//!               └── interval: TimeInterval  (owned)
//! ```

mod account;
pub(crate) mod interval;
mod reservation;
mod room;

pub use account::{Account, Role};
pub use interval::{TimeInterval, DATE_FORMAT};
pub use reservation::Reservation;
pub use room::{Room, RoomCatalog, RoomNumber};
