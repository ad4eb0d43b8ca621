//! # hotel-store
//!
//! The persistence and query layer of a small hotel reservation tool:
//! - Accounts (guest or manager) with plain-text credentials
//! - A fixed catalog of rooms grouped into hundreds bands
//! - Reservations over closed date intervals
//! - Load/save to two line-oriented record files
//! - Room availability queries
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     ReservationStore                        │
//! │     (lookups, authentication, availability, booking)        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌──────────────┐
//!   │   Records   │          │    Model     │
//!   │ (load/save) │          │  (in-memory) │
//!   └──────┬──────┘          └──────────────┘
//!          │
//!          ▼
//!   accounts.txt / reservations.txt
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod model;
pub mod records;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::Config;
pub use error::{Result, StoreError};
pub use model::{Account, Reservation, Role, Room, RoomCatalog, RoomNumber, TimeInterval};
pub use records::{LoadReport, SaveReport};
pub use store::{ReservationStore, SharedStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of hotel-store
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
