//! Tests for Account and Reservation
//!
//! These tests verify:
//! - Role flag handling
//! - Reservation attachment (no overlap check, back-reference rebinding)
//! - Reservation cost

use chrono::NaiveDate;
use hotel_store::model::{Account, Reservation, Role, Room, TimeInterval};

fn stay(start_day: u32, end_day: u32) -> TimeInterval {
    TimeInterval::new(
        NaiveDate::from_ymd_opt(2024, 1, start_day).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, end_day).unwrap(),
    )
}

// =============================================================================
// Role Tests
// =============================================================================

#[test]
fn test_guest_and_manager() {
    let guest = Account::guest("Alice", "alice", "pw");
    let manager = Account::manager("Bob", "bob", "pw");

    assert!(!guest.is_manager());
    assert_eq!(guest.role(), Role::Guest);
    assert!(manager.is_manager());
    assert_eq!(manager.role(), Role::Manager);
}

#[test]
fn test_role_from_manager_flag() {
    assert_eq!(Role::from_manager_flag(true), Role::Manager);
    assert_eq!(Role::from_manager_flag(false), Role::Guest);
}

#[test]
fn test_index_hint() {
    let account = Account::guest("Alice", "alice", "pw");
    assert_eq!(account.index(), None);

    let account = account.with_index(3);
    assert_eq!(account.index(), Some(3));
}

// =============================================================================
// Reservation Attachment Tests
// =============================================================================

#[test]
fn test_add_reservation_appends_in_order() {
    let mut account = Account::guest("Alice", "alice", "pw");

    account.add_reservation(Reservation::new("alice", Room::new(100, 100), stay(1, 3)));
    account.add_reservation(Reservation::new("alice", Room::new(500, 300), stay(5, 6)));

    let rooms: Vec<u32> = account.reservations().iter().map(|r| r.room().number()).collect();
    assert_eq!(rooms, vec![100, 500]);
}

#[test]
fn test_add_reservation_allows_overlap() {
    let mut account = Account::guest("Alice", "alice", "pw");

    account.add_reservation(Reservation::new("alice", Room::new(100, 100), stay(1, 3)));
    account.add_reservation(Reservation::new("alice", Room::new(100, 100), stay(2, 4)));

    assert_eq!(account.reservations().len(), 2);
}

#[test]
fn test_add_reservation_rebinds_owner() {
    let mut account = Account::guest("Alice", "alice", "pw");

    let attached =
        account.add_reservation(Reservation::new("someone-else", Room::new(100, 100), stay(1, 3)));

    assert_eq!(attached.account(), "alice");
}

// =============================================================================
// Cost Tests
// =============================================================================

#[test]
fn test_total_cost() {
    let standard = Reservation::new("alice", Room::new(100, 100), stay(10, 12));
    let premium = Reservation::new("alice", Room::new(500, 300), stay(10, 13));
    let same_day = Reservation::new("alice", Room::new(500, 300), stay(10, 10));
    let inverted = Reservation::new("alice", Room::new(500, 300), stay(12, 10));

    assert_eq!(standard.total_cost(), 200);
    assert_eq!(premium.total_cost(), 900);
    assert_eq!(same_day.total_cost(), 0);
    assert_eq!(inverted.total_cost(), 0);
}
