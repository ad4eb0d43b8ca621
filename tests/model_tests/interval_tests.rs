//! Tests for TimeInterval
//!
//! These tests verify:
//! - Closed-interval overlap, including single-day touching
//! - Parsing and formatting of MM/dd/yyyy dates
//! - Night counts and well-formedness

use chrono::NaiveDate;
use hotel_store::model::TimeInterval;
use hotel_store::StoreError;

// =============================================================================
// Helper Functions
// =============================================================================

fn date(month: u32, day: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn interval(start: (u32, u32), end: (u32, u32)) -> TimeInterval {
    TimeInterval::new(date(start.0, start.1, 2024), date(end.0, end.1, 2024))
}

// =============================================================================
// Overlap Tests
// =============================================================================

#[test]
fn test_overlap_identical() {
    let a = interval((1, 10), (1, 12));
    assert!(a.overlap(&a));
}

#[test]
fn test_overlap_partial() {
    let a = interval((1, 10), (1, 12));
    let b = interval((1, 11), (1, 15));

    assert!(a.overlap(&b));
    assert!(b.overlap(&a));
}

#[test]
fn test_overlap_contained() {
    let outer = interval((1, 1), (1, 31));
    let inner = interval((1, 10), (1, 12));

    assert!(outer.overlap(&inner));
    assert!(inner.overlap(&outer));
}

#[test]
fn test_overlap_touching_end_to_start() {
    let a = interval((1, 10), (1, 12));
    let b = interval((1, 12), (1, 14));

    // Sharing one day counts as overlapping
    assert!(a.overlap(&b));
    assert!(b.overlap(&a));
}

#[test]
fn test_overlap_single_day_inside() {
    let stay = interval((1, 10), (1, 12));
    let day = interval((1, 11), (1, 11));

    assert!(stay.overlap(&day));
    assert!(day.overlap(&stay));
}

#[test]
fn test_no_overlap_adjacent_days() {
    let a = interval((1, 10), (1, 12));
    let b = interval((1, 13), (1, 15));

    assert!(!a.overlap(&b));
    assert!(!b.overlap(&a));
}

#[test]
fn test_no_overlap_far_apart() {
    let a = interval((1, 1), (1, 5));
    let b = interval((6, 1), (6, 5));

    assert!(!a.overlap(&b));
    assert!(!b.overlap(&a));
}

#[test]
fn test_overlap_across_year_boundary() {
    let a = TimeInterval::new(date(12, 30, 2023), date(1, 2, 2024));
    let b = TimeInterval::new(date(1, 1, 2024), date(1, 1, 2024));

    assert!(a.overlap(&b));
}

// =============================================================================
// Parse / Format Tests
// =============================================================================

#[test]
fn test_parse_dates() {
    let parsed = TimeInterval::parse("01/10/2024", "01/12/2024").unwrap();

    assert_eq!(parsed.start(), date(1, 10, 2024));
    assert_eq!(parsed.end(), date(1, 12, 2024));
}

#[test]
fn test_parse_trims_whitespace() {
    let parsed = TimeInterval::parse(" 01/10/2024", "01/12/2024 ").unwrap();
    assert_eq!(parsed, interval((1, 10), (1, 12)));
}

#[test]
fn test_parse_rejects_iso_format() {
    let result = TimeInterval::parse("2024-01-10", "2024-01-12");
    assert!(matches!(result, Err(StoreError::DateParse(_))));
}

#[test]
fn test_parse_rejects_impossible_date() {
    let result = TimeInterval::parse("02/30/2024", "03/01/2024");
    assert!(matches!(result, Err(StoreError::DateParse(_))));
}

#[test]
fn test_display_uses_record_format() {
    let a = interval((1, 5), (11, 20));
    assert_eq!(a.to_string(), "01/05/2024 - 11/20/2024");
}

// =============================================================================
// Nights / Well-formedness Tests
// =============================================================================

#[test]
fn test_nights() {
    assert_eq!(interval((1, 10), (1, 12)).nights(), 2);
    assert_eq!(interval((1, 10), (1, 10)).nights(), 0);
    assert_eq!(interval((2, 28), (3, 1)).nights(), 2); // 2024 is a leap year
}

#[test]
fn test_inverted_interval_not_well_formed() {
    let inverted = interval((1, 12), (1, 10));

    assert!(!inverted.is_well_formed());
    assert_eq!(inverted.nights(), -2);
    assert!(interval((1, 10), (1, 10)).is_well_formed());
}
