// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::date;
use crate::{DomainError, Month};

#[test]
fn test_month_rejects_out_of_range_values() {
    assert!(matches!(
        Month::new(2025, 0),
        Err(DomainError::InvalidMonth { month: 0 })
    ));
    assert!(matches!(
        Month::new(2025, 13),
        Err(DomainError::InvalidMonth { month: 13 })
    ));
    assert!(matches!(
        Month::new(1999, 6),
        Err(DomainError::InvalidYear { year: 1999 })
    ));
}

#[test]
fn test_date_range_is_half_open() {
    let month = Month::new(2025, 9).unwrap();
    let (start, end) = month.date_range();
    assert_eq!(start, date(2025, 9, 1));
    assert_eq!(end, date(2025, 10, 1));
    assert!(month.contains(date(2025, 9, 30)));
    assert!(!month.contains(date(2025, 10, 1)));
}

#[test]
fn test_december_rolls_into_next_year() {
    let month = Month::new(2024, 12).unwrap();
    let (start, end) = month.date_range();
    assert_eq!(start, date(2024, 12, 1));
    assert_eq!(end, date(2025, 1, 1));
    assert_eq!(month.next(), Month::new(2025, 1).unwrap());
}

#[test]
fn test_prev_wraps_january() {
    let month = Month::new(2025, 1).unwrap();
    assert_eq!(month.prev(), Month::new(2024, 12).unwrap());
}

#[test]
fn test_from_date_matches_containing_month() {
    let day = date(2025, 6, 15);
    let month = Month::from_date(day);
    assert_eq!(month, Month::new(2025, 6).unwrap());
    assert!(month.contains(day));
}

#[test]
fn test_display_uses_month_name() {
    let month = Month::new(2025, 6).unwrap();
    assert_eq!(month.name(), "June");
    assert_eq!(month.to_string(), "June 2025");
}

#[test]
fn test_months_order_chronologically() {
    let june = Month::new(2025, 6).unwrap();
    let july = Month::new(2025, 7).unwrap();
    let next_jan = Month::new(2026, 1).unwrap();
    assert!(june < july);
    assert!(july < next_jan);
}
