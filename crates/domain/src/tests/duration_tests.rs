// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::entry_hours;
use crate::tests::date;
use chrono::NaiveTime;
use rust_decimal_macros::dec;

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_same_day_entry_exact_hours() {
    let hours = entry_hours(date(2025, 6, 10), time(9, 0), time(17, 0));
    assert_eq!(hours, dec!(8.00));
}

#[test]
fn test_same_day_entry_fractional_hours() {
    let hours = entry_hours(date(2025, 6, 10), time(9, 0), time(17, 30));
    assert_eq!(hours, dec!(8.50));
}

#[test]
fn test_quarter_hour_entry() {
    let hours = entry_hours(date(2025, 6, 10), time(22, 0), time(22, 15));
    assert_eq!(hours, dec!(0.25));
}

#[test]
fn test_overnight_entry_adds_a_day() {
    // The classic on-call evening: 17:30 until 08:30 the next morning.
    let hours = entry_hours(date(2025, 6, 10), time(17, 30), time(8, 30));
    assert_eq!(hours, dec!(15.00));
}

#[test]
fn test_overnight_entry_late_callout() {
    let hours = entry_hours(date(2025, 6, 15), time(22, 0), time(6, 0));
    assert_eq!(hours, dec!(8.00));
}

#[test]
fn test_end_one_minute_before_start_wraps() {
    // 23:59 worked span, not -1 minute.
    let hours = entry_hours(date(2025, 6, 10), time(9, 0), time(8, 59));
    assert_eq!(hours, dec!(23.98));
}

#[test]
fn test_equal_times_yield_twenty_four_hours() {
    // Validation rejects equal times upstream; the raw calculation
    // resolves the ambiguity toward the overnight reading.
    let hours = entry_hours(date(2025, 6, 10), time(9, 0), time(9, 0));
    assert_eq!(hours, dec!(24.00));
}

#[test]
fn test_one_minute_entry_rounds_to_two_places() {
    // 60s / 3600s = 0.01666... -> 0.02 at two decimal places.
    let hours = entry_hours(date(2025, 6, 10), time(17, 30), time(17, 31));
    assert_eq!(hours, dec!(0.02));
}

#[test]
fn test_midpoint_rounds_to_nearest_even() {
    // 54s = 0.015h exactly: banker's rounding takes it up to the even 0.02.
    let start = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
    let end = NaiveTime::from_hms_opt(22, 0, 54).unwrap();
    assert_eq!(entry_hours(date(2025, 6, 10), start, end), dec!(0.02));

    // 18s = 0.005h exactly: banker's rounding takes it down to the even 0.00.
    let end = NaiveTime::from_hms_opt(22, 0, 18).unwrap();
    assert_eq!(entry_hours(date(2025, 6, 10), start, end), dec!(0.00));
}

#[test]
fn test_hours_do_not_depend_on_block_date() {
    let on_weekday = entry_hours(date(2025, 6, 10), time(17, 30), time(8, 30));
    let on_sunday = entry_hours(date(2025, 6, 15), time(17, 30), time(8, 30));
    assert_eq!(on_weekday, on_sunday);
}
