// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::date;
use crate::{DayType, DomainError, HolidayLookup, HolidaySet, NoHolidays};
use chrono::{Duration, NaiveDate};

/// A lookup whose source is always unreachable.
struct BrokenLookup;

impl HolidayLookup for BrokenLookup {
    fn is_bank_holiday(&self, _date: NaiveDate) -> Result<bool, DomainError> {
        Err(DomainError::HolidayLookupFailed {
            message: String::from("source unreachable"),
        })
    }
}

#[test]
fn test_classify_week_without_holidays() {
    // 2025-06-09 is a Monday.
    let monday = date(2025, 6, 9);
    let expected = [
        DayType::Weekday,
        DayType::Weekday,
        DayType::Weekday,
        DayType::Weekday,
        DayType::Weekday,
        DayType::Saturday,
        DayType::Sunday,
    ];
    for (offset, want) in expected.iter().enumerate() {
        let day = monday + Duration::days(i64::try_from(offset).unwrap());
        assert_eq!(DayType::classify(day, &NoHolidays), *want, "day {day}");
    }
}

#[test]
fn test_bank_holiday_takes_priority_over_weekday() {
    let mut holidays = HolidaySet::new();
    // Early May bank holiday 2025, a Monday.
    holidays.insert(date(2025, 5, 5));
    assert_eq!(
        DayType::classify(date(2025, 5, 5), &holidays),
        DayType::BankHoliday
    );
}

#[test]
fn test_bank_holiday_takes_priority_over_weekend() {
    let mut holidays = HolidaySet::new();
    // A substitute-day holiday landing on a Saturday.
    holidays.insert(date(2026, 12, 26));
    assert_eq!(
        DayType::classify(date(2026, 12, 26), &holidays),
        DayType::BankHoliday
    );
}

#[test]
fn test_lookup_failure_degrades_to_non_holiday() {
    // Christmas Day 2025 is a Thursday; with the source down it
    // classifies as a plain weekday rather than failing.
    assert_eq!(
        DayType::classify(date(2025, 12, 25), &BrokenLookup),
        DayType::Weekday
    );
    assert_eq!(
        DayType::classify(date(2025, 12, 27), &BrokenLookup),
        DayType::Saturday
    );
}

#[test]
fn test_classification_is_total_over_a_year() {
    let mut day = date(2025, 1, 1);
    let end = date(2026, 1, 1);
    while day < end {
        // Every date resolves to exactly one of the four categories.
        let category = DayType::classify(day, &NoHolidays);
        assert!(DayType::all().contains(&category));
        day += Duration::days(1);
    }
}

#[test]
fn test_round_trip_through_storage_form() {
    for category in DayType::all() {
        let parsed: DayType = category.as_str().parse().unwrap();
        assert_eq!(parsed, category);
    }
    assert!("bank holiday".parse::<DayType>().is_err());
}

#[test]
fn test_holiday_set_from_records() {
    let holidays = HolidaySet::from_holidays(vec![crate::BankHoliday::new(
        date(2025, 12, 25),
        String::from("Christmas Day"),
        String::new(),
    )]);
    assert_eq!(holidays.len(), 1);
    assert!(holidays.is_bank_holiday(date(2025, 12, 25)).unwrap());
    assert!(!holidays.is_bank_holiday(date(2025, 12, 24)).unwrap());
}
