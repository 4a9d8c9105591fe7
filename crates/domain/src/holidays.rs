// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bank-holiday lookup abstractions.
//!
//! The holiday dataset itself lives in an external cache (refreshable
//! from a remote authoritative source); the domain only defines the
//! lookup contract and a set-backed implementation for pre-loaded
//! ranges.

use crate::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single bank-holiday record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankHoliday {
    /// The holiday date.
    pub date: NaiveDate,
    /// Name of the holiday (e.g. "Boxing Day").
    pub title: String,
    /// Additional notes (e.g. "Substitute day").
    pub notes: String,
}

impl BankHoliday {
    /// Creates a new `BankHoliday`.
    #[must_use]
    pub const fn new(date: NaiveDate, title: String, notes: String) -> Self {
        Self { date, title, notes }
    }
}

/// Answers whether a given date is a bank holiday.
///
/// Implementations may consult a database cache or an in-memory set.
/// Errors are permitted; day-type classification degrades them to
/// "not a holiday" rather than failing.
pub trait HolidayLookup {
    /// Checks whether the date is a bank holiday.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be consulted.
    fn is_bank_holiday(&self, date: NaiveDate) -> Result<bool, DomainError>;
}

/// A lookup that knows no holidays.
///
/// Used where no cache is wired in; every date classifies by weekday
/// alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayLookup for NoHolidays {
    fn is_bank_holiday(&self, _date: NaiveDate) -> Result<bool, DomainError> {
        Ok(false)
    }
}

/// A set-backed lookup over pre-loaded holiday dates.
///
/// Useful for classifying a whole calendar range with one cache read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: BTreeSet<NaiveDate>,
}

impl HolidaySet {
    /// Creates an empty `HolidaySet`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dates: BTreeSet::new(),
        }
    }

    /// Builds a set from holiday records.
    pub fn from_holidays<I>(holidays: I) -> Self
    where
        I: IntoIterator<Item = BankHoliday>,
    {
        Self {
            dates: holidays.into_iter().map(|h| h.date).collect(),
        }
    }

    /// Adds a date to the set.
    pub fn insert(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    /// Returns the number of holiday dates in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Checks whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl HolidayLookup for HolidaySet {
    fn is_bank_holiday(&self, date: NaiveDate) -> Result<bool, DomainError> {
        Ok(self.dates.contains(&date))
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}
