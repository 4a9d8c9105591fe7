// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::holidays::HolidayLookup;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Classification of a calendar date, driving claim-rate bucketing.
///
/// Exactly one category applies to any date. A bank holiday takes
/// priority over the weekend categories: Boxing Day on a Saturday is a
/// `BankHoliday`, not a `Saturday`. The same rule applies to time
/// blocks and rota entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    /// Monday to Friday, not a bank holiday.
    Weekday,
    /// Saturday, not a bank holiday.
    Saturday,
    /// Sunday, not a bank holiday.
    Sunday,
    /// A bank holiday, whatever the weekday.
    BankHoliday,
}

impl DayType {
    /// Classifies a date using a bank-holiday lookup.
    ///
    /// Lookup failures degrade to "not a holiday" so classification
    /// stays total: every date resolves to exactly one category.
    pub fn classify<L: HolidayLookup + ?Sized>(date: NaiveDate, holidays: &L) -> Self {
        let is_holiday = holidays.is_bank_holiday(date).unwrap_or(false);
        Self::from_parts(date, is_holiday)
    }

    /// Classifies a date given an already-resolved holiday flag.
    ///
    /// This is the core rule: bank holiday first, then Saturday, then
    /// Sunday, else weekday.
    #[must_use]
    pub fn from_parts(date: NaiveDate, is_bank_holiday: bool) -> Self {
        if is_bank_holiday {
            return Self::BankHoliday;
        }
        match date.weekday() {
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
            _ => Self::Weekday,
        }
    }

    /// Returns the storage representation of this category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weekday => "Weekday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
            Self::BankHoliday => "BankHoliday",
        }
    }

    /// Returns the Bootstrap display color for this category.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Weekday => "success",
            Self::Saturday => "warning",
            Self::Sunday => "danger",
            Self::BankHoliday => "info",
        }
    }

    /// All categories, in bucket display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [
            Self::Weekday,
            Self::Saturday,
            Self::Sunday,
            Self::BankHoliday,
        ]
    }
}

impl FromStr for DayType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Weekday" => Ok(Self::Weekday),
            "Saturday" => Ok(Self::Saturday),
            "Sunday" => Ok(Self::Sunday),
            "BankHoliday" => Ok(Self::BankHoliday),
            _ => Err(DomainError::InvalidDayType(s.to_string())),
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
