// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month, the scope of the sign-off locking protocol.
///
/// Both sign-off levels key on this type: per-staff locks on
/// `(staff, Month)` and report locks on `Month` alone. The fields are
/// private so a constructed `Month` is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Month {
    year: u16,
    month: u8,
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Month {
    /// Creates a new `Month`.
    ///
    /// # Arguments
    ///
    /// * `year` - The year (2000-2100)
    /// * `month` - The month number (1-12)
    ///
    /// # Errors
    ///
    /// Returns an error if the month is outside 1-12 or the year is
    /// outside the supported range.
    pub const fn new(year: u16, month: u8) -> Result<Self, DomainError> {
        if month < 1 || month > 12 {
            return Err(DomainError::InvalidMonth { month });
        }
        if year < 2000 || year > 2100 {
            return Err(DomainError::InvalidYear { year });
        }
        Ok(Self { year, month })
    }

    /// Returns the month containing the given date.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year() as u16,
            month: date.month() as u8,
        }
    }

    /// Returns the year value.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month number (1-12).
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the first day of this month.
    #[must_use]
    pub fn first_day(&self) -> NaiveDate {
        // The month number is validated at construction, so this cannot fail.
        NaiveDate::from_ymd_opt(i32::from(self.year), u32::from(self.month), 1)
            .unwrap_or(NaiveDate::MIN)
    }

    /// Returns the month following this one.
    #[must_use]
    pub const fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Returns the month preceding this one.
    #[must_use]
    pub const fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Returns the half-open date range `[start, next_month_start)`
    /// covered by this month.
    #[must_use]
    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        (self.first_day(), self.next().first_day())
    }

    /// Checks whether a date falls within this month.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        let (start, end) = self.date_range();
        date >= start && date < end
    }

    /// Returns the English name of the month.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}
