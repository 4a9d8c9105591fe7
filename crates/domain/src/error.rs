// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Month value is outside 1-12.
    InvalidMonth {
        /// The invalid month value.
        month: u8,
    },
    /// Year value is outside the supported range.
    InvalidYear {
        /// The invalid year value.
        year: u16,
    },
    /// A time block was dated in the future.
    FutureBlockDate {
        /// The rejected block date.
        date: NaiveDate,
        /// The reference "today" the date was validated against.
        today: NaiveDate,
    },
    /// A time entry started and ended at the same instant.
    ///
    /// Zero-length entries are rejected because the overnight rule makes
    /// them ambiguous between 0 and 24 hours.
    ZeroLengthEntry {
        /// The shared start/end time.
        time: NaiveTime,
    },
    /// A claim amount was negative.
    NegativeClaim {
        /// The rejected claim value.
        claim: Decimal,
    },
    /// Seniority tier string is not recognized.
    InvalidSeniorityTier(String),
    /// Duty mode string is not recognized.
    InvalidDutyMode(String),
    /// Day type string is not recognized.
    InvalidDayType(String),
    /// Entity kind string is not recognized.
    InvalidEntityKind(String),
    /// Staff assignment identifier is empty or invalid.
    InvalidAssignmentId(String),
    /// Staff name is empty or invalid.
    InvalidStaffName(String),
    /// Display color is not a `#rrggbb` hex value or palette name.
    InvalidColor {
        /// The rejected color value.
        value: String,
    },
    /// An entity is already assigned to the block.
    DuplicateAssignment {
        /// The entity kind as stored (e.g. "donor").
        entity_type: String,
        /// The entity identifier.
        entity_id: String,
    },
    /// Failed to parse a date from a string.
    DateParse {
        /// The invalid date string.
        value: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a time of day from a string.
    TimeParse {
        /// The invalid time string.
        value: String,
        /// The parsing error message.
        error: String,
    },
    /// The bank-holiday lookup could not be consulted.
    ///
    /// Classification never surfaces this to callers; it degrades to
    /// "not a holiday". The variant exists so lookup implementations
    /// have a typed failure to return.
    HolidayLookupFailed {
        /// Description of the failure.
        message: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth { month } => {
                write!(f, "Invalid month: {month}. Must be between 1 and 12")
            }
            Self::InvalidYear { year } => {
                write!(f, "Invalid year: {year}. Must be between 2000 and 2100")
            }
            Self::FutureBlockDate { date, today } => {
                write!(f, "Block date {date} is in the future (today is {today})")
            }
            Self::ZeroLengthEntry { time } => {
                write!(
                    f,
                    "Start time and end time cannot both be {time}: zero-length entries are not allowed"
                )
            }
            Self::NegativeClaim { claim } => {
                write!(f, "Claim cannot be negative: {claim}")
            }
            Self::InvalidSeniorityTier(value) => {
                write!(f, "Unknown seniority tier: {value}")
            }
            Self::InvalidDutyMode(value) => write!(f, "Unknown duty mode: {value}"),
            Self::InvalidDayType(value) => write!(f, "Unknown day type: {value}"),
            Self::InvalidEntityKind(value) => write!(f, "Unknown entity kind: {value}"),
            Self::InvalidAssignmentId(msg) => {
                write!(f, "Invalid assignment identifier: {msg}")
            }
            Self::InvalidStaffName(msg) => write!(f, "Invalid staff name: {msg}"),
            Self::InvalidColor { value } => {
                write!(f, "Invalid display color: {value}")
            }
            Self::DuplicateAssignment {
                entity_type,
                entity_id,
            } => {
                write!(
                    f,
                    "Entity {entity_type}:{entity_id} is already assigned to this block"
                )
            }
            Self::DateParse { value, error } => {
                write!(f, "Failed to parse date '{value}': {error}")
            }
            Self::TimeParse { value, error } => {
                write!(f, "Failed to parse time '{value}': {error}")
            }
            Self::HolidayLookupFailed { message } => {
                write!(f, "Bank holiday lookup failed: {message}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
