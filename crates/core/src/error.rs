// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDateTime;
use dutybook_domain::{DomainError, Month, SeniorityTier};

/// Errors that can occur while authorizing a command.
///
/// Every variant is a rejection with a defined recovery: the caller
/// reports the message and nothing is mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The targeted staff-month is frozen by a sign-off.
    MonthSignedOff {
        /// Assignment identifier of the staff whose month is frozen.
        staff: String,
        /// The frozen month.
        month: Month,
        /// Assignment identifier of whoever signed it off.
        signed_off_by: String,
        /// When the sign-off happened.
        signed_off_at: NaiveDateTime,
    },
    /// The staff-month is already signed off; signing twice is
    /// rejected, never overwritten.
    DuplicateSignOff {
        /// Assignment identifier of the staff.
        staff: String,
        /// The already-frozen month.
        month: Month,
    },
    /// A month with no time blocks cannot be signed off.
    EmptyMonthSignOff {
        /// Assignment identifier of the staff.
        staff: String,
        /// The empty month.
        month: Month,
    },
    /// The month's report is already signed off.
    DuplicateReportSignOff {
        /// The already-frozen month.
        month: Month,
    },
    /// A month with no staff records has no report to sign off.
    EmptyReportSignOff {
        /// The empty month.
        month: Month,
    },
    /// The staff member already holds this tier on this date.
    DuplicateRotaShift {
        /// Assignment identifier of the staff.
        staff: String,
        /// The slot tier.
        tier: SeniorityTier,
        /// The rota date.
        date: chrono::NaiveDate,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::MonthSignedOff {
                staff,
                month,
                signed_off_by,
                signed_off_at,
            } => {
                write!(
                    f,
                    "{month} for {staff} is signed off (by {signed_off_by} at {signed_off_at}); records cannot be changed"
                )
            }
            Self::DuplicateSignOff { staff, month } => {
                write!(f, "{month} for {staff} is already signed off")
            }
            Self::EmptyMonthSignOff { staff, month } => {
                write!(
                    f,
                    "Cannot sign off {month} for {staff}: no time blocks recorded"
                )
            }
            Self::DuplicateReportSignOff { month } => {
                write!(f, "The report for {month} is already signed off")
            }
            Self::EmptyReportSignOff { month } => {
                write!(
                    f,
                    "Cannot sign off the report for {month}: no staff records found"
                )
            }
            Self::DuplicateRotaShift { staff, tier, date } => {
                write!(
                    f,
                    "{staff} already holds a {tier} slot on {date}"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
