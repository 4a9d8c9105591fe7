// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation rules.
//!
//! These checks are pure: callers pass in everything the rule needs,
//! including "today" for the future-date rule, so the functions are
//! deterministic and directly testable.

use crate::error::DomainError;
use crate::types::{BOOTSTRAP_COLORS, Staff};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

/// Validates that a block date is not in the future.
///
/// # Arguments
///
/// * `date` - The block date under validation
/// * `today` - The reference date, supplied by the caller
///
/// # Errors
///
/// Returns `DomainError::FutureBlockDate` if the date is after today.
pub fn validate_block_date(date: NaiveDate, today: NaiveDate) -> Result<(), DomainError> {
    if date > today {
        return Err(DomainError::FutureBlockDate { date, today });
    }
    Ok(())
}

/// Validates that a time entry has distinct start and end times.
///
/// Equal times are rejected because the overnight rule makes them
/// ambiguous between 0 and 24 hours.
///
/// # Errors
///
/// Returns `DomainError::ZeroLengthEntry` if the times are equal.
pub fn validate_entry_times(start: NaiveTime, end: NaiveTime) -> Result<(), DomainError> {
    if start == end {
        return Err(DomainError::ZeroLengthEntry { time: start });
    }
    Ok(())
}

/// Validates that a claim amount is not negative.
///
/// # Errors
///
/// Returns `DomainError::NegativeClaim` for values below zero.
pub fn validate_claim(claim: Decimal) -> Result<(), DomainError> {
    if claim < Decimal::ZERO {
        return Err(DomainError::NegativeClaim { claim });
    }
    Ok(())
}

/// Validates the fields of a staff record.
///
/// # Errors
///
/// Returns an error if the assignment identifier or name is empty, or
/// the display color is not a `#rrggbb` hex value.
pub fn validate_staff_fields(staff: &Staff) -> Result<(), DomainError> {
    if staff.assignment_id().trim().is_empty() {
        return Err(DomainError::InvalidAssignmentId(String::from(
            "Assignment identifier cannot be empty",
        )));
    }
    if staff.name().trim().is_empty() {
        return Err(DomainError::InvalidStaffName(String::from(
            "Staff name cannot be empty",
        )));
    }
    validate_hex_color(staff.color())
}

/// Validates a `#rrggbb` hex display color.
///
/// # Errors
///
/// Returns `DomainError::InvalidColor` for anything that is not a `#`
/// followed by six hex digits.
pub fn validate_hex_color(value: &str) -> Result<(), DomainError> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value.chars().skip(1).all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(DomainError::InvalidColor {
            value: value.to_string(),
        })
    }
}

/// Validates a Bootstrap palette color name, as used by lookup rows
/// (task types, work modes).
///
/// # Errors
///
/// Returns `DomainError::InvalidColor` for names outside the palette.
pub fn validate_bootstrap_color(value: &str) -> Result<(), DomainError> {
    if BOOTSTRAP_COLORS.contains(&value) {
        Ok(())
    } else {
        Err(DomainError::InvalidColor {
            value: value.to_string(),
        })
    }
}
