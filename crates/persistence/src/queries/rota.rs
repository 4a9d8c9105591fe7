// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rota calendar queries.

use crate::data_models::{RotaEntryRow, RotaShiftRow, format_date};
use crate::diesel_schema::{rota_entries, rota_shifts};
use crate::error::PersistenceError;
use chrono::NaiveDate;
use diesel::prelude::*;
use dutybook::RotaDayContext;
use dutybook_domain::{RotaEntry, RotaShift, RotaStatistics, SeniorityTier};
use std::str::FromStr;

/// Fetches the rota entry row for a date, if any.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn entry_row_for_date(
    conn: &mut SqliteConnection,
    date: NaiveDate,
) -> Result<Option<RotaEntryRow>, PersistenceError> {
    Ok(rota_entries::table
        .filter(rota_entries::date.eq(format_date(date)))
        .first::<RotaEntryRow>(conn)
        .optional()?)
}

/// Fetches the rota entry for a date, if any.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// value fails to parse.
pub fn entry_for_date(
    conn: &mut SqliteConnection,
    date: NaiveDate,
) -> Result<Option<RotaEntry>, PersistenceError> {
    entry_row_for_date(conn, date)?
        .map(RotaEntryRow::into_domain)
        .transpose()
}

/// Fetches a shift row by identifier.
///
/// # Errors
///
/// Returns `ShiftNotFound` if no such shift exists.
pub fn get_shift_row(
    conn: &mut SqliteConnection,
    shift_id: i64,
) -> Result<RotaShiftRow, PersistenceError> {
    rota_shifts::table
        .filter(rota_shifts::shift_id.eq(shift_id))
        .first::<RotaShiftRow>(conn)
        .optional()?
        .ok_or(PersistenceError::ShiftNotFound(shift_id))
}

/// Lists a rota entry's shift rows, ordered by tier then staff.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn shift_rows_for_entry(
    conn: &mut SqliteConnection,
    rota_entry_id: i64,
) -> Result<Vec<RotaShiftRow>, PersistenceError> {
    Ok(rota_shifts::table
        .filter(rota_shifts::rota_entry_id.eq(rota_entry_id))
        .order((
            rota_shifts::seniority_tier.asc(),
            rota_shifts::staff_id.asc(),
        ))
        .load::<RotaShiftRow>(conn)?)
}

/// Lists a rota entry's shifts.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// tier is unknown.
pub fn shifts_for_entry(
    conn: &mut SqliteConnection,
    rota_entry_id: i64,
) -> Result<Vec<RotaShift>, PersistenceError> {
    let rows = shift_rows_for_entry(conn, rota_entry_id)?;
    rows.into_iter().map(RotaShiftRow::into_domain).collect()
}

/// Loads the occupancy of a rota entry for duplicate-slot checks.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// tier is unknown.
pub fn day_context(
    conn: &mut SqliteConnection,
    rota_entry_id: i64,
) -> Result<RotaDayContext, PersistenceError> {
    let rows = shift_rows_for_entry(conn, rota_entry_id)?;
    let mut occupied = Vec::with_capacity(rows.len());
    for row in rows {
        let tier = SeniorityTier::from_str(&row.seniority_tier).map_err(|_| {
            PersistenceError::ConversionError(format!(
                "invalid seniority tier '{}'",
                row.seniority_tier
            ))
        })?;
        occupied.push((row.staff_id, tier));
    }
    Ok(RotaDayContext { occupied })
}

/// Loads the rota for a half-open date range: each entry with its
/// shifts, ordered by date.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// value fails to parse.
pub fn rota_for_range(
    conn: &mut SqliteConnection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<(RotaEntry, Vec<RotaShift>)>, PersistenceError> {
    let entry_rows = rota_entries::table
        .filter(rota_entries::date.ge(format_date(start)))
        .filter(rota_entries::date.lt(format_date(end)))
        .order(rota_entries::date.asc())
        .load::<RotaEntryRow>(conn)?;

    let mut rota = Vec::with_capacity(entry_rows.len());
    for row in entry_rows {
        let entry_id = row.rota_entry_id;
        let entry = row.into_domain()?;
        let shifts = shifts_for_entry(conn, entry_id)?;
        rota.push((entry, shifts));
    }
    Ok(rota)
}

/// Tallies shift statistics over a date range.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// value fails to parse.
pub fn rota_statistics(
    conn: &mut SqliteConnection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<RotaStatistics, PersistenceError> {
    Ok(RotaStatistics::tally(&rota_for_range(conn, start, end)?))
}
