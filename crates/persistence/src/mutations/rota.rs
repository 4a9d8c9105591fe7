// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rota mutations.
//!
//! The rota is forward-looking scheduling data: no sign-off gate and
//! no audit trail apply. Entries are created on demand and removed
//! automatically when their last shift goes.

use crate::data_models::{RotaEntryRow, format_date};
use crate::diesel_schema::{rota_entries, rota_shifts};
use crate::error::{OpError, PersistenceError};
use crate::queries;
use crate::sqlite;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use dutybook::{CoreError, check_rota_slot};
use dutybook_domain::{DutyMode, SeniorityTier};
use std::str::FromStr;
use tracing::{debug, info};

/// Gets or creates the rota entry for a date.
///
/// New entries start under the normal scheme.
///
/// # Errors
///
/// Returns an error if the database cannot be written or queried.
pub fn ensure_rota_entry(
    conn: &mut SqliteConnection,
    date: NaiveDate,
) -> Result<RotaEntryRow, PersistenceError> {
    diesel::insert_or_ignore_into(rota_entries::table)
        .values((
            rota_entries::date.eq(format_date(date)),
            rota_entries::duty_mode.eq(DutyMode::Normal.as_str()),
        ))
        .execute(conn)?;

    queries::rota::entry_row_for_date(conn, date)?
        .ok_or_else(|| PersistenceError::RotaEntryNotFound(format_date(date)))
}

/// Assigns a staff member to a date at a tier.
///
/// The (entry, staff, tier) uniqueness is checked against the loaded
/// occupancy and enforced again by the store constraint.
///
/// # Errors
///
/// Returns a rejection if the staff member already holds the tier on
/// the date; `StaffNotFound` if the staff member does not exist.
pub fn add_rota_shift(
    conn: &mut SqliteConnection,
    date: NaiveDate,
    staff_id: i64,
    tier: SeniorityTier,
    notes: &str,
) -> Result<i64, OpError> {
    conn.transaction::<i64, OpError, _>(|conn| {
        let staff_row = queries::staff::get_staff_row(conn, staff_id)?;
        let entry = ensure_rota_entry(conn, date)?;
        let ctx = queries::rota::day_context(conn, entry.rota_entry_id)?;
        check_rota_slot(&ctx, &staff_row.assignment_id, staff_id, tier, date)?;

        let inserted = diesel::insert_into(rota_shifts::table)
            .values((
                rota_shifts::rota_entry_id.eq(entry.rota_entry_id),
                rota_shifts::staff_id.eq(staff_id),
                rota_shifts::seniority_tier.eq(tier.as_str()),
                rota_shifts::notes.eq(notes),
            ))
            .execute(conn);

        if let Err(diesel::result::Error::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            _,
        )) = inserted
        {
            return Err(CoreError::DuplicateRotaShift {
                staff: staff_row.assignment_id,
                tier,
                date,
            }
            .into());
        }
        inserted.map_err(PersistenceError::from)?;

        let shift_id = sqlite::get_last_insert_rowid(conn)?;
        info!(shift_id, staff_id, %date, tier = tier.as_str(), "Added rota shift");
        Ok(shift_id)
    })
}

/// Removes one shift, deleting the entry if it was the last.
///
/// Returns whether the entry was removed too.
///
/// # Errors
///
/// Returns `ShiftNotFound` if the shift does not exist.
pub fn remove_rota_shift(
    conn: &mut SqliteConnection,
    shift_id: i64,
) -> Result<bool, PersistenceError> {
    conn.transaction::<bool, PersistenceError, _>(|conn| {
        let shift = queries::rota::get_shift_row(conn, shift_id)?;

        diesel::delete(rota_shifts::table)
            .filter(rota_shifts::shift_id.eq(shift_id))
            .execute(conn)?;

        let remaining: i64 = rota_shifts::table
            .filter(rota_shifts::rota_entry_id.eq(shift.rota_entry_id))
            .count()
            .get_result(conn)?;

        if remaining == 0 {
            diesel::delete(rota_entries::table)
                .filter(rota_entries::rota_entry_id.eq(shift.rota_entry_id))
                .execute(conn)?;
            debug!(rota_entry_id = shift.rota_entry_id, "Removed emptied rota entry");
            return Ok(true);
        }
        Ok(false)
    })
}

/// Flips a date between the normal and locum schemes, creating the
/// entry if needed. Returns the new mode.
///
/// # Errors
///
/// Returns an error if the database cannot be written or a stored
/// value fails to parse.
pub fn toggle_rota_mode(
    conn: &mut SqliteConnection,
    date: NaiveDate,
) -> Result<DutyMode, PersistenceError> {
    conn.transaction::<DutyMode, PersistenceError, _>(|conn| {
        let entry = ensure_rota_entry(conn, date)?;
        let current = DutyMode::from_str(&entry.duty_mode).map_err(|_| {
            PersistenceError::ConversionError(format!("invalid duty mode '{}'", entry.duty_mode))
        })?;
        let next = current.toggled();

        diesel::update(rota_entries::table)
            .filter(rota_entries::rota_entry_id.eq(entry.rota_entry_id))
            .set((
                rota_entries::duty_mode.eq(next.as_str()),
                rota_entries::last_modified_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>("CURRENT_TIMESTAMP")),
            ))
            .execute(conn)?;

        Ok(next)
    })
}

/// Clears a date's shifts, optionally restricted to one tier, and
/// removes the entry when it empties. Returns the number of shifts
/// deleted.
///
/// A date with no rota entry clears zero shifts.
///
/// # Errors
///
/// Returns an error if the database cannot be written or queried.
pub fn clear_rota_shifts(
    conn: &mut SqliteConnection,
    date: NaiveDate,
    tier: Option<SeniorityTier>,
) -> Result<usize, PersistenceError> {
    conn.transaction::<usize, PersistenceError, _>(|conn| {
        let Some(entry) = queries::rota::entry_row_for_date(conn, date)? else {
            return Ok(0);
        };

        let deleted = match tier {
            Some(tier) => diesel::delete(rota_shifts::table)
                .filter(rota_shifts::rota_entry_id.eq(entry.rota_entry_id))
                .filter(rota_shifts::seniority_tier.eq(tier.as_str()))
                .execute(conn)?,
            None => diesel::delete(rota_shifts::table)
                .filter(rota_shifts::rota_entry_id.eq(entry.rota_entry_id))
                .execute(conn)?,
        };

        let remaining: i64 = rota_shifts::table
            .filter(rota_shifts::rota_entry_id.eq(entry.rota_entry_id))
            .count()
            .get_result(conn)?;
        if remaining == 0 {
            diesel::delete(rota_entries::table)
                .filter(rota_entries::rota_entry_id.eq(entry.rota_entry_id))
                .execute(conn)?;
        }

        info!(%date, deleted, "Cleared rota shifts");
        Ok(deleted)
    })
}
