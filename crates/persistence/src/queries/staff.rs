// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff lookups.

use crate::data_models::StaffRow;
use crate::diesel_schema::staff;
use crate::error::PersistenceError;
use diesel::prelude::*;
use dutybook_domain::Staff;

/// Fetches a staff row by canonical identifier.
///
/// # Errors
///
/// Returns `StaffNotFound` if no such staff member exists.
pub fn get_staff_row(
    conn: &mut SqliteConnection,
    staff_id: i64,
) -> Result<StaffRow, PersistenceError> {
    staff::table
        .filter(staff::staff_id.eq(staff_id))
        .first::<StaffRow>(conn)
        .optional()?
        .ok_or_else(|| PersistenceError::StaffNotFound(staff_id.to_string()))
}

/// Fetches a staff member by canonical identifier.
///
/// # Errors
///
/// Returns `StaffNotFound` if no such staff member exists.
pub fn get_staff(conn: &mut SqliteConnection, staff_id: i64) -> Result<Staff, PersistenceError> {
    get_staff_row(conn, staff_id)?.into_domain()
}

/// Fetches a staff member by assignment identifier
/// (case-insensitive).
///
/// # Errors
///
/// Returns `StaffNotFound` if no such staff member exists.
pub fn get_staff_by_assignment(
    conn: &mut SqliteConnection,
    assignment_id: &str,
) -> Result<Staff, PersistenceError> {
    let normalized = assignment_id.to_uppercase();
    staff::table
        .filter(staff::assignment_id.eq(&normalized))
        .first::<StaffRow>(conn)
        .optional()?
        .ok_or(PersistenceError::StaffNotFound(normalized))?
        .into_domain()
}

/// Lists all staff ordered by assignment identifier.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_staff(conn: &mut SqliteConnection) -> Result<Vec<Staff>, PersistenceError> {
    let rows = staff::table
        .order(staff::assignment_id.asc())
        .load::<StaffRow>(conn)?;
    rows.into_iter().map(StaffRow::into_domain).collect()
}

/// Returns a display label for a staff member, falling back to the
/// raw identifier when the row is missing.
pub fn staff_label(conn: &mut SqliteConnection, staff_id: i64) -> String {
    staff::table
        .filter(staff::staff_id.eq(staff_id))
        .select(staff::assignment_id)
        .first::<String>(conn)
        .unwrap_or_else(|_| format!("#{staff_id}"))
}
