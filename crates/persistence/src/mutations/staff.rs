// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff mutations.
//!
//! Staff are created at onboarding and edited in place; there is no
//! structural delete, since historical blocks and sign-offs keep
//! referencing them.

use crate::diesel_schema::staff;
use crate::error::{OpError, PersistenceError};
use crate::sqlite;
use diesel::prelude::*;
use dutybook_domain::{SeniorityTier, Staff, validate_hex_color, validate_staff_fields};
use tracing::info;

/// Creates a new staff member.
///
/// # Errors
///
/// Returns a rejection if the fields fail validation, or a storage
/// error (including a uniqueness violation on the assignment
/// identifier) if the insert fails.
pub fn create_staff(conn: &mut SqliteConnection, member: &Staff) -> Result<i64, OpError> {
    validate_staff_fields(member)?;

    info!(
        assignment_id = member.assignment_id(),
        "Creating staff member"
    );

    diesel::insert_into(staff::table)
        .values((
            staff::assignment_id.eq(member.assignment_id()),
            staff::name.eq(member.name()),
            staff::seniority_tier.eq(member.seniority().as_str()),
            staff::color.eq(member.color()),
        ))
        .execute(conn)
        .map_err(PersistenceError::from)?;

    Ok(sqlite::get_last_insert_rowid(conn)?)
}

/// Updates a staff member's name, seniority tier, and display color.
///
/// The assignment identifier is immutable; it is the handle history
/// hangs off.
///
/// # Errors
///
/// Returns a rejection if the fields fail validation, or
/// `StaffNotFound` if no such staff member exists.
pub fn update_staff(
    conn: &mut SqliteConnection,
    staff_id: i64,
    name: &str,
    seniority: SeniorityTier,
    color: &str,
) -> Result<(), OpError> {
    if name.trim().is_empty() {
        return Err(dutybook_domain::DomainError::InvalidStaffName(String::from(
            "Staff name cannot be empty",
        ))
        .into());
    }
    validate_hex_color(color)?;

    let updated = diesel::update(staff::table)
        .filter(staff::staff_id.eq(staff_id))
        .set((
            staff::name.eq(name),
            staff::seniority_tier.eq(seniority.as_str()),
            staff::color.eq(color),
        ))
        .execute(conn)
        .map_err(PersistenceError::from)?;

    if updated == 0 {
        return Err(PersistenceError::StaffNotFound(staff_id.to_string()).into());
    }
    Ok(())
}
