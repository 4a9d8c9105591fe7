// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Gated time block, entry, and assignment mutations.
//!
//! Each operation loads the (staff, month) lock context, authorizes
//! the command through the core engine, performs the row mutation, and
//! records the audit event, all inside one transaction. A signed-off
//! month rejects the whole operation before anything is written.

use crate::data_models::{format_date, format_time};
use crate::diesel_schema::{assignments, time_blocks, time_entries};
use crate::error::{OpError, PersistenceError};
use crate::mutations::audit;
use crate::queries;
use crate::sqlite;
use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use dutybook::{Command, authorize_timesheet};
use dutybook_audit::{Actor, Cause};
use dutybook_domain::{DayType, DomainError, DutyMode, EntityRef, Month};
use rust_decimal::Decimal;
use tracing::info;

/// Resolves a block's day type when the submitter did not choose one.
///
/// Bank holiday wins over the weekend rule; a failed cache lookup
/// degrades to "not a holiday".
fn resolve_day_type(
    conn: &mut SqliteConnection,
    chosen: Option<DayType>,
    date: NaiveDate,
) -> DayType {
    match chosen {
        Some(day_type) => day_type,
        None => {
            let is_holiday = queries::holidays::is_bank_holiday(conn, date).unwrap_or(false);
            DayType::from_parts(date, is_holiday)
        }
    }
}

/// Creates a time block for a staff-day.
///
/// # Errors
///
/// Returns a rejection if the month is signed off, the date is in the
/// future, or the claim is negative; a storage error otherwise.
#[allow(clippy::too_many_arguments)]
pub fn create_time_block(
    conn: &mut SqliteConnection,
    staff_id: i64,
    date: NaiveDate,
    day_type: Option<DayType>,
    duty_mode: DutyMode,
    claim: Option<Decimal>,
    today: NaiveDate,
    actor: Actor,
    cause: Cause,
) -> Result<i64, OpError> {
    conn.transaction::<i64, OpError, _>(|conn| {
        let staff_row = queries::staff::get_staff_row(conn, staff_id)?;
        let month = Month::from_date(date);
        let ctx = queries::signoff::load_month_context(conn, &staff_row, month)?;
        let resolved = resolve_day_type(conn, day_type, date);

        let command = Command::CreateBlock {
            staff_id,
            date,
            day_type: resolved,
            duty_mode,
            claim,
        };
        let event = authorize_timesheet(&command, &ctx, today, actor, cause)?;

        diesel::insert_into(time_blocks::table)
            .values((
                time_blocks::staff_id.eq(staff_id),
                time_blocks::date.eq(format_date(date)),
                time_blocks::day_type.eq(resolved.as_str()),
                time_blocks::duty_mode.eq(duty_mode.as_str()),
                time_blocks::claim.eq(claim.map(|c| c.to_string())),
            ))
            .execute(conn)
            .map_err(PersistenceError::from)?;
        let block_id = sqlite::get_last_insert_rowid(conn)?;

        audit::insert_audit_event(conn, &event, Some(staff_id), Some(month))?;
        info!(block_id, staff_id, "Created time block");
        Ok(block_id)
    })
}

/// Edits a block's day type, duty mode, and claim. The date is fixed
/// at creation.
///
/// # Errors
///
/// Returns a rejection if the block's month is signed off or the
/// claim is negative; `BlockNotFound` if the block does not exist.
pub fn edit_time_block(
    conn: &mut SqliteConnection,
    block_id: i64,
    day_type: Option<DayType>,
    duty_mode: DutyMode,
    claim: Option<Decimal>,
    actor: Actor,
    cause: Cause,
) -> Result<(), OpError> {
    conn.transaction::<(), OpError, _>(|conn| {
        let block_row = queries::timesheet::get_block_row(conn, block_id)?;
        let staff_row = queries::staff::get_staff_row(conn, block_row.staff_id)?;
        let block = block_row.into_domain()?;
        let month = block.month();
        let ctx = queries::signoff::load_month_context(conn, &staff_row, month)?;
        let resolved = resolve_day_type(conn, day_type, block.date());

        let command = Command::EditBlock {
            block_id,
            day_type: resolved,
            duty_mode,
            claim,
        };
        let event = authorize_timesheet(&command, &ctx, block.date(), actor, cause)?;

        diesel::update(time_blocks::table)
            .filter(time_blocks::block_id.eq(block_id))
            .set((
                time_blocks::day_type.eq(resolved.as_str()),
                time_blocks::duty_mode.eq(duty_mode.as_str()),
                time_blocks::claim.eq(claim.map(|c| c.to_string())),
                time_blocks::last_modified_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>("CURRENT_TIMESTAMP")),
            ))
            .execute(conn)
            .map_err(PersistenceError::from)?;

        audit::insert_audit_event(conn, &event, Some(block.staff_id()), Some(month))?;
        Ok(())
    })
}

/// Deletes a block and, by cascade, its entries and assignments.
///
/// # Errors
///
/// Returns a rejection if the block's month is signed off;
/// `BlockNotFound` if the block does not exist.
pub fn delete_time_block(
    conn: &mut SqliteConnection,
    block_id: i64,
    actor: Actor,
    cause: Cause,
) -> Result<(), OpError> {
    conn.transaction::<(), OpError, _>(|conn| {
        let block_row = queries::timesheet::get_block_row(conn, block_id)?;
        let staff_row = queries::staff::get_staff_row(conn, block_row.staff_id)?;
        let block = block_row.into_domain()?;
        let month = block.month();
        let ctx = queries::signoff::load_month_context(conn, &staff_row, month)?;

        let command = Command::DeleteBlock { block_id };
        let event = authorize_timesheet(&command, &ctx, block.date(), actor, cause)?;

        diesel::delete(time_blocks::table)
            .filter(time_blocks::block_id.eq(block_id))
            .execute(conn)
            .map_err(PersistenceError::from)?;

        audit::insert_audit_event(conn, &event, Some(block.staff_id()), Some(month))?;
        info!(block_id, "Deleted time block with its entries");
        Ok(())
    })
}

/// Adds a worked interval to a block.
///
/// # Errors
///
/// Returns a rejection if the block's month is signed off or the
/// entry is zero-length; `BlockNotFound` if the block does not exist.
#[allow(clippy::too_many_arguments)]
pub fn add_time_entry(
    conn: &mut SqliteConnection,
    block_id: i64,
    start: NaiveTime,
    end: NaiveTime,
    task_type_id: i64,
    work_mode_id: i64,
    details: &str,
    actor: Actor,
    cause: Cause,
) -> Result<i64, OpError> {
    conn.transaction::<i64, OpError, _>(|conn| {
        let block_row = queries::timesheet::get_block_row(conn, block_id)?;
        let staff_row = queries::staff::get_staff_row(conn, block_row.staff_id)?;
        let block = block_row.into_domain()?;
        let month = block.month();
        let ctx = queries::signoff::load_month_context(conn, &staff_row, month)?;

        let command = Command::AddEntry {
            block_id,
            start,
            end,
            task_type_id,
            work_mode_id,
            details: details.to_string(),
        };
        let event = authorize_timesheet(&command, &ctx, block.date(), actor, cause)?;

        diesel::insert_into(time_entries::table)
            .values((
                time_entries::block_id.eq(block_id),
                time_entries::time_started.eq(format_time(start)),
                time_entries::time_ended.eq(format_time(end)),
                time_entries::task_type_id.eq(task_type_id),
                time_entries::work_mode_id.eq(work_mode_id),
                time_entries::details.eq(details),
            ))
            .execute(conn)
            .map_err(PersistenceError::from)?;
        let entry_id = sqlite::get_last_insert_rowid(conn)?;

        audit::insert_audit_event(conn, &event, Some(block.staff_id()), Some(month))?;
        Ok(entry_id)
    })
}

/// Edits a worked interval.
///
/// # Errors
///
/// Returns a rejection if the owning block's month is signed off or
/// the entry is zero-length; `EntryNotFound` if the entry does not
/// exist.
#[allow(clippy::too_many_arguments)]
pub fn edit_time_entry(
    conn: &mut SqliteConnection,
    entry_id: i64,
    start: NaiveTime,
    end: NaiveTime,
    task_type_id: i64,
    work_mode_id: i64,
    details: &str,
    actor: Actor,
    cause: Cause,
) -> Result<(), OpError> {
    conn.transaction::<(), OpError, _>(|conn| {
        let entry_row = queries::timesheet::get_entry_row(conn, entry_id)?;
        let block_row = queries::timesheet::get_block_row(conn, entry_row.block_id)?;
        let staff_row = queries::staff::get_staff_row(conn, block_row.staff_id)?;
        let block = block_row.into_domain()?;
        let month = block.month();
        let ctx = queries::signoff::load_month_context(conn, &staff_row, month)?;

        let command = Command::EditEntry {
            entry_id,
            start,
            end,
            task_type_id,
            work_mode_id,
            details: details.to_string(),
        };
        let event = authorize_timesheet(&command, &ctx, block.date(), actor, cause)?;

        diesel::update(time_entries::table)
            .filter(time_entries::entry_id.eq(entry_id))
            .set((
                time_entries::time_started.eq(format_time(start)),
                time_entries::time_ended.eq(format_time(end)),
                time_entries::task_type_id.eq(task_type_id),
                time_entries::work_mode_id.eq(work_mode_id),
                time_entries::details.eq(details),
                time_entries::last_modified_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>("CURRENT_TIMESTAMP")),
            ))
            .execute(conn)
            .map_err(PersistenceError::from)?;

        audit::insert_audit_event(conn, &event, Some(block.staff_id()), Some(month))?;
        Ok(())
    })
}

/// Deletes a worked interval.
///
/// # Errors
///
/// Returns a rejection if the owning block's month is signed off;
/// `EntryNotFound` if the entry does not exist.
pub fn delete_time_entry(
    conn: &mut SqliteConnection,
    entry_id: i64,
    actor: Actor,
    cause: Cause,
) -> Result<(), OpError> {
    conn.transaction::<(), OpError, _>(|conn| {
        let entry_row = queries::timesheet::get_entry_row(conn, entry_id)?;
        let block_row = queries::timesheet::get_block_row(conn, entry_row.block_id)?;
        let staff_row = queries::staff::get_staff_row(conn, block_row.staff_id)?;
        let block = block_row.into_domain()?;
        let month = block.month();
        let ctx = queries::signoff::load_month_context(conn, &staff_row, month)?;

        let command = Command::DeleteEntry { entry_id };
        let event = authorize_timesheet(&command, &ctx, block.date(), actor, cause)?;

        diesel::delete(time_entries::table)
            .filter(time_entries::entry_id.eq(entry_id))
            .execute(conn)
            .map_err(PersistenceError::from)?;

        audit::insert_audit_event(conn, &event, Some(block.staff_id()), Some(month))?;
        Ok(())
    })
}

/// Links an external entity to a block.
///
/// Assignments live inside the block's month scope, so the same
/// sign-off gate applies to them.
///
/// # Errors
///
/// Returns a rejection if the month is signed off or the entity is
/// already assigned; `BlockNotFound` if the block does not exist.
pub fn add_assignment(
    conn: &mut SqliteConnection,
    block_id: i64,
    entity: &EntityRef,
    notes: &str,
    actor: Actor,
    cause: Cause,
) -> Result<i64, OpError> {
    conn.transaction::<i64, OpError, _>(|conn| {
        let block_row = queries::timesheet::get_block_row(conn, block_id)?;
        let staff_row = queries::staff::get_staff_row(conn, block_row.staff_id)?;
        let block = block_row.into_domain()?;
        let month = block.month();
        let ctx = queries::signoff::load_month_context(conn, &staff_row, month)?;

        let command = Command::AddAssignment {
            block_id,
            entity: entity.clone(),
            notes: notes.to_string(),
        };
        let event = authorize_timesheet(&command, &ctx, block.date(), actor, cause)?;

        let inserted = diesel::insert_into(assignments::table)
            .values((
                assignments::block_id.eq(block_id),
                assignments::entity_type.eq(entity.kind().as_str()),
                assignments::entity_id.eq(entity.entity_id()),
                assignments::notes.eq(notes),
            ))
            .execute(conn);

        // The (block, kind, id) uniqueness lives in the store; map the
        // constraint hit to the domain rejection.
        if let Err(diesel::result::Error::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            _,
        )) = inserted
        {
            return Err(DomainError::DuplicateAssignment {
                entity_type: entity.kind().as_str().to_string(),
                entity_id: entity.entity_id().to_string(),
            }
            .into());
        }
        inserted.map_err(PersistenceError::from)?;
        let assignment_id = sqlite::get_last_insert_rowid(conn)?;

        audit::insert_audit_event(conn, &event, Some(block.staff_id()), Some(month))?;
        Ok(assignment_id)
    })
}

/// Removes an entity link from a block.
///
/// # Errors
///
/// Returns a rejection if the month is signed off;
/// `AssignmentNotFound` if the assignment does not exist.
pub fn remove_assignment(
    conn: &mut SqliteConnection,
    assignment_id: i64,
    actor: Actor,
    cause: Cause,
) -> Result<(), OpError> {
    conn.transaction::<(), OpError, _>(|conn| {
        let assignment_row = queries::timesheet::get_assignment_row(conn, assignment_id)?;
        let block_row = queries::timesheet::get_block_row(conn, assignment_row.block_id)?;
        let staff_row = queries::staff::get_staff_row(conn, block_row.staff_id)?;
        let block = block_row.into_domain()?;
        let month = block.month();
        let ctx = queries::signoff::load_month_context(conn, &staff_row, month)?;

        let command = Command::RemoveAssignment { assignment_id };
        let event = authorize_timesheet(&command, &ctx, block.date(), actor, cause)?;

        diesel::delete(assignments::table)
            .filter(assignments::assignment_id.eq(assignment_id))
            .execute(conn)
            .map_err(PersistenceError::from)?;

        audit::insert_audit_event(conn, &event, Some(block.staff_id()), Some(month))?;
        Ok(())
    })
}
