// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time block, entry, and assignment queries.
//!
//! Month filters compare ISO date text lexicographically against the
//! half-open `[start, next_month_start)` range, which is equivalent to
//! date comparison for `%Y-%m-%d` strings.

use crate::data_models::{
    AssignmentRow, TimeBlockRow, TimeEntryRow, format_date,
};
use crate::diesel_schema::{assignments, time_blocks, time_entries};
use crate::error::PersistenceError;
use diesel::prelude::*;
use dutybook_domain::{Assignment, Month, TimeBlock, TimeEntry};
use num_traits::ToPrimitive;

/// Renders a month's half-open date bounds in stored text form.
#[must_use]
pub fn month_bounds(month: Month) -> (String, String) {
    let (start, end) = month.date_range();
    (format_date(start), format_date(end))
}

/// Fetches a block row by identifier.
///
/// # Errors
///
/// Returns `BlockNotFound` if no such block exists.
pub fn get_block_row(
    conn: &mut SqliteConnection,
    block_id: i64,
) -> Result<TimeBlockRow, PersistenceError> {
    time_blocks::table
        .filter(time_blocks::block_id.eq(block_id))
        .first::<TimeBlockRow>(conn)
        .optional()?
        .ok_or(PersistenceError::BlockNotFound(block_id))
}

/// Fetches a block by identifier.
///
/// # Errors
///
/// Returns `BlockNotFound` if no such block exists.
pub fn get_block(
    conn: &mut SqliteConnection,
    block_id: i64,
) -> Result<TimeBlock, PersistenceError> {
    get_block_row(conn, block_id)?.into_domain()
}

/// Fetches an entry row by identifier.
///
/// # Errors
///
/// Returns `EntryNotFound` if no such entry exists.
pub fn get_entry_row(
    conn: &mut SqliteConnection,
    entry_id: i64,
) -> Result<TimeEntryRow, PersistenceError> {
    time_entries::table
        .filter(time_entries::entry_id.eq(entry_id))
        .first::<TimeEntryRow>(conn)
        .optional()?
        .ok_or(PersistenceError::EntryNotFound(entry_id))
}

/// Lists a block's entries ordered by start time.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn entries_for_block(
    conn: &mut SqliteConnection,
    block_id: i64,
) -> Result<Vec<TimeEntry>, PersistenceError> {
    let rows = time_entries::table
        .filter(time_entries::block_id.eq(block_id))
        .order(time_entries::time_started.asc())
        .load::<TimeEntryRow>(conn)?;
    rows.into_iter().map(TimeEntryRow::into_domain).collect()
}

/// Lists a staff member's block rows for a month, ordered by date.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn block_rows_for_staff_month(
    conn: &mut SqliteConnection,
    staff_id: i64,
    month: Month,
) -> Result<Vec<TimeBlockRow>, PersistenceError> {
    let (start, end) = month_bounds(month);
    Ok(time_blocks::table
        .filter(time_blocks::staff_id.eq(staff_id))
        .filter(time_blocks::date.ge(start))
        .filter(time_blocks::date.lt(end))
        .order(time_blocks::date.asc())
        .load::<TimeBlockRow>(conn)?)
}

/// Lists a staff member's blocks for a month, each with its entries.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// value fails to parse.
pub fn blocks_with_entries_for_staff_month(
    conn: &mut SqliteConnection,
    staff_id: i64,
    month: Month,
) -> Result<Vec<(TimeBlock, Vec<TimeEntry>)>, PersistenceError> {
    let rows = block_rows_for_staff_month(conn, staff_id, month)?;
    let mut result = Vec::with_capacity(rows.len());
    for row in rows {
        let block_id = row.block_id;
        let block = row.into_domain()?;
        let entries = entries_for_block(conn, block_id)?;
        result.push((block, entries));
    }
    Ok(result)
}

/// Counts a staff member's blocks in a month.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn count_blocks_for_staff_month(
    conn: &mut SqliteConnection,
    staff_id: i64,
    month: Month,
) -> Result<usize, PersistenceError> {
    let (start, end) = month_bounds(month);
    let count: i64 = time_blocks::table
        .filter(time_blocks::staff_id.eq(staff_id))
        .filter(time_blocks::date.ge(start))
        .filter(time_blocks::date.lt(end))
        .count()
        .get_result(conn)?;
    count
        .to_usize()
        .ok_or_else(|| PersistenceError::ConversionError("Count conversion failed".to_string()))
}

/// Lists the distinct staff identifiers with at least one block in a
/// month.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn staff_ids_with_blocks(
    conn: &mut SqliteConnection,
    month: Month,
) -> Result<Vec<i64>, PersistenceError> {
    let (start, end) = month_bounds(month);
    Ok(time_blocks::table
        .filter(time_blocks::date.ge(start))
        .filter(time_blocks::date.lt(end))
        .select(time_blocks::staff_id)
        .distinct()
        .order(time_blocks::staff_id.asc())
        .load::<i64>(conn)?)
}

/// Fetches an assignment row by identifier.
///
/// # Errors
///
/// Returns `AssignmentNotFound` if no such assignment exists.
pub fn get_assignment_row(
    conn: &mut SqliteConnection,
    assignment_id: i64,
) -> Result<AssignmentRow, PersistenceError> {
    assignments::table
        .filter(assignments::assignment_id.eq(assignment_id))
        .first::<AssignmentRow>(conn)
        .optional()?
        .ok_or(PersistenceError::AssignmentNotFound(assignment_id))
}

/// Lists a block's entity assignments.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// entity kind is unknown.
pub fn assignments_for_block(
    conn: &mut SqliteConnection,
    block_id: i64,
) -> Result<Vec<Assignment>, PersistenceError> {
    let rows = assignments::table
        .filter(assignments::block_id.eq(block_id))
        .order(assignments::assignment_id.asc())
        .load::<AssignmentRow>(conn)?;
    rows.into_iter().map(AssignmentRow::into_domain).collect()
}
