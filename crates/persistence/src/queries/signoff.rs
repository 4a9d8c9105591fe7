// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sign-off lock state queries.
//!
//! `load_month_context` is the read half of the mutation gate: it runs
//! inside the same transaction as the mutation it guards, so the lock
//! decision and the write are atomic.

use crate::data_models::{ReportSignOffRow, SignOffRow, StaffMonthSummary, StaffRow};
use crate::diesel_schema::{monthly_signoffs, report_signoffs};
use crate::error::PersistenceError;
use crate::queries::{staff, timesheet};
use diesel::prelude::*;
use dutybook::MonthContext;
use dutybook_domain::{Month, MonthlySignOff, ReportSignOff, total_entry_hours};
use rust_decimal::Decimal;

/// Fetches the sign-off row for a (staff, month) key, if any.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn signoff_row_for_month(
    conn: &mut SqliteConnection,
    staff_id: i64,
    month: Month,
) -> Result<Option<SignOffRow>, PersistenceError> {
    Ok(monthly_signoffs::table
        .filter(monthly_signoffs::staff_id.eq(staff_id))
        .filter(monthly_signoffs::year.eq(i32::from(month.year())))
        .filter(monthly_signoffs::month.eq(i32::from(month.month())))
        .first::<SignOffRow>(conn)
        .optional()?)
}

/// Fetches a sign-off row by identifier.
///
/// # Errors
///
/// Returns `SignOffNotFound` if no such record exists.
pub fn get_signoff_row(
    conn: &mut SqliteConnection,
    signoff_id: i64,
) -> Result<SignOffRow, PersistenceError> {
    monthly_signoffs::table
        .filter(monthly_signoffs::signoff_id.eq(signoff_id))
        .first::<SignOffRow>(conn)
        .optional()?
        .ok_or(PersistenceError::SignOffNotFound(signoff_id))
}

/// Fetches the sign-off record for a (staff, month) key, if any.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// value fails to parse.
pub fn get_signoff_for_month(
    conn: &mut SqliteConnection,
    staff_id: i64,
    month: Month,
) -> Result<Option<MonthlySignOff>, PersistenceError> {
    signoff_row_for_month(conn, staff_id, month)?
        .map(SignOffRow::into_domain)
        .transpose()
}

/// Checks whether a staff-month is frozen.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn is_month_signed_off(
    conn: &mut SqliteConnection,
    staff_id: i64,
    month: Month,
) -> Result<bool, PersistenceError> {
    Ok(signoff_row_for_month(conn, staff_id, month)?.is_some())
}

/// Loads the lock state of a (staff, month) scope for authorization.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// value fails to parse.
pub fn load_month_context(
    conn: &mut SqliteConnection,
    staff_row: &StaffRow,
    month: Month,
) -> Result<MonthContext, PersistenceError> {
    let (signoff, signed_off_by) = match signoff_row_for_month(conn, staff_row.staff_id, month)? {
        Some(row) => {
            let signoff = row.into_domain()?;
            let label = staff::staff_label(conn, signoff.signed_off_by());
            (Some(signoff), Some(label))
        }
        None => (None, None),
    };
    let block_count = timesheet::count_blocks_for_staff_month(conn, staff_row.staff_id, month)?;
    Ok(MonthContext {
        staff: staff_row.assignment_id.clone(),
        month,
        signoff,
        signed_off_by,
        block_count,
    })
}

/// Lists every per-staff sign-off for a month.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// value fails to parse.
pub fn list_signoffs_for_month(
    conn: &mut SqliteConnection,
    month: Month,
) -> Result<Vec<MonthlySignOff>, PersistenceError> {
    let rows = monthly_signoffs::table
        .filter(monthly_signoffs::year.eq(i32::from(month.year())))
        .filter(monthly_signoffs::month.eq(i32::from(month.month())))
        .order(monthly_signoffs::staff_id.asc())
        .load::<SignOffRow>(conn)?;
    rows.into_iter().map(SignOffRow::into_domain).collect()
}

/// Fetches the report sign-off row for a month, if any.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn report_signoff_row(
    conn: &mut SqliteConnection,
    month: Month,
) -> Result<Option<ReportSignOffRow>, PersistenceError> {
    Ok(report_signoffs::table
        .filter(report_signoffs::year.eq(i32::from(month.year())))
        .filter(report_signoffs::month.eq(i32::from(month.month())))
        .first::<ReportSignOffRow>(conn)
        .optional()?)
}

/// Fetches the report sign-off for a month, if any.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// value fails to parse.
pub fn get_report_signoff(
    conn: &mut SqliteConnection,
    month: Month,
) -> Result<Option<ReportSignOff>, PersistenceError> {
    report_signoff_row(conn, month)?
        .map(ReportSignOffRow::into_domain)
        .transpose()
}

/// Rolls up each staff member's month for the sign-off dashboard:
/// block count, hours, claims, and lock state.
///
/// Only staff with at least one block in the month appear.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// value fails to parse.
pub fn staff_month_summaries(
    conn: &mut SqliteConnection,
    month: Month,
) -> Result<Vec<StaffMonthSummary>, PersistenceError> {
    let staff_ids = timesheet::staff_ids_with_blocks(conn, month)?;
    let mut summaries = Vec::with_capacity(staff_ids.len());

    for staff_id in staff_ids {
        let member = staff::get_staff(conn, staff_id)?;
        let blocks = timesheet::blocks_with_entries_for_staff_month(conn, staff_id, month)?;

        let mut total_hours = Decimal::ZERO;
        let mut total_claims = Decimal::ZERO;
        for (block, entries) in &blocks {
            total_hours += total_entry_hours(block.date(), entries);
            if let Some(claim) = block.claim() {
                total_claims += claim;
            }
        }

        summaries.push(StaffMonthSummary {
            staff: member,
            block_count: blocks.len(),
            total_hours,
            total_claims,
            signoff: get_signoff_for_month(conn, staff_id, month)?,
        });
    }

    Ok(summaries)
}
