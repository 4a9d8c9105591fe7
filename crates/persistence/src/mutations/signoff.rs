// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sign-off lock mutations.
//!
//! The duplicate-sign-off guard runs twice: once in the core engine
//! against the loaded context, and once at the store through the
//! unique constraint. The second closes the race where two concurrent
//! sign-off requests both pass the first check; the constraint hit is
//! mapped back to the same rejection.

use crate::diesel_schema::{monthly_signoffs, report_signoffs};
use crate::error::{OpError, PersistenceError};
use crate::mutations::audit;
use crate::queries;
use crate::sqlite;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use dutybook::{Command, CoreError, ReportContext, authorize_report, authorize_signoff};
use dutybook_audit::{Actor, Cause};
use dutybook_domain::{Month, MonthlySignOff, ReportSignOff};
use tracing::info;

/// Freezes a staff member's month.
///
/// # Errors
///
/// Returns a rejection if the month is already signed off or has no
/// blocks; `StaffNotFound` if either staff member does not exist.
pub fn sign_off_month(
    conn: &mut SqliteConnection,
    staff_id: i64,
    month: Month,
    signed_off_by: i64,
    notes: &str,
    actor: Actor,
    cause: Cause,
) -> Result<MonthlySignOff, OpError> {
    conn.transaction::<MonthlySignOff, OpError, _>(|conn| {
        let staff_row = queries::staff::get_staff_row(conn, staff_id)?;
        // The signer must exist too.
        queries::staff::get_staff_row(conn, signed_off_by)?;
        let ctx = queries::signoff::load_month_context(conn, &staff_row, month)?;

        let command = Command::SignOffMonth {
            staff_id,
            month,
            signed_off_by,
            notes: notes.to_string(),
        };
        let event = authorize_signoff(&command, &ctx, actor, cause)?;

        let inserted = diesel::insert_into(monthly_signoffs::table)
            .values((
                monthly_signoffs::staff_id.eq(staff_id),
                monthly_signoffs::year.eq(i32::from(month.year())),
                monthly_signoffs::month.eq(i32::from(month.month())),
                monthly_signoffs::signed_off_by.eq(signed_off_by),
                monthly_signoffs::notes.eq(notes),
            ))
            .execute(conn);

        if let Err(diesel::result::Error::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            _,
        )) = inserted
        {
            return Err(CoreError::DuplicateSignOff {
                staff: ctx.staff,
                month,
            }
            .into());
        }
        inserted.map_err(PersistenceError::from)?;

        let signoff_id = sqlite::get_last_insert_rowid(conn)?;
        let signoff = queries::signoff::get_signoff_row(conn, signoff_id)?.into_domain()?;

        audit::insert_audit_event(conn, &event, Some(staff_id), Some(month))?;
        info!(staff_id, %month, "Signed off month");
        Ok(signoff)
    })
}

/// Reverses a per-staff sign-off, reopening the month. Unconditional.
///
/// # Errors
///
/// Returns `SignOffNotFound` if the record does not exist.
pub fn un_sign_off(
    conn: &mut SqliteConnection,
    signoff_id: i64,
    actor: Actor,
    cause: Cause,
) -> Result<(), OpError> {
    conn.transaction::<(), OpError, _>(|conn| {
        let row = queries::signoff::get_signoff_row(conn, signoff_id)?;
        let staff_row = queries::staff::get_staff_row(conn, row.staff_id)?;
        let signoff = row.into_domain()?;
        let month = signoff.month();
        let staff_id = signoff.staff_id();
        let ctx = queries::signoff::load_month_context(conn, &staff_row, month)?;

        let command = Command::UnSignOffMonth { signoff_id };
        let event = authorize_signoff(&command, &ctx, actor, cause)?;

        diesel::delete(monthly_signoffs::table)
            .filter(monthly_signoffs::signoff_id.eq(signoff_id))
            .execute(conn)
            .map_err(PersistenceError::from)?;

        audit::insert_audit_event(conn, &event, Some(staff_id), Some(month))?;
        info!(staff_id, %month, "Removed sign-off");
        Ok(())
    })
}

/// Freezes a month's report, capturing snapshot totals.
///
/// The totals are computed from live data at signing time and stored
/// on the lock record as a submission receipt; they never update
/// retroactively.
///
/// # Errors
///
/// Returns a rejection if the report is already signed off or the
/// month has no staff records.
pub fn sign_off_report(
    conn: &mut SqliteConnection,
    month: Month,
    signed_off_by: i64,
    notes: &str,
    actor: Actor,
    cause: Cause,
) -> Result<ReportSignOff, OpError> {
    conn.transaction::<ReportSignOff, OpError, _>(|conn| {
        queries::staff::get_staff_row(conn, signed_off_by)?;
        let report = queries::report::monthly_report(conn, month)?;
        let existing = queries::signoff::get_report_signoff(conn, month)?;
        let ctx = ReportContext {
            month,
            report_signoff: existing,
            staff_with_records: report.staff_reports.len(),
        };

        let command = Command::SignOffReport {
            month,
            signed_off_by,
            notes: notes.to_string(),
        };
        let event = authorize_report(&command, &ctx, actor, cause)?;

        let staff_count = i64::try_from(report.staff_reports.len()).unwrap_or(i64::MAX);
        let inserted = diesel::insert_into(report_signoffs::table)
            .values((
                report_signoffs::year.eq(i32::from(month.year())),
                report_signoffs::month.eq(i32::from(month.month())),
                report_signoffs::signed_off_by.eq(signed_off_by),
                report_signoffs::notes.eq(notes),
                report_signoffs::staff_count.eq(staff_count),
                report_signoffs::total_hours.eq(report.grand_total_hours.to_string()),
                report_signoffs::total_claims.eq(report.grand_total_claims.to_string()),
            ))
            .execute(conn);

        if let Err(diesel::result::Error::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            _,
        )) = inserted
        {
            return Err(CoreError::DuplicateReportSignOff { month }.into());
        }
        inserted.map_err(PersistenceError::from)?;

        let report_signoff = queries::signoff::get_report_signoff(conn, month)?.ok_or(
            PersistenceError::ReportSignOffNotFound {
                year: month.year(),
                month: month.month(),
            },
        )?;

        audit::insert_audit_event(conn, &event, None, Some(month))?;
        info!(%month, "Signed off monthly report");
        Ok(report_signoff)
    })
}

/// Reverses a report sign-off. Unconditional.
///
/// # Errors
///
/// Returns `ReportSignOffNotFound` if no lock record exists for the
/// month.
pub fn un_sign_off_report(
    conn: &mut SqliteConnection,
    month: Month,
    actor: Actor,
    cause: Cause,
) -> Result<(), OpError> {
    conn.transaction::<(), OpError, _>(|conn| {
        let existing = queries::signoff::get_report_signoff(conn, month)?.ok_or(
            PersistenceError::ReportSignOffNotFound {
                year: month.year(),
                month: month.month(),
            },
        )?;
        let ctx = ReportContext {
            month,
            report_signoff: Some(existing),
            staff_with_records: 0,
        };

        let command = Command::UnSignOffReport { month };
        let event = authorize_report(&command, &ctx, actor, cause)?;

        diesel::delete(report_signoffs::table)
            .filter(report_signoffs::year.eq(i32::from(month.year())))
            .filter(report_signoffs::month.eq(i32::from(month.month())))
            .execute(conn)
            .map_err(PersistenceError::from)?;

        audit::insert_audit_event(conn, &event, None, Some(month))?;
        info!(%month, "Removed report sign-off");
        Ok(())
    })
}
