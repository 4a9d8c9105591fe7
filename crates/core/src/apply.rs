// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{MonthContext, ReportContext, RotaDayContext};
use chrono::NaiveDate;
use dutybook_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use dutybook_domain::{
    Month, SeniorityTier, validate_block_date, validate_claim, validate_entry_times,
};

/// Compact month form used in snapshot strings.
fn month_key(month: Month) -> String {
    format!("{:04}-{:02}", month.year(), month.month())
}

/// Renders a (staff, month) scope snapshot.
fn scope_snapshot(ctx: &MonthContext, block_count: usize, locked: bool) -> StateSnapshot {
    StateSnapshot::new(format!(
        "staff={},month={},blocks={block_count},locked={locked}",
        ctx.staff,
        month_key(ctx.month)
    ))
}

/// Rejects the command if the targeted staff-month is frozen.
///
/// This is the mutation gate: it runs before any create, edit, or
/// delete of a block or entry. The error identifies who signed the
/// month off and when.
///
/// # Errors
///
/// Returns `CoreError::MonthSignedOff` if a sign-off record exists for
/// the scope.
pub fn ensure_month_open(ctx: &MonthContext) -> Result<(), CoreError> {
    if let Some(signoff) = &ctx.signoff {
        return Err(CoreError::MonthSignedOff {
            staff: ctx.staff.clone(),
            month: ctx.month,
            signed_off_by: ctx
                .signed_off_by
                .clone()
                .unwrap_or_else(|| signoff.signed_off_by().to_string()),
            signed_off_at: signoff.signed_off_at(),
        });
    }
    Ok(())
}

/// Authorizes a timesheet mutation (block or entry create/edit/delete).
///
/// Applies the sign-off gate first, then the command's field
/// validation, and produces the audit event for the transition.
/// The caller performs the row mutation and persists the event in the
/// same transaction.
///
/// # Arguments
///
/// * `command` - The timesheet command to authorize
/// * `ctx` - The lock state of the (staff, month) the command targets
/// * `today` - Reference date for future-date validation
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if the month is signed off or a domain rule is
/// violated.
///
/// # Panics
///
/// Panics if called with a non-timesheet command; sign-off and rota
/// commands have their own authorization entry points.
pub fn authorize_timesheet(
    command: &Command,
    ctx: &MonthContext,
    today: NaiveDate,
    actor: Actor,
    cause: Cause,
) -> Result<AuditEvent, CoreError> {
    // The gate applies uniformly to every mutation kind.
    ensure_month_open(ctx)?;

    let before = scope_snapshot(ctx, ctx.block_count, false);

    let (action, after_blocks) = match command {
        Command::CreateBlock {
            date,
            day_type,
            duty_mode,
            claim,
            ..
        } => {
            validate_block_date(*date, today)?;
            if let Some(claim) = claim {
                validate_claim(*claim)?;
            }
            let action = Action::new(
                String::from("CreateBlock"),
                Some(format!(
                    "Created {} block for {} on {date} ({day_type})",
                    duty_mode, ctx.staff
                )),
            );
            (action, ctx.block_count + 1)
        }
        Command::EditBlock {
            block_id,
            day_type,
            duty_mode,
            claim,
        } => {
            if let Some(claim) = claim {
                validate_claim(*claim)?;
            }
            let action = Action::new(
                String::from("EditBlock"),
                Some(format!(
                    "Edited block {block_id} for {} ({day_type}, {duty_mode})",
                    ctx.staff
                )),
            );
            (action, ctx.block_count)
        }
        Command::DeleteBlock { block_id } => {
            let action = Action::new(
                String::from("DeleteBlock"),
                Some(format!(
                    "Deleted block {block_id} for {} with its entries",
                    ctx.staff
                )),
            );
            (action, ctx.block_count.saturating_sub(1))
        }
        Command::AddEntry {
            block_id,
            start,
            end,
            ..
        } => {
            validate_entry_times(*start, *end)?;
            let action = Action::new(
                String::from("AddEntry"),
                Some(format!(
                    "Added entry {start}-{end} to block {block_id} for {}",
                    ctx.staff
                )),
            );
            (action, ctx.block_count)
        }
        Command::EditEntry {
            entry_id,
            start,
            end,
            ..
        } => {
            validate_entry_times(*start, *end)?;
            let action = Action::new(
                String::from("EditEntry"),
                Some(format!(
                    "Edited entry {entry_id} to {start}-{end} for {}",
                    ctx.staff
                )),
            );
            (action, ctx.block_count)
        }
        Command::DeleteEntry { entry_id } => {
            let action = Action::new(
                String::from("DeleteEntry"),
                Some(format!("Deleted entry {entry_id} for {}", ctx.staff)),
            );
            (action, ctx.block_count)
        }
        Command::AddAssignment {
            block_id, entity, ..
        } => {
            let action = Action::new(
                String::from("AddAssignment"),
                Some(format!(
                    "Assigned {entity} to block {block_id} for {}",
                    ctx.staff
                )),
            );
            (action, ctx.block_count)
        }
        Command::RemoveAssignment { assignment_id } => {
            let action = Action::new(
                String::from("RemoveAssignment"),
                Some(format!(
                    "Removed assignment {assignment_id} for {}",
                    ctx.staff
                )),
            );
            (action, ctx.block_count)
        }
        _ => unreachable!("authorize_timesheet called with a non-timesheet command"),
    };

    let after = scope_snapshot(ctx, after_blocks, false);
    Ok(AuditEvent::new(actor, cause, action, before, after))
}

/// Authorizes a per-staff sign-off or its reversal.
///
/// Signing off requires that the month is not already frozen and has
/// at least one block. Reversal is unconditional.
///
/// # Errors
///
/// Returns `CoreError::DuplicateSignOff` or
/// `CoreError::EmptyMonthSignOff` when signing off an ineligible
/// month.
///
/// # Panics
///
/// Panics if called with a command that is not `SignOffMonth` or
/// `UnSignOffMonth`.
pub fn authorize_signoff(
    command: &Command,
    ctx: &MonthContext,
    actor: Actor,
    cause: Cause,
) -> Result<AuditEvent, CoreError> {
    match command {
        Command::SignOffMonth { .. } => {
            if ctx.signoff.is_some() {
                return Err(CoreError::DuplicateSignOff {
                    staff: ctx.staff.clone(),
                    month: ctx.month,
                });
            }
            if ctx.block_count == 0 {
                return Err(CoreError::EmptyMonthSignOff {
                    staff: ctx.staff.clone(),
                    month: ctx.month,
                });
            }

            let before = scope_snapshot(ctx, ctx.block_count, false);
            let after = scope_snapshot(ctx, ctx.block_count, true);
            let action = Action::new(
                String::from("SignOffMonth"),
                Some(format!(
                    "Signed off {} for {} ({} blocks)",
                    ctx.month, ctx.staff, ctx.block_count
                )),
            );
            Ok(AuditEvent::new(actor, cause, action, before, after))
        }
        Command::UnSignOffMonth { signoff_id } => {
            let before = scope_snapshot(ctx, ctx.block_count, ctx.is_locked());
            let after = scope_snapshot(ctx, ctx.block_count, false);
            let action = Action::new(
                String::from("UnSignOffMonth"),
                Some(format!(
                    "Removed sign-off {signoff_id} for {} - {}",
                    ctx.staff, ctx.month
                )),
            );
            Ok(AuditEvent::new(actor, cause, action, before, after))
        }
        _ => unreachable!("authorize_signoff called with a non-sign-off command"),
    }
}

/// Authorizes a report-level sign-off or its reversal.
///
/// Report sign-off does not require every staff-month to be signed off
/// first; pending staff are surfaced separately as a warning. It does
/// require at least one staff record and no existing report lock.
///
/// # Errors
///
/// Returns `CoreError::DuplicateReportSignOff` or
/// `CoreError::EmptyReportSignOff` when signing off an ineligible
/// report month.
///
/// # Panics
///
/// Panics if called with a command that is not `SignOffReport` or
/// `UnSignOffReport`.
pub fn authorize_report(
    command: &Command,
    ctx: &ReportContext,
    actor: Actor,
    cause: Cause,
) -> Result<AuditEvent, CoreError> {
    let snapshot = |locked: bool| {
        StateSnapshot::new(format!(
            "report={},staff={},locked={locked}",
            month_key(ctx.month),
            ctx.staff_with_records
        ))
    };

    match command {
        Command::SignOffReport { .. } => {
            if ctx.report_signoff.is_some() {
                return Err(CoreError::DuplicateReportSignOff { month: ctx.month });
            }
            if ctx.staff_with_records == 0 {
                return Err(CoreError::EmptyReportSignOff { month: ctx.month });
            }

            let action = Action::new(
                String::from("SignOffReport"),
                Some(format!(
                    "Signed off the report for {} ({} staff)",
                    ctx.month, ctx.staff_with_records
                )),
            );
            Ok(AuditEvent::new(
                actor,
                cause,
                action,
                snapshot(false),
                snapshot(true),
            ))
        }
        Command::UnSignOffReport { .. } => {
            let action = Action::new(
                String::from("UnSignOffReport"),
                Some(format!("Removed the report sign-off for {}", ctx.month)),
            );
            Ok(AuditEvent::new(
                actor,
                cause,
                action,
                snapshot(ctx.is_locked()),
                snapshot(false),
            ))
        }
        _ => unreachable!("authorize_report called with a non-report command"),
    }
}

/// Rejects a rota assignment that duplicates an occupied slot.
///
/// # Arguments
///
/// * `ctx` - The occupancy of the rota date
/// * `staff` - Assignment identifier of the staff, for messages
/// * `staff_id` - The staff member's canonical identifier
/// * `tier` - The slot tier being requested
/// * `date` - The rota date
///
/// # Errors
///
/// Returns `CoreError::DuplicateRotaShift` if the staff member already
/// holds the tier on the date.
pub fn check_rota_slot(
    ctx: &RotaDayContext,
    staff: &str,
    staff_id: i64,
    tier: SeniorityTier,
    date: NaiveDate,
) -> Result<(), CoreError> {
    if ctx.holds_slot(staff_id, tier) {
        return Err(CoreError::DuplicateRotaShift {
            staff: staff.to_string(),
            tier,
            date,
        });
    }
    Ok(())
}
