// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{NaiveDate, NaiveTime};
use dutybook_domain::{DayType, DutyMode, EntityRef, Month, SeniorityTier};
use rust_decimal::Decimal;

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request a state change. Timesheet
/// commands pass through the sign-off gate before any row is touched;
/// rota commands have no lock interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record a new time block for a staff-day.
    CreateBlock {
        /// The owning staff member.
        staff_id: i64,
        /// The duty date.
        date: NaiveDate,
        /// The resolved day type (classification happens before the
        /// command is built).
        day_type: DayType,
        /// The staffing scheme the block was worked under.
        duty_mode: DutyMode,
        /// Manually claimed hours, if submitted.
        claim: Option<Decimal>,
    },
    /// Edit an existing block's mutable fields. The date is fixed at
    /// creation and cannot be changed.
    EditBlock {
        /// The block to edit.
        block_id: i64,
        /// The new day type.
        day_type: DayType,
        /// The new duty mode.
        duty_mode: DutyMode,
        /// The new claim value.
        claim: Option<Decimal>,
    },
    /// Delete a block together with its entries and assignments.
    DeleteBlock {
        /// The block to delete.
        block_id: i64,
    },
    /// Add a worked interval to a block.
    AddEntry {
        /// The owning block.
        block_id: i64,
        /// Start time of day.
        start: NaiveTime,
        /// End time of day; at or before `start` means overnight.
        end: NaiveTime,
        /// The task performed.
        task_type_id: i64,
        /// How the work was carried out.
        work_mode_id: i64,
        /// Free-text details.
        details: String,
    },
    /// Edit an existing entry.
    EditEntry {
        /// The entry to edit.
        entry_id: i64,
        /// New start time.
        start: NaiveTime,
        /// New end time.
        end: NaiveTime,
        /// New task type.
        task_type_id: i64,
        /// New work mode.
        work_mode_id: i64,
        /// New details.
        details: String,
    },
    /// Delete an entry.
    DeleteEntry {
        /// The entry to delete.
        entry_id: i64,
    },
    /// Link an external entity to a block.
    AddAssignment {
        /// The owning block.
        block_id: i64,
        /// The entity to link.
        entity: EntityRef,
        /// Free-text notes.
        notes: String,
    },
    /// Remove an entity link from a block.
    RemoveAssignment {
        /// The assignment to remove.
        assignment_id: i64,
    },
    /// Freeze a staff member's month.
    SignOffMonth {
        /// The staff member whose month is being frozen.
        staff_id: i64,
        /// The month to freeze.
        month: Month,
        /// Who is performing the sign-off.
        signed_off_by: i64,
        /// Optional notes.
        notes: String,
    },
    /// Reverse a per-staff sign-off. Unconditional.
    UnSignOffMonth {
        /// The sign-off record to remove.
        signoff_id: i64,
    },
    /// Freeze a whole month's report, capturing snapshot totals.
    SignOffReport {
        /// The month to freeze.
        month: Month,
        /// Who is signing the report off.
        signed_off_by: i64,
        /// Optional notes.
        notes: String,
    },
    /// Reverse a report sign-off. Unconditional.
    UnSignOffReport {
        /// The month whose report lock is removed.
        month: Month,
    },
    /// Assign a staff member to a rota date at a tier.
    AddRotaShift {
        /// The rota date.
        date: NaiveDate,
        /// The staff member to assign.
        staff_id: i64,
        /// The slot tier.
        tier: SeniorityTier,
    },
    /// Remove one shift from the rota.
    RemoveRotaShift {
        /// The shift to remove.
        shift_id: i64,
    },
    /// Flip a rota date between the normal and locum schemes.
    ToggleRotaMode {
        /// The rota date.
        date: NaiveDate,
    },
    /// Clear a rota date's shifts, optionally only one tier.
    ClearRotaShifts {
        /// The rota date.
        date: NaiveDate,
        /// Restrict clearing to this tier, or clear everything.
        tier: Option<SeniorityTier>,
    },
}
