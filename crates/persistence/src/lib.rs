// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the dutybook on-call tracker.
//!
//! Built on Diesel over `SQLite` with embedded migrations. The
//! [`Persistence`] adapter exposes every boundary operation of the
//! tracker: staff and lookup management, the gated timesheet
//! mutations, the two-level sign-off protocol, monthly report
//! assembly, rota scheduling, the bank-holiday cache, and the audit
//! timeline.
//!
//! ## Gating
//!
//! Timesheet mutations run as one transaction each: load the
//! (staff, month) lock context, authorize the command through the
//! core engine, mutate, record the audit event. Sign-off creation
//! additionally leans on the store's unique constraints so that two
//! concurrent sign-off requests cannot both succeed.
//!
//! ## Testing
//!
//! `new_in_memory()` hands out a unique shared-cache in-memory
//! database per call via an atomic counter, so tests are hermetic and
//! deterministic without temp files.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use chrono::{NaiveDate, NaiveDateTime};
use diesel::SqliteConnection;
use dutybook_audit::{Actor, Cause};
use dutybook_domain::{
    Assignment, BankHoliday, DayType, DutyMode, EntityRef, HolidaySet, Month, MonthlyReport,
    MonthlySignOff, ReportSignOff, RotaEntry, RotaShift, RotaStatistics, SeniorityTier, Staff,
    TaskType, TimeBlock, TimeEntry, WorkMode,
};
use rust_decimal::Decimal;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

pub use data_models::{HolidaySyncStats, StaffMonthSummary, StoredAuditEvent};
pub use error::{OpError, PersistenceError};

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating
/// time-based collisions. Each call to `new_in_memory()` receives a
/// unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Persistence adapter for the dutybook tracker.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite`
    /// database.
    ///
    /// Each call receives a unique database instance via atomic
    /// counter, ensuring deterministic test isolation without
    /// time-based collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("dutybook_test_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn = sqlite::initialize_database(&shared_memory_url)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite`
    /// database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or
    /// initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn = sqlite::initialize_database(path_str)?;
        sqlite::enable_wal_mode(&mut conn)?;
        sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Staff
    // ========================================================================

    /// Creates a staff member, returning the assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the fields fail validation, or a
    /// storage error if the assignment identifier is taken.
    pub fn create_staff(&mut self, member: &Staff) -> Result<i64, OpError> {
        mutations::staff::create_staff(&mut self.conn, member)
    }

    /// Updates a staff member's name, seniority tier, and color.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the fields fail validation, or
    /// `StaffNotFound`.
    pub fn update_staff(
        &mut self,
        staff_id: i64,
        name: &str,
        seniority: SeniorityTier,
        color: &str,
    ) -> Result<(), OpError> {
        mutations::staff::update_staff(&mut self.conn, staff_id, name, seniority, color)
    }

    /// Fetches a staff member by canonical identifier.
    ///
    /// # Errors
    ///
    /// Returns `StaffNotFound` if no such staff member exists.
    pub fn get_staff(&mut self, staff_id: i64) -> Result<Staff, PersistenceError> {
        queries::staff::get_staff(&mut self.conn, staff_id)
    }

    /// Fetches a staff member by assignment identifier.
    ///
    /// # Errors
    ///
    /// Returns `StaffNotFound` if no such staff member exists.
    pub fn get_staff_by_assignment(
        &mut self,
        assignment_id: &str,
    ) -> Result<Staff, PersistenceError> {
        queries::staff::get_staff_by_assignment(&mut self.conn, assignment_id)
    }

    /// Lists all staff ordered by assignment identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_staff(&mut self) -> Result<Vec<Staff>, PersistenceError> {
        queries::staff::list_staff(&mut self.conn)
    }

    // ========================================================================
    // Task types & work modes
    // ========================================================================

    /// Seeds a task type, returning its identifier whether new or
    /// existing.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the color is outside the Bootstrap
    /// palette, or an error if the database cannot be written.
    pub fn seed_task_type(&mut self, name: &str, color: &str) -> Result<i64, OpError> {
        mutations::config::seed_task_type(&mut self.conn, name, color)
    }

    /// Seeds a work mode, returning its identifier whether new or
    /// existing.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the color is outside the Bootstrap
    /// palette, or an error if the database cannot be written.
    pub fn seed_work_mode(&mut self, name: &str, color: &str) -> Result<i64, OpError> {
        mutations::config::seed_work_mode(&mut self.conn, name, color)
    }

    /// Lists all task types.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_task_types(&mut self) -> Result<Vec<TaskType>, PersistenceError> {
        queries::config::list_task_types(&mut self.conn)
    }

    /// Lists all work modes.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_work_modes(&mut self) -> Result<Vec<WorkMode>, PersistenceError> {
        queries::config::list_work_modes(&mut self.conn)
    }

    /// Fetches a task type by name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no task type has the name.
    pub fn task_type_by_name(&mut self, name: &str) -> Result<TaskType, PersistenceError> {
        queries::config::task_type_by_name(&mut self.conn, name)
    }

    /// Fetches a work mode by name.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no work mode has the name.
    pub fn work_mode_by_name(&mut self, name: &str) -> Result<WorkMode, PersistenceError> {
        queries::config::work_mode_by_name(&mut self.conn, name)
    }

    // ========================================================================
    // Day-type resolution
    // ========================================================================

    /// Resolves a date's day type against the holiday cache: bank
    /// holiday first, then Saturday, Sunday, weekday.
    ///
    /// Cache lookup failures degrade to "not a holiday".
    pub fn resolve_day_type(&mut self, date: NaiveDate) -> DayType {
        let is_holiday = queries::holidays::is_bank_holiday(&mut self.conn, date).unwrap_or(false);
        DayType::from_parts(date, is_holiday)
    }

    // ========================================================================
    // Time blocks & entries (gated)
    // ========================================================================

    /// Creates a time block for a staff-day.
    ///
    /// Passing `None` for `day_type` auto-resolves it from the date
    /// via the holiday cache.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the month is signed off, the date is in
    /// the future, or the claim is negative.
    #[allow(clippy::too_many_arguments)]
    pub fn create_time_block(
        &mut self,
        staff_id: i64,
        date: NaiveDate,
        day_type: Option<DayType>,
        duty_mode: DutyMode,
        claim: Option<Decimal>,
        today: NaiveDate,
        actor: Actor,
        cause: Cause,
    ) -> Result<i64, OpError> {
        mutations::timesheet::create_time_block(
            &mut self.conn,
            staff_id,
            date,
            day_type,
            duty_mode,
            claim,
            today,
            actor,
            cause,
        )
    }

    /// Edits a block's day type, duty mode, and claim.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the block's month is signed off.
    pub fn edit_time_block(
        &mut self,
        block_id: i64,
        day_type: Option<DayType>,
        duty_mode: DutyMode,
        claim: Option<Decimal>,
        actor: Actor,
        cause: Cause,
    ) -> Result<(), OpError> {
        mutations::timesheet::edit_time_block(
            &mut self.conn,
            block_id,
            day_type,
            duty_mode,
            claim,
            actor,
            cause,
        )
    }

    /// Deletes a block and all its entries and assignments.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the block's month is signed off.
    pub fn delete_time_block(
        &mut self,
        block_id: i64,
        actor: Actor,
        cause: Cause,
    ) -> Result<(), OpError> {
        mutations::timesheet::delete_time_block(&mut self.conn, block_id, actor, cause)
    }

    /// Adds a worked interval to a block.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the block's month is signed off or the
    /// entry is zero-length.
    #[allow(clippy::too_many_arguments)]
    pub fn add_time_entry(
        &mut self,
        block_id: i64,
        start: chrono::NaiveTime,
        end: chrono::NaiveTime,
        task_type_id: i64,
        work_mode_id: i64,
        details: &str,
        actor: Actor,
        cause: Cause,
    ) -> Result<i64, OpError> {
        mutations::timesheet::add_time_entry(
            &mut self.conn,
            block_id,
            start,
            end,
            task_type_id,
            work_mode_id,
            details,
            actor,
            cause,
        )
    }

    /// Edits a worked interval.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the owning block's month is signed off
    /// or the entry is zero-length.
    #[allow(clippy::too_many_arguments)]
    pub fn edit_time_entry(
        &mut self,
        entry_id: i64,
        start: chrono::NaiveTime,
        end: chrono::NaiveTime,
        task_type_id: i64,
        work_mode_id: i64,
        details: &str,
        actor: Actor,
        cause: Cause,
    ) -> Result<(), OpError> {
        mutations::timesheet::edit_time_entry(
            &mut self.conn,
            entry_id,
            start,
            end,
            task_type_id,
            work_mode_id,
            details,
            actor,
            cause,
        )
    }

    /// Deletes a worked interval.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the owning block's month is signed off.
    pub fn delete_time_entry(
        &mut self,
        entry_id: i64,
        actor: Actor,
        cause: Cause,
    ) -> Result<(), OpError> {
        mutations::timesheet::delete_time_entry(&mut self.conn, entry_id, actor, cause)
    }

    /// Links an external entity to a block.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the month is signed off or the entity
    /// is already assigned to the block.
    pub fn add_assignment(
        &mut self,
        block_id: i64,
        entity: &EntityRef,
        notes: &str,
        actor: Actor,
        cause: Cause,
    ) -> Result<i64, OpError> {
        mutations::timesheet::add_assignment(&mut self.conn, block_id, entity, notes, actor, cause)
    }

    /// Removes an entity link from a block.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the month is signed off.
    pub fn remove_assignment(
        &mut self,
        assignment_id: i64,
        actor: Actor,
        cause: Cause,
    ) -> Result<(), OpError> {
        mutations::timesheet::remove_assignment(&mut self.conn, assignment_id, actor, cause)
    }

    /// Fetches a block by identifier.
    ///
    /// # Errors
    ///
    /// Returns `BlockNotFound` if no such block exists.
    pub fn get_block(&mut self, block_id: i64) -> Result<TimeBlock, PersistenceError> {
        queries::timesheet::get_block(&mut self.conn, block_id)
    }

    /// Lists a block's entries ordered by start time.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn entries_for_block(
        &mut self,
        block_id: i64,
    ) -> Result<Vec<TimeEntry>, PersistenceError> {
        queries::timesheet::entries_for_block(&mut self.conn, block_id)
    }

    /// Lists a staff member's blocks for a month, each with its
    /// entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn blocks_for_staff_month(
        &mut self,
        staff_id: i64,
        month: Month,
    ) -> Result<Vec<(TimeBlock, Vec<TimeEntry>)>, PersistenceError> {
        queries::timesheet::blocks_with_entries_for_staff_month(&mut self.conn, staff_id, month)
    }

    /// Lists a block's entity assignments.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn assignments_for_block(
        &mut self,
        block_id: i64,
    ) -> Result<Vec<Assignment>, PersistenceError> {
        queries::timesheet::assignments_for_block(&mut self.conn, block_id)
    }

    // ========================================================================
    // Sign-off locks
    // ========================================================================

    /// Checks whether a staff-month is frozen.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn is_month_signed_off(
        &mut self,
        staff_id: i64,
        month: Month,
    ) -> Result<bool, PersistenceError> {
        queries::signoff::is_month_signed_off(&mut self.conn, staff_id, month)
    }

    /// Fetches the sign-off record for a (staff, month) key, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn get_signoff(
        &mut self,
        staff_id: i64,
        month: Month,
    ) -> Result<Option<MonthlySignOff>, PersistenceError> {
        queries::signoff::get_signoff_for_month(&mut self.conn, staff_id, month)
    }

    /// Freezes a staff member's month.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the month is already signed off or has
    /// no blocks.
    pub fn sign_off_month(
        &mut self,
        staff_id: i64,
        month: Month,
        signed_off_by: i64,
        notes: &str,
        actor: Actor,
        cause: Cause,
    ) -> Result<MonthlySignOff, OpError> {
        mutations::signoff::sign_off_month(
            &mut self.conn,
            staff_id,
            month,
            signed_off_by,
            notes,
            actor,
            cause,
        )
    }

    /// Reverses a per-staff sign-off, reopening the month.
    ///
    /// # Errors
    ///
    /// Returns `SignOffNotFound` if the record does not exist.
    pub fn un_sign_off(
        &mut self,
        signoff_id: i64,
        actor: Actor,
        cause: Cause,
    ) -> Result<(), OpError> {
        mutations::signoff::un_sign_off(&mut self.conn, signoff_id, actor, cause)
    }

    /// Rolls up each staff member's month for the sign-off dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn staff_month_summaries(
        &mut self,
        month: Month,
    ) -> Result<Vec<StaffMonthSummary>, PersistenceError> {
        queries::signoff::staff_month_summaries(&mut self.conn, month)
    }

    /// Lists every per-staff sign-off for a month.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn list_signoffs_for_month(
        &mut self,
        month: Month,
    ) -> Result<Vec<MonthlySignOff>, PersistenceError> {
        queries::signoff::list_signoffs_for_month(&mut self.conn, month)
    }

    // ========================================================================
    // Monthly report
    // ========================================================================

    /// Assembles the monthly report: per-staff day-type buckets,
    /// grand totals, and the sign-off completeness summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn monthly_report(&mut self, month: Month) -> Result<MonthlyReport, PersistenceError> {
        queries::report::monthly_report(&mut self.conn, month)
    }

    /// Freezes a month's report, capturing snapshot totals.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the report is already signed off or the
    /// month has no staff records.
    pub fn sign_off_report(
        &mut self,
        month: Month,
        signed_off_by: i64,
        notes: &str,
        actor: Actor,
        cause: Cause,
    ) -> Result<ReportSignOff, OpError> {
        mutations::signoff::sign_off_report(
            &mut self.conn,
            month,
            signed_off_by,
            notes,
            actor,
            cause,
        )
    }

    /// Reverses a report sign-off.
    ///
    /// # Errors
    ///
    /// Returns `ReportSignOffNotFound` if no lock record exists.
    pub fn un_sign_off_report(
        &mut self,
        month: Month,
        actor: Actor,
        cause: Cause,
    ) -> Result<(), OpError> {
        mutations::signoff::un_sign_off_report(&mut self.conn, month, actor, cause)
    }

    /// Fetches the report sign-off for a month, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn get_report_signoff(
        &mut self,
        month: Month,
    ) -> Result<Option<ReportSignOff>, PersistenceError> {
        queries::signoff::get_report_signoff(&mut self.conn, month)
    }

    // ========================================================================
    // Rota
    // ========================================================================

    /// Gets or creates the rota entry for a date.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be written.
    pub fn ensure_rota_entry(&mut self, date: NaiveDate) -> Result<RotaEntry, PersistenceError> {
        mutations::rota::ensure_rota_entry(&mut self.conn, date)?.into_domain()
    }

    /// Assigns a staff member to a date at a tier.
    ///
    /// # Errors
    ///
    /// Returns a rejection if the staff member already holds the tier
    /// on the date.
    pub fn add_rota_shift(
        &mut self,
        date: NaiveDate,
        staff_id: i64,
        tier: SeniorityTier,
        notes: &str,
    ) -> Result<i64, OpError> {
        mutations::rota::add_rota_shift(&mut self.conn, date, staff_id, tier, notes)
    }

    /// Removes one shift, deleting the entry if it was the last.
    /// Returns whether the entry was removed too.
    ///
    /// # Errors
    ///
    /// Returns `ShiftNotFound` if the shift does not exist.
    pub fn remove_rota_shift(&mut self, shift_id: i64) -> Result<bool, PersistenceError> {
        mutations::rota::remove_rota_shift(&mut self.conn, shift_id)
    }

    /// Flips a date between the normal and locum schemes, returning
    /// the new mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be written.
    pub fn toggle_rota_mode(&mut self, date: NaiveDate) -> Result<DutyMode, PersistenceError> {
        mutations::rota::toggle_rota_mode(&mut self.conn, date)
    }

    /// Clears a date's shifts, optionally restricted to one tier.
    /// Returns the number of shifts deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be written.
    pub fn clear_rota_shifts(
        &mut self,
        date: NaiveDate,
        tier: Option<SeniorityTier>,
    ) -> Result<usize, PersistenceError> {
        mutations::rota::clear_rota_shifts(&mut self.conn, date, tier)
    }

    /// Fetches a date's rota entry and shifts, if the date is
    /// scheduled.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn rota_day(
        &mut self,
        date: NaiveDate,
    ) -> Result<Option<(RotaEntry, Vec<RotaShift>)>, PersistenceError> {
        let Some(row) = queries::rota::entry_row_for_date(&mut self.conn, date)? else {
            return Ok(None);
        };
        let entry_id = row.rota_entry_id;
        let entry = row.into_domain()?;
        let shifts = queries::rota::shifts_for_entry(&mut self.conn, entry_id)?;
        Ok(Some((entry, shifts)))
    }

    /// Loads the rota for a half-open date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn rota_for_range(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(RotaEntry, Vec<RotaShift>)>, PersistenceError> {
        queries::rota::rota_for_range(&mut self.conn, start, end)
    }

    /// Tallies shift statistics over a date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn rota_statistics(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RotaStatistics, PersistenceError> {
        queries::rota::rota_statistics(&mut self.conn, start, end)
    }

    // ========================================================================
    // Bank-holiday cache
    // ========================================================================

    /// Checks whether a date is a cached bank holiday.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn is_bank_holiday(&mut self, date: NaiveDate) -> Result<bool, PersistenceError> {
        queries::holidays::is_bank_holiday(&mut self.conn, date)
    }

    /// Lists the cached holidays within a half-open date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn holidays_in_range(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<BankHoliday>, PersistenceError> {
        queries::holidays::holidays_in_range(&mut self.conn, start, end)
    }

    /// Builds a set-backed lookup over a range's cached holidays, for
    /// classifying a whole calendar with one read.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn holiday_set_for_range(
        &mut self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<HolidaySet, PersistenceError> {
        queries::holidays::holiday_set_for_range(&mut self.conn, start, end)
    }

    /// Applies a synced holiday dataset to the cache.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be written.
    pub fn upsert_bank_holidays(
        &mut self,
        holidays: &[BankHoliday],
    ) -> Result<HolidaySyncStats, PersistenceError> {
        mutations::holidays::upsert_bank_holidays(&mut self.conn, holidays)
    }

    /// Returns the most recent holiday-cache refresh time, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn latest_holiday_update(
        &mut self,
    ) -> Result<Option<NaiveDateTime>, PersistenceError> {
        queries::holidays::latest_update(&mut self.conn)
    }

    // ========================================================================
    // Audit
    // ========================================================================

    /// Fetches an audit event by identifier.
    ///
    /// # Errors
    ///
    /// Returns `EventNotFound` if no such event exists.
    pub fn get_audit_event(
        &mut self,
        event_id: i64,
    ) -> Result<StoredAuditEvent, PersistenceError> {
        queries::audit::get_audit_event(&mut self.conn, event_id)
    }

    /// Lists the ordered audit timeline for a (staff, month) scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn audit_timeline(
        &mut self,
        staff_id: i64,
        month: Month,
    ) -> Result<Vec<StoredAuditEvent>, PersistenceError> {
        queries::audit::timeline_for_staff_month(&mut self.conn, staff_id, month)
    }

    /// Lists audit events with no staff scope (report-level actions).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be queried.
    pub fn unscoped_audit_events(
        &mut self,
    ) -> Result<Vec<StoredAuditEvent>, PersistenceError> {
        queries::audit::unscoped_events(&mut self.conn)
    }
}
