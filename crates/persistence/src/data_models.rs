// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs and conversions between stored text forms and domain
//! types.
//!
//! Dates, times, and decimals are stored as ISO text; the conversion
//! helpers here are the single place that parsing happens.

use crate::error::PersistenceError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use diesel::prelude::*;
use dutybook_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use dutybook_domain::{
    Assignment, BankHoliday, DayType, DutyMode, EntityRef, Month, MonthlySignOff, ReportSignOff,
    RotaEntry, RotaShift, SeniorityTier, Staff, TaskType, TimeBlock, TimeEntry, WorkMode,
};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const TIME_FORMAT: &str = "%H:%M:%S";
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, PersistenceError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| PersistenceError::ConversionError(format!("invalid date '{value}': {e}")))
}

pub(crate) fn parse_time(value: &str) -> Result<NaiveTime, PersistenceError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|e| PersistenceError::ConversionError(format!("invalid time '{value}': {e}")))
}

pub(crate) fn parse_datetime(value: &str) -> Result<NaiveDateTime, PersistenceError> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).map_err(|e| {
        PersistenceError::ConversionError(format!("invalid timestamp '{value}': {e}"))
    })
}

pub(crate) fn parse_decimal(value: &str) -> Result<Decimal, PersistenceError> {
    Decimal::from_str(value)
        .map_err(|e| PersistenceError::ConversionError(format!("invalid decimal '{value}': {e}")))
}

pub(crate) fn parse_month(year: i32, month: i32) -> Result<Month, PersistenceError> {
    let year = year
        .to_u16()
        .ok_or_else(|| PersistenceError::ConversionError(format!("invalid year {year}")))?;
    let month = month
        .to_u8()
        .ok_or_else(|| PersistenceError::ConversionError(format!("invalid month {month}")))?;
    Month::new(year, month).map_err(|e| PersistenceError::ConversionError(e.to_string()))
}

fn parse_domain<T: FromStr>(value: &str, what: &str) -> Result<T, PersistenceError> {
    value
        .parse::<T>()
        .map_err(|_| PersistenceError::ConversionError(format!("invalid {what} '{value}'")))
}

/// A stored staff row.
#[derive(Debug, Clone, Queryable)]
pub struct StaffRow {
    pub staff_id: i64,
    pub assignment_id: String,
    pub name: String,
    pub seniority_tier: String,
    pub color: String,
}

impl StaffRow {
    /// Converts the row to its domain form.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored seniority tier is unknown.
    pub fn into_domain(self) -> Result<Staff, PersistenceError> {
        let tier: SeniorityTier = parse_domain(&self.seniority_tier, "seniority tier")?;
        Ok(Staff::with_id(
            self.staff_id,
            &self.assignment_id,
            self.name,
            tier,
            self.color,
        ))
    }
}

/// A stored time block row.
#[derive(Debug, Clone, Queryable)]
pub struct TimeBlockRow {
    pub block_id: i64,
    pub staff_id: i64,
    pub date: String,
    pub day_type: String,
    pub duty_mode: String,
    pub claim: Option<String>,
    pub created_at: String,
    pub last_modified_at: String,
}

impl TimeBlockRow {
    /// Converts the row to its domain form.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored value fails to parse.
    pub fn into_domain(self) -> Result<TimeBlock, PersistenceError> {
        let date = parse_date(&self.date)?;
        let day_type: DayType = parse_domain(&self.day_type, "day type")?;
        let duty_mode: DutyMode = parse_domain(&self.duty_mode, "duty mode")?;
        let claim = self.claim.as_deref().map(parse_decimal).transpose()?;
        Ok(TimeBlock::with_id(
            self.block_id,
            self.staff_id,
            date,
            day_type,
            duty_mode,
            claim,
        ))
    }
}

/// A stored time entry row.
#[derive(Debug, Clone, Queryable)]
pub struct TimeEntryRow {
    pub entry_id: i64,
    pub block_id: i64,
    pub time_started: String,
    pub time_ended: String,
    pub task_type_id: i64,
    pub work_mode_id: i64,
    pub details: String,
    pub created_at: String,
    pub last_modified_at: String,
}

impl TimeEntryRow {
    /// Converts the row to its domain form.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored time fails to parse.
    pub fn into_domain(self) -> Result<TimeEntry, PersistenceError> {
        let start = parse_time(&self.time_started)?;
        let end = parse_time(&self.time_ended)?;
        Ok(TimeEntry::with_id(
            self.entry_id,
            start,
            end,
            self.task_type_id,
            self.work_mode_id,
            self.details,
        ))
    }
}

/// A stored assignment row.
#[derive(Debug, Clone, Queryable)]
pub struct AssignmentRow {
    pub assignment_id: i64,
    pub block_id: i64,
    pub entity_type: String,
    pub entity_id: String,
    pub notes: String,
    pub created_at: String,
}

impl AssignmentRow {
    /// Converts the row to its domain form.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored entity kind is unknown.
    pub fn into_domain(self) -> Result<Assignment, PersistenceError> {
        let entity = EntityRef::from_parts(&self.entity_type, &self.entity_id)
            .map_err(|e| PersistenceError::ConversionError(e.to_string()))?;
        Ok(Assignment::with_id(
            self.assignment_id,
            self.block_id,
            entity,
            self.notes,
        ))
    }
}

/// A stored per-staff sign-off row.
#[derive(Debug, Clone, Queryable)]
pub struct SignOffRow {
    pub signoff_id: i64,
    pub staff_id: i64,
    pub year: i32,
    pub month: i32,
    pub signed_off_by: i64,
    pub signed_off_at: String,
    pub notes: String,
}

impl SignOffRow {
    /// Converts the row to its domain form.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored value fails to parse.
    pub fn into_domain(self) -> Result<MonthlySignOff, PersistenceError> {
        let month = parse_month(self.year, self.month)?;
        let signed_off_at = parse_datetime(&self.signed_off_at)?;
        Ok(MonthlySignOff::with_id(
            self.signoff_id,
            self.staff_id,
            month,
            self.signed_off_by,
            signed_off_at,
            self.notes,
        ))
    }
}

/// A stored report sign-off row.
#[derive(Debug, Clone, Queryable)]
pub struct ReportSignOffRow {
    pub report_signoff_id: i64,
    pub year: i32,
    pub month: i32,
    pub signed_off_by: i64,
    pub signed_off_at: String,
    pub notes: String,
    pub staff_count: i64,
    pub total_hours: String,
    pub total_claims: String,
}

impl ReportSignOffRow {
    /// Converts the row to its domain form.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored value fails to parse.
    pub fn into_domain(self) -> Result<ReportSignOff, PersistenceError> {
        let month = parse_month(self.year, self.month)?;
        let signed_off_at = parse_datetime(&self.signed_off_at)?;
        let total_hours = parse_decimal(&self.total_hours)?;
        let total_claims = parse_decimal(&self.total_claims)?;
        Ok(ReportSignOff::with_id(
            self.report_signoff_id,
            month,
            self.signed_off_by,
            signed_off_at,
            self.notes,
            self.staff_count,
            total_hours,
            total_claims,
        ))
    }
}

/// A stored rota entry row.
#[derive(Debug, Clone, Queryable)]
pub struct RotaEntryRow {
    pub rota_entry_id: i64,
    pub date: String,
    pub duty_mode: String,
    pub created_at: String,
    pub last_modified_at: String,
}

impl RotaEntryRow {
    /// Converts the row to its domain form.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored value fails to parse.
    pub fn into_domain(self) -> Result<RotaEntry, PersistenceError> {
        let date = parse_date(&self.date)?;
        let duty_mode: DutyMode = parse_domain(&self.duty_mode, "duty mode")?;
        Ok(RotaEntry::with_id(self.rota_entry_id, date, duty_mode))
    }
}

/// A stored rota shift row.
#[derive(Debug, Clone, Queryable)]
pub struct RotaShiftRow {
    pub shift_id: i64,
    pub rota_entry_id: i64,
    pub staff_id: i64,
    pub seniority_tier: String,
    pub notes: String,
    pub created_at: String,
}

impl RotaShiftRow {
    /// Converts the row to its domain form.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored tier is unknown.
    pub fn into_domain(self) -> Result<RotaShift, PersistenceError> {
        let tier: SeniorityTier = parse_domain(&self.seniority_tier, "seniority tier")?;
        Ok(RotaShift::with_id(
            self.shift_id,
            self.staff_id,
            tier,
            self.notes,
        ))
    }
}

/// A stored bank-holiday row.
#[derive(Debug, Clone, Queryable)]
pub struct BankHolidayRow {
    pub holiday_id: i64,
    pub date: String,
    pub title: String,
    pub notes: String,
    pub updated_at: String,
}

impl BankHolidayRow {
    /// Converts the row to its domain form.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored date fails to parse.
    pub fn into_domain(self) -> Result<BankHoliday, PersistenceError> {
        let date = parse_date(&self.date)?;
        Ok(BankHoliday::new(date, self.title, self.notes))
    }
}

/// A stored audit event row.
#[derive(Debug, Clone, Queryable)]
pub struct AuditEventRow {
    pub event_id: i64,
    pub actor_id: String,
    pub actor_type: String,
    pub cause_id: String,
    pub cause_description: String,
    pub action_name: String,
    pub action_details: Option<String>,
    pub before_snapshot: String,
    pub after_snapshot: String,
    pub staff_id: Option<i64>,
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub created_at: String,
}

/// An audit event read back from storage, with its identifier and
/// scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAuditEvent {
    /// The event identifier.
    pub event_id: i64,
    /// The reconstructed audit event.
    pub event: AuditEvent,
    /// The staff scope, if the event was staff-scoped.
    pub staff_id: Option<i64>,
    /// The month scope, if the event was month-scoped.
    pub month: Option<Month>,
    /// When the event was recorded.
    pub created_at: NaiveDateTime,
}

impl AuditEventRow {
    /// Converts the row to a `StoredAuditEvent`.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored value fails to parse.
    pub fn into_stored(self) -> Result<StoredAuditEvent, PersistenceError> {
        let month = match (self.year, self.month) {
            (Some(year), Some(month)) => Some(parse_month(year, month)?),
            _ => None,
        };
        let created_at = parse_datetime(&self.created_at)?;
        let event = AuditEvent::new(
            Actor::new(self.actor_id, self.actor_type),
            Cause::new(self.cause_id, self.cause_description),
            Action::new(self.action_name, self.action_details),
            StateSnapshot::new(self.before_snapshot),
            StateSnapshot::new(self.after_snapshot),
        );
        Ok(StoredAuditEvent {
            event_id: self.event_id,
            event,
            staff_id: self.staff_id,
            month,
            created_at,
        })
    }
}

/// A stored lookup row shared by task types and work modes.
#[derive(Debug, Clone, Queryable)]
pub struct LookupRow {
    pub id: i64,
    pub name: String,
    pub color: String,
}

impl LookupRow {
    /// Converts to a domain task type.
    #[must_use]
    pub fn into_task_type(self) -> TaskType {
        TaskType::with_id(self.id, self.name, self.color)
    }

    /// Converts to a domain work mode.
    #[must_use]
    pub fn into_work_mode(self) -> WorkMode {
        WorkMode::with_id(self.id, self.name, self.color)
    }
}

/// Per-staff rollup of one month's blocks, hours, claims, and lock
/// state, as shown on the sign-off management dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffMonthSummary {
    /// The staff member.
    pub staff: Staff,
    /// Number of blocks recorded in the month.
    pub block_count: usize,
    /// Total worked hours across the month's blocks.
    pub total_hours: Decimal,
    /// Total claimed hours across the month's blocks.
    pub total_claims: Decimal,
    /// The lock record, if the month is signed off.
    pub signoff: Option<MonthlySignOff>,
}

/// Counters returned by a bank-holiday sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HolidaySyncStats {
    /// Rows inserted.
    pub created: usize,
    /// Rows refreshed in place.
    pub updated: usize,
}
