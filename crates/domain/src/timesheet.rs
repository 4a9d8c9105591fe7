// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::day_type::DayType;
use crate::duration::entry_hours;
use crate::month::Month;
use crate::types::DutyMode;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One staff-day of on-call duty.
///
/// A block owns its time entries and entity assignments; deleting the
/// block deletes them. The claim is a manually submitted figure,
/// independent of the hours computed from entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    /// Canonical internal identifier. `None` until persisted.
    block_id: Option<i64>,
    /// The owning staff member's canonical identifier.
    staff_id: i64,
    /// The calendar date of the duty.
    date: NaiveDate,
    /// Resolved day-type category.
    day_type: DayType,
    /// The staffing scheme this block was worked under.
    duty_mode: DutyMode,
    /// Manually claimed hours, if submitted.
    claim: Option<Decimal>,
}

impl TimeBlock {
    /// Creates a new `TimeBlock` without a persisted identifier.
    ///
    /// The day type is passed in explicitly; callers resolve it via
    /// [`DayType::classify`] when the submitter did not choose one.
    #[must_use]
    pub const fn new(
        staff_id: i64,
        date: NaiveDate,
        day_type: DayType,
        duty_mode: DutyMode,
        claim: Option<Decimal>,
    ) -> Self {
        Self {
            block_id: None,
            staff_id,
            date,
            day_type,
            duty_mode,
            claim,
        }
    }

    /// Creates a `TimeBlock` with an existing persisted identifier.
    #[must_use]
    pub const fn with_id(
        block_id: i64,
        staff_id: i64,
        date: NaiveDate,
        day_type: DayType,
        duty_mode: DutyMode,
        claim: Option<Decimal>,
    ) -> Self {
        Self {
            block_id: Some(block_id),
            staff_id,
            date,
            day_type,
            duty_mode,
            claim,
        }
    }

    /// Returns the canonical internal identifier if persisted.
    #[must_use]
    pub const fn block_id(&self) -> Option<i64> {
        self.block_id
    }

    /// Returns the owning staff member's identifier.
    #[must_use]
    pub const fn staff_id(&self) -> i64 {
        self.staff_id
    }

    /// Returns the duty date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the month this block falls in, the scope its sign-off
    /// lock applies to.
    #[must_use]
    pub fn month(&self) -> Month {
        Month::from_date(self.date)
    }

    /// Returns the resolved day type.
    #[must_use]
    pub const fn day_type(&self) -> DayType {
        self.day_type
    }

    /// Returns the duty mode.
    #[must_use]
    pub const fn duty_mode(&self) -> DutyMode {
        self.duty_mode
    }

    /// Returns the claimed hours, if submitted.
    #[must_use]
    pub const fn claim(&self) -> Option<Decimal> {
        self.claim
    }
}

/// One worked interval within a time block.
///
/// Start and end are times of day with no embedded date; the owning
/// block's date anchors them. Hours are always derived, never stored,
/// so edits and deletions self-correct the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Canonical internal identifier. `None` until persisted.
    entry_id: Option<i64>,
    /// Start time of day.
    start: NaiveTime,
    /// End time of day. At or before `start` means overnight.
    end: NaiveTime,
    /// The task performed.
    task_type_id: i64,
    /// How the work was carried out.
    work_mode_id: i64,
    /// Free-text details.
    details: String,
}

impl TimeEntry {
    /// Creates a new `TimeEntry` without a persisted identifier.
    #[must_use]
    pub const fn new(
        start: NaiveTime,
        end: NaiveTime,
        task_type_id: i64,
        work_mode_id: i64,
        details: String,
    ) -> Self {
        Self {
            entry_id: None,
            start,
            end,
            task_type_id,
            work_mode_id,
            details,
        }
    }

    /// Creates a `TimeEntry` with an existing persisted identifier.
    #[must_use]
    pub const fn with_id(
        entry_id: i64,
        start: NaiveTime,
        end: NaiveTime,
        task_type_id: i64,
        work_mode_id: i64,
        details: String,
    ) -> Self {
        Self {
            entry_id: Some(entry_id),
            start,
            end,
            task_type_id,
            work_mode_id,
            details,
        }
    }

    /// Returns the canonical internal identifier if persisted.
    #[must_use]
    pub const fn entry_id(&self) -> Option<i64> {
        self.entry_id
    }

    /// Returns the start time of day.
    #[must_use]
    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    /// Returns the end time of day.
    #[must_use]
    pub const fn end(&self) -> NaiveTime {
        self.end
    }

    /// Returns the task type identifier.
    #[must_use]
    pub const fn task_type_id(&self) -> i64 {
        self.task_type_id
    }

    /// Returns the work mode identifier.
    #[must_use]
    pub const fn work_mode_id(&self) -> i64 {
        self.work_mode_id
    }

    /// Returns the free-text details.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Computes the worked hours for this entry, anchored to the
    /// owning block's date.
    #[must_use]
    pub fn hours(&self, block_date: NaiveDate) -> Decimal {
        entry_hours(block_date, self.start, self.end)
    }
}

/// Sums the worked hours of a block's live entries.
#[must_use]
pub fn total_entry_hours(block_date: NaiveDate, entries: &[TimeEntry]) -> Decimal {
    entries.iter().map(|entry| entry.hours(block_date)).sum()
}
