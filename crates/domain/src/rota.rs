// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Forward-looking rota scheduling types.
//!
//! The rota is scheduling data, distinct from the backward-looking
//! timesheet records the sign-off engine protects. No lock interacts
//! with it.

use crate::day_type::DayType;
use crate::holidays::HolidayLookup;
use crate::types::{DutyMode, SeniorityTier};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar date's rota record.
///
/// The duty mode applies uniformly to every shift on the date. An
/// entry exists only while it has shifts; removing the last shift
/// removes the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotaEntry {
    /// Canonical internal identifier. `None` until persisted.
    entry_id: Option<i64>,
    /// The rota date (unique).
    date: NaiveDate,
    /// The staffing scheme for every shift on this date.
    duty_mode: DutyMode,
}

impl RotaEntry {
    /// Creates a new `RotaEntry` without a persisted identifier.
    #[must_use]
    pub const fn new(date: NaiveDate, duty_mode: DutyMode) -> Self {
        Self {
            entry_id: None,
            date,
            duty_mode,
        }
    }

    /// Creates a `RotaEntry` with an existing persisted identifier.
    #[must_use]
    pub const fn with_id(entry_id: i64, date: NaiveDate, duty_mode: DutyMode) -> Self {
        Self {
            entry_id: Some(entry_id),
            date,
            duty_mode,
        }
    }

    /// Returns the canonical internal identifier if persisted.
    #[must_use]
    pub const fn entry_id(&self) -> Option<i64> {
        self.entry_id
    }

    /// Returns the rota date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the duty mode.
    #[must_use]
    pub const fn duty_mode(&self) -> DutyMode {
        self.duty_mode
    }

    /// Resolves this date's day type, bank holiday first.
    ///
    /// Uses the same classification rule as time blocks.
    pub fn day_type<L: HolidayLookup + ?Sized>(&self, holidays: &L) -> DayType {
        DayType::classify(self.date, holidays)
    }
}

/// One staff assignment within a rota entry at a given tier.
///
/// Unique per (rota entry, staff, tier): the same staff member may
/// hold slots at different tiers on one day, and several staff may
/// share a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotaShift {
    /// Canonical internal identifier. `None` until persisted.
    shift_id: Option<i64>,
    /// The assigned staff member's identifier.
    staff_id: i64,
    /// The seniority tier of the slot.
    tier: SeniorityTier,
    /// Free-text notes for this shift.
    notes: String,
}

impl RotaShift {
    /// Creates a new `RotaShift` without a persisted identifier.
    #[must_use]
    pub const fn new(staff_id: i64, tier: SeniorityTier, notes: String) -> Self {
        Self {
            shift_id: None,
            staff_id,
            tier,
            notes,
        }
    }

    /// Creates a `RotaShift` with an existing persisted identifier.
    #[must_use]
    pub const fn with_id(shift_id: i64, staff_id: i64, tier: SeniorityTier, notes: String) -> Self {
        Self {
            shift_id: Some(shift_id),
            staff_id,
            tier,
            notes,
        }
    }

    /// Returns the canonical internal identifier if persisted.
    #[must_use]
    pub const fn shift_id(&self) -> Option<i64> {
        self.shift_id
    }

    /// Returns the assigned staff member's identifier.
    #[must_use]
    pub const fn staff_id(&self) -> i64 {
        self.staff_id
    }

    /// Returns the slot tier.
    #[must_use]
    pub const fn tier(&self) -> SeniorityTier {
        self.tier
    }

    /// Returns the free-text notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }
}

/// Shift counts over a rota date range.
///
/// Derived data for coverage dashboards; recomputable at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RotaStatistics {
    /// Total shifts in the range.
    pub total_shifts: usize,
    /// Distinct dates with at least one shift.
    pub days_covered: usize,
    /// Shifts held at trainee tier.
    pub trainee_shifts: usize,
    /// Shifts held at on-call tier.
    pub oncall_shifts: usize,
    /// Shifts held at senior tier.
    pub senior_shifts: usize,
    /// Dates running under the normal scheme.
    pub normal_days: usize,
    /// Dates running under the locum scheme.
    pub locum_days: usize,
}

impl RotaStatistics {
    /// Tallies statistics from rota entries and their shifts.
    #[must_use]
    pub fn tally(rota: &[(RotaEntry, Vec<RotaShift>)]) -> Self {
        let mut stats = Self::default();
        for (entry, shifts) in rota {
            if shifts.is_empty() {
                continue;
            }
            stats.days_covered += 1;
            match entry.duty_mode() {
                DutyMode::Normal => stats.normal_days += 1,
                DutyMode::Locum => stats.locum_days += 1,
            }
            for shift in shifts {
                stats.total_shifts += 1;
                match shift.tier() {
                    SeniorityTier::Trainee => stats.trainee_shifts += 1,
                    SeniorityTier::OnCall => stats.oncall_shifts += 1,
                    SeniorityTier::Senior => stats.senior_shifts += 1,
                }
            }
        }
        stats
    }
}
