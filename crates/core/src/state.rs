// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dutybook_domain::{Month, MonthlySignOff, ReportSignOff, SeniorityTier};

/// The lock state of one (staff, month) scope, loaded from storage.
///
/// Authorization is a pure function of this context: the persistence
/// layer loads it inside the same transaction that performs the
/// mutation, so the decision and the write are atomic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthContext {
    /// Assignment identifier of the staff member, for messages.
    pub staff: String,
    /// The month the command targets.
    pub month: Month,
    /// The per-staff lock record, if the month is frozen.
    pub signoff: Option<MonthlySignOff>,
    /// Assignment identifier of whoever signed off, when frozen.
    pub signed_off_by: Option<String>,
    /// Number of time blocks the staff member has in the month.
    pub block_count: usize,
}

impl MonthContext {
    /// Creates a context for an open, empty month.
    #[must_use]
    pub const fn open(staff: String, month: Month) -> Self {
        Self {
            staff,
            month,
            signoff: None,
            signed_off_by: None,
            block_count: 0,
        }
    }

    /// Returns whether the month is frozen.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.signoff.is_some()
    }
}

/// The lock state of one month's report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportContext {
    /// The month the command targets.
    pub month: Month,
    /// The report lock record, if the report is frozen.
    pub report_signoff: Option<ReportSignOff>,
    /// Number of staff with at least one block in the month.
    pub staff_with_records: usize,
}

impl ReportContext {
    /// Returns whether the report is frozen.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.report_signoff.is_some()
    }
}

/// The occupancy of one rota date, for duplicate-slot checks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RotaDayContext {
    /// (staff id, tier) pairs already assigned on the date.
    pub occupied: Vec<(i64, SeniorityTier)>,
}

impl RotaDayContext {
    /// Checks whether a staff member already holds a tier on the date.
    #[must_use]
    pub fn holds_slot(&self, staff_id: i64, tier: SeniorityTier) -> bool {
        self.occupied
            .iter()
            .any(|(id, t)| *id == staff_id && *t == tier)
    }
}
