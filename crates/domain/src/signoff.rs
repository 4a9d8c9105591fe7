// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sign-off lock records.
//!
//! A sign-off is a lock record: its existence freezes the data it
//! scopes. Per-staff locks freeze one staff member's month; report
//! locks freeze the whole month's aggregate submission.

use crate::month::Month;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A per-staff monthly lock record.
///
/// Keyed uniquely by (staff, month). While a record exists, no block
/// or entry in that staff-month may be created, edited, or deleted.
/// Reversible: deleting the record reopens the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySignOff {
    /// Canonical internal identifier. `None` until persisted.
    signoff_id: Option<i64>,
    /// The staff member whose month is frozen.
    staff_id: i64,
    /// The frozen month.
    month: Month,
    /// The staff member who performed the sign-off.
    signed_off_by: i64,
    /// When the sign-off happened.
    signed_off_at: NaiveDateTime,
    /// Optional notes about this sign-off.
    notes: String,
}

impl MonthlySignOff {
    /// Creates a new `MonthlySignOff` without a persisted identifier.
    #[must_use]
    pub const fn new(
        staff_id: i64,
        month: Month,
        signed_off_by: i64,
        signed_off_at: NaiveDateTime,
        notes: String,
    ) -> Self {
        Self {
            signoff_id: None,
            staff_id,
            month,
            signed_off_by,
            signed_off_at,
            notes,
        }
    }

    /// Creates a `MonthlySignOff` with an existing persisted identifier.
    #[must_use]
    pub const fn with_id(
        signoff_id: i64,
        staff_id: i64,
        month: Month,
        signed_off_by: i64,
        signed_off_at: NaiveDateTime,
        notes: String,
    ) -> Self {
        Self {
            signoff_id: Some(signoff_id),
            staff_id,
            month,
            signed_off_by,
            signed_off_at,
            notes,
        }
    }

    /// Returns the canonical internal identifier if persisted.
    #[must_use]
    pub const fn signoff_id(&self) -> Option<i64> {
        self.signoff_id
    }

    /// Returns the staff member whose month is frozen.
    #[must_use]
    pub const fn staff_id(&self) -> i64 {
        self.staff_id
    }

    /// Returns the frozen month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns who performed the sign-off.
    #[must_use]
    pub const fn signed_off_by(&self) -> i64 {
        self.signed_off_by
    }

    /// Returns when the sign-off happened.
    #[must_use]
    pub const fn signed_off_at(&self) -> NaiveDateTime {
        self.signed_off_at
    }

    /// Returns the sign-off notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }
}

/// A month-level report lock record, staff-independent.
///
/// Keyed uniquely by month. The totals are captured at signing time as
/// a submission receipt and never retroactively updated, even if the
/// report is later un-signed-off and the underlying data changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSignOff {
    /// Canonical internal identifier. `None` until persisted.
    report_signoff_id: Option<i64>,
    /// The frozen month.
    month: Month,
    /// The staff member who signed the report off.
    signed_off_by: i64,
    /// When the report was signed off.
    signed_off_at: NaiveDateTime,
    /// Notes about this report sign-off.
    notes: String,
    /// Number of staff included in the report at signing time.
    staff_count: i64,
    /// Total hours across all staff at signing time.
    total_hours: Decimal,
    /// Total claims across all staff at signing time.
    total_claims: Decimal,
}

impl ReportSignOff {
    /// Creates a new `ReportSignOff` without a persisted identifier.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        month: Month,
        signed_off_by: i64,
        signed_off_at: NaiveDateTime,
        notes: String,
        staff_count: i64,
        total_hours: Decimal,
        total_claims: Decimal,
    ) -> Self {
        Self {
            report_signoff_id: None,
            month,
            signed_off_by,
            signed_off_at,
            notes,
            staff_count,
            total_hours,
            total_claims,
        }
    }

    /// Creates a `ReportSignOff` with an existing persisted identifier.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn with_id(
        report_signoff_id: i64,
        month: Month,
        signed_off_by: i64,
        signed_off_at: NaiveDateTime,
        notes: String,
        staff_count: i64,
        total_hours: Decimal,
        total_claims: Decimal,
    ) -> Self {
        Self {
            report_signoff_id: Some(report_signoff_id),
            month,
            signed_off_by,
            signed_off_at,
            notes,
            staff_count,
            total_hours,
            total_claims,
        }
    }

    /// Returns the canonical internal identifier if persisted.
    #[must_use]
    pub const fn report_signoff_id(&self) -> Option<i64> {
        self.report_signoff_id
    }

    /// Returns the frozen month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns who signed the report off.
    #[must_use]
    pub const fn signed_off_by(&self) -> i64 {
        self.signed_off_by
    }

    /// Returns when the report was signed off.
    #[must_use]
    pub const fn signed_off_at(&self) -> NaiveDateTime {
        self.signed_off_at
    }

    /// Returns the report sign-off notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the staff count captured at signing time.
    #[must_use]
    pub const fn staff_count(&self) -> i64 {
        self.staff_count
    }

    /// Returns the total hours captured at signing time.
    #[must_use]
    pub const fn total_hours(&self) -> Decimal {
        self.total_hours
    }

    /// Returns the total claims captured at signing time.
    #[must_use]
    pub const fn total_claims(&self) -> Decimal {
        self.total_claims
    }
}
