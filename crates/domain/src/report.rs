// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly report aggregation.
//!
//! Pure, read-only rollup of time blocks into per-day-type buckets,
//! per-staff totals, and grand totals. Recomputing with the same
//! inputs always yields the same report; nothing here mutates state.

use crate::day_type::DayType;
use crate::month::Month;
use crate::timesheet::{TimeBlock, TimeEntry, total_entry_hours};
use crate::types::Staff;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours and claims accumulated for one day-type bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayTypeTotals {
    /// Worked hours, derived from entries.
    pub hours: Decimal,
    /// Claimed hours, from block claim fields.
    pub claims: Decimal,
}

/// One bucket per day-type category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayTypeBreakdown {
    /// Weekday bucket.
    pub weekday: DayTypeTotals,
    /// Saturday bucket.
    pub saturday: DayTypeTotals,
    /// Sunday bucket.
    pub sunday: DayTypeTotals,
    /// Bank-holiday bucket.
    pub bank_holiday: DayTypeTotals,
}

impl DayTypeBreakdown {
    /// Returns the bucket for a day type.
    #[must_use]
    pub const fn get(&self, day_type: DayType) -> &DayTypeTotals {
        match day_type {
            DayType::Weekday => &self.weekday,
            DayType::Saturday => &self.saturday,
            DayType::Sunday => &self.sunday,
            DayType::BankHoliday => &self.bank_holiday,
        }
    }

    /// Returns the mutable bucket for a day type.
    pub fn get_mut(&mut self, day_type: DayType) -> &mut DayTypeTotals {
        match day_type {
            DayType::Weekday => &mut self.weekday,
            DayType::Saturday => &mut self.saturday,
            DayType::Sunday => &mut self.sunday,
            DayType::BankHoliday => &mut self.bank_holiday,
        }
    }

    /// Sums hours across all buckets.
    #[must_use]
    pub fn total_hours(&self) -> Decimal {
        DayType::all()
            .iter()
            .map(|day_type| self.get(*day_type).hours)
            .sum()
    }

    /// Sums claims across all buckets.
    #[must_use]
    pub fn total_claims(&self) -> Decimal {
        DayType::all()
            .iter()
            .map(|day_type| self.get(*day_type).claims)
            .sum()
    }
}

/// One staff member's rollup for a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMonthReport {
    /// The staff member.
    pub staff: Staff,
    /// Number of blocks in the month.
    pub block_count: usize,
    /// Per-day-type buckets.
    pub breakdown: DayTypeBreakdown,
    /// Total worked hours across all buckets.
    pub total_hours: Decimal,
    /// Total claimed hours across all buckets.
    pub total_claims: Decimal,
    /// Whether this staff-month is signed off.
    pub is_signed_off: bool,
}

/// Staff-level sign-off completeness for a report month.
///
/// Counts only staff with at least one block in the month. Surfaced as
/// a warning before report sign-off; completeness is not required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignOffSummary {
    /// Staff with records in the month.
    pub total_staff: usize,
    /// Of those, how many are signed off.
    pub signed_off_count: usize,
    /// Staff still pending sign-off.
    pub pending_count: usize,
    /// Whether every staff member with records is signed off.
    pub all_signed_off: bool,
}

/// The full monthly report: per-staff rollups plus grand totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// The reported month.
    pub month: Month,
    /// Rollups for every staff member with at least one block.
    pub staff_reports: Vec<StaffMonthReport>,
    /// Total hours across all staff.
    pub grand_total_hours: Decimal,
    /// Total claims across all staff.
    pub grand_total_claims: Decimal,
    /// Sign-off completeness, absent when no staff have records.
    pub signoff_summary: Option<SignOffSummary>,
}

/// Builds one staff member's monthly rollup.
///
/// Each block buckets its entry hours and its claim under the block's
/// day type. A block with no entries contributes zero hours but still
/// buckets its claim.
#[must_use]
pub fn build_staff_month_report(
    staff: Staff,
    blocks: &[(TimeBlock, Vec<TimeEntry>)],
    is_signed_off: bool,
) -> StaffMonthReport {
    let mut breakdown = DayTypeBreakdown::default();

    for (block, entries) in blocks {
        let bucket = breakdown.get_mut(block.day_type());
        bucket.hours += total_entry_hours(block.date(), entries);
        if let Some(claim) = block.claim() {
            bucket.claims += claim;
        }
    }

    let total_hours = breakdown.total_hours();
    let total_claims = breakdown.total_claims();

    StaffMonthReport {
        staff,
        block_count: blocks.len(),
        breakdown,
        total_hours,
        total_claims,
        is_signed_off,
    }
}

/// Builds the full monthly report from per-staff block data.
///
/// Staff with no blocks in the month are excluded. The report is
/// derived data: recomputable identically from the same inputs.
#[must_use]
pub fn build_monthly_report(
    month: Month,
    staff_blocks: Vec<(Staff, Vec<(TimeBlock, Vec<TimeEntry>)>, bool)>,
) -> MonthlyReport {
    let staff_reports: Vec<StaffMonthReport> = staff_blocks
        .into_iter()
        .filter(|(_, blocks, _)| !blocks.is_empty())
        .map(|(staff, blocks, is_signed_off)| {
            build_staff_month_report(staff, &blocks, is_signed_off)
        })
        .collect();

    let grand_total_hours = staff_reports.iter().map(|r| r.total_hours).sum();
    let grand_total_claims = staff_reports.iter().map(|r| r.total_claims).sum();

    let signoff_summary = if staff_reports.is_empty() {
        None
    } else {
        let total_staff = staff_reports.len();
        let signed_off_count = staff_reports.iter().filter(|r| r.is_signed_off).count();
        Some(SignOffSummary {
            total_staff,
            signed_off_count,
            pending_count: total_staff - signed_off_count,
            all_signed_off: signed_off_count == total_staff,
        })
    };

    MonthlyReport {
        month,
        staff_reports,
        grand_total_hours,
        grand_total_claims,
        signoff_summary,
    }
}
