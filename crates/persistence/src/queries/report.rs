// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly report assembly.

use crate::error::PersistenceError;
use crate::queries::{signoff, staff, timesheet};
use diesel::prelude::*;
use dutybook_domain::{Month, MonthlyReport, build_monthly_report};

/// Assembles the monthly report for every staff member with records.
///
/// Loads each staff member's blocks and entries plus their sign-off
/// flag, then delegates the rollup to the pure domain aggregator. The
/// result is derived data: recomputable identically at any time.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// value fails to parse.
pub fn monthly_report(
    conn: &mut SqliteConnection,
    month: Month,
) -> Result<MonthlyReport, PersistenceError> {
    let staff_ids = timesheet::staff_ids_with_blocks(conn, month)?;
    let mut staff_blocks = Vec::with_capacity(staff_ids.len());

    for staff_id in staff_ids {
        let member = staff::get_staff(conn, staff_id)?;
        let blocks = timesheet::blocks_with_entries_for_staff_month(conn, staff_id, month)?;
        let is_signed_off = signoff::is_month_signed_off(conn, staff_id, month)?;
        staff_blocks.push((member, blocks, is_signed_off));
    }

    Ok(build_monthly_report(month, staff_blocks))
}
