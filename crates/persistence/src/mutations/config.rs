// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Task-type and work-mode seeding.
//!
//! Seeding is idempotent: an existing name is left untouched and its
//! identifier returned.

use crate::diesel_schema::{task_types, work_modes};
use crate::error::OpError;
use diesel::prelude::*;
use dutybook_domain::validate_bootstrap_color;
use tracing::debug;

/// Inserts a task type if the name is new, returning its identifier
/// either way.
///
/// # Errors
///
/// Returns a rejection if the color is outside the Bootstrap palette,
/// or a storage error if the database cannot be written or queried.
pub fn seed_task_type(
    conn: &mut SqliteConnection,
    name: &str,
    color: &str,
) -> Result<i64, OpError> {
    validate_bootstrap_color(color)?;

    diesel::insert_or_ignore_into(task_types::table)
        .values((task_types::name.eq(name), task_types::color.eq(color)))
        .execute(conn)?;

    let id: i64 = task_types::table
        .filter(task_types::name.eq(name))
        .select(task_types::task_type_id)
        .first(conn)?;

    debug!(name, id, "Seeded task type");
    Ok(id)
}

/// Inserts a work mode if the name is new, returning its identifier
/// either way.
///
/// # Errors
///
/// Returns a rejection if the color is outside the Bootstrap palette,
/// or a storage error if the database cannot be written or queried.
pub fn seed_work_mode(
    conn: &mut SqliteConnection,
    name: &str,
    color: &str,
) -> Result<i64, OpError> {
    validate_bootstrap_color(color)?;

    diesel::insert_or_ignore_into(work_modes::table)
        .values((work_modes::name.eq(name), work_modes::color.eq(color)))
        .execute(conn)?;

    let id: i64 = work_modes::table
        .filter(work_modes::name.eq(name))
        .select(work_modes::work_mode_id)
        .first(conn)?;

    debug!(name, id, "Seeded work mode");
    Ok(id)
}
