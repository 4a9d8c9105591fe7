// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Task-type and work-mode lookup queries.

use crate::data_models::LookupRow;
use crate::diesel_schema::{task_types, work_modes};
use crate::error::PersistenceError;
use diesel::prelude::*;
use dutybook_domain::{TaskType, WorkMode};

/// Lists all task types ordered by name.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_task_types(conn: &mut SqliteConnection) -> Result<Vec<TaskType>, PersistenceError> {
    let rows = task_types::table
        .order(task_types::name.asc())
        .load::<LookupRow>(conn)?;
    Ok(rows.into_iter().map(LookupRow::into_task_type).collect())
}

/// Lists all work modes ordered by name.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_work_modes(conn: &mut SqliteConnection) -> Result<Vec<WorkMode>, PersistenceError> {
    let rows = work_modes::table
        .order(work_modes::name.asc())
        .load::<LookupRow>(conn)?;
    Ok(rows.into_iter().map(LookupRow::into_work_mode).collect())
}

/// Fetches a task type by name.
///
/// # Errors
///
/// Returns `NotFound` if no task type has the name.
pub fn task_type_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<TaskType, PersistenceError> {
    let row = task_types::table
        .filter(task_types::name.eq(name))
        .first::<LookupRow>(conn)
        .optional()?
        .ok_or_else(|| PersistenceError::NotFound(format!("task type '{name}'")))?;
    Ok(row.into_task_type())
}

/// Fetches a work mode by name.
///
/// # Errors
///
/// Returns `NotFound` if no work mode has the name.
pub fn work_mode_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<WorkMode, PersistenceError> {
    let row = work_modes::table
        .filter(work_modes::name.eq(name))
        .first::<LookupRow>(conn)
        .optional()?
        .ok_or_else(|| PersistenceError::NotFound(format!("work mode '{name}'")))?;
    Ok(row.into_work_mode())
}
