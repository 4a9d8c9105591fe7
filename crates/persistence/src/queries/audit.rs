// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit timeline queries.

use crate::data_models::{AuditEventRow, StoredAuditEvent};
use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;
use diesel::prelude::*;
use dutybook_domain::Month;

/// Fetches an audit event by identifier.
///
/// # Errors
///
/// Returns `EventNotFound` if no such event exists.
pub fn get_audit_event(
    conn: &mut SqliteConnection,
    event_id: i64,
) -> Result<StoredAuditEvent, PersistenceError> {
    audit_events::table
        .filter(audit_events::event_id.eq(event_id))
        .first::<AuditEventRow>(conn)
        .optional()?
        .ok_or(PersistenceError::EventNotFound(event_id))?
        .into_stored()
}

/// Lists the ordered audit timeline for a (staff, month) scope.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// value fails to parse.
pub fn timeline_for_staff_month(
    conn: &mut SqliteConnection,
    staff_id: i64,
    month: Month,
) -> Result<Vec<StoredAuditEvent>, PersistenceError> {
    let rows = audit_events::table
        .filter(audit_events::staff_id.eq(staff_id))
        .filter(audit_events::year.eq(i32::from(month.year())))
        .filter(audit_events::month.eq(i32::from(month.month())))
        .order(audit_events::event_id.asc())
        .load::<AuditEventRow>(conn)?;
    rows.into_iter().map(AuditEventRow::into_stored).collect()
}

/// Lists audit events with no staff scope (report-level actions).
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// value fails to parse.
pub fn unscoped_events(
    conn: &mut SqliteConnection,
) -> Result<Vec<StoredAuditEvent>, PersistenceError> {
    let rows = audit_events::table
        .filter(audit_events::staff_id.is_null())
        .order(audit_events::event_id.asc())
        .load::<AuditEventRow>(conn)?;
    rows.into_iter().map(AuditEventRow::into_stored).collect()
}
