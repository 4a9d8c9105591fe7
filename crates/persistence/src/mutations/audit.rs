// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Audit event persistence.

use crate::diesel_schema::audit_events;
use crate::error::PersistenceError;
use crate::sqlite;
use diesel::prelude::*;
use dutybook_audit::AuditEvent;
use dutybook_domain::Month;
use tracing::debug;

/// Persists an audit event, optionally scoped to a staff member and
/// month.
///
/// Report-level events carry a month scope but no staff scope; sync
/// and seeding events carry neither.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_audit_event(
    conn: &mut SqliteConnection,
    event: &AuditEvent,
    staff_id: Option<i64>,
    month: Option<Month>,
) -> Result<i64, PersistenceError> {
    debug!(action = %event.action.name, "Recording audit event");

    diesel::insert_into(audit_events::table)
        .values((
            audit_events::actor_id.eq(&event.actor.id),
            audit_events::actor_type.eq(&event.actor.actor_type),
            audit_events::cause_id.eq(&event.cause.id),
            audit_events::cause_description.eq(&event.cause.description),
            audit_events::action_name.eq(&event.action.name),
            audit_events::action_details.eq(event.action.details.as_deref()),
            audit_events::before_snapshot.eq(&event.before.data),
            audit_events::after_snapshot.eq(&event.after.data),
            audit_events::staff_id.eq(staff_id),
            audit_events::year.eq(month.map(|m| i32::from(m.year()))),
            audit_events::month.eq(month.map(|m| i32::from(m.month()))),
        ))
        .execute(conn)?;

    sqlite::get_last_insert_rowid(conn)
}
