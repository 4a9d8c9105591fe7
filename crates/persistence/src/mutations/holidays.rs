// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bank-holiday cache refresh.

use crate::data_models::{HolidaySyncStats, format_date};
use crate::diesel_schema::bank_holidays;
use crate::error::PersistenceError;
use diesel::prelude::*;
use dutybook_domain::BankHoliday;
use tracing::info;

/// Applies a synced holiday dataset to the cache.
///
/// Existing dates are refreshed in place, new dates inserted; nothing
/// is removed, so a partial dataset never shrinks the cache.
///
/// # Errors
///
/// Returns an error if the database cannot be written.
pub fn upsert_bank_holidays(
    conn: &mut SqliteConnection,
    holidays: &[BankHoliday],
) -> Result<HolidaySyncStats, PersistenceError> {
    conn.transaction::<HolidaySyncStats, PersistenceError, _>(|conn| {
        let mut stats = HolidaySyncStats::default();

        for holiday in holidays {
            let updated = diesel::update(bank_holidays::table)
                .filter(bank_holidays::date.eq(format_date(holiday.date)))
                .set((
                    bank_holidays::title.eq(&holiday.title),
                    bank_holidays::notes.eq(&holiday.notes),
                    bank_holidays::updated_at.eq(diesel::dsl::sql::<diesel::sql_types::Text>("CURRENT_TIMESTAMP")),
                ))
                .execute(conn)?;

            if updated == 0 {
                diesel::insert_into(bank_holidays::table)
                    .values((
                        bank_holidays::date.eq(format_date(holiday.date)),
                        bank_holidays::title.eq(&holiday.title),
                        bank_holidays::notes.eq(&holiday.notes),
                    ))
                    .execute(conn)?;
                stats.created += 1;
            } else {
                stats.updated += 1;
            }
        }

        info!(
            created = stats.created,
            updated = stats.updated,
            "Applied bank-holiday sync"
        );
        Ok(stats)
    })
}
