// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bank-holiday cache queries.
//!
//! Reads always come from the local cache table; the sync job is the
//! only thing that ever touches the network.

use crate::data_models::{BankHolidayRow, format_date, parse_datetime};
use crate::diesel_schema::bank_holidays;
use crate::error::PersistenceError;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use dutybook_domain::{BankHoliday, HolidaySet};

/// Checks whether a date is a cached bank holiday.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn is_bank_holiday(
    conn: &mut SqliteConnection,
    date: NaiveDate,
) -> Result<bool, PersistenceError> {
    let count: i64 = bank_holidays::table
        .filter(bank_holidays::date.eq(format_date(date)))
        .count()
        .get_result(conn)?;
    Ok(count > 0)
}

/// Lists the cached holidays within a half-open date range.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or a stored
/// value fails to parse.
pub fn holidays_in_range(
    conn: &mut SqliteConnection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<BankHoliday>, PersistenceError> {
    let rows = bank_holidays::table
        .filter(bank_holidays::date.ge(format_date(start)))
        .filter(bank_holidays::date.lt(format_date(end)))
        .order(bank_holidays::date.asc())
        .load::<BankHolidayRow>(conn)?;
    rows.into_iter().map(BankHolidayRow::into_domain).collect()
}

/// Builds a set-backed lookup over a date range's cached holidays.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn holiday_set_for_range(
    conn: &mut SqliteConnection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<HolidaySet, PersistenceError> {
    Ok(HolidaySet::from_holidays(holidays_in_range(
        conn, start, end,
    )?))
}

/// Returns the most recent cache refresh time, if the cache has ever
/// been populated.
///
/// # Errors
///
/// Returns an error if the database cannot be queried or the stored
/// timestamp fails to parse.
pub fn latest_update(
    conn: &mut SqliteConnection,
) -> Result<Option<NaiveDateTime>, PersistenceError> {
    let latest: Option<String> = bank_holidays::table
        .select(diesel::dsl::max(bank_holidays::updated_at))
        .first(conn)?;
    latest.as_deref().map(parse_datetime).transpose()
}
