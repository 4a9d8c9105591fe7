// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Worked-hours calculation for time entries.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

const SECONDS_PER_HOUR: i64 = 3600;

/// Computes the worked hours for a time entry, handling overnight
/// wraparound (e.g. 17:30-08:30 the next morning).
///
/// Both times are combined with the block date. If the end time is at
/// or before the start time, the entry is treated as spanning midnight
/// and one day is added to the end instant. The duration is returned in
/// hours, rounded to 2 decimal places using banker's rounding
/// (midpoint-nearest-even).
///
/// A zero-length entry (`start == end`) yields 24.00 under the
/// overnight rule; validation rejects such entries upstream precisely
/// because they are ambiguous between 0 and 24 hours.
#[must_use]
pub fn entry_hours(block_date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Decimal {
    let start_at = NaiveDateTime::new(block_date, start);
    let mut end_at = NaiveDateTime::new(block_date, end);

    // End at or before start means the entry runs into the next day.
    if end <= start {
        end_at += Duration::days(1);
    }

    let seconds = (end_at - start_at).num_seconds();
    (Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR)).round_dp(2)
}
