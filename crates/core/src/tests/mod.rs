// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod rota_tests;
mod signoff_tests;

use crate::MonthContext;
use chrono::{NaiveDate, NaiveDateTime};
use dutybook_audit::{Actor, Cause};
use dutybook_domain::{Month, MonthlySignOff};

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub(crate) fn datetime(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    date(year, month, day).and_hms_opt(hour, 0, 0).unwrap()
}

pub(crate) fn june() -> Month {
    Month::new(2025, 6).unwrap()
}

pub(crate) fn test_actor() -> Actor {
    Actor::new(String::from("BT009"), String::from("staff"))
}

pub(crate) fn test_cause() -> Cause {
    Cause::new(String::from("req-1"), String::from("test request"))
}

/// An open month with some recorded blocks.
pub(crate) fn open_ctx(block_count: usize) -> MonthContext {
    MonthContext {
        staff: String::from("JD001"),
        month: june(),
        signoff: None,
        signed_off_by: None,
        block_count,
    }
}

/// A month frozen by BT009 on 2025-07-02.
pub(crate) fn locked_ctx(block_count: usize) -> MonthContext {
    let signoff = MonthlySignOff::with_id(
        7,
        1,
        june(),
        9,
        datetime(2025, 7, 2, 9),
        String::from("end of month"),
    );
    MonthContext {
        staff: String::from("JD001"),
        month: june(),
        signoff: Some(signoff),
        signed_off_by: Some(String::from("BT009")),
        block_count,
    }
}
