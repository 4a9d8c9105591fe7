// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod day_type_tests;
mod duration_tests;
mod month_tests;
mod report_tests;

use crate::{SeniorityTier, Staff};
use chrono::NaiveDate;

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub(crate) fn test_staff(assignment_id: &str) -> Staff {
    Staff::with_id(
        1,
        assignment_id,
        String::from("Jo Dale"),
        SeniorityTier::OnCall,
        String::from("#336699"),
    )
}
