// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod lock_tests;
mod report_tests;
mod signoff_tests;
mod staff_tests;

use crate::Persistence;
use chrono::{NaiveDate, NaiveTime};
use dutybook_audit::{Actor, Cause};
use dutybook_domain::{DutyMode, Month, SeniorityTier, Staff};
use rust_decimal::Decimal;

pub(crate) fn test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub(crate) fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// Fixed reference date so every 2025 fixture is in the past.
pub(crate) fn today() -> NaiveDate {
    date(2025, 12, 31)
}

pub(crate) fn june() -> Month {
    Month::new(2025, 6).unwrap()
}

pub(crate) fn july() -> Month {
    Month::new(2025, 7).unwrap()
}

pub(crate) fn test_actor() -> Actor {
    Actor::new(String::from("BT009"), String::from("staff"))
}

pub(crate) fn test_cause() -> Cause {
    Cause::new(String::from("req-1"), String::from("test request"))
}

pub(crate) fn create_test_staff(persistence: &mut Persistence, assignment_id: &str) -> i64 {
    let member = Staff::new(
        assignment_id,
        format!("Staff {assignment_id}"),
        SeniorityTier::OnCall,
        String::from("#336699"),
    );
    persistence.create_staff(&member).unwrap()
}

/// Seeds one task type and one work mode, returning their ids.
pub(crate) fn seed_lookups(persistence: &mut Persistence) -> (i64, i64) {
    let task = persistence
        .seed_task_type("Telephone advice", "secondary")
        .unwrap();
    let mode = persistence.seed_work_mode("WFH", "primary").unwrap();
    (task, mode)
}

/// Creates a block with auto-resolved day type and no claim.
pub(crate) fn add_block(persistence: &mut Persistence, staff_id: i64, on: NaiveDate) -> i64 {
    persistence
        .create_time_block(
            staff_id,
            on,
            None,
            DutyMode::Normal,
            None,
            today(),
            test_actor(),
            test_cause(),
        )
        .unwrap()
}

/// Creates a block with a claim.
pub(crate) fn add_block_with_claim(
    persistence: &mut Persistence,
    staff_id: i64,
    on: NaiveDate,
    claim: Decimal,
) -> i64 {
    persistence
        .create_time_block(
            staff_id,
            on,
            None,
            DutyMode::Normal,
            Some(claim),
            today(),
            test_actor(),
            test_cause(),
        )
        .unwrap()
}

/// Adds an entry to a block.
pub(crate) fn add_entry(
    persistence: &mut Persistence,
    block_id: i64,
    start: NaiveTime,
    end: NaiveTime,
    task_type_id: i64,
    work_mode_id: i64,
) -> i64 {
    persistence
        .add_time_entry(
            block_id,
            start,
            end,
            task_type_id,
            work_mode_id,
            "",
            test_actor(),
            test_cause(),
        )
        .unwrap()
}
