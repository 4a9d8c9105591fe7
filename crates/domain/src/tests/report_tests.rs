// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{date, test_staff};
use crate::{
    DayType, DutyMode, Month, TimeBlock, TimeEntry, build_monthly_report,
    build_staff_month_report,
};
use chrono::NaiveTime;
use rust_decimal_macros::dec;

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn sunday_block_with_overnight_entry() -> (TimeBlock, Vec<TimeEntry>) {
    // 2025-06-15 is a Sunday.
    let block = TimeBlock::with_id(
        10,
        1,
        date(2025, 6, 15),
        DayType::Sunday,
        DutyMode::Normal,
        None,
    );
    let entry = TimeEntry::with_id(100, time(22, 0), time(6, 0), 1, 1, String::new());
    (block, vec![entry])
}

#[test]
fn test_overnight_sunday_entry_lands_in_sunday_bucket() {
    let staff = test_staff("JD001");
    let report = build_staff_month_report(staff, &[sunday_block_with_overnight_entry()], false);

    assert_eq!(report.breakdown.sunday.hours, dec!(8.00));
    assert_eq!(report.breakdown.weekday.hours, dec!(0));
    assert_eq!(report.breakdown.saturday.hours, dec!(0));
    assert_eq!(report.breakdown.bank_holiday.hours, dec!(0));
    assert_eq!(report.total_hours, dec!(8.00));
}

#[test]
fn test_claim_buckets_under_block_day_type_without_entries() {
    let staff = test_staff("JD001");
    let block = TimeBlock::with_id(
        11,
        1,
        date(2025, 6, 14),
        DayType::Saturday,
        DutyMode::Normal,
        Some(dec!(4.50)),
    );
    let report = build_staff_month_report(staff, &[(block, Vec::new())], false);

    assert_eq!(report.breakdown.saturday.claims, dec!(4.50));
    assert_eq!(report.breakdown.saturday.hours, dec!(0));
    assert_eq!(report.total_claims, dec!(4.50));
    assert_eq!(report.block_count, 1);
}

#[test]
fn test_monthly_report_grand_totals_and_summary() {
    let month = Month::new(2025, 6).unwrap();
    let alice = test_staff("JD001");
    let bob = crate::Staff::with_id(
        2,
        "BT002",
        String::from("Bea Tran"),
        crate::SeniorityTier::Senior,
        String::from("#aa3344"),
    );

    let alice_blocks = vec![sunday_block_with_overnight_entry()];
    let bob_block = TimeBlock::with_id(
        12,
        2,
        date(2025, 6, 16),
        DayType::Weekday,
        DutyMode::Locum,
        Some(dec!(2.00)),
    );
    let bob_entry = TimeEntry::with_id(101, time(18, 0), time(20, 30), 1, 1, String::new());

    let report = build_monthly_report(
        month,
        vec![
            (alice, alice_blocks, true),
            (bob, vec![(bob_block, vec![bob_entry])], false),
        ],
    );

    assert_eq!(report.staff_reports.len(), 2);
    assert_eq!(report.grand_total_hours, dec!(10.50));
    assert_eq!(report.grand_total_claims, dec!(2.00));

    let summary = report.signoff_summary.unwrap();
    assert_eq!(summary.total_staff, 2);
    assert_eq!(summary.signed_off_count, 1);
    assert_eq!(summary.pending_count, 1);
    assert!(!summary.all_signed_off);
}

#[test]
fn test_staff_without_blocks_are_excluded() {
    let month = Month::new(2025, 6).unwrap();
    let idle = test_staff("ID009");
    let report = build_monthly_report(month, vec![(idle, Vec::new(), false)]);

    assert!(report.staff_reports.is_empty());
    assert!(report.signoff_summary.is_none());
    assert_eq!(report.grand_total_hours, dec!(0));
}

#[test]
fn test_aggregation_is_idempotent() {
    let month = Month::new(2025, 6).unwrap();
    let build = || {
        build_monthly_report(
            month,
            vec![(test_staff("JD001"), vec![sunday_block_with_overnight_entry()], false)],
        )
    };
    assert_eq!(build(), build());
}
