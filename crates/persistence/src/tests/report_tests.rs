// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly report aggregation tests.

use crate::tests::{
    add_block, add_block_with_claim, add_entry, create_test_staff, date, june, seed_lookups,
    test_actor, test_cause, test_persistence, time,
};
use rust_decimal_macros::dec;

#[test]
fn test_overnight_sunday_scenario() {
    // Staff JD001, block on 2025-06-15 (a Sunday), one entry
    // 22:00-06:00: eight hours in the Sunday bucket.
    let mut persistence = test_persistence();
    let staff_id = create_test_staff(&mut persistence, "JD001");
    let (task, mode) = seed_lookups(&mut persistence);
    let block = add_block(&mut persistence, staff_id, date(2025, 6, 15));
    add_entry(&mut persistence, block, time(22, 0), time(6, 0), task, mode);

    let report = persistence.monthly_report(june()).unwrap();
    assert_eq!(report.staff_reports.len(), 1);

    let staff_report = &report.staff_reports[0];
    assert_eq!(staff_report.staff.assignment_id(), "JD001");
    assert_eq!(staff_report.breakdown.sunday.hours, dec!(8.00));
    assert_eq!(staff_report.breakdown.weekday.hours, dec!(0));
    assert_eq!(staff_report.breakdown.saturday.hours, dec!(0));
    assert_eq!(staff_report.breakdown.bank_holiday.hours, dec!(0));
    assert_eq!(report.grand_total_hours, dec!(8.00));
}

#[test]
fn test_report_is_idempotent() {
    let mut persistence = test_persistence();
    let staff_id = create_test_staff(&mut persistence, "JD001");
    let (task, mode) = seed_lookups(&mut persistence);
    let block = add_block_with_claim(&mut persistence, staff_id, date(2025, 6, 14), dec!(3.00));
    add_entry(&mut persistence, block, time(9, 0), time(17, 0), task, mode);

    let first = persistence.monthly_report(june()).unwrap();
    let second = persistence.monthly_report(june()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_claims_bucket_by_day_type_across_staff() {
    let mut persistence = test_persistence();
    let alice = create_test_staff(&mut persistence, "JD001");
    let bob = create_test_staff(&mut persistence, "XY003");
    let (task, mode) = seed_lookups(&mut persistence);

    // Alice: Saturday block with a claim and no entries.
    add_block_with_claim(&mut persistence, alice, date(2025, 6, 14), dec!(4.50));
    // Bob: weekday block with an evening entry and a claim.
    let bob_block =
        add_block_with_claim(&mut persistence, bob, date(2025, 6, 16), dec!(2.00));
    add_entry(&mut persistence, bob_block, time(18, 0), time(20, 30), task, mode);

    let report = persistence.monthly_report(june()).unwrap();
    assert_eq!(report.staff_reports.len(), 2);
    assert_eq!(report.grand_total_hours, dec!(2.50));
    assert_eq!(report.grand_total_claims, dec!(6.50));

    let alice_report = report
        .staff_reports
        .iter()
        .find(|r| r.staff.assignment_id() == "JD001")
        .unwrap();
    assert_eq!(alice_report.breakdown.saturday.claims, dec!(4.50));
    assert_eq!(alice_report.breakdown.saturday.hours, dec!(0));

    let bob_report = report
        .staff_reports
        .iter()
        .find(|r| r.staff.assignment_id() == "XY003")
        .unwrap();
    assert_eq!(bob_report.breakdown.weekday.hours, dec!(2.50));
    assert_eq!(bob_report.breakdown.weekday.claims, dec!(2.00));
}

#[test]
fn test_empty_month_reports_nothing() {
    let mut persistence = test_persistence();
    create_test_staff(&mut persistence, "JD001");

    let report = persistence.monthly_report(june()).unwrap();
    assert!(report.staff_reports.is_empty());
    assert!(report.signoff_summary.is_none());
    assert_eq!(report.grand_total_hours, dec!(0));
}

#[test]
fn test_signoff_summary_counts_pending_staff() {
    let mut persistence = test_persistence();
    let alice = create_test_staff(&mut persistence, "JD001");
    let bob = create_test_staff(&mut persistence, "XY003");
    let signer = create_test_staff(&mut persistence, "BT009");

    add_block(&mut persistence, alice, date(2025, 6, 14));
    add_block(&mut persistence, bob, date(2025, 6, 16));
    persistence
        .sign_off_month(alice, june(), signer, "", test_actor(), test_cause())
        .unwrap();

    let report = persistence.monthly_report(june()).unwrap();
    let summary = report.signoff_summary.unwrap();
    assert_eq!(summary.total_staff, 2);
    assert_eq!(summary.signed_off_count, 1);
    assert_eq!(summary.pending_count, 1);
    assert!(!summary.all_signed_off);
}

#[test]
fn test_bank_holiday_block_buckets_separately() {
    let mut persistence = test_persistence();
    let staff_id = create_test_staff(&mut persistence, "JD001");
    let (task, mode) = seed_lookups(&mut persistence);

    // Cache the early May bank holiday, then record a block on it.
    persistence
        .upsert_bank_holidays(&[dutybook_domain::BankHoliday::new(
            date(2025, 5, 5),
            String::from("Early May bank holiday"),
            String::new(),
        )])
        .unwrap();
    let block = add_block(&mut persistence, staff_id, date(2025, 5, 5));
    add_entry(&mut persistence, block, time(9, 0), time(17, 0), task, mode);

    let may = dutybook_domain::Month::new(2025, 5).unwrap();
    let report = persistence.monthly_report(may).unwrap();
    assert_eq!(
        report.staff_reports[0].breakdown.bank_holiday.hours,
        dec!(8.00)
    );
    assert_eq!(report.staff_reports[0].breakdown.weekday.hours, dec!(0));
}
