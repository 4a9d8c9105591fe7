// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sign-off protocol tests.

use crate::error::OpError;
use crate::tests::{
    add_block, add_block_with_claim, add_entry, create_test_staff, date, june, seed_lookups,
    test_actor, test_cause, test_persistence, time,
};
use dutybook::CoreError;
use rust_decimal_macros::dec;

#[test]
fn test_sign_off_round_trip() {
    let mut persistence = test_persistence();
    let staff_id = create_test_staff(&mut persistence, "JD001");
    let signer_id = create_test_staff(&mut persistence, "BT009");
    add_block(&mut persistence, staff_id, date(2025, 6, 15));

    assert!(!persistence.is_month_signed_off(staff_id, june()).unwrap());

    let signoff = persistence
        .sign_off_month(staff_id, june(), signer_id, "all done", test_actor(), test_cause())
        .unwrap();
    assert!(persistence.is_month_signed_off(staff_id, june()).unwrap());
    assert_eq!(signoff.staff_id(), staff_id);
    assert_eq!(signoff.signed_off_by(), signer_id);
    assert_eq!(signoff.notes(), "all done");

    persistence
        .un_sign_off(signoff.signoff_id().unwrap(), test_actor(), test_cause())
        .unwrap();
    assert!(!persistence.is_month_signed_off(staff_id, june()).unwrap());
    assert!(persistence.get_signoff(staff_id, june()).unwrap().is_none());
}

#[test]
fn test_cannot_sign_off_empty_month() {
    let mut persistence = test_persistence();
    let staff_id = create_test_staff(&mut persistence, "JD001");
    let signer_id = create_test_staff(&mut persistence, "BT009");

    let result = persistence.sign_off_month(
        staff_id,
        june(),
        signer_id,
        "",
        test_actor(),
        test_cause(),
    );
    assert!(matches!(
        result,
        Err(OpError::Rejected(CoreError::EmptyMonthSignOff { .. }))
    ));
}

#[test]
fn test_cannot_sign_off_month_twice() {
    let mut persistence = test_persistence();
    let staff_id = create_test_staff(&mut persistence, "JD001");
    let signer_id = create_test_staff(&mut persistence, "BT009");
    add_block(&mut persistence, staff_id, date(2025, 6, 15));

    persistence
        .sign_off_month(staff_id, june(), signer_id, "", test_actor(), test_cause())
        .unwrap();
    let second = persistence.sign_off_month(
        staff_id,
        june(),
        signer_id,
        "",
        test_actor(),
        test_cause(),
    );
    assert!(matches!(
        second,
        Err(OpError::Rejected(CoreError::DuplicateSignOff { .. }))
    ));
}

#[test]
fn test_un_sign_off_unknown_id_is_not_found() {
    let mut persistence = test_persistence();
    let result = persistence.un_sign_off(999, test_actor(), test_cause());
    assert!(matches!(
        result,
        Err(OpError::Storage(crate::PersistenceError::SignOffNotFound(999)))
    ));
}

#[test]
fn test_report_sign_off_captures_snapshot_totals() {
    let mut persistence = test_persistence();
    let staff_id = create_test_staff(&mut persistence, "JD001");
    let signer_id = create_test_staff(&mut persistence, "BT009");
    let (task, mode) = seed_lookups(&mut persistence);

    let block = add_block_with_claim(&mut persistence, staff_id, date(2025, 6, 15), dec!(4.00));
    add_entry(&mut persistence, block, time(22, 0), time(6, 0), task, mode);

    let report_signoff = persistence
        .sign_off_report(june(), signer_id, "submitted", test_actor(), test_cause())
        .unwrap();
    assert_eq!(report_signoff.staff_count(), 1);
    assert_eq!(report_signoff.total_hours(), dec!(8.00));
    assert_eq!(report_signoff.total_claims(), dec!(4.00));
}

#[test]
fn test_report_snapshot_is_a_receipt_not_a_live_view() {
    let mut persistence = test_persistence();
    let staff_id = create_test_staff(&mut persistence, "JD001");
    let signer_id = create_test_staff(&mut persistence, "BT009");
    let (task, mode) = seed_lookups(&mut persistence);

    let block = add_block(&mut persistence, staff_id, date(2025, 6, 15));
    add_entry(&mut persistence, block, time(22, 0), time(6, 0), task, mode);
    persistence
        .sign_off_report(june(), signer_id, "", test_actor(), test_cause())
        .unwrap();

    // The report lock does not gate per-block mutation: a second
    // staff member can still record June. The stored totals stay as
    // signed.
    let other_id = create_test_staff(&mut persistence, "XY003");
    let other_block = add_block(&mut persistence, other_id, date(2025, 6, 16));
    add_entry(&mut persistence, other_block, time(9, 0), time(17, 0), task, mode);

    let stored = persistence.get_report_signoff(june()).unwrap().unwrap();
    assert_eq!(stored.staff_count(), 1);
    assert_eq!(stored.total_hours(), dec!(8.00));

    // The live report sees the new data.
    let live = persistence.monthly_report(june()).unwrap();
    assert_eq!(live.staff_reports.len(), 2);
    assert_eq!(live.grand_total_hours, dec!(16.00));
}

#[test]
fn test_cannot_sign_off_report_twice() {
    let mut persistence = test_persistence();
    let staff_id = create_test_staff(&mut persistence, "JD001");
    let signer_id = create_test_staff(&mut persistence, "BT009");
    add_block(&mut persistence, staff_id, date(2025, 6, 15));

    persistence
        .sign_off_report(june(), signer_id, "", test_actor(), test_cause())
        .unwrap();
    let second =
        persistence.sign_off_report(june(), signer_id, "", test_actor(), test_cause());
    assert!(matches!(
        second,
        Err(OpError::Rejected(CoreError::DuplicateReportSignOff { .. }))
    ));
}

#[test]
fn test_report_sign_off_requires_records() {
    let mut persistence = test_persistence();
    let signer_id = create_test_staff(&mut persistence, "BT009");

    let result = persistence.sign_off_report(june(), signer_id, "", test_actor(), test_cause());
    assert!(matches!(
        result,
        Err(OpError::Rejected(CoreError::EmptyReportSignOff { .. }))
    ));
}

#[test]
fn test_un_sign_off_report_allows_resigning() {
    let mut persistence = test_persistence();
    let staff_id = create_test_staff(&mut persistence, "JD001");
    let signer_id = create_test_staff(&mut persistence, "BT009");
    add_block(&mut persistence, staff_id, date(2025, 6, 15));

    persistence
        .sign_off_report(june(), signer_id, "", test_actor(), test_cause())
        .unwrap();
    persistence
        .un_sign_off_report(june(), test_actor(), test_cause())
        .unwrap();
    assert!(persistence.get_report_signoff(june()).unwrap().is_none());

    persistence
        .sign_off_report(june(), signer_id, "resigned", test_actor(), test_cause())
        .unwrap();
}

#[test]
fn test_staff_month_summaries_roll_up_lock_state() {
    let mut persistence = test_persistence();
    let alice = create_test_staff(&mut persistence, "JD001");
    let bob = create_test_staff(&mut persistence, "XY003");
    let signer_id = create_test_staff(&mut persistence, "BT009");
    let (task, mode) = seed_lookups(&mut persistence);

    let alice_block =
        add_block_with_claim(&mut persistence, alice, date(2025, 6, 15), dec!(2.00));
    add_entry(&mut persistence, alice_block, time(22, 0), time(6, 0), task, mode);
    add_block(&mut persistence, bob, date(2025, 6, 16));
    persistence
        .sign_off_month(alice, june(), signer_id, "", test_actor(), test_cause())
        .unwrap();

    let summaries = persistence.staff_month_summaries(june()).unwrap();
    assert_eq!(summaries.len(), 2);

    let alice_summary = summaries
        .iter()
        .find(|s| s.staff.assignment_id() == "JD001")
        .unwrap();
    assert_eq!(alice_summary.block_count, 1);
    assert_eq!(alice_summary.total_hours, dec!(8.00));
    assert_eq!(alice_summary.total_claims, dec!(2.00));
    assert!(alice_summary.signoff.is_some());

    let bob_summary = summaries
        .iter()
        .find(|s| s.staff.assignment_id() == "XY003")
        .unwrap();
    assert_eq!(bob_summary.block_count, 1);
    assert!(bob_summary.signoff.is_none());
}

#[test]
fn test_sign_off_actions_are_audited() {
    let mut persistence = test_persistence();
    let staff_id = create_test_staff(&mut persistence, "JD001");
    let signer_id = create_test_staff(&mut persistence, "BT009");
    add_block(&mut persistence, staff_id, date(2025, 6, 15));

    let signoff = persistence
        .sign_off_month(staff_id, june(), signer_id, "", test_actor(), test_cause())
        .unwrap();
    persistence
        .un_sign_off(signoff.signoff_id().unwrap(), test_actor(), test_cause())
        .unwrap();
    persistence
        .sign_off_report(june(), signer_id, "", test_actor(), test_cause())
        .unwrap();

    let timeline = persistence.audit_timeline(staff_id, june()).unwrap();
    let actions: Vec<&str> = timeline
        .iter()
        .map(|stored| stored.event.action.name.as_str())
        .collect();
    assert_eq!(actions, vec!["CreateBlock", "SignOffMonth", "UnSignOffMonth"]);

    // Events fetch back by identifier with their scope intact.
    let fetched = persistence.get_audit_event(timeline[1].event_id).unwrap();
    assert_eq!(fetched.event.action.name, "SignOffMonth");
    assert_eq!(fetched.staff_id, Some(staff_id));

    // Report-level events carry no staff scope.
    let unscoped = persistence.unscoped_audit_events().unwrap();
    assert_eq!(unscoped.len(), 1);
    assert_eq!(unscoped[0].event.action.name, "SignOffReport");
    assert_eq!(unscoped[0].month, Some(june()));
}

#[test]
fn test_list_signoffs_for_month_sees_only_that_month() {
    let mut persistence = test_persistence();
    let staff_id = create_test_staff(&mut persistence, "JD001");
    let signer_id = create_test_staff(&mut persistence, "BT009");
    add_block(&mut persistence, staff_id, date(2025, 6, 15));
    add_block(&mut persistence, staff_id, date(2025, 7, 15));

    persistence
        .sign_off_month(staff_id, june(), signer_id, "", test_actor(), test_cause())
        .unwrap();
    persistence
        .sign_off_month(
            staff_id,
            crate::tests::july(),
            signer_id,
            "",
            test_actor(),
            test_cause(),
        )
        .unwrap();

    let june_locks = persistence.list_signoffs_for_month(june()).unwrap();
    assert_eq!(june_locks.len(), 1);
    assert_eq!(june_locks[0].month(), june());
}
