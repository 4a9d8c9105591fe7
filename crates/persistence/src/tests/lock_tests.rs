// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lock enforcement tests: a signed-off June rejects every mutation
//! kind while July stays editable.

use crate::error::OpError;
use crate::tests::{
    add_block, add_entry, create_test_staff, date, june, seed_lookups, test_actor, test_cause,
    test_persistence, time, today,
};
use crate::Persistence;
use dutybook::CoreError;
use dutybook_domain::{DutyMode, EntityRef};

struct LockedFixture {
    persistence: Persistence,
    staff_id: i64,
    june_block: i64,
    june_entry: i64,
    july_block: i64,
    july_entry: i64,
    task: i64,
    mode: i64,
}

/// One staff member with a block and entry in June and July 2025;
/// June signed off by a second staff member.
fn locked_fixture() -> LockedFixture {
    let mut persistence = test_persistence();
    let staff_id = create_test_staff(&mut persistence, "JD001");
    let signer_id = create_test_staff(&mut persistence, "BT009");
    let (task, mode) = seed_lookups(&mut persistence);

    let june_block = add_block(&mut persistence, staff_id, date(2025, 6, 15));
    let june_entry = add_entry(&mut persistence, june_block, time(22, 0), time(6, 0), task, mode);
    let july_block = add_block(&mut persistence, staff_id, date(2025, 7, 15));
    let july_entry = add_entry(&mut persistence, july_block, time(22, 0), time(6, 0), task, mode);

    persistence
        .sign_off_month(staff_id, june(), signer_id, "", test_actor(), test_cause())
        .unwrap();

    LockedFixture {
        persistence,
        staff_id,
        june_block,
        june_entry,
        july_block,
        july_entry,
        task,
        mode,
    }
}

fn assert_locked<T: std::fmt::Debug>(result: Result<T, OpError>) {
    match result {
        Err(OpError::Rejected(CoreError::MonthSignedOff {
            staff,
            signed_off_by,
            ..
        })) => {
            assert_eq!(staff, "JD001");
            assert_eq!(signed_off_by, "BT009");
        }
        other => panic!("expected MonthSignedOff, got {other:?}"),
    }
}

#[test]
fn test_create_block_in_signed_off_month_fails() {
    let mut f = locked_fixture();
    let result = f.persistence.create_time_block(
        f.staff_id,
        date(2025, 6, 20),
        None,
        DutyMode::Normal,
        None,
        today(),
        test_actor(),
        test_cause(),
    );
    assert_locked(result);
}

#[test]
fn test_edit_block_in_signed_off_month_fails() {
    let mut f = locked_fixture();
    let result = f.persistence.edit_time_block(
        f.june_block,
        None,
        DutyMode::Locum,
        None,
        test_actor(),
        test_cause(),
    );
    assert_locked(result);
}

#[test]
fn test_delete_block_in_signed_off_month_fails() {
    let mut f = locked_fixture();
    let result = f
        .persistence
        .delete_time_block(f.june_block, test_actor(), test_cause());
    assert_locked(result);
}

#[test]
fn test_add_entry_in_signed_off_month_fails() {
    let mut f = locked_fixture();
    let result = f.persistence.add_time_entry(
        f.june_block,
        time(9, 0),
        time(10, 0),
        f.task,
        f.mode,
        "",
        test_actor(),
        test_cause(),
    );
    assert_locked(result);
}

#[test]
fn test_edit_entry_in_signed_off_month_fails() {
    let mut f = locked_fixture();
    let result = f.persistence.edit_time_entry(
        f.june_entry,
        time(9, 0),
        time(10, 0),
        f.task,
        f.mode,
        "",
        test_actor(),
        test_cause(),
    );
    assert_locked(result);
}

#[test]
fn test_delete_entry_in_signed_off_month_fails() {
    let mut f = locked_fixture();
    let result = f
        .persistence
        .delete_time_entry(f.june_entry, test_actor(), test_cause());
    assert_locked(result);
}

#[test]
fn test_assignment_mutations_in_signed_off_month_fail() {
    let mut f = locked_fixture();
    let result = f.persistence.add_assignment(
        f.june_block,
        &EntityRef::Donor {
            donor_id: String::from("D-1"),
        },
        "",
        test_actor(),
        test_cause(),
    );
    assert_locked(result);
}

#[test]
fn test_adjacent_open_month_stays_editable() {
    let mut f = locked_fixture();

    // Every June-rejected operation succeeds against July.
    f.persistence
        .edit_time_block(
            f.july_block,
            None,
            DutyMode::Locum,
            None,
            test_actor(),
            test_cause(),
        )
        .unwrap();
    f.persistence
        .add_time_entry(
            f.july_block,
            time(9, 0),
            time(10, 0),
            f.task,
            f.mode,
            "",
            test_actor(),
            test_cause(),
        )
        .unwrap();
    f.persistence
        .edit_time_entry(
            f.july_entry,
            time(8, 0),
            time(10, 0),
            f.task,
            f.mode,
            "",
            test_actor(),
            test_cause(),
        )
        .unwrap();
    f.persistence
        .delete_time_entry(f.july_entry, test_actor(), test_cause())
        .unwrap();
    f.persistence
        .create_time_block(
            f.staff_id,
            date(2025, 7, 20),
            None,
            DutyMode::Normal,
            None,
            today(),
            test_actor(),
            test_cause(),
        )
        .unwrap();
    f.persistence
        .delete_time_block(f.july_block, test_actor(), test_cause())
        .unwrap();
}

#[test]
fn test_lock_only_applies_to_the_locked_staff() {
    let mut f = locked_fixture();
    let other_id = create_test_staff(&mut f.persistence, "XY003");

    // The same June is open for a different staff member.
    f.persistence
        .create_time_block(
            other_id,
            date(2025, 6, 20),
            None,
            DutyMode::Normal,
            None,
            today(),
            test_actor(),
            test_cause(),
        )
        .unwrap();
}

#[test]
fn test_un_sign_off_reopens_the_month() {
    let mut f = locked_fixture();
    let signoff = f
        .persistence
        .get_signoff(f.staff_id, june())
        .unwrap()
        .unwrap();

    f.persistence
        .un_sign_off(signoff.signoff_id().unwrap(), test_actor(), test_cause())
        .unwrap();

    f.persistence
        .edit_time_block(
            f.june_block,
            None,
            DutyMode::Locum,
            None,
            test_actor(),
            test_cause(),
        )
        .unwrap();
}
