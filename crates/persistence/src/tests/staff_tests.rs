// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Staff and lookup-table tests.

use crate::error::OpError;
use crate::tests::{create_test_staff, test_persistence};
use crate::PersistenceError;
use dutybook::CoreError;
use dutybook_domain::{DomainError, SeniorityTier, Staff};

#[test]
fn test_create_and_fetch_staff() {
    let mut persistence = test_persistence();
    let staff_id = create_test_staff(&mut persistence, "jd001");

    let member = persistence.get_staff(staff_id).unwrap();
    // Assignment identifiers normalize to uppercase on the way in.
    assert_eq!(member.assignment_id(), "JD001");
    assert_eq!(member.seniority(), SeniorityTier::OnCall);

    let by_assignment = persistence.get_staff_by_assignment("jd001").unwrap();
    assert_eq!(by_assignment.staff_id(), Some(staff_id));
}

#[test]
fn test_duplicate_assignment_id_is_rejected_by_the_store() {
    let mut persistence = test_persistence();
    create_test_staff(&mut persistence, "JD001");

    let duplicate = Staff::new(
        "jd001",
        String::from("Someone Else"),
        SeniorityTier::Trainee,
        String::from("#112233"),
    );
    let result = persistence.create_staff(&duplicate);
    assert!(matches!(
        result,
        Err(OpError::Storage(PersistenceError::UniqueViolation(_)))
    ));
}

#[test]
fn test_invalid_staff_fields_are_rejected() {
    let mut persistence = test_persistence();
    let bad_color = Staff::new(
        "JD001",
        String::from("Jo Dale"),
        SeniorityTier::Trainee,
        String::from("blue"),
    );
    let result = persistence.create_staff(&bad_color);
    assert!(matches!(
        result,
        Err(OpError::Rejected(CoreError::DomainViolation(
            DomainError::InvalidColor { .. }
        )))
    ));
}

#[test]
fn test_update_staff_changes_seniority() {
    let mut persistence = test_persistence();
    let staff_id = create_test_staff(&mut persistence, "JD001");

    persistence
        .update_staff(staff_id, "Jo Dale", SeniorityTier::Senior, "#aa3344")
        .unwrap();

    let member = persistence.get_staff(staff_id).unwrap();
    assert_eq!(member.seniority(), SeniorityTier::Senior);
    assert_eq!(member.name(), "Jo Dale");
    assert_eq!(member.color(), "#aa3344");

    let missing = persistence.update_staff(999, "X", SeniorityTier::Trainee, "#000000");
    assert!(matches!(
        missing,
        Err(OpError::Storage(PersistenceError::StaffNotFound(_)))
    ));
}

#[test]
fn test_list_staff_orders_by_assignment_id() {
    let mut persistence = test_persistence();
    create_test_staff(&mut persistence, "XY003");
    create_test_staff(&mut persistence, "BT009");
    create_test_staff(&mut persistence, "JD001");

    let all = persistence.list_staff().unwrap();
    let ids: Vec<&str> = all.iter().map(Staff::assignment_id).collect();
    assert_eq!(ids, vec!["BT009", "JD001", "XY003"]);
}

#[test]
fn test_lookup_seeding_is_idempotent_and_palette_checked() {
    let mut persistence = test_persistence();

    let first = persistence.seed_task_type("Telephone advice", "secondary").unwrap();
    let second = persistence.seed_task_type("Telephone advice", "secondary").unwrap();
    assert_eq!(first, second);
    assert_eq!(persistence.list_task_types().unwrap().len(), 1);

    let mode = persistence.seed_work_mode("WFH", "primary").unwrap();
    assert_eq!(
        persistence.work_mode_by_name("WFH").unwrap().work_mode_id,
        Some(mode)
    );

    let off_palette = persistence.seed_task_type("Oddity", "magenta");
    assert!(matches!(
        off_palette,
        Err(OpError::Rejected(CoreError::DomainViolation(
            DomainError::InvalidColor { .. }
        )))
    ));
}
