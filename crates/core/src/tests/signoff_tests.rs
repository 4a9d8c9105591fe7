// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{datetime, june, locked_ctx, open_ctx, test_actor, test_cause};
use crate::{Command, CoreError, ReportContext, authorize_report, authorize_signoff};
use dutybook_domain::ReportSignOff;
use rust_decimal_macros::dec;

fn sign_off_command() -> Command {
    Command::SignOffMonth {
        staff_id: 1,
        month: june(),
        signed_off_by: 9,
        notes: String::new(),
    }
}

#[test]
fn test_sign_off_open_month_with_blocks_succeeds() {
    let event = authorize_signoff(&sign_off_command(), &open_ctx(3), test_actor(), test_cause())
        .unwrap();
    assert_eq!(event.action.name, "SignOffMonth");
    assert!(event.before.data.contains("locked=false"));
    assert!(event.after.data.contains("locked=true"));
}

#[test]
fn test_sign_off_twice_is_rejected_not_overwritten() {
    let result = authorize_signoff(&sign_off_command(), &locked_ctx(3), test_actor(), test_cause());
    assert!(matches!(result, Err(CoreError::DuplicateSignOff { .. })));
}

#[test]
fn test_sign_off_empty_month_is_rejected() {
    let result = authorize_signoff(&sign_off_command(), &open_ctx(0), test_actor(), test_cause());
    assert!(matches!(result, Err(CoreError::EmptyMonthSignOff { .. })));
}

#[test]
fn test_un_sign_off_is_unconditional() {
    let command = Command::UnSignOffMonth { signoff_id: 7 };
    let event =
        authorize_signoff(&command, &locked_ctx(3), test_actor(), test_cause()).unwrap();
    assert_eq!(event.action.name, "UnSignOffMonth");
    assert!(event.before.data.contains("locked=true"));
    assert!(event.after.data.contains("locked=false"));
}

fn open_report_ctx(staff_with_records: usize) -> ReportContext {
    ReportContext {
        month: june(),
        report_signoff: None,
        staff_with_records,
    }
}

#[test]
fn test_report_sign_off_does_not_require_staff_completeness() {
    // Two staff pending is a warning, not a blocker.
    let event = authorize_report(
        &Command::SignOffReport {
            month: june(),
            signed_off_by: 9,
            notes: String::new(),
        },
        &open_report_ctx(4),
        test_actor(),
        test_cause(),
    )
    .unwrap();
    assert_eq!(event.action.name, "SignOffReport");
}

#[test]
fn test_report_sign_off_twice_is_rejected() {
    let existing = ReportSignOff::with_id(
        1,
        june(),
        9,
        datetime(2025, 7, 2, 9),
        String::new(),
        4,
        dec!(120.00),
        dec!(80.00),
    );
    let ctx = ReportContext {
        month: june(),
        report_signoff: Some(existing),
        staff_with_records: 4,
    };
    let result = authorize_report(
        &Command::SignOffReport {
            month: june(),
            signed_off_by: 9,
            notes: String::new(),
        },
        &ctx,
        test_actor(),
        test_cause(),
    );
    assert!(matches!(
        result,
        Err(CoreError::DuplicateReportSignOff { .. })
    ));
}

#[test]
fn test_report_sign_off_with_no_records_is_rejected() {
    let result = authorize_report(
        &Command::SignOffReport {
            month: june(),
            signed_off_by: 9,
            notes: String::new(),
        },
        &open_report_ctx(0),
        test_actor(),
        test_cause(),
    );
    assert!(matches!(result, Err(CoreError::EmptyReportSignOff { .. })));
}

#[test]
fn test_un_sign_off_report_is_unconditional() {
    let event = authorize_report(
        &Command::UnSignOffReport { month: june() },
        &open_report_ctx(4),
        test_actor(),
        test_cause(),
    )
    .unwrap();
    assert_eq!(event.action.name, "UnSignOffReport");
}
