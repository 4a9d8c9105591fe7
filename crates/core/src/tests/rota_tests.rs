// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::date;
use crate::{CoreError, RotaDayContext, check_rota_slot};
use dutybook_domain::SeniorityTier;

#[test]
fn test_duplicate_staff_and_tier_is_rejected() {
    let ctx = RotaDayContext {
        occupied: vec![(1, SeniorityTier::OnCall)],
    };
    let result = check_rota_slot(&ctx, "JD001", 1, SeniorityTier::OnCall, date(2025, 8, 1));
    assert!(matches!(result, Err(CoreError::DuplicateRotaShift { .. })));
}

#[test]
fn test_same_staff_at_different_tier_is_allowed() {
    let ctx = RotaDayContext {
        occupied: vec![(1, SeniorityTier::OnCall)],
    };
    assert!(check_rota_slot(&ctx, "JD001", 1, SeniorityTier::Senior, date(2025, 8, 1)).is_ok());
}

#[test]
fn test_different_staff_at_same_tier_is_allowed() {
    let ctx = RotaDayContext {
        occupied: vec![(1, SeniorityTier::OnCall)],
    };
    assert!(check_rota_slot(&ctx, "BT002", 2, SeniorityTier::OnCall, date(2025, 8, 1)).is_ok());
}

#[test]
fn test_empty_day_accepts_any_slot() {
    let ctx = RotaDayContext::default();
    for tier in SeniorityTier::all() {
        assert!(check_rota_slot(&ctx, "JD001", 1, tier, date(2025, 8, 1)).is_ok());
    }
}
