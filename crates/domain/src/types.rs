// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Bootstrap palette names accepted for lookup-table display colors.
pub const BOOTSTRAP_COLORS: [&str; 8] = [
    "primary",
    "secondary",
    "success",
    "danger",
    "warning",
    "info",
    "light",
    "dark",
];

/// Represents a staff seniority tier.
///
/// Tiers classify both the staff member and the rota slot they occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeniorityTier {
    /// Trainee cover.
    Trainee,
    /// First on-call.
    OnCall,
    /// Senior cover.
    Senior,
}

impl SeniorityTier {
    /// Returns the storage representation of this tier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Trainee => "trainee",
            Self::OnCall => "oncall",
            Self::Senior => "senior",
        }
    }

    /// Returns the human-readable label for this tier.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Trainee => "Trainee",
            Self::OnCall => "On-Call",
            Self::Senior => "Senior",
        }
    }

    /// All tiers in ascending seniority order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Trainee, Self::OnCall, Self::Senior]
    }
}

impl FromStr for SeniorityTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trainee" => Ok(Self::Trainee),
            "oncall" => Ok(Self::OnCall),
            "senior" => Ok(Self::Senior),
            _ => Err(DomainError::InvalidSeniorityTier(s.to_string())),
        }
    }
}

impl std::fmt::Display for SeniorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Represents the staffing scheme a block or rota day runs under.
///
/// Locum days are worked under the designated alternate cover scheme and
/// are claimed separately from normal on-call duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DutyMode {
    /// Standard on-call duty.
    #[default]
    Normal,
    /// Alternate cover scheme.
    Locum,
}

impl DutyMode {
    /// Returns the storage representation of this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Locum => "locum",
        }
    }

    /// Returns the human-readable label for this mode.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Locum => "Locum",
        }
    }

    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Normal => Self::Locum,
            Self::Locum => Self::Normal,
        }
    }
}

impl FromStr for DutyMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "locum" => Ok(Self::Locum),
            _ => Err(DomainError::InvalidDutyMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for DutyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Represents an on-call staff member.
///
/// `staff_id` is the canonical internal identifier assigned by the
/// persistence layer. The assignment identifier is the human-facing
/// unique handle (e.g. a payroll or duty code) and is normalized to
/// uppercase for case-insensitive uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Canonical internal identifier. `None` until persisted.
    staff_id: Option<i64>,
    /// Unique assignment identifier, normalized to uppercase.
    assignment_id: String,
    /// Display name of the person this staff record belongs to.
    name: String,
    /// Current seniority tier.
    seniority: SeniorityTier,
    /// Hex display color (`#rrggbb`) used on the rota calendar.
    color: String,
}

impl Staff {
    /// Default display color for newly onboarded staff.
    pub const DEFAULT_COLOR: &'static str = "#6c757d";

    /// Creates a new `Staff` without a persisted identifier.
    ///
    /// # Arguments
    ///
    /// * `assignment_id` - The unique assignment identifier (normalized to uppercase)
    /// * `name` - The person's display name
    /// * `seniority` - The seniority tier
    /// * `color` - Hex display color
    #[must_use]
    pub fn new(assignment_id: &str, name: String, seniority: SeniorityTier, color: String) -> Self {
        Self {
            staff_id: None,
            assignment_id: assignment_id.to_uppercase(),
            name,
            seniority,
            color,
        }
    }

    /// Creates a `Staff` with an existing persisted identifier.
    #[must_use]
    pub fn with_id(
        staff_id: i64,
        assignment_id: &str,
        name: String,
        seniority: SeniorityTier,
        color: String,
    ) -> Self {
        Self {
            staff_id: Some(staff_id),
            assignment_id: assignment_id.to_uppercase(),
            name,
            seniority,
            color,
        }
    }

    /// Returns the canonical internal identifier if persisted.
    #[must_use]
    pub const fn staff_id(&self) -> Option<i64> {
        self.staff_id
    }

    /// Returns the assignment identifier.
    #[must_use]
    pub fn assignment_id(&self) -> &str {
        &self.assignment_id
    }

    /// Returns the person's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the seniority tier.
    #[must_use]
    pub const fn seniority(&self) -> SeniorityTier {
        self.seniority
    }

    /// Returns the hex display color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl std::fmt::Display for Staff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({})", self.assignment_id, self.name, self.seniority)
    }
}

/// A task type lookup row (e.g. "Telephone advice", "Crossmatch").
///
/// Task types categorize what was done during a time entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskType {
    /// Canonical internal identifier. `None` until persisted.
    pub task_type_id: Option<i64>,
    /// Unique task name.
    pub name: String,
    /// Bootstrap display color.
    pub color: String,
}

impl TaskType {
    /// Creates a new `TaskType` without a persisted identifier.
    #[must_use]
    pub const fn new(name: String, color: String) -> Self {
        Self {
            task_type_id: None,
            name,
            color,
        }
    }

    /// Creates a `TaskType` with an existing persisted identifier.
    #[must_use]
    pub const fn with_id(task_type_id: i64, name: String, color: String) -> Self {
        Self {
            task_type_id: Some(task_type_id),
            name,
            color,
        }
    }
}

/// A work mode lookup row (e.g. "WFH", "Lab", "Senior cover").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkMode {
    /// Canonical internal identifier. `None` until persisted.
    pub work_mode_id: Option<i64>,
    /// Unique mode name.
    pub name: String,
    /// Bootstrap display color.
    pub color: String,
}

impl WorkMode {
    /// Creates a new `WorkMode` without a persisted identifier.
    #[must_use]
    pub const fn new(name: String, color: String) -> Self {
        Self {
            work_mode_id: None,
            name,
            color,
        }
    }

    /// Creates a `WorkMode` with an existing persisted identifier.
    #[must_use]
    pub const fn with_id(work_mode_id: i64, name: String, color: String) -> Self {
        Self {
            work_mode_id: Some(work_mode_id),
            name,
            color,
        }
    }
}
