// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Entity linkage between time blocks and the lab entities worked on.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of external entity a block can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Blood/organ donor.
    Donor,
    /// Blood/organ recipient.
    Recipient,
    /// Laboratory task.
    LabTask,
}

impl EntityKind {
    /// Returns the storage representation of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Recipient => "recipient",
            Self::LabTask => "lab_task",
        }
    }

    /// All kinds.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Donor, Self::Recipient, Self::LabTask]
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "donor" => Ok(Self::Donor),
            "recipient" => Ok(Self::Recipient),
            "lab_task" => Ok(Self::LabTask),
            _ => Err(DomainError::InvalidEntityKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reference to the external entity a block is assigned to.
///
/// The three entity kinds are a closed set, matched exhaustively; the
/// string tag only exists at the storage boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityRef {
    /// A donor, by donor identifier.
    Donor {
        /// The donor identifier (numeric or text).
        donor_id: String,
    },
    /// A recipient, by recipient identifier.
    Recipient {
        /// The recipient identifier.
        recipient_id: String,
    },
    /// A laboratory task, by name.
    LabTask {
        /// The task name.
        name: String,
    },
}

impl EntityRef {
    /// Returns the kind of this entity reference.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Donor { .. } => EntityKind::Donor,
            Self::Recipient { .. } => EntityKind::Recipient,
            Self::LabTask { .. } => EntityKind::LabTask,
        }
    }

    /// Returns the entity identifier as stored.
    #[must_use]
    pub fn entity_id(&self) -> &str {
        match self {
            Self::Donor { donor_id } => donor_id,
            Self::Recipient { recipient_id } => recipient_id,
            Self::LabTask { name } => name,
        }
    }

    /// Reconstructs an entity reference from its storage parts.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind tag is not recognized.
    pub fn from_parts(kind: &str, entity_id: &str) -> Result<Self, DomainError> {
        Ok(match kind.parse::<EntityKind>()? {
            EntityKind::Donor => Self::Donor {
                donor_id: entity_id.to_string(),
            },
            EntityKind::Recipient => Self::Recipient {
                recipient_id: entity_id.to_string(),
            },
            EntityKind::LabTask => Self::LabTask {
                name: entity_id.to_string(),
            },
        })
    }
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind(), self.entity_id())
    }
}

/// Links a time block to an external entity.
///
/// Unique per (block, entity kind, entity id); owned by the block and
/// deleted with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Canonical internal identifier. `None` until persisted.
    assignment_id: Option<i64>,
    /// The owning block's identifier.
    block_id: i64,
    /// The linked entity.
    entity: EntityRef,
    /// Free-text notes.
    notes: String,
}

impl Assignment {
    /// Creates a new `Assignment` without a persisted identifier.
    #[must_use]
    pub const fn new(block_id: i64, entity: EntityRef, notes: String) -> Self {
        Self {
            assignment_id: None,
            block_id,
            entity,
            notes,
        }
    }

    /// Creates an `Assignment` with an existing persisted identifier.
    #[must_use]
    pub const fn with_id(assignment_id: i64, block_id: i64, entity: EntityRef, notes: String) -> Self {
        Self {
            assignment_id: Some(assignment_id),
            block_id,
            entity,
            notes,
        }
    }

    /// Returns the canonical internal identifier if persisted.
    #[must_use]
    pub const fn assignment_id(&self) -> Option<i64> {
        self.assignment_id
    }

    /// Returns the owning block's identifier.
    #[must_use]
    pub const fn block_id(&self) -> i64 {
        self.block_id
    }

    /// Returns the linked entity.
    #[must_use]
    pub const fn entity(&self) -> &EntityRef {
        &self.entity
    }

    /// Returns the free-text notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }
}

/// Display styling for one entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentStyle {
    /// Human-readable kind name.
    pub name: String,
    /// Bootstrap badge color.
    pub color: String,
    /// Bootstrap icon class.
    pub icon: String,
    /// Short description of the kind.
    pub description: String,
}

/// Immutable styling configuration for assignment badges.
///
/// Constructed once at startup and passed explicitly to the rendering
/// consumers that need it; there is no module-level mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentStyles {
    donor: AssignmentStyle,
    recipient: AssignmentStyle,
    lab_task: AssignmentStyle,
}

impl AssignmentStyles {
    /// Creates a styling configuration from explicit per-kind styles.
    #[must_use]
    pub const fn new(
        donor: AssignmentStyle,
        recipient: AssignmentStyle,
        lab_task: AssignmentStyle,
    ) -> Self {
        Self {
            donor,
            recipient,
            lab_task,
        }
    }

    /// Returns the style for an entity kind.
    #[must_use]
    pub const fn style_for(&self, kind: EntityKind) -> &AssignmentStyle {
        match kind {
            EntityKind::Donor => &self.donor,
            EntityKind::Recipient => &self.recipient,
            EntityKind::LabTask => &self.lab_task,
        }
    }
}

impl Default for AssignmentStyles {
    /// The stock styling shipped with the tracker.
    fn default() -> Self {
        Self {
            donor: AssignmentStyle {
                name: String::from("Donor"),
                color: String::from("success"),
                icon: String::from("bi-person-check"),
                description: String::from("Blood/organ donor assignments"),
            },
            recipient: AssignmentStyle {
                name: String::from("Recipient"),
                color: String::from("info"),
                icon: String::from("bi-person-fill"),
                description: String::from("Blood/organ recipient assignments"),
            },
            lab_task: AssignmentStyle {
                name: String::from("Lab Task"),
                color: String::from("warning"),
                icon: String::from("bi-thermometer-low"),
                description: String::from("Laboratory task assignments"),
            },
        }
    }
}
