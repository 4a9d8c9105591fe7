// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use serde::{Deserialize, Serialize};

/// Represents the entity performing an action.
///
/// An actor is any identifiable entity that initiates a state change:
/// a staff member, the CLI, or an automated job such as the holiday
/// sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor (e.g. an assignment id).
    pub id: String,
    /// The type of actor (e.g. "staff", "cli", "sync").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Represents the reason or trigger for an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    /// A unique identifier for this cause (e.g. request ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this action
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The name of the action (e.g. "`SignOffMonth`", "`CreateBlock`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A snapshot of the relevant state at a point in time.
///
/// Snapshots are compact textual summaries (counts and lock state),
/// not full dumps: enough to see what a transition changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// A string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    ///
    /// # Arguments
    ///
    /// * `data` - A string representation of the state
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable audit event representing a state transition.
///
/// Every successful mutation of timesheet or sign-off state produces
/// exactly one audit event capturing:
/// - Who performed the action (actor)
/// - Why it was performed (cause)
/// - What action was performed (action)
/// - The state before the transition (before)
/// - The state after the transition (after)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The cause or reason for this state change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// Once created, an audit event is immutable.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the change
    /// * `cause` - The reason for the change
    /// * `action` - The action that was performed
    /// * `before` - The state before the transition
    /// * `after` - The state after the transition
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff_actor() -> Actor {
        Actor::new(String::from("BT009"), String::from("staff"))
    }

    fn signoff_cause() -> Cause {
        Cause::new(String::from("req-42"), String::from("Monthly sign-off"))
    }

    #[test]
    fn test_actor_creation_requires_all_fields() {
        let actor: Actor = staff_actor();

        assert_eq!(actor.id, "BT009");
        assert_eq!(actor.actor_type, "staff");
    }

    #[test]
    fn test_action_creation_with_details() {
        let action: Action = Action::new(
            String::from("SignOffMonth"),
            Some(String::from("Signed off June 2025 for JD001")),
        );

        assert_eq!(action.name, "SignOffMonth");
        assert_eq!(
            action.details,
            Some(String::from("Signed off June 2025 for JD001"))
        );
    }

    #[test]
    fn test_audit_event_creation_requires_all_fields() {
        let actor: Actor = staff_actor();
        let cause: Cause = signoff_cause();
        let action: Action = Action::new(String::from("SignOffMonth"), None);
        let before: StateSnapshot = StateSnapshot::new(String::from("locked=false"));
        let after: StateSnapshot = StateSnapshot::new(String::from("locked=true"));

        let event: AuditEvent = AuditEvent::new(
            actor.clone(),
            cause.clone(),
            action.clone(),
            before.clone(),
            after.clone(),
        );

        assert_eq!(event.actor, actor);
        assert_eq!(event.cause, cause);
        assert_eq!(event.action, action);
        assert_eq!(event.before, before);
        assert_eq!(event.after, after);
    }

    #[test]
    fn test_audit_event_round_trips_through_json() {
        let event: AuditEvent = AuditEvent::new(
            staff_actor(),
            signoff_cause(),
            Action::new(String::from("CreateBlock"), None),
            StateSnapshot::new(String::from("blocks=0")),
            StateSnapshot::new(String::from("blocks=1")),
        );

        let json = serde_json::to_string(&event).unwrap();
        let back: AuditEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_actor_equality() {
        let actor1: Actor = staff_actor();
        let actor2: Actor = staff_actor();
        let actor3: Actor = Actor::new(String::from("JD001"), String::from("staff"));

        assert_eq!(actor1, actor2);
        assert_ne!(actor1, actor3);
    }
}
