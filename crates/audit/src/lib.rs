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
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

use serde::Serialize;

#[cfg(test)]
mod tests;

/// Represents the specific action performed.
///
/// An action describes what the guest asked for, whether or not it changed
/// anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    /// The name of the action (e.g., "`ChangeQuantity`", "`SelectCheckIn`").
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

/// A compact summary of a booking session at a point in time.
///
/// The summary is a flat `key=value` list, for example
/// `stage=RoomBrowsing,check_in=2026-10-16,check_out=2026-10-18,entries=1,rooms=2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StateSnapshot {
    /// The rendered summary.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable audit event representing one applied command.
///
/// Every command that is applied to a booking session produces exactly one
/// audit event, including commands whose outcome was a rejection (a date pick
/// that was refused, an increment at capacity). Commands that fail with an
/// error produce none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEvent {
    /// The booking session the command was applied to.
    pub session_id: String,
    /// The action that was performed.
    pub action: Action,
    /// The session state before the command.
    pub before: StateSnapshot,
    /// The session state after the command.
    pub after: StateSnapshot,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `session_id` - The session the command was applied to
    /// * `action` - The action that was performed
    /// * `before` - The state before the transition
    /// * `after` - The state after the transition
    #[must_use]
    pub const fn new(
        session_id: String,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Self {
        Self {
            session_id,
            action,
            before,
            after,
        }
    }

    /// Whether the command left the session unchanged.
    #[must_use]
    pub fn is_no_op(&self) -> bool {
        self.before == self.after
    }
}
