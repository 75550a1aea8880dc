// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::aggregate::total_rooms_selected;
use crate::flow::FlowStage;
use crate::handoff::BookingSnapshot;
use crate::selection::{QuantityChange, Selection};
use pesan_audit::{AuditEvent, StateSnapshot};
use pesan_domain::{DateSelectionOutcome, StayDates, format_stay_date};
use time::Date;

/// Everything one guest has chosen in one pass through the booking flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSession {
    /// The session identifier.
    pub session_id: String,
    /// The current step of the flow.
    pub stage: FlowStage,
    /// Check-in and check-out.
    pub dates: StayDates,
    /// Rooms and rate plans chosen.
    pub selection: Selection,
}

impl BookingSession {
    /// Creates a session at the start of the flow.
    #[must_use]
    pub const fn new(session_id: String) -> Self {
        Self {
            session_id,
            stage: FlowStage::DateSelection,
            dates: StayDates::new(),
            selection: Selection::new(),
        }
    }

    /// Converts the session to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        let primary: String = self
            .selection
            .primary()
            .map_or_else(|| String::from("none"), ToString::to_string);
        StateSnapshot::new(format!(
            "stage={},check_in={},check_out={},primary={primary},entries={},rooms={}",
            self.stage,
            format_optional_date(self.dates.check_in()),
            format_optional_date(self.dates.check_out()),
            self.selection.len(),
            total_rooms_selected(&self.selection)
        ))
    }
}

fn format_optional_date(date: Option<Date>) -> String {
    date.map_or_else(|| String::from("none"), format_stay_date)
}

/// What a command did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// A date pick, accepted or refused.
    Dates(DateSelectionOutcome),
    /// The session moved to another stage.
    StageChanged(FlowStage),
    /// The primary pointer moved.
    PrimarySelected,
    /// A quantity change, possibly capped or refused.
    Quantity(QuantityChange),
    /// The selection was emptied.
    Cleared,
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The session after the transition.
    pub new_session: BookingSession,
    /// What the command did.
    pub outcome: TransitionOutcome,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}

/// The result of handing a booking to checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffResult {
    /// The session, now at `Checkout`.
    pub new_session: BookingSession,
    /// The booking handed off.
    pub snapshot: BookingSnapshot,
    /// The audit event recording the handoff.
    pub audit_event: AuditEvent,
}
