// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::flow::FlowStage;
use crate::handoff::{BookingSnapshot, build_snapshot};
use crate::selection::QuantityChange;
use crate::state::{BookingSession, HandoffResult, TransitionOutcome, TransitionResult};
use pesan_audit::{Action, AuditEvent, StateSnapshot};
use pesan_domain::{DateSelectionOutcome, InventorySnapshot, format_stay_date};
use time::Date;

/// Applies a command to a booking session, producing a new session and audit event.
///
/// Refused date picks and increments at capacity are not errors: they return
/// the unchanged session with an outcome describing the refusal, and are
/// still audited.
///
/// # Arguments
///
/// * `inventory` - The inventory snapshot the session books against
/// * `session` - The current session (immutable)
/// * `command` - The command to apply
/// * `today` - The first selectable check-in day
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new session, the outcome and the audit event
/// * `Err(CoreError)` if the command cannot be applied
///
/// # Errors
///
/// Returns an error if:
/// - The command is not accepted at the session's stage
/// - Room browsing is requested before both dates are chosen
/// - The command names a room or rate plan that is not in the inventory
#[allow(clippy::too_many_lines)]
pub fn apply(
    inventory: &InventorySnapshot,
    session: &BookingSession,
    command: Command,
    today: Date,
) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();
    let required: FlowStage = command.required_stage();
    if session.stage != required {
        return Err(CoreError::CommandNotAllowed {
            stage: session.stage,
            command: name,
        });
    }

    let before: StateSnapshot = session.to_snapshot();
    let mut new_session: BookingSession = session.clone();

    let (outcome, details): (TransitionOutcome, String) = match command {
        Command::SelectCheckIn { date } => {
            let result: DateSelectionOutcome = new_session.dates.select_check_in(date, today);
            (
                TransitionOutcome::Dates(result),
                describe_date_pick("check-in", date, result),
            )
        }
        Command::SelectCheckOut { date } => {
            let result: DateSelectionOutcome = new_session.dates.select_check_out(date);
            (
                TransitionOutcome::Dates(result),
                describe_date_pick("check-out", date, result),
            )
        }
        Command::ContinueToRooms => {
            if !new_session.dates.can_continue() {
                return Err(CoreError::DatesIncomplete);
            }
            new_session.stage = FlowStage::RoomBrowsing;
            (
                TransitionOutcome::StageChanged(FlowStage::RoomBrowsing),
                String::from("Continued to room selection"),
            )
        }
        Command::ReturnToDates => {
            new_session.stage = FlowStage::DateSelection;
            (
                TransitionOutcome::StageChanged(FlowStage::DateSelection),
                String::from("Returned to date selection"),
            )
        }
        Command::SelectRatePlan { key } => {
            let details: String = format!("Selected rate plan {key}");
            new_session.selection.select_rate_plan(inventory, key)?;
            (TransitionOutcome::PrimarySelected, details)
        }
        Command::ChangeQuantity { key, delta } => {
            let change: QuantityChange =
                new_session
                    .selection
                    .change_quantity(inventory, &key, delta)?;
            let details: String = match change {
                QuantityChange::Applied { quantity } => {
                    format!("Changed {key} by {delta:+}, now {quantity}")
                }
                QuantityChange::Capped { quantity } => {
                    format!("Changed {key} by {delta:+}, capped at {quantity}")
                }
                QuantityChange::AtCapacity => {
                    format!("Refused {key} {delta:+}: room is at capacity")
                }
                QuantityChange::Unchanged => format!("No change to {key}"),
            };
            (TransitionOutcome::Quantity(change), details)
        }
        Command::ClearSelection => {
            let details: String = format!(
                "Cleared {} selected line(s)",
                new_session.selection.len()
            );
            new_session.selection.clear_all();
            (TransitionOutcome::Cleared, details)
        }
    };

    let after: StateSnapshot = new_session.to_snapshot();
    let audit_event: AuditEvent = AuditEvent::new(
        session.session_id.clone(),
        Action::new(String::from(name), Some(details)),
        before,
        after,
    );

    Ok(TransitionResult {
        new_session,
        outcome,
        audit_event,
    })
}

/// Hands the session's booking to checkout.
///
/// On success the session moves to `Checkout` and the returned snapshot is
/// the one value the checkout step reads.
///
/// # Errors
///
/// Returns an error if:
/// - The session is not browsing rooms
/// - The dates are unresolved, nothing is selected, or nothing resolves
pub fn hand_off(
    inventory: &InventorySnapshot,
    session: &BookingSession,
) -> Result<HandoffResult, CoreError> {
    if !session.stage.can_transition_to(FlowStage::Checkout) {
        return Err(CoreError::CommandNotAllowed {
            stage: session.stage,
            command: "Book",
        });
    }

    let snapshot: BookingSnapshot =
        build_snapshot(inventory, &session.dates, &session.selection)?;

    let before: StateSnapshot = session.to_snapshot();
    let mut new_session: BookingSession = session.clone();
    new_session.stage = FlowStage::Checkout;
    let after: StateSnapshot = new_session.to_snapshot();

    let action: Action = Action::new(
        String::from("Book"),
        Some(format!(
            "Booked {} room(s) for {} night(s) from {}, total {}",
            snapshot.total_rooms,
            snapshot.nights,
            format_stay_date(snapshot.check_in),
            snapshot.total_price
        )),
    );
    let audit_event: AuditEvent =
        AuditEvent::new(session.session_id.clone(), action, before, after);

    Ok(HandoffResult {
        new_session,
        snapshot,
        audit_event,
    })
}

fn describe_date_pick(field: &str, date: Date, outcome: DateSelectionOutcome) -> String {
    let date: String = format_stay_date(date);
    match outcome {
        DateSelectionOutcome::Accepted => format!("Set {field} to {date}"),
        DateSelectionOutcome::AcceptedClearedCheckOut => {
            format!("Set {field} to {date} and cleared check-out")
        }
        DateSelectionOutcome::Rejected(reason) => {
            format!("Refused {field} {date}: {reason}")
        }
    }
}
