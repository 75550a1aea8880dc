// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking flow operations at the API boundary.
//!
//! Each mutating operation parses its request into domain types, applies one
//! core command and translates the outcome. Read operations never mutate.

use pesan::{
    BookingSession, Command, CoreError, HandoffResult, QuantityChange, TransitionOutcome,
    TransitionResult, apply, can_book, hand_off, line_figures, room_availability,
    total_rooms_selected, unresolved_entries,
};
use pesan_audit::AuditEvent;
use pesan_domain::{
    DateRejection, DateSelectionOutcome, InventorySnapshot, Price, RatePlanCode, RoomId,
    SelectionKey, StayDates, format_stay_date, parse_stay_date,
};
use std::time::{SystemTime, UNIX_EPOCH};
use time::Date;
use tracing::{debug, info, warn};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::format::{format_date_indonesian, format_idr, format_room_count};
use crate::request_response::{
    BookingResponse, ChangeQuantityRequest, ClearSelectionResponse, DateSelectionResponse,
    ListRoomsResponse, QuantityChangeResponse, RatePlanInfo, RatePlanRequest,
    RatePlanSelectedResponse, RoomInfo, SelectDateRequest, SelectionLineInfo,
    SelectionSummaryResponse, StageResponse,
};

/// The result of an API operation that includes both the response and the audit event.
///
/// This ensures that successful API operations always produce an audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The audit event generated by this operation.
    pub audit_event: AuditEvent,
    /// The session after the operation.
    pub new_session: BookingSession,
}

/// Starts a new booking session with a fresh identifier.
#[must_use]
pub fn create_session() -> BookingSession {
    let timestamp: u128 = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let session_id: String = format!("session_{timestamp}_{}", rand::random::<u64>());
    info!(session_id = %session_id, "Created booking session");
    BookingSession::new(session_id)
}

fn parse_key(room_id: &str, rate_plan_code: &str) -> Result<SelectionKey, ApiError> {
    let room_id: RoomId = RoomId::new(room_id).map_err(translate_domain_error)?;
    let code: RatePlanCode = RatePlanCode::new(rate_plan_code).map_err(translate_domain_error)?;
    Ok(SelectionKey::new(room_id, code))
}

fn parse_date(request: &SelectDateRequest) -> Result<Date, ApiError> {
    parse_stay_date(&request.date).map_err(translate_domain_error)
}

fn run(
    inventory: &InventorySnapshot,
    session: &BookingSession,
    command: Command,
    today: Date,
) -> Result<TransitionResult, ApiError> {
    apply(inventory, session, command, today).map_err(|err: CoreError| {
        warn!(session_id = %session.session_id, error = %err, "Command refused");
        translate_core_error(err)
    })
}

fn date_response(dates: &StayDates, outcome: TransitionOutcome) -> DateSelectionResponse {
    let (accepted, rejection, cleared_check_out, message) = match outcome {
        TransitionOutcome::Dates(picked) => {
            let rejection: Option<DateRejection> = match picked {
                DateSelectionOutcome::Rejected(reason) => Some(reason),
                _ => None,
            };
            let cleared: bool = picked == DateSelectionOutcome::AcceptedClearedCheckOut;
            let message: String = match rejection {
                Some(reason) => reason.to_string(),
                None if cleared => String::from("Check-in selected; choose a new check-out"),
                None => String::from("Date selected"),
            };
            (picked.is_accepted(), rejection, cleared, message)
        }
        _ => (false, None, false, String::from("No date change")),
    };

    DateSelectionResponse {
        accepted,
        rejection,
        cleared_check_out,
        check_in: dates.check_in().map(format_stay_date),
        check_out: dates.check_out().map(format_stay_date),
        check_in_label: dates.check_in().map(format_date_indonesian),
        check_out_label: dates.check_out().map(format_date_indonesian),
        nights: dates.nights(),
        can_continue: dates.can_continue(),
        message,
    }
}

fn select_date(
    inventory: &InventorySnapshot,
    session: &BookingSession,
    command: Command,
    today: Date,
) -> Result<ApiResult<DateSelectionResponse>, ApiError> {
    let result: TransitionResult = run(inventory, session, command, today)?;
    let response: DateSelectionResponse = date_response(&result.new_session.dates, result.outcome);

    if response.accepted {
        info!(
            session_id = %session.session_id,
            check_in = ?response.check_in,
            check_out = ?response.check_out,
            "Date selected"
        );
    } else {
        debug!(session_id = %session.session_id, reason = %response.message, "Date pick refused");
    }

    Ok(ApiResult {
        response,
        audit_event: result.audit_event,
        new_session: result.new_session,
    })
}

/// Picks the check-in date.
///
/// Days before `today` are refused, and a check-out on or before the new
/// check-in is cleared. A refusal is reported in the response, not as an
/// error.
///
/// # Errors
///
/// Returns an error if the date cannot be parsed or the session is not on
/// the date step.
pub fn select_check_in(
    inventory: &InventorySnapshot,
    session: &BookingSession,
    request: &SelectDateRequest,
    today: Date,
) -> Result<ApiResult<DateSelectionResponse>, ApiError> {
    let date: Date = parse_date(request)?;
    select_date(inventory, session, Command::SelectCheckIn { date }, today)
}

/// Picks the check-out date.
///
/// Refused (in the response) when no check-in is set or the date is not after
/// it.
///
/// # Errors
///
/// Returns an error if the date cannot be parsed or the session is not on
/// the date step.
pub fn select_check_out(
    inventory: &InventorySnapshot,
    session: &BookingSession,
    request: &SelectDateRequest,
    today: Date,
) -> Result<ApiResult<DateSelectionResponse>, ApiError> {
    let date: Date = parse_date(request)?;
    select_date(inventory, session, Command::SelectCheckOut { date }, today)
}

/// Moves from date selection to room browsing.
///
/// # Errors
///
/// Returns an error if either date is missing or the session is not on the
/// date step.
pub fn continue_to_rooms(
    inventory: &InventorySnapshot,
    session: &BookingSession,
    today: Date,
) -> Result<ApiResult<StageResponse>, ApiError> {
    let result: TransitionResult = run(inventory, session, Command::ContinueToRooms, today)?;
    info!(
        session_id = %session.session_id,
        nights = ?result.new_session.dates.nights(),
        "Continued to room selection"
    );

    Ok(ApiResult {
        response: StageResponse {
            stage: result.new_session.stage,
            message: String::from("Choose your rooms"),
        },
        audit_event: result.audit_event,
        new_session: result.new_session,
    })
}

/// Goes back from room browsing to the date step. The selection is kept.
///
/// # Errors
///
/// Returns an error if the session is not browsing rooms.
pub fn return_to_dates(
    inventory: &InventorySnapshot,
    session: &BookingSession,
    today: Date,
) -> Result<ApiResult<StageResponse>, ApiError> {
    let result: TransitionResult = run(inventory, session, Command::ReturnToDates, today)?;
    info!(session_id = %session.session_id, "Returned to date selection");

    Ok(ApiResult {
        response: StageResponse {
            stage: result.new_session.stage,
            message: String::from("Change your dates"),
        },
        audit_event: result.audit_event,
        new_session: result.new_session,
    })
}

/// Highlights a rate plan without changing any quantity.
///
/// # Errors
///
/// Returns an error if the identifiers are blank, the room or plan is not
/// offered, or the session is not browsing rooms.
pub fn select_rate_plan(
    inventory: &InventorySnapshot,
    session: &BookingSession,
    request: &RatePlanRequest,
    today: Date,
) -> Result<ApiResult<RatePlanSelectedResponse>, ApiError> {
    let key: SelectionKey = parse_key(&request.room_id, &request.rate_plan_code)?;
    let result: TransitionResult = run(
        inventory,
        session,
        Command::SelectRatePlan { key: key.clone() },
        today,
    )?;

    let rate_plan_name: String = inventory
        .room(&key.room_id)
        .and_then(|room| room.rate_plan_display_name(&key.rate_plan_code))
        .unwrap_or_else(|| key.rate_plan_code.to_string());
    let remaining_for_room: i64 = result
        .new_session
        .selection
        .remaining_for_room(inventory, &key.room_id);

    info!(session_id = %session.session_id, key = %key, "Selected rate plan");

    Ok(ApiResult {
        response: RatePlanSelectedResponse {
            room_id: key.room_id.to_string(),
            rate_plan_code: key.rate_plan_code.to_string(),
            message: format!("Selected {rate_plan_name}"),
            rate_plan_name,
            remaining_for_room,
        },
        audit_event: result.audit_event,
        new_session: result.new_session,
    })
}

/// Changes the quantity of a rate plan.
///
/// Increments beyond the room's remaining capacity are capped or refused and
/// reported in the response; the room total never exceeds its inventory.
///
/// # Errors
///
/// Returns an error if the identifiers are blank, the room or plan is not
/// offered, or the session is not browsing rooms.
pub fn change_quantity(
    inventory: &InventorySnapshot,
    session: &BookingSession,
    request: &ChangeQuantityRequest,
    today: Date,
) -> Result<ApiResult<QuantityChangeResponse>, ApiError> {
    let key: SelectionKey = parse_key(&request.room_id, &request.rate_plan_code)?;
    let result: TransitionResult = run(
        inventory,
        session,
        Command::ChangeQuantity {
            key: key.clone(),
            delta: request.delta,
        },
        today,
    )?;

    let change: QuantityChange = match result.outcome {
        TransitionOutcome::Quantity(change) => change,
        _ => QuantityChange::Unchanged,
    };
    let quantity: u32 = result.new_session.selection.quantity(&key);
    let remaining_for_room: i64 = result
        .new_session
        .selection
        .remaining_for_room(inventory, &key.room_id);

    let message: String = match change {
        QuantityChange::Applied { .. } => format!("{quantity} selected"),
        QuantityChange::Capped { .. } => {
            format!("Only {quantity} available for this room")
        }
        QuantityChange::AtCapacity => String::from("No more rooms of this type are available"),
        QuantityChange::Unchanged => String::from("No change"),
    };

    if change.changed() {
        info!(
            session_id = %session.session_id,
            key = %key,
            delta = request.delta,
            quantity,
            remaining_for_room,
            "Changed quantity"
        );
    } else {
        debug!(
            session_id = %session.session_id,
            key = %key,
            delta = request.delta,
            ?change,
            "Quantity change had no effect"
        );
    }

    Ok(ApiResult {
        response: QuantityChangeResponse {
            room_id: key.room_id.to_string(),
            rate_plan_code: key.rate_plan_code.to_string(),
            change,
            quantity,
            remaining_for_room,
            total_rooms_selected: total_rooms_selected(&result.new_session.selection),
            message,
        },
        audit_event: result.audit_event,
        new_session: result.new_session,
    })
}

/// Removes every selected room and the highlighted plan.
///
/// # Errors
///
/// Returns an error if the session is not browsing rooms.
pub fn clear_selection(
    inventory: &InventorySnapshot,
    session: &BookingSession,
    today: Date,
) -> Result<ApiResult<ClearSelectionResponse>, ApiError> {
    let removed_lines: usize = session.selection.len();
    let result: TransitionResult = run(inventory, session, Command::ClearSelection, today)?;
    info!(session_id = %session.session_id, removed_lines, "Cleared selection");

    Ok(ApiResult {
        response: ClearSelectionResponse {
            removed_lines,
            message: String::from("Selection cleared"),
        },
        audit_event: result.audit_event,
        new_session: result.new_session,
    })
}

/// Hands the booking to checkout.
///
/// # Errors
///
/// Returns an error if the session is not browsing rooms, the dates are
/// unresolved, or nothing bookable is selected. The session is unchanged in
/// that case.
pub fn book(
    inventory: &InventorySnapshot,
    session: &BookingSession,
) -> Result<ApiResult<BookingResponse>, ApiError> {
    log_unresolved(inventory, session);

    let result: HandoffResult = hand_off(inventory, session).map_err(|err: CoreError| {
        warn!(session_id = %session.session_id, error = %err, "Booking refused");
        translate_core_error(err)
    })?;

    info!(
        session_id = %session.session_id,
        rooms = result.snapshot.total_rooms,
        nights = result.snapshot.nights,
        total = result.snapshot.total_price.amount(),
        "Booking handed to checkout"
    );

    let response: BookingResponse = BookingResponse {
        check_in_label: format_date_indonesian(result.snapshot.check_in),
        check_out_label: format_date_indonesian(result.snapshot.check_out),
        total_price_display: format_idr(result.snapshot.total_price),
        message: format!(
            "{} for {} night(s)",
            format_room_count(result.snapshot.total_rooms),
            result.snapshot.nights
        ),
        snapshot: result.snapshot,
    };

    Ok(ApiResult {
        response,
        audit_event: result.audit_event,
        new_session: result.new_session,
    })
}

/// Summarizes the session's selection for the checkout bar.
#[must_use]
pub fn get_selection_summary(
    inventory: &InventorySnapshot,
    session: &BookingSession,
) -> SelectionSummaryResponse {
    log_unresolved(inventory, session);

    let nights: Option<u32> = session.dates.nights();
    let lines: Vec<SelectionLineInfo> =
        line_figures(inventory, &session.selection, nights.unwrap_or(0))
            .into_iter()
            .map(|line| SelectionLineInfo {
                room_id: line.room_id.to_string(),
                room_name: line.room_name,
                rate_plan_code: line.rate_plan_code.to_string(),
                rate_plan_name: line.rate_plan_name,
                breakfast_included: line.breakfast_included,
                quantity: line.quantity,
                unit_price: line.unit_price.amount(),
                unit_price_display: format_idr(line.unit_price),
                line_total: line.line_total.amount(),
                line_total_display: format_idr(line.line_total),
            })
            .collect();
    let total_price: Price = lines
        .iter()
        .fold(Price::ZERO, |total, line| {
            total.saturating_add(Price::new(line.line_total))
        });
    // Figures come from resolved lines only, so they agree with what `book` accepts
    let total_rooms: u32 = lines
        .iter()
        .fold(0_u32, |total, line| total.saturating_add(line.quantity));

    SelectionSummaryResponse {
        stage: session.stage,
        check_in: session.dates.check_in().map(format_stay_date),
        check_out: session.dates.check_out().map(format_stay_date),
        nights,
        primary: session
            .selection
            .primary()
            .map(|key| (key.room_id.to_string(), key.rate_plan_code.to_string())),
        lines,
        rooms: room_availability(inventory, &session.selection),
        total_rooms,
        total_rooms_display: format_room_count(total_rooms),
        total_price: total_price.amount(),
        total_price_display: format_idr(total_price),
        can_book: can_book(&session.dates, &session.selection) && total_rooms > 0,
    }
}

/// Lists the bookable rooms with the session's quantities and capacity.
#[must_use]
pub fn list_rooms(inventory: &InventorySnapshot, session: &BookingSession) -> ListRoomsResponse {
    let rooms: Vec<RoomInfo> = inventory
        .bookable_rooms()
        .map(|room| {
            let remaining: i64 = session.selection.remaining_for_room(inventory, &room.room_id);
            let rate_plans: Vec<RatePlanInfo> = room
                .rate_plans
                .iter()
                .map(|plan| {
                    let key: SelectionKey =
                        SelectionKey::new(room.room_id.clone(), plan.code.clone());
                    RatePlanInfo {
                        code: plan.code.to_string(),
                        name: room
                            .rate_plan_display_name(&plan.code)
                            .unwrap_or_else(|| plan.code.to_string()),
                        description: plan.description.clone(),
                        breakfast_included: plan.breakfast_included,
                        price: plan.price.amount(),
                        price_display: format_idr(plan.price),
                        selected_quantity: session.selection.quantity(&key),
                        is_primary: session.selection.primary() == Some(&key),
                    }
                })
                .collect();

            RoomInfo {
                room_id: room.room_id.to_string(),
                name: room.name.clone(),
                description: room.description.clone(),
                max_guests: room.max_guests,
                facilities: room.facilities.clone(),
                available_quantity: room.available_quantity,
                selected: session.selection.total_selected_for_room(&room.room_id),
                remaining,
                fully_booked: remaining <= 0,
                rate_plans,
            }
        })
        .collect();

    ListRoomsResponse {
        hotel_name: inventory.hotel_name.clone(),
        nights: session.dates.nights(),
        rooms,
    }
}

fn log_unresolved(inventory: &InventorySnapshot, session: &BookingSession) {
    for key in unresolved_entries(inventory, &session.selection) {
        warn!(
            session_id = %session.session_id,
            key = %key,
            "Selected rate plan is no longer in the inventory; excluded from totals"
        );
    }
}
