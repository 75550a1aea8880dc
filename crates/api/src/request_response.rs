// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use pesan::{BookingSnapshot, FlowStage, QuantityChange, RoomAvailability};
use pesan_domain::DateRejection;
use serde::{Deserialize, Serialize};

/// API request to pick a check-in or check-out date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectDateRequest {
    /// The picked day, `YYYY-MM-DD`.
    pub date: String,
}

/// API request naming one rate plan of one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePlanRequest {
    /// The room identifier.
    pub room_id: String,
    /// The rate plan code.
    pub rate_plan_code: String,
}

/// API request to change the quantity of a rate plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeQuantityRequest {
    /// The room identifier.
    pub room_id: String,
    /// The rate plan code.
    pub rate_plan_code: String,
    /// Signed change, usually `1` or `-1`.
    pub delta: i64,
}

/// API response for a date pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSelectionResponse {
    /// Whether the pick was stored.
    pub accepted: bool,
    /// Why the pick was refused, if it was.
    pub rejection: Option<DateRejection>,
    /// Whether a stale check-out was cleared by this pick.
    pub cleared_check_out: bool,
    /// Check-in after the pick, `YYYY-MM-DD`.
    pub check_in: Option<String>,
    /// Check-out after the pick, `YYYY-MM-DD`.
    pub check_out: Option<String>,
    /// Check-in as labelled on the date page.
    pub check_in_label: Option<String>,
    /// Check-out as labelled on the date page.
    pub check_out_label: Option<String>,
    /// Number of nights once both dates are set.
    pub nights: Option<u32>,
    /// Whether room browsing may start.
    pub can_continue: bool,
    /// A human-readable message.
    pub message: String,
}

/// API response for a stage change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageResponse {
    /// The stage the session is now on.
    pub stage: FlowStage,
    /// A human-readable message.
    pub message: String,
}

/// API response for highlighting a rate plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePlanSelectedResponse {
    pub room_id: String,
    pub rate_plan_code: String,
    /// Display name of the highlighted plan.
    pub rate_plan_name: String,
    /// Remaining capacity of the room. Zero or less disables increments.
    pub remaining_for_room: i64,
    /// A human-readable message.
    pub message: String,
}

/// API response for a quantity change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuantityChangeResponse {
    pub room_id: String,
    pub rate_plan_code: String,
    /// What the change did.
    pub change: QuantityChange,
    /// Quantity of this line afterwards.
    pub quantity: u32,
    /// Remaining capacity of the room afterwards.
    pub remaining_for_room: i64,
    /// Rooms selected across every line.
    pub total_rooms_selected: u32,
    /// A human-readable message.
    pub message: String,
}

/// API response for clearing the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearSelectionResponse {
    /// Number of lines removed.
    pub removed_lines: usize,
    /// A human-readable message.
    pub message: String,
}

/// One line of the selection summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionLineInfo {
    pub room_id: String,
    pub room_name: String,
    pub rate_plan_code: String,
    pub rate_plan_name: String,
    pub breakfast_included: bool,
    pub quantity: u32,
    pub unit_price: u64,
    pub unit_price_display: String,
    pub line_total: u64,
    pub line_total_display: String,
}

/// The current state of a session, as shown on the checkout bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionSummaryResponse {
    pub stage: FlowStage,
    /// Check-in, `YYYY-MM-DD`.
    pub check_in: Option<String>,
    /// Check-out, `YYYY-MM-DD`.
    pub check_out: Option<String>,
    /// Absent until both dates are set. Price figures are zero meanwhile.
    pub nights: Option<u32>,
    /// The highlighted pair as `(room_id, rate_plan_code)`.
    pub primary: Option<(String, String)>,
    /// Lines in inventory order.
    pub lines: Vec<SelectionLineInfo>,
    /// Capacity per bookable room.
    pub rooms: Vec<RoomAvailability>,
    pub total_rooms: u32,
    /// e.g. `3 Kamar`.
    pub total_rooms_display: String,
    pub total_price: u64,
    pub total_price_display: String,
    /// Whether the booking can be handed to checkout.
    pub can_book: bool,
}

/// One rate plan as listed on a room card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePlanInfo {
    pub code: String,
    /// The plan's own name, or `"<room> Plan <n>"`.
    pub name: String,
    pub description: Option<String>,
    pub breakfast_included: bool,
    pub price: u64,
    pub price_display: String,
    /// Quantity the session holds on this plan.
    pub selected_quantity: u32,
    /// Whether this is the highlighted plan.
    pub is_primary: bool,
}

/// One bookable room as listed on the room page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomInfo {
    pub room_id: String,
    pub name: String,
    pub description: Option<String>,
    pub max_guests: Option<u32>,
    pub facilities: Vec<String>,
    pub available_quantity: u32,
    pub selected: u32,
    pub remaining: i64,
    /// Whether increments are disabled for the room.
    pub fully_booked: bool,
    pub rate_plans: Vec<RatePlanInfo>,
}

/// API response listing the rooms of the current search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRoomsResponse {
    pub hotel_name: String,
    /// Nights of the chosen stay, when known.
    pub nights: Option<u32>,
    /// Bookable rooms in display order. Rooms without rate plans are omitted.
    pub rooms: Vec<RoomInfo>,
}

/// API response for a completed handoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingResponse {
    /// The booking the checkout page reads.
    pub snapshot: BookingSnapshot,
    pub check_in_label: String,
    pub check_out_label: String,
    pub total_price_display: String,
    /// A human-readable message.
    pub message: String,
}
