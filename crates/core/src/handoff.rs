// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::aggregate::{LineFigure, line_figures, total_rooms_selected};
use crate::selection::Selection;
use pesan_domain::{
    InventorySnapshot, Price, RatePlanCode, ResolvedStay, RoomId, StayDates, stay_date,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// Why a booking could not be handed to checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandoffRejection {
    /// Check-in or check-out is missing.
    DatesUnresolved,
    /// No room is selected.
    EmptySelection,
    /// Every selected entry refers to a room or plan that is gone.
    NoResolvableEntries,
}

impl std::fmt::Display for HandoffRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatesUnresolved => write!(f, "Check-in and check-out dates are required"),
            Self::EmptySelection => write!(f, "Select at least one room to continue"),
            Self::NoResolvableEntries => {
                write!(f, "None of the selected rooms are available any more")
            }
        }
    }
}

impl std::error::Error for HandoffRejection {}

/// One line of a booking handed to checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingLine {
    pub room_id: RoomId,
    pub room_name: String,
    pub rate_plan_code: RatePlanCode,
    pub rate_plan_name: String,
    pub breakfast_included: bool,
    pub quantity: u32,
    /// Price per room per night.
    pub unit_price: Price,
    pub line_total: Price,
}

impl From<LineFigure> for BookingLine {
    fn from(figure: LineFigure) -> Self {
        Self {
            room_id: figure.room_id,
            room_name: figure.room_name,
            rate_plan_code: figure.rate_plan_code,
            rate_plan_name: figure.rate_plan_name,
            breakfast_included: figure.breakfast_included,
            quantity: figure.quantity,
            unit_price: figure.unit_price,
            line_total: figure.line_total,
        }
    }
}

/// The validated booking handed to the checkout step.
///
/// A snapshot is a value copy. Later changes to the selection do not reach
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSnapshot {
    pub hotel_name: String,
    #[serde(with = "stay_date")]
    pub check_in: Date,
    #[serde(with = "stay_date")]
    pub check_out: Date,
    /// At least 1.
    pub nights: u32,
    /// Lines in inventory order.
    pub lines: Vec<BookingLine>,
    pub total_rooms: u32,
    /// Sum of the line totals.
    pub total_price: Price,
}

/// Whether a booking can be handed off: dates resolved and at least one room
/// selected.
#[must_use]
pub fn can_book(dates: &StayDates, selection: &Selection) -> bool {
    dates.resolve().is_some() && total_rooms_selected(selection) > 0
}

/// Materializes the booking handed to checkout.
///
/// # Errors
///
/// Returns a `HandoffRejection` when the dates are not resolved, nothing is
/// selected, or none of the selected entries resolve against the inventory.
pub fn build_snapshot(
    inventory: &InventorySnapshot,
    dates: &StayDates,
    selection: &Selection,
) -> Result<BookingSnapshot, HandoffRejection> {
    let stay: ResolvedStay = dates.resolve().ok_or(HandoffRejection::DatesUnresolved)?;

    if total_rooms_selected(selection) == 0 {
        return Err(HandoffRejection::EmptySelection);
    }

    let lines: Vec<BookingLine> = line_figures(inventory, selection, stay.nights)
        .into_iter()
        .map(BookingLine::from)
        .collect();

    if lines.is_empty() {
        return Err(HandoffRejection::NoResolvableEntries);
    }

    let total_rooms: u32 = lines
        .iter()
        .fold(0_u32, |total, line| total.saturating_add(line.quantity));
    let total_price: Price = lines
        .iter()
        .fold(Price::ZERO, |total, line| total.saturating_add(line.line_total));

    Ok(BookingSnapshot {
        hotel_name: inventory.hotel_name.clone(),
        check_in: stay.check_in,
        check_out: stay.check_out,
        nights: stay.nights,
        lines,
        total_rooms,
        total_price,
    })
}
