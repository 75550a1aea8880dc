// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only figures derived from a selection and the inventory.
//!
//! Nothing here is cached; every call walks the live selection. Entries whose
//! room or rate plan no longer resolves contribute nothing.

use crate::selection::Selection;
use pesan_domain::{InventorySnapshot, Price, RatePlanCode, RoomId, SelectionKey};
use serde::Serialize;

/// Capacity figures for one room, as shown on its card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomAvailability {
    /// The room.
    pub room_id: RoomId,
    /// Display name of the room.
    pub name: String,
    /// Inventory count for the stay.
    pub available: u32,
    /// Quantity selected across the room's rate plans.
    pub selected: u32,
    /// `available - selected`.
    pub remaining: i64,
    /// Whether nothing more can be added.
    pub fully_booked: bool,
}

/// One resolved selection line with its display figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineFigure {
    /// The room.
    pub room_id: RoomId,
    /// Display name of the room.
    pub room_name: String,
    /// The rate plan.
    pub rate_plan_code: RatePlanCode,
    /// Display name of the rate plan.
    pub rate_plan_name: String,
    /// Whether breakfast is included.
    pub breakfast_included: bool,
    /// Price per room per night.
    pub unit_price: Price,
    /// Rooms selected on this line.
    pub quantity: u32,
    /// `unit_price * nights * quantity`.
    pub line_total: Price,
}

/// Sum of all selected quantities.
#[must_use]
pub fn total_rooms_selected(selection: &Selection) -> u32 {
    selection
        .entries()
        .fold(0_u32, |total, (_, quantity)| total.saturating_add(quantity))
}

/// Sum of `price * nights * quantity` over the entries that resolve.
#[must_use]
pub fn total_price(inventory: &InventorySnapshot, selection: &Selection, nights: u32) -> Price {
    selection
        .entries()
        .filter_map(|(key, quantity)| {
            let (_, plan) = inventory.resolve(key)?;
            Some(line_total(plan.price, nights, quantity))
        })
        .fold(Price::ZERO, Price::saturating_add)
}

/// Whether a room has no remaining capacity.
#[must_use]
pub fn is_room_fully_booked(
    inventory: &InventorySnapshot,
    selection: &Selection,
    room_id: &RoomId,
) -> bool {
    selection.remaining_for_room(inventory, room_id) <= 0
}

/// Capacity figures for every bookable room, in display order.
#[must_use]
pub fn room_availability(
    inventory: &InventorySnapshot,
    selection: &Selection,
) -> Vec<RoomAvailability> {
    inventory
        .bookable_rooms()
        .map(|room| {
            let selected: u32 = selection.total_selected_for_room(&room.room_id);
            let remaining: i64 = selection.remaining_for_room(inventory, &room.room_id);
            RoomAvailability {
                room_id: room.room_id.clone(),
                name: room.name.clone(),
                available: room.available_quantity,
                selected,
                remaining,
                fully_booked: remaining <= 0,
            }
        })
        .collect()
}

/// Display figures for each resolvable entry, in inventory order.
///
/// One line per selection entry. Entries that no longer resolve are left out.
#[must_use]
pub fn line_figures(
    inventory: &InventorySnapshot,
    selection: &Selection,
    nights: u32,
) -> Vec<LineFigure> {
    let mut positioned: Vec<((usize, usize), LineFigure)> = selection
        .entries()
        .filter_map(|(key, quantity)| {
            let position: (usize, usize) = inventory.position_of(key)?;
            let (room, plan) = inventory.resolve(key)?;
            Some((
                position,
                LineFigure {
                    room_id: room.room_id.clone(),
                    room_name: room.name.clone(),
                    rate_plan_code: plan.code.clone(),
                    rate_plan_name: room
                        .rate_plan_display_name(&plan.code)
                        .unwrap_or_else(|| plan.code.to_string()),
                    breakfast_included: plan.breakfast_included,
                    unit_price: plan.price,
                    quantity,
                    line_total: line_total(plan.price, nights, quantity),
                },
            ))
        })
        .collect();

    positioned.sort_by_key(|(position, _)| *position);
    positioned.into_iter().map(|(_, line)| line).collect()
}

/// Keys in the selection that no longer resolve against the inventory.
#[must_use]
pub fn unresolved_entries(inventory: &InventorySnapshot, selection: &Selection) -> Vec<SelectionKey> {
    selection
        .entries()
        .filter(|(key, _)| inventory.resolve(key).is_none())
        .map(|(key, _)| key.clone())
        .collect()
}

fn line_total(unit_price: Price, nights: u32, quantity: u32) -> Price {
    unit_price
        .saturating_mul(u64::from(nights))
        .saturating_mul(u64::from(quantity))
}
