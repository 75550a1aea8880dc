// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{InventorySnapshot, RatePlanCode, RoomId, RoomOffer};
use std::collections::HashSet;

/// Validates an inventory snapshot once, at load time.
///
/// The selection engine trusts the snapshot afterwards, so every structural
/// rule it relies on is checked here.
///
/// # Arguments
///
/// * `inventory` - The snapshot to validate
///
/// # Returns
///
/// * `Ok(())` if the snapshot is usable
/// * `Err(DomainError)` describing the first violation found
///
/// # Errors
///
/// Returns an error if:
/// - Two rooms share an identifier
/// - Two rate plans within one room share a code
/// - A rate plan price is zero
pub fn validate_inventory_snapshot(inventory: &InventorySnapshot) -> Result<(), DomainError> {
    let mut seen_rooms: HashSet<&RoomId> = HashSet::new();

    for room in &inventory.rooms {
        if !seen_rooms.insert(&room.room_id) {
            return Err(DomainError::DuplicateRoom {
                room_id: room.room_id.value().to_string(),
            });
        }

        validate_rate_plans(room)?;
    }

    Ok(())
}

/// Validates the rate plans of a single room.
///
/// # Errors
///
/// Returns an error on a duplicated code or a non-positive price.
pub fn validate_rate_plans(room: &RoomOffer) -> Result<(), DomainError> {
    let mut seen_codes: HashSet<&RatePlanCode> = HashSet::new();

    for plan in &room.rate_plans {
        if !seen_codes.insert(&plan.code) {
            return Err(DomainError::DuplicateRatePlan {
                room_id: room.room_id.value().to_string(),
                rate_plan_code: plan.code.value().to_string(),
            });
        }

        // Rule: every sellable plan has a price
        if !plan.price.is_positive() {
            return Err(DomainError::InvalidPrice {
                room_id: room.room_id.value().to_string(),
                rate_plan_code: plan.code.value().to_string(),
            });
        }
    }

    Ok(())
}
