// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, InventorySnapshot, Price, RatePlan, RatePlanCode, RoomId, RoomOffer,
    validate_inventory_snapshot,
};

fn create_test_plan(code: &str, price: u64) -> RatePlan {
    RatePlan::new(RatePlanCode::new(code).unwrap(), Price::new(price), false)
}

fn create_test_room(id: &str, plans: Vec<RatePlan>) -> RoomOffer {
    RoomOffer::new(RoomId::new(id).unwrap(), format!("Room {id}"), 2, plans)
}

#[test]
fn test_validate_accepts_well_formed_inventory() {
    let inventory: InventorySnapshot = InventorySnapshot::new(
        String::from("Hotel"),
        vec![
            create_test_room("R1", vec![create_test_plan("P1", 500_000)]),
            create_test_room("R2", vec![create_test_plan("P1", 750_000)]),
        ],
    );

    assert!(validate_inventory_snapshot(&inventory).is_ok());
}

#[test]
fn test_validate_accepts_empty_inventory() {
    let inventory: InventorySnapshot = InventorySnapshot::new(String::from("Hotel"), Vec::new());

    assert!(validate_inventory_snapshot(&inventory).is_ok());
}

#[test]
fn test_validate_rejects_duplicate_rooms() {
    let inventory: InventorySnapshot = InventorySnapshot::new(
        String::from("Hotel"),
        vec![
            create_test_room("R1", vec![create_test_plan("P1", 500_000)]),
            create_test_room("R1", vec![create_test_plan("P2", 500_000)]),
        ],
    );

    assert_eq!(
        validate_inventory_snapshot(&inventory),
        Err(DomainError::DuplicateRoom {
            room_id: String::from("R1")
        })
    );
}

#[test]
fn test_validate_rejects_duplicate_plan_codes_within_room() {
    let inventory: InventorySnapshot = InventorySnapshot::new(
        String::from("Hotel"),
        vec![create_test_room(
            "R1",
            vec![create_test_plan("P1", 500_000), create_test_plan("P1", 600_000)],
        )],
    );

    assert_eq!(
        validate_inventory_snapshot(&inventory),
        Err(DomainError::DuplicateRatePlan {
            room_id: String::from("R1"),
            rate_plan_code: String::from("P1"),
        })
    );
}

#[test]
fn test_validate_rejects_zero_price() {
    let inventory: InventorySnapshot = InventorySnapshot::new(
        String::from("Hotel"),
        vec![create_test_room("R1", vec![create_test_plan("P1", 0)])],
    );

    assert_eq!(
        validate_inventory_snapshot(&inventory),
        Err(DomainError::InvalidPrice {
            room_id: String::from("R1"),
            rate_plan_code: String::from("P1"),
        })
    );
}
