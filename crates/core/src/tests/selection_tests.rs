// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_inventory, key, room_id};
use crate::{QuantityChange, Selection};
use pesan_domain::{DomainError, InventorySnapshot};

#[test]
fn test_increments_stop_at_room_capacity() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();

    let first: QuantityChange = selection
        .change_quantity(&inventory, &key("R1", "P1"), 1)
        .unwrap();
    let second: QuantityChange = selection
        .change_quantity(&inventory, &key("R1", "P1"), 1)
        .unwrap();
    let third: QuantityChange = selection
        .change_quantity(&inventory, &key("R1", "P1"), 1)
        .unwrap();

    assert_eq!(first, QuantityChange::Applied { quantity: 1 });
    assert_eq!(second, QuantityChange::Applied { quantity: 2 });
    assert_eq!(third, QuantityChange::AtCapacity);
    assert_eq!(selection.quantity(&key("R1", "P1")), 2);
}

#[test]
fn test_capacity_is_shared_across_rate_plans_of_a_room() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();

    selection
        .change_quantity(&inventory, &key("R1", "P1"), 1)
        .unwrap();
    selection
        .change_quantity(&inventory, &key("R1", "P2"), 1)
        .unwrap();
    let refused: QuantityChange = selection
        .change_quantity(&inventory, &key("R1", "P2"), 1)
        .unwrap();

    assert_eq!(refused, QuantityChange::AtCapacity);
    assert_eq!(selection.total_selected_for_room(&room_id("R1")), 2);
    assert_eq!(selection.remaining_for_room(&inventory, &room_id("R1")), 0);
}

#[test]
fn test_large_increment_is_capped() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();

    let change: QuantityChange = selection
        .change_quantity(&inventory, &key("R1", "P1"), 5)
        .unwrap();

    assert_eq!(change, QuantityChange::Capped { quantity: 2 });
    assert_eq!(selection.quantity(&key("R1", "P1")), 2);
}

#[test]
fn test_decrement_to_zero_prunes_entry() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();
    selection
        .change_quantity(&inventory, &key("R1", "P1"), 1)
        .unwrap();

    let change: QuantityChange = selection
        .change_quantity(&inventory, &key("R1", "P1"), -1)
        .unwrap();

    assert_eq!(change, QuantityChange::Applied { quantity: 0 });
    assert!(selection.is_empty());
    assert_eq!(selection.entries().count(), 0);
}

#[test]
fn test_decrement_below_zero_is_clamped() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();
    selection
        .change_quantity(&inventory, &key("R1", "P1"), 2)
        .unwrap();

    selection
        .change_quantity(&inventory, &key("R1", "P1"), -10)
        .unwrap();
    let again: QuantityChange = selection
        .change_quantity(&inventory, &key("R1", "P1"), -1)
        .unwrap();

    assert_eq!(selection.quantity(&key("R1", "P1")), 0);
    assert_eq!(again, QuantityChange::Unchanged);
    assert!(selection.is_empty());
}

#[test]
fn test_zero_delta_is_unchanged() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();

    let change: QuantityChange = selection
        .change_quantity(&inventory, &key("R1", "P1"), 0)
        .unwrap();

    assert_eq!(change, QuantityChange::Unchanged);
    assert!(!change.changed());
}

#[test]
fn test_full_room_does_not_block_other_rooms() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();
    selection
        .change_quantity(&inventory, &key("R2", "S1"), 1)
        .unwrap();

    let refused: QuantityChange = selection
        .change_quantity(&inventory, &key("R2", "S1"), 1)
        .unwrap();
    let accepted: QuantityChange = selection
        .change_quantity(&inventory, &key("R1", "P1"), 1)
        .unwrap();

    assert_eq!(refused, QuantityChange::AtCapacity);
    assert_eq!(accepted, QuantityChange::Applied { quantity: 1 });
    assert_eq!(selection.quantity(&key("R2", "S1")), 1);
}

#[test]
fn test_unknown_room_or_plan_is_an_error_and_changes_nothing() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();
    selection
        .change_quantity(&inventory, &key("R1", "P1"), 1)
        .unwrap();
    let before: Selection = selection.clone();

    let unknown_room: Result<QuantityChange, DomainError> =
        selection.change_quantity(&inventory, &key("R9", "P1"), 1);
    let unknown_plan: Result<QuantityChange, DomainError> =
        selection.change_quantity(&inventory, &key("R1", "P9"), 1);

    assert!(matches!(unknown_room, Err(DomainError::RoomNotFound { .. })));
    assert!(matches!(
        unknown_plan,
        Err(DomainError::RatePlanNotFound { .. })
    ));
    assert_eq!(selection, before);
}

#[test]
fn test_select_rate_plan_moves_pointer_only() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();

    selection
        .select_rate_plan(&inventory, key("R1", "P2"))
        .unwrap();

    assert_eq!(selection.primary(), Some(&key("R1", "P2")));
    assert!(selection.is_empty());
    assert_eq!(selection.remaining_for_room(&inventory, &room_id("R1")), 2);
}

#[test]
fn test_select_rate_plan_is_accepted_for_full_room() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();
    selection
        .change_quantity(&inventory, &key("R2", "S1"), 1)
        .unwrap();

    let result: Result<(), DomainError> = selection.select_rate_plan(&inventory, key("R2", "S1"));

    assert!(result.is_ok());
    assert_eq!(selection.primary(), Some(&key("R2", "S1")));
}

#[test]
fn test_select_unknown_rate_plan_keeps_previous_pointer() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();
    selection
        .select_rate_plan(&inventory, key("R1", "P1"))
        .unwrap();

    let result: Result<(), DomainError> = selection.select_rate_plan(&inventory, key("R1", "X"));

    assert!(result.is_err());
    assert_eq!(selection.primary(), Some(&key("R1", "P1")));
}

#[test]
fn test_clear_all_drops_entries_and_pointer() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();
    selection
        .select_rate_plan(&inventory, key("R1", "P1"))
        .unwrap();
    selection
        .change_quantity(&inventory, &key("R1", "P1"), 1)
        .unwrap();

    selection.clear_all();

    assert!(selection.is_empty());
    assert_eq!(selection.primary(), None);
}

#[test]
fn test_room_total_never_exceeds_inventory_for_any_sequence() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();
    let deltas: [(&str, i64); 12] = [
        ("P1", 1),
        ("P2", 3),
        ("P1", -1),
        ("P2", 1),
        ("P1", 2),
        ("P2", -5),
        ("P1", 7),
        ("P2", 1),
        ("P1", -2),
        ("P2", 2),
        ("P1", 1),
        ("P2", -1),
    ];

    for (plan, delta) in deltas {
        selection
            .change_quantity(&inventory, &key("R1", plan), delta)
            .unwrap();

        assert!(selection.total_selected_for_room(&room_id("R1")) <= 2);
        assert!(selection.entries().all(|(_, quantity)| quantity > 0));
    }
}
