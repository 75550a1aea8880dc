// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_inventory, key, room_id};
use crate::{
    LineFigure, RoomAvailability, Selection, is_room_fully_booked, line_figures,
    room_availability, total_price, total_rooms_selected, unresolved_entries,
};
use pesan_domain::{InventorySnapshot, Price};

fn select(inventory: &InventorySnapshot, selection: &mut Selection, room: &str, plan: &str, n: i64) {
    selection
        .change_quantity(inventory, &key(room, plan), n)
        .unwrap();
}

#[test]
fn test_total_price_for_two_rooms_over_two_nights() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();
    select(&inventory, &mut selection, "R1", "P1", 1);
    select(&inventory, &mut selection, "R1", "P1", 1);
    select(&inventory, &mut selection, "R1", "P1", 1);

    assert_eq!(total_rooms_selected(&selection), 2);
    assert_eq!(
        total_price(&inventory, &selection, 2),
        Price::new(2_000_000)
    );
}

#[test]
fn test_total_price_sums_every_line() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();
    select(&inventory, &mut selection, "R1", "P1", 1);
    select(&inventory, &mut selection, "R1", "P2", 1);
    select(&inventory, &mut selection, "R2", "S1", 1);

    // 3 nights: 500.000*3 + 650.000*3 + 1.200.000*3
    assert_eq!(
        total_price(&inventory, &selection, 3),
        Price::new(7_050_000)
    );
    assert_eq!(total_rooms_selected(&selection), 3);
}

#[test]
fn test_changing_one_line_leaves_other_contributions_alone() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();
    select(&inventory, &mut selection, "R2", "S1", 1);
    let suite_only: Price = total_price(&inventory, &selection, 2);

    select(&inventory, &mut selection, "R1", "P1", 1);
    let with_deluxe: Price = total_price(&inventory, &selection, 2);

    assert_eq!(suite_only, Price::new(2_400_000));
    assert_eq!(with_deluxe, Price::new(2_400_000 + 1_000_000));
}

#[test]
fn test_empty_selection_totals_are_zero() {
    let inventory: InventorySnapshot = create_test_inventory();
    let selection: Selection = Selection::new();

    assert_eq!(total_rooms_selected(&selection), 0);
    assert_eq!(total_price(&inventory, &selection, 4), Price::ZERO);
    assert!(line_figures(&inventory, &selection, 4).is_empty());
}

#[test]
fn test_entries_missing_from_a_new_snapshot_are_excluded() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();
    select(&inventory, &mut selection, "R1", "P1", 1);
    select(&inventory, &mut selection, "R2", "S1", 1);

    let mut reloaded: InventorySnapshot = inventory.clone();
    reloaded.rooms.retain(|room| room.room_id.value() != "R2");

    assert_eq!(total_price(&reloaded, &selection, 1), Price::new(500_000));
    assert_eq!(line_figures(&reloaded, &selection, 1).len(), 1);
    assert_eq!(unresolved_entries(&reloaded, &selection), vec![key("R2", "S1")]);
    assert!(unresolved_entries(&inventory, &selection).is_empty());
}

#[test]
fn test_fully_booked_room() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();

    assert!(!is_room_fully_booked(&inventory, &selection, &room_id("R2")));
    select(&inventory, &mut selection, "R2", "S1", 1);

    assert!(is_room_fully_booked(&inventory, &selection, &room_id("R2")));
    assert!(!is_room_fully_booked(&inventory, &selection, &room_id("R1")));
    assert!(is_room_fully_booked(&inventory, &selection, &room_id("R9")));
}

#[test]
fn test_room_availability_lists_bookable_rooms_only() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();
    select(&inventory, &mut selection, "R1", "P2", 1);

    let rooms: Vec<RoomAvailability> = room_availability(&inventory, &selection);

    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].room_id, room_id("R1"));
    assert_eq!(rooms[0].available, 2);
    assert_eq!(rooms[0].selected, 1);
    assert_eq!(rooms[0].remaining, 1);
    assert!(!rooms[0].fully_booked);
    assert_eq!(rooms[1].name, "Suite");
    assert_eq!(rooms[1].remaining, 1);
}

#[test]
fn test_line_figures_follow_inventory_order_and_names() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut selection: Selection = Selection::new();
    select(&inventory, &mut selection, "R2", "S1", 1);
    select(&inventory, &mut selection, "R1", "P2", 1);
    select(&inventory, &mut selection, "R1", "P1", 1);

    let lines: Vec<LineFigure> = line_figures(&inventory, &selection, 2);

    let names: Vec<&str> = lines
        .iter()
        .map(|line| line.rate_plan_name.as_str())
        .collect();
    assert_eq!(names, vec!["Deluxe Plan 1", "Room with Breakfast", "Suite Plan 1"]);
    assert!(lines[1].breakfast_included);
    assert_eq!(lines[1].unit_price, Price::new(650_000));
    assert_eq!(lines[1].line_total, Price::new(1_300_000));
    assert_eq!(lines[2].room_name, "Suite");
}
