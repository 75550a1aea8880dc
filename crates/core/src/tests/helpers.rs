// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingSession, Command, FlowStage, TransitionResult, apply};
use pesan_audit::StateSnapshot;
use pesan_domain::{
    InventorySnapshot, Price, RatePlan, RatePlanCode, RoomId, RoomOffer, SelectionKey, StayDates,
};
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2026 - 10 - 16);
pub const CHECK_IN: Date = date!(2026 - 10 - 20);
pub const CHECK_OUT: Date = date!(2026 - 10 - 22);

pub fn key(room: &str, plan: &str) -> SelectionKey {
    SelectionKey::new(RoomId::new(room).unwrap(), RatePlanCode::new(plan).unwrap())
}

/// Looks up one `key=value` field of an audit summary.
pub fn snapshot_field<'a>(snapshot: &'a StateSnapshot, key: &str) -> Option<&'a str> {
    snapshot.data.split(',').find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name == key).then_some(value)
    })
}

pub fn room_id(room: &str) -> RoomId {
    RoomId::new(room).unwrap()
}

pub fn create_test_plan(code: &str, price: u64, breakfast: bool) -> RatePlan {
    RatePlan::new(RatePlanCode::new(code).unwrap(), Price::new(price), breakfast)
}

/// R1 Deluxe (2 rooms, P1 500.000 / P2 650.000 with breakfast),
/// R2 Suite (1 room, S1 1.200.000), R3 Closed (3 rooms, no plans).
pub fn create_test_inventory() -> InventorySnapshot {
    let mut breakfast_plan: RatePlan = create_test_plan("P2", 650_000, true);
    breakfast_plan.name = Some(String::from("Room with Breakfast"));

    InventorySnapshot::new(
        String::from("Hotel Pesan.io"),
        vec![
            RoomOffer::new(
                room_id("R1"),
                String::from("Deluxe"),
                2,
                vec![create_test_plan("P1", 500_000, false), breakfast_plan],
            ),
            RoomOffer::new(
                room_id("R2"),
                String::from("Suite"),
                1,
                vec![create_test_plan("S1", 1_200_000, false)],
            ),
            RoomOffer::new(room_id("R3"), String::from("Closed"), 3, Vec::new()),
        ],
    )
}

pub fn create_test_dates() -> StayDates {
    let mut dates: StayDates = StayDates::new();
    dates.select_check_in(CHECK_IN, TODAY);
    dates.select_check_out(CHECK_OUT);
    dates
}

pub fn create_test_session() -> BookingSession {
    BookingSession::new(String::from("session_test"))
}

/// A session with dates chosen and the flow moved on to room browsing.
pub fn create_browsing_session(inventory: &InventorySnapshot) -> BookingSession {
    let mut session: BookingSession = create_test_session();
    for command in [
        Command::SelectCheckIn { date: CHECK_IN },
        Command::SelectCheckOut { date: CHECK_OUT },
        Command::ContinueToRooms,
    ] {
        let result: TransitionResult = apply(inventory, &session, command, TODAY).unwrap();
        session = result.new_session;
    }
    assert_eq!(session.stage, FlowStage::RoomBrowsing);
    session
}
