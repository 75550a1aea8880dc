// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use pesan::BookingSession;
use pesan_domain::InventorySnapshot;
use time::Date;
use time::macros::date;

use crate::{
    ChangeQuantityRequest, SelectDateRequest, continue_to_rooms, parse_inventory,
    select_check_in, select_check_out,
};

pub const TODAY: Date = date!(2026 - 10 - 16);

pub const INVENTORY_JSON: &str = r#"{
    "hotelName": "Hotel Pesan.io",
    "rooms": [
        {
            "roomId": "R1",
            "roomName": "Deluxe",
            "qty": 2,
            "maxGuest": 2,
            "roomFacilities": ["AC", "Wi-Fi"],
            "ratePlans": [
                { "code": "P1", "price": 500000, "breakfast": false },
                { "code": "P2", "price": 650000, "breakfast": true, "name": "Room with Breakfast" }
            ]
        },
        {
            "roomId": "R2",
            "roomName": "Suite",
            "qty": 1,
            "ratePlans": [ { "code": "S1", "price": 1200000 } ]
        },
        { "roomId": "R3", "roomName": "Closed", "qty": 4, "ratePlans": [] }
    ]
}"#;

pub fn create_test_inventory() -> InventorySnapshot {
    parse_inventory(INVENTORY_JSON).unwrap()
}

pub fn create_test_session() -> BookingSession {
    BookingSession::new(String::from("session_api_test"))
}

pub fn date_request(date: &str) -> SelectDateRequest {
    SelectDateRequest {
        date: String::from(date),
    }
}

pub fn quantity_request(room_id: &str, rate_plan_code: &str, delta: i64) -> ChangeQuantityRequest {
    ChangeQuantityRequest {
        room_id: String::from(room_id),
        rate_plan_code: String::from(rate_plan_code),
        delta,
    }
}

/// A session that picked 2026-10-20 to 2026-10-22 and is browsing rooms.
pub fn create_browsing_session(inventory: &InventorySnapshot) -> BookingSession {
    let mut session: BookingSession = create_test_session();
    session = select_check_in(inventory, &session, &date_request("2026-10-20"), TODAY)
        .unwrap()
        .new_session;
    session = select_check_out(inventory, &session, &date_request("2026-10-22"), TODAY)
        .unwrap()
        .new_session;
    continue_to_rooms(inventory, &session, TODAY)
        .unwrap()
        .new_session
}
