// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use pesan::{BookingSession, FlowStage};
use pesan_domain::InventorySnapshot;

use crate::tests::helpers::{
    TODAY, create_browsing_session, create_test_inventory, create_test_session, date_request,
    quantity_request,
};
use crate::{
    ApiError, book, change_quantity, clear_selection, continue_to_rooms, return_to_dates,
    select_check_in,
};

#[test]
fn test_rooms_cannot_be_changed_before_dates_are_chosen() {
    let inventory: InventorySnapshot = create_test_inventory();
    let session: BookingSession = create_test_session();

    let err: ApiError = change_quantity(
        &inventory,
        &session,
        &quantity_request("R1", "P1", 1),
        TODAY,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ApiError::FlowViolation { ref stage, .. } if stage == "DateSelection"
    ));
}

#[test]
fn test_continue_without_check_out_is_refused() {
    let inventory: InventorySnapshot = create_test_inventory();
    let session: BookingSession =
        select_check_in(&inventory, &create_test_session(), &date_request("2026-10-20"), TODAY)
            .unwrap()
            .new_session;

    let err: ApiError = continue_to_rooms(&inventory, &session, TODAY).unwrap_err();

    assert!(matches!(err, ApiError::FlowViolation { .. }));
}

#[test]
fn test_dates_cannot_be_changed_while_browsing_without_going_back() {
    let inventory: InventorySnapshot = create_test_inventory();
    let session: BookingSession = create_browsing_session(&inventory);

    let refused: Result<_, ApiError> =
        select_check_in(&inventory, &session, &date_request("2026-10-25"), TODAY);
    let back: BookingSession = return_to_dates(&inventory, &session, TODAY)
        .unwrap()
        .new_session;
    let accepted: Result<_, ApiError> =
        select_check_in(&inventory, &back, &date_request("2026-10-25"), TODAY);

    assert!(refused.is_err());
    assert_eq!(back.stage, FlowStage::DateSelection);
    assert!(accepted.unwrap().response.cleared_check_out);
}

#[test]
fn test_checkout_session_accepts_no_further_commands() {
    let inventory: InventorySnapshot = create_test_inventory();
    let mut session: BookingSession = create_browsing_session(&inventory);
    session = change_quantity(
        &inventory,
        &session,
        &quantity_request("R1", "P1", 1),
        TODAY,
    )
    .unwrap()
    .new_session;
    let checked_out: BookingSession = book(&inventory, &session).unwrap().new_session;

    assert!(matches!(
        book(&inventory, &checked_out),
        Err(ApiError::FlowViolation { .. })
    ));
    assert!(clear_selection(&inventory, &checked_out, TODAY).is_err());
    assert!(return_to_dates(&inventory, &checked_out, TODAY).is_err());
}
