// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod format;
mod handlers;
mod inventory;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_handoff_rejection,
};
pub use format::{format_date_indonesian, format_idr, format_room_count};
pub use handlers::{
    ApiResult, book, change_quantity, clear_selection, continue_to_rooms, create_session,
    get_selection_summary, list_rooms, return_to_dates, select_check_in, select_check_out,
    select_rate_plan,
};
pub use inventory::{InventoryLoadError, load_inventory, parse_inventory};
pub use request_response::{
    BookingResponse, ChangeQuantityRequest, ClearSelectionResponse, DateSelectionResponse,
    ListRoomsResponse, QuantityChangeResponse, RatePlanInfo, RatePlanRequest,
    RatePlanSelectedResponse, RoomInfo, SelectDateRequest, SelectionLineInfo,
    SelectionSummaryResponse, StageResponse,
};
