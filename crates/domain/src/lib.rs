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
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod stay;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use stay::{
    DEFAULT_TIMEZONE, DateRejection, DateSelectionOutcome, ResolvedStay, StayDates,
    format_stay_date, parse_stay_date, stay_date, today_in_timezone,
};
pub use types::{
    InventorySnapshot, Price, RatePlan, RatePlanCode, RoomId, RoomOffer, SelectionKey,
};
pub use validation::{validate_inventory_snapshot, validate_rate_plans};
