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

mod aggregate;
mod apply;
mod command;
mod error;
mod flow;
mod handoff;
mod selection;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use aggregate::{
    LineFigure, RoomAvailability, is_room_fully_booked, line_figures, room_availability,
    total_price, total_rooms_selected, unresolved_entries,
};
pub use apply::{apply, hand_off};
pub use command::Command;
pub use error::CoreError;
pub use flow::FlowStage;
pub use handoff::{BookingLine, BookingSnapshot, HandoffRejection, build_snapshot, can_book};
pub use selection::{QuantityChange, Selection};
pub use state::{BookingSession, HandoffResult, TransitionOutcome, TransitionResult};
