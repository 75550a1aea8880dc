// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::flow::FlowStage;
use pesan_domain::SelectionKey;
use time::Date;

/// A command represents guest intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick a check-in date.
    SelectCheckIn {
        /// The picked date.
        date: Date,
    },
    /// Pick a check-out date.
    SelectCheckOut {
        /// The picked date.
        date: Date,
    },
    /// Leave date selection and start browsing rooms.
    ContinueToRooms,
    /// Go back from room browsing to change the dates. The selection is kept.
    ReturnToDates,
    /// Highlight a rate plan.
    SelectRatePlan {
        /// The room and rate plan.
        key: SelectionKey,
    },
    /// Add to or remove from a rate plan's quantity.
    ChangeQuantity {
        /// The room and rate plan.
        key: SelectionKey,
        /// Signed change, usually `+1` or `-1`.
        delta: i64,
    },
    /// Drop every selected room.
    ClearSelection,
}

impl Command {
    /// Returns the command name used in audit records.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectCheckIn { .. } => "SelectCheckIn",
            Self::SelectCheckOut { .. } => "SelectCheckOut",
            Self::ContinueToRooms => "ContinueToRooms",
            Self::ReturnToDates => "ReturnToDates",
            Self::SelectRatePlan { .. } => "SelectRatePlan",
            Self::ChangeQuantity { .. } => "ChangeQuantity",
            Self::ClearSelection => "ClearSelection",
        }
    }

    /// The stage at which the command is accepted.
    #[must_use]
    pub const fn required_stage(&self) -> FlowStage {
        match self {
            Self::SelectCheckIn { .. } | Self::SelectCheckOut { .. } | Self::ContinueToRooms => {
                FlowStage::DateSelection
            }
            Self::ReturnToDates
            | Self::SelectRatePlan { .. }
            | Self::ChangeQuantity { .. }
            | Self::ClearSelection => FlowStage::RoomBrowsing,
        }
    }
}
