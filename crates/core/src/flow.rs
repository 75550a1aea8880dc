// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// The step of the booking flow a session is on.
///
/// ```text
/// DateSelection -> RoomBrowsing -> Checkout
///               <-
/// ```
///
/// `Checkout` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowStage {
    /// Picking check-in and check-out.
    #[default]
    DateSelection,
    /// Choosing rooms and rate plans.
    RoomBrowsing,
    /// The booking has been handed off.
    Checkout,
}

impl FlowStage {
    /// Returns the stage name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DateSelection => "DateSelection",
            Self::RoomBrowsing => "RoomBrowsing",
            Self::Checkout => "Checkout",
        }
    }

    /// Whether the flow may move from this stage to `next`.
    #[must_use]
    pub const fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::DateSelection, Self::RoomBrowsing)
                | (Self::RoomBrowsing, Self::DateSelection | Self::Checkout)
        )
    }

    /// Whether no further commands are accepted.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Checkout)
    }
}

impl std::fmt::Display for FlowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
