// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::flow::FlowStage;
use crate::handoff::HandoffRejection;
use pesan_domain::DomainError;

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The command is not accepted at the session's current stage.
    CommandNotAllowed {
        /// The stage the session is on.
        stage: FlowStage,
        /// The refused command.
        command: &'static str,
    },
    /// Room browsing needs both stay dates.
    DatesIncomplete,
    /// The booking could not be handed to checkout.
    HandoffRejected(HandoffRejection),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::CommandNotAllowed { stage, command } => {
                write!(f, "Command '{command}' is not allowed during {stage}")
            }
            Self::DatesIncomplete => {
                write!(f, "Both check-in and check-out must be chosen to continue")
            }
            Self::HandoffRejected(rejection) => write!(f, "Booking rejected: {rejection}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<HandoffRejection> for CoreError {
    fn from(rejection: HandoffRejection) -> Self {
        Self::HandoffRejected(rejection)
    }
}
