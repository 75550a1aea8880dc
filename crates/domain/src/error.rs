// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The room is not part of the inventory snapshot.
    RoomNotFound {
        /// The requested room identifier.
        room_id: String,
    },
    /// The rate plan is not offered for the room.
    RatePlanNotFound {
        /// The room identifier.
        room_id: String,
        /// The requested rate plan code.
        rate_plan_code: String,
    },
    /// The same room identifier appears twice in one snapshot.
    DuplicateRoom {
        /// The duplicated room identifier.
        room_id: String,
    },
    /// The same rate plan code appears twice within one room.
    DuplicateRatePlan {
        /// The room identifier.
        room_id: String,
        /// The duplicated rate plan code.
        rate_plan_code: String,
    },
    /// A rate plan price is not strictly positive.
    InvalidPrice {
        /// The room identifier.
        room_id: String,
        /// The rate plan code.
        rate_plan_code: String,
    },
    /// An identifier is empty or blank.
    InvalidIdentifier {
        /// Which identifier was invalid (e.g. `room_id`).
        kind: &'static str,
        /// The raw value that was rejected.
        value: String,
    },
    /// The time zone name is not a known IANA zone.
    InvalidTimezone(String),
    /// Failed to parse or convert a calendar date.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RoomNotFound { room_id } => {
                write!(f, "Room '{room_id}' not found in inventory")
            }
            Self::RatePlanNotFound {
                room_id,
                rate_plan_code,
            } => {
                write!(
                    f,
                    "Rate plan '{rate_plan_code}' not found for room '{room_id}'"
                )
            }
            Self::DuplicateRoom { room_id } => {
                write!(f, "Room '{room_id}' appears more than once in inventory")
            }
            Self::DuplicateRatePlan {
                room_id,
                rate_plan_code,
            } => {
                write!(
                    f,
                    "Rate plan '{rate_plan_code}' appears more than once for room '{room_id}'"
                )
            }
            Self::InvalidPrice {
                room_id,
                rate_plan_code,
            } => {
                write!(
                    f,
                    "Rate plan '{rate_plan_code}' for room '{room_id}' must have a price greater than 0"
                )
            }
            Self::InvalidIdentifier { kind, value } => {
                write!(f, "Invalid {kind}: '{value}' must not be empty")
            }
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: '{tz}'"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
