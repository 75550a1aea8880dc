// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use pesan::{CoreError, HandoffRejection};
use pesan_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The request does not fit the step of the booking flow the session is on.
    FlowViolation {
        /// The current stage.
        stage: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The booking could not be handed to checkout.
    BookingRejected {
        /// Machine-readable reason.
        reason: String,
        /// A human-readable description of the rejection.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::FlowViolation { stage, message } => {
                write!(f, "Not allowed during {stage}: {message}")
            }
            Self::BookingRejected { reason, message } => {
                write!(f, "Booking rejected ({reason}): {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::RoomNotFound { room_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Room"),
            message: format!("Room '{room_id}' is not offered for this stay"),
        },
        DomainError::RatePlanNotFound {
            room_id,
            rate_plan_code,
        } => ApiError::ResourceNotFound {
            resource_type: String::from("Rate plan"),
            message: format!("Rate plan '{rate_plan_code}' is not offered for room '{room_id}'"),
        },
        DomainError::DuplicateRoom { room_id } => ApiError::DomainRuleViolation {
            rule: String::from("unique_room_id"),
            message: format!("Room '{room_id}' appears more than once in inventory"),
        },
        DomainError::DuplicateRatePlan {
            room_id,
            rate_plan_code,
        } => ApiError::DomainRuleViolation {
            rule: String::from("unique_rate_plan_code"),
            message: format!(
                "Rate plan '{rate_plan_code}' appears more than once for room '{room_id}'"
            ),
        },
        DomainError::InvalidPrice {
            room_id,
            rate_plan_code,
        } => ApiError::DomainRuleViolation {
            rule: String::from("positive_price"),
            message: format!(
                "Rate plan '{rate_plan_code}' for room '{room_id}' must have a price greater than 0"
            ),
        },
        DomainError::InvalidIdentifier { kind, value } => ApiError::InvalidInput {
            field: String::from(kind),
            message: format!("'{value}' must not be empty"),
        },
        DomainError::InvalidTimezone(tz) => ApiError::InvalidInput {
            field: String::from("timezone"),
            message: format!("Unknown time zone '{tz}'"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
    }
}

/// Translates a handoff rejection into an API error.
#[must_use]
pub fn translate_handoff_rejection(rejection: HandoffRejection) -> ApiError {
    let reason: &str = match rejection {
        HandoffRejection::DatesUnresolved => "dates_unresolved",
        HandoffRejection::EmptySelection => "empty_selection",
        HandoffRejection::NoResolvableEntries => "no_resolvable_entries",
    };
    ApiError::BookingRejected {
        reason: String::from(reason),
        message: rejection.to_string(),
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::CommandNotAllowed { stage, command } => ApiError::FlowViolation {
            stage: stage.to_string(),
            message: format!("'{command}' is not available at this step"),
        },
        CoreError::DatesIncomplete => ApiError::FlowViolation {
            stage: String::from("DateSelection"),
            message: String::from("Choose both check-in and check-out to continue"),
        },
        CoreError::HandoffRejected(rejection) => translate_handoff_rejection(rejection),
    }
}
