// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking session extraction for the server.
//!
//! Guests carry their session identifier in the `X-Booking-Session` header.
//! Handlers that act on a session take a [`BookingSessionId`], which is only
//! produced for sessions the server actually holds.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::AppState;

/// Header carrying the booking session identifier.
pub const SESSION_HEADER: &str = "X-Booking-Session";

/// Extractor for a known booking session.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     AxumState(app_state): AxumState<AppState>,
///     BookingSessionId(session_id): BookingSessionId,
/// ) -> Result<Json<Response>, HttpError> {
///     // session_id: String, present in app_state.sessions
///     Ok(Json(Response { ... }))
/// }
/// ```
///
/// # Errors
///
/// Returns HTTP 401 Unauthorized if:
/// - The `X-Booking-Session` header is missing
/// - The header is not valid visible ASCII
/// - No session with that identifier exists
/// - The session sat idle for longer than the configured TTL, in which case
///   it is also dropped
///
/// A resolved session has its idle clock reset.
pub struct BookingSessionId(pub String);

impl FromRequestParts<AppState> for BookingSessionId {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session_id: &str = parts
            .headers
            .get(SESSION_HEADER)
            .ok_or_else(|| {
                debug!("Missing booking session header");
                SessionError::MissingSessionHeader
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid booking session header encoding");
                SessionError::InvalidSessionHeader
            })?;

        let now: OffsetDateTime = OffsetDateTime::now_utc();
        let mut sessions = state.sessions.lock().await;
        let Some(record) = sessions.get_mut(session_id) else {
            warn!(session_id = %session_id, "Unknown booking session");
            return Err(SessionError::UnknownSession(session_id.to_string()));
        };
        if record.is_idle(now, state.session_ttl) {
            sessions.remove(session_id);
            info!(session_id = %session_id, "Booking session expired");
            return Err(SessionError::ExpiredSession(session_id.to_string()));
        }
        record.last_seen = now;
        drop(sessions);

        debug!(session_id = %session_id, "Booking session resolved");

        Ok(Self(session_id.to_string()))
    }
}

/// Session extraction errors.
///
/// These errors are returned when session lookup fails and are
/// automatically converted to HTTP responses.
#[derive(Debug)]
pub enum SessionError {
    /// The session header is missing.
    MissingSessionHeader,
    /// The session header is not valid text.
    InvalidSessionHeader,
    /// No session with this identifier exists.
    UnknownSession(String),
    /// The session was dropped after sitting idle.
    ExpiredSession(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::MissingSessionHeader => (
                StatusCode::UNAUTHORIZED,
                "Missing X-Booking-Session header. Start a session with POST /sessions",
            ),
            Self::InvalidSessionHeader => {
                (StatusCode::UNAUTHORIZED, "Invalid X-Booking-Session header")
            }
            Self::UnknownSession(session_id) => {
                return (
                    StatusCode::UNAUTHORIZED,
                    format!("Unknown booking session '{session_id}'"),
                )
                    .into_response();
            }
            Self::ExpiredSession(session_id) => {
                return (
                    StatusCode::UNAUTHORIZED,
                    format!(
                        "Booking session '{session_id}' expired. Start a new one with POST /sessions"
                    ),
                )
                    .into_response();
            }
        };

        (status, message).into_response()
    }
}
