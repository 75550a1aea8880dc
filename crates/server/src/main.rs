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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod session;

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use pesan::{BookingSession, BookingSnapshot, FlowStage};
use pesan_api::{
    ApiError, ApiResult, BookingResponse, ChangeQuantityRequest, ClearSelectionResponse,
    DateSelectionResponse, ListRoomsResponse, QuantityChangeResponse, RatePlanRequest,
    RatePlanSelectedResponse, SelectDateRequest, SelectionSummaryResponse, StageResponse, book,
    change_quantity, clear_selection, continue_to_rooms, create_session, get_selection_summary,
    list_rooms, load_inventory, return_to_dates, select_check_in, select_check_out,
    select_rate_plan, translate_domain_error,
};
use pesan_audit::AuditEvent;
use pesan_domain::{DEFAULT_TIMEZONE, InventorySnapshot, parse_stay_date, today_in_timezone};
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use time::{Date, Duration, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::session::BookingSessionId;

/// Pesan Server - HTTP server for the Pesan hotel booking engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the inventory snapshot JSON file.
    #[arg(short, long)]
    inventory: PathBuf,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// IANA time zone of the hotel. Decides which day is "today".
    #[arg(short, long, default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    /// Pin the hotel-local date (`YYYY-MM-DD`) instead of reading the clock.
    #[arg(long)]
    today: Option<String>,

    /// Minutes a session may sit idle before it is dropped.
    #[arg(long, default_value_t = 30)]
    session_ttl_minutes: u32,
}

/// Everything the server keeps about one guest session.
#[derive(Debug, Clone)]
struct SessionRecord {
    /// The current flow state.
    session: BookingSession,
    /// Audit events in the order they were produced.
    history: Vec<AuditEvent>,
    /// The booking handed to checkout, once there is one.
    booking: Option<BookingSnapshot>,
    /// When a request last resolved this session.
    last_seen: OffsetDateTime,
}

impl SessionRecord {
    fn new(session: BookingSession, now: OffsetDateTime) -> Self {
        Self {
            session,
            history: Vec::new(),
            booking: None,
            last_seen: now,
        }
    }

    /// Whether the session has been idle for longer than `ttl`.
    fn is_idle(&self, now: OffsetDateTime, ttl: Duration) -> bool {
        now - self.last_seen > ttl
    }
}

/// Application state shared across handlers.
///
/// The inventory is loaded once at startup and never changes. Sessions live
/// in memory behind a Mutex and are dropped once idle for `session_ttl`.
#[derive(Clone)]
struct AppState {
    /// The validated inventory snapshot.
    inventory: Arc<InventorySnapshot>,
    /// IANA time zone used to compute the hotel-local date.
    timezone: String,
    /// Fixed hotel-local date, if pinned.
    pinned_today: Option<Date>,
    /// Sessions keyed by identifier.
    sessions: Arc<Mutex<HashMap<String, SessionRecord>>>,
    /// How long a session may go unused.
    session_ttl: Duration,
}

impl AppState {
    /// The hotel-local date used for date validation.
    fn today(&self) -> Result<Date, HttpError> {
        if let Some(today) = self.pinned_today {
            return Ok(today);
        }
        today_in_timezone(&self.timezone).map_err(|err| HttpError::from(translate_domain_error(err)))
    }
}

/// API response for a newly started session.
#[derive(Debug, Serialize)]
struct SessionCreatedResponse {
    /// The identifier to send in the `X-Booking-Session` header.
    session_id: String,
    /// The stage the session starts on.
    stage: FlowStage,
    /// The hotel being booked.
    hotel_name: String,
}

/// API response for a session's audit history.
#[derive(Debug, Serialize)]
struct HistoryResponse {
    session_id: String,
    events: Vec<AuditEvent>,
}

/// Error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    /// Always true for errors.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl HttpError {
    fn unknown_session(session_id: &str) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: format!("Unknown booking session '{session_id}'"),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::FlowViolation { .. } => Self {
                status: StatusCode::CONFLICT,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } | ApiError::BookingRejected { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Runs one API operation against a stored session.
///
/// On success the new session replaces the stored one and the audit event is
/// appended to its history. On failure nothing is stored.
async fn apply_to_session<T, F>(
    app_state: &AppState,
    session_id: &str,
    operation: F,
) -> Result<T, HttpError>
where
    F: FnOnce(&InventorySnapshot, &BookingSession, Date) -> Result<ApiResult<T>, ApiError>,
{
    let today: Date = app_state.today()?;

    let mut sessions = app_state.sessions.lock().await;
    let record: &mut SessionRecord = sessions
        .get_mut(session_id)
        .ok_or_else(|| HttpError::unknown_session(session_id))?;

    let result: ApiResult<T> = operation(&app_state.inventory, &record.session, today)?;
    record.session = result.new_session;
    record_event(session_id, &mut record.history, result.audit_event);

    Ok(result.response)
}

/// Appends an audit event to a session's history.
fn record_event(session_id: &str, history: &mut Vec<AuditEvent>, event: AuditEvent) {
    if event.is_no_op() {
        debug!(
            session_id = %session_id,
            action = %event.action.name,
            "Command left the session unchanged"
        );
    }
    history.push(event);
}

/// Handler for POST `/sessions` endpoint.
///
/// Starts a new booking session on the date step. Idle sessions are dropped
/// first so the map only holds live guests.
async fn handle_create_session(
    AxumState(app_state): AxumState<AppState>,
) -> Json<SessionCreatedResponse> {
    let session: BookingSession = create_session();
    let response: SessionCreatedResponse = SessionCreatedResponse {
        session_id: session.session_id.clone(),
        stage: session.stage,
        hotel_name: app_state.inventory.hotel_name.clone(),
    };

    info!(session_id = %response.session_id, "Handling create_session request");

    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let mut sessions = app_state.sessions.lock().await;
    let before: usize = sessions.len();
    sessions.retain(|_, record| !record.is_idle(now, app_state.session_ttl));
    let evicted: usize = before - sessions.len();
    if evicted > 0 {
        info!(evicted, "Dropped idle booking sessions");
    }
    sessions.insert(session.session_id.clone(), SessionRecord::new(session, now));
    drop(sessions);

    Json(response)
}

/// Handler for GET `/rooms` endpoint.
///
/// Lists the bookable rooms with this session's quantities.
async fn handle_list_rooms(
    AxumState(app_state): AxumState<AppState>,
    BookingSessionId(session_id): BookingSessionId,
) -> Result<Json<ListRoomsResponse>, HttpError> {
    info!(session_id = %session_id, "Handling list_rooms request");

    let sessions = app_state.sessions.lock().await;
    let record: &SessionRecord = sessions
        .get(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;

    Ok(Json(list_rooms(&app_state.inventory, &record.session)))
}

/// Handler for GET `/selection` endpoint.
///
/// Returns the checkout bar figures for this session.
async fn handle_get_selection(
    AxumState(app_state): AxumState<AppState>,
    BookingSessionId(session_id): BookingSessionId,
) -> Result<Json<SelectionSummaryResponse>, HttpError> {
    info!(session_id = %session_id, "Handling get_selection request");

    let sessions = app_state.sessions.lock().await;
    let record: &SessionRecord = sessions
        .get(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;

    Ok(Json(get_selection_summary(
        &app_state.inventory,
        &record.session,
    )))
}

/// Handler for POST `/dates/check_in` endpoint.
async fn handle_select_check_in(
    AxumState(app_state): AxumState<AppState>,
    BookingSessionId(session_id): BookingSessionId,
    Json(req): Json<SelectDateRequest>,
) -> Result<Json<DateSelectionResponse>, HttpError> {
    info!(session_id = %session_id, date = %req.date, "Handling select_check_in request");

    let response: DateSelectionResponse =
        apply_to_session(&app_state, &session_id, |inventory, session, today| {
            select_check_in(inventory, session, &req, today)
        })
        .await?;

    Ok(Json(response))
}

/// Handler for POST `/dates/check_out` endpoint.
async fn handle_select_check_out(
    AxumState(app_state): AxumState<AppState>,
    BookingSessionId(session_id): BookingSessionId,
    Json(req): Json<SelectDateRequest>,
) -> Result<Json<DateSelectionResponse>, HttpError> {
    info!(session_id = %session_id, date = %req.date, "Handling select_check_out request");

    let response: DateSelectionResponse =
        apply_to_session(&app_state, &session_id, |inventory, session, today| {
            select_check_out(inventory, session, &req, today)
        })
        .await?;

    Ok(Json(response))
}

/// Handler for POST `/dates/continue` endpoint.
///
/// Moves the session on to room browsing.
async fn handle_continue_to_rooms(
    AxumState(app_state): AxumState<AppState>,
    BookingSessionId(session_id): BookingSessionId,
) -> Result<Json<StageResponse>, HttpError> {
    info!(session_id = %session_id, "Handling continue_to_rooms request");

    let response: StageResponse =
        apply_to_session(&app_state, &session_id, continue_to_rooms).await?;

    Ok(Json(response))
}

/// Handler for POST `/dates/return` endpoint.
///
/// Goes back to the date step, keeping the selection.
async fn handle_return_to_dates(
    AxumState(app_state): AxumState<AppState>,
    BookingSessionId(session_id): BookingSessionId,
) -> Result<Json<StageResponse>, HttpError> {
    info!(session_id = %session_id, "Handling return_to_dates request");

    let response: StageResponse =
        apply_to_session(&app_state, &session_id, return_to_dates).await?;

    Ok(Json(response))
}

/// Handler for POST `/selection/rate_plan` endpoint.
async fn handle_select_rate_plan(
    AxumState(app_state): AxumState<AppState>,
    BookingSessionId(session_id): BookingSessionId,
    Json(req): Json<RatePlanRequest>,
) -> Result<Json<RatePlanSelectedResponse>, HttpError> {
    info!(
        session_id = %session_id,
        room_id = %req.room_id,
        rate_plan_code = %req.rate_plan_code,
        "Handling select_rate_plan request"
    );

    let response: RatePlanSelectedResponse =
        apply_to_session(&app_state, &session_id, |inventory, session, today| {
            select_rate_plan(inventory, session, &req, today)
        })
        .await?;

    Ok(Json(response))
}

/// Handler for POST `/selection/quantity` endpoint.
async fn handle_change_quantity(
    AxumState(app_state): AxumState<AppState>,
    BookingSessionId(session_id): BookingSessionId,
    Json(req): Json<ChangeQuantityRequest>,
) -> Result<Json<QuantityChangeResponse>, HttpError> {
    info!(
        session_id = %session_id,
        room_id = %req.room_id,
        rate_plan_code = %req.rate_plan_code,
        delta = req.delta,
        "Handling change_quantity request"
    );

    let response: QuantityChangeResponse =
        apply_to_session(&app_state, &session_id, |inventory, session, today| {
            change_quantity(inventory, session, &req, today)
        })
        .await?;

    Ok(Json(response))
}

/// Handler for POST `/selection/clear` endpoint.
async fn handle_clear_selection(
    AxumState(app_state): AxumState<AppState>,
    BookingSessionId(session_id): BookingSessionId,
) -> Result<Json<ClearSelectionResponse>, HttpError> {
    info!(session_id = %session_id, "Handling clear_selection request");

    let response: ClearSelectionResponse =
        apply_to_session(&app_state, &session_id, clear_selection).await?;

    Ok(Json(response))
}

/// Handler for POST `/booking` endpoint.
///
/// Hands the booking to checkout and keeps the snapshot for later reads.
async fn handle_book(
    AxumState(app_state): AxumState<AppState>,
    BookingSessionId(session_id): BookingSessionId,
) -> Result<Json<BookingResponse>, HttpError> {
    info!(session_id = %session_id, "Handling book request");

    let mut sessions = app_state.sessions.lock().await;
    let record: &mut SessionRecord = sessions
        .get_mut(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;

    let result: ApiResult<BookingResponse> = book(&app_state.inventory, &record.session)?;
    record.session = result.new_session;
    record_event(&session_id, &mut record.history, result.audit_event);
    record.booking = Some(result.response.snapshot.clone());

    Ok(Json(result.response))
}

/// Handler for GET `/booking` endpoint.
///
/// Returns the snapshot the checkout page reads.
async fn handle_get_booking(
    AxumState(app_state): AxumState<AppState>,
    BookingSessionId(session_id): BookingSessionId,
) -> Result<Json<BookingSnapshot>, HttpError> {
    info!(session_id = %session_id, "Handling get_booking request");

    let sessions = app_state.sessions.lock().await;
    let record: &SessionRecord = sessions
        .get(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;

    let booking: BookingSnapshot = record.booking.clone().ok_or_else(|| HttpError {
        status: StatusCode::NOT_FOUND,
        message: String::from("No booking has been handed to checkout for this session"),
    })?;

    Ok(Json(booking))
}

/// Handler for GET `/history` endpoint.
///
/// Lists the audit events of this session, oldest first.
async fn handle_get_history(
    AxumState(app_state): AxumState<AppState>,
    BookingSessionId(session_id): BookingSessionId,
) -> Result<Json<HistoryResponse>, HttpError> {
    info!(session_id = %session_id, "Handling get_history request");

    let sessions = app_state.sessions.lock().await;
    let record: &SessionRecord = sessions
        .get(&session_id)
        .ok_or_else(|| HttpError::unknown_session(&session_id))?;

    Ok(Json(HistoryResponse {
        events: record.history.clone(),
        session_id,
    }))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/sessions", post(handle_create_session))
        .route("/rooms", get(handle_list_rooms))
        .route("/selection", get(handle_get_selection))
        .route("/dates/check_in", post(handle_select_check_in))
        .route("/dates/check_out", post(handle_select_check_out))
        .route("/dates/continue", post(handle_continue_to_rooms))
        .route("/dates/return", post(handle_return_to_dates))
        .route("/selection/rate_plan", post(handle_select_rate_plan))
        .route("/selection/quantity", post(handle_change_quantity))
        .route("/selection/clear", post(handle_clear_selection))
        .route("/booking", post(handle_book))
        .route("/booking", get(handle_get_booking))
        .route("/history", get(handle_get_history))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Pesan Server");

    let inventory: InventorySnapshot = load_inventory(&args.inventory)?;

    // Fail fast on an unknown zone rather than on the first date pick
    let today: Date = today_in_timezone(&args.timezone)?;
    let pinned_today: Option<Date> = args.today.as_deref().map(parse_stay_date).transpose()?;
    info!(
        timezone = %args.timezone,
        today = %pinned_today.unwrap_or(today),
        pinned = pinned_today.is_some(),
        "Hotel-local date resolved"
    );

    let session_ttl: Duration = Duration::minutes(i64::from(args.session_ttl_minutes));
    info!(
        session_ttl_minutes = args.session_ttl_minutes,
        "Idle sessions expire"
    );

    let app_state: AppState = AppState {
        inventory: Arc::new(inventory),
        timezone: args.timezone,
        pinned_today,
        sessions: Arc::new(Mutex::new(HashMap::new())),
        session_ttl,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
