// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stay date resolution.
//!
//! Turns two calendar picks (check-in, check-out) into an ordered pair and a
//! night count.
//!
//! ## Invariants
//!
//! - When both bounds are set, check-out is strictly after check-in
//! - Moving check-in onto or past the current check-out clears check-out
//! - Check-in cannot be earlier than "today" in the hotel's time zone
//! - Rejected picks never change state

use crate::error::DomainError;
use chrono::Datelike;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// Time zone used when none is configured.
pub const DEFAULT_TIMEZONE: &str = "Asia/Jakarta";

const STAY_DATE_FORMAT: &[time::format_description::BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]");

/// Parses a stay date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_stay_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), STAY_DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a stay date as `YYYY-MM-DD`.
#[must_use]
pub fn format_stay_date(date: Date) -> String {
    date.format(STAY_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Serde adapter for `YYYY-MM-DD` dates.
pub mod stay_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    /// Serializes a date as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_stay_date(*date))
    }

    /// Deserializes a `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Fails if the value is not a string in that form.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        super::parse_stay_date(&raw).map_err(serde::de::Error::custom)
    }
}

/// Returns the current calendar date in an IANA time zone.
///
/// # Arguments
///
/// * `timezone` - IANA zone name, e.g. `Asia/Jakarta`
///
/// # Errors
///
/// Returns an error if the zone is unknown or the date cannot be converted.
pub fn today_in_timezone(timezone: &str) -> Result<Date, DomainError> {
    let tz: Tz = timezone
        .parse()
        .map_err(|_| DomainError::InvalidTimezone(timezone.to_string()))?;

    let local: chrono::NaiveDate = chrono::Utc::now().with_timezone(&tz).date_naive();
    naive_to_date(local)
}

/// Converts a `chrono::NaiveDate` into a `time::Date`.
fn naive_to_date(local: chrono::NaiveDate) -> Result<Date, DomainError> {
    let conversion_error = |error: String| DomainError::DateParseError {
        date_string: local.to_string(),
        error,
    };

    let month_number: u8 = u8::try_from(local.month()).map_err(|e| conversion_error(e.to_string()))?;
    let month: Month = Month::try_from(month_number).map_err(|e| conversion_error(e.to_string()))?;
    let day: u8 = u8::try_from(local.day()).map_err(|e| conversion_error(e.to_string()))?;

    Date::from_calendar_date(local.year(), month, day).map_err(|e| conversion_error(e.to_string()))
}

/// Why a date pick was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DateRejection {
    /// Check-in is earlier than the first selectable day.
    BeforeEarliest {
        /// The first selectable day.
        #[serde(with = "stay_date")]
        earliest: Date,
    },
    /// Check-out was picked before any check-in.
    MissingCheckIn,
    /// Check-out is on or before check-in.
    NotAfterCheckIn {
        /// The current check-in.
        #[serde(with = "stay_date")]
        check_in: Date,
    },
}

impl std::fmt::Display for DateRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BeforeEarliest { earliest } => write!(
                f,
                "Check-in cannot be earlier than {}",
                format_stay_date(*earliest)
            ),
            Self::MissingCheckIn => write!(f, "Choose a check-in date first"),
            Self::NotAfterCheckIn { check_in } => write!(
                f,
                "Check-out must be after check-in ({})",
                format_stay_date(*check_in)
            ),
        }
    }
}

/// Result of a date pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSelectionOutcome {
    /// The pick was stored.
    Accepted,
    /// The check-in was stored and the stale check-out was cleared.
    AcceptedClearedCheckOut,
    /// The pick was refused; nothing changed.
    Rejected(DateRejection),
}

impl DateSelectionOutcome {
    /// Whether the pick changed state.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// A fully resolved stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStay {
    /// First night of the stay.
    #[serde(with = "stay_date")]
    pub check_in: Date,
    /// Departure day.
    #[serde(with = "stay_date")]
    pub check_out: Date,
    /// Number of nights, at least 1.
    pub nights: u32,
}

/// The check-in / check-out pair as chosen so far.
///
/// Both bounds are optional until picked. Fields are private so the ordering
/// invariant can only be established through the pick operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StayDates {
    check_in: Option<Date>,
    check_out: Option<Date>,
}

impl StayDates {
    /// Creates an empty pair.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            check_in: None,
            check_out: None,
        }
    }

    /// The chosen check-in, if any.
    #[must_use]
    pub const fn check_in(&self) -> Option<Date> {
        self.check_in
    }

    /// The chosen check-out, if any.
    #[must_use]
    pub const fn check_out(&self) -> Option<Date> {
        self.check_out
    }

    /// Picks a check-in date.
    ///
    /// Dates before `today` are refused. If the existing check-out is on or
    /// before the new check-in it is cleared.
    ///
    /// # Arguments
    ///
    /// * `date` - The picked date
    /// * `today` - The first selectable day (hotel-local today)
    pub fn select_check_in(&mut self, date: Date, today: Date) -> DateSelectionOutcome {
        if date < today {
            return DateSelectionOutcome::Rejected(DateRejection::BeforeEarliest {
                earliest: today,
            });
        }

        self.check_in = Some(date);

        match self.check_out {
            Some(check_out) if check_out <= date => {
                self.check_out = None;
                DateSelectionOutcome::AcceptedClearedCheckOut
            }
            _ => DateSelectionOutcome::Accepted,
        }
    }

    /// Picks a check-out date.
    ///
    /// Refused when no check-in is set or when the date is not strictly
    /// after check-in.
    pub fn select_check_out(&mut self, date: Date) -> DateSelectionOutcome {
        let Some(check_in) = self.check_in else {
            return DateSelectionOutcome::Rejected(DateRejection::MissingCheckIn);
        };

        if date <= check_in {
            return DateSelectionOutcome::Rejected(DateRejection::NotAfterCheckIn { check_in });
        }

        self.check_out = Some(date);
        DateSelectionOutcome::Accepted
    }

    /// Number of nights between the bounds, absent until both are set.
    #[must_use]
    pub fn nights(&self) -> Option<u32> {
        let check_in: Date = self.check_in?;
        let check_out: Date = self.check_out?;
        let days: i64 = (check_out - check_in).whole_days();
        u32::try_from(days).ok().filter(|nights| *nights >= 1)
    }

    /// Whether both bounds are set.
    #[must_use]
    pub const fn can_continue(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }

    /// Returns the stay once both bounds are set.
    #[must_use]
    pub fn resolve(&self) -> Option<ResolvedStay> {
        Some(ResolvedStay {
            check_in: self.check_in?,
            check_out: self.check_out?,
            nights: self.nights()?,
        })
    }
}
