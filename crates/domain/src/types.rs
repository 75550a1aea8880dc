// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identifies a bookable room type within an inventory snapshot.
///
/// Identifiers are trimmed on construction and must not be empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomId(String);

impl RoomId {
    /// Creates a new `RoomId`.
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty after trimming.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidIdentifier {
                kind: "room_id",
                value: value.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<RoomId> for String {
    fn from(id: RoomId) -> Self {
        id.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifies a rate plan. Codes are unique within their room only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RatePlanCode(String);

impl RatePlanCode {
    /// Creates a new `RatePlanCode`.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is empty after trimming.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed: &str = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidIdentifier {
                kind: "rate_plan_code",
                value: value.to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the code value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RatePlanCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<RatePlanCode> for String {
    fn from(code: RatePlanCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for RatePlanCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Composite key addressing one line of a selection: a rate plan of a room.
///
/// Ordering is by room first, then by rate plan code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SelectionKey {
    /// The room this line books.
    pub room_id: RoomId,
    /// The rate plan this line books the room under.
    pub rate_plan_code: RatePlanCode,
}

impl SelectionKey {
    /// Creates a new `SelectionKey`.
    #[must_use]
    pub const fn new(room_id: RoomId, rate_plan_code: RatePlanCode) -> Self {
        Self {
            room_id,
            rate_plan_code,
        }
    }
}

impl std::fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.room_id, self.rate_plan_code)
    }
}

/// An amount of Indonesian rupiah. The currency has no minor unit.
///
/// Arithmetic saturates at `u64::MAX` rather than overflowing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// A zero amount.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Price` from whole rupiah.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns the amount in whole rupiah.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Whether the amount is greater than zero.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Adds two amounts, saturating on overflow.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Multiplies the amount by a count, saturating on overflow.
    #[must_use]
    pub const fn saturating_mul(self, factor: u64) -> Self {
        Self(self.0.saturating_mul(factor))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A priced package offered against a room.
///
/// Totals multiply the price by the number of nights and rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatePlan {
    /// Unique within its room.
    pub code: RatePlanCode,
    /// Price per room per night.
    pub price: Price,
    /// Whether breakfast is part of the package.
    #[serde(default, alias = "breakfast")]
    pub breakfast_included: bool,
    /// Display name, if the supplier provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form description of the package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RatePlan {
    /// Creates a rate plan without a name or description.
    #[must_use]
    pub const fn new(code: RatePlanCode, price: Price, breakfast_included: bool) -> Self {
        Self {
            code,
            price,
            breakfast_included,
            name: None,
            description: None,
        }
    }
}

/// A bookable room type with a fixed available quantity for the searched
/// stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOffer {
    /// The room identifier.
    #[serde(alias = "id")]
    pub room_id: RoomId,
    /// Display name of the room type.
    #[serde(alias = "roomName")]
    pub name: String,
    /// How many rooms of this type can be booked in total.
    #[serde(alias = "qty")]
    pub available_quantity: u32,
    /// Maximum number of guests per room.
    #[serde(default, alias = "maxGuest", skip_serializing_if = "Option::is_none")]
    pub max_guests: Option<u32>,
    /// Room description as supplied.
    #[serde(
        default,
        alias = "roomDescription",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    /// Facility labels, in supplier order.
    #[serde(default, alias = "roomFacilities")]
    pub facilities: Vec<String>,
    /// Rate plans, in display order.
    #[serde(default)]
    pub rate_plans: Vec<RatePlan>,
}

impl RoomOffer {
    /// Creates a room offer with no optional details.
    #[must_use]
    pub const fn new(
        room_id: RoomId,
        name: String,
        available_quantity: u32,
        rate_plans: Vec<RatePlan>,
    ) -> Self {
        Self {
            room_id,
            name,
            available_quantity,
            max_guests: None,
            description: None,
            facilities: Vec::new(),
            rate_plans,
        }
    }

    /// Looks up a rate plan by code.
    #[must_use]
    pub fn rate_plan(&self, code: &RatePlanCode) -> Option<&RatePlan> {
        self.rate_plans.iter().find(|plan| &plan.code == code)
    }

    /// Position of a rate plan within this room, if offered.
    #[must_use]
    pub fn rate_plan_position(&self, code: &RatePlanCode) -> Option<usize> {
        self.rate_plans.iter().position(|plan| &plan.code == code)
    }

    /// A room without rate plans cannot be booked and is hidden from browsing.
    #[must_use]
    pub fn is_bookable(&self) -> bool {
        !self.rate_plans.is_empty()
    }

    /// The name shown for a rate plan.
    ///
    /// Falls back to `"<room name> Plan <n>"` (1-based) when the plan has no
    /// name of its own.
    #[must_use]
    pub fn rate_plan_display_name(&self, code: &RatePlanCode) -> Option<String> {
        let position: usize = self.rate_plan_position(code)?;
        let plan: &RatePlan = &self.rate_plans[position];
        Some(
            plan.name
                .clone()
                .unwrap_or_else(|| format!("{} Plan {}", self.name, position + 1)),
        )
    }
}

/// The rooms and rate plans loaded for the current search.
///
/// The selection engine only ever reads a snapshot; it never mutates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    /// Name of the hotel the rooms belong to.
    #[serde(default, alias = "name")]
    pub hotel_name: String,
    /// Room offers, in display order.
    pub rooms: Vec<RoomOffer>,
}

impl InventorySnapshot {
    /// Creates a new `InventorySnapshot`.
    #[must_use]
    pub const fn new(hotel_name: String, rooms: Vec<RoomOffer>) -> Self {
        Self { hotel_name, rooms }
    }

    /// Looks up a room by identifier.
    #[must_use]
    pub fn room(&self, room_id: &RoomId) -> Option<&RoomOffer> {
        self.rooms.iter().find(|room| &room.room_id == room_id)
    }

    /// Looks up the room and rate plan a selection key refers to.
    #[must_use]
    pub fn resolve(&self, key: &SelectionKey) -> Option<(&RoomOffer, &RatePlan)> {
        let room: &RoomOffer = self.room(&key.room_id)?;
        let plan: &RatePlan = room.rate_plan(&key.rate_plan_code)?;
        Some((room, plan))
    }

    /// Looks up a room, failing if it is not part of this snapshot.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RoomNotFound` if the room is unknown.
    pub fn require_room(&self, room_id: &RoomId) -> Result<&RoomOffer, DomainError> {
        self.room(room_id).ok_or_else(|| DomainError::RoomNotFound {
            room_id: room_id.value().to_string(),
        })
    }

    /// Looks up the room and rate plan for a key, failing if either is unknown.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RoomNotFound` or `DomainError::RatePlanNotFound`.
    pub fn require_rate_plan(
        &self,
        key: &SelectionKey,
    ) -> Result<(&RoomOffer, &RatePlan), DomainError> {
        let room: &RoomOffer = self.require_room(&key.room_id)?;
        let plan: &RatePlan =
            room.rate_plan(&key.rate_plan_code)
                .ok_or_else(|| DomainError::RatePlanNotFound {
                    room_id: key.room_id.value().to_string(),
                    rate_plan_code: key.rate_plan_code.value().to_string(),
                })?;
        Ok((room, plan))
    }

    /// Available quantity of a room. Unknown rooms have none.
    #[must_use]
    pub fn available_quantity(&self, room_id: &RoomId) -> u32 {
        self.room(room_id).map_or(0, |room| room.available_quantity)
    }

    /// Rooms that have at least one rate plan, in display order.
    pub fn bookable_rooms(&self) -> impl Iterator<Item = &RoomOffer> {
        self.rooms.iter().filter(|room| room.is_bookable())
    }

    /// Display position of a key as `(room index, rate plan index)`.
    #[must_use]
    pub fn position_of(&self, key: &SelectionKey) -> Option<(usize, usize)> {
        let room_index: usize = self
            .rooms
            .iter()
            .position(|room| room.room_id == key.room_id)?;
        let plan_index: usize = self.rooms[room_index].rate_plan_position(&key.rate_plan_code)?;
        Some((room_index, plan_index))
    }
}
