// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The guest's current selection: a quantity per (room, rate plan) pair and a
//! separate primary pointer used for highlighting.
//!
//! Invariants maintained by every mutator:
//! - The quantities selected against a room never exceed its available
//!   quantity.
//! - No entry is ever stored with a quantity of zero.
//! - The primary pointer carries no capacity weight. It may name a pair with
//!   no quantity at all.

use pesan_domain::{DomainError, InventorySnapshot, RoomId, SelectionKey};
use serde::Serialize;
use std::collections::BTreeMap;

/// What a quantity change actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuantityChange {
    /// The full change was applied.
    Applied {
        /// The entry's quantity afterwards. Zero means it was removed.
        quantity: u32,
    },
    /// An increase was cut short by the room's remaining capacity.
    Capped {
        /// The entry's quantity afterwards.
        quantity: u32,
    },
    /// An increase was refused because the room has no capacity left.
    AtCapacity,
    /// Nothing to do (zero delta, or decrement of an absent entry).
    Unchanged,
}

impl QuantityChange {
    /// Whether the entry's quantity changed.
    #[must_use]
    pub const fn changed(&self) -> bool {
        matches!(self, Self::Applied { .. } | Self::Capped { .. })
    }
}

/// The rooms and rate plans chosen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: BTreeMap<SelectionKey, u32>,
    primary: Option<SelectionKey>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            primary: None,
        }
    }

    /// The highlighted pair, if any.
    #[must_use]
    pub const fn primary(&self) -> Option<&SelectionKey> {
        self.primary.as_ref()
    }

    /// Entries with their quantities, ordered by room then rate plan code.
    pub fn entries(&self) -> impl Iterator<Item = (&SelectionKey, u32)> {
        self.entries.iter().map(|(key, quantity)| (key, *quantity))
    }

    /// Number of distinct (room, rate plan) lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no quantity is selected anywhere.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Quantity chosen for one pair. Absent pairs have zero.
    #[must_use]
    pub fn quantity(&self, key: &SelectionKey) -> u32 {
        self.entries.get(key).copied().unwrap_or(0)
    }

    /// Sum of quantities across every rate plan of a room.
    #[must_use]
    pub fn total_selected_for_room(&self, room_id: &RoomId) -> u32 {
        self.entries
            .iter()
            .filter(|(key, _)| &key.room_id == room_id)
            .fold(0_u32, |total, (_, quantity)| total.saturating_add(*quantity))
    }

    /// Available quantity of a room minus everything selected against it.
    ///
    /// Computed from the live entries on every call. Unknown rooms have no
    /// availability, so any selection against them shows as negative.
    #[must_use]
    pub fn remaining_for_room(&self, inventory: &InventorySnapshot, room_id: &RoomId) -> i64 {
        i64::from(inventory.available_quantity(room_id))
            - i64::from(self.total_selected_for_room(room_id))
    }

    /// Points the primary selection at a pair. Quantities are untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the room or rate plan is not in the inventory.
    pub fn select_rate_plan(
        &mut self,
        inventory: &InventorySnapshot,
        key: SelectionKey,
    ) -> Result<(), DomainError> {
        inventory.require_rate_plan(&key)?;
        self.primary = Some(key);
        Ok(())
    }

    /// Adds `delta` to a pair's quantity, clamped to `[0, capacity]`.
    ///
    /// Capacity is the room's available quantity minus what other rate plans
    /// of the same room already hold, so decrements are always allowed and
    /// the room total can never pass its inventory. An entry that reaches
    /// zero is removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the room or rate plan is not in the inventory. The
    /// selection is left untouched.
    pub fn change_quantity(
        &mut self,
        inventory: &InventorySnapshot,
        key: &SelectionKey,
        delta: i64,
    ) -> Result<QuantityChange, DomainError> {
        inventory.require_rate_plan(key)?;

        let current: u32 = self.quantity(key);
        let held_by_others: u32 = self
            .total_selected_for_room(&key.room_id)
            .saturating_sub(current);
        let capacity: i64 = (i64::from(inventory.available_quantity(&key.room_id))
            - i64::from(held_by_others))
        .max(0);

        let requested: i64 = i64::from(current).saturating_add(delta);
        let clamped: i64 = requested.clamp(0, capacity);
        let new_quantity: u32 = u32::try_from(clamped).unwrap_or(current);

        if new_quantity == current {
            return Ok(if delta > 0 {
                QuantityChange::AtCapacity
            } else {
                QuantityChange::Unchanged
            });
        }

        if new_quantity == 0 {
            self.entries.remove(key);
        } else {
            self.entries.insert(key.clone(), new_quantity);
        }

        if delta > 0 && clamped < requested {
            Ok(QuantityChange::Capped {
                quantity: new_quantity,
            })
        } else {
            Ok(QuantityChange::Applied {
                quantity: new_quantity,
            })
        }
    }

    /// Removes every entry and the primary pointer.
    pub fn clear_all(&mut self) {
        self.entries.clear();
        self.primary = None;
    }
}
