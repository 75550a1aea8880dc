// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loading the inventory snapshot for a search.

use pesan_domain::{DomainError, InventorySnapshot, validate_inventory_snapshot};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Inventory loading errors.
#[derive(Debug, Error)]
pub enum InventoryLoadError {
    /// The file could not be read.
    #[error("Failed to read inventory file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid inventory document.
    #[error("Failed to parse inventory file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but breaks an inventory rule.
    #[error("Invalid inventory: {0}")]
    Validation(#[from] DomainError),
}

/// Parses and validates an inventory document.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or the snapshot is invalid.
pub fn parse_inventory(json: &str) -> Result<InventorySnapshot, InventoryLoadError> {
    parse_inventory_from(Path::new("<inline>"), json)
}

/// Reads, parses and validates the inventory file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is malformed, or holds an
/// invalid snapshot.
pub fn load_inventory(path: &Path) -> Result<InventorySnapshot, InventoryLoadError> {
    let json: String = std::fs::read_to_string(path).map_err(|source| InventoryLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let inventory: InventorySnapshot = parse_inventory_from(path, &json)?;

    tracing::info!(
        path = %path.display(),
        hotel = %inventory.hotel_name,
        rooms = inventory.rooms.len(),
        bookable = inventory.bookable_rooms().count(),
        "Loaded inventory"
    );

    Ok(inventory)
}

fn parse_inventory_from(path: &Path, json: &str) -> Result<InventorySnapshot, InventoryLoadError> {
    let inventory: InventorySnapshot =
        serde_json::from_str(json).map_err(|source| InventoryLoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    validate_inventory_snapshot(&inventory)?;
    Ok(inventory)
}
