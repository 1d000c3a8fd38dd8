//! stat_core - Character stat derivation and equipment simulation
//!
//! This library provides:
//! - Character: base stats from the catalog, equip/unequip, derived stats
//! - Effect parser: typed bonuses from item effect descriptions
//! - Item search: catalog-wide queries for one slot
//! - Persistence: named JSON saves of a character
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use stat_core::prelude::*;
//! use std::path::Path;
//!
//! let catalog = Catalog::load(Path::new("data/catalog")).unwrap();
//! let mut mage = Character::from_keys("mage", "gnome", &catalog).unwrap();
//!
//! let slot = mage.equip(19147).unwrap();
//! println!("Equipped in {}: {:.1} intellect", slot, mage.primary().intellect);
//!
//! let rings = mage
//!     .search(&SearchQuery::new("finger1").sort_by(["Increase Spell Dam"]))
//!     .unwrap();
//! ```

pub mod character;
pub mod config;
pub mod defense;
pub mod effects;
pub mod equipment;
pub mod persist;
pub mod prelude;
pub mod search;
pub mod stat_block;

#[cfg(test)]
pub(crate) mod testing;

// Core API - what most users need
pub use character::{Character, CharacterSnapshot};
pub use equipment::{Equipment, Slot};
pub use search::{ItemRow, SearchQuery, SortKey};
pub use stat_block::{Accumulators, DerivedStats, ItemStatTotals, PrimaryStats};

// Effect parsing
pub use effects::{parse_effect, BonusCategory, EffectBonus};

// Configuration
pub use config::{constants, init_constants, init_constants_default, GameConstants};

// Persistence
pub use persist::{CharacterStore, JsonCharacterStore, PersistError};

// Re-export commonly needed catalog types
pub use catalog_core::{CatalogError, ReferenceCatalog};
pub use item_core::{CharacterClass, Item, KeyError, MagicSchool, Race};

use thiserror::Error;

/// Errors reported by character operations
///
/// Every variant is a caller-input error; nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatError {
    #[error(transparent)]
    InvalidKey(#[from] KeyError),

    #[error("Item {0} not found in catalog")]
    ItemNotFound(u32),

    #[error("Item {item_id} cannot be used by class {class}")]
    IneligibleItem { item_id: u32, class: CharacterClass },

    #[error("Item {item_id} has inventory type {inventory_type}, which no slot accepts")]
    NotEquippable { item_id: u32, inventory_type: u8 },

    #[error("Slot {0} is empty")]
    EmptySlot(Slot),

    #[error("Invalid sort key '{key}', valid keys are: {}", .valid.join(", "))]
    InvalidSortKey { key: String, valid: Vec<String> },

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
