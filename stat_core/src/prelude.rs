//! Prelude module for convenient imports
//!
//! ```rust
//! use stat_core::prelude::*;
//! ```

// Core types
pub use crate::character::Character;
pub use crate::equipment::Slot;
pub use crate::stat_block::{DerivedStats, PrimaryStats};
pub use crate::StatError;

// Search
pub use crate::search::{ItemRow, SearchQuery};

// Effects
pub use crate::effects::BonusCategory;

// Config
pub use crate::config::{init_constants, init_constants_default};

// Persistence
pub use crate::persist::{CharacterStore, JsonCharacterStore};

// Re-exports from the catalog crates
pub use catalog_core::{Catalog, ReferenceCatalog};
pub use item_core::{CharacterClass, GameKey, MagicSchool, Race};
