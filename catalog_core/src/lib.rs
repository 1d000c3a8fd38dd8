//! catalog_core - Read-only reference data for the stat engine
//!
//! The engine consumes reference data through [`ReferenceCatalog`]. The
//! crate ships one implementation, [`Catalog`], loaded from TOML files,
//! and [`ItemIndex`], the immutable item snapshot a character queries
//! for its whole lifetime.

mod base;
mod config;
mod index;
mod registry;

pub use base::{BaseHpMana, BasePrimaryStats};
pub use config::{CatalogFileConfig, ClassLevelStatsConfig, LevelStatsConfig};
pub use index::ItemIndex;
pub use registry::Catalog;

use item_core::{CharacterClass, Item, Race};
use std::path::PathBuf;
use thiserror::Error;

/// Query interface of the reference data source
///
/// Any backing store (SQL, flat files, memory) can implement it; the
/// engine performs one bulk `items()` fetch per character.
pub trait ReferenceCatalog {
    /// Every item in the catalog
    fn items(&self) -> Vec<Item>;

    /// Base hit points and mana of `class` at `level`
    fn base_hp_mana(&self, class: CharacterClass, level: u32) -> Result<BaseHpMana, CatalogError>;

    /// Base primary stats of a (class, race) pair at `level`
    fn base_primary_stats(
        &self,
        class: CharacterClass,
        race: Race,
        level: u32,
    ) -> Result<BasePrimaryStats, CatalogError>;
}

/// Error loading catalog files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("Parse error in '{path}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    #[error("Validation error in '{path}': {message}")]
    Validation { message: String, path: PathBuf },
}

/// Error querying the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("No base hp/mana row for class {class} at level {level}")]
    MissingClassStats { class: CharacterClass, level: u32 },
    #[error("No base stat row for {race} {class} at level {level}")]
    MissingLevelStats {
        class: CharacterClass,
        race: Race,
        level: u32,
    },
}
