//! item_core - Catalog record types shared by the catalog and the stat engine
//!
//! Every closed enumeration of the game data (class, race, quality, ...)
//! carries a stable string key and, where the data source stores one, its
//! integer code. Parsing an unknown key fails with [`KeyError`], which
//! lists every valid key.

pub mod item;
pub mod types;

pub use item::{Item, ItemSpell, ItemStat, Resistances, WeaponDamage, ANY_CLASS};
pub use types::{
    Binding, CharacterClass, DamageSchool, GameKey, MagicSchool, Material, Quality, Race,
    StatKind,
};

use thiserror::Error;

/// Error parsing a key of one of the game-data enumerations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Invalid {kind} '{key}', valid keys are: {}", .valid.join(", "))]
    InvalidKey {
        kind: &'static str,
        key: String,
        valid: Vec<String>,
    },
}

impl KeyError {
    /// Build an `InvalidKey` error enumerating `valid`
    pub fn invalid<'a>(
        kind: &'static str,
        key: &str,
        valid: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        KeyError::InvalidKey {
            kind,
            key: key.to_string(),
            valid: valid.into_iter().map(str::to_string).collect(),
        }
    }

    /// The valid keys carried by this error
    pub fn valid_keys(&self) -> &[String] {
        match self {
            KeyError::InvalidKey { valid, .. } => valid,
        }
    }
}
