//! Character persistence - named saves of a character's state
//!
//! A save holds the character snapshot only; the catalog is re-attached
//! on load, and derived stats are recomputed.

use crate::character::{Character, CharacterSnapshot};
use crate::StatError;
use catalog_core::ReferenceCatalog;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Current save file version
pub const SAVE_VERSION: u32 = 1;

/// Errors from persistence operations
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch { expected: u32, found: u32 },

    #[error("Invalid save name '{0}'")]
    InvalidName(String),

    #[error("Cannot restore character: {0}")]
    Restore(#[from] StatError),
}

/// On-disk save envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedCharacter {
    pub version: u32,
    pub character: CharacterSnapshot,
}

/// Named character storage
pub trait CharacterStore {
    fn save(&self, character: &Character, name: &str) -> Result<(), PersistError>;

    /// Load a character and re-attach it to `catalog`
    fn load(&self, name: &str, catalog: &dyn ReferenceCatalog) -> Result<Character, PersistError>;
}

/// Stores each character as `<name>.json` in a directory
pub struct JsonCharacterStore {
    dir: PathBuf,
}

impl JsonCharacterStore {
    /// Create a store, creating its directory if needed
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, PersistError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(JsonCharacterStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn save_path(&self, name: &str) -> Result<PathBuf, PersistError> {
        let valid = !name.is_empty()
            && !name.starts_with('.')
            && !name.contains(|c: char| c == '/' || c == '\\');
        if !valid {
            return Err(PersistError::InvalidName(name.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", name)))
    }

    /// Whether a save exists under `name`
    pub fn exists(&self, name: &str) -> bool {
        self.save_path(name).map(|path| path.exists()).unwrap_or(false)
    }
}

impl CharacterStore for JsonCharacterStore {
    fn save(&self, character: &Character, name: &str) -> Result<(), PersistError> {
        let path = self.save_path(name)?;
        let temp_path = path.with_extension("json.tmp");

        let saved = SavedCharacter {
            version: SAVE_VERSION,
            character: character.snapshot(),
        };
        let content = serde_json::to_string_pretty(&saved)?;

        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved character '{}' to {}", name, path.display());
        Ok(())
    }

    fn load(&self, name: &str, catalog: &dyn ReferenceCatalog) -> Result<Character, PersistError> {
        let path = self.save_path(name)?;
        let content = fs::read_to_string(&path)?;
        let saved: SavedCharacter = serde_json::from_str(&content)?;

        if saved.version != SAVE_VERSION {
            return Err(PersistError::VersionMismatch {
                expected: SAVE_VERSION,
                found: saved.version,
            });
        }

        let character = Character::restore(saved.character, catalog)?;
        tracing::debug!("Loaded character '{}' from {}", name, path.display());
        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::Slot;
    use crate::testing::{fixture_catalog, items};
    use catalog_core::Catalog;
    use item_core::{CharacterClass, Race};
    use tempfile::TempDir;

    fn geared_priest() -> Character {
        let mut character =
            Character::new(CharacterClass::Priest, Race::Dwarf, &fixture_catalog()).unwrap();
        character.equip(items::RING_OF_POWER).unwrap();
        character.equip(items::CLOTH_ROBE).unwrap();
        character
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonCharacterStore::new(dir.path()).unwrap();
        let character = geared_priest();

        store.save(&character, "healer").unwrap();
        assert!(store.exists("healer"));
        assert!(!dir.path().join("healer.json.tmp").exists());

        let loaded = store.load("healer", &fixture_catalog()).unwrap();
        assert_eq!(loaded.snapshot(), character.snapshot());
        assert_eq!(loaded.stats(), character.stats());
        assert_eq!(loaded.equipment().get(Slot::Chest), Some(items::CLOTH_ROBE));

        // The re-attached catalog is usable
        assert_eq!(loaded.item_index().len(), character.item_index().len());
    }

    #[test]
    fn test_loaded_character_keeps_working() {
        let dir = TempDir::new().unwrap();
        let store = JsonCharacterStore::new(dir.path()).unwrap();
        store.save(&geared_priest(), "healer").unwrap();

        let mut loaded = store.load("healer", &fixture_catalog()).unwrap();
        assert_eq!(loaded.unequip(Slot::Finger1).unwrap(), items::RING_OF_POWER);
    }

    #[test]
    fn test_version_mismatch() {
        let dir = TempDir::new().unwrap();
        let store = JsonCharacterStore::new(dir.path()).unwrap();
        let saved = SavedCharacter {
            version: SAVE_VERSION + 1,
            character: geared_priest().snapshot(),
        };
        fs::write(
            dir.path().join("future.json"),
            serde_json::to_string(&saved).unwrap(),
        )
        .unwrap();

        let err = store.load("future", &fixture_catalog()).unwrap_err();
        assert!(matches!(
            err,
            PersistError::VersionMismatch { expected: 1, found: 2 }
        ));
    }

    #[test]
    fn test_missing_item_on_restore() {
        let dir = TempDir::new().unwrap();
        let store = JsonCharacterStore::new(dir.path()).unwrap();
        store.save(&geared_priest(), "healer").unwrap();

        // Only the robe survives; the equipped ring is gone
        let mut sparse = Catalog::new();
        sparse.insert_item(
            fixture_catalog()
                .item(items::CLOTH_ROBE)
                .cloned()
                .unwrap(),
        );

        let err = store.load("healer", &sparse).unwrap_err();
        assert!(matches!(
            err,
            PersistError::Restore(StatError::ItemNotFound(id)) if id == items::RING_OF_POWER
        ));
    }

    #[test]
    fn test_invalid_names() {
        let dir = TempDir::new().unwrap();
        let store = JsonCharacterStore::new(dir.path()).unwrap();
        let character = geared_priest();
        for name in ["", "../escape", ".hidden", "a/b"] {
            assert!(matches!(
                store.save(&character, name),
                Err(PersistError::InvalidName(_))
            ));
        }
    }

    #[test]
    fn test_missing_save() {
        let dir = TempDir::new().unwrap();
        let store = JsonCharacterStore::new(dir.path()).unwrap();
        assert!(matches!(
            store.load("nobody", &fixture_catalog()),
            Err(PersistError::Io(_))
        ));
    }
}
