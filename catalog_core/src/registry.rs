use crate::base::{BaseHpMana, BasePrimaryStats};
use crate::config::{validate_item, CatalogFileConfig};
use crate::{CatalogError, ConfigError, ReferenceCatalog};
use item_core::{CharacterClass, Item, Race};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

/// Reference catalog loaded from TOML files
///
/// Items are kept ordered by id so bulk fetches are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: BTreeMap<u32, Item>,
    class_level_stats: HashMap<(CharacterClass, u32), BaseHpMana>,
    level_stats: HashMap<(CharacterClass, Race, u32), BasePrimaryStats>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every catalog file from a directory (recursively)
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut catalog = Self::new();
        catalog.load_dir(dir)?;
        tracing::info!(
            items = catalog.items.len(),
            class_rows = catalog.class_level_stats.len(),
            level_rows = catalog.level_stats.len(),
            "Loaded catalog from {}",
            dir.display()
        );
        Ok(catalog)
    }

    fn load_dir(&mut self, dir: &Path) -> Result<(), ConfigError> {
        if !dir.exists() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;

        // Sorted so that duplicate detection reports a stable file
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::Io {
                error: e,
                path: Some(dir.to_path_buf()),
            })?;
            paths.push(entry.path());
        }
        paths.sort();

        for path in paths {
            if path.is_dir() {
                self.load_dir(&path)?;
            } else if path.extension().is_some_and(|ext| ext == "toml") {
                self.load_file(&path)?;
            }
        }

        Ok(())
    }

    fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;

        let config: CatalogFileConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            error: e,
            path: path.to_path_buf(),
        })?;

        self.merge(config).map_err(|message| ConfigError::Validation {
            message,
            path: path.to_path_buf(),
        })?;

        tracing::debug!("Loaded catalog file {}", path.display());
        Ok(())
    }

    /// Merge one parsed file into the catalog
    ///
    /// Nothing is inserted when any item of the file is invalid.
    pub fn merge(&mut self, config: CatalogFileConfig) -> Result<(), String> {
        let mut seen = HashSet::new();
        for item in &config.items {
            validate_item(item)?;
            if self.items.contains_key(&item.id) || !seen.insert(item.id) {
                return Err(format!("duplicate item id {}", item.id));
            }
        }

        for item in config.items {
            self.items.insert(item.id, item);
        }
        for row in config.class_level_stats {
            self.insert_class_stats(
                row.class,
                row.level,
                BaseHpMana {
                    base_hp: row.base_hp,
                    base_mana: row.base_mana,
                },
            );
        }
        for row in config.level_stats {
            self.insert_level_stats(
                row.class,
                row.race,
                row.level,
                BasePrimaryStats {
                    stamina: row.stamina,
                    strength: row.strength,
                    intellect: row.intellect,
                    spirit: row.spirit,
                    agility: row.agility,
                },
            );
        }
        Ok(())
    }

    /// Insert or replace an item
    pub fn insert_item(&mut self, item: Item) -> Option<Item> {
        self.items.insert(item.id, item)
    }

    pub fn insert_class_stats(&mut self, class: CharacterClass, level: u32, stats: BaseHpMana) {
        self.class_level_stats.insert((class, level), stats);
    }

    pub fn insert_level_stats(
        &mut self,
        class: CharacterClass,
        race: Race,
        level: u32,
        stats: BasePrimaryStats,
    ) {
        self.level_stats.insert((class, race, level), stats);
    }

    /// Get an item by id
    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl ReferenceCatalog for Catalog {
    fn items(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }

    fn base_hp_mana(&self, class: CharacterClass, level: u32) -> Result<BaseHpMana, CatalogError> {
        self.class_level_stats
            .get(&(class, level))
            .copied()
            .ok_or(CatalogError::MissingClassStats { class, level })
    }

    fn base_primary_stats(
        &self,
        class: CharacterClass,
        race: Race,
        level: u32,
    ) -> Result<BasePrimaryStats, CatalogError> {
        self.level_stats
            .get(&(class, race, level))
            .copied()
            .ok_or(CatalogError::MissingLevelStats { class, race, level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_catalog_file(dir: &Path, name: &str, content: &str) {
        let path = dir.join(format!("{}.toml", name));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
    }

    const BASE_STATS: &str = r#"
[[class_level_stats]]
class = "mage"
level = 60
base_hp = 1360
base_mana = 1213

[[level_stats]]
class = "mage"
race = "gnome"
level = 60
stamina = 44
strength = 28
intellect = 128
spirit = 117
agility = 37
"#;

    const ITEMS: &str = r#"
[[items]]
id = 16914
name = "Netherwind Crown"
allowable_class = 8
inventory_type = 1
subclass = 1
quality = 4
bonding = 1
armor = 94
stats = [{ stat_type = 7, value = 16 }, { stat_type = 5, value = 26 }]

[[items]]
id = 19147
name = "Ring of Spell Power"
inventory_type = 11
quality = 4

[[items.spells]]
trigger = 1
name = "Increase Spell Dam 33"
base_points = 32
"#;

    #[test]
    fn test_load_directory() {
        let dir = TempDir::new().unwrap();
        create_catalog_file(dir.path(), "base", BASE_STATS);
        std::fs::create_dir(dir.path().join("items")).unwrap();
        create_catalog_file(&dir.path().join("items"), "tier2", ITEMS);

        let catalog = Catalog::load(dir.path()).unwrap();
        assert_eq!(catalog.item_count(), 2);
        assert_eq!(catalog.item(16914).unwrap().armor, 94);

        let hp = catalog.base_hp_mana(CharacterClass::Mage, 60).unwrap();
        assert!((hp.base_mana - 1213.0).abs() < f64::EPSILON);

        let stats = catalog
            .base_primary_stats(CharacterClass::Mage, Race::Gnome, 60)
            .unwrap();
        assert!((stats.intellect - 128.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_items_ordered_by_id() {
        let dir = TempDir::new().unwrap();
        create_catalog_file(dir.path(), "items", ITEMS);
        let catalog = Catalog::load(dir.path()).unwrap();
        let ids: Vec<u32> = catalog.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![16914, 19147]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let catalog = Catalog::load(&dir.path().join("absent")).unwrap();
        assert_eq!(catalog.item_count(), 0);
    }

    #[test]
    fn test_missing_base_rows() {
        let catalog = Catalog::new();
        assert_eq!(
            catalog.base_hp_mana(CharacterClass::Rogue, 60),
            Err(CatalogError::MissingClassStats {
                class: CharacterClass::Rogue,
                level: 60
            })
        );
        assert!(matches!(
            catalog.base_primary_stats(CharacterClass::Rogue, Race::Orc, 60),
            Err(CatalogError::MissingLevelStats { .. })
        ));
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let dir = TempDir::new().unwrap();
        create_catalog_file(dir.path(), "a", ITEMS);
        create_catalog_file(dir.path(), "b", ITEMS);
        let result = Catalog::load(dir.path());
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn test_too_many_effects_rejected() {
        let dir = TempDir::new().unwrap();
        create_catalog_file(
            dir.path(),
            "bad",
            r#"
[[items]]
id = 1
name = "Overloaded Trinket"
inventory_type = 12
spells = [
    { name = "Attack Power 10" },
    { name = "Attack Power 10" },
    { name = "Attack Power 10" },
    { name = "Attack Power 10" },
]
"#,
        );
        let result = Catalog::load(dir.path());
        match result {
            Err(ConfigError::Validation { message, .. }) => assert!(message.contains("effects")),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_reports_path() {
        let dir = TempDir::new().unwrap();
        create_catalog_file(dir.path(), "broken", "[[items]]\nid = \"not a number\"\n");
        let result = Catalog::load(dir.path());
        match result {
            Err(ConfigError::Parse { path, .. }) => assert!(path.ends_with("broken.toml")),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }
}
