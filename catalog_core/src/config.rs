use item_core::{CharacterClass, Item, Race};
use serde::Deserialize;

/// TOML layout of one catalog file
///
/// A file may carry any subset of the three tables.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFileConfig {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub class_level_stats: Vec<ClassLevelStatsConfig>,
    #[serde(default)]
    pub level_stats: Vec<LevelStatsConfig>,
}

/// One row of per-class, per-level hit points and mana
#[derive(Debug, Clone, Deserialize)]
pub struct ClassLevelStatsConfig {
    pub class: CharacterClass,
    pub level: u32,
    pub base_hp: f64,
    pub base_mana: f64,
}

/// One row of per-class, per-race, per-level primary stats
#[derive(Debug, Clone, Deserialize)]
pub struct LevelStatsConfig {
    pub class: CharacterClass,
    pub race: Race,
    pub level: u32,
    pub stamina: f64,
    pub strength: f64,
    pub intellect: f64,
    pub spirit: f64,
    pub agility: f64,
}

pub(crate) const MAX_ITEM_STATS: usize = 5;
pub(crate) const MAX_ITEM_DAMAGES: usize = 3;
pub(crate) const MAX_ITEM_SPELLS: usize = 3;

/// Check the per-item column limits of the data source
pub(crate) fn validate_item(item: &Item) -> Result<(), String> {
    if item.stats.len() > MAX_ITEM_STATS {
        return Err(format!(
            "item {} has {} stat pairs (max {})",
            item.id,
            item.stats.len(),
            MAX_ITEM_STATS
        ));
    }
    if item.damages.len() > MAX_ITEM_DAMAGES {
        return Err(format!(
            "item {} has {} damage entries (max {})",
            item.id,
            item.damages.len(),
            MAX_ITEM_DAMAGES
        ));
    }
    if item.spells.len() > MAX_ITEM_SPELLS {
        return Err(format!(
            "item {} has {} effects (max {})",
            item.id,
            item.spells.len(),
            MAX_ITEM_SPELLS
        ));
    }
    Ok(())
}
