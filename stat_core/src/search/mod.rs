//! Item search - catalog-wide queries for one slot, projected into rows
//!
//! A search never looks at the equipment ledger: it lists what the
//! character could wear, not what it wears.

use crate::character::Character;
use crate::effects::{parse_effect, BonusCategory};
use crate::equipment::Slot;
use crate::StatError;
use item_core::{Binding, DamageSchool, GameKey, Item, Material, Quality, Resistances, StatKind};
use serde::Serialize;
use std::cmp::Ordering;

/// Parameters of an item search
///
/// Defaults: epic quality, sorted by armor, descending, resistance and
/// school spell-power columns hidden.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub slot: String,
    /// Armor material key; empty for no filter. Ignored for slots without materials.
    pub material: String,
    pub quality: String,
    pub sort_keys: Vec<String>,
    pub ascending: bool,
    pub show_resistances: bool,
    pub show_school_spell_power: bool,
}

impl SearchQuery {
    pub fn new(slot: impl Into<String>) -> Self {
        SearchQuery {
            slot: slot.into(),
            material: String::new(),
            quality: Quality::Epic.key().to_string(),
            sort_keys: vec!["armor".to_string()],
            ascending: false,
            show_resistances: false,
            show_school_spell_power: false,
        }
    }

    pub fn material(mut self, material: impl Into<String>) -> Self {
        self.material = material.into();
        self
    }

    pub fn quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = quality.into();
        self
    }

    pub fn sort_by<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    pub fn show_resistances(mut self, show: bool) -> Self {
        self.show_resistances = show;
        self
    }

    pub fn show_school_spell_power(mut self, show: bool) -> Self {
        self.show_school_spell_power = show;
        self
    }
}

/// A column results can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Stat(StatKind),
    Armor,
    Bonus(BonusCategory),
}

impl SortKey {
    /// Every valid sort key name
    pub fn valid_keys() -> Vec<String> {
        StatKind::all()
            .iter()
            .map(|kind| kind.key().to_string())
            .chain(std::iter::once("armor".to_string()))
            .chain(BonusCategory::all().iter().map(|c| c.label().to_string()))
            .collect()
    }

    /// Parse a stat key, `armor` or a bonus label
    pub fn parse(key: &str) -> Result<SortKey, StatError> {
        if key == "armor" {
            return Ok(SortKey::Armor);
        }
        if let Ok(kind) = StatKind::parse_key(key) {
            return Ok(SortKey::Stat(kind));
        }
        BonusCategory::from_label(key)
            .map(SortKey::Bonus)
            .ok_or_else(|| StatError::InvalidSortKey {
                key: key.to_string(),
                valid: Self::valid_keys(),
            })
    }

    fn value(self, row: &ItemRow) -> f64 {
        match self {
            SortKey::Stat(kind) => row.stat(kind) as f64,
            SortKey::Armor => row.armor as f64,
            SortKey::Bonus(category) => row.bonus(category).unwrap_or(0) as f64,
        }
    }
}

/// Human-readable projection of a catalog item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRow {
    pub id: u32,
    pub name: String,
    pub binding: Option<Binding>,
    pub armor: i32,
    /// Present when the query shows resistances
    pub resistances: Option<Resistances>,
    pub damage_min: f64,
    pub damage_max: f64,
    pub damage_school: Option<DamageSchool>,
    /// Attack delay in seconds
    pub delay: f64,
    /// One entry per stat kind, zero when the item grants none
    pub stats: Vec<(StatKind, i32)>,
    /// One entry per visible bonus category, zero when absent
    pub bonuses: Vec<(BonusCategory, i32)>,
}

impl ItemRow {
    fn project(item: &Item) -> Self {
        let mut bonuses: Vec<(BonusCategory, i32)> =
            BonusCategory::all().iter().map(|c| (*c, 0)).collect();
        for spell in &item.spells {
            let Some(bonus) = spell
                .name
                .as_deref()
                .and_then(|name| parse_effect(name, spell.base_points))
            else {
                continue;
            };
            // Later effects of the same category overwrite earlier ones
            if let Some(entry) = bonuses.iter_mut().find(|(c, _)| *c == bonus.category) {
                entry.1 = bonus.magnitude;
            }
        }

        let damage = item.primary_damage();
        ItemRow {
            id: item.id,
            name: item.name.clone(),
            binding: item.binding(),
            armor: item.armor,
            resistances: Some(item.resistances),
            damage_min: damage.map_or(0.0, |d| d.min),
            damage_max: damage.map_or(0.0, |d| d.max),
            damage_school: damage.and_then(|d| d.school()),
            delay: item.delay_seconds(),
            stats: StatKind::all()
                .iter()
                .map(|kind| (*kind, item.stat_value(*kind)))
                .collect(),
            bonuses,
        }
    }

    pub fn stat(&self, kind: StatKind) -> i32 {
        self.stats
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, value)| *value)
    }

    /// Value of a bonus column, `None` when the column was dropped
    pub fn bonus(&self, category: BonusCategory) -> Option<i32> {
        self.bonuses
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, value)| *value)
    }
}

impl Character {
    /// Search the catalog for items this character can wear in a slot
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<ItemRow>, StatError> {
        let slot = Slot::parse_key(&query.slot)?;
        let quality = Quality::parse_key(&query.quality)?;
        let sort_keys = query
            .sort_keys
            .iter()
            .map(|key| SortKey::parse(key))
            .collect::<Result<Vec<_>, _>>()?;

        let material = if slot.has_material() && !query.material.is_empty() {
            Some(Material::parse_key(&query.material)?)
        } else {
            None
        };

        let candidates: Vec<&Item> = self
            .items
            .with_inventory_types(slot.inventory_types())
            .into_iter()
            .filter(|item| item.is_usable_by(self.class))
            .filter(|item| item.quality == quality.code())
            .filter(|item| material.map_or(true, |m| item.subclass == m.code()))
            .collect();

        tracing::debug!(%slot, %quality, matches = candidates.len(), "Item search");

        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let mut rows: Vec<ItemRow> = candidates.into_iter().map(ItemRow::project).collect();
        rows.sort_by(|a, b| {
            let ordering = compare_rows(&sort_keys, a, b);
            if query.ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });

        for row in &mut rows {
            if !query.show_resistances {
                row.resistances = None;
            }
            if !query.show_school_spell_power {
                row.bonuses.retain(|(category, _)| category.school().is_none());
            }
        }
        Ok(rows)
    }
}

fn compare_rows(keys: &[SortKey], a: &ItemRow, b: &ItemRow) -> Ordering {
    keys.iter()
        .map(|key| key.value(a).total_cmp(&key.value(b)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
