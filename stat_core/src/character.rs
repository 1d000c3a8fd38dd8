//! Character - base stats, accumulators, equipment and derived stats

use crate::config::constants;
use crate::defense;
use crate::equipment::{Direction, Equipment, Slot};
use crate::stat_block::{
    derive_stats, effective_primary, Accumulators, DerivedStats, ItemStatTotals, PrimaryStats,
};
use crate::StatError;
use catalog_core::{BaseHpMana, ItemIndex, ReferenceCatalog};
use item_core::{CharacterClass, GameKey, Item, MagicSchool, Race, Resistances};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A level-capped character built from catalog base stats
///
/// State changes only through `equip` / `unequip`; derived stats are
/// recomputed after each one.
#[derive(Debug, Clone)]
pub struct Character {
    pub(crate) class: CharacterClass,
    pub(crate) race: Race,
    pub(crate) level: u32,
    pub(crate) base: BaseHpMana,
    pub(crate) base_primary: PrimaryStats,
    pub(crate) item_stats: ItemStatTotals,
    pub(crate) primary: PrimaryStats,
    pub(crate) resistances: Resistances,
    pub(crate) accumulators: Accumulators,
    pub(crate) equipment: Equipment,
    pub(crate) derived: DerivedStats,
    pub(crate) items: Arc<ItemIndex>,
}

/// Persistable state of a character
///
/// Excludes effective and derived stats and the item index; all are
/// rebuilt on restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    class: CharacterClass,
    race: Race,
    level: u32,
    base: BaseHpMana,
    base_primary: PrimaryStats,
    item_stats: ItemStatTotals,
    resistances: Resistances,
    accumulators: Accumulators,
    equipment: Equipment,
}

/// Resistances every member of a race starts with
pub fn racial_resistances(race: Race) -> Resistances {
    let mut resistances = Resistances::default();
    match race {
        Race::Undead => resistances.shadow = 10,
        Race::Tauren | Race::Elf => resistances.nature = 10,
        Race::Dwarf => resistances.frost = 10,
        Race::Gnome => resistances.arcane = 10,
        Race::Human | Race::Orc | Race::Troll => {}
    }
    resistances
}

impl Character {
    /// Build a character with empty equipment from catalog base stats
    pub fn new(
        class: CharacterClass,
        race: Race,
        catalog: &dyn ReferenceCatalog,
    ) -> Result<Self, StatError> {
        let level = constants().character.level;
        let base = catalog.base_hp_mana(class, level)?;
        let base_primary = PrimaryStats::from(catalog.base_primary_stats(class, race, level)?);
        let items = Arc::new(ItemIndex::from_items(catalog.items()));

        tracing::debug!(%class, %race, level, items = items.len(), "Created character");

        let mut character = Character {
            class,
            race,
            level,
            base,
            base_primary,
            item_stats: ItemStatTotals::default(),
            primary: base_primary,
            resistances: racial_resistances(race),
            accumulators: Accumulators::for_class(class),
            equipment: Equipment::new(),
            derived: DerivedStats::default(),
            items,
        };
        character.refresh();
        Ok(character)
    }

    /// Build a character from class and race keys
    pub fn from_keys(
        class: &str,
        race: &str,
        catalog: &dyn ReferenceCatalog,
    ) -> Result<Self, StatError> {
        Self::new(class.parse()?, race.parse()?, catalog)
    }

    /// Recompute effective primary stats and every derived stat
    pub(crate) fn refresh(&mut self) {
        self.primary = effective_primary(self.race, &self.base_primary, &self.item_stats);
        self.derived = derive_stats(
            self.class,
            self.race,
            &self.base,
            &self.primary,
            &self.accumulators,
        );
    }

    // === Equip protocol ===

    /// Equip an item by id, returning the slot it went to
    ///
    /// Every check runs before the first mutation: a failed call leaves
    /// the character untouched.
    pub fn equip(&mut self, item_id: u32) -> Result<Slot, StatError> {
        let items = Arc::clone(&self.items);
        let item = items.get(item_id).ok_or(StatError::ItemNotFound(item_id))?;

        let slot = self
            .equipment
            .target_slot(item.inventory_type)
            .ok_or(StatError::NotEquippable {
                item_id,
                inventory_type: item.inventory_type,
            })?;

        if !item.is_usable_by(self.class) {
            return Err(StatError::IneligibleItem {
                item_id,
                class: self.class,
            });
        }

        let displaced = match self.equipment.get(slot) {
            Some(old_id) => Some(items.get(old_id).ok_or(StatError::ItemNotFound(old_id))?),
            None => None,
        };

        if let Some(old) = displaced {
            tracing::warn!(%slot, old_item = old.id, new_item = item_id, "Replacing equipped item");
            self.apply_item(old, Direction::Subtract);
            self.equipment.clear(slot);
        }

        self.apply_item(item, Direction::Add);
        self.equipment.set(slot, item_id);

        tracing::debug!(%slot, item_id, name = %item.name, "Equipped item");
        Ok(slot)
    }

    /// Remove the item in `slot`, returning its id
    pub fn unequip(&mut self, slot: Slot) -> Result<u32, StatError> {
        let item_id = self.equipment.get(slot).ok_or(StatError::EmptySlot(slot))?;
        let items = Arc::clone(&self.items);
        let item = items.get(item_id).ok_or(StatError::ItemNotFound(item_id))?;

        self.apply_item(item, Direction::Subtract);
        self.equipment.clear(slot);

        tracing::debug!(%slot, item_id, "Unequipped item");
        Ok(item_id)
    }

    /// Remove the item in the slot named `slot`
    pub fn unequip_key(&mut self, slot: &str) -> Result<u32, StatError> {
        self.unequip(slot.parse()?)
    }

    // === Accessors ===

    pub fn class(&self) -> CharacterClass {
        self.class
    }

    pub fn race(&self) -> Race {
        self.race
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn base_hp_mana(&self) -> &BaseHpMana {
        &self.base
    }

    /// Effective primary stats, item points included
    pub fn primary(&self) -> &PrimaryStats {
        &self.primary
    }

    /// Primary stats from the catalog, before items
    pub fn base_primary(&self) -> &PrimaryStats {
        &self.base_primary
    }

    /// Raw primary stat points granted by equipped items
    pub fn item_stats(&self) -> &ItemStatTotals {
        &self.item_stats
    }

    pub fn accumulators(&self) -> &Accumulators {
        &self.accumulators
    }

    pub fn resistances(&self) -> &Resistances {
        &self.resistances
    }

    /// Current derived stats
    pub fn stats(&self) -> &DerivedStats {
        &self.derived
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    /// The item snapshot this character equips from
    pub fn item_index(&self) -> &ItemIndex {
        &self.items
    }

    /// The item in a slot
    pub fn equipped(&self, slot: Slot) -> Option<&Item> {
        self.equipment.get(slot).and_then(|id| self.items.get(id))
    }

    pub fn empty_slots(&self) -> Vec<Slot> {
        self.equipment.empty_slots()
    }

    // === Defense ===

    /// Physical damage reduction against an attacker level (default from constants)
    pub fn physical_damage_reduction(&self, attacker_level: Option<u32>) -> f64 {
        let level = attacker_level.unwrap_or(constants().armor.default_attacker_level);
        defense::physical_damage_reduction(self.derived.armor, level)
    }

    /// Resist chance for a school, or for the best resistance when `None`
    pub fn spell_resist_chance(
        &self,
        school: Option<MagicSchool>,
        caster_level: Option<u32>,
    ) -> f64 {
        let resistance = match school {
            Some(school) => self.resistances.get(school),
            None => self.resistances.max(),
        };
        let level = caster_level.unwrap_or(constants().resistance.default_caster_level);
        defense::spell_resist_chance(resistance, level)
    }

    /// Resist chance for the school named `school`; empty means best
    ///
    /// Accepts the bare school key (`fire`) or its resistance column name
    /// (`fire_res`).
    pub fn spell_resist_chance_key(
        &self,
        school: &str,
        caster_level: Option<u32>,
    ) -> Result<f64, StatError> {
        let school = if school.is_empty() {
            None
        } else {
            let key = school.strip_suffix("_res").unwrap_or(school);
            Some(MagicSchool::parse_key(key)?)
        };
        Ok(self.spell_resist_chance(school, caster_level))
    }

    /// Ordered overview of the character's stats
    ///
    /// Values are rounded to one decimal, physical reduction to three.
    pub fn summary(&self, include_resistances: bool) -> Vec<(&'static str, f64)> {
        let stats = &self.derived;
        let primary = &self.primary;
        let mut summary: Vec<(&'static str, f64)> = [
            ("hp", stats.hp),
            ("mana", stats.mana),
            ("mana_reg", stats.mana_regen),
            ("stamina", primary.stamina),
            ("strength", primary.strength),
            ("intellect", primary.intellect),
            ("agility", primary.agility),
            ("spirit", primary.spirit),
            ("armor", stats.armor),
            ("physical_reduction", self.physical_damage_reduction(None)),
            ("melee_ap", stats.melee_attack_power),
            ("range_ap", stats.ranged_attack_power),
            ("spell_power", stats.spell_power),
            ("healing_power", stats.healing_power),
            ("crit", stats.crit),
            ("spell_crit", stats.spell_crit),
            ("hit_chance", stats.hit_chance),
            ("dodge", stats.dodge),
            ("parry", stats.parry),
            ("defence", stats.defence),
        ]
        .into_iter()
        .map(|(label, value)| {
            let digits = if label == "physical_reduction" { 3 } else { 1 };
            (label, round_to(value, digits))
        })
        .collect();

        if include_resistances {
            summary.extend(
                self.resistances
                    .iter()
                    .map(|(school, value)| (resistance_label(school), value as f64)),
            );
        }
        summary
    }

    // === Persistence ===

    /// Capture the persistable state
    pub fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            class: self.class,
            race: self.race,
            level: self.level,
            base: self.base,
            base_primary: self.base_primary,
            item_stats: self.item_stats,
            resistances: self.resistances,
            accumulators: self.accumulators.clone(),
            equipment: self.equipment.clone(),
        }
    }

    /// Rebuild a character from a snapshot, re-attaching a catalog
    ///
    /// Fails with `ItemNotFound` when an equipped item is absent from the
    /// catalog.
    pub fn restore(
        snapshot: CharacterSnapshot,
        catalog: &dyn ReferenceCatalog,
    ) -> Result<Self, StatError> {
        let items = Arc::new(ItemIndex::from_items(catalog.items()));
        if let Some((_, missing)) = snapshot
            .equipment
            .occupied()
            .find(|(_, id)| !items.contains(*id))
        {
            return Err(StatError::ItemNotFound(missing));
        }

        let mut character = Character {
            class: snapshot.class,
            race: snapshot.race,
            level: snapshot.level,
            base: snapshot.base,
            base_primary: snapshot.base_primary,
            item_stats: snapshot.item_stats,
            primary: snapshot.base_primary,
            resistances: snapshot.resistances,
            accumulators: snapshot.accumulators,
            equipment: snapshot.equipment,
            derived: DerivedStats::default(),
            items,
        };
        character.refresh();
        Ok(character)
    }
}

fn resistance_label(school: MagicSchool) -> &'static str {
    match school {
        MagicSchool::Holy => "holy_res",
        MagicSchool::Fire => "fire_res",
        MagicSchool::Nature => "nature_res",
        MagicSchool::Frost => "frost_res",
        MagicSchool::Shadow => "shadow_res",
        MagicSchool::Arcane => "arcane_res",
    }
}

fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}
