//! Accumulators - running sums of equipped items' contributions

use crate::effects::BonusCategory;
use item_core::CharacterClass;
use serde::{Deserialize, Serialize};

/// Baselines that equipped items add to and remove from
///
/// Every field starts at a class-dependent default and is mutated only by
/// equip/unequip. Derived stats are recomputed from these on each change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Accumulators {
    // === Resources ===
    pub bonus_hp: f64,
    pub mana_regen_bonus: f64,

    // === Defenses ===
    pub base_armor: f64,
    pub base_dodge: f64,
    pub defence: f64,
    pub parry: f64,

    // === Offense ===
    pub base_attack_power: f64,
    pub base_crit: f64,
    pub base_spell_crit: f64,
    pub hit_chance: f64,

    // === Spell power ===
    pub spell_power: f64,
    pub spell_holy_power: f64,
    pub spell_fire_power: f64,
    pub spell_nature_power: f64,
    pub spell_frost_power: f64,
    pub spell_shadow_power: f64,
    pub spell_arcane_power: f64,
    pub healing_power: f64,
}

impl Accumulators {
    /// Starting accumulators of a class
    pub fn for_class(class: CharacterClass) -> Self {
        Accumulators {
            mana_regen_bonus: base_mana_regen(class),
            ..Accumulators::default()
        }
    }

    /// The accumulator a bonus category feeds
    pub fn bonus(&self, category: BonusCategory) -> f64 {
        match category {
            BonusCategory::SpellDamage => self.spell_power,
            BonusCategory::FireDamage => self.spell_fire_power,
            BonusCategory::ShadowDamage => self.spell_shadow_power,
            BonusCategory::NatureDamage => self.spell_nature_power,
            BonusCategory::FrostDamage => self.spell_frost_power,
            BonusCategory::HolyDamage => self.spell_holy_power,
            BonusCategory::ArcaneDamage => self.spell_arcane_power,
            BonusCategory::Healing => self.healing_power,
            BonusCategory::CriticalSpell => self.base_spell_crit,
            BonusCategory::Critical => self.base_crit,
            BonusCategory::ManaRegen => self.mana_regen_bonus,
            BonusCategory::Defense => self.defence,
            BonusCategory::Dodge => self.base_dodge,
            BonusCategory::Parry => self.parry,
            BonusCategory::AttackPower => self.base_attack_power,
            BonusCategory::HitChance => self.hit_chance,
        }
    }

    /// Mutable access to the accumulator a bonus category feeds
    pub fn bonus_mut(&mut self, category: BonusCategory) -> &mut f64 {
        match category {
            BonusCategory::SpellDamage => &mut self.spell_power,
            BonusCategory::FireDamage => &mut self.spell_fire_power,
            BonusCategory::ShadowDamage => &mut self.spell_shadow_power,
            BonusCategory::NatureDamage => &mut self.spell_nature_power,
            BonusCategory::FrostDamage => &mut self.spell_frost_power,
            BonusCategory::HolyDamage => &mut self.spell_holy_power,
            BonusCategory::ArcaneDamage => &mut self.spell_arcane_power,
            BonusCategory::Healing => &mut self.healing_power,
            BonusCategory::CriticalSpell => &mut self.base_spell_crit,
            BonusCategory::Critical => &mut self.base_crit,
            BonusCategory::ManaRegen => &mut self.mana_regen_bonus,
            BonusCategory::Defense => &mut self.defence,
            BonusCategory::Dodge => &mut self.base_dodge,
            BonusCategory::Parry => &mut self.parry,
            BonusCategory::AttackPower => &mut self.base_attack_power,
            BonusCategory::HitChance => &mut self.hit_chance,
        }
    }
}

/// Class mana regeneration independent of spirit
fn base_mana_regen(class: CharacterClass) -> f64 {
    match class {
        CharacterClass::Paladin
        | CharacterClass::Hunter
        | CharacterClass::Warlock
        | CharacterClass::Druid => 15.0,
        CharacterClass::Priest | CharacterClass::Mage => 12.5,
        CharacterClass::Shaman => 17.0,
        CharacterClass::Warrior | CharacterClass::Rogue => 0.0,
    }
}
