use crate::types::*;
use serde::{Deserialize, Serialize};

/// Allowed-class value meaning "usable by every class"
pub const ANY_CLASS: i32 = -1;

fn any_class() -> i32 {
    ANY_CLASS
}

/// An item record from the reference catalog
///
/// Codes (inventory type, subclass, quality, bonding, stat types, damage
/// types) are kept as the catalog stores them; typed views are available
/// through the accessor methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    /// `ANY_CLASS` or a single catalog class id
    #[serde(default = "any_class")]
    pub allowable_class: i32,
    /// Inventory-type code, resolved to equipment slots by the stat engine
    pub inventory_type: u8,
    /// Subclass code; the armor material for armor items
    #[serde(default)]
    pub subclass: u8,
    #[serde(default)]
    pub quality: u8,
    #[serde(default)]
    pub bonding: u8,
    #[serde(default)]
    pub armor: i32,
    #[serde(default)]
    pub resistances: Resistances,
    /// Up to five (stat-type, value) pairs
    #[serde(default)]
    pub stats: Vec<ItemStat>,
    /// Up to three damage triples
    #[serde(default)]
    pub damages: Vec<WeaponDamage>,
    /// Attack delay in milliseconds
    #[serde(default)]
    pub delay: u32,
    /// Up to three triggered effects
    #[serde(default)]
    pub spells: Vec<ItemSpell>,
}

/// A raw (stat-type, value) pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemStat {
    pub stat_type: i32,
    pub value: i32,
}

impl ItemStat {
    pub fn kind(&self) -> Option<StatKind> {
        StatKind::from_code(self.stat_type)
    }
}

/// A (damage-min, damage-max, damage-type) triple
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponDamage {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub damage_type: u8,
}

impl WeaponDamage {
    pub fn school(&self) -> Option<DamageSchool> {
        DamageSchool::from_code(self.damage_type)
    }
}

/// A (trigger-type, effect-name, base-points) triple
///
/// `name` is the free-text effect description; it is absent when the
/// referenced spell is missing from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpell {
    #[serde(default)]
    pub trigger: u8,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub base_points: i32,
}

/// Elemental resistance values, one per magic school
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resistances {
    #[serde(default)]
    pub holy: i32,
    #[serde(default)]
    pub fire: i32,
    #[serde(default)]
    pub nature: i32,
    #[serde(default)]
    pub frost: i32,
    #[serde(default)]
    pub shadow: i32,
    #[serde(default)]
    pub arcane: i32,
}

impl Resistances {
    pub fn get(&self, school: MagicSchool) -> i32 {
        match school {
            MagicSchool::Holy => self.holy,
            MagicSchool::Fire => self.fire,
            MagicSchool::Nature => self.nature,
            MagicSchool::Frost => self.frost,
            MagicSchool::Shadow => self.shadow,
            MagicSchool::Arcane => self.arcane,
        }
    }

    pub fn get_mut(&mut self, school: MagicSchool) -> &mut i32 {
        match school {
            MagicSchool::Holy => &mut self.holy,
            MagicSchool::Fire => &mut self.fire,
            MagicSchool::Nature => &mut self.nature,
            MagicSchool::Frost => &mut self.frost,
            MagicSchool::Shadow => &mut self.shadow,
            MagicSchool::Arcane => &mut self.arcane,
        }
    }

    pub fn set(&mut self, school: MagicSchool, value: i32) {
        *self.get_mut(school) = value;
    }

    /// Highest resistance across all schools
    pub fn max(&self) -> i32 {
        MagicSchool::all().iter().map(|s| self.get(*s)).max().unwrap_or(0)
    }

    /// (school, value) pairs in school order
    pub fn iter(&self) -> impl Iterator<Item = (MagicSchool, i32)> + '_ {
        MagicSchool::all().iter().map(move |s| (*s, self.get(*s)))
    }
}

impl Item {
    /// Whether the allowed-class filter admits `class`
    pub fn is_usable_by(&self, class: CharacterClass) -> bool {
        self.allowable_class == ANY_CLASS || self.allowable_class == class.code()
    }

    pub fn quality(&self) -> Option<Quality> {
        Quality::from_code(self.quality)
    }

    pub fn binding(&self) -> Option<Binding> {
        Binding::from_code(self.bonding)
    }

    /// The first damage triple, if any
    pub fn primary_damage(&self) -> Option<&WeaponDamage> {
        self.damages.first()
    }

    pub fn delay_seconds(&self) -> f64 {
        self.delay as f64 / 1000.0
    }

    /// Value of the last pair granting `kind`, 0 if none does
    pub fn stat_value(&self, kind: StatKind) -> i32 {
        self.stats
            .iter()
            .rev()
            .find(|s| s.kind() == Some(kind))
            .map(|s| s.value)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Item {
        toml::from_str(
            r#"
id = 18814
name = "Choker of the Fire Lord"
inventory_type = 2
quality = 4
bonding = 1
stats = [{ stat_type = 7, value = 7 }, { stat_type = 5, value = 7 }]
delay = 0

[resistances]
fire = 10

[[spells]]
trigger = 1
name = "Increase Spell Dam 34"
base_points = 33
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_from_toml() {
        let item = sample();
        assert_eq!(item.allowable_class, ANY_CLASS);
        assert_eq!(item.armor, 0);
        assert!(item.damages.is_empty());
        assert_eq!(item.resistances.fire, 10);
        assert_eq!(item.resistances.shadow, 0);
        assert_eq!(item.spells[0].name.as_deref(), Some("Increase Spell Dam 34"));
    }

    #[test]
    fn test_typed_views() {
        let item = sample();
        assert_eq!(item.quality(), Some(Quality::Epic));
        assert_eq!(item.binding(), Some(Binding::BindOnPickup));
        assert_eq!(item.stat_value(StatKind::Intellect), 7);
        assert_eq!(item.stat_value(StatKind::Agility), 0);
    }

    #[test]
    fn test_class_restriction() {
        let mut item = sample();
        assert!(item.is_usable_by(CharacterClass::Rogue));
        item.allowable_class = CharacterClass::Mage.code();
        assert!(item.is_usable_by(CharacterClass::Mage));
        assert!(!item.is_usable_by(CharacterClass::Priest));
    }

    #[test]
    fn test_resistance_max() {
        let mut res = Resistances::default();
        assert_eq!(res.max(), 0);
        res.set(MagicSchool::Frost, 15);
        res.set(MagicSchool::Shadow, 20);
        assert_eq!(res.max(), 20);
        assert_eq!(res.get(MagicSchool::Frost), 15);
    }

    #[test]
    fn test_delay_seconds() {
        let mut item = sample();
        item.delay = 2900;
        assert!((item.delay_seconds() - 2.9).abs() < f64::EPSILON);
    }
}
