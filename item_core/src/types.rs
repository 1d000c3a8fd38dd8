use crate::KeyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A closed enumeration addressed by a string key
pub trait GameKey: Sized + Copy + 'static {
    /// Human-readable name of the enumeration, used in error messages
    const KIND: &'static str;

    /// Every variant, in canonical order
    fn all() -> &'static [Self];

    /// Stable string key of this variant
    fn key(self) -> &'static str;

    /// Parse a key, listing every valid key on failure
    fn parse_key(key: &str) -> Result<Self, KeyError> {
        Self::all()
            .iter()
            .copied()
            .find(|v| v.key() == key)
            .ok_or_else(|| KeyError::invalid(Self::KIND, key, Self::all().iter().map(|v| v.key())))
    }
}

macro_rules! key_traits {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.key())
                }
            }

            impl FromStr for $ty {
                type Err = KeyError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as GameKey>::parse_key(s)
                }
            }
        )*
    };
}

key_traits!(
    CharacterClass,
    Race,
    Quality,
    Material,
    Binding,
    DamageSchool,
    MagicSchool,
    StatKind,
);

// ============================================================================
// Character identity
// ============================================================================

/// Playable classes with their catalog class ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Warrior,
    Paladin,
    Hunter,
    Rogue,
    Priest,
    Shaman,
    Mage,
    Warlock,
    Druid,
}

impl CharacterClass {
    /// Catalog class id (the id space has gaps at 6 and 10)
    pub fn code(self) -> i32 {
        match self {
            CharacterClass::Warrior => 1,
            CharacterClass::Paladin => 2,
            CharacterClass::Hunter => 3,
            CharacterClass::Rogue => 4,
            CharacterClass::Priest => 5,
            CharacterClass::Shaman => 7,
            CharacterClass::Mage => 8,
            CharacterClass::Warlock => 9,
            CharacterClass::Druid => 11,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.code() == code)
    }
}

impl GameKey for CharacterClass {
    const KIND: &'static str = "class";

    fn all() -> &'static [Self] {
        &[
            CharacterClass::Warrior,
            CharacterClass::Paladin,
            CharacterClass::Hunter,
            CharacterClass::Rogue,
            CharacterClass::Priest,
            CharacterClass::Shaman,
            CharacterClass::Mage,
            CharacterClass::Warlock,
            CharacterClass::Druid,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            CharacterClass::Warrior => "warrior",
            CharacterClass::Paladin => "paladin",
            CharacterClass::Hunter => "hunter",
            CharacterClass::Rogue => "rogue",
            CharacterClass::Priest => "priest",
            CharacterClass::Shaman => "shaman",
            CharacterClass::Mage => "mage",
            CharacterClass::Warlock => "warlock",
            CharacterClass::Druid => "druid",
        }
    }
}

/// Playable races with their catalog race ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    Human,
    Orc,
    Dwarf,
    Elf,
    Undead,
    Tauren,
    Gnome,
    Troll,
}

impl Race {
    pub fn code(self) -> i32 {
        match self {
            Race::Human => 1,
            Race::Orc => 2,
            Race::Dwarf => 3,
            Race::Elf => 4,
            Race::Undead => 5,
            Race::Tauren => 6,
            Race::Gnome => 7,
            Race::Troll => 8,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::all().iter().copied().find(|r| r.code() == code)
    }
}

impl GameKey for Race {
    const KIND: &'static str = "race";

    fn all() -> &'static [Self] {
        &[
            Race::Human,
            Race::Orc,
            Race::Dwarf,
            Race::Elf,
            Race::Undead,
            Race::Tauren,
            Race::Gnome,
            Race::Troll,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Race::Human => "human",
            Race::Orc => "orc",
            Race::Dwarf => "dwarf",
            Race::Elf => "elf",
            Race::Undead => "undead",
            Race::Tauren => "tauren",
            Race::Gnome => "gnome",
            Race::Troll => "troll",
        }
    }
}

// ============================================================================
// Item classification
// ============================================================================

/// Item quality tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Poor,
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Quality {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::all().get(code as usize).copied()
    }
}

impl GameKey for Quality {
    const KIND: &'static str = "quality";

    fn all() -> &'static [Self] {
        &[
            Quality::Poor,
            Quality::Common,
            Quality::Uncommon,
            Quality::Rare,
            Quality::Epic,
            Quality::Legendary,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Quality::Poor => "poor",
            Quality::Common => "common",
            Quality::Uncommon => "uncommon",
            Quality::Rare => "rare",
            Quality::Epic => "epic",
            Quality::Legendary => "legendary",
        }
    }
}

/// Armor material (the armor item subclass)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Cloth,
    Leather,
    Mail,
    Plate,
}

impl Material {
    /// Catalog subclass code
    pub fn code(self) -> u8 {
        match self {
            Material::Cloth => 1,
            Material::Leather => 2,
            Material::Mail => 3,
            Material::Plate => 4,
        }
    }
}

impl GameKey for Material {
    const KIND: &'static str = "armor type";

    fn all() -> &'static [Self] {
        &[Material::Cloth, Material::Leather, Material::Mail, Material::Plate]
    }

    fn key(self) -> &'static str {
        match self {
            Material::Cloth => "cloth",
            Material::Leather => "leather",
            Material::Mail => "mail",
            Material::Plate => "plate",
        }
    }
}

/// Item binding rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Binding {
    NoBinding,
    BindOnPickup,
    BindOnEquip,
    BindOnUse,
    QuestItem,
}

impl Binding {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::all().get(code as usize).copied()
    }
}

impl GameKey for Binding {
    const KIND: &'static str = "binding";

    fn all() -> &'static [Self] {
        &[
            Binding::NoBinding,
            Binding::BindOnPickup,
            Binding::BindOnEquip,
            Binding::BindOnUse,
            Binding::QuestItem,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Binding::NoBinding => "no binding",
            Binding::BindOnPickup => "bind on pickup",
            Binding::BindOnEquip => "bind on equip",
            Binding::BindOnUse => "bind on use",
            Binding::QuestItem => "quest item",
        }
    }
}

// ============================================================================
// Damage and schools
// ============================================================================

/// Weapon damage school, including physical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DamageSchool {
    #[default]
    Physical,
    Holy,
    Fire,
    Nature,
    Frost,
    Shadow,
    Arcane,
}

impl DamageSchool {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::all().get(code as usize).copied()
    }

    /// The magic school of this damage, `None` for physical
    pub fn magic_school(self) -> Option<MagicSchool> {
        match self {
            DamageSchool::Physical => None,
            DamageSchool::Holy => Some(MagicSchool::Holy),
            DamageSchool::Fire => Some(MagicSchool::Fire),
            DamageSchool::Nature => Some(MagicSchool::Nature),
            DamageSchool::Frost => Some(MagicSchool::Frost),
            DamageSchool::Shadow => Some(MagicSchool::Shadow),
            DamageSchool::Arcane => Some(MagicSchool::Arcane),
        }
    }
}

impl GameKey for DamageSchool {
    const KIND: &'static str = "damage type";

    fn all() -> &'static [Self] {
        &[
            DamageSchool::Physical,
            DamageSchool::Holy,
            DamageSchool::Fire,
            DamageSchool::Nature,
            DamageSchool::Frost,
            DamageSchool::Shadow,
            DamageSchool::Arcane,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            DamageSchool::Physical => "physical",
            DamageSchool::Holy => "holy",
            DamageSchool::Fire => "fire",
            DamageSchool::Nature => "nature",
            DamageSchool::Frost => "frost",
            DamageSchool::Shadow => "shadow",
            DamageSchool::Arcane => "arcane",
        }
    }
}

/// Elemental school used for resistances and school spell power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagicSchool {
    Holy,
    Fire,
    Nature,
    Frost,
    Shadow,
    Arcane,
}

impl GameKey for MagicSchool {
    const KIND: &'static str = "resist school";

    fn all() -> &'static [Self] {
        &[
            MagicSchool::Holy,
            MagicSchool::Fire,
            MagicSchool::Nature,
            MagicSchool::Frost,
            MagicSchool::Shadow,
            MagicSchool::Arcane,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            MagicSchool::Holy => "holy",
            MagicSchool::Fire => "fire",
            MagicSchool::Nature => "nature",
            MagicSchool::Frost => "frost",
            MagicSchool::Shadow => "shadow",
            MagicSchool::Arcane => "arcane",
        }
    }
}

// ============================================================================
// Item stat pairs
// ============================================================================

/// Stat types an item's (stat-type, value) pairs can grant
///
/// Codes outside this set exist in the data source but have no effect on
/// character stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Stamina,
    Strength,
    Intellect,
    Agility,
    Spirit,
    Health,
}

impl StatKind {
    pub fn code(self) -> i32 {
        match self {
            StatKind::Health => 1,
            StatKind::Agility => 3,
            StatKind::Strength => 4,
            StatKind::Intellect => 5,
            StatKind::Spirit => 6,
            StatKind::Stamina => 7,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.code() == code)
    }
}

impl GameKey for StatKind {
    const KIND: &'static str = "stat";

    fn all() -> &'static [Self] {
        &[
            StatKind::Stamina,
            StatKind::Strength,
            StatKind::Intellect,
            StatKind::Agility,
            StatKind::Spirit,
            StatKind::Health,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            StatKind::Stamina => "stamina",
            StatKind::Strength => "strength",
            StatKind::Intellect => "intellect",
            StatKind::Agility => "agility",
            StatKind::Spirit => "spirit",
            StatKind::Health => "health",
        }
    }
}
