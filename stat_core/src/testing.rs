//! In-memory catalog shared by unit tests

use catalog_core::{BaseHpMana, BasePrimaryStats, Catalog};
use item_core::{
    CharacterClass, GameKey, Item, ItemSpell, ItemStat, Race, Resistances, WeaponDamage,
    ANY_CLASS,
};

pub const LEVEL: u32 = 60;

pub mod items {
    pub const RING_OF_INTELLECT: u32 = 1001;
    pub const RING_OF_POWER: u32 = 1002;
    pub const RING_OF_SORCERY: u32 = 1003;
    pub const CLOTH_ROBE: u32 = 2001;
    pub const LEATHER_TUNIC: u32 = 2002;
    pub const WARRIOR_PLATE: u32 = 2003;
    pub const GREATAXE: u32 = 3001;
    pub const SHADOW_CLOAK: u32 = 4001;
    pub const BAG: u32 = 5001;
    pub const VITAL_TRINKET: u32 = 6001;
}

/// Base primary stats every (class, race) pair starts with in the fixture
pub fn base_primary() -> BasePrimaryStats {
    BasePrimaryStats {
        stamina: 50.0,
        strength: 30.0,
        intellect: 120.0,
        spirit: 110.0,
        agility: 40.0,
    }
}

/// Epic item usable by every class, with no attributes
pub fn item(id: u32, name: &str, inventory_type: u8) -> Item {
    Item {
        id,
        name: name.to_string(),
        allowable_class: ANY_CLASS,
        inventory_type,
        subclass: 0,
        quality: 4,
        bonding: 1,
        armor: 0,
        resistances: Resistances::default(),
        stats: Vec::new(),
        damages: Vec::new(),
        delay: 0,
        spells: Vec::new(),
    }
}

pub fn stat(stat_type: i32, value: i32) -> ItemStat {
    ItemStat { stat_type, value }
}

fn spell(name: &str, base_points: i32) -> ItemSpell {
    ItemSpell {
        trigger: 1,
        name: Some(name.to_string()),
        base_points,
    }
}

pub fn fixture_items() -> Vec<Item> {
    let mut ring_of_intellect = item(items::RING_OF_INTELLECT, "Ring of Intellect", 11);
    ring_of_intellect.stats = vec![stat(5, 10)];

    let mut ring_of_power = item(items::RING_OF_POWER, "Ring of Power", 11);
    ring_of_power.stats = vec![stat(7, 6)];
    ring_of_power.spells = vec![
        spell("Increase Spell Dam 12", 11),
        spell("Increase Fire Dam 20", 19),
    ];

    let mut ring_of_sorcery = item(items::RING_OF_SORCERY, "Ring of Sorcery", 11);
    ring_of_sorcery.spells = vec![
        spell("Increase Spell Dam 30", 29),
        spell("Increase Critical Spell 15", 0),
    ];

    let mut cloth_robe = item(items::CLOTH_ROBE, "Robe of the Archmage", 20);
    cloth_robe.subclass = 1;
    cloth_robe.armor = 100;
    cloth_robe.stats = vec![stat(5, 20), stat(6, 10)];
    cloth_robe.resistances.fire = 10;
    cloth_robe.spells = vec![spell("Increased Mana Regen", 4)];

    let mut leather_tunic = item(items::LEATHER_TUNIC, "Nightslayer Chestpiece", 5);
    leather_tunic.subclass = 2;
    leather_tunic.armor = 200;
    leather_tunic.stats = vec![stat(3, 15)];

    let mut warrior_plate = item(items::WARRIOR_PLATE, "Breastplate of Might", 5);
    warrior_plate.subclass = 4;
    warrior_plate.armor = 700;
    warrior_plate.allowable_class = CharacterClass::Warrior.code();
    warrior_plate.stats = vec![stat(4, 20), stat(7, 28)];

    let mut greataxe = item(items::GREATAXE, "Obsidian Edged Blade", 17);
    greataxe.damages = vec![WeaponDamage {
        min: 120.0,
        max: 180.0,
        damage_type: 0,
    }];
    greataxe.delay = 3400;
    greataxe.stats = vec![stat(4, 20), stat(7, 10)];
    greataxe.spells = vec![spell("Attack Power 40", 39)];

    let mut shadow_cloak = item(items::SHADOW_CLOAK, "Cloak of Shadows", 16);
    shadow_cloak.armor = 50;
    shadow_cloak.stats = vec![stat(7, 8)];
    shadow_cloak.resistances.shadow = 15;

    let bag = item(items::BAG, "Traveler's Backpack", 18);

    let mut vital_trinket = item(items::VITAL_TRINKET, "Vital Charm", 12);
    vital_trinket.stats = vec![stat(1, 100)];
    vital_trinket.spells = vec![spell("Increased Dodge", 1)];

    vec![
        ring_of_intellect,
        ring_of_power,
        ring_of_sorcery,
        cloth_robe,
        leather_tunic,
        warrior_plate,
        greataxe,
        shadow_cloak,
        bag,
        vital_trinket,
    ]
}

/// Catalog with the fixture items and base rows for every class and race
pub fn fixture_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for item in fixture_items() {
        catalog.insert_item(item);
    }
    for class in CharacterClass::all() {
        catalog.insert_class_stats(
            *class,
            LEVEL,
            BaseHpMana {
                base_hp: 1500.0,
                base_mana: 1000.0,
            },
        );
        for race in Race::all() {
            catalog.insert_level_stats(*class, *race, LEVEL, base_primary());
        }
    }
    catalog
}
