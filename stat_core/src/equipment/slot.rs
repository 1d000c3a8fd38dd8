use item_core::{GameKey, KeyError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Equipment slot for gear
///
/// Several slots share inventory-type codes (`ranged`/`bow` both take 15,
/// `offhand`/`left-hand` both take 22); an item resolves to the first
/// slot in `all()` order whose code set contains its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    #[serde(rename = "head")]
    Head,
    #[serde(rename = "neck")]
    Neck,
    #[serde(rename = "shoulders")]
    Shoulders,
    #[serde(rename = "chest")]
    Chest,
    #[serde(rename = "waist")]
    Waist,
    #[serde(rename = "legs")]
    Legs,
    #[serde(rename = "feet")]
    Feet,
    #[serde(rename = "wrists")]
    Wrists,
    #[serde(rename = "hands")]
    Hands,
    #[serde(rename = "finger1")]
    Finger1,
    #[serde(rename = "finger2")]
    Finger2,
    #[serde(rename = "trinket1")]
    Trinket1,
    #[serde(rename = "trinket2")]
    Trinket2,
    #[serde(rename = "one-hand")]
    OneHand,
    #[serde(rename = "shield")]
    Shield,
    #[serde(rename = "ranged")]
    Ranged,
    #[serde(rename = "back")]
    Back,
    #[serde(rename = "two_hand")]
    TwoHand,
    #[serde(rename = "offhand")]
    OffHand,
    #[serde(rename = "thrown")]
    Thrown,
    #[serde(rename = "gun")]
    Gun,
    #[serde(rename = "bow")]
    Bow,
    #[serde(rename = "left-hand")]
    LeftHand,
    #[serde(rename = "relic")]
    Relic,
}

impl Slot {
    /// Inventory-type codes this slot accepts
    pub fn inventory_types(self) -> &'static [u8] {
        match self {
            Slot::Head => &[1],
            Slot::Neck => &[2],
            Slot::Shoulders => &[3],
            Slot::Chest => &[4, 5, 20],
            Slot::Waist => &[6],
            Slot::Legs => &[7],
            Slot::Feet => &[8],
            Slot::Wrists => &[9],
            Slot::Hands => &[10],
            Slot::Finger1 | Slot::Finger2 => &[11],
            Slot::Trinket1 | Slot::Trinket2 => &[12],
            Slot::OneHand => &[13, 21],
            Slot::Shield => &[14],
            Slot::Ranged | Slot::Bow => &[15],
            Slot::Back => &[16],
            Slot::TwoHand => &[17],
            Slot::OffHand | Slot::LeftHand => &[22],
            Slot::Thrown => &[25],
            Slot::Gun => &[26],
            Slot::Relic => &[28],
        }
    }

    /// First slot accepting an inventory-type code
    pub fn for_inventory_type(code: u8) -> Option<Slot> {
        Self::all()
            .iter()
            .copied()
            .find(|slot| slot.inventory_types().contains(&code))
    }

    /// The other member of a dual-slot pair
    pub fn partner(self) -> Option<Slot> {
        match self {
            Slot::Finger1 => Some(Slot::Finger2),
            Slot::Finger2 => Some(Slot::Finger1),
            Slot::Trinket1 => Some(Slot::Trinket2),
            Slot::Trinket2 => Some(Slot::Trinket1),
            _ => None,
        }
    }

    /// Whether items for this slot come in armor materials
    pub fn has_material(self) -> bool {
        matches!(
            self,
            Slot::Head
                | Slot::Shoulders
                | Slot::Chest
                | Slot::Waist
                | Slot::Legs
                | Slot::Feet
                | Slot::Wrists
                | Slot::Hands
        )
    }
}

impl GameKey for Slot {
    const KIND: &'static str = "slot";

    fn all() -> &'static [Self] {
        &[
            Slot::Head,
            Slot::Neck,
            Slot::Shoulders,
            Slot::Chest,
            Slot::Waist,
            Slot::Legs,
            Slot::Feet,
            Slot::Wrists,
            Slot::Hands,
            Slot::Finger1,
            Slot::Finger2,
            Slot::Trinket1,
            Slot::Trinket2,
            Slot::OneHand,
            Slot::Shield,
            Slot::Ranged,
            Slot::Back,
            Slot::TwoHand,
            Slot::OffHand,
            Slot::Thrown,
            Slot::Gun,
            Slot::Bow,
            Slot::LeftHand,
            Slot::Relic,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Slot::Head => "head",
            Slot::Neck => "neck",
            Slot::Shoulders => "shoulders",
            Slot::Chest => "chest",
            Slot::Waist => "waist",
            Slot::Legs => "legs",
            Slot::Feet => "feet",
            Slot::Wrists => "wrists",
            Slot::Hands => "hands",
            Slot::Finger1 => "finger1",
            Slot::Finger2 => "finger2",
            Slot::Trinket1 => "trinket1",
            Slot::Trinket2 => "trinket2",
            Slot::OneHand => "one-hand",
            Slot::Shield => "shield",
            Slot::Ranged => "ranged",
            Slot::Back => "back",
            Slot::TwoHand => "two_hand",
            Slot::OffHand => "offhand",
            Slot::Thrown => "thrown",
            Slot::Gun => "gun",
            Slot::Bow => "bow",
            Slot::LeftHand => "left-hand",
            Slot::Relic => "relic",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Slot {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_key(s)
    }
}
