use serde::{Deserialize, Serialize};

/// Base hit points and mana of a class at one level
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseHpMana {
    pub base_hp: f64,
    pub base_mana: f64,
}

/// Base primary stats of a (class, race) pair at one level
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BasePrimaryStats {
    pub stamina: f64,
    pub strength: f64,
    pub intellect: f64,
    pub spirit: f64,
    pub agility: f64,
}
