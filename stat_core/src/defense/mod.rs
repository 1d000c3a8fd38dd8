//! Defense system - Armor and elemental resistances

mod armor;
mod resistance;

pub use armor::physical_damage_reduction;
pub use resistance::spell_resist_chance;
