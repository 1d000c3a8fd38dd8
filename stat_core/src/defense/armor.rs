//! Armor - Physical damage mitigation against an attacker level
//!
//! Formula:
//! - reduction = armor / (armor + level_coefficient * attacker_level - level_offset)

use crate::config::constants;

/// Fraction of physical damage absorbed by `armor` against an attacker of
/// `attacker_level`
///
/// For non-negative armor at level 60 the result lies in [0, 1) and grows
/// with armor. Low attacker levels make the denominator small or negative;
/// the formula is applied as is.
pub fn physical_damage_reduction(armor: f64, attacker_level: u32) -> f64 {
    let armor_constants = &constants().armor;
    let level_term =
        armor_constants.level_coefficient * attacker_level as f64 - armor_constants.level_offset;
    armor / (armor + level_term)
}
