//! Resistance - Chance to resist a spell of one school
//!
//! Formula:
//! - chance = resistance / (level_factor * caster_level) * chance_factor

use crate::config::constants;

/// Average resist chance of `resistance` against a caster of `caster_level`
pub fn spell_resist_chance(resistance: i32, caster_level: u32) -> f64 {
    let res_constants = &constants().resistance;
    resistance as f64 / (res_constants.level_factor * caster_level as f64)
        * res_constants.chance_factor
}
