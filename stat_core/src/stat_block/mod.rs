//! Stat blocks - primary stats, accumulators and derived combat stats

mod aggregator;
pub mod formulas;

pub use aggregator::Accumulators;
pub use formulas::derive_stats;

use crate::config::constants;
use item_core::{Race, StatKind};
use serde::{Deserialize, Serialize};

/// The five primary stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimaryStats {
    pub stamina: f64,
    pub strength: f64,
    pub intellect: f64,
    pub spirit: f64,
    pub agility: f64,
}

impl PrimaryStats {
    /// Value of a primary stat; `Health` is not one and reads 0
    pub fn get(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Stamina => self.stamina,
            StatKind::Strength => self.strength,
            StatKind::Intellect => self.intellect,
            StatKind::Spirit => self.spirit,
            StatKind::Agility => self.agility,
            StatKind::Health => 0.0,
        }
    }

    /// Mutable access to a primary stat, `None` for `Health`
    pub fn get_mut(&mut self, kind: StatKind) -> Option<&mut f64> {
        match kind {
            StatKind::Stamina => Some(&mut self.stamina),
            StatKind::Strength => Some(&mut self.strength),
            StatKind::Intellect => Some(&mut self.intellect),
            StatKind::Spirit => Some(&mut self.spirit),
            StatKind::Agility => Some(&mut self.agility),
            StatKind::Health => None,
        }
    }
}

/// Raw primary stat points granted by equipped items
///
/// Kept as integers so removing an item is exact; racial multipliers are
/// applied only when the effective stats are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStatTotals {
    pub stamina: i32,
    pub strength: i32,
    pub intellect: i32,
    pub spirit: i32,
    pub agility: i32,
}

impl ItemStatTotals {
    /// Mutable access to a stat total, `None` for `Health`
    pub fn get_mut(&mut self, kind: StatKind) -> Option<&mut i32> {
        match kind {
            StatKind::Stamina => Some(&mut self.stamina),
            StatKind::Strength => Some(&mut self.strength),
            StatKind::Intellect => Some(&mut self.intellect),
            StatKind::Spirit => Some(&mut self.spirit),
            StatKind::Agility => Some(&mut self.agility),
            StatKind::Health => None,
        }
    }
}

/// Effective primary stats: catalog base plus item points
///
/// Gnomes scale item intellect and humans item spirit by the racial
/// multipliers from the engine constants.
pub fn effective_primary(
    race: Race,
    base: &PrimaryStats,
    items: &ItemStatTotals,
) -> PrimaryStats {
    let racial = &constants().racial;
    let intellect_scale = if race == Race::Gnome {
        racial.gnome_intellect_multiplier
    } else {
        1.0
    };
    let spirit_scale = if race == Race::Human {
        racial.human_spirit_multiplier
    } else {
        1.0
    };

    PrimaryStats {
        stamina: base.stamina + items.stamina as f64,
        strength: base.strength + items.strength as f64,
        intellect: base.intellect + items.intellect as f64 * intellect_scale,
        spirit: base.spirit + items.spirit as f64 * spirit_scale,
        agility: base.agility + items.agility as f64,
    }
}

impl From<catalog_core::BasePrimaryStats> for PrimaryStats {
    fn from(base: catalog_core::BasePrimaryStats) -> Self {
        PrimaryStats {
            stamina: base.stamina,
            strength: base.strength,
            intellect: base.intellect,
            spirit: base.spirit,
            agility: base.agility,
        }
    }
}

/// Combat stats derived from primary stats and accumulators
///
/// Always recomputed in full; never mutated on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DerivedStats {
    pub hp: f64,
    pub mana: f64,
    pub armor: f64,
    pub melee_attack_power: f64,
    pub ranged_attack_power: f64,
    pub spell_power: f64,
    pub healing_power: f64,
    pub crit: f64,
    pub spell_crit: f64,
    pub mana_regen: f64,
    pub dodge: f64,
    pub parry: f64,
    pub defence: f64,
    pub hit_chance: f64,
}
