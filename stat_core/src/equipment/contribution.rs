//! Item contribution - how an item's attributes move a character's stats

use crate::character::Character;
use crate::effects::parse_effect;
use item_core::{GameKey, Item, MagicSchool};

/// Whether an item's contribution is applied or reversed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Add,
    Subtract,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Add => 1.0,
            Direction::Subtract => -1.0,
        }
    }
}

impl Character {
    /// Apply or reverse every attribute of `item`, then recompute derived stats
    ///
    /// Primary stat points go to integer totals, so reversing an item
    /// restores them exactly.
    ///
    /// Resistances are assigned rather than summed: adding sets every
    /// school to the item's value, removing sets it to the negated value.
    pub(crate) fn apply_item(&mut self, item: &Item, direction: Direction) {
        let sign = direction.sign();

        for stat in &item.stats {
            let Some(kind) = stat.kind() else {
                if stat.value != 0 {
                    tracing::warn!(
                        item_id = item.id,
                        stat_type = stat.stat_type,
                        "Ignoring unknown stat type"
                    );
                }
                continue;
            };

            let signed = match direction {
                Direction::Add => stat.value,
                Direction::Subtract => -stat.value,
            };
            match self.item_stats.get_mut(kind) {
                Some(total) => *total += signed,
                None => self.accumulators.bonus_hp += signed as f64,
            }
        }

        self.accumulators.base_armor += sign * item.armor as f64;

        for school in MagicSchool::all() {
            let value = item.resistances.get(*school);
            let assigned = match direction {
                Direction::Add => value,
                Direction::Subtract => -value,
            };
            self.resistances.set(*school, assigned);
        }

        for spell in &item.spells {
            let Some(name) = spell.name.as_deref() else {
                continue;
            };
            match parse_effect(name, spell.base_points) {
                Some(bonus) => {
                    *self.accumulators.bonus_mut(bonus.category) += sign * bonus.magnitude as f64;
                }
                None => tracing::trace!(item_id = item.id, effect = name, "Unrecognized effect"),
            }
        }

        self.refresh();
    }
}
