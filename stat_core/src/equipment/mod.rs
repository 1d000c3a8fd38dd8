//! Equipment ledger - which item occupies each slot

mod contribution;
mod slot;

pub use contribution::Direction;
pub use slot::Slot;

use item_core::GameKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Slot to item id mapping; every slot is always present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    slots: BTreeMap<Slot, Option<u32>>,
}

impl Default for Equipment {
    fn default() -> Self {
        Self::new()
    }
}

impl Equipment {
    /// A ledger with every slot empty
    pub fn new() -> Self {
        Equipment {
            slots: Slot::all().iter().map(|slot| (*slot, None)).collect(),
        }
    }

    /// Item id in a slot
    pub fn get(&self, slot: Slot) -> Option<u32> {
        self.slots.get(&slot).copied().flatten()
    }

    pub fn is_occupied(&self, slot: Slot) -> bool {
        self.get(slot).is_some()
    }

    /// Record an item in a slot, returning the previous occupant
    pub(crate) fn set(&mut self, slot: Slot, item_id: u32) -> Option<u32> {
        self.slots.insert(slot, Some(item_id)).flatten()
    }

    /// Empty a slot, returning its occupant
    pub(crate) fn clear(&mut self, slot: Slot) -> Option<u32> {
        self.slots.insert(slot, None).flatten()
    }

    /// Slot an item with `inventory_type` goes to
    ///
    /// For a dual-slot pair the free partner is chosen when the primary
    /// slot is occupied; otherwise the primary slot is used, displacing
    /// its occupant.
    pub fn target_slot(&self, inventory_type: u8) -> Option<Slot> {
        let slot = Slot::for_inventory_type(inventory_type)?;
        if let Some(partner) = slot.partner() {
            if self.is_occupied(slot) && !self.is_occupied(partner) {
                return Some(partner);
            }
        }
        Some(slot)
    }

    /// Empty slots in slot order
    pub fn empty_slots(&self) -> Vec<Slot> {
        self.slots
            .iter()
            .filter(|(_, id)| id.is_none())
            .map(|(slot, _)| *slot)
            .collect()
    }

    /// Occupied (slot, item id) pairs in slot order
    pub fn occupied(&self) -> impl Iterator<Item = (Slot, u32)> + '_ {
        self.slots
            .iter()
            .filter_map(|(slot, id)| id.map(|id| (*slot, id)))
    }
}
