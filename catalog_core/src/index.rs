use item_core::Item;
use std::collections::HashMap;

/// Immutable in-memory snapshot of the catalog items
///
/// Built once from a bulk fetch, then queried by id and by inventory-type
/// code. Iteration follows the order of the fetch.
#[derive(Debug, Clone, Default)]
pub struct ItemIndex {
    items: Vec<Item>,
    by_id: HashMap<u32, usize>,
    by_inventory_type: HashMap<u8, Vec<usize>>,
}

impl ItemIndex {
    /// Index a bulk fetch; on duplicate ids the first record wins
    pub fn from_items(items: Vec<Item>) -> Self {
        let mut index = ItemIndex::default();
        for item in items {
            if index.by_id.contains_key(&item.id) {
                tracing::warn!(item_id = item.id, "Duplicate item id in catalog fetch, ignored");
                continue;
            }
            let pos = index.items.len();
            index.by_id.insert(item.id, pos);
            index
                .by_inventory_type
                .entry(item.inventory_type)
                .or_default()
                .push(pos);
            index.items.push(item);
        }
        index
    }

    /// Get an item by id
    pub fn get(&self, id: u32) -> Option<&Item> {
        self.by_id.get(&id).map(|&pos| &self.items[pos])
    }

    pub fn contains(&self, id: u32) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Items whose inventory-type code is one of `codes`, in fetch order
    pub fn with_inventory_types(&self, codes: &[u8]) -> Vec<&Item> {
        let mut positions: Vec<usize> = codes
            .iter()
            .filter_map(|code| self.by_inventory_type.get(code))
            .flatten()
            .copied()
            .collect();
        positions.sort_unstable();
        positions.dedup();
        positions.into_iter().map(|pos| &self.items[pos]).collect()
    }
}
