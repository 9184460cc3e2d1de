//! Per-character item lists and transfers.

use serde::{Deserialize, Serialize};

use crate::store::Store;

/// Tracks the items each character carries.
///
/// Items are plain identifiers. A list keeps insertion order and may hold
/// the same item more than once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryManager {
    inventories: Store<Vec<String>>,
}

impl InventoryManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` to the inventory of `id`, creating the inventory if needed.
    pub fn add_item(&mut self, id: &str, item: impl Into<String>) {
        let item = item.into();
        tracing::debug!(character = id, item = %item, "item added");
        self.inventories.get_or_insert_with(id, Vec::new).push(item);
    }

    /// Remove the first occurrence of `item` from the inventory of `id`.
    ///
    /// Returns `false` when there was nothing to remove.
    pub fn remove_item(&mut self, id: &str, item: &str) -> bool {
        let Some(items) = self.inventories.get_mut(id) else {
            return false;
        };
        match items.iter().position(|i| i == item) {
            Some(pos) => {
                items.remove(pos);
                tracing::debug!(character = id, item, "item removed");
                true
            }
            None => false,
        }
    }

    /// Move one `item` from `from` to `to`.
    ///
    /// Does nothing and returns `false` when `from` does not hold the item.
    pub fn transfer_item(&mut self, from: &str, to: &str, item: &str) -> bool {
        if !self.remove_item(from, item) {
            return false;
        }
        self.add_item(to, item);
        tracing::debug!(from, to, item, "item transferred");
        true
    }

    /// The items held by `id`, empty if it has no inventory.
    pub fn list_inventory(&self, id: &str) -> &[String] {
        self.inventories.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `id` holds at least one `item`.
    pub fn has_item(&self, id: &str, item: &str) -> bool {
        self.list_inventory(id).iter().any(|i| i == item)
    }

    /// Number of characters with an inventory.
    pub fn len(&self) -> usize {
        self.inventories.len()
    }

    /// Whether no inventories exist.
    pub fn is_empty(&self) -> bool {
        self.inventories.is_empty()
    }
}
