use async_trait::async_trait;

use crate::item::{Item, ItemPatch};

/// Repository trait for shopping list access. The store is ordered:
/// `list` returns items in insertion order, and all name-keyed
/// operations act on the first exact match.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Returns every item in insertion order. Never fails.
    async fn list(&self) -> Vec<Item>;

    /// Appends an item to the end of the list. No uniqueness check.
    async fn append(&self, item: Item);

    /// Returns a copy of the first item with the given name.
    async fn find_by_name(&self, name: &str) -> Option<Item>;

    /// Patches the first item with the given name in place and returns
    /// the updated item, or `None` when no item matches.
    async fn update_by_name(&self, name: &str, patch: &ItemPatch) -> Option<Item>;

    /// Removes the first item with the given name. Returns whether a
    /// match was removed.
    async fn remove_by_name(&self, name: &str) -> bool;
}
