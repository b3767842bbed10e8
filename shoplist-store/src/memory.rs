use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use shoplist_core::{Item, ItemPatch, ItemRepository};

/// In-memory shopping list, process lifetime only. Items live in a
/// `Vec` behind an async lock; order is insertion order.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-populated with `items`. Each test constructs
    /// its own seeded instance instead of resetting shared state.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait]
impl ItemRepository for MemoryItemStore {
    async fn list(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    async fn append(&self, item: Item) {
        debug!("Appending item: {}", item.name);
        self.items.write().await.push(item);
    }

    async fn find_by_name(&self, name: &str) -> Option<Item> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.name == name)
            .cloned()
    }

    async fn update_by_name(&self, name: &str, patch: &ItemPatch) -> Option<Item> {
        let mut items = self.items.write().await;
        let item = items.iter_mut().find(|item| item.name == name)?;
        item.apply(patch);
        Some(item.clone())
    }

    async fn remove_by_name(&self, name: &str) -> bool {
        let mut items = self.items.write().await;
        match items.iter().position(|item| item.name == name) {
            Some(idx) => {
                items.remove(idx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = MemoryItemStore::new();
        store.append(Item::new("Chocolate", 2.99)).await;
        store.append(Item::new("Soup", 3.49)).await;
        store.append(Item::new("Cheerios", 3.40)).await;

        let names: Vec<String> = store.list().await.into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Chocolate", "Soup", "Cheerios"]);
    }

    #[tokio::test]
    async fn find_returns_first_match() {
        let store = MemoryItemStore::with_items(vec![
            Item::new("Chocolate", 2.99),
            Item::new("Chocolate", 5.00),
        ]);

        let found = store.find_by_name("Chocolate").await.unwrap();
        assert_eq!(found.price, 2.99);
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let store = MemoryItemStore::new();
        assert!(store.find_by_name("Chocolate").await.is_none());
    }

    #[tokio::test]
    async fn update_patches_first_match_in_place() {
        let store = MemoryItemStore::with_items(vec![
            Item::new("Chocolate", 2.99),
            Item::new("Chocolate", 5.00),
        ]);

        let patch = ItemPatch {
            name: None,
            price: Some(3.99),
        };
        let updated = store.update_by_name("Chocolate", &patch).await.unwrap();
        assert_eq!(updated, Item::new("Chocolate", 3.99));

        let items = store.list().await;
        assert_eq!(items[0].price, 3.99);
        assert_eq!(items[1].price, 5.00);
    }

    #[tokio::test]
    async fn update_missing_returns_none() {
        let store = MemoryItemStore::new();
        let patch = ItemPatch::default();
        assert!(store.update_by_name("Chocolate", &patch).await.is_none());
    }

    #[tokio::test]
    async fn remove_deletes_exactly_one_entry() {
        let store = MemoryItemStore::with_items(vec![
            Item::new("Chocolate", 2.99),
            Item::new("Chocolate", 5.00),
        ]);

        assert!(store.remove_by_name("Chocolate").await);
        let items = store.list().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price, 5.00);
    }

    #[tokio::test]
    async fn remove_missing_is_signalled() {
        let store = MemoryItemStore::new();
        assert!(!store.remove_by_name("Chocolate").await);
    }
}
