use serde::{Deserialize, Serialize};

/// A shopping list entry. `name` is the lookup key; the store does not
/// enforce uniqueness, so name-keyed operations act on the first match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Applies a partial update. Empty names and zero prices count as
    /// "not provided" and leave the current value in place.
    pub fn apply(&mut self, patch: &ItemPatch) {
        if let Some(name) = patch.name.as_deref() {
            if !name.is_empty() {
                self.name = name.to_string();
            }
        }
        if let Some(price) = patch.price {
            if price != 0.0 {
                self.price = price;
            }
        }
    }
}

/// Partial update payload for an item. Fields left out (or JSON null)
/// deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_updates_name_only() {
        let mut item = Item::new("Chocolate", 2.99);
        item.apply(&ItemPatch {
            name: Some("ChocolateIceCream".to_string()),
            price: None,
        });
        assert_eq!(item, Item::new("ChocolateIceCream", 2.99));
    }

    #[test]
    fn apply_updates_price_only() {
        let mut item = Item::new("Chocolate", 2.99);
        item.apply(&ItemPatch {
            name: None,
            price: Some(3.99),
        });
        assert_eq!(item, Item::new("Chocolate", 3.99));
    }

    #[test]
    fn apply_updates_both_fields() {
        let mut item = Item::new("Chocolate", 2.99);
        item.apply(&ItemPatch {
            name: Some("ChocolateBar".to_string()),
            price: Some(4.99),
        });
        assert_eq!(item, Item::new("ChocolateBar", 4.99));
    }

    #[test]
    fn apply_skips_empty_name() {
        let mut item = Item::new("Chocolate", 2.99);
        item.apply(&ItemPatch {
            name: Some(String::new()),
            price: None,
        });
        assert_eq!(item.name, "Chocolate");
    }

    #[test]
    fn apply_skips_zero_price() {
        let mut item = Item::new("Chocolate", 2.99);
        item.apply(&ItemPatch {
            name: None,
            price: Some(0.0),
        });
        assert_eq!(item.price, 2.99);
    }

    #[test]
    fn patch_deserializes_missing_fields_as_none() {
        let patch: ItemPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.name.is_none());
        assert!(patch.price.is_none());
    }
}
