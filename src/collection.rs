//! Item Collections
//!
//! Ordered, id-unique item lists backing the cart and favorites.

use serde::{Deserialize, Deserializer, Serialize};
use crate::models::{Item, ItemId, ItemList};

/// Insertion-ordered list of items with at most one entry per id
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Collection {
    items: Vec<Item>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` unless an item with the same id is already present.
    /// Returns true if the collection changed.
    pub fn insert(&mut self, item: Item) -> bool {
        if self.contains(item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove the item with `id`, keeping the order of the rest.
    /// Returns true if the collection changed.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Item> for Collection {
    /// Later duplicates of an id are dropped; the first occurrence wins.
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut collection = Collection::new();
        for item in iter {
            collection.insert(item);
        }
        collection
    }
}

impl From<Vec<Item>> for Collection {
    fn from(items: Vec<Item>) -> Self {
        items.into_iter().collect()
    }
}

impl IntoIterator for Collection {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// Snapshots and remote payloads come from outside, so dedup on the way in
impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ItemList::deserialize(deserializer).map(|ItemList(items)| Collection::from(items))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::Category;

    pub(crate) fn aircraft(id: ItemId, name: &str, price: f64, category: Category) -> Item {
        Item {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
            price,
            img: format!("/img/{}.png", id),
            category,
        }
    }

    fn ids(collection: &Collection) -> Vec<ItemId> {
        collection.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut c = Collection::new();
        assert!(c.insert(aircraft(3, "Su-27", 1.0, Category::Interceptor)));
        assert!(c.insert(aircraft(1, "F-16", 2.0, Category::MultiRole)));
        assert!(c.insert(aircraft(2, "C-130", 3.0, Category::MilitaryTransport)));
        assert_eq!(ids(&c), vec![3, 1, 2]);
    }

    #[test]
    fn test_insert_duplicate_is_noop() {
        let mut c = Collection::new();
        let item = aircraft(1, "F-16", 2.0, Category::MultiRole);
        assert!(c.insert(item.clone()));
        let once = c.clone();

        assert!(!c.insert(item));
        assert_eq!(c, once);

        // Same id with different fields is still a duplicate
        assert!(!c.insert(aircraft(1, "Other", 9.0, Category::Interceptor)));
        assert_eq!(c.len(), 1);
        assert_eq!(c.get(1).unwrap().name, "F-16");
    }

    #[test]
    fn test_no_duplicates_after_many_inserts() {
        let mut c = Collection::new();
        for round in 0..3 {
            for id in [5, 2, 5, 9, 2, 1] {
                c.insert(aircraft(id, &format!("jet-{}-{}", id, round), 1.0, Category::MultiRole));
            }
        }
        assert_eq!(ids(&c), vec![5, 2, 9, 1]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut c: Collection = (1..=4)
            .map(|id| aircraft(id, "jet", 1.0, Category::MultiRole))
            .collect();
        assert!(c.remove(2));
        assert_eq!(ids(&c), vec![1, 3, 4]);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut c: Collection = (1..=3)
            .map(|id| aircraft(id, "jet", 1.0, Category::MultiRole))
            .collect();
        let before = c.clone();
        assert!(!c.remove(42));
        assert_eq!(c, before);
    }

    #[test]
    fn test_deserialize_drops_duplicate_ids() {
        let items = vec![
            aircraft(1, "first", 1.0, Category::MultiRole),
            aircraft(2, "second", 1.0, Category::MultiRole),
            aircraft(1, "again", 1.0, Category::MultiRole),
        ];
        let json = serde_json::to_string(&items).unwrap();
        let c: Collection = serde_json::from_str(&json).unwrap();
        assert_eq!(ids(&c), vec![1, 2]);
        assert_eq!(c.get(1).unwrap().name, "first");
    }

    #[test]
    fn test_deserialize_skips_negative_prices() {
        use crate::selectors::cart_total;

        let json = r#"[
            {"id":1,"name":"a","description":"","price":-50.0,"img":"","category":"Interceptor"},
            {"id":2,"name":"b","description":"","price":10.0,"img":"","category":"Interceptor"}
        ]"#;
        let c: Collection = serde_json::from_str(json).unwrap();
        assert_eq!(ids(&c), vec![2]);
        assert_eq!(cart_total(&c), 10.0);
    }
}
