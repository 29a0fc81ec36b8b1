//! Shopping list entity.
//!
//! Items are kept in insertion order and addressed by ids of the form
//! `item-<n>`. The counter behind `n` only moves forward, so an id is never handed
//! out twice for the lifetime of a list, even after the item holding it is deleted.

use super::error::{RecipeBoxError, Result};
use serde::{Deserialize, Serialize};

/// One purchasable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Unique, stable item id.
    pub id: String,
    /// Amount to buy.
    pub count: f64,
    /// Short unit name, possibly empty.
    pub unit: String,
    /// What to buy.
    pub ingredient: String,
}

/// The shopping list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    items: Vec<ListItem>,
    next_id: u64,
}

impl ShoppingList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item under a fresh id and returns a copy of it.
    pub fn add_item(&mut self, count: f64, unit: impl Into<String>, ingredient: impl Into<String>) -> ListItem {
        self.next_id += 1;
        let item = ListItem {
            id: format!("item-{}", self.next_id),
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        };
        self.items.push(item.clone());
        item
    }

    /// Removes the item with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeBoxError::NotFound`] if no item has that id; the list is unchanged.
    pub fn delete_item(&mut self, id: &str) -> Result<ListItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| RecipeBoxError::NotFound(id.to_string()))?;
        Ok(self.items.remove(index))
    }

    /// Overwrites the count of the item with `id`, leaving its other fields alone.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeBoxError::NotFound`] if no item has that id.
    pub fn update_count(&mut self, id: &str, count: f64) -> Result<()> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| RecipeBoxError::NotFound(id.to_string()))?;
        item.count = count;
        Ok(())
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_never_reused() {
        let mut list = ShoppingList::new();
        let first = list.add_item(1.0, "cup", "flour");
        let second = list.add_item(2.0, "", "eggs");
        list.delete_item(&second.id).unwrap();
        let third = list.add_item(3.0, "tsp", "salt");

        assert_ne!(first.id, second.id);
        assert_ne!(third.id, second.id);
        assert_ne!(third.id, first.id);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_delete_twice_is_not_found_and_harmless() {
        let mut list = ShoppingList::new();
        let keep = list.add_item(1.0, "cup", "flour");
        let gone = list.add_item(2.0, "", "eggs");

        assert!(list.delete_item(&gone.id).is_ok());
        assert!(matches!(list.delete_item(&gone.id), Err(RecipeBoxError::NotFound(_))));
        assert_eq!(list.items(), &[keep]);
    }

    #[test]
    fn test_update_count_only_touches_count() {
        let mut list = ShoppingList::new();
        let flour = list.add_item(1.0, "cup", "flour");
        let eggs = list.add_item(2.0, "", "eggs");

        list.update_count(&flour.id, 2.5).unwrap();

        let updated = list.get(&flour.id).unwrap();
        assert_eq!(updated.count, 2.5);
        assert_eq!(updated.unit, "cup");
        assert_eq!(updated.ingredient, "flour");
        assert_eq!(list.get(&eggs.id), Some(&eggs));
    }

    #[test]
    fn test_update_unknown_id() {
        let mut list = ShoppingList::new();
        list.add_item(1.0, "cup", "flour");
        assert!(list.update_count("item-99", 4.0).is_err());
        assert_eq!(list.items()[0].count, 1.0);
    }
}
