//! Menu catalog.
//!
//! The catalog is the fixed, ordered list of purchasable items. It is built
//! once at startup from a list of item definitions and never mutated
//! afterwards; order state refers to items by [`ItemId`].

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::{CatalogDefect, MenuError};

/// Stable identifier of a menu item.
pub type ItemId = u32;

/// A purchasable menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique, stable identifier.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Short symbol shown next to the name.
    pub emoji: String,
    /// Unit price.
    pub price: Decimal,
    /// Ingredients in display order.
    #[serde(default)]
    pub ingredients: Vec<String>,
}

impl CatalogItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        emoji: impl Into<String>,
        price: Decimal,
        ingredients: &[&str],
    ) -> Self {
        Self {
            id,
            name: name.into(),
            emoji: emoji.into(),
            price,
            ingredients: ingredients.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Immutable, ordered collection of menu items with O(1) lookup by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    /// id -> position in `items`.
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Build a catalog from item definitions, keeping their order.
    ///
    /// # Errors
    /// `MenuError::InvalidCatalog` if an id is duplicated, a price is
    /// negative or a name is blank.
    pub fn load(items: Vec<CatalogItem>) -> Result<Self, MenuError> {
        let mut index = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            if item.price < Decimal::ZERO {
                return Err(MenuError::InvalidCatalog(CatalogDefect::NegativePrice {
                    id: item.id,
                    price: item.price,
                }));
            }
            if item.name.trim().is_empty() {
                return Err(MenuError::InvalidCatalog(CatalogDefect::EmptyName(
                    item.id,
                )));
            }
            if index.insert(item.id, position).is_some() {
                return Err(MenuError::InvalidCatalog(CatalogDefect::DuplicateId(
                    item.id,
                )));
            }
        }

        Ok(Self { items, index })
    }

    /// Look up an item by id.
    ///
    /// # Errors
    /// `MenuError::NotFound` if no item has this id.
    pub fn get(&self, id: ItemId) -> Result<&CatalogItem, MenuError> {
        self.position(id).map(|pos| &self.items[pos])
    }

    /// All items in load order. Call again to restart the sequence.
    pub fn all(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of `id` in load order. Order lines are stored by position.
    pub(crate) fn position(&self, id: ItemId) -> Result<usize, MenuError> {
        self.index.get(&id).copied().ok_or(MenuError::NotFound(id))
    }

    pub(crate) fn item_at(&self, position: usize) -> &CatalogItem {
        &self.items[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_items() -> Vec<CatalogItem> {
        vec![
            CatalogItem::new(0, "Pizza", "🍕", dec!(14), &["pepperoni", "mushroom"]),
            CatalogItem::new(1, "Hamburger", "🍔", dec!(8.5), &["beef", "cheese"]),
            CatalogItem::new(2, "Beer", "🍺", dec!(12), &["grain, hops, yeast, water"]),
        ]
    }

    #[test]
    fn test_load_keeps_order() {
        let catalog = Catalog::load(sample_items()).unwrap();
        let names: Vec<&str> = catalog.all().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Pizza", "Hamburger", "Beer"]);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_all_is_restartable() {
        let catalog = Catalog::load(sample_items()).unwrap();
        assert_eq!(catalog.all().count(), 3);
        assert_eq!(catalog.all().count(), 3);
    }

    #[test]
    fn test_get_existing() {
        let catalog = Catalog::load(sample_items()).unwrap();
        let item = catalog.get(1).unwrap();
        assert_eq!(item.name, "Hamburger");
        assert_eq!(item.price, dec!(8.5));
    }

    #[test]
    fn test_get_missing() {
        let catalog = Catalog::load(sample_items()).unwrap();
        assert_eq!(catalog.get(999), Err(MenuError::NotFound(999)));
        assert!(!catalog.contains(999));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut items = sample_items();
        items.push(CatalogItem::new(1, "Other", "🌭", dec!(3), &[]));
        assert_eq!(
            Catalog::load(items).unwrap_err(),
            MenuError::InvalidCatalog(CatalogDefect::DuplicateId(1))
        );
    }

    #[test]
    fn test_negative_price_rejected() {
        let items = vec![CatalogItem::new(7, "Refund", "💸", dec!(-0.01), &[])];
        assert!(matches!(
            Catalog::load(items),
            Err(MenuError::InvalidCatalog(CatalogDefect::NegativePrice { id: 7, .. }))
        ));
    }

    #[test]
    fn test_free_item_allowed() {
        let items = vec![CatalogItem::new(0, "Water", "💧", dec!(0), &[])];
        assert!(Catalog::load(items).is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        let items = vec![CatalogItem::new(4, "  ", "❓", dec!(1), &[])];
        assert_eq!(
            Catalog::load(items).unwrap_err(),
            MenuError::InvalidCatalog(CatalogDefect::EmptyName(4))
        );
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::load(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }
}
