//! Order aggregation.
//!
//! `OrderAggregator` owns one `OrderLine` per catalog item and derives the
//! display-ready `OrderSnapshot` on demand. Quantities are clamped to
//! `0..=MAX_LINE_QUANTITY`; going past either bound is silently ignored.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::{Catalog, CatalogItem, ItemId};
use super::error::MenuError;

/// Upper bound on a single line's quantity (business rule).
pub const MAX_LINE_QUANTITY: u8 = 20;

/// Quantity state for one catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub item_id: ItemId,
    pub quantity: u8,
}

impl OrderLine {
    const fn empty(item_id: ItemId) -> Self {
        Self {
            item_id,
            quantity: 0,
        }
    }

    fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1).min(MAX_LINE_QUANTITY);
    }

    fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1);
    }

    const fn has_items(&self) -> bool {
        self.quantity > 0
    }
}

/// Closed set of order mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderAction {
    Increment(ItemId),
    Decrement(ItemId),
    Reset,
}

/// One non-empty line of an [`OrderSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotLine {
    pub id: ItemId,
    pub name: String,
    pub emoji: String,
    pub quantity: u8,
    pub unit_price: Decimal,
    /// `unit_price * quantity`
    pub line_total: Decimal,
}

impl SnapshotLine {
    fn from_item(item: &CatalogItem, quantity: u8) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            emoji: item.emoji.clone(),
            quantity,
            unit_price: item.price,
            line_total: item.price * Decimal::from(quantity),
        }
    }
}

/// Read-only view of the current order: non-empty lines in catalog order
/// plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderSnapshot {
    pub lines: Vec<SnapshotLine>,
    pub grand_total: Decimal,
}

impl OrderSnapshot {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| u32::from(l.quantity)).sum()
    }
}

/// Per-item quantity state for a single order.
///
/// Each aggregator is independent; several can share one catalog.
#[derive(Debug, Clone)]
pub struct OrderAggregator {
    catalog: Arc<Catalog>,
    /// Parallel to the catalog's load order.
    lines: Vec<OrderLine>,
}

impl OrderAggregator {
    /// Create an empty order with one zero-quantity line per catalog item.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let lines = catalog.all().map(|item| OrderLine::empty(item.id)).collect();
        Self { catalog, lines }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Add one unit of `id`, capped at [`MAX_LINE_QUANTITY`].
    ///
    /// # Errors
    /// `MenuError::NotFound` if `id` is not on the menu.
    pub fn increment(&mut self, id: ItemId) -> Result<(), MenuError> {
        self.line_mut(id)?.increment();
        Ok(())
    }

    /// Remove one unit of `id`; a no-op on an empty line.
    ///
    /// # Errors
    /// `MenuError::NotFound` if `id` is not on the menu.
    pub fn decrement(&mut self, id: ItemId) -> Result<(), MenuError> {
        self.line_mut(id)?.decrement();
        Ok(())
    }

    /// Set every line back to zero.
    pub fn reset(&mut self) {
        for line in &mut self.lines {
            line.quantity = 0;
        }
    }

    /// Dispatch a single [`OrderAction`].
    ///
    /// # Errors
    /// `MenuError::NotFound` for increments/decrements of unknown ids.
    pub fn apply(&mut self, action: OrderAction) -> Result<(), MenuError> {
        match action {
            OrderAction::Increment(id) => self.increment(id),
            OrderAction::Decrement(id) => self.decrement(id),
            OrderAction::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Current quantity of one line.
    ///
    /// # Errors
    /// `MenuError::NotFound` if `id` is not on the menu.
    pub fn quantity(&self, id: ItemId) -> Result<u8, MenuError> {
        let pos = self.catalog.position(id)?;
        Ok(self.lines[pos].quantity)
    }

    pub fn has_any_items(&self) -> bool {
        self.lines.iter().any(OrderLine::has_items)
    }

    /// Compute the current snapshot. Does not modify state.
    pub fn snapshot(&self) -> OrderSnapshot {
        let lines: Vec<SnapshotLine> = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.has_items())
            .map(|(pos, line)| SnapshotLine::from_item(self.catalog.item_at(pos), line.quantity))
            .collect();

        let grand_total = lines.iter().map(|l| l.line_total).sum();

        OrderSnapshot { lines, grand_total }
    }

    fn line_mut(&mut self, id: ItemId) -> Result<&mut OrderLine, MenuError> {
        let pos = self.catalog.position(id)?;
        Ok(&mut self.lines[pos])
    }
}
