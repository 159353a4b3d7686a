//! Menu Source Port - Catalog Data Supply
//!
//! Defines where the item definitions come from. The catalog is built
//! once at startup from whatever a `MenuSource` returns.

use crate::domain::catalog::{Catalog, CatalogItem};

/// Trait for menu data providers.
pub trait MenuSource {
  /// Short label for logs (e.g. "config", "static").
  fn name(&self) -> &str;

  /// Item definitions in display order.
  fn load_items(&self) -> anyhow::Result<Vec<CatalogItem>>;

  /// Load and validate the items into a [`Catalog`].
  fn load_catalog(&self) -> anyhow::Result<Catalog> {
    let items = self.load_items()?;
    Catalog::load(items)
      .map_err(|e| anyhow::anyhow!("menu source '{}' rejected: {e}", self.name()))
  }
}
