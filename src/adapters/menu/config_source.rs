//! Config Menu Source - Items from `config.toml`
//!
//! Maps the `[[menu]]` tables of the loaded configuration onto
//! catalog item definitions, preserving file order.

use crate::config::MenuItemConfig;
use crate::domain::catalog::CatalogItem;
use crate::ports::menu_source::MenuSource;

/// Menu source backed by the `[[menu]]` section of the config.
#[derive(Debug, Clone)]
pub struct ConfigMenuSource {
  items: Vec<MenuItemConfig>,
}

impl ConfigMenuSource {
  /// Create a source from already-validated config entries.
  pub fn new(items: Vec<MenuItemConfig>) -> Self {
    Self { items }
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

impl MenuSource for ConfigMenuSource {
  fn name(&self) -> &str {
    "config"
  }

  fn load_items(&self) -> anyhow::Result<Vec<CatalogItem>> {
    Ok(
      self
        .items
        .iter()
        .map(|item| CatalogItem {
          id: item.id,
          name: item.name.trim().to_string(),
          emoji: item.emoji.clone(),
          price: item.price,
          ingredients: item.ingredients.clone(),
        })
        .collect(),
    )
  }
}
