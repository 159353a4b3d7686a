//! Static Menu Source - Built-in House Menu
//!
//! Used when the configuration does not define any menu items.

use rust_decimal_macros::dec;

use crate::domain::catalog::CatalogItem;
use crate::ports::menu_source::MenuSource;

/// The default three-item menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMenuSource;

impl MenuSource for StaticMenuSource {
  fn name(&self) -> &str {
    "static"
  }

  fn load_items(&self) -> anyhow::Result<Vec<CatalogItem>> {
    Ok(vec![
      CatalogItem::new(
        0,
        "Pizza",
        "🍕",
        dec!(14),
        &["pepperoni", "mushroom", "mozzarella"],
      ),
      CatalogItem::new(1, "Hamburger", "🍔", dec!(12), &["beef", "cheese", "lettuce"]),
      CatalogItem::new(2, "Beer", "🍺", dec!(12), &["grain", "hops", "yeast", "water"]),
    ])
  }
}
