//! Domain error taxonomy.
//!
//! Both conditions are local and recoverable: they are reported to the
//! caller, never panicked on. Quantity overflow is not an error (clamped).

use rust_decimal::Decimal;

use super::catalog::ItemId;

/// Reason a list of item definitions was rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogDefect {
    /// The same identifier appears more than once.
    DuplicateId(ItemId),
    /// An item carries a price below zero.
    NegativePrice { id: ItemId, price: Decimal },
    /// An item has an empty (or whitespace-only) display name.
    EmptyName(ItemId),
}

impl std::fmt::Display for CatalogDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate item id {id}"),
            Self::NegativePrice { id, price } => {
                write!(f, "item {id} has negative price {price}")
            }
            Self::EmptyName(id) => write!(f, "item {id} has an empty name"),
        }
    }
}

/// Errors raised by the catalog and the order aggregator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("Menu item {0} not found")]
    NotFound(ItemId),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(CatalogDefect),
}
