//! Domain layer - Menu, order state and checkout rules.
//!
//! Pure logic with no I/O and no logging (hexagonal architecture inner
//! ring). Every type here can be constructed and tested in isolation.

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod order;

// Re-export core types for convenience
pub use catalog::{Catalog, CatalogItem, ItemId};
pub use checkout::{CardExpiry, CheckoutError, CheckoutForm, Receipt, ValidCheckout};
pub use error::{CatalogDefect, MenuError};
pub use order::{
    MAX_LINE_QUANTITY, OrderAction, OrderAggregator, OrderLine, OrderSnapshot, SnapshotLine,
};
