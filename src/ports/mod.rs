//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the use-case layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `MenuSource`: Item definitions used to build the catalog
//! - `OrderView`: Rendering of menu, order summary and checkout

pub mod menu_source;
pub mod order_view;
