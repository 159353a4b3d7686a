//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! data sources and presentation surfaces.
//!
//! Adapter categories:
//! - `menu`: Menu item definitions (config file, built-in menu)
//! - `terminal`: Text rendering and command parsing for the CLI

pub mod menu;
pub mod terminal;
