//! Menu Source Adapters - Catalog Data
//!
//! - Config: `[[menu]]` tables from `config.toml`
//! - Static: built-in house menu used when the config lists none

pub mod config_source;
pub mod static_menu;

pub use config_source::ConfigMenuSource;
pub use static_menu::StaticMenuSource;
