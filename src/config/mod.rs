//! Configuration Module - TOML-based Widget Configuration
//!
//! Loads and validates configuration from `config.toml`.
//! The menu itself lives here as `[[menu]]` tables so prices and
//! items can change without touching the code.

pub mod loader;

use rust_decimal::Decimal;
use serde::Deserialize;

/// Top-level configuration.
///
/// Loaded from `config.toml` at startup and validated before the
/// session begins.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// Application identity and logging.
  pub app: AppSection,
  /// Menu item definitions, in display order.
  #[serde(default)]
  pub menu: Vec<MenuItemConfig>,
}

/// Application identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
  /// Restaurant name shown in the banner.
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Emit logs as JSON lines instead of human-readable text.
  #[serde(default)]
  pub json_logs: bool,
}

/// Individual menu item definition.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemConfig {
  /// Stable item id.
  pub id: u32,
  /// Display name.
  pub name: String,
  /// Symbol shown next to the name.
  #[serde(default)]
  pub emoji: String,
  /// Unit price.
  pub price: Decimal,
  /// Ingredients in display order.
  #[serde(default)]
  pub ingredients: Vec<String>,
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}
