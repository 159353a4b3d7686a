//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::info;

use super::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config = parse_config(&content)?;

  info!(
    name = %config.app.name,
    menu_items = config.menu.len(),
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse and validate configuration from TOML text.
///
/// # Errors
/// Fails on malformed TOML or any validation rule violation.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig =
    toml::from_str(content).with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-empty application name
/// - Known log level
/// - Named, non-negative menu items
///
/// Duplicate ids are left to `Catalog::load`, which reports them with
/// the offending id.
fn validate_config(config: &AppConfig) -> Result<()> {
  anyhow::ensure!(
    !config.app.name.trim().is_empty(),
    "app.name must not be empty"
  );
  anyhow::ensure!(
    LOG_LEVELS.contains(&config.app.log_level.to_ascii_lowercase().as_str()),
    "app.log_level must be one of {:?}, got {}",
    LOG_LEVELS,
    config.app.log_level
  );

  for (i, item) in config.menu.iter().enumerate() {
    anyhow::ensure!(
      !item.name.trim().is_empty(),
      "Menu item {} (id {}) has empty name",
      i,
      item.id
    );
    anyhow::ensure!(
      item.price >= Decimal::ZERO,
      "Menu item {} ({}) has negative price {}",
      i,
      item.name,
      item.price
    );
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  const SAMPLE: &str = r#"
[app]
name = "Jimmy's Diner"

[[menu]]
id = 0
name = "Pizza"
emoji = "🍕"
price = 14
ingredients = ["pepperoni", "mushrom", "mozarella"]

[[menu]]
id = 1
name = "Hamburger"
emoji = "🍔"
price = 8.5
ingredients = ["beef", "cheese", "lettuce"]
"#;

  #[test]
  fn test_load_nonexistent_file() {
    let result = load_config("nonexistent.toml");
    assert!(result.is_err());
  }

  #[test]
  fn test_parse_sample() {
    let config = parse_config(SAMPLE).unwrap();
    assert_eq!(config.app.name, "Jimmy's Diner");
    assert_eq!(config.app.log_level, "info");
    assert!(!config.app.json_logs);
    assert_eq!(config.menu.len(), 2);
    assert_eq!(config.menu[1].price, dec!(8.5));
    assert_eq!(config.menu[0].ingredients.len(), 3);
  }

  #[test]
  fn test_menu_is_optional() {
    let config = parse_config("[app]\nname = \"Diner\"\n").unwrap();
    assert!(config.menu.is_empty());
  }

  #[test]
  fn test_negative_price_rejected() {
    let toml = "[app]\nname = \"Diner\"\n[[menu]]\nid = 0\nname = \"Tea\"\nprice = -1\n";
    let err = parse_config(toml).unwrap_err();
    assert!(err.to_string().contains("negative price"));
  }

  #[test]
  fn test_unknown_log_level_rejected() {
    let toml = "[app]\nname = \"Diner\"\nlog_level = \"loud\"\n";
    assert!(parse_config(toml).is_err());
  }

  #[test]
  fn test_empty_name_rejected() {
    assert!(parse_config("[app]\nname = \" \"\n").is_err());
  }
}
