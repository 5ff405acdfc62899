use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::calendar::WeekConvention;
use crate::error::{ReleaseError, Result};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "tasa-version.toml";

/// Represents the complete configuration for tasa-version.
///
/// Every section and field has a default, so a partial file is valid.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub product: ProductConfig,

    #[serde(default)]
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub naming: NamingConfig,
}

fn default_product_name() -> String {
    "tasa".to_string()
}

fn default_display_name() -> String {
    "TASA".to_string()
}

/// Product identity used in artifact names and release titles.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProductConfig {
    /// Artifact prefix, e.g. `tasa` in `tasa-25.07.0-42.exe`
    #[serde(default = "default_product_name")]
    pub name: String,

    #[serde(default = "default_display_name")]
    pub display_name: String,
}

impl Default for ProductConfig {
    fn default() -> Self {
        ProductConfig {
            name: default_product_name(),
            display_name: default_display_name(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct CalendarConfig {
    #[serde(default)]
    pub week_convention: WeekConvention,
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

fn default_short_hash_length() -> usize {
    7
}

/// Naming options for tags and artifacts.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NamingConfig {
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    /// Length of commit ids read from the local repository
    #[serde(default = "default_short_hash_length")]
    pub short_hash_length: usize,

    /// Postfix applied when none is given on the command line
    #[serde(default)]
    pub installer_postfix: Option<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        NamingConfig {
            tag_prefix: default_tag_prefix(),
            short_hash_length: default_short_hash_length(),
            installer_postfix: None,
        }
    }
}

impl Config {
    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if self.product.name.trim().is_empty() {
            return Err(ReleaseError::config("product.name must not be empty"));
        }
        if !(4..=40).contains(&self.naming.short_hash_length) {
            return Err(ReleaseError::config(format!(
                "naming.short_hash_length must be between 4 and 40, got {}",
                self.naming.short_hash_length
            )));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tasa-version.toml` in current directory
/// 3. `.tasa-version.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config = parse_config(&config_str)?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

/// Parse and validate configuration text
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(config_str).map_err(|e| ReleaseError::config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.product.name, "tasa");
        assert_eq!(config.product.display_name, "TASA");
        assert_eq!(config.calendar.week_convention, WeekConvention::Iso);
        assert_eq!(config.naming.tag_prefix, "v");
        assert_eq!(config.naming.short_hash_length, 7);
        assert_eq!(config.naming.installer_postfix, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_section() {
        let config = parse_config("[calendar]\nweek_convention = \"sunday\"\n").unwrap();
        assert_eq!(config.calendar.week_convention, WeekConvention::Sunday);
        assert_eq!(config.product.name, "tasa");
    }

    #[test]
    fn test_unknown_convention_rejected() {
        let err = parse_config("[calendar]\nweek_convention = \"fiscal\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_validate_hash_length() {
        let err = parse_config("[naming]\nshort_hash_length = 2\n").unwrap_err();
        assert!(err.to_string().contains("short_hash_length"));
    }

    #[test]
    fn test_validate_empty_product() {
        assert!(parse_config("[product]\nname = \"  \"\n").is_err());
    }
}
