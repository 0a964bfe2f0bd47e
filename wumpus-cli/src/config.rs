//! Simulation settings, loaded from YAML.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use wumpus_agent::{ScanOrder, Strategy};

/// Settings for one or more episodes. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Field width in cells
    #[serde(default = "default_side")]
    pub width: i32,

    /// Field height in cells
    #[serde(default = "default_side")]
    pub height: i32,

    /// Seed for field generation
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// `local` or `delegated`
    pub strategy: Strategy,

    /// Column order for frontier ties (`x_ascending` or `x_descending`)
    pub scan_order: ScanOrder,

    /// Moves allowed before an episode is cut off
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,
}

fn default_side() -> i32 {
    4
}
fn default_seed() -> u64 {
    1
}
fn default_max_turns() -> u32 {
    500
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: default_side(),
            height: default_side(),
            seed: default_seed(),
            strategy: Strategy::default(),
            scan_order: ScanOrder::default(),
            max_turns: default_max_turns(),
        }
    }
}

impl SimConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes as null, not as an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = SimConfig::from_yaml("width: 8\nstrategy: delegated\n").unwrap();
        assert_eq!(config.width, 8);
        assert_eq!(config.height, 4);
        assert_eq!(config.strategy, Strategy::Delegated);
        assert_eq!(config.scan_order, ScanOrder::XAscending);
        assert_eq!(config.max_turns, 500);
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(SimConfig::from_yaml("").unwrap(), SimConfig::default());
    }

    #[test]
    fn scan_order_uses_snake_case() {
        let config = SimConfig::from_yaml("scan_order: x_descending").unwrap();
        assert_eq!(config.scan_order, ScanOrder::XDescending);
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(SimConfig::from_yaml("strategy: prolog").is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = SimConfig::load(Path::new("/nonexistent/wumpus.yaml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/wumpus.yaml"));
    }
}
