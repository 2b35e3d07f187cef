//! Configuration for drills
//!
//! Read from `config.toml` in the drills config directory
//! (`~/.config/drills/` by default, `$DRILLS_CONFIG_DIR` when set) or from an
//! explicit path. A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bail_invalid;
use crate::error::{DrillsError, Result};

pub use types::{DrillsConfig, GraphConfig, KnapsackConfig, TradingConfig};

const CONFIG_DIR: &str = "drills";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "DRILLS_CONFIG_DIR";

impl DrillsConfig {
    /// Default config file location
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    DrillsError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from the default location
    pub fn load_default() -> Result<Self> {
        Self::load(&Self::default_path()?)
    }

    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| DrillsError::FailedOperation {
            operation: format!("read config from {}", path.display()),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| DrillsError::FailedOperation {
            operation: format!("parse config from {}", path.display()),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path when given, otherwise the default location
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::load_default(),
        }
    }

    /// Graph file delimiter as a single character
    pub fn delimiter(&self) -> char {
        self.graph.delimiter.chars().next().unwrap_or('/')
    }

    fn validate(&self) -> Result<()> {
        if self.graph.delimiter.chars().count() != 1 {
            bail_invalid!("graph.delimiter", format!("{:?}", self.graph.delimiter));
        }
        if !(self.knapsack.capacity.is_finite() && self.knapsack.capacity >= 0.0) {
            bail_invalid!("knapsack.capacity", self.knapsack.capacity);
        }
        if self.trading.short_window == 0 {
            bail_invalid!("trading.short_window", 0);
        }
        if self.trading.long_window == 0 {
            bail_invalid!("trading.long_window", 0);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knapsack::{Position, SortKey, TeamConstraints};
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = DrillsConfig::default();
        assert_eq!(config.graph.delimiter, "/");
        assert!(!config.graph.directed);
        assert_eq!(config.knapsack.sort_key, SortKey::Density);
        assert_eq!(config.knapsack.to_constraints(), TeamConstraints::default());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = DrillsConfig::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, DrillsConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            concat!(
                "[graph]\ndelimiter = \"|\"\nstart = \"Kevin Bacon\"\n\n",
                "[knapsack]\nsort_key = \"value\"\nforwards = 3\n",
            ),
        )
        .unwrap();

        let config = DrillsConfig::load(&path).unwrap();
        assert_eq!(config.graph.delimiter, "|");
        assert_eq!(config.graph.start.as_deref(), Some("Kevin Bacon"));
        assert_eq!(config.knapsack.sort_key, SortKey::Value);
        assert_eq!(config.knapsack.to_constraints().limit(Position::Forward), 3);
        assert_eq!(config.knapsack.max_players, 11);
        assert_eq!(config.trading, TradingConfig::default());
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[trading]\nshort_window = 0\n").unwrap();
        assert!(matches!(
            DrillsConfig::load(&path),
            Err(DrillsError::InvalidValue { .. })
        ));

        fs::write(&path, "[graph\n").unwrap();
        assert!(matches!(
            DrillsConfig::load(&path),
            Err(DrillsError::FailedOperation { .. })
        ));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = DrillsConfig::default();
        config.trading.starting_cash = 250.0;
        let text = toml::to_string_pretty(&config).unwrap();
        let loaded: DrillsConfig = toml::from_str(&text).unwrap();
        assert_eq!(loaded, config);
    }
}
