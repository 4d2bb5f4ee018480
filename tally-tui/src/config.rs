use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyConfig {
    /// Load the demo projects and entries on startup.
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
    /// Number of entries shown under "Recent Entries" on the dashboard.
    #[serde(default = "default_recent_entries_limit")]
    pub recent_entries_limit: usize,
    /// Log filter used when RUST_LOG is not set, e.g. "info" or "tally_core=debug".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_seed_demo_data() -> bool {
    true
}

fn default_recent_entries_limit() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed_demo_data(),
            recent_entries_limit: default_recent_entries_limit(),
            log_level: default_log_level(),
        }
    }
}

impl TallyConfig {
    fn config_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("tally"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("tally.log"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }

    /// Write the default config if none exists yet and return its path.
    pub fn ensure_exists() -> Result<PathBuf> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::default().save()?;
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = TallyConfig::from_toml("recent_entries_limit = 10").unwrap();
        assert_eq!(config.recent_entries_limit, 10);
        assert!(config.seed_demo_data);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn empty_file_is_the_default_config() {
        assert_eq!(TallyConfig::from_toml("").unwrap(), TallyConfig::default());
    }

    #[test]
    fn default_config_survives_toml() {
        let raw = toml::to_string_pretty(&TallyConfig::default()).unwrap();
        assert_eq!(TallyConfig::from_toml(&raw).unwrap(), TallyConfig::default());
    }

    #[test]
    fn wrong_types_are_rejected() {
        assert!(TallyConfig::from_toml("seed_demo_data = \"yes\"").is_err());
    }
}
