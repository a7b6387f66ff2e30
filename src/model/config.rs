//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AliasError, Result};

/// Name of the group mirroring the store file, unless configured otherwise
pub const DEFAULT_SYSTEM_GROUP: &str = "System";

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub groups: GroupsConfig,
    #[serde(default)]
    pub backup: BackupConfig,
}

/// Where the aliases live
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct StoreConfig {
    /// rc file holding the alias lines; the detected shell's rc file when unset
    pub path: Option<String>,
}

/// Where groups are persisted and what the system group is called
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GroupsConfig {
    pub path: Option<String>,
    #[serde(default = "default_system_name")]
    pub system_name: String,
}

fn default_system_name() -> String {
    DEFAULT_SYSTEM_GROUP.to_string()
}

impl Default for GroupsConfig {
    fn default() -> Self {
        GroupsConfig {
            path: None,
            system_name: default_system_name(),
        }
    }
}

/// Backup configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackupConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_max_count")]
    pub max_count: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_count() -> usize {
    20
}

impl Default for BackupConfig {
    fn default() -> Self {
        BackupConfig {
            enabled: true,
            max_count: default_max_count(),
        }
    }
}

impl Config {
    /// Get the shalias configuration directory path
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".config")
            })
            .join("shalias")
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the backups directory path
    pub fn backups_dir() -> PathBuf {
        Self::config_dir().join("backups")
    }

    /// Default location of the persisted groups
    pub fn default_groups_path() -> PathBuf {
        Self::config_dir().join("groups.toml")
    }

    /// Load configuration from file, or return default if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| AliasError::io(path, e))?;
        toml::from_str(&content)
            .map_err(|e| AliasError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| AliasError::Config(e.to_string()))?;
        crate::utils::path::write_file(path, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.store.path.is_none());
        assert_eq!(config.groups.system_name, "System");
        assert!(config.backup.enabled);
        assert_eq!(config.backup.max_count, 20);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str("[store]\npath = \"~/.bash_aliases\"\n").unwrap();
        assert_eq!(config.store.path.as_deref(), Some("~/.bash_aliases"));
        assert_eq!(config.groups.system_name, "System");
        assert_eq!(config.backup.max_count, 20);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.groups.system_name = "rc".into();
        config.backup.enabled = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.groups.system_name, "rc");
        assert!(!loaded.backup.enabled);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.groups.system_name, DEFAULT_SYSTEM_GROUP);
    }
}
