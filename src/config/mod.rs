//! Configuration management module

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::{Config, ShellType};
use crate::utils::path::expand_tilde;

/// Load the configuration, writing the defaults on first run
pub fn load_or_create_config() -> Result<Config> {
    let config_path = Config::config_path();

    if config_path.exists() {
        Config::load()
    } else {
        let config = Config::default();
        config.save()?;
        log::debug!("wrote default config to {}", config_path.display());
        Ok(config)
    }
}

/// Alias file to work on: explicit override > config > the shell's rc file
pub fn resolve_store_path(
    config: &Config,
    override_path: Option<&Path>,
    shell_type: ShellType,
) -> PathBuf {
    if let Some(path) = override_path {
        return path.to_path_buf();
    }
    config
        .store
        .path
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(|| shell_type.default_config_path())
}

/// Group file to use: explicit override > config > `<config_dir>/groups.toml`
pub fn resolve_groups_path(config: &Config, override_path: Option<&Path>) -> PathBuf {
    if let Some(path) = override_path {
        return path.to_path_buf();
    }
    config
        .groups
        .path
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::default_groups_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let mut config = Config::default();
        config.store.path = Some("/etc/aliases".into());
        let path = resolve_store_path(&config, Some(Path::new("/tmp/rc")), ShellType::Bash);
        assert_eq!(path, PathBuf::from("/tmp/rc"));
    }

    #[test]
    fn test_config_path_used() {
        let mut config = Config::default();
        config.store.path = Some("/etc/aliases".into());
        config.groups.path = Some("/etc/groups.toml".into());
        assert_eq!(
            resolve_store_path(&config, None, ShellType::Zsh),
            PathBuf::from("/etc/aliases")
        );
        assert_eq!(
            resolve_groups_path(&config, None),
            PathBuf::from("/etc/groups.toml")
        );
    }

    #[test]
    fn test_shell_default() {
        let path = resolve_store_path(&Config::default(), None, ShellType::Zsh);
        assert!(path.to_string_lossy().ends_with(".zshrc"));
        assert!(resolve_groups_path(&Config::default(), None)
            .to_string_lossy()
            .ends_with("groups.toml"));
    }
}
