//! Command execution context

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::backup::BackupManager;
use crate::cli::args::Cli;
use crate::config::{resolve_groups_path, resolve_store_path};
use crate::error::AliasError;
use crate::group::TomlGroupStore;
use crate::model::{get_shell_type, AliasIdentity, Config, ShellType};
use crate::reconciler::AliasManager;
use crate::store::AliasFile;

/// Common context for command execution
pub struct Context {
    pub config: Config,
    pub shell_type: ShellType,
    pub store_file: PathBuf,
    pub groups_file: PathBuf,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = crate::config::load_or_create_config()?;
        let shell_type = get_shell_type(cli.shell.map(|s| s.into()), cli.file.as_deref());
        let store_file = resolve_store_path(&config, cli.file.as_deref(), shell_type);
        let groups_file = resolve_groups_path(&config, cli.groups.as_deref());

        log::debug!(
            "store file {} ({}), group file {}",
            store_file.display(),
            shell_type,
            groups_file.display()
        );

        Ok(Self {
            config,
            shell_type,
            store_file,
            groups_file,
        })
    }

    pub fn backup_manager(&self) -> BackupManager {
        BackupManager::new(&self.config)
    }

    /// Build the engine over the configured alias file and group file.
    ///
    /// The system group is refreshed from the file before it is returned.
    pub fn manager(&self) -> Result<AliasManager<TomlGroupStore>> {
        let mut file = AliasFile::new(&self.store_file);
        if self.config.backup.enabled {
            file = file.with_backup(self.backup_manager());
        }
        let groups = TomlGroupStore::open(&self.groups_file)?;
        let mut manager = AliasManager::new(file, groups)
            .with_system_group(self.config.groups.system_name.as_str());
        manager.refresh()?;
        Ok(manager)
    }

    /// Find the one alias `name` refers to, narrowed by `command` if given
    pub fn resolve_identity(
        &self,
        manager: &AliasManager<TomlGroupStore>,
        name: &str,
        command: Option<&str>,
    ) -> Result<AliasIdentity> {
        let mut found = manager.lookup(name, command)?;
        match found.len() {
            0 => Err(AliasError::AliasNotFound {
                name: name.to_string(),
                command: command.unwrap_or("any command").to_string(),
            }
            .into()),
            1 => Ok(found.remove(0).identity()),
            _ => {
                let commands: Vec<String> =
                    found.iter().map(|a| format!("'{}'", a.command)).collect();
                anyhow::bail!(
                    "'{}' names several aliases ({}); pick one with --command",
                    name,
                    commands.join(", ")
                )
            }
        }
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print the command that undoes aliases in shells already running
    pub fn print_unalias_hint(&self, unalias: Option<&str>) {
        if let Some(cmd) = unalias {
            println!(
                "{} {}",
                "→".cyan(),
                format!("Run '{}' in open shells", cmd).dimmed()
            );
        }
    }

    /// Print reload hint after modifying the alias file
    pub fn print_reload_hint(&self) {
        let reload_cmd = format!("source {}", self.store_file.display());
        println!(
            "{} {}",
            "→".cyan(),
            format!("Run '{}' to apply changes", reload_cmd).dimmed()
        );
    }
}
