//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shalias")]
#[command(about = "Shell alias manager - aliases in your rc file, groups and notes on the side")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Alias file to manage (defaults to the shell's rc file)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Group file to use (defaults to the config directory)
    #[arg(long, global = true)]
    pub groups: Option<PathBuf>,

    /// Shell type
    #[arg(short, long, global = true)]
    pub shell: Option<ShellArg>,

    /// Verbose logging (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List groups and their aliases
    #[command(visible_alias = "ls")]
    List {
        /// Only show this group
        group: Option<String>,
    },

    /// Add an alias: `alias NAME='COMMAND'` (the leading `alias` may be omitted)
    Add {
        /// Alias statement
        statement: String,
    },

    /// Remove an alias from the file and from every group
    #[command(visible_alias = "rm")]
    Remove {
        /// Alias name
        name: String,
        /// Command of the alias, when several share the name
        #[arg(short, long)]
        command: Option<String>,
    },

    /// Remove every alias from the file
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Rename an alias
    #[command(visible_alias = "mv")]
    Rename {
        /// Current alias name
        name: String,
        /// New alias name
        new_name: String,
        /// Command of the alias, when several share the name
        #[arg(short, long)]
        command: Option<String>,
    },

    /// Change the command an alias expands to
    Recommand {
        /// Alias name
        name: String,
        /// New command
        new_command: String,
        /// Current command, when several aliases share the name
        #[arg(short, long)]
        command: Option<String>,
    },

    /// Count one use of an alias and print what to type
    Run {
        /// Alias name
        name: String,
        /// Group the alias is run from (defaults to the system group)
        #[arg(short, long)]
        group: Option<String>,
        /// Command of the alias, when several share the name
        #[arg(short, long)]
        command: Option<String>,
    },

    /// Print the alias statement
    #[command(visible_alias = "cp")]
    Copy {
        /// Alias name
        name: String,
        /// Command of the alias, when several share the name
        #[arg(short, long)]
        command: Option<String>,
    },

    /// Print every alias statement of a group
    CopyGroup {
        /// Group name
        group: String,
    },

    /// Set the description of an alias
    Describe {
        /// Alias name
        name: String,
        /// Description text (empty clears it)
        text: String,
        /// Command of the alias, when several share the name
        #[arg(short, long)]
        command: Option<String>,
    },

    /// Group management
    #[command(visible_alias = "g")]
    Group {
        #[command(subcommand)]
        group_command: GroupCommands,
    },

    /// Check the alias file and groups for problems
    Check,

    /// Backup management
    Backup {
        #[command(subcommand)]
        backup_command: BackupCommands,
    },
}

#[derive(Subcommand)]
pub enum GroupCommands {
    /// Create an empty group
    New {
        /// Group name
        name: String,
    },
    /// Rename a group
    Rename {
        /// Current group name
        old_name: String,
        /// New group name
        new_name: String,
    },
    /// Delete a group (aliases stay in the file)
    #[command(visible_alias = "rm")]
    Delete {
        /// Group name
        name: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Copy an alias into a group
    Add {
        /// Alias name
        name: String,
        /// Target group
        target: String,
        /// Group the alias is copied from (defaults to the system group)
        #[arg(long)]
        from: Option<String>,
        /// Command of the alias, when several share the name
        #[arg(short, long)]
        command: Option<String>,
    },
    /// Remove an alias from a group
    Remove {
        /// Group name
        group: String,
        /// Alias name
        name: String,
        /// Command of the alias, when several share the name
        #[arg(short, long)]
        command: Option<String>,
    },
    /// Sort a group
    Sort {
        /// Group name
        group: String,
        /// Sort key
        #[arg(long, value_enum, default_value = "alpha")]
        by: SortKey,
    },
}

#[derive(Subcommand)]
pub enum BackupCommands {
    /// List backups
    List,
    /// Restore backup
    Restore {
        /// Backup ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Clean old backups
    Clean {
        /// Number to keep
        #[arg(long, default_value = "20")]
        keep: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ShellArg {
    Bash,
    Zsh,
}

impl From<ShellArg> for crate::model::ShellType {
    fn from(arg: ShellArg) -> Self {
        match arg {
            ShellArg::Bash => crate::model::ShellType::Bash,
            ShellArg::Zsh => crate::model::ShellType::Zsh,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    #[value(alias = "a")]
    Alpha,
    #[value(alias = "f", alias = "freq")]
    Frequency,
}
