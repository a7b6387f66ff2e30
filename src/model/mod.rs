//! Core data models for shalias

mod alias;
mod config;
mod shell;
mod tree;

pub use alias::{Alias, AliasIdentity};
pub use config::{BackupConfig, Config, GroupsConfig, StoreConfig, DEFAULT_SYSTEM_GROUP};
pub use shell::{get_shell_type, ShellType};
pub use tree::TreeNode;
