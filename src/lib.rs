//! shalias - Shell Alias Manager
//!
//! Manages `alias` lines living in a shell rc file, plus the things an rc
//! file cannot hold: user-defined groups, usage counts and descriptions.
//!
//! # Features
//!
//! - Scan an rc file for `alias name='command'` lines, leaving every other line alone
//! - Add, delete and rename aliases with minimal, in-place file edits
//! - Keep a "system" group mirroring the file, and user groups holding copies
//! - Propagate renames, descriptions and run counts to every group holding an alias
//! - Build `unalias` commands for the live shell
//! - Automatic backups before every file write

pub mod backup;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod group;
pub mod model;
pub mod parser;
pub mod reconciler;
pub mod store;
pub mod utils;

pub use error::{AliasError, Result};
pub use group::{GroupStore, MemoryGroupStore, TomlGroupStore};
pub use model::{Alias, AliasIdentity, Config, ShellType, TreeNode};
pub use parser::{resolve, scan};
pub use reconciler::AliasManager;
pub use store::AliasFile;
