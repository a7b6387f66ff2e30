//! # Group Store
//!
//! Named, ordered alias collections persisted outside the alias file.
//!
//! [`GroupStore`] is the storage contract: a durable key/value map where a
//! key is a group name and a value is the group's alias sequence. Keys keep
//! insertion order. There are no multi-key transactions; every `update` or
//! `remove` stands alone.
//!
//! | Backend | Persistence |
//! |---------|-------------|
//! | [`MemoryGroupStore`] | none, process lifetime |
//! | [`TomlGroupStore`] | TOML file rewritten on each change |

mod memory;
mod toml_store;

pub use memory::MemoryGroupStore;
pub use toml_store::TomlGroupStore;

use crate::error::Result;
use crate::model::Alias;

/// Key/value storage for groups
pub trait GroupStore {
    /// Existing group names in insertion order
    fn keys(&self) -> Vec<String>;

    /// Aliases of `key`, `None` when the group does not exist
    fn get(&self, key: &str) -> Option<Vec<Alias>>;

    /// Create or overwrite `key`; a new key goes last
    fn update(&mut self, key: &str, value: Vec<Alias>) -> Result<()>;

    /// Remove `key` entirely; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;

    fn list_groups(&self) -> Vec<String> {
        self.keys()
    }

    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Aliases of `name`, empty when the group does not exist
    fn get_group(&self, name: &str) -> Vec<Alias> {
        self.get(name).unwrap_or_default()
    }

    fn set_group(&mut self, name: &str, aliases: Vec<Alias>) -> Result<()> {
        self.update(name, aliases)
    }

    fn delete_group(&mut self, name: &str) -> Result<()> {
        self.remove(name)
    }
}
