//! Group store persisted as a TOML file
//!
//! ```toml
//! [[group]]
//! name = "git"
//!
//! [[group.alias]]
//! alias_name = "gs"
//! command = "git status"
//! frequency = 4
//! description = "short status"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{GroupStore, MemoryGroupStore};
use crate::error::{AliasError, Result};
use crate::model::Alias;
use crate::utils::path::{read_file_or_empty, write_file};

#[derive(Debug, Default, Serialize, Deserialize)]
struct GroupFile {
    #[serde(default, rename = "group")]
    groups: Vec<GroupRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GroupRecord {
    name: String,
    #[serde(default, rename = "alias")]
    aliases: Vec<Alias>,
}

/// Group store backed by a TOML file, rewritten on every change
#[derive(Debug)]
pub struct TomlGroupStore {
    path: PathBuf,
    inner: MemoryGroupStore,
}

impl TomlGroupStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = read_file_or_empty(&path)?;
        let file: GroupFile = toml::from_str(&content)
            .map_err(|e| AliasError::GroupStore(format!("{}: {}", path.display(), e)))?;

        let inner = MemoryGroupStore::from_groups(
            file.groups
                .into_iter()
                .map(|record| (record.name, record.aliases))
                .collect(),
        );
        log::debug!("loaded {} group(s) from {}", inner.keys().len(), path.display());

        Ok(Self { path, inner })
    }

    fn save(&self, next: &MemoryGroupStore) -> Result<()> {
        let file = GroupFile {
            groups: next
                .clone()
                .into_groups()
                .into_iter()
                .map(|(name, aliases)| GroupRecord { name, aliases })
                .collect(),
        };
        let content =
            toml::to_string_pretty(&file).map_err(|e| AliasError::GroupStore(e.to_string()))?;
        write_file(&self.path, &content)
    }
}

impl GroupStore for TomlGroupStore {
    fn keys(&self) -> Vec<String> {
        self.inner.keys()
    }

    fn get(&self, key: &str) -> Option<Vec<Alias>> {
        self.inner.get(key)
    }

    // The in-memory view only changes once the file write succeeded.
    fn update(&mut self, key: &str, value: Vec<Alias>) -> Result<()> {
        let mut next = self.inner.clone();
        next.update(key, value)?;
        self.save(&next)?;
        self.inner = next;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.inner.contains(key) {
            return Ok(());
        }
        let mut next = self.inner.clone();
        next.remove(key)?;
        self.save(&next)?;
        self.inner = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = TomlGroupStore::open(dir.path().join("groups.toml")).unwrap();
        assert!(store.keys().is_empty());
    }

    #[test]
    fn test_persist_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("groups.toml");

        let mut store = TomlGroupStore::open(&path).unwrap();
        store
            .update(
                "System",
                vec![Alias::new("ll", "ls -la").with_frequency(3)],
            )
            .unwrap();
        store
            .update(
                "git",
                vec![Alias::new("gs", "git status").with_description("short status")],
            )
            .unwrap();
        store.update("empty", vec![]).unwrap();

        let reloaded = TomlGroupStore::open(&path).unwrap();
        assert_eq!(reloaded.keys(), vec!["System", "git", "empty"]);
        assert_eq!(reloaded.get_group("System")[0].frequency, 3);
        assert_eq!(reloaded.get_group("git")[0].description, "short status");
        assert!(reloaded.get("empty").unwrap().is_empty());
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("groups.toml");

        let mut store = TomlGroupStore::open(&path).unwrap();
        store.update("a", vec![]).unwrap();
        store.update("b", vec![]).unwrap();
        store.remove("a").unwrap();

        assert_eq!(TomlGroupStore::open(&path).unwrap().keys(), vec!["b"]);
    }

    #[test]
    fn test_missing_frequency_defaults_to_zero() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("groups.toml");
        std::fs::write(
            &path,
            "[[group]]\nname = \"old\"\n\n[[group.alias]]\nalias_name = \"x\"\ncommand = \"y\"\n",
        )
        .unwrap();

        let store = TomlGroupStore::open(&path).unwrap();
        let aliases = store.get_group("old");
        assert_eq!(aliases[0].frequency, 0);
        assert_eq!(aliases[0].description, "");
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("groups.toml");
        std::fs::write(&path, "[[group]\nname=").unwrap();

        assert!(matches!(
            TomlGroupStore::open(&path),
            Err(AliasError::GroupStore(_))
        ));
    }
}
