//! In-memory group store

use super::GroupStore;
use crate::error::Result;
use crate::model::Alias;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryGroupStore {
    groups: Vec<(String, Vec<Alias>)>,
}

impl MemoryGroupStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_groups(groups: Vec<(String, Vec<Alias>)>) -> Self {
        Self { groups }
    }

    pub fn into_groups(self) -> Vec<(String, Vec<Alias>)> {
        self.groups
    }
}

impl GroupStore for MemoryGroupStore {
    fn keys(&self) -> Vec<String> {
        self.groups.iter().map(|(name, _)| name.clone()).collect()
    }

    fn get(&self, key: &str) -> Option<Vec<Alias>> {
        self.groups
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, aliases)| aliases.clone())
    }

    fn update(&mut self, key: &str, value: Vec<Alias>) -> Result<()> {
        match self.groups.iter_mut().find(|(name, _)| name == key) {
            Some((_, aliases)) => *aliases = value,
            None => self.groups.push((key.to_string(), value)),
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.groups.retain(|(name, _)| name != key);
        Ok(())
    }
}
