//! # Reconciler
//!
//! [`AliasManager`] is the command surface used by front ends. It keeps two
//! views of the aliases consistent:
//!
//! - the alias file, the single source of truth for which aliases exist
//! - the group store, where the *system group* mirrors the file and user
//!   groups hold copies of aliases together with usage counts and notes
//!
//! ## Rules
//!
//! 1. The system group is rebuilt from the file on every [`refresh`](AliasManager::refresh).
//!    Metadata of aliases that survive a refresh is carried over.
//! 2. Edits to "the alias" (rename, new command, description, run count,
//!    delete) reach every group holding the pre-edit identity. Within one
//!    group only the first matching copy is touched.
//! 3. Every precondition is checked before the first write. Propagation
//!    across groups is best effort: a failing group is logged and skipped,
//!    earlier writes stay, and the first failure is returned at the end.

use crate::error::{AliasError, Result};
use crate::formatter::{format_alias, format_aliases, format_unalias};
use crate::group::GroupStore;
use crate::model::{Alias, AliasIdentity, TreeNode, DEFAULT_SYSTEM_GROUP};
use crate::parser::{resolve, resolve_parts};
use crate::store::AliasFile;

/// Alias and group commands over one alias file and one group store
pub struct AliasManager<S: GroupStore> {
    file: AliasFile,
    groups: S,
    system_group: String,
}

impl<S: GroupStore> AliasManager<S> {
    pub fn new(file: AliasFile, groups: S) -> Self {
        Self {
            file,
            groups,
            system_group: DEFAULT_SYSTEM_GROUP.to_string(),
        }
    }

    pub fn with_system_group(mut self, name: impl Into<String>) -> Self {
        self.system_group = name.into();
        self
    }

    pub fn system_group(&self) -> &str {
        &self.system_group
    }

    pub fn file(&self) -> &AliasFile {
        &self.file
    }

    pub fn groups(&self) -> &S {
        &self.groups
    }

    // =========================================================================
    // Refresh / view
    // =========================================================================

    /// Re-scan the alias file and overwrite the system group with it.
    ///
    /// Frequency and description of aliases already in the system group are
    /// kept, matched by identity in order so duplicates pair up one to one.
    pub fn refresh(&mut self) -> Result<Vec<Alias>> {
        let parsed = self.file.read_aliases()?;
        let mut previous: Vec<Option<Alias>> = self
            .groups
            .get_group(&self.system_group)
            .into_iter()
            .map(Some)
            .collect();

        let merged: Vec<Alias> = parsed
            .into_iter()
            .map(|mut alias| {
                let old = previous
                    .iter_mut()
                    .find(|slot| slot.as_ref().map_or(false, |old| old.same_alias(&alias)))
                    .and_then(Option::take);
                if let Some(old) = old {
                    alias.frequency = old.frequency;
                    alias.description = old.description;
                }
                alias
            })
            .collect();

        self.groups.set_group(&self.system_group, merged.clone())?;
        log::debug!(
            "refreshed '{}' from {}: {} alias(es)",
            self.system_group,
            self.file.path().display(),
            merged.len()
        );
        Ok(merged)
    }

    /// Refresh, then describe every group with the system group first
    pub fn tree(&mut self) -> Result<Vec<TreeNode>> {
        let system = self.refresh()?;
        let mut nodes = vec![TreeNode::group(self.system_group.clone(), system)];
        for name in self.user_groups() {
            let aliases = self.groups.get_group(&name);
            nodes.push(TreeNode::group(name, aliases));
        }
        Ok(nodes)
    }

    /// Every group name except the system group, in store order
    pub fn user_groups(&self) -> Vec<String> {
        self.groups
            .list_groups()
            .into_iter()
            .filter(|name| name != &self.system_group)
            .collect()
    }

    /// Distinct aliases named `name` across the file and all groups.
    ///
    /// `command` narrows the match to one identity.
    pub fn lookup(&self, name: &str, command: Option<&str>) -> Result<Vec<Alias>> {
        let mut found: Vec<Alias> = Vec::new();
        let mut candidates = self.file.read_aliases()?;
        for group in self.groups.list_groups() {
            candidates.extend(self.groups.get_group(&group));
        }

        for alias in candidates {
            if alias.alias_name != name || command.map_or(false, |c| c != alias.command) {
                continue;
            }
            if !found.iter().any(|f| f.same_alias(&alias)) {
                found.push(alias);
            }
        }
        Ok(found)
    }

    // =========================================================================
    // Alias commands
    // =========================================================================

    /// Add a user-typed statement to the file and the system group
    pub fn add_alias(&mut self, text: &str) -> Result<Alias> {
        let alias = resolve(text)?;

        let existing = self.file.read_aliases()?;
        if existing.iter().any(|a| a.alias_name == alias.alias_name) {
            return Err(AliasError::DuplicateAlias(alias.alias_name));
        }

        self.file.append(text.trim())?;

        let mut system = self.groups.get_group(&self.system_group);
        system.push(alias.clone());
        self.groups.set_group(&self.system_group, system)?;

        log::info!("added alias {}", alias.identity());
        Ok(alias)
    }

    /// Delete an alias from the file and from every group holding it.
    ///
    /// Returns the `unalias` command for the live shell.
    pub fn delete_alias(&mut self, identity: &AliasIdentity) -> Result<Option<String>> {
        let in_file = self.file.read_aliases()?.iter().any(|a| a.matches(identity));
        if !in_file && self.groups_containing(identity).is_empty() {
            return Err(AliasError::not_found(identity));
        }

        let removed = self.file.delete_matching(|a| a.matches(identity))?;
        log::info!(
            "deleted {} line(s) for {} from {}",
            removed.len(),
            identity,
            self.file.path().display()
        );

        let refreshed = self.refresh();
        let propagated = self.remove_from_user_groups(std::slice::from_ref(identity));
        refreshed?;
        propagated?;

        Ok(format_unalias(&[Alias::new(
            identity.alias_name.clone(),
            identity.command.clone(),
        )]))
    }

    /// Delete every alias line of the file.
    ///
    /// The removed identities also leave the user groups. Returns `None`
    /// when the file held no alias.
    pub fn delete_all_aliases(&mut self) -> Result<Option<String>> {
        let removed = self.file.delete_matching(|_| true)?;
        if removed.is_empty() {
            log::debug!("no alias lines in {}", self.file.path().display());
            return Ok(None);
        }
        log::info!(
            "deleted all {} alias line(s) from {}",
            removed.len(),
            self.file.path().display()
        );

        let mut identities: Vec<AliasIdentity> = Vec::new();
        for identity in removed.iter().map(Alias::identity) {
            if !identities.contains(&identity) {
                identities.push(identity);
            }
        }
        let refreshed = self.refresh();
        let propagated = self.remove_from_user_groups(&identities);
        refreshed?;
        propagated?;

        Ok(format_unalias(&removed))
    }

    /// Give an alias a new name, in place in the file and in every group.
    ///
    /// Returns the `unalias` command for the old name.
    pub fn rename_alias_name(
        &mut self,
        identity: &AliasIdentity,
        new_name: &str,
    ) -> Result<Option<String>> {
        let new_name = new_name.trim();
        let (renamed, statement) = resolve_parts(new_name, &identity.command)?;
        let existing = self.file.read_aliases()?;
        if !existing.iter().any(|a| a.matches(identity)) {
            return Err(AliasError::not_found(identity));
        }
        if renamed.alias_name == identity.alias_name {
            return Ok(None);
        }

        if existing.iter().any(|a| a.alias_name == renamed.alias_name) {
            return Err(AliasError::DuplicateAlias(renamed.alias_name));
        }

        self.file.replace_one(identity, &statement)?;
        log::info!("renamed {} to '{}'", identity, renamed.alias_name);

        self.propagate(identity, |aliases, idx| {
            aliases[idx].alias_name = renamed.alias_name.clone();
        })?;

        Ok(format_unalias(&[Alias::new(
            identity.alias_name.clone(),
            identity.command.clone(),
        )]))
    }

    /// Give an alias a new command, in place in the file and in every group
    pub fn rename_alias_command(
        &mut self,
        identity: &AliasIdentity,
        new_command: &str,
    ) -> Result<Alias> {
        let (changed, statement) = resolve_parts(&identity.alias_name, new_command)?;
        if !self.file.read_aliases()?.iter().any(|a| a.matches(identity)) {
            return Err(AliasError::not_found(identity));
        }
        if changed.command == identity.command {
            return Ok(changed);
        }

        self.file.replace_one(identity, &statement)?;
        log::info!("changed command of {} to '{}'", identity, changed.command);

        self.propagate(identity, |aliases, idx| {
            aliases[idx].command = changed.command.clone();
        })?;

        Ok(changed)
    }

    /// Count one run of an alias invoked from `group`.
    ///
    /// Returns what to type into the shell.
    pub fn run_alias(&mut self, group: &str, identity: &AliasIdentity) -> Result<String> {
        self.require_in_group(group, identity)?;

        self.propagate(identity, |aliases, idx| {
            aliases[idx].frequency += 1;
        })?;

        Ok(identity.alias_name.clone())
    }

    /// The rc-file statement for one alias
    pub fn copy_alias(&self, identity: &AliasIdentity) -> String {
        format_alias(&Alias::new(
            identity.alias_name.clone(),
            identity.command.clone(),
        ))
    }

    /// The rc-file statements of a whole group, one per line
    pub fn copy_all_in_group(&self, group: &str) -> Result<String> {
        let aliases = self
            .groups
            .get(group)
            .ok_or_else(|| AliasError::GroupNotFound(group.to_string()))?;
        Ok(format_aliases(&aliases))
    }

    /// Set the description of an alias in every group holding it
    pub fn set_description(&mut self, identity: &AliasIdentity, text: &str) -> Result<()> {
        if self.groups_containing(identity).is_empty() {
            return Err(AliasError::not_found(identity));
        }

        let text = text.trim().to_string();
        self.propagate(identity, |aliases, idx| {
            aliases[idx].description = text.clone();
        })?;
        Ok(())
    }

    // =========================================================================
    // Group commands
    // =========================================================================

    /// Groups an alias shown in `source_group` may be copied to
    pub fn eligible_groups(&self, source_group: &str) -> Vec<String> {
        self.user_groups()
            .into_iter()
            .filter(|name| name != source_group)
            .collect()
    }

    /// Copy an alias from `source_group` into `target`
    pub fn add_to_group(
        &mut self,
        source_group: &str,
        identity: &AliasIdentity,
        target: &str,
    ) -> Result<()> {
        let alias = self.require_in_group(source_group, identity)?;

        let eligible = self.eligible_groups(source_group);
        if eligible.is_empty() {
            return Err(AliasError::NoEligibleGroup(identity.alias_name.clone()));
        }
        if !eligible.iter().any(|name| name == target) {
            return Err(AliasError::GroupNotFound(target.to_string()));
        }

        let mut aliases = self.groups.get_group(target);
        aliases.push(alias);
        self.groups.set_group(target, aliases)?;
        log::info!("copied {} into group '{}'", identity, target);
        Ok(())
    }

    /// Remove the first copy of an alias from one user group
    pub fn remove_from_group(&mut self, group: &str, identity: &AliasIdentity) -> Result<()> {
        if group == self.system_group {
            return Err(AliasError::ProtectedGroup(group.to_string()));
        }
        let mut aliases = self
            .groups
            .get(group)
            .ok_or_else(|| AliasError::GroupNotFound(group.to_string()))?;
        let idx = aliases
            .iter()
            .position(|a| a.matches(identity))
            .ok_or_else(|| AliasError::not_found(identity))?;

        aliases.remove(idx);
        self.groups.set_group(group, aliases)?;
        log::info!("removed {} from group '{}'", identity, group);
        Ok(())
    }

    pub fn new_group(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AliasError::EmptyInput("Group name"));
        }
        if name == self.system_group || self.groups.contains(name) {
            return Err(AliasError::DuplicateGroup(name.to_string()));
        }

        self.groups.set_group(name, Vec::new())?;
        log::info!("created group '{}'", name);
        Ok(())
    }

    /// Move a group's aliases to a new name
    pub fn rename_group(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(AliasError::EmptyInput("Group name"));
        }
        if old_name == self.system_group {
            return Err(AliasError::ProtectedGroup(old_name.to_string()));
        }
        if new_name == self.system_group || self.groups.contains(new_name) {
            return Err(AliasError::DuplicateGroup(new_name.to_string()));
        }
        let aliases = self
            .groups
            .get(old_name)
            .ok_or_else(|| AliasError::GroupNotFound(old_name.to_string()))?;

        self.groups.set_group(new_name, aliases)?;
        self.groups.delete_group(old_name)?;
        log::info!("renamed group '{}' to '{}'", old_name, new_name);
        Ok(())
    }

    pub fn delete_group(&mut self, name: &str) -> Result<()> {
        if name == self.system_group {
            return Err(AliasError::ProtectedGroup(name.to_string()));
        }
        if !self.groups.contains(name) {
            return Err(AliasError::GroupNotFound(name.to_string()));
        }

        self.groups.delete_group(name)?;
        log::info!("deleted group '{}'", name);
        Ok(())
    }

    /// Stable, case-insensitive sort by alias name
    pub fn sort_alphabetically(&mut self, group: &str) -> Result<()> {
        self.sort_group(group, |aliases| {
            aliases.sort_by_cached_key(|a| a.alias_name.to_lowercase());
        })
    }

    /// Stable sort by ascending run count
    pub fn sort_by_frequency(&mut self, group: &str) -> Result<()> {
        self.sort_group(group, |aliases| aliases.sort_by_key(|a| a.frequency))
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn sort_group<F>(&mut self, group: &str, sort: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<Alias>),
    {
        let mut aliases = self
            .groups
            .get(group)
            .ok_or_else(|| AliasError::GroupNotFound(group.to_string()))?;
        sort(&mut aliases);
        self.groups.set_group(group, aliases)
    }

    fn require_in_group(&self, group: &str, identity: &AliasIdentity) -> Result<Alias> {
        let aliases = self
            .groups
            .get(group)
            .ok_or_else(|| AliasError::GroupNotFound(group.to_string()))?;
        aliases
            .into_iter()
            .find(|a| a.matches(identity))
            .ok_or_else(|| AliasError::not_found(identity))
    }

    fn groups_containing(&self, identity: &AliasIdentity) -> Vec<String> {
        self.groups
            .list_groups()
            .into_iter()
            .filter(|name| {
                self.groups
                    .get_group(name)
                    .iter()
                    .any(|a| a.matches(identity))
            })
            .collect()
    }

    /// Apply `edit` to the first copy of `identity` in every group.
    ///
    /// `edit` receives the group's aliases and the index of the match.
    /// Returns how many groups were written.
    fn propagate<F>(&mut self, identity: &AliasIdentity, mut edit: F) -> Result<usize>
    where
        F: FnMut(&mut Vec<Alias>, usize),
    {
        let mut written = 0;
        let mut first_error = None;

        for name in self.groups.list_groups() {
            let mut aliases = self.groups.get_group(&name);
            let Some(idx) = aliases.iter().position(|a| a.matches(identity)) else {
                continue;
            };
            edit(&mut aliases, idx);

            match self.groups.set_group(&name, aliases) {
                Ok(()) => {
                    written += 1;
                    log::debug!("updated {} in group '{}'", identity, name);
                }
                Err(e) => {
                    log::warn!("could not update {} in group '{}': {}", identity, name, e);
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(written),
        }
    }

    /// Drop deleted identities from the groups.
    ///
    /// Runs after the system group was rebuilt from the file, which by then
    /// holds no line with these identities, so only user groups change.
    fn remove_from_user_groups(&mut self, identities: &[AliasIdentity]) -> Result<()> {
        let mut first_error = None;
        for identity in identities {
            if let Err(e) = self.propagate(identity, |aliases, idx| {
                aliases.remove(idx);
            }) {
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}
