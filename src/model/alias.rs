//! Alias data structures

use serde::{Deserialize, Serialize};

/// A single shell alias together with the metadata the rc file cannot hold.
///
/// # Field Semantics
/// - `alias_name`: the word typed at the prompt (`nv` in `alias nv='node -v'`)
/// - `command`: the expansion with enclosing quotes already stripped
/// - `frequency`: how many times the alias was run through this tool
/// - `description`: free-text note shown next to the alias
///
/// Two aliases are the *same* alias iff `alias_name` and `command` are equal.
/// `frequency` and `description` never take part in matching, see [`AliasIdentity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub alias_name: String,
    pub command: String,
    #[serde(default)]
    pub frequency: u64,
    #[serde(default)]
    pub description: String,
}

impl Alias {
    pub fn new(alias_name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            alias_name: alias_name.into(),
            command: command.into(),
            frequency: 0,
            description: String::new(),
        }
    }

    pub fn with_frequency(mut self, frequency: u64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Identity used to find this alias across the file and every group
    pub fn identity(&self) -> AliasIdentity {
        AliasIdentity::new(self.alias_name.clone(), self.command.clone())
    }

    /// Check whether this alias has the given identity
    pub fn matches(&self, identity: &AliasIdentity) -> bool {
        self.alias_name == identity.alias_name && self.command == identity.command
    }

    /// Check whether two aliases are the same alias (metadata ignored)
    pub fn same_alias(&self, other: &Alias) -> bool {
        self.alias_name == other.alias_name && self.command == other.command
    }
}

impl std::fmt::Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.alias_name, self.command)
    }
}

/// The `(alias_name, command)` pair identifying an alias.
///
/// Renaming either field produces a different identity, so edits always
/// look up the *old* identity first and write the new values afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AliasIdentity {
    pub alias_name: String,
    pub command: String,
}

impl AliasIdentity {
    pub fn new(alias_name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            alias_name: alias_name.into(),
            command: command.into(),
        }
    }
}

impl From<&Alias> for AliasIdentity {
    fn from(alias: &Alias) -> Self {
        alias.identity()
    }
}

impl std::fmt::Display for AliasIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' ({})", self.alias_name, self.command)
    }
}
