//! Error kinds reported by the alias engine

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::model::AliasIdentity;

pub type Result<T> = std::result::Result<T, AliasError>;

/// Every failure an alias or group command can end with.
///
/// All variants are recoverable: the command that raised one has not
/// committed any change to the store file or the group store.
#[derive(Debug, Error)]
pub enum AliasError {
    #[error("Invalid alias format: {0}. Use: alias NAME='COMMAND'")]
    InvalidFormat(String),

    #[error("Alias '{0}' already exists")]
    DuplicateAlias(String),

    #[error("Alias '{name}' ({command}) not found")]
    AliasNotFound { name: String, command: String },

    #[error("Group '{0}' already exists")]
    DuplicateGroup(String),

    #[error("No other group to add '{0}' to. Create a group first")]
    NoEligibleGroup(String),

    #[error("Group '{0}' not found")]
    GroupNotFound(String),

    #[error("Group '{0}' mirrors the alias file and cannot be changed this way")]
    ProtectedGroup(String),

    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    #[error("Cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Group store error: {0}")]
    GroupStore(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl AliasError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        AliasError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn not_found(identity: &AliasIdentity) -> Self {
        AliasError::AliasNotFound {
            name: identity.alias_name.clone(),
            command: identity.command.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = AliasError::not_found(&AliasIdentity::new("nv", "node -v"));
        assert_eq!(err.to_string(), "Alias 'nv' (node -v) not found");
    }

    #[test]
    fn test_io_message_names_path() {
        let err = AliasError::io(
            Path::new("/tmp/missing.rc"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("/tmp/missing.rc"));
    }
}
