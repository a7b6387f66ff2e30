//! # Alias Resolver
//!
//! Turns a statement typed by the user into an [`Alias`]. Same grammar as the
//! scanner, but a non-match is an error the caller has to report.

use super::scanner::parse_line;
use crate::error::{AliasError, Result};
use crate::formatter::format_alias;
use crate::model::Alias;

/// Resolve a user-supplied `alias name='command'` statement.
///
/// The returned alias has `frequency = 0` and an empty description.
pub fn resolve(input: &str) -> Result<Alias> {
    let trimmed = input.trim();
    if trimmed.contains('\n') || trimmed.contains('\r') {
        return Err(AliasError::InvalidFormat(format!(
            "'{}' spans multiple lines",
            trimmed.replace('\n', "\\n")
        )));
    }
    parse_line(trimmed).ok_or_else(|| AliasError::InvalidFormat(format!("'{}'", trimmed)))
}

/// Build the statement for `name`/`command` and check it reads back unchanged.
///
/// Used by the rename flows: a new name containing whitespace or `=` would
/// produce a line the scanner could never find again.
pub fn resolve_parts(name: &str, command: &str) -> Result<(Alias, String)> {
    if name.trim().is_empty() {
        return Err(AliasError::EmptyInput("Alias name"));
    }
    if command.trim().is_empty() {
        return Err(AliasError::EmptyInput("Alias command"));
    }

    let candidate = Alias::new(name, command);
    let statement = format_alias(&candidate);
    let resolved = resolve(&statement)?;
    if !resolved.same_alias(&candidate) {
        return Err(AliasError::InvalidFormat(format!("'{}'", statement)));
    }
    Ok((resolved, statement))
}
