//! Statement formatting: aliases back to rc-file lines, and `unalias` commands

use crate::model::Alias;

/// Format an alias as a single rc-file line.
///
/// Single quotes are preferred. A command containing a single quote is
/// written double-quoted with `\`, `"`, `$` and `` ` `` escaped so the
/// scanner reads back exactly the same command.
pub fn format_alias(alias: &Alias) -> String {
    let command = &alias.command;
    if !command.contains('\'') {
        return format!("alias {}='{}'", alias.alias_name, command);
    }

    let escaped = command
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "\\$")
        .replace('`', "\\`");
    format!("alias {}=\"{}\"", alias.alias_name, escaped)
}

/// Format every alias on its own line, in sequence order
pub fn format_aliases(aliases: &[Alias]) -> String {
    aliases
        .iter()
        .map(format_alias)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the command removing `aliases` from a live shell session.
///
/// Names are listed once each, in first-seen order. Returns `None` when
/// there is nothing to unalias; callers skip the shell side effect then.
pub fn format_unalias(aliases: &[Alias]) -> Option<String> {
    let mut names: Vec<&str> = Vec::new();
    for alias in aliases {
        if !names.contains(&alias.alias_name.as_str()) {
            names.push(&alias.alias_name);
        }
    }

    if names.is_empty() {
        None
    } else {
        Some(format!("unalias {}", names.join(" ")))
    }
}
