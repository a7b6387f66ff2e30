//! Add command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;

/// Accept `NAME='COMMAND'` as shorthand for `alias NAME='COMMAND'`
fn normalize_statement(statement: &str) -> String {
    let trimmed = statement.trim();
    let has_keyword = trimmed
        .strip_prefix("alias")
        .map_or(false, |rest| rest.starts_with(char::is_whitespace));
    if has_keyword {
        trimmed.to_string()
    } else {
        format!("alias {}", trimmed)
    }
}

/// Execute the add command
pub fn execute(ctx: &Context, statement: &str) -> Result<()> {
    let mut manager = ctx.manager()?;
    let alias = manager.add_alias(&normalize_statement(statement))?;

    ctx.print_success(&format!(
        "Added alias '{}' = '{}'",
        alias.alias_name.cyan(),
        alias.command
    ));
    ctx.print_reload_hint();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_statement() {
        assert_eq!(normalize_statement("nv='node -v'"), "alias nv='node -v'");
        assert_eq!(
            normalize_statement("  alias nv='node -v' "),
            "alias nv='node -v'"
        );
        assert_eq!(normalize_statement("aliasx=y"), "alias aliasx=y");
    }
}
