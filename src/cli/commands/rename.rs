//! Rename and recommand command implementations

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;

/// Execute the rename command (new alias name)
pub fn execute_name(
    ctx: &Context,
    name: &str,
    new_name: &str,
    command: Option<&str>,
) -> Result<()> {
    let mut manager = ctx.manager()?;
    let identity = ctx.resolve_identity(&manager, name, command)?;

    let unalias = manager.rename_alias_name(&identity, new_name)?;

    ctx.print_success(&format!(
        "Renamed alias '{}' to '{}'",
        identity.alias_name,
        new_name.trim().cyan()
    ));
    ctx.print_unalias_hint(unalias.as_deref());
    ctx.print_reload_hint();

    Ok(())
}

/// Execute the recommand command (new alias command)
pub fn execute_command(
    ctx: &Context,
    name: &str,
    new_command: &str,
    command: Option<&str>,
) -> Result<()> {
    let mut manager = ctx.manager()?;
    let identity = ctx.resolve_identity(&manager, name, command)?;

    let alias = manager.rename_alias_command(&identity, new_command)?;

    ctx.print_success(&format!(
        "Updated alias '{}' = '{}'",
        alias.alias_name.cyan(),
        alias.command
    ));
    ctx.print_reload_hint();

    Ok(())
}
