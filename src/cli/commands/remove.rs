//! Remove and clear command implementations

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::context::Context;

/// Execute the remove command
pub fn execute(ctx: &Context, name: &str, command: Option<&str>) -> Result<()> {
    let mut manager = ctx.manager()?;
    let identity = ctx.resolve_identity(&manager, name, command)?;

    let unalias = manager.delete_alias(&identity)?;

    ctx.print_success(&format!(
        "Removed alias '{}' ({})",
        identity.alias_name.cyan(),
        identity.command.dimmed()
    ));
    ctx.print_unalias_hint(unalias.as_deref());

    Ok(())
}

/// Execute the clear command: delete every alias line of the file
pub fn execute_clear(ctx: &Context, yes: bool) -> Result<()> {
    let mut manager = ctx.manager()?;

    if !yes
        && !Confirm::new()
            .with_prompt(format!(
                "Remove every alias from {}?",
                ctx.store_file.display()
            ))
            .default(false)
            .interact()?
    {
        println!("Cancelled.");
        return Ok(());
    }

    match manager.delete_all_aliases()? {
        Some(unalias) => {
            ctx.print_success("Removed all aliases");
            ctx.print_unalias_hint(Some(&unalias));
        }
        None => println!("{}", "No aliases to remove.".dimmed()),
    }

    Ok(())
}
