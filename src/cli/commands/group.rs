//! Group command implementations

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::args::{GroupCommands, SortKey};
use crate::cli::context::Context;
use crate::error::AliasError;
use crate::group::GroupStore;

/// Execute a group subcommand
pub fn execute(ctx: &Context, group_cmd: &GroupCommands) -> Result<()> {
    let mut manager = ctx.manager()?;

    match group_cmd {
        GroupCommands::New { name } => {
            manager.new_group(name)?;
            ctx.print_success(&format!("Created group '{}'", name.trim().cyan()));
        }
        GroupCommands::Rename { old_name, new_name } => {
            manager.rename_group(old_name, new_name)?;
            ctx.print_success(&format!(
                "Renamed group '{}' to '{}'",
                old_name,
                new_name.trim().cyan()
            ));
        }
        GroupCommands::Delete { name, yes } => {
            let count = manager.groups().get_group(name).len();
            if !yes
                && count > 0
                && !Confirm::new()
                    .with_prompt(format!(
                        "Delete group '{}' and its {} alias(es)? The alias file is not touched.",
                        name, count
                    ))
                    .default(false)
                    .interact()?
            {
                println!("Cancelled.");
                return Ok(());
            }
            manager.delete_group(name)?;
            ctx.print_success(&format!("Deleted group '{}'", name.cyan()));
        }
        GroupCommands::Add {
            name,
            target,
            from,
            command,
        } => {
            let identity = ctx.resolve_identity(&manager, name, command.as_deref())?;
            let source = from
                .clone()
                .unwrap_or_else(|| manager.system_group().to_string());
            manager.add_to_group(&source, &identity, target)?;
            ctx.print_success(&format!(
                "Added '{}' to group '{}'",
                identity.alias_name,
                target.cyan()
            ));
        }
        GroupCommands::Remove {
            group,
            name,
            command,
        } => {
            let identity = ctx.resolve_identity(&manager, name, command.as_deref())?;
            manager.remove_from_group(group, &identity)?;
            ctx.print_success(&format!(
                "Removed '{}' from group '{}'",
                identity.alias_name,
                group.cyan()
            ));
        }
        GroupCommands::Sort { group, by } => {
            // The system group is rebuilt in file order on every run
            if group == manager.system_group() {
                return Err(AliasError::ProtectedGroup(group.clone()).into());
            }
            match by {
                SortKey::Alpha => manager.sort_alphabetically(group)?,
                SortKey::Frequency => manager.sort_by_frequency(group)?,
            }
            let key = match by {
                SortKey::Alpha => "name",
                SortKey::Frequency => "frequency",
            };
            ctx.print_success(&format!("Sorted group '{}' by {}", group.cyan(), key));
        }
    }

    Ok(())
}
