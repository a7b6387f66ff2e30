//! Describe command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;

/// Set the description of an alias in every group holding it
pub fn execute(ctx: &Context, name: &str, text: &str, command: Option<&str>) -> Result<()> {
    let mut manager = ctx.manager()?;
    let identity = ctx.resolve_identity(&manager, name, command)?;

    manager.set_description(&identity, text)?;

    if text.trim().is_empty() {
        ctx.print_success(&format!(
            "Cleared description of '{}'",
            identity.alias_name.cyan()
        ));
    } else {
        ctx.print_success(&format!(
            "Described '{}': {}",
            identity.alias_name.cyan(),
            text.trim()
        ));
    }

    Ok(())
}
