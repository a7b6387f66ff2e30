//! Copy command implementations

use anyhow::Result;

use crate::cli::context::Context;

/// Print the statement of one alias
pub fn execute(ctx: &Context, name: &str, command: Option<&str>) -> Result<()> {
    let manager = ctx.manager()?;
    let identity = ctx.resolve_identity(&manager, name, command)?;
    println!("{}", manager.copy_alias(&identity));
    Ok(())
}

/// Print every statement of a group
pub fn execute_group(ctx: &Context, group: &str) -> Result<()> {
    let manager = ctx.manager()?;
    let statements = manager.copy_all_in_group(group)?;
    if !statements.is_empty() {
        println!("{}", statements);
    }
    Ok(())
}
