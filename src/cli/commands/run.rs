//! Run command implementation

use anyhow::Result;

use crate::cli::context::Context;

/// Count one use of the alias and print what to type.
///
/// Output is the bare alias name so `eval "$(shalias run gs)"` works.
pub fn execute(
    ctx: &Context,
    name: &str,
    group: Option<&str>,
    command: Option<&str>,
) -> Result<()> {
    let mut manager = ctx.manager()?;
    let identity = ctx.resolve_identity(&manager, name, command)?;
    let group = group
        .map(str::to_string)
        .unwrap_or_else(|| manager.system_group().to_string());

    let typed = manager.run_alias(&group, &identity)?;
    println!("{}", typed);

    Ok(())
}
