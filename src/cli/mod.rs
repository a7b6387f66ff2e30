//! CLI module

pub mod args;
pub mod commands;
pub mod context;

pub use args::Cli;
pub use context::Context;

use anyhow::Result;

use args::Commands;

/// Dispatch one parsed command line
pub fn run(cli: &Cli) -> Result<()> {
    let ctx = Context::from_cli(cli)?;

    match &cli.command {
        Commands::List { group } => commands::list::execute(&ctx, group.as_deref()),
        Commands::Add { statement } => commands::add::execute(&ctx, statement),
        Commands::Remove { name, command } => {
            commands::remove::execute(&ctx, name, command.as_deref())
        }
        Commands::Clear { yes } => commands::remove::execute_clear(&ctx, *yes),
        Commands::Rename {
            name,
            new_name,
            command,
        } => commands::rename::execute_name(&ctx, name, new_name, command.as_deref()),
        Commands::Recommand {
            name,
            new_command,
            command,
        } => commands::rename::execute_command(&ctx, name, new_command, command.as_deref()),
        Commands::Run {
            name,
            group,
            command,
        } => commands::run::execute(&ctx, name, group.as_deref(), command.as_deref()),
        Commands::Copy { name, command } => {
            commands::copy::execute(&ctx, name, command.as_deref())
        }
        Commands::CopyGroup { group } => commands::copy::execute_group(&ctx, group),
        Commands::Describe {
            name,
            text,
            command,
        } => commands::describe::execute(&ctx, name, text, command.as_deref()),
        Commands::Group { group_command } => commands::group::execute(&ctx, group_command),
        Commands::Check => commands::check::execute(&ctx),
        Commands::Backup { backup_command } => commands::backup::execute(&ctx, backup_command),
    }
}
