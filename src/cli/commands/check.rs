//! Check command implementation

use anyhow::Result;
use colored::Colorize;

use crate::checker::{check_all, CheckInput, Severity};
use crate::cli::context::Context;
use crate::group::GroupStore;
use crate::parser::scan_with_warnings;

/// Execute the check command
pub fn execute(ctx: &Context) -> Result<()> {
    let manager = ctx.manager()?;
    let content = manager.file().read()?;
    let scan = scan_with_warnings(&content);

    let groups: Vec<_> = manager
        .groups()
        .list_groups()
        .into_iter()
        .map(|name| {
            let aliases = manager.groups().get_group(&name);
            (name, aliases)
        })
        .collect();

    let result = check_all(&CheckInput {
        scan: &scan,
        system_group: manager.system_group(),
        groups: &groups,
    });

    if result.is_ok() {
        ctx.print_success("No issues found!");
        println!(
            "{}",
            format!("Checked {} aliases", scan.aliases.len()).dimmed()
        );
        return Ok(());
    }

    println!("{}", "Issues Found:".red().bold());
    for issue in &result.issues {
        let (icon, severity) = match issue.severity {
            Severity::Error => ("✗".red(), "ERROR".red()),
            Severity::Warning => ("⚠".yellow(), "WARNING".yellow()),
        };

        print!("  {} [{}]", icon, severity);

        if let Some(line) = issue.line_number {
            print!(" Line {}", line);
        }

        if let Some(ref name) = issue.alias_name {
            print!(" ({})", name.cyan());
        }

        println!(": {}", issue.message);
    }

    println!();
    println!(
        "{}",
        format!(
            "Found {} error(s), {} warning(s)",
            result.count(Severity::Error),
            result.count(Severity::Warning)
        )
        .yellow()
    );

    Ok(())
}
