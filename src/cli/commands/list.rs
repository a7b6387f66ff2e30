//! List command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;
use crate::error::AliasError;
use crate::model::{Alias, TreeNode};

/// Get terminal width, defaulting to 80 if unable to detect
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Truncate a string to fit within max_width, adding "..." if truncated
fn truncate_value(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        format!("{}...", s.chars().take(max_width - 3).collect::<String>())
    }
}

/// Execute the list command: the system group first, then user groups
pub fn execute(ctx: &Context, only_group: Option<&str>) -> Result<()> {
    let mut manager = ctx.manager()?;
    let tree = manager.tree()?;

    let nodes: Vec<&TreeNode> = match only_group {
        Some(name) => {
            let node = tree
                .iter()
                .find(|n| n.name() == name)
                .ok_or_else(|| AliasError::GroupNotFound(name.to_string()))?;
            vec![node]
        }
        None => tree.iter().collect(),
    };

    let term_width = get_terminal_width();

    for node in nodes {
        let TreeNode::Group { name, children } = node else {
            continue;
        };
        let header = if name == manager.system_group() {
            name.green().bold()
        } else {
            name.cyan().bold()
        };
        println!("{} {}", header, format!("({})", children.len()).dimmed());

        let aliases: Vec<&Alias> = children
            .iter()
            .filter_map(|child| match child {
                TreeNode::Alias { alias, .. } => Some(alias),
                TreeNode::Group { .. } => None,
            })
            .collect();

        if aliases.is_empty() {
            println!("  {}", "(empty)".dimmed());
            continue;
        }

        let name_width = aliases
            .iter()
            .map(|a| a.alias_name.chars().count())
            .max()
            .unwrap_or(0)
            .min(24);
        // "  " + name + " = " + command + "  [count]"
        let command_width = term_width.saturating_sub(name_width + 14).max(10);

        for alias in aliases {
            let padded = format!("{:<width$}", alias.alias_name, width = name_width);
            let mut line = format!(
                "  {} = {}",
                padded.yellow(),
                truncate_value(&alias.command, command_width)
            );
            if alias.frequency > 0 {
                line.push_str(&format!("  {}", format!("[{}]", alias.frequency).dimmed()));
            }
            println!("{}", line);
            if !alias.description.is_empty() {
                println!("  {:<width$}   {}", "", alias.description.dimmed(), width = name_width);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_value() {
        assert_eq!(truncate_value("short", 10), "short");
        assert_eq!(truncate_value("a long command line", 10), "a long ...");
        assert_eq!(truncate_value("abcdef", 3), "abc");
    }
}
