//! Duplicate alias name checker

use super::{CheckInput, CheckIssue, CheckResult, Checker};
use std::collections::HashMap;

/// Checks for alias names defined on more than one line
pub struct DuplicateChecker;

impl Checker for DuplicateChecker {
    fn check(&self, input: &CheckInput<'_>) -> CheckResult {
        let mut result = CheckResult::new();

        // Group by name, remembering first-seen order for stable output
        let mut order: Vec<&str> = Vec::new();
        let mut seen: HashMap<&str, Vec<usize>> = HashMap::new();

        for (idx, alias) in &input.scan.aliases {
            let lines = seen.entry(alias.alias_name.as_str()).or_insert_with(|| {
                order.push(alias.alias_name.as_str());
                Vec::new()
            });
            lines.push(idx + 1);
        }

        for name in order {
            let lines = &seen[name];
            if lines.len() > 1 {
                let listed: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
                result.add_issue(
                    CheckIssue::warning(format!(
                        "Duplicate alias '{}' defined on lines: {}; the last one wins",
                        name,
                        listed.join(", ")
                    ))
                    .with_line(lines[0])
                    .with_alias(name),
                );
            }
        }

        result
    }
}
