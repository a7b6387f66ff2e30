//! Stale group entry checker

use super::{CheckInput, CheckIssue, CheckResult, Checker};

/// Flags user-group aliases that no longer exist in the alias file.
///
/// Happens when the file is edited by hand: a rename outside this tool
/// leaves the groups holding the old identity.
pub struct OrphanChecker;

impl Checker for OrphanChecker {
    fn check(&self, input: &CheckInput<'_>) -> CheckResult {
        let mut result = CheckResult::new();

        for (group, aliases) in input.groups {
            if group == input.system_group {
                continue;
            }
            for alias in aliases {
                let in_file = input
                    .scan
                    .aliases
                    .iter()
                    .any(|(_, found)| found.same_alias(alias));
                if !in_file {
                    result.add_issue(
                        CheckIssue::warning(format!(
                            "Group '{}' holds '{}' ({}) which is not in the alias file",
                            group, alias.alias_name, alias.command
                        ))
                        .with_alias(alias.alias_name.clone()),
                    );
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Alias;
    use crate::parser::scan_with_warnings;

    #[test]
    fn test_orphan_reported() {
        let scan = scan_with_warnings("alias gs='git status'\n");
        let groups = vec![
            ("System".to_string(), vec![Alias::new("old", "x")]),
            (
                "git".to_string(),
                vec![Alias::new("gs", "git status"), Alias::new("gp", "git push")],
            ),
        ];
        let result = OrphanChecker.check(&CheckInput {
            scan: &scan,
            system_group: "System",
            groups: &groups,
        });

        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].alias_name.as_deref(), Some("gp"));
    }
}
