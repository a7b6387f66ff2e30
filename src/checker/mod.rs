//! Checker module for validating the alias file and the groups

mod duplicate;
mod orphan;

pub use duplicate::DuplicateChecker;
pub use orphan::OrphanChecker;

use crate::model::Alias;
use crate::parser::ScanResult;

/// Check result
#[derive(Debug)]
pub struct CheckResult {
    pub issues: Vec<CheckIssue>,
}

impl CheckResult {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add_issue(&mut self, issue: CheckIssue) {
        self.issues.push(issue);
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

impl Default for CheckResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single check issue
#[derive(Debug)]
pub struct CheckIssue {
    pub severity: Severity,
    pub message: String,
    pub line_number: Option<usize>,
    pub alias_name: Option<String>,
}

impl CheckIssue {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            line_number: None,
            alias_name: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            line_number: None,
            alias_name: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line_number = Some(line);
        self
    }

    pub fn with_alias(mut self, name: impl Into<String>) -> Self {
        self.alias_name = Some(name.into());
        self
    }
}

/// Everything a checker may look at
pub struct CheckInput<'a> {
    pub scan: &'a ScanResult,
    pub system_group: &'a str,
    pub groups: &'a [(String, Vec<Alias>)],
}

/// Trait for checkers
pub trait Checker {
    fn check(&self, input: &CheckInput<'_>) -> CheckResult;
}

/// Run all checks
pub fn check_all(input: &CheckInput<'_>) -> CheckResult {
    let mut result = CheckResult::new();

    // Lines starting with `alias` that the grammar rejects
    for warning in &input.scan.warnings {
        result.add_issue(
            CheckIssue::error(format!(
                "Unrecognised alias statement: {}",
                warning.raw_line.trim()
            ))
            .with_line(warning.line_number),
        );
    }

    let checkers: [&dyn Checker; 2] = [&DuplicateChecker, &OrphanChecker];
    for checker in checkers {
        result.issues.extend(checker.check(input).issues);
    }

    result
}
