//! # Store Writer
//!
//! Minimal-diff edits of the alias file. Every operation reads the whole
//! file, computes the new content, and writes the whole file back. Lines the
//! operation does not target come out byte-identical, terminators included.
//!
//! The pure `*_line(s)` functions work on content strings; [`AliasFile`]
//! wraps them with file I/O and an optional backup before each write.

use std::path::{Path, PathBuf};

use crate::backup::BackupManager;
use crate::error::{AliasError, Result};
use crate::model::{Alias, AliasIdentity};
use crate::parser::{parse_aliases, parse_line};
use crate::utils::path::{read_file_or_empty, write_file};
use crate::utils::strings::{split_line_ending, split_lines_keep_ends};

/// Append `statement` as a new last line.
///
/// A missing trailing newline on the last existing line is added first.
pub fn append_line(content: &str, statement: &str) -> String {
    let mut out = String::with_capacity(content.len() + statement.len() + 2);
    out.push_str(content);
    if !content.is_empty() && !content.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(statement);
    out.push('\n');
    out
}

/// Drop every alias line whose parsed alias satisfies `predicate`.
///
/// Returns the new content and the removed aliases in file order.
pub fn delete_lines<F>(content: &str, predicate: F) -> (String, Vec<Alias>)
where
    F: Fn(&Alias) -> bool,
{
    let mut out = String::with_capacity(content.len());
    let mut removed = Vec::new();

    for line in split_lines_keep_ends(content) {
        match parse_line(line) {
            Some(alias) if predicate(&alias) => removed.push(alias),
            _ => out.push_str(line),
        }
    }

    (out, removed)
}

/// Replace the first line whose alias has identity `old` with `statement`.
///
/// The line keeps its position and its original terminator.
pub fn replace_line(content: &str, old: &AliasIdentity, statement: &str) -> Result<String> {
    let lines = split_lines_keep_ends(content);
    let target = lines
        .iter()
        .position(|line| parse_line(line).map_or(false, |alias| alias.matches(old)))
        .ok_or_else(|| AliasError::not_found(old))?;

    let mut out = String::with_capacity(content.len() + statement.len());
    for (idx, line) in lines.iter().enumerate() {
        if idx == target {
            let (_, ending) = split_line_ending(line);
            out.push_str(statement);
            out.push_str(ending);
        } else {
            out.push_str(line);
        }
    }
    Ok(out)
}

/// The rc file holding the alias definitions
#[derive(Debug, Clone)]
pub struct AliasFile {
    path: PathBuf,
    backup: Option<BackupManager>,
}

impl AliasFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup: None,
        }
    }

    /// Back the file up before every write
    pub fn with_backup(mut self, backup: BackupManager) -> Self {
        self.backup = Some(backup);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file; a file that does not exist yet reads as empty
    pub fn read(&self) -> Result<String> {
        read_file_or_empty(&self.path)
    }

    /// Parse all aliases in file order
    pub fn read_aliases(&self) -> Result<Vec<Alias>> {
        Ok(parse_aliases(&self.read()?))
    }

    fn write(&self, content: &str) -> Result<()> {
        if let Some(backup) = &self.backup {
            if self.path.exists() {
                backup.create_backup(&self.path)?;
            }
        }
        write_file(&self.path, content)?;
        log::debug!("wrote {}", self.path.display());
        Ok(())
    }

    /// Append one statement line, creating the file if needed
    pub fn append(&self, statement: &str) -> Result<()> {
        let content = self.read()?;
        self.write(&append_line(&content, statement))
    }

    /// Remove every alias line matching `predicate`; returns what was removed.
    ///
    /// Nothing is written when no line matches.
    pub fn delete_matching<F>(&self, predicate: F) -> Result<Vec<Alias>>
    where
        F: Fn(&Alias) -> bool,
    {
        let content = self.read()?;
        let (new_content, removed) = delete_lines(&content, predicate);
        if !removed.is_empty() {
            self.write(&new_content)?;
        }
        Ok(removed)
    }

    /// Replace the line holding `old` with `statement` in place
    pub fn replace_one(&self, old: &AliasIdentity, statement: &str) -> Result<()> {
        let content = self.read()?;
        let new_content = replace_line(&content, old, statement)?;
        self.write(&new_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = "# my rc\nexport PATH=\"$HOME/bin:$PATH\"\nalias ll='ls -la'\n\nif true; then\n  alias gs=\"git status\"\nfi\nalias v=nvim\n";

    #[test]
    fn test_append_adds_missing_newline() {
        assert_eq!(append_line("echo hi", "alias a='b'"), "echo hi\nalias a='b'\n");
        assert_eq!(append_line("echo hi\n", "alias a='b'"), "echo hi\nalias a='b'\n");
        assert_eq!(append_line("", "alias a='b'"), "alias a='b'\n");
    }

    #[test]
    fn test_delete_keeps_other_lines() {
        let id = AliasIdentity::new("gs", "git status");
        let (out, removed) = delete_lines(SAMPLE, |a| a.matches(&id));

        assert_eq!(removed, vec![Alias::new("gs", "git status")]);
        assert_eq!(
            out,
            "# my rc\nexport PATH=\"$HOME/bin:$PATH\"\nalias ll='ls -la'\n\nif true; then\nfi\nalias v=nvim\n"
        );
    }

    #[test]
    fn test_delete_all_aliases() {
        let (out, removed) = delete_lines(SAMPLE, |_| true);
        assert_eq!(removed.len(), 3);
        assert_eq!(out, "# my rc\nexport PATH=\"$HOME/bin:$PATH\"\n\nif true; then\nfi\n");
    }

    #[test]
    fn test_delete_without_aliases_is_noop() {
        let content = "echo hi\r\n# alias x='y'\n";
        let (out, removed) = delete_lines(content, |_| true);
        assert!(removed.is_empty());
        assert_eq!(out, content);
    }

    #[test]
    fn test_replace_keeps_position_and_ending() {
        let content = "alias a='1'\r\nalias b='2'\r\nalias b='2'\r\n";
        let out = replace_line(content, &AliasIdentity::new("b", "2"), "alias c='2'").unwrap();
        assert_eq!(out, "alias a='1'\r\nalias c='2'\r\nalias b='2'\r\n");
    }

    #[test]
    fn test_replace_last_line_without_newline() {
        let out = replace_line("x\nalias a='1'", &AliasIdentity::new("a", "1"), "alias a='2'").unwrap();
        assert_eq!(out, "x\nalias a='2'");
    }

    #[test]
    fn test_replace_missing_identity() {
        let err = replace_line(SAMPLE, &AliasIdentity::new("ll", "ls -l"), "alias ll='x'")
            .unwrap_err();
        assert!(matches!(err, AliasError::AliasNotFound { .. }));
    }

    #[test]
    fn test_alias_file_roundtrip() {
        let dir = tempdir().unwrap();
        let file = AliasFile::new(dir.path().join(".bashrc"));

        assert!(file.read_aliases().unwrap().is_empty());
        file.append("alias nv='node -v'").unwrap();
        file.append("alias gs='git status'").unwrap();
        assert_eq!(file.read_aliases().unwrap().len(), 2);

        file.replace_one(&AliasIdentity::new("nv", "node -v"), "alias nv='node --version'")
            .unwrap();
        let removed = file
            .delete_matching(|a| a.alias_name == "gs")
            .unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(file.read().unwrap(), "alias nv='node --version'\n");
    }

    #[test]
    fn test_alias_file_writes_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".zshrc");
        std::fs::write(&path, "alias a='1'\n").unwrap();

        let backups = BackupManager::with_dir(dir.path().join("backups"), 5);
        let file = AliasFile::new(&path).with_backup(backups.clone());
        file.append("alias b='2'").unwrap();

        let listed = backups.list_backups().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(std::fs::read_to_string(&listed[0].path).unwrap(), "alias a='1'\n");
    }

    #[test]
    fn test_noop_delete_does_not_back_up() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".bashrc");
        std::fs::write(&path, "echo hi\n").unwrap();

        let backups = BackupManager::with_dir(dir.path().join("backups"), 5);
        let file = AliasFile::new(&path).with_backup(backups.clone());
        assert!(file.delete_matching(|_| true).unwrap().is_empty());
        assert!(backups.list_backups().unwrap().is_empty());
    }
}
