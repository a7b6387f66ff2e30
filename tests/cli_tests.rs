//! Integration tests for the command line front end

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

struct Sandbox {
    dir: TempDir,
    rc_file: PathBuf,
    groups_file: PathBuf,
}

impl Sandbox {
    fn new(content: &str) -> Self {
        let dir = tempdir().unwrap();
        let rc_file = dir.path().join(".bashrc");
        let groups_file = dir.path().join("groups.toml");
        fs::write(&rc_file, content).unwrap();
        Self {
            dir,
            rc_file,
            groups_file,
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("shalias").unwrap();
        cmd.env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .args([
                "--file",
                self.rc_file.to_str().unwrap(),
                "--groups",
                self.groups_file.to_str().unwrap(),
            ]);
        cmd
    }

    fn rc(&self) -> String {
        fs::read_to_string(&self.rc_file).unwrap()
    }

    fn groups(&self) -> String {
        fs::read_to_string(&self.groups_file).unwrap_or_default()
    }
}

#[test]
fn test_list_command() {
    let sb = Sandbox::new("alias ll='ls -la'\nalias gs='git status'\nexport EDITOR=nvim\n");

    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("System"))
        .stdout(predicate::str::contains("ll"))
        .stdout(predicate::str::contains("git status"))
        .stdout(predicate::str::contains("EDITOR").not());
}

#[test]
fn test_list_unknown_group_fails() {
    let sb = Sandbox::new("alias ll='ls -la'\n");

    sb.cmd()
        .args(["ls", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Group 'nope' not found"));
}

#[test]
fn test_add_command() {
    let sb = Sandbox::new("export EDITOR=nvim\n");

    sb.cmd()
        .args(["add", "nv='node -v'"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added alias"));

    assert_eq!(sb.rc(), "export EDITOR=nvim\nalias nv='node -v'\n");
}

#[test]
fn test_add_invalid_and_duplicate() {
    let sb = Sandbox::new("alias nv='node -v'\n");

    sb.cmd()
        .args(["add", "alias broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid alias format"));

    sb.cmd()
        .args(["add", "alias nv='nvim'"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(sb.rc(), "alias nv='node -v'\n");
}

#[test]
fn test_remove_prints_unalias() {
    let sb = Sandbox::new("# top\nalias gs='git status'\nalias gp='git push'\n");

    sb.cmd()
        .args(["rm", "gs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unalias gs"));

    assert_eq!(sb.rc(), "# top\nalias gp='git push'\n");
}

#[test]
fn test_ambiguous_name_needs_command() {
    let sb = Sandbox::new("alias ll='ls -la'\nalias ll='ls -l'\n");

    sb.cmd()
        .args(["rm", "ll"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("several aliases"));

    sb.cmd()
        .args(["rm", "ll", "--command", "ls -l"])
        .assert()
        .success();

    assert_eq!(sb.rc(), "alias ll='ls -la'\n");
}

#[test]
fn test_rename_reaches_groups() {
    let sb = Sandbox::new("alias gs='git status'\n");

    sb.cmd().args(["group", "new", "git"]).assert().success();
    sb.cmd().args(["group", "add", "gs", "git"]).assert().success();
    sb.cmd()
        .args(["mv", "gs", "gst"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unalias gs"));

    assert_eq!(sb.rc(), "alias gst='git status'\n");
    assert!(!sb.groups().contains("\"gs\""));

    sb.cmd()
        .args(["ls", "git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gst"));
}

#[test]
fn test_recommand() {
    let sb = Sandbox::new("alias a='1'\nalias b='2'\n");

    sb.cmd().args(["recommand", "a", "echo 'x'"]).assert().success();

    assert_eq!(sb.rc(), "alias a=\"echo 'x'\"\nalias b='2'\n");
}

#[test]
fn test_run_counts_uses() {
    let sb = Sandbox::new("alias gs='git status'\n");

    sb.cmd()
        .args(["run", "gs"])
        .assert()
        .success()
        .stdout(predicate::eq("gs\n"));
    sb.cmd().args(["run", "gs"]).assert().success();

    assert!(sb.groups().contains("frequency = 2"));
}

#[test]
fn test_copy_and_copy_group() {
    let sb = Sandbox::new("alias a='1'\nalias b='2'\n");

    sb.cmd()
        .args(["cp", "a"])
        .assert()
        .success()
        .stdout(predicate::eq("alias a='1'\n"));

    sb.cmd()
        .args(["copy-group", "System"])
        .assert()
        .success()
        .stdout(predicate::eq("alias a='1'\nalias b='2'\n"));
}

#[test]
fn test_describe() {
    let sb = Sandbox::new("alias gs='git status'\n");

    sb.cmd()
        .args(["describe", "gs", "short status"])
        .assert()
        .success();

    assert!(sb.groups().contains("short status"));
    sb.cmd()
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("short status"));
}

#[test]
fn test_group_lifecycle() {
    let sb = Sandbox::new("alias gs='git status'\n");

    sb.cmd().args(["g", "new", "git"]).assert().success();
    sb.cmd()
        .args(["g", "new", "git"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    sb.cmd()
        .args(["g", "rename", "System", "rc"])
        .assert()
        .failure();
    sb.cmd().args(["g", "rename", "git", "vcs"]).assert().success();
    sb.cmd().args(["g", "add", "gs", "vcs"]).assert().success();
    sb.cmd().args(["g", "sort", "vcs", "--by", "freq"]).assert().success();
    sb.cmd().args(["g", "remove", "vcs", "gs"]).assert().success();
    sb.cmd().args(["g", "delete", "vcs", "-y"]).assert().success();

    assert!(!sb.groups().contains("vcs"));
    assert_eq!(sb.rc(), "alias gs='git status'\n");
}

#[test]
fn test_sort_system_group_refused() {
    let sb = Sandbox::new("alias b='2'\nalias a='1'\n");

    sb.cmd()
        .args(["g", "sort", "System"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mirrors the alias file"));

    assert_eq!(sb.rc(), "alias b='2'\nalias a='1'\n");
}

#[test]
fn test_group_add_without_user_groups() {
    let sb = Sandbox::new("alias gs='git status'\n");

    sb.cmd()
        .args(["group", "add", "gs", "git"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Create a group first"));
}

#[test]
fn test_clear() {
    let sb = Sandbox::new("alias a='1'\necho keep\nalias b='2'\n");

    sb.cmd()
        .args(["clear", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unalias a b"));
    assert_eq!(sb.rc(), "echo keep\n");

    sb.cmd()
        .args(["clear", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No aliases to remove"));
}

#[test]
fn test_check_no_issues() {
    let sb = Sandbox::new("alias ll='ls -la'\nalias gs='git status'\n");

    sb.cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_check_reports_problems() {
    let sb = Sandbox::new("alias ll='ls -la'\nalias broken\nalias ll='ls -l'\n");

    sb.cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Duplicate alias 'll'"))
        .stdout(predicate::str::contains("Line 2"));
}

#[test]
fn test_backups_written_and_restored() {
    let sb = Sandbox::new("alias a='1'\n");

    sb.cmd().args(["add", "alias b='2'"]).assert().success();

    let backups_dir = sb.dir.path().join("config").join("shalias").join("backups");
    let backup = fs::read_dir(&backups_dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .find(|p| p.extension().map_or(false, |e| e == "bak"))
        .unwrap();
    let id = backup
        .file_name()
        .unwrap()
        .to_string_lossy()
        .trim_end_matches(".bak")
        .to_string();

    sb.cmd()
        .args(["backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(id.as_str()));

    sb.cmd()
        .args(["backup", "restore", id.as_str(), "-y"])
        .assert()
        .success();
    assert_eq!(sb.rc(), "alias a='1'\n");
}
