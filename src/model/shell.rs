//! Shell type detection and default store file paths

use std::env;
use std::path::{Path, PathBuf};

/// Shells whose rc files use the `alias name=value` syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
}

impl ShellType {
    /// Detect shell type from the `$SHELL` environment variable
    pub fn detect() -> Option<Self> {
        let shell = env::var("SHELL").ok()?;
        Self::from_shell_path(&shell)
    }

    fn from_shell_path(shell: &str) -> Option<Self> {
        let name = Path::new(shell).file_name()?.to_str()?;
        if name.contains("zsh") {
            Some(ShellType::Zsh)
        } else if name.contains("bash") {
            Some(ShellType::Bash)
        } else {
            None
        }
    }

    /// Detect shell type from an rc file name such as `.zshrc` or `.bash_aliases`
    pub fn detect_from_file(path: &Path) -> Option<Self> {
        let filename = path.file_name()?.to_str()?;
        if filename.contains("zsh") {
            return Some(ShellType::Zsh);
        }
        if filename.contains("bash") {
            return Some(ShellType::Bash);
        }
        match path.extension().and_then(|e| e.to_str()) {
            Some("zsh") => Some(ShellType::Zsh),
            Some("sh") | Some("bash") => Some(ShellType::Bash),
            _ => None,
        }
    }

    /// Get the default rc file for this shell
    pub fn default_config_path(&self) -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("~"));
        match self {
            ShellType::Bash => home.join(".bashrc"),
            ShellType::Zsh => home.join(".zshrc"),
        }
    }

    /// Get shell name as string
    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ShellType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(ShellType::Bash),
            "zsh" => Ok(ShellType::Zsh),
            _ => Err(format!("Unknown shell type: {}", s)),
        }
    }
}

/// Pick the shell type: explicit choice > file name > `$SHELL` > bash
pub fn get_shell_type(specified: Option<ShellType>, file_path: Option<&Path>) -> ShellType {
    if let Some(shell) = specified {
        return shell;
    }

    if let Some(shell) = file_path.and_then(ShellType::detect_from_file) {
        return shell;
    }

    ShellType::detect().unwrap_or(ShellType::Bash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_type_from_str() {
        assert_eq!("bash".parse::<ShellType>().unwrap(), ShellType::Bash);
        assert_eq!("ZSH".parse::<ShellType>().unwrap(), ShellType::Zsh);
        assert!("fish".parse::<ShellType>().is_err());
    }

    #[test]
    fn test_detect_from_shell_path() {
        assert_eq!(ShellType::from_shell_path("/bin/zsh"), Some(ShellType::Zsh));
        assert_eq!(
            ShellType::from_shell_path("/usr/local/bin/bash"),
            Some(ShellType::Bash)
        );
        assert_eq!(ShellType::from_shell_path("/usr/bin/fish"), None);
    }

    #[test]
    fn test_detect_from_file() {
        assert_eq!(
            ShellType::detect_from_file(Path::new("/home/u/.zshrc")),
            Some(ShellType::Zsh)
        );
        assert_eq!(
            ShellType::detect_from_file(Path::new("/home/u/.bash_aliases")),
            Some(ShellType::Bash)
        );
        assert_eq!(
            ShellType::detect_from_file(Path::new("aliases.sh")),
            Some(ShellType::Bash)
        );
        assert_eq!(ShellType::detect_from_file(Path::new("notes.txt")), None);
    }

    #[test]
    fn test_specified_shell_wins() {
        let shell = get_shell_type(Some(ShellType::Zsh), Some(Path::new(".bashrc")));
        assert_eq!(shell, ShellType::Zsh);
    }

    #[test]
    fn test_default_config_path() {
        assert!(ShellType::Bash
            .default_config_path()
            .to_string_lossy()
            .ends_with(".bashrc"));
        assert!(ShellType::Zsh
            .default_config_path()
            .to_string_lossy()
            .ends_with(".zshrc"));
    }
}
