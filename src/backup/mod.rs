//! Backup management module
//!
//! Every write to the alias file is preceded by a copy of the file as it was,
//! so a bad edit can always be rolled back with `shalias backup restore`.

use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use time::macros::format_description;
use time::OffsetDateTime;

use crate::error::{AliasError, Result};
use crate::model::Config;

/// Backup entry information
#[derive(Debug, Clone)]
pub struct BackupEntry {
    pub id: String,
    pub path: PathBuf,
    pub timestamp: String,
    pub filename: String,
    pub size: u64,
}

/// Backup manager
#[derive(Debug, Clone)]
pub struct BackupManager {
    backup_dir: PathBuf,
    max_count: usize,
}

impl BackupManager {
    pub fn new(config: &Config) -> Self {
        Self::with_dir(Config::backups_dir(), config.backup.max_count)
    }

    pub fn with_dir(backup_dir: PathBuf, max_count: usize) -> Self {
        Self {
            backup_dir,
            max_count,
        }
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Ensure backup directory exists
    fn ensure_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.backup_dir).map_err(|e| AliasError::io(&self.backup_dir, e))
    }

    /// Create a backup of the specified file, then prune to `max_count`
    pub fn create_backup(&self, source_file: &Path) -> Result<PathBuf> {
        let backup_path = self.copy_to_backup(source_file)?;
        self.cleanup_keep(self.max_count)?;
        Ok(backup_path)
    }

    /// Copy `source_file` into a new backup without pruning
    fn copy_to_backup(&self, source_file: &Path) -> Result<PathBuf> {
        self.ensure_dir()?;

        let format = format_description!(
            "[year]-[month]-[day]_[hour][minute][second][subsecond digits:3]"
        );
        let timestamp = OffsetDateTime::now_utc()
            .format(&format)
            .map_err(|e| AliasError::Config(format!("backup timestamp: {}", e)))?;

        let filename = source_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "aliases".to_string());

        let mut source = File::open(source_file).map_err(|e| AliasError::io(source_file, e))?;
        let (mut backup, backup_path) = self.open_new_backup(&timestamp, &filename)?;
        std::io::copy(&mut source, &mut backup).map_err(|e| AliasError::io(&backup_path, e))?;
        log::debug!(
            "backed up {} to {}",
            source_file.display(),
            backup_path.display()
        );

        Ok(backup_path)
    }

    /// Create `<timestamp>_<filename>.bak`, never overwriting an existing backup.
    ///
    /// A name already taken within the same millisecond gets a `-N` suffix on
    /// the timestamp, which keeps it sorting after the earlier one.
    fn open_new_backup(&self, timestamp: &str, filename: &str) -> Result<(File, PathBuf)> {
        let mut attempt = 0u32;
        loop {
            let stamp = if attempt == 0 {
                timestamp.to_string()
            } else {
                format!("{}-{}", timestamp, attempt)
            };
            let path = self.backup_dir.join(format!("{}_{}.bak", stamp, filename));

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((file, path)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(AliasError::io(&path, e)),
            }
        }
    }

    /// List all backups, newest first
    pub fn list_backups(&self) -> Result<Vec<BackupEntry>> {
        self.ensure_dir()?;

        let mut entries = Vec::new();
        let dir = std::fs::read_dir(&self.backup_dir).map_err(|e| AliasError::io(&self.backup_dir, e))?;

        for entry in dir {
            let entry = entry.map_err(|e| AliasError::io(&self.backup_dir, e))?;
            let path = entry.path();

            if path.extension().map(|e| e == "bak").unwrap_or(false) {
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                let size = entry.metadata().map(|m| m.len()).unwrap_or(0);

                // Extract timestamp from filename
                let timestamp = filename.split('_').take(2).collect::<Vec<_>>().join("_");

                let id = filename.trim_end_matches(".bak").to_string();

                entries.push(BackupEntry {
                    id,
                    path,
                    timestamp,
                    filename,
                    size,
                });
            }
        }

        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(entries)
    }

    /// Restore a backup by ID
    pub fn restore_backup(&self, id: &str, target_file: &Path) -> Result<BackupEntry> {
        let backup = self
            .get_backup(id)?
            .ok_or_else(|| AliasError::Config(format!("Backup not found: {}", id)))?;

        let content = std::fs::read(&backup.path).map_err(|e| AliasError::io(&backup.path, e))?;

        // Keep the state being replaced as its own backup. No pruning here:
        // the backup being restored may be the oldest one.
        if target_file.exists() {
            self.copy_to_backup(target_file)?;
        }

        std::fs::write(target_file, content).map_err(|e| AliasError::io(target_file, e))?;
        log::info!("restored {} from {}", target_file.display(), backup.path.display());

        Ok(backup)
    }

    /// Clean up backups, keeping only the specified number
    pub fn cleanup_keep(&self, keep: usize) -> Result<usize> {
        let backups = self.list_backups()?;

        if backups.len() <= keep {
            return Ok(0);
        }

        let mut removed = 0;
        for backup in backups.into_iter().skip(keep) {
            std::fs::remove_file(&backup.path).map_err(|e| AliasError::io(&backup.path, e))?;
            removed += 1;
        }

        Ok(removed)
    }

    /// Get a specific backup by ID
    pub fn get_backup(&self, id: &str) -> Result<Option<BackupEntry>> {
        let backups = self.list_backups()?;
        Ok(backups
            .into_iter()
            .find(|b| b.id == id || b.filename.contains(id)))
    }
}
