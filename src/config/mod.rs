//! Configuration file management with atomic writes and backup support.
//!
//! This module provides safe, transactional operations for the
//! server.properties file. Key features:
//!
//! - **Atomic writes**: Uses temp-file-then-rename to prevent corruption
//! - **Automatic backups**: Every write creates a timestamped backup
//! - **Rollback safety**: Failed transactions leave the original untouched
//! - **Symlink warnings**: Alerts the user but allows symlinked configs
//!
//! # Example
//!
//! ```no_run
//! use mcprop_editor::config::{ConfigManager, ConfigTransaction};
//!
//! let manager = ConfigManager::new("server.properties".into())?;
//!
//! let tx = ConfigTransaction::begin(&manager)?;
//! tx.commit("motd=Hello\n")?;
//! # Ok::<(), mcprop_editor::config::ConfigError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use chrono::Local;
use thiserror::Error;

pub mod transaction;

pub use transaction::ConfigTransaction;

/// Errors that can occur during configuration management.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// server.properties does not exist.
    #[error("Properties file not found: {0}")]
    NotFound(PathBuf),
    /// Backup directory cannot be created or written to.
    #[error("Backup directory not writable: {0}")]
    BackupDirNotWritable(PathBuf),
    /// Failed to create backup file.
    #[error("Failed to create backup: {0}")]
    BackupFailed(String),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// New content failed validation and the commit was blocked.
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
    /// The file is syntactically unparseable.
    #[error("Parse failed: {0}")]
    ParseFailed(#[from] crate::core::parser::ParseError),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Manages the server.properties file with safe atomic operations.
///
/// The ConfigManager provides read-only access and transactional writes
/// with automatic backup creation. All writes go through the transaction
/// API to ensure atomicity and recoverability.
#[derive(Debug)]
pub struct ConfigManager {
    /// Path to server.properties.
    config_path: PathBuf,
    backup_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a new ConfigManager for the given properties file.
    ///
    /// This validates that the file exists and creates the backup
    /// directory next to it (`backups/`) if needed. A symlinked file
    /// produces a warning on stderr but is allowed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist, and
    /// `ConfigError::BackupDirNotWritable` if the backup directory
    /// cannot be created.
    pub fn new(config_path: PathBuf) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::NotFound(config_path));
        }

        if config_path.read_link().is_ok() {
            eprintln!(
                "⚠ Warning: properties file is a symlink: {}",
                config_path.display()
            );
            eprintln!("  This is allowed, but be aware of what it points to.");
        }

        // Backup directory sits next to the properties file
        // e.g. /srv/minecraft/server.properties → /srv/minecraft/backups/
        let backup_dir = config_path
            .parent()
            .ok_or_else(|| {
                ConfigError::BackupDirNotWritable(PathBuf::from(
                    "properties file has no parent directory",
                ))
            })?
            .join("backups");

        if !backup_dir.exists() {
            fs::create_dir_all(&backup_dir)
                .map_err(|_| ConfigError::BackupDirNotWritable(backup_dir.clone()))?;
        }

        if backup_dir.metadata()?.permissions().readonly() {
            return Err(ConfigError::BackupDirNotWritable(backup_dir));
        }

        Ok(Self {
            config_path,
            backup_dir,
        })
    }

    /// Creates the properties file with the given content if it is
    /// missing, then constructs the manager.
    ///
    /// This is the "no config found, defaults will be saved" path: the
    /// caller renders a default sheet and we seed the file with it.
    pub fn create_with_defaults(
        config_path: PathBuf,
        default_content: &str,
    ) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            fs::write(&config_path, default_content)?;
        }
        Self::new(config_path)
    }

    /// Path to the managed properties file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the current properties file content.
    pub fn read_config(&self) -> Result<String, ConfigError> {
        Ok(fs::read_to_string(&self.config_path)?)
    }

    /// Copies the current file into the backup directory with a
    /// timestamped name, e.g. `server.properties.2026-08-24_140205`.
    pub(crate) fn create_timestamped_backup(&self) -> Result<PathBuf, ConfigError> {
        let content = fs::read_to_string(&self.config_path)?;

        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");

        let original_name = self
            .config_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ConfigError::BackupFailed("invalid file name".to_string()))?;

        let backup_filename = format!("{}.{}", original_name, timestamp);
        let backup_path = self.backup_dir.join(&backup_filename);

        fs::write(&backup_path, &content)?;

        Ok(backup_path)
    }

    /// Lists existing backups, newest first.
    pub fn list_backups(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)? {
            let path = entry?.path();
            let is_backup = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("server.properties."));
            if path.is_file() && is_backup {
                backups.push(path);
            }
        }

        // Timestamped names sort chronologically
        backups.sort();
        backups.reverse();
        Ok(backups)
    }

    /// Restores a backup over the current file, atomically, taking a
    /// fresh backup of the current state first.
    pub fn restore_backup(&self, backup_path: &Path) -> Result<(), ConfigError> {
        let content = fs::read_to_string(backup_path)
            .map_err(|e| ConfigError::BackupFailed(format!("cannot read backup: {}", e)))?;

        let tx = ConfigTransaction::begin(self)?;
        tx.commit(&content)
    }

    /// Deletes one backup file.
    pub fn delete_backup(&self, backup_path: &Path) -> Result<(), ConfigError> {
        // Only touch files inside our backup directory
        if backup_path.parent() != Some(self.backup_dir.as_path()) {
            return Err(ConfigError::BackupFailed(format!(
                "not a managed backup: {}",
                backup_path.display()
            )));
        }
        fs::remove_file(backup_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
