// Copyright 2026 mcprop-editor contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/config/transaction.rs
//!
//! Transactional writes for server.properties.
//!
//! A transaction snapshots the current file into a timestamped backup
//! before any change, then replaces the file atomically. If anything
//! fails mid-write, the original file is untouched and the backup is
//! there regardless.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use atomic_write_file::AtomicWriteFile;

use super::{ConfigError, ConfigManager};
use crate::core::validator::validate_content;

/// An in-flight write to the properties file.
///
/// Created with [`ConfigTransaction::begin`], which takes the backup.
/// The write itself happens in [`commit`](ConfigTransaction::commit) or
/// [`commit_with_validation`](ConfigTransaction::commit_with_validation).
pub struct ConfigTransaction<'a> {
    manager: &'a ConfigManager,
    backup_path: PathBuf,
}

impl<'a> ConfigTransaction<'a> {
    /// Starts a transaction by backing up the current file state.
    pub fn begin(manager: &'a ConfigManager) -> Result<Self, ConfigError> {
        let backup_path = manager.create_timestamped_backup()?;
        Ok(Self {
            manager,
            backup_path,
        })
    }

    /// Replaces the properties file with `new_content` atomically.
    ///
    /// The content is written to a temporary file in the same directory
    /// and renamed over the original, so a crash mid-write can never
    /// leave a half-written server.properties behind.
    pub fn commit(self, new_content: &str) -> Result<(), ConfigError> {
        let mut file = AtomicWriteFile::open(&self.manager.config_path)
            .map_err(|e| ConfigError::WriteFailed(e.to_string()))?;

        file.write_all(new_content.as_bytes())
            .map_err(|e| ConfigError::WriteFailed(e.to_string()))?;

        file.commit()
            .map_err(|e| ConfigError::WriteFailed(e.to_string()))?;

        Ok(())
    }

    /// Validates `new_content` before committing it.
    ///
    /// Error-level findings block the commit and roll the file back to
    /// the snapshot taken at `begin`. Warnings are printed to stderr but
    /// do not stop the write.
    pub fn commit_with_validation(self, new_content: &str) -> Result<(), ConfigError> {
        let report = validate_content(new_content)?;

        if report.has_errors() {
            let summary: Vec<String> = report
                .errors()
                .map(|issue| format!("{}: {}", issue.key, issue.message))
                .collect();
            self.rollback()?;
            return Err(ConfigError::ValidationFailed(summary.join("; ")));
        }

        for issue in report.warnings() {
            eprintln!("⚠ {}: {}", issue.key, issue.message);
        }

        self.commit(new_content)
    }

    /// Restores the file from the backup taken at `begin`.
    pub fn rollback(self) -> Result<(), ConfigError> {
        let content = fs::read_to_string(&self.backup_path)
            .map_err(|e| ConfigError::BackupFailed(format!("cannot read backup: {}", e)))?;

        let mut file = AtomicWriteFile::open(&self.manager.config_path)
            .map_err(|e| ConfigError::WriteFailed(e.to_string()))?;
        file.write_all(content.as_bytes())
            .map_err(|e| ConfigError::WriteFailed(e.to_string()))?;
        file.commit()
            .map_err(|e| ConfigError::WriteFailed(e.to_string()))?;

        Ok(())
    }

    /// Path of the backup created when the transaction began.
    pub fn backup_path(&self) -> &PathBuf {
        &self.backup_path
    }
}
