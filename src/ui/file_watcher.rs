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

//! File system watcher for live config file monitoring
//!
//! Uses OS-level file watching (Linux inotify) via the notify crate to
//! spot external rewrites of server.properties.
//!
//! The watch is placed on the parent directory, not the file itself:
//! the server and other editors replace the file by rename, which
//! would strand a watch on the old inode. Events for sibling files in
//! the directory are filtered out by name.

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::{
    ffi::OsString,
    path::PathBuf,
    sync::mpsc::{channel, Receiver},
};

/// Watches one properties file for external modifications.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    file_name: OsString,
}

impl FileWatcher {
    pub fn new(path: PathBuf) -> Result<Self, notify::Error> {
        let (tx, rx) = channel();

        let mut watcher = RecommendedWatcher::new(
            move |res| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        let file_name = path.file_name().map(OsString::from).unwrap_or_default();

        Ok(FileWatcher {
            _watcher: watcher,
            rx,
            file_name,
        })
    }

    /// Drains pending events, reporting whether the file was touched
    /// (non-blocking).
    pub fn check_for_changes(&self) -> bool {
        let mut changed = false;
        while let Ok(event_result) = self.rx.try_recv() {
            if let Ok(event) = event_result {
                if self.is_relevant(&event) {
                    changed = true;
                }
            }
        }
        changed
    }

    /// A write, create, or rename that lands on our file name.
    fn is_relevant(&self, event: &Event) -> bool {
        if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
            return false;
        }
        event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(self.file_name.as_os_str()))
    }
}
