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

//! src/plugin/store.rs
//!
//! Persistence for plugin panel values.
//!
//! Each plugin's settings live in their own file,
//! `plugins/<name>.properties`, in the same key=value format as
//! server.properties. Loading a missing file yields the manifest
//! defaults; saving writes atomically.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use atomic_write_file::AtomicWriteFile;

use super::manifest::PanelManifest;
use super::PluginError;
use crate::core::parser::parse_properties;

/// Reads and writes one plugin's properties file.
#[derive(Debug)]
pub struct PluginValueStore {
    path: PathBuf,
    plugin_name: String,
}

impl PluginValueStore {
    /// Store for `<server_dir>/plugins/<plugin_name>.properties`.
    pub fn new(server_dir: &Path, plugin_name: &str) -> Self {
        let path = server_dir
            .join("plugins")
            .join(format!("{}.properties", plugin_name));
        Self {
            path,
            plugin_name: plugin_name.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored values, falling back to manifest defaults.
    ///
    /// Every field the manifest declares gets an entry: stored values
    /// win, missing ones take the field default. Keys in the file that
    /// the manifest no longer declares are dropped.
    pub fn load(&self, manifest: &PanelManifest) -> Result<BTreeMap<String, String>, PluginError> {
        let mut values: BTreeMap<String, String> = manifest
            .fields()
            .map(|field| (field.key.clone(), field.default_value()))
            .collect();

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(values),
            Err(e) => return Err(e.into()),
        };

        let props = parse_properties(&content)
            .map_err(|e| PluginError::BadManifest(e.to_string()))?;
        for prop in props {
            if let Some(slot) = values.get_mut(prop.key.as_str()) {
                *slot = prop.value;
            }
        }

        Ok(values)
    }

    /// Writes the values atomically, sorted by key.
    pub fn save(&self, values: &BTreeMap<String, String>) -> Result<(), PluginError> {
        let mut content = format!("# Settings for plugin '{}'.\n", self.plugin_name);
        for (key, value) in values {
            content.push_str(key);
            content.push('=');
            content.push_str(value);
            content.push('\n');
        }

        let mut file = AtomicWriteFile::open(&self.path)?;
        file.write_all(content.as_bytes())?;
        file.commit()?;
        Ok(())
    }
}
