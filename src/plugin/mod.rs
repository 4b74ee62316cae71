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

//! src/plugin/mod.rs
//!
//! Discovery of server plugins and the settings panels they contribute.
//!
//! At startup the editor scans the server's `plugins/` directory for
//! `.jar` and `.zip` archives. An archive that contains a `plugin.yml`
//! is a plugin; if it also ships a `config-editor.yml` panel manifest,
//! the editor grows a tab for it. Archives that cannot be read are
//! reported on stderr and skipped, never aborting the scan.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use serde::Deserialize;
use thiserror::Error;

pub mod datapack;
pub mod manifest;
pub mod store;

pub use datapack::{discover_datapacks, DatapackInfo};
pub use manifest::{FieldKind, FieldSpec, PanelManifest, PanelTab};
pub use store::PluginValueStore;

/// Name of the descriptor every plugin archive must contain.
const DESCRIPTOR_FILE: &str = "plugin.yml";
/// Name of the optional panel manifest.
const MANIFEST_FILE: &str = "config-editor.yml";

/// Errors that can occur while reading a plugin archive.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("Cannot open archive: {0}")]
    Io(#[from] std::io::Error),
    #[error("Corrupt archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("Archive has no plugin.yml")]
    MissingDescriptor,
    #[error("Malformed YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Rejected manifest: {0}")]
    BadManifest(String),
}

/// The subset of `plugin.yml` the editor cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginDescriptor {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// A discovered plugin, with its panel manifest when it ships one.
#[derive(Debug, Clone)]
pub struct PluginPanel {
    pub descriptor: PluginDescriptor,
    /// Archive the plugin was loaded from.
    pub archive_path: PathBuf,
    /// `None` for plugins that don't contribute a settings tab.
    pub manifest: Option<PanelManifest>,
}

impl PluginPanel {
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }
}

/// Reads one plugin archive.
///
/// The archive must contain a `plugin.yml`; a `config-editor.yml` is
/// optional but, when present, must pass [`PanelManifest::check`].
pub fn read_plugin_archive(path: &Path) -> Result<PluginPanel, PluginError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;

    let descriptor: PluginDescriptor = {
        let yaml = read_entry(&mut archive, DESCRIPTOR_FILE)?
            .ok_or(PluginError::MissingDescriptor)?;
        serde_yaml::from_str(&yaml)?
    };

    let manifest = match read_entry(&mut archive, MANIFEST_FILE)? {
        Some(yaml) => {
            let manifest = PanelManifest::from_yaml(&yaml)?;
            manifest.check().map_err(PluginError::BadManifest)?;
            Some(manifest)
        }
        None => None,
    };

    Ok(PluginPanel {
        descriptor,
        archive_path: path.to_path_buf(),
        manifest,
    })
}

fn read_entry(
    archive: &mut zip::ZipArchive<File>,
    name: &str,
) -> Result<Option<String>, PluginError> {
    match archive.by_name(name) {
        Ok(mut entry) => {
            let mut content = String::new();
            entry.read_to_string(&mut content)?;
            Ok(Some(content))
        }
        Err(zip::result::ZipError::FileNotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Scans `<server_dir>/plugins` for plugin archives.
///
/// Missing directory means no plugins. Unreadable archives are logged
/// and skipped so one broken jar can't hide the rest. Results are
/// sorted by plugin name for stable tab order.
pub fn discover_plugins(server_dir: &Path) -> Vec<PluginPanel> {
    let plugins_dir = server_dir.join("plugins");
    let entries = match std::fs::read_dir(&plugins_dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut panels = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let is_archive = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("jar") || e.eq_ignore_ascii_case("zip"));
        if !path.is_file() || !is_archive {
            continue;
        }

        match read_plugin_archive(&path) {
            Ok(panel) => panels.push(panel),
            Err(e) => {
                eprintln!("⚠ Skipping plugin {}: {}", path.display(), e);
            }
        }
    }

    panels.sort_by(|a, b| a.name().cmp(b.name()));
    panels
}

#[cfg(test)]
mod tests;
