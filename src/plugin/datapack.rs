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

//! src/plugin/datapack.rs
//!
//! Datapack discovery for the world's `datapacks/` directory.
//!
//! A datapack is either a zip archive or an unpacked directory, in both
//! cases carrying a `pack.mcmeta` at its root. The pack's identifier is
//! its file or directory name; the display name comes from the mcmeta
//! description, which may be a plain string or a `{"translate": ...}`
//! object.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use serde::Deserialize;

use super::PluginError;

/// A datapack found in the world's `datapacks/` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatapackInfo {
    /// Identifier used in `initial-enabled-packs` / `initial-disabled-packs`.
    pub id: String,
    /// Human-readable name from `pack.mcmeta`.
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
struct PackMcmeta {
    pack: PackSection,
}

#[derive(Debug, Deserialize)]
struct PackSection {
    description: PackDescription,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PackDescription {
    Plain(String),
    Translated { translate: String },
}

impl PackDescription {
    fn into_string(self) -> String {
        match self {
            PackDescription::Plain(s) => s,
            PackDescription::Translated { translate } => translate,
        }
    }
}

fn parse_mcmeta(json: &str) -> Result<String, serde_json::Error> {
    let meta: PackMcmeta = serde_json::from_str(json)?;
    Ok(meta.pack.description.into_string())
}

fn read_zipped_mcmeta(path: &Path) -> Result<String, PluginError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    let mut entry = archive.by_name("pack.mcmeta")?;
    let mut json = String::new();
    entry.read_to_string(&mut json)?;
    parse_mcmeta(&json).map_err(|e| PluginError::BadManifest(e.to_string()))
}

fn read_unpacked_mcmeta(dir: &Path) -> Result<String, PluginError> {
    let json = std::fs::read_to_string(dir.join("pack.mcmeta"))?;
    parse_mcmeta(&json).map_err(|e| PluginError::BadManifest(e.to_string()))
}

/// Scans a `datapacks/` directory for packs.
///
/// Entries without a readable `pack.mcmeta` are logged and skipped.
/// A missing directory yields an empty list. Results are sorted by id.
pub fn discover_datapacks(datapacks_dir: &Path) -> Vec<DatapackInfo> {
    let entries = match std::fs::read_dir(datapacks_dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let mut packs = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();

        let result = if path.is_dir() {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|id| (id.to_string(), read_unpacked_mcmeta(&path)))
        } else if path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("zip"))
        {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(|id| (id.to_string(), read_zipped_mcmeta(&path)))
        } else {
            None
        };

        match result {
            Some((id, Ok(display_name))) => packs.push(DatapackInfo { id, display_name }),
            Some((_, Err(e))) => {
                eprintln!("⚠ Skipping datapack {}: {}", path.display(), e);
            }
            None => {}
        }
    }

    packs.sort_by(|a, b| a.id.cmp(&b.id));
    packs
}
