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

//! src/plugin/manifest.rs
//!
//! Declarative panel manifests shipped inside plugin archives.
//!
//! A plugin that wants a settings tab in the editor bundles a
//! `config-editor.yml` next to its `plugin.yml`:
//!
//! ```yaml
//! tabs:
//!   - title: AntiCheat
//!     fields:
//!       - key: check-speed
//!         label: Speed checks
//!         type: toggle
//!         default: true
//!       - key: max-violations
//!         label: Max violations
//!         type: number
//!         min: 1
//!         max: 100
//!         default: 10
//! ```
//!
//! The editor renders each tab from this description and persists the
//! values to `plugins/<name>.properties`. Nothing from the archive is
//! ever executed.

use serde::Deserialize;

/// Top-level structure of a `config-editor.yml` file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PanelManifest {
    pub tabs: Vec<PanelTab>,
}

/// One notebook tab contributed by a plugin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PanelTab {
    pub title: String,
    pub fields: Vec<FieldSpec>,
}

/// One labelled setting inside a tab.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldSpec {
    /// Key the value is stored under in the plugin's properties file.
    pub key: String,
    /// Label shown next to the widget.
    pub label: String,
    #[serde(default)]
    pub tooltip: Option<String>,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// The widget a field renders as, with its defaults and constraints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// On/off switch.
    Toggle {
        #[serde(default)]
        default: bool,
    },
    /// Free-form text entry.
    Text {
        #[serde(default)]
        default: String,
    },
    /// Integer spinner with an inclusive range.
    Number { min: i64, max: i64, default: i64 },
    /// Dropdown over a fixed option list.
    Choice {
        options: Vec<String>,
        default: String,
    },
}

impl FieldSpec {
    /// The field's default, rendered as its stored string form.
    pub fn default_value(&self) -> String {
        match &self.kind {
            FieldKind::Toggle { default } => default.to_string(),
            FieldKind::Text { default } => default.clone(),
            FieldKind::Number { default, .. } => default.to_string(),
            FieldKind::Choice { default, .. } => default.clone(),
        }
    }
}

impl PanelManifest {
    /// Parses a manifest from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Checks the manifest for internal inconsistencies.
    ///
    /// Returns a human-readable description of the first problem found:
    /// empty tabs, duplicate keys, a number default outside its range,
    /// or a choice default missing from its option list.
    pub fn check(&self) -> Result<(), String> {
        if self.tabs.is_empty() {
            return Err("manifest declares no tabs".to_string());
        }

        let mut seen_keys = std::collections::HashSet::new();
        for tab in &self.tabs {
            if tab.fields.is_empty() {
                return Err(format!("tab '{}' has no fields", tab.title));
            }
            for field in &tab.fields {
                if !seen_keys.insert(field.key.as_str()) {
                    return Err(format!("duplicate field key '{}'", field.key));
                }
                match &field.kind {
                    FieldKind::Number { min, max, default } => {
                        if min > max {
                            return Err(format!("field '{}': min > max", field.key));
                        }
                        if default < min || default > max {
                            return Err(format!(
                                "field '{}': default {} outside {}..={}",
                                field.key, default, min, max
                            ));
                        }
                    }
                    FieldKind::Choice { options, default } => {
                        if options.is_empty() {
                            return Err(format!("field '{}': no options", field.key));
                        }
                        if !options.contains(default) {
                            return Err(format!(
                                "field '{}': default '{}' is not an option",
                                field.key, default
                            ));
                        }
                    }
                    FieldKind::Toggle { .. } | FieldKind::Text { .. } => {}
                }
            }
        }
        Ok(())
    }

    /// All field specs across all tabs.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.tabs.iter().flat_map(|tab| tab.fields.iter())
    }
}
