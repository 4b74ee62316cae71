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

//! src/core/sheet.rs
//!
//! The in-memory model of one server.properties file.
//!
//! A `PropertySheet` holds a typed value for every schema key, a verbatim
//! extras map for keys the schema does not know, and the two datapack
//! lists. Loading coerces each wire value against the schema and falls
//! back to the default on anything malformed; rendering produces the
//! complete file text with the header, every key in sorted order, and
//! the special wire couplings (difficulty/hardcore, namespaced
//! level-type, constant generator-settings).

use chrono::Local;
use std::collections::{BTreeMap, HashMap};

use crate::core::parser::{parse_properties, split_pack_list, ParseError};
use crate::core::schema::{self, PropertyKind, PropertySpec};
use crate::core::types::{Difficulty, LevelType, PropertyValue};

/// Keys with wire behaviour the schema table cannot express.
const KEY_DIFFICULTY: &str = "difficulty";
const KEY_HARDCORE: &str = "hardcore";
const KEY_LEVEL_TYPE: &str = "level-type";
const KEY_GENERATOR_SETTINGS: &str = "generator-settings";
const KEY_ENABLED_PACKS: &str = "initial-enabled-packs";
const KEY_DISABLED_PACKS: &str = "initial-disabled-packs";

/// Typed snapshot of a server.properties file.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertySheet {
    /// Typed values for every known key (always fully populated)
    values: HashMap<&'static str, PropertyValue>,
    /// Unknown keys, kept verbatim and written back on save
    extras: BTreeMap<String, String>,
    /// Datapacks listed as enabled (`vanilla` by default)
    pub enabled_packs: Vec<String>,
    /// Datapacks listed as disabled
    pub disabled_packs: Vec<String>,
}

impl Default for PropertySheet {
    fn default() -> Self {
        Self::defaults()
    }
}

impl PropertySheet {
    /// Creates a sheet populated with every schema default.
    pub fn defaults() -> Self {
        let mut values = HashMap::new();
        for spec in schema::schema() {
            values.insert(spec.key, default_value(spec));
        }

        Self {
            values,
            extras: BTreeMap::new(),
            enabled_packs: vec!["vanilla".to_string()],
            disabled_packs: Vec::new(),
        }
    }

    /// Parses file content into a sheet.
    ///
    /// Known keys are coerced to their schema kind; a malformed value
    /// silently falls back to the default (the validator reports the
    /// problem separately). Unknown keys land in the extras map.
    pub fn from_source(content: &str) -> Result<Self, ParseError> {
        let mut sheet = Self::defaults();

        // hardcore and difficulty arrive as two keys in either order;
        // combine them once both passes are done.
        let mut difficulty = String::from("easy");
        let mut hardcore = false;

        for prop in parse_properties(content)? {
            match prop.key.as_str() {
                KEY_HARDCORE => hardcore = parse_bool(&prop.value).unwrap_or(false),
                KEY_DIFFICULTY => difficulty = prop.value.to_lowercase(),
                KEY_GENERATOR_SETTINGS => {
                    // Not editable; rewritten as {} on save
                }
                KEY_ENABLED_PACKS => sheet.enabled_packs = split_pack_list(&prop.value),
                KEY_DISABLED_PACKS => sheet.disabled_packs = split_pack_list(&prop.value),
                key => match schema::find(key) {
                    Some(spec) => {
                        let value = coerce(spec, &prop.value);
                        sheet.values.insert(spec.key, value);
                    }
                    None => {
                        sheet.extras.insert(prop.key.clone(), prop.value.clone());
                    }
                },
            }
        }

        // "hardcore" is a legal choice value as well as a separate key
        let selection = match difficulty.as_str() {
            "hardcore" => Difficulty::Hardcore,
            other => Difficulty::from_wire(other, hardcore),
        };
        sheet
            .values
            .insert(KEY_DIFFICULTY, PropertyValue::Text(selection.to_string()));

        if sheet.enabled_packs.is_empty() {
            sheet.enabled_packs.push("vanilla".to_string());
        }

        Ok(sheet)
    }

    /// Returns the typed value for a known key.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.values.get(key)
    }

    /// Sets the value for a known key. Unknown keys are ignored.
    pub fn set(&mut self, key: &str, value: PropertyValue) {
        if let Some(spec) = schema::find(key) {
            self.values.insert(spec.key, value);
        }
    }

    /// Boolean accessor; falls back to the schema default.
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).and_then(PropertyValue::as_bool).unwrap_or_else(|| {
            matches!(
                schema::find(key).map(|s| s.kind),
                Some(PropertyKind::Bool { default: true })
            )
        })
    }

    /// Integer accessor; falls back to the schema default.
    pub fn get_int(&self, key: &str) -> i64 {
        self.get(key)
            .and_then(PropertyValue::as_int)
            .unwrap_or_else(|| match schema::find(key).map(|s| s.kind) {
                Some(PropertyKind::Int { default, .. }) => default,
                _ => 0,
            })
    }

    /// Text accessor; empty string when absent.
    pub fn get_text(&self, key: &str) -> String {
        self.get(key)
            .and_then(PropertyValue::as_text)
            .unwrap_or_default()
            .to_string()
    }

    /// Unknown keys carried through from the loaded file.
    pub fn extras(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extras.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Stores an unknown key for verbatim round-tripping.
    pub fn insert_extra(&mut self, key: String, value: String) {
        self.extras.insert(key, value);
    }

    /// Moves a pack from the disabled list to the enabled list.
    pub fn enable_pack(&mut self, name: &str) {
        if let Some(pos) = self.disabled_packs.iter().position(|p| p == name) {
            let pack = self.disabled_packs.remove(pos);
            self.enabled_packs.push(pack);
        }
    }

    /// Moves a pack from the enabled list to the disabled list.
    ///
    /// `vanilla` cannot be disabled.
    pub fn disable_pack(&mut self, name: &str) {
        if name == "vanilla" {
            return;
        }
        if let Some(pos) = self.enabled_packs.iter().position(|p| p == name) {
            let pack = self.enabled_packs.remove(pos);
            self.disabled_packs.push(pack);
        }
    }

    /// Reconciles the pack lists with the packs actually on disk.
    ///
    /// Discovered packs not mentioned in either list start disabled;
    /// listed packs that disappeared from disk are dropped. `vanilla`
    /// always stays enabled.
    pub fn reconcile_packs(&mut self, discovered: &[String]) {
        let known = |name: &str| name == "vanilla" || discovered.iter().any(|d| d == name);

        self.enabled_packs.retain(|p| known(p));
        self.disabled_packs.retain(|p| known(p));

        if !self.enabled_packs.iter().any(|p| p == "vanilla") {
            self.enabled_packs.insert(0, "vanilla".to_string());
        }

        for pack in discovered {
            let listed = self.enabled_packs.iter().any(|p| p == pack)
                || self.disabled_packs.iter().any(|p| p == pack);
            if !listed {
                self.disabled_packs.push(pack.clone());
            }
        }
    }

    /// Renders the complete file text.
    ///
    /// Header comments, then every key in sorted order: schema keys with
    /// their wire couplings, extras verbatim, the datapack lists, and a
    /// trailing end-of-configuration marker.
    pub fn render(&self) -> String {
        let mut lines: Vec<(String, String)> = Vec::with_capacity(self.values.len() + 8);

        for spec in schema::schema() {
            match spec.key {
                KEY_DIFFICULTY => {
                    // The stored text is the five-way selection, hardcore included
                    let selection = match self.get_text(KEY_DIFFICULTY).as_str() {
                        "hardcore" => Difficulty::Hardcore,
                        other => Difficulty::from_wire(other, false),
                    };
                    let (difficulty, hardcore) = selection.wire_pair();
                    lines.push((KEY_DIFFICULTY.to_string(), difficulty.to_string()));
                    lines.push((KEY_HARDCORE.to_string(), hardcore.to_string()));
                }
                KEY_LEVEL_TYPE => {
                    let level = LevelType::from_wire(&self.get_text(KEY_LEVEL_TYPE));
                    lines.push((KEY_LEVEL_TYPE.to_string(), level.to_wire()));
                }
                key => {
                    let value = self
                        .get(key)
                        .map(|v| v.to_string())
                        .unwrap_or_default();
                    lines.push((key.to_string(), value));
                }
            }
        }

        // World preset tuning is not supported; always written as empty
        lines.push((KEY_GENERATOR_SETTINGS.to_string(), "{}".to_string()));

        for (key, value) in &self.extras {
            lines.push((key.clone(), value.clone()));
        }

        lines.push((KEY_ENABLED_PACKS.to_string(), self.enabled_packs.join(",")));
        lines.push((
            KEY_DISABLED_PACKS.to_string(),
            self.disabled_packs.join(","),
        ));

        lines.sort_by(|a, b| a.0.cmp(&b.0));

        let mut out = String::new();
        out.push_str("# Minecraft server properties\n");
        out.push_str(&format!("# {}\n", Local::now().format("%a %b %d %H:%M:%S %Y")));
        out.push_str("# Generated by mcprop-editor.\n");

        for (key, value) in lines {
            out.push_str(&key);
            out.push('=');
            out.push_str(&value);
            out.push('\n');
        }

        out.push_str("# End of configuration.\n");
        out
    }
}

/// Default typed value for a spec.
fn default_value(spec: &PropertySpec) -> PropertyValue {
    match spec.kind {
        PropertyKind::Bool { default } => PropertyValue::Bool(default),
        PropertyKind::Int { default, .. } => PropertyValue::Int(default),
        PropertyKind::Text { default } => PropertyValue::Text(default.to_string()),
        PropertyKind::Choice { default, .. } => PropertyValue::Text(default.to_string()),
    }
}

/// Coerces a wire string to the spec's kind, defaulting on anything
/// malformed and clamping integers into range.
fn coerce(spec: &PropertySpec, raw: &str) -> PropertyValue {
    match spec.kind {
        PropertyKind::Bool { default } => {
            PropertyValue::Bool(parse_bool(raw).unwrap_or(default))
        }
        PropertyKind::Int { min, max, default } => {
            let parsed = raw.trim().parse::<i64>().unwrap_or(default);
            PropertyValue::Int(parsed.clamp(min, max))
        }
        PropertyKind::Text { .. } => PropertyValue::Text(raw.to_string()),
        PropertyKind::Choice { options, default } => {
            if spec.key == KEY_LEVEL_TYPE {
                return PropertyValue::Text(LevelType::from_wire(raw).to_string());
            }
            let lowered = raw.trim().to_lowercase();
            if options.contains(&lowered.as_str()) {
                PropertyValue::Text(lowered)
            } else {
                PropertyValue::Text(default.to_string())
            }
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
