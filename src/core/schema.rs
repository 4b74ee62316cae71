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

//! src/core/schema.rs
//!
//! Static registry of every vanilla server property the editor manages.
//!
//! Each entry carries the wire key, the value kind (with range and
//! default), the tab it appears on, and its tooltip. The parser, the
//! writer, the validator, and the widget factory all drive off this one
//! table, so adding a property for a new server version is a single new
//! entry here.
//!
//! Not listed on purpose:
//! - `hardcore` is folded into the five-way `difficulty` choice
//! - `generator-settings` is always written as `{}` and never edited
//! - `initial-enabled-packs` / `initial-disabled-packs` belong to the
//!   datapack panel, not the property form

use crate::core::types::{Difficulty, GameMode, LevelType, RegionFileCompression};

const I32_MAX: i64 = i32::MAX as i64;

/// Which built-in tab a property appears on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Section {
    General,
    World,
    Players,
    Network,
    RconQuery,
    Advanced,
}

impl Section {
    /// Tab display order.
    pub const ALL: [Section; 6] = [
        Section::General,
        Section::World,
        Section::Players,
        Section::Network,
        Section::RconQuery,
        Section::Advanced,
    ];

    /// Tab label.
    pub fn title(self) -> &'static str {
        match self {
            Section::General => "General",
            Section::World => "World",
            Section::Players => "Players",
            Section::Network => "Network",
            Section::RconQuery => "Rcon & Query",
            Section::Advanced => "Advanced",
        }
    }
}

/// The kind of widget and value a property uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertyKind {
    /// Checkbox
    Bool { default: bool },
    /// Spin button with a clamped range
    Int { min: i64, max: i64, default: i64 },
    /// Free-text entry
    Text { default: &'static str },
    /// Dropdown over a fixed option list
    Choice {
        options: &'static [&'static str],
        default: &'static str,
    },
}

/// One managed server property.
#[derive(Clone, Copy, Debug)]
pub struct PropertySpec {
    /// Wire key, e.g. `max-players`
    pub key: &'static str,
    /// Tab assignment
    pub section: Section,
    /// Value kind with range and default
    pub kind: PropertyKind,
    /// Help text shown as a widget tooltip
    pub tooltip: &'static str,
}

/// Returns the full property registry in stable (sorted-by-key) order.
pub fn schema() -> &'static [PropertySpec] {
    &SCHEMA
}

/// Looks up a property by wire key.
pub fn find(key: &str) -> Option<&'static PropertySpec> {
    SCHEMA.iter().find(|spec| spec.key == key)
}

/// Returns the specs belonging to one tab, in registry order.
pub fn section_specs(section: Section) -> impl Iterator<Item = &'static PropertySpec> {
    SCHEMA.iter().filter(move |spec| spec.section == section)
}

// Tooltip text follows the property descriptions on the Minecraft wiki.
static SCHEMA: [PropertySpec; 52] = [
    PropertySpec {
        key: "accepts-transfers",
        section: Section::General,
        kind: PropertyKind::Bool { default: false },
        tooltip: "Whether to accept incoming transfers via a transfer packet. \
                  When disabled, transferred players are disconnected.",
    },
    PropertySpec {
        key: "allow-flight",
        section: Section::General,
        kind: PropertyKind::Bool { default: false },
        tooltip: "Whether players can use flight while in Survival mode by using mods. \
                  When disabled, players in the air for at least five seconds are kicked. \
                  Has no effect in Creative mode.",
    },
    PropertySpec {
        key: "allow-nether",
        section: Section::General,
        kind: PropertyKind::Bool { default: true },
        tooltip: "Whether players can travel to the Nether.",
    },
    PropertySpec {
        key: "broadcast-console-to-ops",
        section: Section::RconQuery,
        kind: PropertyKind::Bool { default: true },
        tooltip: "Whether to send console command output to all online operators.",
    },
    PropertySpec {
        key: "broadcast-rcon-to-ops",
        section: Section::RconQuery,
        kind: PropertyKind::Bool { default: true },
        tooltip: "Whether to send rcon console command output to all online operators.",
    },
    PropertySpec {
        key: "bug-report-link",
        section: Section::Advanced,
        kind: PropertyKind::Text { default: "" },
        tooltip: "The URL for the report_bug server link. If empty, the link is not sent.",
    },
    PropertySpec {
        key: "difficulty",
        section: Section::General,
        kind: PropertyKind::Choice {
            options: &Difficulty::OPTIONS,
            default: "easy",
        },
        tooltip: "The difficulty of the server (mob damage, hunger, poison). \
                  Hardcore is treated as a fifth difficulty and is written as \
                  difficulty=hard plus hardcore=true.",
    },
    PropertySpec {
        key: "enable-command-block",
        section: Section::General,
        kind: PropertyKind::Bool { default: false },
        tooltip: "Whether command blocks are enabled.",
    },
    PropertySpec {
        key: "enable-jmx-monitoring",
        section: Section::Advanced,
        kind: PropertyKind::Bool { default: false },
        tooltip: "Whether to expose an MBean with tick timing attributes. \
                  Enabling JMX on the Java runtime also requires JVM flags.",
    },
    PropertySpec {
        key: "enable-query",
        section: Section::RconQuery,
        kind: PropertyKind::Bool { default: false },
        tooltip: "Whether to enable the GameSpy query protocol, which provides \
                  information about the server.",
    },
    PropertySpec {
        key: "enable-rcon",
        section: Section::RconQuery,
        kind: PropertyKind::Bool { default: false },
        tooltip: "Whether to enable rcon, which allows access to the server console \
                  over the network. Rcon is not encrypted; only connect from localhost.",
    },
    PropertySpec {
        key: "enable-status",
        section: Section::Network,
        kind: PropertyKind::Bool { default: true },
        tooltip: "Whether the server appears as online in the server list. When \
                  disabled, status replies are suppressed but connections are still accepted.",
    },
    PropertySpec {
        key: "enforce-secure-profile",
        section: Section::Players,
        kind: PropertyKind::Bool { default: true },
        tooltip: "Whether only players with a Mojang-signed public key can join. \
                  When disabled, chat messages are unsigned and cannot be reported.",
    },
    PropertySpec {
        key: "enforce-whitelist",
        section: Section::Players,
        kind: PropertyKind::Bool { default: false },
        tooltip: "Whether to enforce whitelist changes: players not on the whitelist \
                  are kicked when the server reloads it.",
    },
    PropertySpec {
        key: "entity-broadcast-range-percentage",
        section: Section::Advanced,
        kind: PropertyKind::Int {
            min: 10,
            max: 1000,
            default: 100,
        },
        tooltip: "How close entities need to be to a player to be sent, as a \
                  percentage. Higher values render entities from farther away.",
    },
    PropertySpec {
        key: "force-gamemode",
        section: Section::General,
        kind: PropertyKind::Bool { default: false },
        tooltip: "Whether to switch players to the default game mode on join.",
    },
    PropertySpec {
        key: "function-permission-level",
        section: Section::Players,
        kind: PropertyKind::Int {
            min: 1,
            max: 4,
            default: 2,
        },
        tooltip: "The default permission level for functions.",
    },
    PropertySpec {
        key: "gamemode",
        section: Section::General,
        kind: PropertyKind::Choice {
            options: &GameMode::OPTIONS,
            default: "survival",
        },
        tooltip: "The default game mode.",
    },
    PropertySpec {
        key: "generate-structures",
        section: Section::World,
        kind: PropertyKind::Bool { default: true },
        tooltip: "Whether structures such as villages are generated. Dungeons \
                  still generate when disabled.",
    },
    PropertySpec {
        key: "hide-online-players",
        section: Section::Players,
        kind: PropertyKind::Bool { default: false },
        tooltip: "Whether to omit the player list from status requests.",
    },
    PropertySpec {
        key: "level-name",
        section: Section::World,
        kind: PropertyKind::Text { default: "world" },
        tooltip: "The world name and directory. An existing valid world at this \
                  path is loaded; otherwise a new world is generated there.",
    },
    PropertySpec {
        key: "level-seed",
        section: Section::World,
        kind: PropertyKind::Text { default: "" },
        tooltip: "The seed for the generated world. If left blank, a random seed is used.",
    },
    PropertySpec {
        key: "level-type",
        section: Section::World,
        kind: PropertyKind::Choice {
            options: &LevelType::OPTIONS,
            default: "normal",
        },
        tooltip: "The preset for the generated world.",
    },
    PropertySpec {
        key: "log-ips",
        section: Section::Network,
        kind: PropertyKind::Bool { default: true },
        tooltip: "Whether client IP addresses appear in console and log output.",
    },
    PropertySpec {
        key: "max-chained-neighbor-updates",
        section: Section::Advanced,
        kind: PropertyKind::Int {
            min: -1,
            max: I32_MAX,
            default: 1_000_000,
        },
        tooltip: "The limit of consecutive neighbor updates before skipping \
                  additional ones. Negative values disable the limit.",
    },
    PropertySpec {
        key: "max-players",
        section: Section::Players,
        kind: PropertyKind::Int {
            min: -1,
            max: I32_MAX,
            default: 20,
        },
        tooltip: "The maximum number of players online at the same time. Ops with \
                  bypassesPlayerLimit can join a full server.",
    },
    PropertySpec {
        key: "max-tick-time",
        section: Section::Advanced,
        kind: PropertyKind::Int {
            min: -1,
            max: i64::MAX,
            default: 60_000,
        },
        tooltip: "The maximum number of milliseconds a single tick may take before \
                  the watchdog stops the server.",
    },
    PropertySpec {
        key: "max-world-size",
        section: Section::World,
        kind: PropertyKind::Int {
            min: 1,
            max: 29_999_984,
            default: 29_999_984,
        },
        tooltip: "The radius in blocks from the world center where the world \
                  border appears.",
    },
    PropertySpec {
        key: "motd",
        section: Section::General,
        kind: PropertyKind::Text {
            default: "A Minecraft Server",
        },
        tooltip: "The message displayed in the client server list, below the server name.",
    },
    PropertySpec {
        key: "network-compression-threshold",
        section: Section::Network,
        kind: PropertyKind::Int {
            min: -1,
            max: 1500,
            default: 256,
        },
        tooltip: "How big a packet must be to get compressed. -1 disables compression.",
    },
    PropertySpec {
        key: "online-mode",
        section: Section::Players,
        kind: PropertyKind::Bool { default: true },
        tooltip: "Whether only players verified against the Minecraft account \
                  database may join.",
    },
    PropertySpec {
        key: "op-permission-level",
        section: Section::Players,
        kind: PropertyKind::Int {
            min: 0,
            max: 4,
            default: 4,
        },
        tooltip: "The default permission level for ops when using /op.",
    },
    PropertySpec {
        key: "pause-when-empty-seconds",
        section: Section::Advanced,
        kind: PropertyKind::Int {
            min: 1,
            max: I32_MAX,
            default: 60,
        },
        tooltip: "How many seconds must pass with no player online before the \
                  server pauses.",
    },
    PropertySpec {
        key: "player-idle-timeout",
        section: Section::Players,
        kind: PropertyKind::Int {
            min: 0,
            max: I32_MAX,
            default: 0,
        },
        tooltip: "How many minutes a player may idle before being kicked. \
                  0 never kicks idle players.",
    },
    PropertySpec {
        key: "prevent-proxy-connections",
        section: Section::Network,
        kind: PropertyKind::Bool { default: false },
        tooltip: "Whether to kick players whose ISP/AS differs from the one \
                  Mojang authenticated.",
    },
    PropertySpec {
        key: "pvp",
        section: Section::General,
        kind: PropertyKind::Bool { default: true },
        tooltip: "Whether Player vs. Player combat is enabled.",
    },
    PropertySpec {
        key: "query.port",
        section: Section::RconQuery,
        kind: PropertyKind::Int {
            min: 0,
            max: 65_535,
            default: 25_565,
        },
        tooltip: "The UDP port number for the query protocol.",
    },
    PropertySpec {
        key: "rate-limit",
        section: Section::Network,
        kind: PropertyKind::Int {
            min: 0,
            max: I32_MAX,
            default: 0,
        },
        tooltip: "The maximum number of packets a player can send before being \
                  kicked. 0 disables the limit.",
    },
    PropertySpec {
        key: "rcon.password",
        section: Section::RconQuery,
        kind: PropertyKind::Text { default: "" },
        tooltip: "The password for rcon. If blank while rcon is enabled, rcon \
                  will not start as a safeguard.",
    },
    PropertySpec {
        key: "rcon.port",
        section: Section::RconQuery,
        kind: PropertyKind::Int {
            min: 1,
            max: 65_535,
            default: 25_575,
        },
        tooltip: "The TCP port number rcon listens on.",
    },
    PropertySpec {
        key: "region-file-compression",
        section: Section::Advanced,
        kind: PropertyKind::Choice {
            options: &RegionFileCompression::OPTIONS,
            default: "deflate",
        },
        tooltip: "The algorithm used for compressing chunks in region files.",
    },
    PropertySpec {
        key: "require-resource-pack",
        section: Section::Advanced,
        kind: PropertyKind::Bool { default: false },
        tooltip: "Whether players are disconnected if they decline the resource pack.",
    },
    PropertySpec {
        key: "resource-pack",
        section: Section::Advanced,
        kind: PropertyKind::Text { default: "" },
        tooltip: "The resource pack download URL.",
    },
    PropertySpec {
        key: "server-ip",
        section: Section::Network,
        kind: PropertyKind::Text { default: "" },
        tooltip: "The IP address the server listens on. Leave empty to listen on \
                  all available addresses (recommended).",
    },
    PropertySpec {
        key: "server-port",
        section: Section::Network,
        kind: PropertyKind::Int {
            min: 1,
            max: 65_535,
            default: 25_565,
        },
        tooltip: "The TCP port number for the server. Must be forwarded when \
                  hosting behind NAT.",
    },
    PropertySpec {
        key: "simulation-distance",
        section: Section::World,
        kind: PropertyKind::Int {
            min: 3,
            max: 32,
            default: 10,
        },
        tooltip: "The maximum distance from players, in chunks, at which living \
                  entities are updated by the server.",
    },
    PropertySpec {
        key: "spawn-monsters",
        section: Section::World,
        kind: PropertyKind::Bool { default: true },
        tooltip: "Whether monsters can spawn.",
    },
    PropertySpec {
        key: "spawn-protection",
        section: Section::World,
        kind: PropertyKind::Int {
            min: 0,
            max: I32_MAX,
            default: 16,
        },
        tooltip: "The side length of the square spawn protection area.",
    },
    PropertySpec {
        key: "sync-chunk-writes",
        section: Section::Advanced,
        kind: PropertyKind::Bool { default: true },
        tooltip: "Whether to enable synchronous chunk writes.",
    },
    PropertySpec {
        key: "use-native-transport",
        section: Section::Network,
        kind: PropertyKind::Bool { default: true },
        tooltip: "Whether to use optimised packet sending and receiving on Linux.",
    },
    PropertySpec {
        key: "view-distance",
        section: Section::World,
        kind: PropertyKind::Int {
            min: 3,
            max: 32,
            default: 10,
        },
        tooltip: "The amount of world data the server sends the client, in chunks.",
    },
    PropertySpec {
        key: "white-list",
        section: Section::Players,
        kind: PropertyKind::Bool { default: false },
        tooltip: "Whether the whitelist is enabled.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_sorted_by_key() {
        let keys: Vec<&str> = schema().iter().map(|s| s.key).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted, "registry must stay sorted for stable output");
    }

    #[test]
    fn test_schema_has_no_duplicate_keys() {
        let mut keys: Vec<&str> = schema().iter().map(|s| s.key).collect();
        keys.dedup();
        assert_eq!(keys.len(), schema().len());
    }

    #[test]
    fn test_find_known_and_unknown() {
        assert!(find("server-port").is_some());
        assert!(find("max-tick-time").is_some());
        assert!(find("no-such-property").is_none());
        // Folded / constant keys are deliberately absent
        assert!(find("hardcore").is_none());
        assert!(find("generator-settings").is_none());
    }

    #[test]
    fn test_every_section_is_populated() {
        for section in Section::ALL {
            assert!(
                section_specs(section).next().is_some(),
                "section {:?} has no properties",
                section
            );
        }
    }

    #[test]
    fn test_int_defaults_are_in_range() {
        for spec in schema() {
            if let PropertyKind::Int { min, max, default } = spec.kind {
                assert!(
                    (min..=max).contains(&default),
                    "{} default out of range",
                    spec.key
                );
            }
        }
    }

    #[test]
    fn test_choice_defaults_are_listed() {
        for spec in schema() {
            if let PropertyKind::Choice { options, default } = spec.kind {
                assert!(
                    options.contains(&default),
                    "{} default not in options",
                    spec.key
                );
            }
        }
    }
}
