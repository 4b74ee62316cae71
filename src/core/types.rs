//! src/core/types.rs
//!
//! Core type definitions for server.properties editing
//!
//! This module defines the fundamental types used throughout the application:
//! - `PropertyValue`: A typed property value (boolean, integer, or text)
//! - `Difficulty`: The five-way difficulty selection (hardcore included)
//! - `GameMode`: Default game mode choices
//! - `LevelType`: World generation presets (namespaced on the wire)
//! - `RegionFileCompression`: Region chunk compression algorithms
//!
//! All wire conversions live here so the parser, the writer, and the UI
//! agree on exactly one spelling of every value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed value for a known server property.
///
/// The wire format is always a plain string; this enum keeps the parsed
/// form so widgets and validation can work with real types.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum PropertyValue {
    /// `true` / `false`
    Bool(bool),
    /// 64-bit integer (max-tick-time needs the full range)
    Int(i64),
    /// Free text, including choice values
    Text(String),
}

impl PropertyValue {
    /// Returns the boolean payload, if this is a Bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer payload, if this is an Int.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the text payload, if this is Text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Int(i) => write!(f, "{}", i),
            PropertyValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Server difficulty, with hardcore folded in as the fifth option.
///
/// On the wire, hardcore is a separate boolean key; the UI treats it as
/// one five-way choice. `wire_pair` and `from_wire` perform the mapping.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Difficulty {
    Peaceful,
    Easy,
    Normal,
    Hard,
    Hardcore,
}

impl Difficulty {
    /// Choice labels in display order.
    pub const OPTIONS: [&'static str; 5] = ["peaceful", "easy", "normal", "hard", "hardcore"];

    /// Maps the two wire keys (`difficulty`, `hardcore`) to one selection.
    ///
    /// `hardcore=true` wins regardless of the difficulty value, matching
    /// server behaviour. Unknown difficulty strings fall back to Easy.
    pub fn from_wire(difficulty: &str, hardcore: bool) -> Self {
        if hardcore {
            return Difficulty::Hardcore;
        }
        match difficulty {
            "peaceful" => Difficulty::Peaceful,
            "easy" => Difficulty::Easy,
            "normal" => Difficulty::Normal,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    /// Returns the (`difficulty`, `hardcore`) pair to write.
    pub fn wire_pair(self) -> (&'static str, bool) {
        match self {
            Difficulty::Peaceful => ("peaceful", false),
            Difficulty::Easy => ("easy", false),
            Difficulty::Normal => ("normal", false),
            Difficulty::Hard => ("hard", false),
            Difficulty::Hardcore => ("hard", true),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Peaceful => "peaceful",
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Hardcore => "hardcore",
        };
        write!(f, "{}", s)
    }
}

/// Default game mode for new players.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum GameMode {
    Survival,
    Creative,
    Adventure,
    Spectator,
}

impl GameMode {
    pub const OPTIONS: [&'static str; 4] = ["survival", "creative", "adventure", "spectator"];
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameMode::Survival => "survival",
            GameMode::Creative => "creative",
            GameMode::Adventure => "adventure",
            GameMode::Spectator => "spectator",
        };
        write!(f, "{}", s)
    }
}

/// World generation preset.
///
/// The wire value is namespaced and the colon is escaped in the
/// properties format: `level-type=minecraft\:normal`. Parsing accepts
/// the escaped form, the plain `minecraft:flat` form, and the bare name.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum LevelType {
    Normal,
    Flat,
    LargeBiomes,
    Amplified,
    SingleBiomeSurface,
}

impl LevelType {
    pub const OPTIONS: [&'static str; 5] = [
        "normal",
        "flat",
        "large_biomes",
        "amplified",
        "single_biome_surface",
    ];

    /// Parses a wire value, tolerating any namespace prefix.
    ///
    /// Unknown presets fall back to Normal.
    pub fn from_wire(value: &str) -> Self {
        let bare = value.rsplit(':').next().unwrap_or(value);
        match bare {
            "flat" => LevelType::Flat,
            "large_biomes" => LevelType::LargeBiomes,
            "amplified" => LevelType::Amplified,
            "single_biome_surface" => LevelType::SingleBiomeSurface,
            _ => LevelType::Normal,
        }
    }

    /// Returns the bare preset name without namespace.
    pub fn bare_name(self) -> &'static str {
        match self {
            LevelType::Normal => "normal",
            LevelType::Flat => "flat",
            LevelType::LargeBiomes => "large_biomes",
            LevelType::Amplified => "amplified",
            LevelType::SingleBiomeSurface => "single_biome_surface",
        }
    }

    /// Returns the escaped wire form, e.g. `minecraft\:flat`.
    pub fn to_wire(self) -> String {
        format!("minecraft\\:{}", self.bare_name())
    }
}

impl fmt::Display for LevelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bare_name())
    }
}

/// Compression algorithm for region files.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum RegionFileCompression {
    Deflate,
    Lz4,
    None,
}

impl RegionFileCompression {
    pub const OPTIONS: [&'static str; 3] = ["deflate", "lz4", "none"];
}

impl fmt::Display for RegionFileCompression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RegionFileCompression::Deflate => "deflate",
            RegionFileCompression::Lz4 => "lz4",
            RegionFileCompression::None => "none",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_value_display() {
        assert_eq!(format!("{}", PropertyValue::Bool(true)), "true");
        assert_eq!(format!("{}", PropertyValue::Int(-1)), "-1");
        assert_eq!(
            format!("{}", PropertyValue::Text("A Minecraft Server".into())),
            "A Minecraft Server"
        );
    }

    #[test]
    fn test_difficulty_hardcore_wins() {
        assert_eq!(Difficulty::from_wire("peaceful", true), Difficulty::Hardcore);
        assert_eq!(Difficulty::from_wire("hard", false), Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_wire_pair() {
        assert_eq!(Difficulty::Hardcore.wire_pair(), ("hard", true));
        assert_eq!(Difficulty::Peaceful.wire_pair(), ("peaceful", false));
    }

    #[test]
    fn test_difficulty_unknown_falls_back_to_easy() {
        assert_eq!(Difficulty::from_wire("impossible", false), Difficulty::Easy);
    }

    #[test]
    fn test_level_type_from_wire_forms() {
        assert_eq!(LevelType::from_wire("minecraft\\:flat"), LevelType::Flat);
        assert_eq!(LevelType::from_wire("minecraft:flat"), LevelType::Flat);
        assert_eq!(LevelType::from_wire("flat"), LevelType::Flat);
        assert_eq!(LevelType::from_wire("garbage"), LevelType::Normal);
    }

    #[test]
    fn test_level_type_to_wire_is_escaped() {
        assert_eq!(LevelType::LargeBiomes.to_wire(), "minecraft\\:large_biomes");
    }
}
