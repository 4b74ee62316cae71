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

//! Parser module tests
//!
//! Tests for parsing server.properties files:
//! - key=value line splitting
//! - Comment and blank-line handling
//! - Values containing `=`
//! - Line numbers in errors
//! - Pack list splitting

use crate::core::parser::*;

#[test]
fn test_parse_property_line() {
    let (_, (key, value)) = parse_property_line("motd=A Minecraft Server").unwrap();
    assert_eq!(key, "motd");
    assert_eq!(value, "A Minecraft Server");
}

#[test]
fn test_value_may_contain_equals() {
    let (_, (key, value)) = parse_property_line("generator-settings={\"a\"=1}").unwrap();
    assert_eq!(key, "generator-settings");
    assert_eq!(value, "{\"a\"=1}");

    let (_, (key, value)) =
        parse_property_line("resource-pack=https://example.com/pack.zip?v=3").unwrap();
    assert_eq!(key, "resource-pack");
    assert_eq!(value, "https://example.com/pack.zip?v=3");
}

#[test]
fn test_empty_value() {
    let (_, (key, value)) = parse_property_line("level-seed=").unwrap();
    assert_eq!(key, "level-seed");
    assert_eq!(value, "");
}

#[test]
fn test_parse_properties_skips_comments_and_blanks() {
    let content = "# Minecraft server properties\n\nmotd=hi\n  \nserver-port=25565\n# trailer\n";
    let props = parse_properties(content).unwrap();
    assert_eq!(props.len(), 2);
    assert_eq!(props[0].key, "motd");
    assert_eq!(props[1].key, "server-port");
}

#[test]
fn test_parse_properties_tracks_line_numbers() {
    let content = "# header\nmotd=hi\n\npvp=true\n";
    let props = parse_properties(content).unwrap();
    assert_eq!(props[0].line, 2);
    assert_eq!(props[1].line, 4);
}

#[test]
fn test_line_without_equals_is_an_error() {
    let content = "motd=hi\nthis is not a property\n";
    let err = parse_properties(content).unwrap_err();
    match err {
        ParseError::InvalidSyntax { line, .. } => assert_eq!(line, 2),
        other => panic!("expected InvalidSyntax, got {:?}", other),
    }
}

#[test]
fn test_split_pack_list_tolerates_trailing_comma() {
    // Older generators wrote "vanilla," with a dangling separator
    assert_eq!(split_pack_list("vanilla,"), vec!["vanilla".to_string()]);
    assert_eq!(
        split_pack_list("vanilla,extras, more"),
        vec!["vanilla".to_string(), "extras".to_string(), "more".to_string()]
    );
    assert!(split_pack_list("").is_empty());
}
