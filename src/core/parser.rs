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

//! src/core/parser.rs
//!
//! server.properties line parser
//!
//! Parses the line-oriented `key=value` format:
//! - `#` comment lines and blank lines are skipped
//! - everything before the first `=` is the key, everything after is the
//!   value, taken verbatim (values may legitimately contain `=`)
//! - line numbers are tracked for error reporting
//!
//! The parser only reads and structures data. Coercion to typed values
//! happens in sheet.rs against the schema, and semantic checks happen in
//! validator.rs.

use nom::{
    bytes::complete::take_till1,
    character::complete::char,
    combinator::rest,
    IResult, Parser,
};
use thiserror::Error;

/// Parse errors with line number context
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Parse error on line {line}: {message}")]
    InvalidSyntax { line: usize, message: String },

    #[error("IO error reading properties: {0}")]
    Io(#[from] std::io::Error),
}

/// One `key=value` pair, as read from the file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawProperty {
    pub key: String,
    pub value: String,
    /// 1-based line number in the source file
    pub line: usize,
}

/// Parses a complete properties file into raw key/value pairs.
///
/// Keys keep their file order. A non-comment line without `=` is a
/// syntax error carrying its line number.
///
/// # Example
/// ```
/// use mcprop_editor::core::parser::parse_properties;
///
/// let props = parse_properties("# header\nmotd=Hello\nserver-port=25565\n")?;
/// assert_eq!(props.len(), 2);
/// assert_eq!(props[0].key, "motd");
/// # Ok::<(), mcprop_editor::core::parser::ParseError>(())
/// ```
pub fn parse_properties(content: &str) -> Result<Vec<RawProperty>, ParseError> {
    let mut properties = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1; // Human-readable numbers start at 1

        // Skip blank lines and comments
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match parse_property_line(trimmed) {
            Ok((_, (key, value))) => properties.push(RawProperty {
                key: key.to_string(),
                value: value.to_string(),
                line: line_num,
            }),
            Err(_) => {
                return Err(ParseError::InvalidSyntax {
                    line: line_num,
                    message: format!("expected key=value, found {:?}", trimmed),
                });
            }
        }
    }

    Ok(properties)
}

/// Parses a single `key=value` line.
///
/// The key is everything up to the first `=`, trimmed. The value is the
/// untouched remainder, so values containing `=` (URLs, JSON blobs like
/// `generator-settings={}`) survive intact.
pub fn parse_property_line(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, key) = take_till1(|c| c == '=')(input)?;
    let (input, _) = char('=')(input)?;
    let (input, value) = rest.parse(input)?;

    Ok((input, (key.trim_end(), value)))
}

/// Splits a comma-separated pack list, dropping empty segments.
///
/// Some generators write trailing commas (`vanilla,`); tolerating empty
/// segments keeps those files loadable.
pub fn split_pack_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
