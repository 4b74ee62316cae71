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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures and algorithms
//! for server.properties editing, including:
//! - Typed property values and wire-format enums
//! - The static property schema (keys, kinds, ranges, tooltips)
//! - The line parser for the key=value format
//! - The sheet model with load coercion and render
//! - Schema and semantic validation
//!
//! All business logic is isolated from UI and I/O concerns to enable
//! comprehensive unit testing without requiring a display server.

pub mod parser;
pub mod schema;
pub mod sheet;
pub mod types;
pub mod validator;

pub use schema::{PropertyKind, PropertySpec, Section};
pub use sheet::PropertySheet;
pub use types::*;
pub use validator::{validate_content, validate_sheet, ValidationLevel, ValidationReport};

#[cfg(test)]
mod tests;
