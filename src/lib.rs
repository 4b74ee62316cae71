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

//! Minecraft Server Properties Editor
//!
//! A safe, schema-driven editor for Minecraft `server.properties` files
//! with a GTK4 GUI, plugin-contributed settings panels, and datapack
//! management.
//!
//! # Features
//!
//! - **Typed Schema:** Every known key carries its kind, range, and default
//! - **Tolerant Loading:** Malformed values fall back to defaults instead of failing
//! - **Validation:** Schema checks plus semantic warnings (blank rcon password, port collisions)
//! - **Automatic Backups:** Timestamped backups before every write
//! - **Atomic Operations:** Safe file writes with rollback on failure
//! - **Plugin Panels:** Declarative settings tabs from `config-editor.yml` manifests
//! - **Datapack Management:** Enable/disable packs discovered in the world directory
//! - **GTK4 Interface:** Notebook layout with one tab per property section
//!
//! # Architecture
//!
//! - **`core`:** Business logic (schema, parser, property sheet, validation)
//! - **`config`:** File operations (reading, writing, atomic updates, backups)
//! - **`plugin`:** Plugin and datapack discovery, panel manifests, value stores
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! # Examples
//!
//! ## Loading a properties file
//!
//! ```no_run
//! use mcprop_editor::core::PropertySheet;
//!
//! let content = std::fs::read_to_string("server.properties")?;
//! let sheet = PropertySheet::from_source(&content)?;
//! println!("Server listens on port {}", sheet.get_int("server-port"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Validating content
//!
//! ```no_run
//! use mcprop_editor::core::validate_content;
//! # let content = String::from("pvp=true\n");
//!
//! let report = validate_content(&content)?;
//! for issue in &report.issues {
//!     println!("{}: {} ({})", issue.key, issue.message, issue.level);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use mcprop_editor::ui::App;
//! use std::path::PathBuf;
//!
//! let app = App::new(PathBuf::from("/srv/minecraft"))?;
//! app.run(); // Blocks until window closes
//! # Ok::<(), String>(())
//! ```

pub mod config;
pub mod core;
pub mod plugin;
pub mod ui;

// Re-export commonly used types for convenience
pub use core::{PropertySheet, PropertyValue, ValidationReport};
