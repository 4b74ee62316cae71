//! UI Components
//!
//! Reusable GTK4 widgets for the properties editor.
//!
//! # Components
//!
//! - `property_grid.rs` - Schema-driven grid for one section tab
//! - `datapack_panel.rs` - Enabled/disabled datapack lists
//! - `plugin_tab.rs` - Settings page from a plugin's panel manifest
//! - `validation_panel.rs` - Semantic findings banner

mod datapack_panel;
mod plugin_tab;
mod property_grid;
mod validation_panel;

pub use datapack_panel::DatapackPanel;
pub use plugin_tab::PluginTab;
pub use property_grid::PropertyGrid;
pub use validation_panel::ValidationPanel;
