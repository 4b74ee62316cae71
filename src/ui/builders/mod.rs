//! UI building functions
//!
//! Assembles the main window out of components and wires the signal
//! handlers. Split from `app.rs` to keep window construction readable:
//!
//! - `layout.rs`   - Notebook, section grids, datapack and plugin pages
//! - `header.rs`   - HeaderBar with Save / Reload
//! - `handlers.rs` - Dirty tracking, gating rules, save and reload

pub mod handlers;
pub mod header;
pub mod layout;
