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

//! Layout builder
//!
//! Creates the main application layout structure: the validation
//! banner on top and a notebook below with one tab per schema section,
//! a Datapacks tab, and one tab per plugin that ships a panel
//! manifest.

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Label, Notebook, Orientation};
use std::rc::Rc;

use crate::core::schema::Section;
use crate::ui::{
    components::{DatapackPanel, PluginTab, PropertyGrid, ValidationPanel},
    Controller,
};

/// The assembled main window content and its live components.
pub struct MainView {
    pub root: GtkBox,
    pub validation_panel: Rc<ValidationPanel>,
    /// One grid per schema section, in tab order
    pub grids: Vec<Rc<PropertyGrid>>,
    pub datapack_panel: Rc<DatapackPanel>,
    pub plugin_tabs: Vec<Rc<PluginTab>>,
}

/// Builds the main application layout.
///
/// Plugin tabs come from the Controller's completed extension scan, so
/// call [`Controller::scan_extensions`] first.
pub fn build_main_layout(controller: Rc<Controller>) -> MainView {
    let root = GtkBox::new(Orientation::Vertical, 0);

    let validation_panel = Rc::new(ValidationPanel::new(controller.clone()));
    root.append(validation_panel.widget());

    let notebook = Notebook::builder().vexpand(true).build();

    let mut grids = Vec::new();
    for section in Section::ALL {
        let grid = Rc::new(PropertyGrid::new(section));
        notebook.append_page(grid.widget(), Some(&Label::new(Some(section.title()))));
        grids.push(grid);
    }

    let datapack_panel = DatapackPanel::new(controller.clone());
    notebook.append_page(datapack_panel.widget(), Some(&Label::new(Some("Datapacks"))));

    let mut plugin_tabs = Vec::new();
    for panel in controller.plugins().iter() {
        if let Some(tab) = PluginTab::new(panel) {
            let tab = Rc::new(tab);
            notebook.append_page(tab.widget(), Some(&Label::new(Some(tab.plugin_name()))));
            plugin_tabs.push(tab);
        }
    }

    root.append(&notebook);

    MainView {
        root,
        validation_panel,
        grids,
        datapack_panel,
        plugin_tabs,
    }
}
