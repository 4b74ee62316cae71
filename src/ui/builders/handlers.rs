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

//! Signal handler wiring
//!
//! Connects the assembled layout to the Controller: dirty tracking,
//! the rcon/query/whitelist gating rules, and the Save and Reload
//! buttons.

use gtk4::prelude::*;
use gtk4::{ApplicationWindow, Button};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::ui::builders::layout::MainView;
use crate::ui::components::{DatapackPanel, PluginTab, PropertyGrid, ValidationPanel};
use crate::ui::Controller;

/// Keys greyed out unless their gate checkbox is on.
const RCON_GATED: [&str; 3] = ["rcon.password", "rcon.port", "broadcast-rcon-to-ops"];
const QUERY_GATED: [&str; 1] = ["query.port"];
const WHITELIST_GATED: [&str; 1] = ["enforce-whitelist"];

/// Marks the session dirty on any widget edit.
///
/// Call after the initial [`refresh_view`], or loading the sheet into
/// the widgets will itself count as an edit.
pub fn wire_dirty_tracking(controller: &Rc<Controller>, view: &MainView) {
    for grid in &view.grids {
        let controller = controller.clone();
        grid.connect_changed(move || controller.mark_dirty());
    }
    for tab in &view.plugin_tabs {
        let controller = controller.clone();
        tab.connect_changed(move || controller.mark_dirty());
    }
}

/// Applies the current gate states to their dependent widgets.
///
/// Every grid is asked; `set_key_sensitive` is a no-op on grids that
/// don't own the key, so no section bookkeeping is needed here.
pub fn apply_gating(grids: &[Rc<PropertyGrid>]) {
    let gate_state = |key: &str| grids.iter().find_map(|g| g.bool_value(key));

    let gates = [
        ("enable-rcon", &RCON_GATED[..]),
        ("enable-query", &QUERY_GATED[..]),
        ("white-list", &WHITELIST_GATED[..]),
    ];

    for (gate, dependents) in gates {
        let on = gate_state(gate).unwrap_or(false);
        for key in dependents {
            for grid in grids {
                grid.set_key_sensitive(key, on);
            }
        }
    }
}

/// Re-applies gating whenever one of the gate checkboxes flips.
pub fn wire_gating(view: &MainView) {
    for gate in ["enable-rcon", "enable-query", "white-list"] {
        for grid in &view.grids {
            let grids = view.grids.clone();
            grid.connect_bool_toggled(gate, move |_| apply_gating(&grids));
        }
    }
    apply_gating(&view.grids);
}

/// Loads the Controller's sheet into every widget and resets state.
pub fn refresh_view(
    controller: &Rc<Controller>,
    grids: &[Rc<PropertyGrid>],
    datapack_panel: &Rc<DatapackPanel>,
    validation_panel: &Rc<ValidationPanel>,
) {
    {
        let sheet = controller.sheet();
        for grid in grids {
            grid.load_from(&sheet);
        }
    }
    datapack_panel.refresh();
    validation_panel.refresh();
    apply_gating(grids);
    // Widget population fired the change callbacks
    controller.clear_dirty();
}

/// Collects widget state and writes everything out.
///
/// Plugin tabs persist to their own properties files first; the sheet
/// then goes through the validated transaction. A refused sheet write
/// surfaces in a modal dialog.
pub fn wire_save(
    controller: Rc<Controller>,
    view: &MainView,
    window: ApplicationWindow,
    save_button: &Button,
) {
    let grids = view.grids.clone();
    let plugin_tabs = view.plugin_tabs.clone();
    let validation_panel = view.validation_panel.clone();

    save_button.connect_clicked(move |_| {
        {
            let mut sheet = controller.sheet_mut();
            for grid in &grids {
                grid.read_into(&mut sheet);
            }
        }

        let plugin_values = collect_plugin_values(&plugin_tabs);
        if let Err(e) = controller.save_all(&plugin_values) {
            eprintln!("❌ Save failed: {}", e);
            let dialog = gtk4::AlertDialog::builder()
                .modal(true)
                .message("Save Failed")
                .detail(format!("Could not write server.properties:\n\n{}", e))
                .buttons(vec!["OK"])
                .build();
            dialog.show(Some(&window));
            return;
        }

        validation_panel.refresh();
        eprintln!("✅ Saved {}", controller.config_path().display());
    });
}

/// Snapshot of every plugin tab's widget state, keyed by plugin name.
pub fn collect_plugin_values(
    plugin_tabs: &[Rc<PluginTab>],
) -> Vec<(String, BTreeMap<String, String>)> {
    plugin_tabs
        .iter()
        .map(|tab| (tab.plugin_name().to_string(), tab.read_values()))
        .collect()
}

/// Re-reads the file, discarding pending edits after confirmation.
pub fn wire_reload(
    controller: Rc<Controller>,
    view: &MainView,
    window: ApplicationWindow,
    reload_button: &Button,
) {
    let grids = view.grids.clone();
    let datapack_panel = view.datapack_panel.clone();
    let validation_panel = view.validation_panel.clone();

    reload_button.connect_clicked(move |_| {
        let controller = controller.clone();
        let grids = grids.clone();
        let datapack_panel = datapack_panel.clone();
        let validation_panel = validation_panel.clone();

        let do_reload = {
            let controller = controller.clone();
            move || {
                if let Err(e) = controller.load_sheet() {
                    eprintln!("❌ Reload failed: {}", e);
                    return;
                }
                controller.scan_extensions();
                refresh_view(&controller, &grids, &datapack_panel, &validation_panel);
                eprintln!("↻ Reloaded from disk");
            }
        };

        if !controller.is_dirty() {
            do_reload();
            return;
        }

        let dialog = gtk4::AlertDialog::builder()
            .modal(true)
            .message("Discard Changes?")
            .detail("Reloading will throw away your unsaved edits.")
            .buttons(vec!["Cancel", "Reload"])
            .cancel_button(0)
            .default_button(0)
            .build();

        dialog.choose(Some(&window), None::<&gtk4::gio::Cancellable>, move |response| {
            if let Ok(1) = response {
                do_reload();
            }
        });
    });
}
