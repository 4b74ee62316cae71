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

//! Datapack management panel
//!
//! Two side-by-side lists (enabled / disabled) with buttons to move the
//! selected pack between them. The panel mirrors the sheet's
//! `initial-enabled-packs` / `initial-disabled-packs` lists; the
//! Controller owns the actual moves so the vanilla-stays-enabled rule
//! lives in one place.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────┐       ┌──────────────┐
//! │ Enabled      │  ◀ ▶  │ Disabled     │
//! │  vanilla     │       │  coolpack    │
//! └──────────────┘       └──────────────┘
//! ```

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Label, ListBox, Orientation, ScrolledWindow, SelectionMode};
use std::cell::RefCell;
use std::rc::Rc;

use crate::plugin::DatapackInfo;
use crate::ui::Controller;

pub struct DatapackPanel {
    widget: GtkBox,
    enabled_list: ListBox,
    disabled_list: ListBox,
    enable_button: Button,
    disable_button: Button,
    /// Pack ids by row index, parallel to the two list boxes
    enabled_ids: Rc<RefCell<Vec<String>>>,
    disabled_ids: Rc<RefCell<Vec<String>>>,
    controller: Rc<Controller>,
}

impl DatapackPanel {
    pub fn new(controller: Rc<Controller>) -> Rc<Self> {
        let widget = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(12)
            .margin_start(12)
            .margin_end(12)
            .margin_top(12)
            .margin_bottom(12)
            .build();

        let enabled_list = ListBox::builder()
            .selection_mode(SelectionMode::Single)
            .build();
        let disabled_list = ListBox::builder()
            .selection_mode(SelectionMode::Single)
            .build();

        widget.append(&column("Enabled", &enabled_list));

        // Middle column: the two move buttons
        let button_box = GtkBox::new(Orientation::Vertical, 8);
        button_box.set_valign(gtk4::Align::Center);
        let disable_button = Button::builder().label("▶").tooltip_text("Disable").build();
        let enable_button = Button::builder().label("◀").tooltip_text("Enable").build();
        button_box.append(&disable_button);
        button_box.append(&enable_button);
        widget.append(&button_box);

        widget.append(&column("Disabled", &disabled_list));

        let panel = Rc::new(Self {
            widget,
            enabled_list,
            disabled_list,
            enable_button: enable_button.clone(),
            disable_button: disable_button.clone(),
            enabled_ids: Rc::new(RefCell::new(Vec::new())),
            disabled_ids: Rc::new(RefCell::new(Vec::new())),
            controller,
        });

        let panel_for_disable = panel.clone();
        disable_button.connect_clicked(move |_| {
            if let Some(id) = panel_for_disable.selected_enabled() {
                panel_for_disable.controller.disable_pack(&id);
                panel_for_disable.refresh();
            }
        });

        let panel_for_enable = panel.clone();
        enable_button.connect_clicked(move |_| {
            if let Some(id) = panel_for_enable.selected_disabled() {
                panel_for_enable.controller.enable_pack(&id);
                panel_for_enable.refresh();
            }
        });

        panel
    }

    /// Rebuilds both lists from the Controller's sheet and scan results.
    ///
    /// Without a datapacks/ directory the whole panel goes inert: both
    /// lists and buttons insensitive, a single placeholder row instead
    /// of pack entries.
    pub fn refresh(&self) {
        let available = self.controller.datapacks_available();
        self.enabled_list.set_sensitive(available);
        self.disabled_list.set_sensitive(available);
        self.enable_button.set_sensitive(available);
        self.disable_button.set_sensitive(available);

        if !available {
            clear_list(&self.enabled_list);
            clear_list(&self.disabled_list);
            self.enabled_list.append(&row_label("No datapacks available."));
            self.enabled_ids.borrow_mut().clear();
            self.disabled_ids.borrow_mut().clear();
            return;
        }

        let sheet = self.controller.sheet();
        let datapacks = self.controller.datapacks();

        // Display name when the scan found the pack, raw id otherwise
        let display = |id: &str| -> String {
            datapacks
                .iter()
                .find(|p| p.id == id)
                .map(|p: &DatapackInfo| format!("{}: {}", p.id, p.display_name))
                .unwrap_or_else(|| id.to_string())
        };

        fill_list(&self.enabled_list, &sheet.enabled_packs, &display);
        fill_list(&self.disabled_list, &sheet.disabled_packs, &display);

        *self.enabled_ids.borrow_mut() = sheet.enabled_packs.clone();
        *self.disabled_ids.borrow_mut() = sheet.disabled_packs.clone();
    }

    fn selected_enabled(&self) -> Option<String> {
        let row = self.enabled_list.selected_row()?;
        self.enabled_ids.borrow().get(row.index() as usize).cloned()
    }

    fn selected_disabled(&self) -> Option<String> {
        let row = self.disabled_list.selected_row()?;
        self.disabled_ids.borrow().get(row.index() as usize).cloned()
    }

    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }
}

fn column(title: &str, list: &ListBox) -> GtkBox {
    let vbox = GtkBox::new(Orientation::Vertical, 6);
    vbox.set_hexpand(true);

    let label = Label::builder().label(title).xalign(0.0).build();
    label.add_css_class("heading");
    vbox.append(&label);

    let scrolled = ScrolledWindow::builder().vexpand(true).child(list).build();
    scrolled.add_css_class("frame");
    vbox.append(&scrolled);
    vbox
}

fn clear_list(list: &ListBox) {
    while let Some(row) = list.row_at_index(0) {
        list.remove(&row);
    }
}

fn row_label(text: &str) -> Label {
    Label::builder()
        .label(text)
        .xalign(0.0)
        .margin_start(6)
        .margin_end(6)
        .margin_top(4)
        .margin_bottom(4)
        .build()
}

fn fill_list(list: &ListBox, ids: &[String], display: &dyn Fn(&str) -> String) {
    clear_list(list);
    for id in ids {
        list.append(&row_label(&display(id)));
    }
}
