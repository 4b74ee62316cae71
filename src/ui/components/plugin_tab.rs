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

//! Plugin settings tab
//!
//! Renders one plugin's panel manifest as a notebook page. Each
//! manifest tab becomes a headed block of labelled widgets; values are
//! plain strings throughout because that is what the plugin's
//! properties file stores.

use gtk4::prelude::*;
use gtk4::{
    Adjustment, Box as GtkBox, CheckButton, DropDown, Entry, Grid, Label, Orientation, PolicyType,
    ScrolledWindow, SpinButton, StringList,
};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::plugin::{FieldKind, PluginPanel};

enum FieldWidget {
    Toggle(CheckButton),
    Text(Entry),
    Number(SpinButton),
    Choice {
        dropdown: DropDown,
        options: Vec<String>,
    },
}

/// One plugin's contributed settings page.
pub struct PluginTab {
    widget: ScrolledWindow,
    widgets: HashMap<String, FieldWidget>,
    plugin_name: String,
    on_changed: Rc<RefCell<Option<Box<dyn Fn()>>>>,
}

impl PluginTab {
    /// Builds the page from a discovered plugin.
    ///
    /// Returns `None` for plugins without a panel manifest.
    pub fn new(panel: &PluginPanel) -> Option<Self> {
        let manifest = panel.manifest.as_ref()?;

        let page = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .spacing(12)
            .margin_start(12)
            .margin_end(12)
            .margin_top(12)
            .margin_bottom(12)
            .build();

        let on_changed: Rc<RefCell<Option<Box<dyn Fn()>>>> = Rc::new(RefCell::new(None));
        let mut widgets = HashMap::new();

        for tab in &manifest.tabs {
            let heading = Label::builder().label(&tab.title).xalign(0.0).build();
            heading.add_css_class("heading");
            page.append(&heading);

            let grid = Grid::builder().row_spacing(8).column_spacing(12).build();

            for (row, field) in tab.fields.iter().enumerate() {
                let label = Label::builder().label(&field.label).xalign(0.0).build();
                if let Some(tooltip) = &field.tooltip {
                    label.set_tooltip_text(Some(tooltip));
                }
                grid.attach(&label, 0, row as i32, 1, 1);

                let notify = on_changed.clone();
                let fire = move || {
                    if let Some(cb) = notify.borrow().as_ref() {
                        cb();
                    }
                };

                let widget = match &field.kind {
                    FieldKind::Toggle { default } => {
                        let check = CheckButton::builder().active(*default).build();
                        let fire = fire.clone();
                        check.connect_toggled(move |_| fire());
                        grid.attach(&check, 1, row as i32, 1, 1);
                        FieldWidget::Toggle(check)
                    }
                    FieldKind::Text { default } => {
                        let entry = Entry::builder().text(default).hexpand(true).build();
                        let fire = fire.clone();
                        entry.connect_changed(move |_| fire());
                        grid.attach(&entry, 1, row as i32, 1, 1);
                        FieldWidget::Text(entry)
                    }
                    FieldKind::Number { min, max, default } => {
                        let adjustment = Adjustment::new(
                            *default as f64,
                            *min as f64,
                            *max as f64,
                            1.0,
                            10.0,
                            0.0,
                        );
                        let spin = SpinButton::builder()
                            .adjustment(&adjustment)
                            .climb_rate(1.0)
                            .digits(0)
                            .build();
                        let fire = fire.clone();
                        spin.connect_value_changed(move |_| fire());
                        grid.attach(&spin, 1, row as i32, 1, 1);
                        FieldWidget::Number(spin)
                    }
                    FieldKind::Choice { options, default } => {
                        let refs: Vec<&str> = options.iter().map(String::as_str).collect();
                        let list = StringList::new(&refs);
                        let dropdown = DropDown::builder().model(&list).build();
                        if let Some(pos) = options.iter().position(|o| o == default) {
                            dropdown.set_selected(pos as u32);
                        }
                        let fire = fire.clone();
                        dropdown.connect_selected_notify(move |_| fire());
                        grid.attach(&dropdown, 1, row as i32, 1, 1);
                        FieldWidget::Choice {
                            dropdown,
                            options: options.clone(),
                        }
                    }
                };

                widgets.insert(field.key.clone(), widget);
            }

            page.append(&grid);
        }

        let scrolled = ScrolledWindow::builder()
            .hscrollbar_policy(PolicyType::Never)
            .vexpand(true)
            .child(&page)
            .build();

        Some(Self {
            widget: scrolled,
            widgets,
            plugin_name: panel.name().to_string(),
            on_changed,
        })
    }

    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    pub fn connect_changed<F: Fn() + 'static>(&self, callback: F) {
        *self.on_changed.borrow_mut() = Some(Box::new(callback));
    }

    /// Pushes stored values into the widgets.
    pub fn load_values(&self, values: &BTreeMap<String, String>) {
        for (key, widget) in &self.widgets {
            let Some(value) = values.get(key) else { continue };
            match widget {
                FieldWidget::Toggle(check) => check.set_active(value == "true"),
                FieldWidget::Text(entry) => entry.set_text(value),
                FieldWidget::Number(spin) => {
                    if let Ok(n) = value.parse::<f64>() {
                        spin.set_value(n);
                    }
                }
                FieldWidget::Choice { dropdown, options } => {
                    if let Some(pos) = options.iter().position(|o| o == value) {
                        dropdown.set_selected(pos as u32);
                    }
                }
            }
        }
    }

    /// Reads widget state into the string map the store persists.
    pub fn read_values(&self) -> BTreeMap<String, String> {
        self.widgets
            .iter()
            .map(|(key, widget)| {
                let value = match widget {
                    FieldWidget::Toggle(check) => check.is_active().to_string(),
                    FieldWidget::Text(entry) => entry.text().to_string(),
                    FieldWidget::Number(spin) => (spin.value() as i64).to_string(),
                    FieldWidget::Choice { dropdown, options } => {
                        let pos = dropdown.selected() as usize;
                        options.get(pos).cloned().unwrap_or_default()
                    }
                };
                (key.clone(), value)
            })
            .collect()
    }

    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }
}
