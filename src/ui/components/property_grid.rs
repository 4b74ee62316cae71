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

//! Schema-driven property grid component
//!
//! Renders one section of the property schema as a two-column grid:
//! labels on the left, editing widgets on the right. The widget for
//! each key comes from its schema kind:
//!
//! - `Bool`   → CheckButton
//! - `Int`    → SpinButton clamped to the schema range
//! - `Text`   → Entry
//! - `Choice` → DropDown over the option list
//!
//! The grid never talks to the Controller directly; the caller loads
//! values from a sheet, reads them back on save, and hooks the change
//! callback for dirty tracking.

use gtk4::prelude::*;
use gtk4::{
    Adjustment, CheckButton, DropDown, Entry, Grid, Label, PolicyType, ScrolledWindow, SpinButton,
    StringList,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::core::schema::{section_specs, PropertyKind, Section};
use crate::core::sheet::PropertySheet;
use crate::core::types::PropertyValue;

/// The editing widget behind one schema key.
enum PropertyWidget {
    Check(CheckButton),
    Spin(SpinButton),
    Text(Entry),
    Choice {
        dropdown: DropDown,
        options: &'static [&'static str],
    },
}

/// A scrollable grid editing every property of one section.
pub struct PropertyGrid {
    widget: ScrolledWindow,
    widgets: HashMap<&'static str, PropertyWidget>,
    on_changed: Rc<RefCell<Option<Box<dyn Fn()>>>>,
}

impl PropertyGrid {
    /// Builds the grid for a section, with widgets at schema defaults.
    pub fn new(section: Section) -> Self {
        let grid = Grid::builder()
            .row_spacing(8)
            .column_spacing(12)
            .margin_start(12)
            .margin_end(12)
            .margin_top(12)
            .margin_bottom(12)
            .build();

        let on_changed: Rc<RefCell<Option<Box<dyn Fn()>>>> = Rc::new(RefCell::new(None));
        let mut widgets = HashMap::new();

        for (row, spec) in section_specs(section).enumerate() {
            let label = Label::builder()
                .label(spec.key)
                .xalign(0.0)
                .tooltip_text(spec.tooltip)
                .build();
            grid.attach(&label, 0, row as i32, 1, 1);

            let notify = on_changed.clone();
            let fire = move || {
                if let Some(cb) = notify.borrow().as_ref() {
                    cb();
                }
            };

            let widget = match spec.kind {
                PropertyKind::Bool { default } => {
                    let check = CheckButton::builder().active(default).build();
                    let fire = fire.clone();
                    check.connect_toggled(move |_| fire());
                    grid.attach(&check, 1, row as i32, 1, 1);
                    PropertyWidget::Check(check)
                }
                PropertyKind::Int { min, max, default } => {
                    let adjustment = Adjustment::new(
                        default as f64,
                        min as f64,
                        max as f64,
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
                    PropertyWidget::Spin(spin)
                }
                PropertyKind::Text { default } => {
                    let entry = Entry::builder().text(default).hexpand(true).build();
                    let fire = fire.clone();
                    entry.connect_changed(move |_| fire());
                    grid.attach(&entry, 1, row as i32, 1, 1);
                    PropertyWidget::Text(entry)
                }
                PropertyKind::Choice { options, default } => {
                    let list = StringList::new(options);
                    let dropdown = DropDown::builder().model(&list).build();
                    if let Some(pos) = options.iter().position(|o| *o == default) {
                        dropdown.set_selected(pos as u32);
                    }
                    let fire = fire.clone();
                    dropdown.connect_selected_notify(move |_| fire());
                    grid.attach(&dropdown, 1, row as i32, 1, 1);
                    PropertyWidget::Choice { dropdown, options }
                }
            };

            widgets.insert(spec.key, widget);
        }

        let scrolled = ScrolledWindow::builder()
            .hscrollbar_policy(PolicyType::Never)
            .vexpand(true)
            .child(&grid)
            .build();

        Self {
            widget: scrolled,
            widgets,
            on_changed,
        }
    }

    /// Sets the callback fired on any widget change (dirty tracking).
    pub fn connect_changed<F: Fn() + 'static>(&self, callback: F) {
        *self.on_changed.borrow_mut() = Some(Box::new(callback));
    }

    /// Pushes sheet values into the widgets.
    ///
    /// Fires the change callback per widget, so callers should reset
    /// their dirty flag afterwards.
    pub fn load_from(&self, sheet: &PropertySheet) {
        for (key, widget) in &self.widgets {
            match widget {
                PropertyWidget::Check(check) => check.set_active(sheet.get_bool(key)),
                PropertyWidget::Spin(spin) => spin.set_value(sheet.get_int(key) as f64),
                PropertyWidget::Text(entry) => entry.set_text(&sheet.get_text(key)),
                PropertyWidget::Choice { dropdown, options } => {
                    let value = sheet.get_text(key);
                    if let Some(pos) = options.iter().position(|o| *o == value) {
                        dropdown.set_selected(pos as u32);
                    }
                }
            }
        }
    }

    /// Reads widget state back into the sheet.
    pub fn read_into(&self, sheet: &mut PropertySheet) {
        for (key, widget) in &self.widgets {
            let value = match widget {
                PropertyWidget::Check(check) => PropertyValue::Bool(check.is_active()),
                // value() keeps the full 64-bit range (max-tick-time)
                PropertyWidget::Spin(spin) => PropertyValue::Int(spin.value() as i64),
                PropertyWidget::Text(entry) => PropertyValue::Text(entry.text().to_string()),
                PropertyWidget::Choice { dropdown, options } => {
                    let pos = dropdown.selected() as usize;
                    let selected = options.get(pos).copied().unwrap_or(options[0]);
                    PropertyValue::Text(selected.to_string())
                }
            };
            sheet.set(key, value);
        }
    }

    /// Greys out (or re-enables) the widget for one key.
    ///
    /// Used by the gating rules: rcon fields follow enable-rcon,
    /// query.port follows enable-query.
    pub fn set_key_sensitive(&self, key: &str, sensitive: bool) {
        if let Some(widget) = self.widgets.get(key) {
            match widget {
                PropertyWidget::Check(w) => w.set_sensitive(sensitive),
                PropertyWidget::Spin(w) => w.set_sensitive(sensitive),
                PropertyWidget::Text(w) => w.set_sensitive(sensitive),
                PropertyWidget::Choice { dropdown, .. } => dropdown.set_sensitive(sensitive),
            }
        }
    }

    /// Current boolean state of a check widget, if `key` renders as one.
    pub fn bool_value(&self, key: &str) -> Option<bool> {
        match self.widgets.get(key) {
            Some(PropertyWidget::Check(check)) => Some(check.is_active()),
            _ => None,
        }
    }

    /// Hooks a toggle handler on one bool key (for gating rules).
    pub fn connect_bool_toggled<F: Fn(bool) + 'static>(&self, key: &str, callback: F) {
        if let Some(PropertyWidget::Check(check)) = self.widgets.get(key) {
            check.connect_toggled(move |c| callback(c.is_active()));
        }
    }

    pub fn widget(&self) -> &ScrolledWindow {
        &self.widget
    }
}
