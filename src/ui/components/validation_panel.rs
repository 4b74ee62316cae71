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

//! Validation warning panel component
//!
//! Displays a banner at the top of the window when the current sheet
//! has semantic findings: a blank rcon password, colliding ports, or a
//! malformed link field. The banner smoothly animates in/out and lists
//! the first finding with a count of the rest.
//!
//! # Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │ ⚠️  rcon.password: rcon is enabled without a password │
//! └─────────────────────────────────────────────────────┘
//! ```

use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Label, Orientation, Revealer};
use std::rc::Rc;

use crate::ui::Controller;

/// Warning banner fed by [`Controller::validation_report`].
pub struct ValidationPanel {
    /// Root widget (Revealer for smooth show/hide animation)
    widget: Revealer,
    message_label: Label,
    controller: Rc<Controller>,
}

impl ValidationPanel {
    /// Creates the panel, initially hidden. Call `refresh()` after
    /// loading the sheet and after every edit that changes a gated key.
    pub fn new(controller: Rc<Controller>) -> Self {
        let revealer = Revealer::builder()
            .transition_type(gtk4::RevealerTransitionType::SlideDown)
            .transition_duration(300)
            .reveal_child(false)
            .build();

        let warning_box = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .spacing(10)
            .margin_start(10)
            .margin_end(10)
            .margin_top(5)
            .margin_bottom(5)
            .hexpand(true)
            .build();
        warning_box.add_css_class("warning-banner");

        let message_label = Label::builder()
            .label("No findings")
            .xalign(0.0)
            .margin_start(10)
            .margin_end(10)
            .margin_top(5)
            .margin_bottom(5)
            .build();
        warning_box.append(&message_label);

        revealer.set_child(Some(&warning_box));

        Self {
            widget: revealer,
            message_label,
            controller,
        }
    }

    /// Re-runs validation and shows/hides the banner accordingly.
    pub fn refresh(&self) {
        let report = self.controller.validation_report();

        if report.is_clean() {
            self.widget.set_reveal_child(false);
            self.message_label.set_label("No findings");
            return;
        }

        let first = &report.issues[0];
        let message = if report.issues.len() == 1 {
            format!("⚠️  {}: {}", first.key, first.message)
        } else {
            format!(
                "⚠️  {}: {} (and {} more)",
                first.key,
                first.message,
                report.issues.len() - 1
            )
        };

        self.message_label.set_label(&message);
        self.widget.set_reveal_child(true);
    }

    pub fn widget(&self) -> &Revealer {
        &self.widget
    }
}
