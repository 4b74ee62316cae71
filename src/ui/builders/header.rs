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

//! Header bar builder
//!
//! Save on the right, Reload on the left, file path as the subtitle.

use gtk4::prelude::*;
use gtk4::{Button, HeaderBar, Label};
use std::path::Path;

/// Builds the window header bar.
///
/// Returns the bar plus the two buttons for handler wiring.
pub fn build_header_bar(config_path: &Path) -> (HeaderBar, Button, Button) {
    let header = HeaderBar::new();

    let title_box = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let title = Label::builder().label("Server Properties").build();
    title.add_css_class("title");
    let subtitle = Label::builder()
        .label(config_path.display().to_string())
        .build();
    subtitle.add_css_class("subtitle");
    title_box.append(&title);
    title_box.append(&subtitle);
    header.set_title_widget(Some(&title_box));

    let reload_button = Button::builder()
        .label("↻ Reload")
        .tooltip_text("Discard edits and re-read the file")
        .build();
    header.pack_start(&reload_button);

    let save_button = Button::builder().label("Save").build();
    save_button.add_css_class("suggested-action");
    header.pack_end(&save_button);

    (header, save_button, reload_button)
}
