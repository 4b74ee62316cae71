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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. It uses the Controller to load and display data.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller
//!   ├─ Builds main window (header + notebook)
//!   └─ Connects components to Controller
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider};
use std::path::PathBuf;
use std::rc::Rc;

use crate::ui::builders::{handlers, header, layout};
use crate::ui::file_watcher::FileWatcher;
use crate::ui::Controller;

/// GTK4 Application for server.properties management
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
}

impl App {
    /// Creates a new App rooted at the given server directory.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mcprop_editor::ui::App;
    /// use std::path::PathBuf;
    ///
    /// let app = App::new(PathBuf::from("/srv/minecraft"))?;
    /// # Ok::<(), String>(())
    /// ```
    pub fn new(server_dir: PathBuf) -> Result<Self, String> {
        let app = Application::builder()
            .application_id("io.github.mcprop-editor")
            .build();

        let controller = Controller::new(server_dir)
            .map_err(|e| format!("Failed to create controller: {}", e))?;

        let controller = Rc::new(controller);

        Ok(Self { app, controller })
    }

    /// Runs the GTK4 application.
    ///
    /// This starts the GTK4 main loop and blocks until the window
    /// closes.
    pub fn run(self) {
        let controller = self.controller.clone();

        self.app.connect_activate(move |app| {
            Self::build_ui(app, controller.clone());
        });

        self.app.run_with_args::<&str>(&[]);
    }

    /// Loads custom CSS styling for the application.
    fn load_css() {
        let provider = CssProvider::new();
        let css = include_str!("style.css");
        provider.load_from_string(css);

        if let Some(display) = gdk::Display::default() {
            gtk4::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }
    }

    /// Builds the main window UI.
    fn build_ui(app: &Application, controller: Rc<Controller>) {
        if let Err(e) = controller.load_sheet() {
            eprintln!("Failed to load server.properties: {}", e);
            return;
        }
        controller.scan_extensions();

        Self::load_css();

        let window = ApplicationWindow::builder()
            .application(app)
            .title("Minecraft Server Properties")
            .default_width(900)
            .default_height(700)
            .build();

        let (header_bar, save_button, reload_button) =
            header::build_header_bar(&controller.config_path());
        window.set_titlebar(Some(&header_bar));

        let view = layout::build_main_layout(controller.clone());
        window.set_child(Some(&view.root));

        // Populate widgets before hooking dirty tracking
        handlers::refresh_view(
            &controller,
            &view.grids,
            &view.datapack_panel,
            &view.validation_panel,
        );
        handlers::wire_dirty_tracking(&controller, &view);
        handlers::wire_gating(&view);
        handlers::wire_save(controller.clone(), &view, window.clone(), &save_button);
        handlers::wire_reload(controller.clone(), &view, window.clone(), &reload_button);

        // Load per-plugin stored values into their tabs
        let plugins = controller.plugins();
        for tab in &view.plugin_tabs {
            let store = controller.plugin_store(tab.plugin_name());
            let manifest = plugins
                .iter()
                .find(|p| p.name() == tab.plugin_name())
                .and_then(|p| p.manifest.as_ref());
            if let Some(manifest) = manifest {
                match store.load(manifest) {
                    Ok(values) => tab.load_values(&values),
                    Err(e) => {
                        eprintln!("⚠ Could not load settings for {}: {}", tab.plugin_name(), e)
                    }
                }
            }
        }
        drop(plugins);
        controller.clear_dirty();

        Self::watch_for_external_changes(&controller, &view);
        Self::wire_close_confirmation(&controller, &window, &view);
        Self::show_startup_notices(&controller, &window);

        window.present();
    }

    /// Polls the file watcher from the GTK main loop.
    ///
    /// External rewrites reload the sheet automatically while the
    /// session is clean; with pending edits the change is only
    /// reported, never clobbering the user's work.
    fn watch_for_external_changes(controller: &Rc<Controller>, view: &layout::MainView) {
        let watcher = match FileWatcher::new(controller.config_path()) {
            Ok(watcher) => watcher,
            Err(e) => {
                eprintln!("⚠ File watching unavailable: {}", e);
                return;
            }
        };

        let controller = controller.clone();
        let grids = view.grids.clone();
        let datapack_panel = view.datapack_panel.clone();
        let validation_panel = view.validation_panel.clone();

        glib::timeout_add_seconds_local(1, move || {
            if watcher.check_for_changes() {
                if controller.is_dirty() {
                    eprintln!("⚠ server.properties changed on disk; keeping your unsaved edits");
                } else {
                    match controller.load_sheet() {
                        Ok(()) => {
                            controller.scan_extensions();
                            handlers::refresh_view(
                                &controller,
                                &grids,
                                &datapack_panel,
                                &validation_panel,
                            );
                            eprintln!("↻ Reloaded after external change");
                        }
                        Err(e) => eprintln!("❌ Reload after external change failed: {}", e),
                    }
                }
            }
            glib::ControlFlow::Continue
        });
    }

    /// Prompts to save when closing with unsaved edits.
    fn wire_close_confirmation(
        controller: &Rc<Controller>,
        window: &ApplicationWindow,
        view: &layout::MainView,
    ) {
        let controller = controller.clone();
        let grids = view.grids.clone();
        let plugin_tabs = view.plugin_tabs.clone();

        window.connect_close_request(move |window| {
            if !controller.is_dirty() {
                return glib::Propagation::Proceed;
            }

            let dialog = gtk4::AlertDialog::builder()
                .modal(true)
                .message("Save Changes?")
                .detail("You have unsaved edits to server.properties.")
                .buttons(vec!["Cancel", "Discard", "Save"])
                .cancel_button(0)
                .default_button(2)
                .build();

            let controller = controller.clone();
            let grids = grids.clone();
            let plugin_tabs = plugin_tabs.clone();
            let window_for_inner = window.clone();

            dialog.choose(
                Some(window),
                None::<&gtk4::gio::Cancellable>,
                move |response| match response {
                    Ok(1) => window_for_inner.destroy(),
                    Ok(2) => {
                        {
                            let mut sheet = controller.sheet_mut();
                            for grid in &grids {
                                grid.read_into(&mut sheet);
                            }
                        }
                        let plugin_values = handlers::collect_plugin_values(&plugin_tabs);
                        match controller.save_all(&plugin_values) {
                            Ok(()) => window_for_inner.destroy(),
                            Err(e) => eprintln!("❌ Save failed: {}", e),
                        }
                    }
                    _ => {}
                },
            );

            glib::Propagation::Stop
        });
    }

    /// One-time dialogs shown right after the window opens.
    fn show_startup_notices(controller: &Rc<Controller>, window: &ApplicationWindow) {
        if controller.seeded_defaults() {
            let dialog = gtk4::AlertDialog::builder()
                .modal(true)
                .message("No Configuration Found")
                .detail(format!(
                    "server.properties was missing, so default settings were written to {}.",
                    controller.config_path().display()
                ))
                .buttons(vec!["OK"])
                .build();
            dialog.show(Some(window));
        }

        if controller.plugins().is_empty() {
            eprintln!(
                "No plugins found under {}",
                controller.server_dir().join("plugins").display()
            );
            let dialog = gtk4::AlertDialog::builder()
                .modal(true)
                .message("No Plugins Found")
                .detail(format!(
                    "No plugin archives were found under {}. \
                     Only the vanilla server configuration is editable.",
                    controller.server_dir().join("plugins").display()
                ))
                .buttons(vec!["OK"])
                .build();
            dialog.show(Some(window));
        }
    }
}
