//! MVC Controller - Mediates between Model (ConfigManager) and View (GTK4 components)
//!
//! # Responsibilities
//!
//! - Load the property sheet from server.properties (seeding defaults if absent)
//! - Save the sheet back through transactional, validated writes
//! - Track unsaved changes for the close-confirmation prompt
//! - Discover plugins and datapacks and reconcile pack state
//! - Provide data to View in UI-friendly format
//!
//! # Architecture
//!
//! The Controller holds references to Model components but doesn't know
//! about GTK4 widgets. This keeps business logic separate from presentation.

use std::cell::{Cell, Ref, RefCell, RefMut};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::config::{ConfigError, ConfigManager, ConfigTransaction};
use crate::core::validator::validate_sheet;
use crate::core::{PropertySheet, ValidationReport};
use crate::plugin::{
    discover_datapacks, discover_plugins, DatapackInfo, PluginPanel, PluginValueStore,
};

/// MVC Controller coordinating Model and View
///
/// Holds shared references to Model components and provides
/// methods for View to query/manipulate data.
pub struct Controller {
    /// Configuration file manager (shared mutable reference)
    config_manager: Rc<RefCell<ConfigManager>>,
    /// The loaded property sheet the widgets edit
    sheet: RefCell<PropertySheet>,
    /// Unsaved edits pending in the window
    dirty: Cell<bool>,
    /// True when server.properties was missing and defaults were written
    seeded_defaults: bool,
    /// Server root, parent of server.properties and plugins/
    server_dir: PathBuf,
    plugins: RefCell<Vec<PluginPanel>>,
    datapacks: RefCell<Vec<DatapackInfo>>,
    /// True when `<server_dir>/datapacks` exists on disk
    datapacks_available: Cell<bool>,
}

impl Controller {
    /// Creates a Controller rooted at the given server directory.
    ///
    /// Expects `<server_dir>/server.properties`. When the file is
    /// missing it is seeded with defaults immediately, and
    /// [`seeded_defaults`](Controller::seeded_defaults) reports it so
    /// the View can tell the user.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use mcprop_editor::ui::Controller;
    /// use std::path::PathBuf;
    ///
    /// let controller = Controller::new(PathBuf::from("/srv/minecraft"))?;
    /// # Ok::<(), mcprop_editor::config::ConfigError>(())
    /// ```
    pub fn new(server_dir: PathBuf) -> Result<Self, ConfigError> {
        let config_path = server_dir.join("server.properties");
        let seeded_defaults = !config_path.exists();

        let defaults = PropertySheet::defaults().render();
        let config_manager = ConfigManager::create_with_defaults(config_path, &defaults)?;
        let config_manager = Rc::new(RefCell::new(config_manager));

        Ok(Self {
            config_manager,
            sheet: RefCell::new(PropertySheet::defaults()),
            dirty: Cell::new(false),
            seeded_defaults,
            server_dir,
            plugins: RefCell::new(Vec::new()),
            datapacks: RefCell::new(Vec::new()),
            datapacks_available: Cell::new(false),
        })
    }

    /// True when the properties file was created from defaults just now.
    pub fn seeded_defaults(&self) -> bool {
        self.seeded_defaults
    }

    pub fn server_dir(&self) -> &Path {
        &self.server_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_manager.borrow().config_path().to_path_buf()
    }

    /// Loads server.properties into the sheet and clears the dirty flag.
    ///
    /// Malformed values inside a parseable file fall back to their
    /// defaults; only an unparseable file (or I/O failure) errors.
    pub fn load_sheet(&self) -> Result<(), ConfigError> {
        let content = self.config_manager.borrow().read_config()?;
        let sheet = PropertySheet::from_source(&content)?;
        *self.sheet.borrow_mut() = sheet;
        self.dirty.set(false);
        Ok(())
    }

    /// Read-only view of the sheet.
    pub fn sheet(&self) -> Ref<'_, PropertySheet> {
        self.sheet.borrow()
    }

    /// Mutable access to the sheet. Marks the session dirty.
    pub fn sheet_mut(&self) -> RefMut<'_, PropertySheet> {
        self.dirty.set(true);
        self.sheet.borrow_mut()
    }

    /// Renders the sheet and writes it through a validated transaction.
    ///
    /// A backup is taken first; error-level validation findings roll
    /// the file back and surface as `ConfigError::ValidationFailed`.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = self.sheet.borrow().render();

        let manager = self.config_manager.borrow();
        let tx = ConfigTransaction::begin(&manager)?;
        tx.commit_with_validation(&content)?;

        self.dirty.set(false);
        Ok(())
    }

    /// Persists plugin panel values, then the sheet.
    ///
    /// Plugin panels write before server.properties so their settings
    /// survive even when the main write is refused. A failing store is
    /// reported and skipped; only the sheet result propagates.
    pub fn save_all(
        &self,
        plugin_values: &[(String, BTreeMap<String, String>)],
    ) -> Result<(), ConfigError> {
        for (name, values) in plugin_values {
            if let Err(e) = self.plugin_store(name).save(values) {
                eprintln!("❌ Failed to save settings for {}: {}", name, e);
            }
        }
        self.save()
    }

    /// Semantic validation of the current sheet state.
    pub fn validation_report(&self) -> ValidationReport {
        validate_sheet(&self.sheet.borrow())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Clears the dirty flag after widgets were synced from the sheet.
    pub fn clear_dirty(&self) {
        self.dirty.set(false);
    }

    /// Scans the plugins/ and datapacks/ directories next to the file.
    ///
    /// Reconciles the sheet's pack lists against what is actually on
    /// disk: vanished packs are dropped, new packs start disabled.
    /// Call after `load_sheet`.
    pub fn scan_extensions(&self) {
        *self.plugins.borrow_mut() = discover_plugins(&self.server_dir);

        let datapacks_dir = self.server_dir.join("datapacks");
        self.datapacks_available.set(datapacks_dir.is_dir());
        let datapacks = discover_datapacks(&datapacks_dir);

        let ids: Vec<String> = datapacks.iter().map(|p| p.id.clone()).collect();
        self.sheet.borrow_mut().reconcile_packs(&ids);

        *self.datapacks.borrow_mut() = datapacks;
    }

    /// Whether the server has a datapacks/ directory at all.
    ///
    /// When it is missing the datapack panel stays inert rather than
    /// offering moves that could never correspond to anything on disk.
    pub fn datapacks_available(&self) -> bool {
        self.datapacks_available.get()
    }

    pub fn plugins(&self) -> Ref<'_, Vec<PluginPanel>> {
        self.plugins.borrow()
    }

    pub fn datapacks(&self) -> Ref<'_, Vec<DatapackInfo>> {
        self.datapacks.borrow()
    }

    /// Value store for one plugin's properties file.
    pub fn plugin_store(&self, plugin_name: &str) -> PluginValueStore {
        PluginValueStore::new(&self.server_dir, plugin_name)
    }

    /// Moves a datapack to the enabled list. Marks the session dirty.
    pub fn enable_pack(&self, id: &str) {
        self.sheet.borrow_mut().enable_pack(id);
        self.dirty.set(true);
    }

    /// Moves a datapack to the disabled list. Marks the session dirty.
    pub fn disable_pack(&self, id: &str) {
        self.sheet.borrow_mut().disable_pack(id);
        self.dirty.set(true);
    }

    pub fn list_backups(&self) -> Result<Vec<PathBuf>, ConfigError> {
        self.config_manager.borrow().list_backups()
    }

    pub fn restore_backup(&self, backup_path: &Path) -> Result<(), ConfigError> {
        self.config_manager.borrow().restore_backup(backup_path)?;
        self.load_sheet()
    }

    pub fn delete_backup(&self, backup_path: &Path) -> Result<(), ConfigError> {
        self.config_manager.borrow().delete_backup(backup_path)
    }
}
