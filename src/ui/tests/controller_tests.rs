//! Controller tests

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

use crate::core::types::PropertyValue;
use crate::ui::Controller;

fn server_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("server.properties"),
        "motd=Test Server\nserver-port=25570\nlevel-name=myworld\n",
    )
    .unwrap();
    dir
}

#[test]
fn test_missing_config_is_seeded_with_defaults() {
    let dir = TempDir::new().unwrap();

    let controller = Controller::new(dir.path().to_path_buf()).unwrap();
    assert!(controller.seeded_defaults());
    assert!(dir.path().join("server.properties").exists());

    controller.load_sheet().unwrap();
    assert_eq!(controller.sheet().get_text("motd"), "A Minecraft Server");
}

#[test]
fn test_existing_config_is_not_seeded() {
    let dir = server_dir();
    let controller = Controller::new(dir.path().to_path_buf()).unwrap();

    assert!(!controller.seeded_defaults());
    controller.load_sheet().unwrap();
    assert_eq!(controller.sheet().get_text("motd"), "Test Server");
    assert_eq!(controller.sheet().get_int("server-port"), 25570);
}

#[test]
fn test_dirty_tracking() {
    let dir = server_dir();
    let controller = Controller::new(dir.path().to_path_buf()).unwrap();
    controller.load_sheet().unwrap();
    assert!(!controller.is_dirty());

    controller
        .sheet_mut()
        .set("motd", PropertyValue::Text("Edited".to_string()));
    assert!(controller.is_dirty());

    controller.save().unwrap();
    assert!(!controller.is_dirty());
}

#[test]
fn test_save_writes_rendered_file_and_backup() {
    let dir = server_dir();
    let controller = Controller::new(dir.path().to_path_buf()).unwrap();
    controller.load_sheet().unwrap();

    controller
        .sheet_mut()
        .set("pvp", PropertyValue::Bool(false));
    controller.save().unwrap();

    let content = fs::read_to_string(dir.path().join("server.properties")).unwrap();
    assert!(content.contains("pvp=false\n"));
    assert!(content.starts_with("# Minecraft server properties\n"));

    assert!(!controller.list_backups().unwrap().is_empty());
}

#[test]
fn test_scan_extensions_reconciles_packs() {
    let dir = server_dir();

    // One datapack on disk, in datapacks/ next to server.properties
    let datapacks = dir.path().join("datapacks");
    fs::create_dir_all(datapacks.join("terrain_tweaks")).unwrap();
    fs::write(
        datapacks.join("terrain_tweaks").join("pack.mcmeta"),
        r#"{"pack": {"description": "Terrain tweaks"}}"#,
    )
    .unwrap();

    let controller = Controller::new(dir.path().to_path_buf()).unwrap();
    controller.load_sheet().unwrap();
    controller.scan_extensions();

    assert_eq!(controller.datapacks().len(), 1);
    // New packs start disabled; vanilla stays enabled
    assert_eq!(controller.sheet().enabled_packs, vec!["vanilla"]);
    assert_eq!(controller.sheet().disabled_packs, vec!["terrain_tweaks"]);
}

#[test]
fn test_datapacks_available_tracks_directory() {
    let dir = server_dir();
    let controller = Controller::new(dir.path().to_path_buf()).unwrap();
    controller.load_sheet().unwrap();

    controller.scan_extensions();
    assert!(!controller.datapacks_available());

    fs::create_dir(dir.path().join("datapacks")).unwrap();
    controller.scan_extensions();
    assert!(controller.datapacks_available());
}

#[test]
fn test_pack_moves_mark_dirty() {
    let dir = server_dir();
    let controller = Controller::new(dir.path().to_path_buf()).unwrap();
    controller.load_sheet().unwrap();

    controller.sheet_mut().disabled_packs.push("coolpack".to_string());
    controller.clear_dirty();

    controller.enable_pack("coolpack");
    assert!(controller.is_dirty());
    assert!(controller.sheet().enabled_packs.iter().any(|p| p == "coolpack"));
}

#[test]
fn test_plugin_discovery_through_controller() {
    let dir = server_dir();
    let plugins = dir.path().join("plugins");
    fs::create_dir(&plugins).unwrap();

    let file = File::create(plugins.join("anticheat.jar")).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    writer
        .start_file("plugin.yml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"name: AntiCheat\n").unwrap();
    writer.finish().unwrap();

    let controller = Controller::new(dir.path().to_path_buf()).unwrap();
    controller.load_sheet().unwrap();
    controller.scan_extensions();

    assert_eq!(controller.plugins().len(), 1);
    assert_eq!(controller.plugins()[0].name(), "AntiCheat");

    let store = controller.plugin_store("AntiCheat");
    assert!(store.path().ends_with("plugins/AntiCheat.properties"));
}

#[test]
fn test_save_all_writes_plugin_values_and_sheet() {
    let dir = server_dir();
    fs::create_dir(dir.path().join("plugins")).unwrap();
    let controller = Controller::new(dir.path().to_path_buf()).unwrap();
    controller.load_sheet().unwrap();

    let mut values = BTreeMap::new();
    values.insert("check-interval".to_string(), "30".to_string());
    controller
        .save_all(&[("AntiCheat".to_string(), values)])
        .unwrap();

    let stored = fs::read_to_string(dir.path().join("plugins/AntiCheat.properties")).unwrap();
    assert!(stored.contains("check-interval=30\n"));
    assert!(!controller.is_dirty());
}

#[test]
fn test_save_all_persists_plugin_values_before_sheet() {
    let dir = server_dir();
    fs::create_dir(dir.path().join("plugins")).unwrap();
    let controller = Controller::new(dir.path().to_path_buf()).unwrap();
    controller.load_sheet().unwrap();

    // A missing backup directory makes the sheet write refuse
    fs::remove_dir_all(dir.path().join("backups")).unwrap();

    let mut values = BTreeMap::new();
    values.insert("check-interval".to_string(), "30".to_string());
    let result = controller.save_all(&[("AntiCheat".to_string(), values)]);

    // Plugin settings landed even though the main write failed
    assert!(result.is_err());
    let stored = fs::read_to_string(dir.path().join("plugins/AntiCheat.properties")).unwrap();
    assert!(stored.contains("check-interval=30\n"));
}

#[test]
fn test_restore_backup_reloads_sheet() {
    let dir = server_dir();
    let controller = Controller::new(dir.path().to_path_buf()).unwrap();
    controller.load_sheet().unwrap();

    // Save once to create a backup of the original content
    controller
        .sheet_mut()
        .set("motd", PropertyValue::Text("Changed".to_string()));
    controller.save().unwrap();

    let backups = controller.list_backups().unwrap();
    let original = backups.last().unwrap().clone();

    controller.restore_backup(&original).unwrap();
    assert_eq!(controller.sheet().get_text("motd"), "Test Server");
    assert!(!controller.is_dirty());
}

#[test]
fn test_validation_report_reflects_sheet_state() {
    let dir = server_dir();
    let controller = Controller::new(dir.path().to_path_buf()).unwrap();
    controller.load_sheet().unwrap();

    assert!(controller.validation_report().is_clean());

    controller
        .sheet_mut()
        .set("enable-rcon", PropertyValue::Bool(true));
    assert!(!controller.validation_report().is_clean());
}
