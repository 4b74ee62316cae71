//! ConfigManager tests

use std::fs;
use tempfile::TempDir;

use crate::config::{ConfigError, ConfigManager};

fn setup() -> (TempDir, ConfigManager) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("server.properties");
    fs::write(&path, "motd=hi\nserver-port=25565\n").unwrap();
    let manager = ConfigManager::new(path).unwrap();
    (dir, manager)
}

#[test]
fn test_new_requires_existing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("server.properties");

    let err = ConfigManager::new(missing.clone()).unwrap_err();
    match err {
        ConfigError::NotFound(path) => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_new_creates_backup_dir() {
    let (dir, _manager) = setup();
    assert!(dir.path().join("backups").is_dir());
}

#[test]
fn test_create_with_defaults_seeds_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("server.properties");

    let manager =
        ConfigManager::create_with_defaults(path.clone(), "motd=A Minecraft Server\n").unwrap();
    assert_eq!(manager.read_config().unwrap(), "motd=A Minecraft Server\n");

    // An existing file is left alone
    let manager = ConfigManager::create_with_defaults(path, "motd=other\n").unwrap();
    assert_eq!(manager.read_config().unwrap(), "motd=A Minecraft Server\n");
}

#[test]
fn test_read_config() {
    let (_dir, manager) = setup();
    assert_eq!(manager.read_config().unwrap(), "motd=hi\nserver-port=25565\n");
}

#[test]
fn test_timestamped_backup_preserves_content() {
    let (_dir, manager) = setup();

    let backup = manager.create_timestamped_backup().unwrap();
    assert!(backup.exists());
    assert_eq!(
        fs::read_to_string(&backup).unwrap(),
        "motd=hi\nserver-port=25565\n"
    );

    let name = backup.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("server.properties."));
}

#[test]
fn test_list_backups_newest_first() {
    let (dir, manager) = setup();
    let backups_dir = dir.path().join("backups");

    fs::write(backups_dir.join("server.properties.2026-01-01_000000"), "a").unwrap();
    fs::write(backups_dir.join("server.properties.2026-06-15_120000"), "b").unwrap();
    fs::write(backups_dir.join("unrelated.txt"), "c").unwrap();

    let backups = manager.list_backups().unwrap();
    assert_eq!(backups.len(), 2);
    assert!(backups[0]
        .file_name()
        .unwrap()
        .to_str()
        .unwrap()
        .contains("2026-06-15"));
}

#[test]
fn test_restore_backup() {
    let (dir, manager) = setup();
    let backup = dir.path().join("backups").join("server.properties.2026-01-01_000000");
    fs::write(&backup, "motd=restored\n").unwrap();

    manager.restore_backup(&backup).unwrap();
    assert_eq!(manager.read_config().unwrap(), "motd=restored\n");

    // Restoring snapshots the pre-restore state first
    let backups = manager.list_backups().unwrap();
    assert!(backups
        .iter()
        .any(|b| fs::read_to_string(b).unwrap() == "motd=hi\nserver-port=25565\n"));
}

#[test]
fn test_delete_backup_rejects_foreign_paths() {
    let (dir, manager) = setup();

    let outside = dir.path().join("server.properties");
    assert!(manager.delete_backup(&outside).is_err());

    let backup = manager.create_timestamped_backup().unwrap();
    manager.delete_backup(&backup).unwrap();
    assert!(!backup.exists());
}
