//! ConfigTransaction tests

use std::fs;
use tempfile::TempDir;

use crate::config::{ConfigError, ConfigManager, ConfigTransaction};

fn setup() -> (TempDir, ConfigManager) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("server.properties");
    fs::write(&path, "motd=original\npvp=true\n").unwrap();
    let manager = ConfigManager::new(path).unwrap();
    (dir, manager)
}

#[test]
fn test_begin_creates_backup() {
    let (_dir, manager) = setup();

    let tx = ConfigTransaction::begin(&manager).unwrap();
    assert!(tx.backup_path().exists());
    assert_eq!(
        fs::read_to_string(tx.backup_path()).unwrap(),
        "motd=original\npvp=true\n"
    );
}

#[test]
fn test_commit_replaces_content() {
    let (_dir, manager) = setup();

    let tx = ConfigTransaction::begin(&manager).unwrap();
    tx.commit("motd=updated\n").unwrap();

    assert_eq!(manager.read_config().unwrap(), "motd=updated\n");
}

#[test]
fn test_rollback_restores_original() {
    let (_dir, manager) = setup();

    let tx = ConfigTransaction::begin(&manager).unwrap();
    fs::write(manager.config_path(), "motd=scribbled\n").unwrap();
    tx.rollback().unwrap();

    assert_eq!(manager.read_config().unwrap(), "motd=original\npvp=true\n");
}

#[test]
fn test_commit_with_validation_accepts_clean_content() {
    let (_dir, manager) = setup();

    let tx = ConfigTransaction::begin(&manager).unwrap();
    tx.commit_with_validation("motd=hi\nserver-port=25565\n").unwrap();

    assert_eq!(manager.read_config().unwrap(), "motd=hi\nserver-port=25565\n");
}

#[test]
fn test_commit_with_validation_blocks_errors() {
    let (_dir, manager) = setup();

    let tx = ConfigTransaction::begin(&manager).unwrap();
    let err = tx.commit_with_validation("pvp=banana\n").unwrap_err();

    match err {
        ConfigError::ValidationFailed(msg) => assert!(msg.contains("pvp")),
        other => panic!("expected ValidationFailed, got {:?}", other),
    }
    // File untouched
    assert_eq!(manager.read_config().unwrap(), "motd=original\npvp=true\n");
}

#[test]
fn test_commit_with_validation_allows_warnings() {
    let (_dir, manager) = setup();

    // Unknown keys warn but do not block
    let tx = ConfigTransaction::begin(&manager).unwrap();
    tx.commit_with_validation("motd=hi\nspigot.custom=7\n").unwrap();

    assert!(manager.read_config().unwrap().contains("spigot.custom=7"));
}

#[test]
fn test_sequential_transactions_accumulate_backups() {
    let (_dir, manager) = setup();

    for i in 0..3 {
        let tx = ConfigTransaction::begin(&manager).unwrap();
        tx.commit(&format!("motd=rev{}\n", i)).unwrap();
        // Keep timestamps distinct at second granularity is not
        // guaranteed in a tight loop, so only assert presence below.
    }

    assert!(!manager.list_backups().unwrap().is_empty());
    assert_eq!(manager.read_config().unwrap(), "motd=rev2\n");
}
