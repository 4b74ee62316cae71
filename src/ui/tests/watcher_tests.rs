//! File watcher tests

use std::fs;
use std::thread::sleep;
use std::time::Duration;
use tempfile::TempDir;

use crate::ui::file_watcher::FileWatcher;

/// inotify delivery is asynchronous; poll briefly.
fn saw_change(watcher: &FileWatcher) -> bool {
    for _ in 0..50 {
        if watcher.check_for_changes() {
            return true;
        }
        sleep(Duration::from_millis(100));
    }
    false
}

#[test]
fn test_detects_rewrite_of_watched_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("server.properties");
    fs::write(&path, "motd=One\n").unwrap();

    let watcher = FileWatcher::new(path.clone()).unwrap();
    fs::write(&path, "motd=Two\n").unwrap();

    assert!(saw_change(&watcher));
}

#[test]
fn test_detects_replacement_by_rename() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("server.properties");
    fs::write(&path, "motd=One\n").unwrap();

    let watcher = FileWatcher::new(path.clone()).unwrap();

    // Atomic writers swap a temp file into place
    let staged = dir.path().join("server.properties.tmp");
    fs::write(&staged, "motd=Two\n").unwrap();
    fs::rename(&staged, &path).unwrap();

    assert!(saw_change(&watcher));
}

#[test]
fn test_ignores_sibling_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("server.properties");
    fs::write(&path, "motd=One\n").unwrap();

    let watcher = FileWatcher::new(path).unwrap();
    fs::write(dir.path().join("whitelist.json"), "[]\n").unwrap();

    sleep(Duration::from_millis(500));
    assert!(!watcher.check_for_changes());
}
