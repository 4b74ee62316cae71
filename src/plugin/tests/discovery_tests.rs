//! Plugin archive discovery tests

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

use crate::plugin::{discover_plugins, read_plugin_archive, PluginError};

fn write_archive(path: &Path, entries: &[(&str, &str)]) {
    let file = File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    for (name, content) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

const DESCRIPTOR: &str = "name: AntiCheat\nversion: \"1.4\"\nmain: com.example.AntiCheat\n";

const MANIFEST: &str = "\
tabs:
  - title: AntiCheat
    fields:
      - {key: check-speed, label: Speed checks, type: toggle, default: true}
";

#[test]
fn test_read_plugin_with_manifest() {
    let dir = TempDir::new().unwrap();
    let jar = dir.path().join("anticheat.jar");
    write_archive(&jar, &[("plugin.yml", DESCRIPTOR), ("config-editor.yml", MANIFEST)]);

    let panel = read_plugin_archive(&jar).unwrap();
    assert_eq!(panel.name(), "AntiCheat");
    assert_eq!(panel.descriptor.version.as_deref(), Some("1.4"));
    assert_eq!(panel.manifest.as_ref().unwrap().tabs[0].title, "AntiCheat");
}

#[test]
fn test_plugin_without_manifest_is_still_listed() {
    let dir = TempDir::new().unwrap();
    let jar = dir.path().join("plain.jar");
    write_archive(&jar, &[("plugin.yml", "name: Plain\n")]);

    let panel = read_plugin_archive(&jar).unwrap();
    assert_eq!(panel.name(), "Plain");
    assert!(panel.manifest.is_none());
}

#[test]
fn test_archive_without_descriptor_is_rejected() {
    let dir = TempDir::new().unwrap();
    let jar = dir.path().join("notaplugin.jar");
    write_archive(&jar, &[("readme.txt", "hi")]);

    let err = read_plugin_archive(&jar).unwrap_err();
    assert!(matches!(err, PluginError::MissingDescriptor));
}

#[test]
fn test_bad_manifest_is_rejected() {
    let dir = TempDir::new().unwrap();
    let jar = dir.path().join("broken.jar");
    write_archive(
        &jar,
        &[("plugin.yml", "name: Broken\n"), ("config-editor.yml", "tabs: []\n")],
    );

    let err = read_plugin_archive(&jar).unwrap_err();
    assert!(matches!(err, PluginError::BadManifest(_)));
}

#[test]
fn test_discover_skips_broken_archives() {
    let dir = TempDir::new().unwrap();
    let plugins = dir.path().join("plugins");
    fs::create_dir(&plugins).unwrap();

    write_archive(
        &plugins.join("zeta.jar"),
        &[("plugin.yml", "name: Zeta\n"), ("config-editor.yml", MANIFEST)],
    );
    write_archive(&plugins.join("alpha.zip"), &[("plugin.yml", "name: Alpha\n")]);
    // Not a zip at all
    fs::write(plugins.join("garbage.jar"), b"not an archive").unwrap();
    // Wrong extension, ignored entirely
    fs::write(plugins.join("notes.txt"), b"hello").unwrap();

    let panels = discover_plugins(dir.path());
    let names: Vec<&str> = panels.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Alpha", "Zeta"]);
}

#[test]
fn test_discover_with_no_plugins_dir() {
    let dir = TempDir::new().unwrap();
    assert!(discover_plugins(dir.path()).is_empty());
}
