//! Datapack discovery tests

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

use crate::plugin::datapack::{discover_datapacks, DatapackInfo};

fn write_pack_zip(path: &Path, mcmeta: &str) {
    let file = File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    writer
        .start_file("pack.mcmeta", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(mcmeta.as_bytes()).unwrap();
    writer.finish().unwrap();
}

#[test]
fn test_discover_zipped_pack_with_plain_description() {
    let dir = TempDir::new().unwrap();
    write_pack_zip(
        &dir.path().join("coolpack.zip"),
        r#"{"pack": {"pack_format": 48, "description": "Cool stuff"}}"#,
    );

    let packs = discover_datapacks(dir.path());
    assert_eq!(
        packs,
        vec![DatapackInfo {
            id: "coolpack.zip".to_string(),
            display_name: "Cool stuff".to_string()
        }]
    );
}

#[test]
fn test_discover_unpacked_pack_with_translated_description() {
    let dir = TempDir::new().unwrap();
    let pack = dir.path().join("update_1_21");
    fs::create_dir(&pack).unwrap();
    fs::write(
        pack.join("pack.mcmeta"),
        r#"{"pack": {"description": {"translate": "dataPack.update_1_21.description"}}}"#,
    )
    .unwrap();

    let packs = discover_datapacks(dir.path());
    assert_eq!(packs[0].id, "update_1_21");
    assert_eq!(packs[0].display_name, "dataPack.update_1_21.description");
}

#[test]
fn test_unreadable_packs_are_skipped() {
    let dir = TempDir::new().unwrap();
    write_pack_zip(
        &dir.path().join("good.zip"),
        r#"{"pack": {"description": "ok"}}"#,
    );
    // Corrupt mcmeta
    write_pack_zip(&dir.path().join("bad.zip"), "{not json");
    // Directory without mcmeta
    fs::create_dir(dir.path().join("empty_dir")).unwrap();
    // Loose file with the wrong extension
    fs::write(dir.path().join("readme.md"), "hi").unwrap();

    let packs = discover_datapacks(dir.path());
    let ids: Vec<&str> = packs.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["good.zip"]);
}

#[test]
fn test_missing_directory_yields_nothing() {
    let dir = TempDir::new().unwrap();
    assert!(discover_datapacks(&dir.path().join("datapacks")).is_empty());
}
