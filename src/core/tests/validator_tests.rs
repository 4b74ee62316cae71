//! Validation tests
//!
//! Covers both layers: schema checks on raw content and semantic checks
//! on a loaded sheet.

use crate::core::sheet::PropertySheet;
use crate::core::types::PropertyValue;
use crate::core::validator::{validate_content, validate_sheet, ValidationLevel};

#[test]
fn test_clean_content_passes() {
    let report = validate_content("motd=hi\nserver-port=25565\npvp=true\n").unwrap();
    assert!(report.is_clean());
}

#[test]
fn test_bad_bool_is_an_error() {
    let report = validate_content("pvp=yes\n").unwrap();
    assert!(report.has_errors());
    assert_eq!(report.errors().count(), 1);
    assert_eq!(report.errors().next().unwrap().key, "pvp");
}

#[test]
fn test_out_of_range_int_is_an_error() {
    let report = validate_content("view-distance=99\n").unwrap();
    assert!(report.has_errors());

    let report = validate_content("view-distance=not-a-number\n").unwrap();
    assert!(report.has_errors());
}

#[test]
fn test_unknown_choice_is_an_error() {
    let report = validate_content("gamemode=speedrun\n").unwrap();
    assert!(report.has_errors());
}

#[test]
fn test_namespaced_level_type_passes() {
    let report = validate_content("level-type=minecraft\\:flat\n").unwrap();
    assert!(report.is_clean(), "{:?}", report.issues);
}

#[test]
fn test_unknown_key_is_a_warning() {
    let report = validate_content("spigot.custom=7\n").unwrap();
    assert!(!report.has_errors());
    assert_eq!(report.warnings().count(), 1);
}

#[test]
fn test_special_keys_are_not_flagged() {
    let content = "hardcore=true\ngenerator-settings={}\ninitial-enabled-packs=vanilla\n";
    let report = validate_content(content).unwrap();
    assert!(report.is_clean(), "{:?}", report.issues);
}

#[test]
fn test_rcon_blank_password_warning() {
    let mut sheet = PropertySheet::defaults();
    sheet.set("enable-rcon", PropertyValue::Bool(true));

    let report = validate_sheet(&sheet);
    assert!(report
        .warnings()
        .any(|i| i.key == "rcon.password"));

    sheet.set("rcon.password", PropertyValue::Text("hunter2".to_string()));
    let report = validate_sheet(&sheet);
    assert!(!report.warnings().any(|i| i.key == "rcon.password"));
}

#[test]
fn test_rcon_port_collision_warning() {
    let mut sheet = PropertySheet::defaults();
    sheet.set("enable-rcon", PropertyValue::Bool(true));
    sheet.set("rcon.password", PropertyValue::Text("hunter2".to_string()));
    sheet.set("rcon.port", PropertyValue::Int(25565));

    let report = validate_sheet(&sheet);
    assert!(report.warnings().any(|i| i.key == "rcon.port"));
}

#[test]
fn test_query_may_share_the_server_port() {
    // query is UDP; the vanilla default has both on 25565
    let mut sheet = PropertySheet::defaults();
    sheet.set("enable-query", PropertyValue::Bool(true));

    let report = validate_sheet(&sheet);
    assert!(!report.warnings().any(|i| i.key == "query.port"));
}

#[test]
fn test_link_fields_must_be_http() {
    let mut sheet = PropertySheet::defaults();
    sheet.set(
        "resource-pack",
        PropertyValue::Text("ftp://example.com/pack.zip".to_string()),
    );

    let report = validate_sheet(&sheet);
    assert!(report.warnings().any(|i| i.key == "resource-pack"));

    sheet.set(
        "resource-pack",
        PropertyValue::Text("https://example.com/pack.zip".to_string()),
    );
    let report = validate_sheet(&sheet);
    assert!(!report.warnings().any(|i| i.key == "resource-pack"));
}

#[test]
fn test_default_sheet_is_semantically_clean() {
    let report = validate_sheet(&PropertySheet::defaults());
    assert!(report.is_clean(), "{:?}", report.issues);
}

#[test]
fn test_level_at_display() {
    assert_eq!(format!("{}", ValidationLevel::Warning), "warning");
    assert_eq!(format!("{}", ValidationLevel::Error), "error");
}
