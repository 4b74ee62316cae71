//! Panel manifest tests

use crate::plugin::manifest::{FieldKind, PanelManifest};

const SAMPLE: &str = "\
tabs:
  - title: AntiCheat
    fields:
      - key: check-speed
        label: Speed checks
        type: toggle
        default: true
      - key: max-violations
        label: Max violations
        tooltip: Kicks after this many flags.
        type: number
        min: 1
        max: 100
        default: 10
      - key: kick-message
        label: Kick message
        type: text
        default: Cheating detected
      - key: mode
        label: Mode
        type: choice
        options: [lenient, strict]
        default: lenient
";

#[test]
fn test_parse_all_field_kinds() {
    let manifest = PanelManifest::from_yaml(SAMPLE).unwrap();
    assert_eq!(manifest.tabs.len(), 1);

    let fields = &manifest.tabs[0].fields;
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[0].kind, FieldKind::Toggle { default: true });
    assert_eq!(
        fields[1].kind,
        FieldKind::Number {
            min: 1,
            max: 100,
            default: 10
        }
    );
    assert_eq!(fields[1].tooltip.as_deref(), Some("Kicks after this many flags."));
    assert_eq!(
        fields[3].kind,
        FieldKind::Choice {
            options: vec!["lenient".to_string(), "strict".to_string()],
            default: "lenient".to_string()
        }
    );
}

#[test]
fn test_defaults_render_as_strings() {
    let manifest = PanelManifest::from_yaml(SAMPLE).unwrap();
    let defaults: Vec<String> = manifest.fields().map(|f| f.default_value()).collect();
    assert_eq!(defaults, vec!["true", "10", "Cheating detected", "lenient"]);
}

#[test]
fn test_check_accepts_sample() {
    let manifest = PanelManifest::from_yaml(SAMPLE).unwrap();
    assert!(manifest.check().is_ok());
}

#[test]
fn test_check_rejects_empty_tabs() {
    let manifest = PanelManifest::from_yaml("tabs: []").unwrap();
    assert!(manifest.check().is_err());
}

#[test]
fn test_check_rejects_duplicate_keys() {
    let yaml = "\
tabs:
  - title: A
    fields:
      - {key: x, label: X, type: toggle}
      - {key: x, label: X again, type: toggle}
";
    let manifest = PanelManifest::from_yaml(yaml).unwrap();
    let err = manifest.check().unwrap_err();
    assert!(err.contains("duplicate"));
}

#[test]
fn test_check_rejects_number_default_out_of_range() {
    let yaml = "\
tabs:
  - title: A
    fields:
      - {key: n, label: N, type: number, min: 1, max: 5, default: 9}
";
    let manifest = PanelManifest::from_yaml(yaml).unwrap();
    assert!(manifest.check().is_err());
}

#[test]
fn test_check_rejects_choice_default_not_in_options() {
    let yaml = "\
tabs:
  - title: A
    fields:
      - {key: c, label: C, type: choice, options: [a, b], default: z}
";
    let manifest = PanelManifest::from_yaml(yaml).unwrap();
    assert!(manifest.check().is_err());
}

#[test]
fn test_unknown_field_type_is_a_parse_error() {
    let yaml = "\
tabs:
  - title: A
    fields:
      - {key: s, label: S, type: slider, min: 0, max: 1}
";
    assert!(PanelManifest::from_yaml(yaml).is_err());
}
