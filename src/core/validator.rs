//! src/core/validator.rs
//!
//! Property validation
//!
//! Two layers of checks, both producing a `ValidationReport`:
//!
//! - `validate_content` inspects raw file text against the schema:
//!   unparseable values, out-of-range integers, unknown choice values,
//!   unknown keys. Used by the CLI `check` command and by the write
//!   transaction, which refuses to commit error-level findings.
//! - `validate_sheet` inspects a loaded sheet for semantic problems the
//!   per-key checks cannot see: rcon enabled with a blank password,
//!   port collisions, link fields that are not http(s) URLs. Shown in
//!   the GUI banner after load and before save.

use std::fmt;

use crate::core::parser::{parse_properties, ParseError};
use crate::core::schema::{self, PropertyKind};
use crate::core::sheet::PropertySheet;

/// Severity of a validation finding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationLevel {
    /// Reported, but does not block saving
    Warning,
    /// Blocks the write transaction
    Error,
}

impl fmt::Display for ValidationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationLevel::Warning => write!(f, "warning"),
            ValidationLevel::Error => write!(f, "error"),
        }
    }
}

/// One validation finding.
#[derive(Clone, Debug)]
pub struct ValidationIssue {
    /// Property key the finding is about
    pub key: String,
    pub level: ValidationLevel,
    pub message: String,
    /// Optional remediation hint
    pub suggestion: Option<String>,
}

/// Collected findings for one file or sheet.
#[derive(Clone, Debug, Default)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.level == ValidationLevel::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.level == ValidationLevel::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.level == ValidationLevel::Warning)
    }

    fn push(
        &mut self,
        key: &str,
        level: ValidationLevel,
        message: String,
        suggestion: Option<String>,
    ) {
        self.issues.push(ValidationIssue {
            key: key.to_string(),
            level,
            message,
            suggestion,
        });
    }
}

/// Checks raw file text against the schema, key by key.
pub fn validate_content(content: &str) -> Result<ValidationReport, ParseError> {
    let mut report = ValidationReport::default();

    for prop in parse_properties(content)? {
        let raw = prop.value.trim();
        let spec = match schema::find(&prop.key) {
            Some(spec) => spec,
            None => {
                if !is_special_key(&prop.key) {
                    report.push(
                        &prop.key,
                        ValidationLevel::Warning,
                        format!("unknown property on line {}", prop.line),
                        Some("it will be kept verbatim on save".to_string()),
                    );
                }
                continue;
            }
        };

        match spec.kind {
            PropertyKind::Bool { .. } => {
                if !matches!(raw.to_ascii_lowercase().as_str(), "true" | "false") {
                    report.push(
                        &prop.key,
                        ValidationLevel::Error,
                        format!("expected true or false, found {:?}", raw),
                        None,
                    );
                }
            }
            PropertyKind::Int { min, max, .. } => match raw.parse::<i64>() {
                Ok(n) if (min..=max).contains(&n) => {}
                Ok(n) => {
                    report.push(
                        &prop.key,
                        ValidationLevel::Error,
                        format!("{} is outside the allowed range {}..={}", n, min, max),
                        None,
                    );
                }
                Err(_) => {
                    report.push(
                        &prop.key,
                        ValidationLevel::Error,
                        format!("expected an integer, found {:?}", raw),
                        None,
                    );
                }
            },
            PropertyKind::Text { .. } => {}
            PropertyKind::Choice { options, .. } => {
                let bare = raw.rsplit(':').next().unwrap_or(raw).to_lowercase();
                if !options.contains(&bare.as_str()) {
                    report.push(
                        &prop.key,
                        ValidationLevel::Error,
                        format!("{:?} is not one of {}", raw, options.join(", ")),
                        None,
                    );
                }
            }
        }
    }

    Ok(report)
}

/// Semantic checks on a loaded sheet.
pub fn validate_sheet(sheet: &PropertySheet) -> ValidationReport {
    let mut report = ValidationReport::default();

    // Rcon refuses to start with a blank password
    if sheet.get_bool("enable-rcon") && sheet.get_text("rcon.password").trim().is_empty() {
        report.push(
            "rcon.password",
            ValidationLevel::Warning,
            "rcon is enabled but the password is blank; the server will not start rcon"
                .to_string(),
            Some("set a password or disable rcon".to_string()),
        );
    }

    // Port collisions among the three listeners
    let mut ports: Vec<(&str, i64, bool)> = vec![("server-port", sheet.get_int("server-port"), true)];
    if sheet.get_bool("enable-query") {
        ports.push(("query.port", sheet.get_int("query.port"), false));
    }
    if sheet.get_bool("enable-rcon") {
        ports.push(("rcon.port", sheet.get_int("rcon.port"), true));
    }
    for i in 0..ports.len() {
        for j in (i + 1)..ports.len() {
            let (key_a, port_a, tcp_a) = ports[i];
            let (key_b, port_b, tcp_b) = ports[j];
            // query is UDP, so it may share a port with the TCP listeners
            if port_a == port_b && tcp_a == tcp_b {
                report.push(
                    key_b,
                    ValidationLevel::Warning,
                    format!("{} and {} both use port {}", key_a, key_b, port_a),
                    Some("choose distinct ports".to_string()),
                );
            }
        }
    }

    // Link fields must be empty or http(s)
    for key in ["bug-report-link", "resource-pack"] {
        let value = sheet.get_text(key);
        let value = value.trim();
        if !value.is_empty() && !value.starts_with("http://") && !value.starts_with("https://") {
            report.push(
                key,
                ValidationLevel::Warning,
                format!("{:?} does not look like an http(s) URL", value),
                None,
            );
        }
    }

    report
}

/// Keys handled outside the schema table.
fn is_special_key(key: &str) -> bool {
    matches!(
        key,
        "hardcore" | "generator-settings" | "initial-enabled-packs" | "initial-disabled-packs"
    )
}
