//! `[[menu]]` navigation entries.
//!
//! # Example
//!
//! ```toml
//! [[menu]]
//! label = "Articles"
//! path = "/"
//!
//! [[menu]]
//! label = "About me"
//! path = "/pages/about"
//! ```
//!
//! Entries are rendered in file order.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// One navigation entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    /// Text shown in the navigation bar.
    pub label: String,

    /// Link target, site-relative (`/pages/about`) or absolute.
    pub path: String,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Whether `path` points off-site (has a URL scheme).
    pub fn is_external(&self) -> bool {
        url::Url::parse(&self.path).is_ok()
    }
}

/// Validate menu entries.
///
/// # Checks
/// - every entry has a non-empty `label`
/// - every entry has a non-empty `path`
pub fn validate_menu(field: FieldPath, items: &[MenuItem], diag: &mut ConfigDiagnostics) {
    for (i, item) in items.iter().enumerate() {
        if item.label.trim().is_empty() {
            diag.error_with_hint(
                field.item(i, "label"),
                "menu entry has no label",
                "set label, e.g.: label = \"Articles\"",
            );
        }
        if item.path.trim().is_empty() {
            diag.error_with_hint(
                field.item(i, "path"),
                "menu entry has no path",
                "set path, e.g.: path = \"/\"",
            );
        }
    }
}
