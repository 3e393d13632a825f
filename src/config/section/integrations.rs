//! Third-party integrations keyed by an id string.
//!
//! An empty id disables the integration; a non-empty one that does not look
//! like the service's format only produces a warning.

use crate::config::{ConfigDiagnostics, FieldPath};
use regex::Regex;
use std::sync::LazyLock;

/// `UA-12345-1` (Universal Analytics) or `G-XXXXXXX` (GA4).
static RE_ANALYTICS_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(UA-[0-9]{4,10}-[0-9]{1,4}|G-[A-Z0-9]{4,16})$").unwrap());

/// Disqus shortnames are letters, digits and hyphens.
static RE_DISQUS_SHORTNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").unwrap());

/// Treat the empty string as "disabled".
#[inline]
pub fn enabled(id: &str) -> Option<&str> {
    Some(id).filter(|id| !id.is_empty())
}

pub fn validate_analytics_id(field: FieldPath, id: &str, diag: &mut ConfigDiagnostics) {
    if let Some(id) = enabled(id)
        && !RE_ANALYTICS_ID.is_match(id)
    {
        diag.warn(
            field,
            format!("'{id}' does not look like a Google Analytics id (UA-XXXX-Y or G-XXXX)"),
        );
    }
}

pub fn validate_disqus_shortname(field: FieldPath, shortname: &str, diag: &mut ConfigDiagnostics) {
    if let Some(shortname) = enabled(shortname)
        && !RE_DISQUS_SHORTNAME.is_match(shortname)
    {
        diag.warn(
            field,
            format!("'{shortname}' is not a valid Disqus shortname"),
        );
    }
}
