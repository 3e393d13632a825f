//! `[author]` configuration.
//!
//! # Example
//!
//! ```toml
//! [author]
//! name = "Alice"
//! photo = "/photo.jpg"
//! bio = "Writes about compilers"
//!
//! [author.contacts]
//! github = "alice"
//! ```

use super::ContactsConfig;
use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Author identity, bio and contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "author")]
pub struct AuthorConfig {
    /// Author name.
    #[config(default = "Your Name", inline_doc)]
    pub name: String,

    /// Path or URL of the author photo.
    #[config(default = "/photo.jpg", inline_doc)]
    pub photo: String,

    /// Short biography shown next to the photo.
    #[config(inline_doc)]
    pub bio: String,

    /// Contact handles.
    #[config(sub)]
    pub contacts: ContactsConfig,
}

impl AuthorConfig {
    /// Validate author configuration.
    ///
    /// # Checks
    /// - `name` must not be empty
    /// - contact handles (see [`ContactsConfig::validate`])
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                "author name is empty",
                format!("set {}, e.g.: \"Alice\"", Self::FIELDS.name),
            );
        }
        self.contacts.validate(diag);
    }
}
