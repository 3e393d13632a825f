//! Type-safe config field path.

use owo_colors::{OwoColorize, Stream::Stderr};
use std::{borrow::Cow, fmt};

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors.
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "author")]
/// pub struct AuthorConfig {
///     pub name: String,
/// }
///
/// // Generated:
/// impl AuthorConfig {
///     pub const FIELDS: AuthorConfigFields = ...;
/// }
///
/// // Usage:
/// diag.error(AuthorConfig::FIELDS.name, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Path of a key inside the `index`-th element of an array of tables.
    ///
    /// `FieldPath("menu").item(2, "path")` -> `menu[2].path`
    pub fn item(&self, index: usize, key: &str) -> String {
        format!("{}[{}].{}", self.0, index, key)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(f, "{}", quoted.if_supports_color(Stderr, |t| t.bright_blue()))
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl From<FieldPath> for Cow<'static, str> {
    fn from(path: FieldPath) -> Self {
        Cow::Borrowed(path.0)
    }
}
