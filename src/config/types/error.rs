//! Configuration error types.

use owo_colors::{OwoColorize, Stream::Stderr};
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file `{0}` not found")]
    NotFound(PathBuf),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Validation(ValidationError),
}

impl ConfigError {
    /// The schema violations, if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "menu[1].path")
    pub field: Cow<'static, str>,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".if_supports_color(Stderr, |t| t.dimmed()),
            self.field.if_supports_color(Stderr, |t| t.cyan()),
            "]".if_supports_color(Stderr, |t| t.dimmed())
        )?;
        // Error message with red bullet
        write!(f, "{} {}", "→".if_supports_color(Stderr, |t| t.red()), self.message)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(
                f,
                "\n  {} {}",
                "hint:".if_supports_color(Stderr, |t| t.yellow()),
                hint
            )?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Collects errors and warnings while a config is being checked.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: impl Into<Cow<'static, str>>, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Add a non-fatal warning.
    pub fn warn(&mut self, field: impl Into<Cow<'static, str>>, message: impl Into<String>) {
        self.warnings.push(ConfigDiagnostic::new(field, message));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    /// Convert to Result: warnings on success, every error on failure.
    pub fn into_result(self) -> Result<Vec<ConfigDiagnostic>, ValidationError> {
        if self.errors.is_empty() {
            Ok(self.warnings)
        } else {
            Err(ValidationError {
                errors: self.errors,
            })
        }
    }
}

// ============================================================================
// ValidationError
// ============================================================================

/// Schema violations found while loading a config.
///
/// Always holds at least one diagnostic; all violations are reported together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<ConfigDiagnostic>,
}

impl ValidationError {
    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// Offending field paths, in report order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| &*e.field)
    }

    /// Whether `field` is among the offending paths.
    pub fn has_field(&self, field: &str) -> bool {
        self.fields().any(|f| f == field)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}\n",
            "config validation failed:".if_supports_color(Stderr, |t| t.red().bold().to_string())
        )?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            let count = self.errors.len();
            write!(
                f,
                "\n\n{} {} {}",
                "found".if_supports_color(Stderr, |t| t.dimmed()),
                count.if_supports_color(Stderr, |t| t.red().bold().to_string()),
                "errors".if_supports_color(Stderr, |t| t.dimmed())
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldPath;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("blog.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("blog.toml"));

        let not_found = ConfigError::NotFound(PathBuf::from("missing.toml"));
        assert!(format!("{not_found}").contains("missing.toml"));
    }

    #[test]
    fn test_warnings_survive_success() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("google_analytics_id"), "looks odd");
        assert!(!diag.has_errors());

        let warnings = diag.into_result().unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "google_analytics_id");
    }

    #[test]
    fn test_errors_collected_in_order() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("title"), "empty");
        diag.error_with_hint(FieldPath::new("menu").item(1, "path"), "missing", "add a path");
        diag.warn(FieldPath::new("disqus_shortname"), "ignored on failure");

        let err = diag.into_result().unwrap_err();
        assert_eq!(err.len(), 2);
        assert_eq!(err.fields().collect::<Vec<_>>(), ["title", "menu[1].path"]);
        assert!(err.has_field("menu[1].path"));
        assert_eq!(err.errors()[1].hint.as_deref(), Some("add a path"));
    }

    #[test]
    fn test_validation_display_names_fields() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("posts_per_page"), "must be a positive integer");
        diag.error(FieldPath::new("author.name"), "author name is empty");
        let err = ConfigError::Validation(diag.into_result().unwrap_err());

        let display = format!("{err}");
        assert!(display.contains("posts_per_page"));
        assert!(display.contains("author.name"));
        assert!(display.contains("must be a positive integer"));
        assert!(err.validation().is_some());
    }

    #[test]
    fn test_no_escape_codes_without_color() {
        owo_colors::set_override(false);

        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint(FieldPath::new("title"), "site title is empty", "set it");
        diag.error(FieldPath::new("url"), "site URL is not configured");
        let display = diag.into_result().unwrap_err().to_string();

        assert!(display.contains("[title]"));
        assert!(display.contains("hint: set it"));
        assert!(!display.contains('\x1b'), "unexpected ANSI codes: {display:?}");
    }
}
