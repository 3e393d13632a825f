//! Site configuration for `blog.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Section definitions
//! │   ├── author     # [author]
//! │   ├── contacts   # [author.contacts]
//! │   ├── integrations # disqus / analytics ids
//! │   ├── menu       # [[menu]]
//! │   └── pagination # posts_per_page
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ValidationError, diagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Process-wide config handle
//! ├── util.rs        # Config discovery, URL helpers
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Keys
//!
//! | Key                   | Purpose                                         |
//! |-----------------------|-------------------------------------------------|
//! | `url`                 | Canonical site URL for absolute links and feeds |
//! | `title`               | Site display title                              |
//! | `subtitle`            | Site tagline                                    |
//! | `copyright`           | Footer copyright line                           |
//! | `disqus_shortname`    | Comment widget; empty disables it               |
//! | `posts_per_page`      | Pagination page size                            |
//! | `google_analytics_id` | Analytics snippet; empty disables it            |
//! | `[[menu]]`            | Ordered navigation entries                      |
//! | `[author]`            | Author identity, bio and contacts               |
//!
//! The camelCase spellings (`postsPerPage`, ...) are accepted as aliases.

pub mod section;
pub mod types;
mod util;

use util::{extract_url_path, find_config_file};

pub use section::{AuthorConfig, ContactChannel, ContactsConfig, MenuItem, PostsPerPage};
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, ValidationError, cfg,
    init_config,
};

use crate::debug;
use macros::Config;
use section::integrations;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Default config file name.
pub const CONFIG_FILE: &str = "blog.toml";

/// Default page size when `posts_per_page` is omitted.
const DEFAULT_POSTS_PER_PAGE: i64 = 10;

// ============================================================================
// root configuration
// ============================================================================

/// Blog site configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    #[config(skip)]
    pub config_path: PathBuf,

    /// Canonical site URL, used for absolute links and feeds.
    #[config(default = "https://example.com/")]
    pub url: String,

    /// Site title.
    #[config(default = "My Blog", inline_doc)]
    pub title: String,

    /// Site tagline.
    #[config(default = "Notes and essays", inline_doc)]
    pub subtitle: String,

    /// Footer copyright line.
    #[config(default = "© All rights reserved.", inline_doc)]
    pub copyright: String,

    /// Disqus shortname. Leave empty to disable comments.
    #[serde(alias = "disqusShortname")]
    pub disqus_shortname: String,

    /// Number of posts per page in paginated listings.
    #[serde(alias = "postsPerPage")]
    #[config(inline_doc)]
    pub posts_per_page: PostsPerPage,

    /// Google Analytics id. Leave empty to disable analytics.
    #[serde(alias = "googleAnalyticsId")]
    pub google_analytics_id: String,

    /// Navigation entries, in display order.
    #[config(hidden)]
    pub menu: Vec<MenuItem>,

    /// Author identity, bio and contacts.
    #[config(sub)]
    pub author: AuthorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            url: String::new(),
            title: String::new(),
            subtitle: String::new(),
            copyright: String::new(),
            disqus_shortname: String::new(),
            posts_per_page: PostsPerPage::default(),
            google_analytics_id: String::new(),
            menu: Vec::new(),
            author: AuthorConfig::default(),
        }
    }
}

/// Options for [`SiteConfig::load_with`].
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Replaces `url` before validation (e.g. a CI deploy URL).
    pub site_url: Option<String>,
    /// Treat unknown keys as validation errors instead of warnings.
    pub strict: bool,
}

/// A validated config plus the non-fatal diagnostics found while loading it.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub config: SiteConfig,
    pub warnings: Vec<ConfigDiagnostic>,
}

impl SiteConfig {
    // ========================================================================
    // loading
    // ========================================================================

    /// Load and validate the config file at `path`.
    ///
    /// A relative `path` that does not exist in the current directory is
    /// searched for upward through the parent directories.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, &LoadOptions::default()).map(|loaded| loaded.config)
    }

    /// Load with options, returning warnings alongside the config.
    pub fn load_with(path: &Path, options: &LoadOptions) -> Result<Loaded, ConfigError> {
        let config_path = Self::resolve_config_path(path)?;
        debug!("config"; "loading {}", config_path.display());

        let content = fs::read_to_string(&config_path)
            .map_err(|err| ConfigError::Io(config_path.clone(), err))?;

        let mut loaded = Self::build(&content, options)?;
        loaded.config.config_path = config_path;
        Ok(loaded)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        content.parse()
    }

    /// Parse TOML content without validating, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn build(content: &str, options: &LoadOptions) -> Result<Loaded, ConfigError> {
        let (mut config, ignored) = Self::parse_with_ignored(content)?;

        if let Some(url) = &options.site_url {
            config.url = url.clone();
        }

        let mut diag = ConfigDiagnostics::new();
        for field in ignored {
            if options.strict {
                diag.error_with_hint(field, "unknown field", "remove it or fix the spelling");
            } else {
                debug!("config"; "ignoring unknown field `{}`", field);
                diag.warn(field, "unknown field, ignored");
            }
        }
        config.diagnose(&mut diag);

        let warnings = diag.into_result().map_err(ConfigError::Validation)?;
        Ok(Loaded { config, warnings })
    }

    /// Resolve config file path: as given, or by searching upward from cwd.
    fn resolve_config_path(path: &Path) -> Result<PathBuf, ConfigError> {
        let cwd = std::env::current_dir().map_err(|err| ConfigError::Io(PathBuf::from("."), err))?;
        find_config_file(&cwd, path).ok_or_else(|| ConfigError::NotFound(path.to_path_buf()))
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration, reporting every violation at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.diagnose(&mut diag);
        diag.into_result()
            .map(|_| ())
            .map_err(ConfigError::Validation)
    }

    /// Push errors and warnings for this configuration into `diag`.
    pub fn diagnose(&self, diag: &mut ConfigDiagnostics) {
        self.validate_url(diag);

        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title is empty",
                format!("set {}, e.g.: \"My Blog\"", Self::FIELDS.title),
            );
        }

        self.posts_per_page.validate(Self::FIELDS.posts_per_page, diag);

        integrations::validate_disqus_shortname(
            Self::FIELDS.disqus_shortname,
            &self.disqus_shortname,
            diag,
        );
        integrations::validate_analytics_id(
            Self::FIELDS.google_analytics_id,
            &self.google_analytics_id,
            diag,
        );

        section::validate_menu(Self::FIELDS.menu, &self.menu, diag);
        self.author.validate(diag);
    }

    /// `url` must be an absolute http(s) URL with a host.
    fn validate_url(&self, diag: &mut ConfigDiagnostics) {
        const HINT: &str = "use format like https://example.com";

        if self.url.trim().is_empty() {
            diag.error_with_hint(Self::FIELDS.url, "site URL is not configured", HINT);
            return;
        }

        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        HINT,
                    );
                }
                if parsed.host_str().is_none_or(str::is_empty) {
                    diag.error_with_hint(Self::FIELDS.url, "URL must have a valid host", HINT);
                }
            }
            Err(e) => {
                diag.error_with_hint(Self::FIELDS.url, format!("invalid URL: {}", e), HINT);
            }
        }
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Disqus shortname, or `None` when comments are disabled.
    pub fn comments_shortname(&self) -> Option<&str> {
        integrations::enabled(&self.disqus_shortname)
    }

    /// Google Analytics id, or `None` when analytics are disabled.
    pub fn analytics_id(&self) -> Option<&str> {
        integrations::enabled(&self.google_analytics_id)
    }

    /// Parsed canonical URL.
    pub fn base_url(&self) -> Result<url::Url, url::ParseError> {
        url::Url::parse(&self.url)
    }

    /// Absolute URL for a site path, e.g. `/rss.xml` -> `https://example.com/rss.xml`.
    ///
    /// Leading slashes are resolved against the URL's path prefix, so
    /// subdirectory deployments keep their prefix.
    pub fn absolute_url(&self, path: &str) -> Result<url::Url, url::ParseError> {
        let mut base = self.base_url()?;
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path.trim_start_matches('/'))
    }

    /// Path component of `url` for subdirectory deployments (`"blog"`, or `""`).
    pub fn path_prefix(&self) -> String {
        extract_url_path(&self.url).unwrap_or_default()
    }

    /// Posts per page as a count. Validated configs always return at least 1.
    pub fn page_size(&self) -> usize {
        self.posts_per_page.get().unwrap_or(1)
    }

    /// Number of listing pages needed for `total_posts` (at least one).
    pub fn page_count(&self, total_posts: usize) -> usize {
        total_posts.div_ceil(self.page_size()).max(1)
    }

    // ========================================================================
    // template
    // ========================================================================

    /// Starter `blog.toml` content that loads without errors.
    pub fn template_document() -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "# Blog configuration ({} v{})\n\n",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        ));
        out.push_str(&Self::template_with_header());
        out.push_str("\n# Navigation entries, in display order.\n");
        for (label, path) in [
            ("Articles", "/"),
            ("About me", "/pages/about"),
            ("Contact me", "/pages/contacts"),
        ] {
            out.push_str(&format!(
                "[[menu]]\nlabel = \"{label}\"\npath = \"{path}\"\n\n"
            ));
        }

        out.truncate(out.trim_end().len());
        out.push('\n');
        out
    }
}

impl FromStr for SiteConfig {
    type Err = ConfigError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Self::build(content, &LoadOptions::default()).map(|loaded| loaded.config)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse and validate a config with the minimal required fields.
/// Panics on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "url = \"https://example.com/\"\ntitle = \"Test\"\n{extra}\n[author]\nname = \"Tester\"\n"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed.validate().unwrap();
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const FIXTURE: &str = include_str!("../../fixtures/blog.toml");

    fn validation_err(content: &str) -> ValidationError {
        match SiteConfig::from_str(content) {
            Err(ConfigError::Validation(err)) => err,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    /// Fixture with one line replaced.
    fn fixture_with(from: &str, to: &str) -> String {
        assert!(FIXTURE.contains(from), "fixture has no `{from}`");
        FIXTURE.replacen(from, to, 1)
    }

    #[test]
    fn test_fixture_loads() {
        let config = SiteConfig::from_str(FIXTURE).unwrap();

        assert_eq!(config.title, "Blog by Brandon Jones");
        assert_eq!(config.url, "https://fervent-swanson-4967e2.netlify.com/");
        assert_eq!(config.subtitle, "Senior Application Developer at Blue Sombrero");
        assert_eq!(config.copyright, "© All rights reserved.");
        assert_eq!(config.posts_per_page.as_integer(), Some(4));

        let labels: Vec<_> = config.menu.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, ["Articles", "About me", "Contact me"]);
        let paths: Vec<_> = config.menu.iter().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, ["/", "/pages/about", "/pages/contacts"]);

        assert_eq!(config.author.name, "Brandon Jones");
        assert_eq!(config.author.photo, "/photo.jpg");
        assert_eq!(
            config.author.contacts.get(ContactChannel::Github),
            Some("bjonesy")
        );
        assert_eq!(config.author.contacts.iter().count(), 3);
    }

    #[test]
    fn test_load_is_idempotent() {
        let first = SiteConfig::from_str(FIXTURE).unwrap();
        let second = SiteConfig::from_str(FIXTURE).unwrap();
        assert_eq!(first, second);

        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, FIXTURE).unwrap();
        let a = SiteConfig::load(&path).unwrap();
        let b = SiteConfig::load(&path).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.config_path, path);
    }

    #[test]
    fn test_empty_sentinels_disable_integrations() {
        let config = SiteConfig::from_str(FIXTURE).unwrap();
        assert_eq!(config.disqus_shortname, "");
        assert_eq!(config.google_analytics_id, "");
        assert_eq!(config.comments_shortname(), None);
        assert_eq!(config.analytics_id(), None);

        let config = test_parse_config(
            "disqus_shortname = \"bjones-blog\"\ngoogle_analytics_id = \"UA-1234567-1\"",
        );
        assert_eq!(config.comments_shortname(), Some("bjones-blog"));
        assert_eq!(config.analytics_id(), Some("UA-1234567-1"));
    }

    #[test]
    fn test_zero_posts_per_page_rejected() {
        let err = validation_err(&fixture_with("posts_per_page = 4", "posts_per_page = 0"));
        assert!(err.has_field("posts_per_page"));
    }

    #[test]
    fn test_negative_posts_per_page_rejected() {
        let err = validation_err(&fixture_with("posts_per_page = 4", "posts_per_page = -3"));
        assert!(err.has_field("posts_per_page"));
        assert!(err.errors()[0].message.contains("-3"));
    }

    #[test]
    fn test_non_integer_posts_per_page_rejected() {
        for value in ["\"4\"", "4.5", "true"] {
            let content = fixture_with("posts_per_page = 4", &format!("posts_per_page = {value}"));
            let err = validation_err(&content);
            assert_eq!(err.fields().collect::<Vec<_>>(), ["posts_per_page"]);
            assert!(err.errors()[0].message.contains("positive integer"));
        }
    }

    #[test]
    fn test_non_integer_posts_per_page_reported_with_others() {
        let err = validation_err("url = \"\"\nposts_per_page = \"ten\"\n[author]\nname = \"n\"");
        assert_eq!(
            err.fields().collect::<Vec<_>>(),
            ["url", "title", "posts_per_page"]
        );
    }

    #[test]
    fn test_parse_via_from_str_trait() {
        let config: SiteConfig = FIXTURE.parse().unwrap();
        assert_eq!(config, SiteConfig::from_str(FIXTURE).unwrap());
        assert_eq!(config.page_size(), 4);
    }

    #[test]
    fn test_menu_entry_missing_path_rejected() {
        let err = validation_err(&fixture_with("path = \"/pages/about\"\n", ""));
        assert_eq!(err.fields().collect::<Vec<_>>(), ["menu[1].path"]);
    }

    #[test]
    fn test_menu_entry_missing_label_rejected() {
        let err = validation_err(&fixture_with("label = \"Contact me\"\n", ""));
        assert!(err.has_field("menu[2].label"));
    }

    #[test]
    fn test_invalid_url_rejected() {
        for bad in ["not a url", "/relative/path", "ftp://example.com", ""] {
            let content = fixture_with(
                "url = \"https://fervent-swanson-4967e2.netlify.com/\"",
                &format!("url = \"{bad}\""),
            );
            let err = validation_err(&content);
            assert!(err.has_field("url"), "`{bad}` should be rejected");
        }
    }

    #[test]
    fn test_empty_author_name_rejected() {
        let err = validation_err(&fixture_with("name = \"Brandon Jones\"", "name = \"\""));
        assert!(err.has_field("author.name"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = validation_err(&fixture_with("title = \"Blog by Brandon Jones\"", "title = \" \""));
        assert!(err.has_field("title"));
    }

    #[test]
    fn test_all_violations_reported_together() {
        let err = validation_err(
            "url = \"nope\"\nposts_per_page = 0\n[[menu]]\nlabel = \"Home\"\n[author]\nname = \"\"",
        );
        assert_eq!(
            err.fields().collect::<Vec<_>>(),
            ["url", "title", "posts_per_page", "menu[0].path", "author.name"]
        );
    }

    #[test]
    fn test_camel_case_aliases() {
        let config = test_parse_config(
            "postsPerPage = 7\ndisqusShortname = \"blog\"\ngoogleAnalyticsId = \"G-ABCDEF12\"",
        );
        assert_eq!(config.posts_per_page.as_integer(), Some(7));
        assert_eq!(config.disqus_shortname, "blog");
        assert_eq!(config.google_analytics_id, "G-ABCDEF12");
    }

    #[test]
    fn test_defaults_for_omitted_keys() {
        let config = test_parse_config("");
        assert_eq!(config.posts_per_page.as_integer(), Some(DEFAULT_POSTS_PER_PAGE));
        assert!(config.menu.is_empty());
        assert_eq!(config.subtitle, "");
        assert_eq!(config.author.contacts, ContactsConfig::default());
    }

    #[test]
    fn test_unknown_fields_warn_or_fail() {
        let content = format!("{FIXTURE}\n[deploy]\ntarget = \"netlify\"\n");

        let loaded = SiteConfig::build(&content, &LoadOptions::default()).unwrap();
        assert!(loaded.warnings.iter().any(|w| w.field.contains("deploy")));

        let strict = LoadOptions {
            strict: true,
            ..Default::default()
        };
        match SiteConfig::build(&content, &strict) {
            Err(ConfigError::Validation(err)) => {
                assert!(err.fields().any(|f| f.contains("deploy")));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_contact_channel_detected() {
        let content = fixture_with("github = \"bjonesy\"", "github = \"bjonesy\"\nmyspace = \"tom\"");
        let (_, ignored) = SiteConfig::parse_with_ignored(&content).unwrap();
        assert_eq!(ignored, ["author.contacts.myspace"]);
    }

    #[test]
    fn test_site_url_override_applies_before_validation() {
        let broken = fixture_with(
            "url = \"https://fervent-swanson-4967e2.netlify.com/\"",
            "url = \"\"",
        );
        let options = LoadOptions {
            site_url: Some("https://bjonesy.github.io/blog".into()),
            ..Default::default()
        };
        let loaded = SiteConfig::build(&broken, &options).unwrap();
        assert_eq!(loaded.config.url, "https://bjonesy.github.io/blog");
        assert_eq!(loaded.config.path_prefix(), "blog");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.toml");
        assert!(matches!(
            SiteConfig::load(&missing),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[author\nname = \"x\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_absolute_url() {
        let config = SiteConfig::from_str(FIXTURE).unwrap();
        assert_eq!(
            config.absolute_url("/rss.xml").unwrap().as_str(),
            "https://fervent-swanson-4967e2.netlify.com/rss.xml"
        );
        assert_eq!(config.path_prefix(), "");

        let config = test_parse_config("");
        let config = SiteConfig {
            url: "https://user.github.io/blog".into(),
            ..config
        };
        assert_eq!(
            config.absolute_url("/pages/about").unwrap().as_str(),
            "https://user.github.io/blog/pages/about"
        );
    }

    #[test]
    fn test_pagination() {
        let config = SiteConfig::from_str(FIXTURE).unwrap();
        assert_eq!(config.page_size(), 4);
        assert_eq!(config.page_count(0), 1);
        assert_eq!(config.page_count(4), 1);
        assert_eq!(config.page_count(9), 3);
    }

    #[test]
    fn test_template_document_loads() {
        let template = SiteConfig::template_document();
        assert!(template.contains("[author]"));
        assert!(template.contains("[author.contacts]"));
        assert!(template.contains("[[menu]]"));

        let (config, ignored) = SiteConfig::parse_with_ignored(&template).unwrap();
        assert!(ignored.is_empty(), "template has unknown fields: {ignored:?}");
        config.validate().unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.posts_per_page.as_integer(), Some(DEFAULT_POSTS_PER_PAGE));
        assert_eq!(config.menu.len(), 3);
    }

    #[test]
    fn test_field_paths() {
        assert_eq!(SiteConfig::FIELDS.posts_per_page.as_str(), "posts_per_page");
        assert_eq!(SiteConfig::FIELDS.menu.as_str(), "menu");
        assert_eq!(AuthorConfig::FIELDS.name.as_str(), "author.name");
    }

    #[test]
    fn test_json_export_skips_internal_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, FIXTURE).unwrap();
        let config = SiteConfig::load(&path).unwrap();

        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("config_path").is_none());
        assert_eq!(json["posts_per_page"], 4);
        assert_eq!(json["menu"][2]["label"], "Contact me");
        assert_eq!(json["author"]["contacts"]["twitter"], "BrandonJ0nes");
        assert!(json["author"]["contacts"].get("telegram").is_none());
    }
}
