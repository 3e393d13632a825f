//! Typed, validated site configuration for static blog generators.
//!
//! A generator loads `blog.toml` once at startup and reads the resulting
//! [`SiteConfig`] for the rest of the build:
//!
//! ```no_run
//! use blog_config::{SiteConfig, init_config};
//! use std::path::Path;
//!
//! let config = init_config(SiteConfig::load(Path::new("blog.toml"))?);
//! for item in &config.menu {
//!     println!("{} -> {}", item.label, item.path);
//! }
//! if let Some(shortname) = config.comments_shortname() {
//!     println!("comments enabled for {shortname}");
//! }
//! # Ok::<(), blog_config::ConfigError>(())
//! ```

pub mod config;
pub mod logger;

pub use config::{
    AuthorConfig, ConfigDiagnostic, ConfigDiagnostics, ConfigError, ContactChannel,
    ContactsConfig, FieldPath, LoadOptions, Loaded, MenuItem, PostsPerPage, SiteConfig,
    ValidationError, cfg, init_config,
};
