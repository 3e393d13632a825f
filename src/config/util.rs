//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Extract the path component of a site URL, without surrounding slashes.
///
/// Returns `None` if the URL is invalid.
///
/// # Examples
/// ```ignore
/// extract_url_path("https://user.github.io/blog/") -> Some("blog")
/// extract_url_path("https://example.com")          -> Some("")
/// extract_url_path("invalid")                      -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    Some(parsed.path().trim_matches('/').to_string())
}

/// Resolve the config file location.
///
/// An existing path (absolute or relative to `start`) is used as is.
/// Otherwise walks up from `start` looking for a file named `config_name`.
///
/// # Example
/// ```text
/// /home/user/blog/content/posts/  ← start
/// /home/user/blog/blog.toml       ← found
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    let direct = start.join(config_name);
    if direct.is_file() {
        return Some(direct);
    }
    if config_name.is_absolute() {
        return None;
    }

    let mut current = start.parent();
    while let Some(dir) = current {
        let candidate = dir.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = dir.parent();
    }
    None
}

// ============================================================================
// tests
// ============================================================================
