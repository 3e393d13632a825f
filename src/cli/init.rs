//! Starter config generation.

use anyhow::{Context, Result, bail};
use blog_config::{SiteConfig, config::CONFIG_FILE, log};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Write a starter `blog.toml` into `name` (or the current directory).
///
/// If `dry_run` is true, only prints the template to stdout.
pub fn new_config(name: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", SiteConfig::template_document());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let root = match name {
        Some(name) => cwd.join(name),
        None => cwd,
    };

    let path = write_config(&root)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// Write the template config into `root`, creating the directory if needed.
///
/// Never overwrites an existing config.
pub fn write_config(root: &Path) -> Result<PathBuf> {
    let path = root.join(CONFIG_FILE);
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it or choose a different directory.",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, SiteConfig::template_document())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(path)
}
