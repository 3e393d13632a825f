//! Process-wide, read-only config handle.
//!
//! The config is installed once at startup and shared behind an `Arc`
//! for the rest of the process. There is no way to replace it.

use crate::config::SiteConfig;
use std::sync::{Arc, OnceLock};

/// Global config storage.
static CONFIG: OnceLock<Arc<SiteConfig>> = OnceLock::new();

/// Current config, if one has been installed.
#[inline]
pub fn cfg() -> Option<Arc<SiteConfig>> {
    CONFIG.get().cloned()
}

/// Install the process-wide config.
///
/// The first call wins; later calls leave the stored config untouched and
/// return it.
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let mut installed = false;
    let arc = CONFIG.get_or_init(|| {
        installed = true;
        Arc::new(config)
    });
    if !installed {
        crate::debug!("config"; "config already initialized, keeping the first one");
    }
    Arc::clone(arc)
}
