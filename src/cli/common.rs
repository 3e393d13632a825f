//! Config loading shared by `check` and `show`.

use super::LoadArgs;
use anyhow::Result;
use blog_config::{LoadOptions, SiteConfig, debug, init_config, log, logger};
use std::{path::Path, sync::Arc};

/// Load, validate and install the process-wide config.
///
/// Warnings are printed; any validation error aborts with the full report.
pub fn load_config(path: &Path, args: &LoadArgs) -> Result<Arc<SiteConfig>> {
    logger::set_verbose(args.verbose);

    let options = LoadOptions {
        site_url: args.site_url.clone(),
        strict: args.strict,
    };
    let loaded = SiteConfig::load_with(path, &options)?;
    debug!("config"; "loaded {}", loaded.config.config_path.display());

    for warning in &loaded.warnings {
        log!("warning"; "[{}] {}", warning.field, warning.message);
    }

    Ok(init_config(loaded.config))
}
