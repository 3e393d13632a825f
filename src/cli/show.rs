//! `show` command: export the validated config as JSON.

use super::ShowArgs;
use anyhow::{Context, Result};
use blog_config::{SiteConfig, log};
use serde_json::{Map, Value as JsonValue};
use std::{fs, io::Write};

pub fn show_config(config: &SiteConfig, args: &ShowArgs) -> Result<()> {
    let value = serde_json::to_value(config)?;
    let output = match &args.fields {
        Some(fields) => filter_fields(value, fields)?,
        None => value,
    };

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create '{}'", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("show"; "wrote config to {}", output_path.display());
    } else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", formatted)?;
    }

    Ok(())
}

/// Keep only the requested top-level keys, in the requested order.
fn filter_fields(value: JsonValue, fields: &[String]) -> Result<JsonValue> {
    let mut obj = match value {
        JsonValue::Object(obj) => obj,
        other => return Ok(other),
    };

    let mut filtered = Map::new();
    for field in fields {
        let value = obj
            .remove(field)
            .with_context(|| format!("unknown config key `{field}`"))?;
        filtered.insert(field.clone(), value);
    }
    Ok(JsonValue::Object(filtered))
}
