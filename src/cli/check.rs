//! `check` command: validate and summarize.

use anyhow::Result;
use blog_config::{SiteConfig, log};
use owo_colors::{OwoColorize, Stream::Stdout};

/// Print a summary of a validated config.
pub fn check_config(config: &SiteConfig) -> Result<()> {
    let name = config
        .config_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.config_path.display().to_string());
    log!("check"; "{} is valid", name);

    for (label, value) in summary(config) {
        let label = format!("{:<10}", format!("{label}:"));
        println!("  {} {}", label.if_supports_color(Stdout, |t| t.dimmed()), value);
    }
    Ok(())
}

/// `(label, value)` rows describing what a generator will see.
fn summary(config: &SiteConfig) -> Vec<(&'static str, String)> {
    let menu = config
        .menu
        .iter()
        .map(|item| format!("{} ({})", item.label, item.path))
        .collect::<Vec<_>>()
        .join(", ");

    let contacts = config
        .author
        .contacts
        .iter()
        .map(|(channel, _)| channel.key())
        .collect::<Vec<_>>()
        .join(", ");

    let author = if contacts.is_empty() {
        config.author.name.clone()
    } else {
        format!("{} ({})", config.author.name, contacts)
    };

    vec![
        ("title", config.title.clone()),
        ("url", config.url.clone()),
        ("pages", format!("{} posts per page", config.page_size())),
        ("menu", if menu.is_empty() { "none".into() } else { menu }),
        ("author", author),
        ("comments", enabled_label(config.comments_shortname())),
        ("analytics", enabled_label(config.analytics_id())),
    ]
}

fn enabled_label(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("enabled ({id})"),
        None => "disabled".to_string(),
    }
}
