//! `[author.contacts]` configuration.
//!
//! Each key is a fixed contact channel; any of them may be left out.
//!
//! # Example
//!
//! ```toml
//! [author.contacts]
//! email = "alice@example.com"
//! twitter = "alice"
//! github = "alice"
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Author contact handles, keyed by channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "author.contacts")]
pub struct ContactsConfig {
    /// Email address.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Twitter handle.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    /// GitHub username.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    /// Telegram username.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,

    /// VK id.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vkontakte: Option<String>,

    /// LinkedIn profile id.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    /// Instagram username.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,

    /// Facebook username.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,

    /// LINE id.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,

    /// GitLab username.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitlab: Option<String>,

    /// Weibo id.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weibo: Option<String>,

    /// CodePen username.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codepen: Option<String>,

    /// YouTube channel id.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,

    /// SoundCloud username.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soundcloud: Option<String>,

    /// Medium username.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,

    /// Feed URL.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rss: Option<String>,
}

/// Known contact channels, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactChannel {
    Email,
    Twitter,
    Github,
    Telegram,
    Vkontakte,
    Linkedin,
    Instagram,
    Facebook,
    Line,
    Gitlab,
    Weibo,
    Codepen,
    Youtube,
    Soundcloud,
    Medium,
    Rss,
}

impl ContactChannel {
    pub const ALL: [Self; 16] = [
        Self::Email,
        Self::Twitter,
        Self::Github,
        Self::Telegram,
        Self::Vkontakte,
        Self::Linkedin,
        Self::Instagram,
        Self::Facebook,
        Self::Line,
        Self::Gitlab,
        Self::Weibo,
        Self::Codepen,
        Self::Youtube,
        Self::Soundcloud,
        Self::Medium,
        Self::Rss,
    ];

    /// Config key for this channel.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Twitter => "twitter",
            Self::Github => "github",
            Self::Telegram => "telegram",
            Self::Vkontakte => "vkontakte",
            Self::Linkedin => "linkedin",
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Line => "line",
            Self::Gitlab => "gitlab",
            Self::Weibo => "weibo",
            Self::Codepen => "codepen",
            Self::Youtube => "youtube",
            Self::Soundcloud => "soundcloud",
            Self::Medium => "medium",
            Self::Rss => "rss",
        }
    }

    /// Link target for a handle on this channel.
    pub fn href(self, handle: &str) -> String {
        match self {
            Self::Email => format!("mailto:{handle}"),
            Self::Twitter => format!("https://www.twitter.com/{handle}"),
            Self::Github => format!("https://github.com/{handle}"),
            Self::Telegram => format!("tg://resolve?domain={handle}"),
            Self::Vkontakte => format!("https://vk.com/{handle}"),
            Self::Linkedin => format!("https://www.linkedin.com/in/{handle}"),
            Self::Instagram => format!("https://www.instagram.com/{handle}"),
            Self::Facebook => format!("https://www.facebook.com/{handle}"),
            Self::Line => format!("line://ti/p/{handle}"),
            Self::Gitlab => format!("https://www.gitlab.com/{handle}"),
            Self::Weibo => format!("https://www.weibo.com/{handle}"),
            Self::Codepen => format!("https://www.codepen.io/{handle}"),
            Self::Youtube => format!("https://www.youtube.com/channel/{handle}"),
            Self::Soundcloud => format!("https://soundcloud.com/{handle}"),
            Self::Medium => format!("https://medium.com/{handle}"),
            Self::Rss => handle.to_string(),
        }
    }
}

impl fmt::Display for ContactChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl ContactsConfig {
    /// Handle configured for `channel`, if any.
    pub fn get(&self, channel: ContactChannel) -> Option<&str> {
        let value = match channel {
            ContactChannel::Email => &self.email,
            ContactChannel::Twitter => &self.twitter,
            ContactChannel::Github => &self.github,
            ContactChannel::Telegram => &self.telegram,
            ContactChannel::Vkontakte => &self.vkontakte,
            ContactChannel::Linkedin => &self.linkedin,
            ContactChannel::Instagram => &self.instagram,
            ContactChannel::Facebook => &self.facebook,
            ContactChannel::Line => &self.line,
            ContactChannel::Gitlab => &self.gitlab,
            ContactChannel::Weibo => &self.weibo,
            ContactChannel::Codepen => &self.codepen,
            ContactChannel::Youtube => &self.youtube,
            ContactChannel::Soundcloud => &self.soundcloud,
            ContactChannel::Medium => &self.medium,
            ContactChannel::Rss => &self.rss,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Configured channels with their handles, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ContactChannel, &str)> {
        ContactChannel::ALL
            .into_iter()
            .filter_map(|channel| self.get(channel).map(|handle| (channel, handle)))
    }

    /// Validate contact handles.
    ///
    /// # Checks
    /// - `email` looks like an address (warning only)
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(email) = self.get(ContactChannel::Email)
            && !email.contains('@')
        {
            diag.warn(
                Self::FIELDS.email,
                format!("'{email}' does not look like an email address"),
            );
        }
    }
}
