//! Listing pagination (`posts_per_page`).

use crate::config::{ConfigDiagnostics, DEFAULT_POSTS_PER_PAGE, FieldPath};
use serde::{Deserialize, Serialize};

/// `posts_per_page` as written in the config.
///
/// Values that are not TOML integers are kept as-is so that validation can
/// report them against the field instead of failing the whole parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostsPerPage {
    Count(i64),
    Invalid(toml::Value),
}

impl Default for PostsPerPage {
    fn default() -> Self {
        Self::Count(DEFAULT_POSTS_PER_PAGE)
    }
}

impl From<i64> for PostsPerPage {
    fn from(count: i64) -> Self {
        Self::Count(count)
    }
}

impl PostsPerPage {
    /// The configured integer, if it is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Count(count) => Some(*count),
            Self::Invalid(_) => None,
        }
    }

    /// Page size as a count, or `None` unless it is a positive integer.
    ///
    /// Saturates at `usize::MAX` on targets where the value does not fit.
    pub fn get(&self) -> Option<usize> {
        match self.as_integer()? {
            n if n >= 1 => Some(usize::try_from(n).unwrap_or(usize::MAX)),
            _ => None,
        }
    }

    pub fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.get().is_some() {
            return;
        }
        let got = match self {
            Self::Count(count) => count.to_string(),
            Self::Invalid(value) => value.to_string(),
        };
        diag.error_with_hint(
            field,
            format!("must be a positive integer, got {got}"),
            format!("set {field} to 1 or more"),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: FieldPath = FieldPath::new("posts_per_page");

    fn errors(value: PostsPerPage) -> Vec<String> {
        let mut diag = ConfigDiagnostics::new();
        value.validate(FIELD, &mut diag);
        diag.errors().iter().map(|e| e.message.clone()).collect()
    }

    #[test]
    fn test_positive_count() {
        assert_eq!(PostsPerPage::from(4).get(), Some(4));
        assert_eq!(PostsPerPage::default().get(), Some(10));
        assert!(errors(PostsPerPage::from(1)).is_empty());
    }

    #[test]
    fn test_non_positive_count() {
        assert_eq!(PostsPerPage::from(0).get(), None);
        assert_eq!(errors(PostsPerPage::from(-3)), ["must be a positive integer, got -3"]);
    }

    #[test]
    fn test_non_integer_value() {
        let value = PostsPerPage::Invalid(toml::Value::Float(4.5));
        assert_eq!(value.as_integer(), None);
        assert_eq!(value.get(), None);
        assert_eq!(errors(value), ["must be a positive integer, got 4.5"]);
    }

    #[test]
    fn test_deserialize_keeps_non_integers() {
        #[derive(Deserialize)]
        struct Doc {
            n: PostsPerPage,
        }

        let doc: Doc = toml::from_str("n = 7").unwrap();
        assert_eq!(doc.n, PostsPerPage::Count(7));

        let doc: Doc = toml::from_str("n = \"4\"").unwrap();
        assert_eq!(doc.n, PostsPerPage::Invalid(toml::Value::String("4".into())));
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let json = serde_json::to_value(PostsPerPage::from(4)).unwrap();
        assert_eq!(json, serde_json::json!(4));
    }

    #[test]
    fn test_oversized_count_saturates() {
        let value = PostsPerPage::from(i64::MAX);
        assert!(value.get().is_some_and(|n| n >= 1));
    }
}
