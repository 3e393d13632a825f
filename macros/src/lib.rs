//! Proc macros for blog-config.
//!
//! # Config derive macro
//!
//! Generates field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "author")]
//! /// Author identity shown in the sidebar.
//! pub struct AuthorConfig {
//!     /// Display name.
//!     #[config(default = "Jane Doe", inline_doc)]
//!     pub name: String,
//!
//!     /// Nested table, rendered with its own `[author.contacts]` header.
//!     #[config(sub)]
//!     pub contacts: ContactsConfig,
//!
//!     /// Kept in FIELDS but left out of the template.
//!     #[config(hidden)]
//!     pub extra: Vec<String>,
//! }
//!
//! // Generates:
//! // - AuthorConfig::FIELDS.name -> FieldPath("author.name")
//! // - AuthorConfig::template() -> TOML string with comments
//! // - AuthorConfig::template_with_header() -> with [author] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (`""` for the root table)
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template (internal use)
//! - `#[config(hidden)]` - Keep in FIELDS, hide from template output
//! - `#[config(sub)]` - Nested config table
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Value written to the template
//! - `#[config(inline_doc)]` - Write the doc comment after the value
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `AuthorConfig` → `author`
//! - `SiteContactsConfig` → `site_contacts`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
