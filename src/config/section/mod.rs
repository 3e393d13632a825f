//! Configuration section definitions.
//!
//! | Module         | TOML Section        | Purpose                          |
//! |----------------|---------------------|----------------------------------|
//! | `author`       | `[author]`          | Author identity and bio          |
//! | `contacts`     | `[author.contacts]` | Contact handles per channel      |
//! | `integrations` | root keys           | Disqus / Google Analytics ids    |
//! | `menu`         | `[[menu]]`          | Ordered navigation entries       |
//! | `pagination`   | `posts_per_page`    | Listing page size                |

mod author;
mod contacts;
pub mod integrations;
mod menu;
mod pagination;

pub use author::AuthorConfig;
pub use contacts::{ContactChannel, ContactsConfig};
pub use menu::{MenuItem, validate_menu};
pub use pagination::PostsPerPage;
