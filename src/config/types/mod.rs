//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error and diagnostic types     |
//! | `field`  | Type-safe field paths for diagnostics        |
//! | `handle` | Process-wide read-only config handle         |

mod error;
mod field;
pub mod handle;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, ValidationError};
pub use field::FieldPath;
pub use handle::{cfg, init_config};
