//! duckdb-dialect
//!
//! DuckDB session-configuration adapter behind a generic SQL dialect
//! interface: typed setting values, dialect-correct literal rendering, `SET`
//! statement application, and discovery of the engine's supported settings.

#![warn(missing_docs)]

/// Session configuration container and the `SET` statement applier.
pub mod config;
/// Dialect literal/identifier rendering rules.
pub mod dialect;
/// Error types shared across the crate.
pub mod error;
/// Discovery of engine-supported setting names.
pub mod settings;
/// Typed setting values.
pub mod value;

pub use config::{apply_config, SessionConfig};
pub use dialect::{Dialect, DuckdbDialect};
pub use error::{DialectError, DialectResult};
pub use settings::{core_settings, is_core_setting, MOTHERDUCK_SETTINGS};
pub use value::SettingValue;
