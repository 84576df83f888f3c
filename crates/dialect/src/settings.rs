//! Discovery of the setting names the engine recognizes

use std::collections::HashSet;
use std::sync::OnceLock;

use duckdb::Connection;
use tracing::debug;

use crate::error::{DialectError, DialectResult};

/// Connection options accepted by MotherDuck in addition to the engine's
/// own settings.
pub const MOTHERDUCK_SETTINGS: [&str; 3] = ["motherduck_token", "attach_mode", "saas_mode"];

static CORE_SETTINGS: OnceLock<HashSet<String>> = OnceLock::new();

/// Returns every setting name the engine recognizes, unioned with
/// [`MOTHERDUCK_SETTINGS`].
///
/// The first successful call queries a transient in-memory database and
/// caches the result for the lifetime of the process; later calls return the
/// cached set without re-querying. A failed discovery caches nothing, so the
/// next call retries.
pub fn core_settings() -> DialectResult<&'static HashSet<String>> {
    if let Some(settings) = CORE_SETTINGS.get() {
        return Ok(settings);
    }
    let discovered = discover_settings()?;
    Ok(CORE_SETTINGS.get_or_init(|| discovered))
}

/// Whether the engine (or MotherDuck) recognizes the named setting.
pub fn is_core_setting(name: &str) -> DialectResult<bool> {
    Ok(core_settings()?.contains(name))
}

fn discover_settings() -> DialectResult<HashSet<String>> {
    let conn = Connection::open_in_memory()?;
    let mut stmt = conn
        .prepare("SELECT name FROM duckdb_settings()")
        .map_err(|err| DialectError::discovery(err.to_string()))?;
    let mut rows = stmt
        .query([])
        .map_err(|err| DialectError::discovery(err.to_string()))?;

    let mut names = HashSet::new();
    while let Some(row) = rows
        .next()
        .map_err(|err| DialectError::discovery(err.to_string()))?
    {
        let name: String = row.get(0).map_err(|err| DialectError::discovery(err.to_string()))?;
        names.insert(name);
    }
    names.extend(MOTHERDUCK_SETTINGS.iter().map(|name| name.to_string()));

    debug!(count = names.len(), "discovered engine settings");
    Ok(names)
}
