//! Session configuration container and application

use duckdb::Connection;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::dialect::Dialect;
use crate::error::{DialectError, DialectResult};
use crate::value::SettingValue;

/// Session settings to apply to a connection, in insertion order.
///
/// Re-setting an existing name replaces its value in place, keeping the
/// original position, so statement order always matches first-insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionConfig {
    entries: Vec<(String, SettingValue)>,
}

impl SessionConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a named option, replacing any existing value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<SettingValue>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Build a configuration from a JSON object, typically engine-creation
    /// keyword arguments. Entries keep the object's order; the first
    /// unsupported value fails the whole conversion.
    pub fn from_json_object(object: &Map<String, Value>) -> DialectResult<Self> {
        let mut config = Self::new();
        for (name, value) in object {
            config.set(name.clone(), SettingValue::from_json(name, value)?);
        }
        Ok(config)
    }

    /// Look up the value for a setting name.
    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Number of settings held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the configuration holds no settings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate settings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

/// Validates a setting name before it is interpolated into a statement.
///
/// Names are sent bare (unquoted), so anything that could terminate the
/// statement or open a literal is rejected up front.
fn validate_setting_name(name: &str) -> DialectResult<()> {
    if name.is_empty() {
        return Err(DialectError::invalid_setting_name("empty"));
    }
    if name.len() > 128 {
        return Err(DialectError::invalid_setting_name(format!(
            "too long: {}",
            name.len()
        )));
    }
    if name.contains('"')
        || name.contains('\'')
        || name.contains('\x00')
        || name.contains(';')
        || name.contains('`')
        || name.contains('\\')
        || name.contains(char::is_whitespace)
    {
        return Err(DialectError::invalid_setting_name(format!(
            "forbidden characters in: {}",
            name
        )));
    }
    Ok(())
}

/// Applies each setting to the connection as a `SET <name> = <literal>`
/// statement, in insertion order.
///
/// There is no transaction wrapping: if statement N is rejected, statements
/// 1..N-1 have already taken effect and the error names the failed setting.
#[instrument(skip_all, fields(settings = config.len()))]
pub fn apply_config(
    dialect: &dyn Dialect,
    conn: &Connection,
    config: &SessionConfig,
) -> DialectResult<()> {
    for (name, value) in config.iter() {
        validate_setting_name(name)?;
        let literal = dialect.render_literal(value);
        if literal.is_empty() {
            return Err(DialectError::unrenderable_value(name, value.to_string()));
        }
        debug!(setting = name, literal = %literal, "applying session setting");
        conn.execute(&format!("SET {} = {}", name, literal), [])
            .map_err(|err| DialectError::execute(name, err))?;
    }
    Ok(())
}
