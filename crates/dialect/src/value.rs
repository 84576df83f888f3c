//! Typed session-setting values and conversions from loosely typed input

use std::fmt;

use serde_json::Value;

use crate::error::{DialectError, DialectResult};

/// A session-setting value, restricted to the primitives the engine accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Integer setting (e.g. `threads`)
    Int(i64),
    /// String setting (e.g. `memory_limit`)
    Str(String),
    /// Boolean setting (e.g. `enable_progress_bar`)
    Bool(bool),
}

impl SettingValue {
    /// Human-readable name of the value's type, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SettingValue::Int(_) => "integer",
            SettingValue::Str(_) => "string",
            SettingValue::Bool(_) => "boolean",
        }
    }

    /// Converts a JSON value for the named setting.
    ///
    /// Integers, strings, and booleans convert; floats, nulls, arrays, and
    /// objects are rejected with [`DialectError::UnsupportedValue`].
    pub fn from_json(setting: &str, value: &Value) -> DialectResult<Self> {
        match value {
            Value::Bool(v) => Ok(SettingValue::Bool(*v)),
            Value::String(v) => Ok(SettingValue::Str(v.clone())),
            Value::Number(v) => match v.as_i64() {
                Some(n) => Ok(SettingValue::Int(n)),
                None => Err(DialectError::unsupported_value(setting, v.to_string())),
            },
            other => Err(DialectError::unsupported_value(setting, other.to_string())),
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Int(v) => write!(f, "{}", v),
            SettingValue::Str(v) => write!(f, "{}", v),
            SettingValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        SettingValue::Int(value as i64)
    }
}

impl From<u32> for SettingValue {
    fn from(value: u32) -> Self {
        SettingValue::Int(value as i64)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Str(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Str(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}
