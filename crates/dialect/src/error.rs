//! Error types for dialect and session-configuration operations

use thiserror::Error;

/// Result type for dialect operations
pub type DialectResult<T> = Result<T, DialectError>;

/// Errors that can occur while rendering or applying session settings
#[derive(Error, Debug)]
pub enum DialectError {
    /// Option value type outside the supported set (int, string, bool)
    #[error("cannot configure '{setting}' with unsupported value {value}")]
    UnsupportedValue {
        /// Name of the offending setting
        setting: String,
        /// Rendering of the rejected value
        value: String,
    },

    /// The dialect produced no literal text for a value
    #[error("cannot configure '{setting}': no literal produced for {value}")]
    UnrenderableValue {
        /// Name of the offending setting
        setting: String,
        /// Rendering of the value that yielded an empty literal
        value: String,
    },

    /// Setting name is not a legal SQL identifier
    #[error("invalid setting name: {0}")]
    InvalidSettingName(String),

    /// Settings metadata query failed
    #[error("settings discovery failed: {0}")]
    Discovery(String),

    /// The engine rejected a SET statement
    #[error("failed to apply setting '{setting}': {source}")]
    Execute {
        /// Name of the setting whose statement was rejected
        setting: String,
        /// Underlying engine error
        source: duckdb::Error,
    },

    /// DuckDB connection error wrapped
    #[error("DuckDB connection error: {0}")]
    Connection(#[from] duckdb::Error),
}

impl DialectError {
    /// Create an unsupported value error
    pub fn unsupported_value(setting: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            setting: setting.into(),
            value: value.into(),
        }
    }

    /// Create an unrenderable value error
    pub fn unrenderable_value(setting: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnrenderableValue {
            setting: setting.into(),
            value: value.into(),
        }
    }

    /// Create an invalid setting name error
    pub fn invalid_setting_name(message: impl Into<String>) -> Self {
        Self::InvalidSettingName(message.into())
    }

    /// Create a discovery error
    pub fn discovery(message: impl Into<String>) -> Self {
        Self::Discovery(message.into())
    }

    /// Create an execute error for a named setting
    pub fn execute(setting: impl Into<String>, source: duckdb::Error) -> Self {
        Self::Execute {
            setting: setting.into(),
            source,
        }
    }
}
