//! Dialect-specific SQL literal and identifier rendering

use crate::value::SettingValue;

/// Literal-rendering rules for a SQL dialect.
///
/// Default methods implement the quoting conventions shared by DuckDB and
/// Postgres; dialects with different rules override the relevant method.
pub trait Dialect: Send + Sync {
    /// Render an integer literal (unquoted decimal).
    fn int_literal(&self, value: i64) -> String {
        value.to_string()
    }

    /// Render a string literal, doubling embedded single quotes.
    fn string_literal(&self, value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    /// Render a boolean literal.
    fn bool_literal(&self, value: bool) -> String {
        if value {
            "TRUE".to_string()
        } else {
            "FALSE".to_string()
        }
    }

    /// Quote an identifier, doubling embedded double quotes.
    fn quote_identifier(&self, name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }

    /// Render a typed setting value as a SQL literal.
    fn render_literal(&self, value: &SettingValue) -> String {
        match value {
            SettingValue::Int(v) => self.int_literal(*v),
            SettingValue::Str(v) => self.string_literal(v),
            SettingValue::Bool(v) => self.bool_literal(*v),
        }
    }
}

/// DuckDB literal-rendering rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuckdbDialect;

impl Dialect for DuckdbDialect {}
