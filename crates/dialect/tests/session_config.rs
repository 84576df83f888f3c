use duckdb::Connection;
use duckdb_dialect::{
    apply_config, core_settings, is_core_setting, Dialect, DialectError, DuckdbDialect,
    SessionConfig, SettingValue,
};
use serde_json::json;
use tempfile::tempdir;

#[test]
fn applies_integer_setting() -> Result<(), Box<dyn std::error::Error>> {
    let conn = Connection::open_in_memory()?;
    let mut config = SessionConfig::new();
    config.set("threads", 4);

    apply_config(&DuckdbDialect, &conn, &config)?;

    let threads: i64 = conn.query_row("SELECT current_setting('threads')", [], |row| row.get(0))?;
    assert_eq!(threads, 4);
    Ok(())
}

#[test]
fn applies_string_setting_with_quoting() -> Result<(), Box<dyn std::error::Error>> {
    let conn = Connection::open_in_memory()?;
    let mut config = SessionConfig::new();
    config.set("temp_directory", "quack's tmp");

    apply_config(&DuckdbDialect, &conn, &config)?;

    let dir: String = conn.query_row("SELECT current_setting('temp_directory')", [], |row| {
        row.get(0)
    })?;
    assert_eq!(dir, "quack's tmp");
    Ok(())
}

#[test]
fn applies_boolean_setting() -> Result<(), Box<dyn std::error::Error>> {
    let conn = Connection::open_in_memory()?;
    let mut config = SessionConfig::new();
    config.set("enable_progress_bar", true);

    apply_config(&DuckdbDialect, &conn, &config)?;

    let enabled: bool = conn.query_row(
        "SELECT current_setting('enable_progress_bar')",
        [],
        |row| row.get(0),
    )?;
    assert!(enabled);
    Ok(())
}

#[test]
fn accepts_memory_limit_shorthand() -> Result<(), Box<dyn std::error::Error>> {
    // memory_limit readback is normalized by the engine, so only assert that
    // the quoted literal form is accepted.
    let conn = Connection::open_in_memory()?;
    let mut config = SessionConfig::new();
    config.set("memory_limit", "1GB");

    apply_config(&DuckdbDialect, &conn, &config)?;
    Ok(())
}

#[test]
fn empty_config_is_a_no_op() -> Result<(), Box<dyn std::error::Error>> {
    let conn = Connection::open_in_memory()?;
    apply_config(&DuckdbDialect, &conn, &SessionConfig::new())?;
    Ok(())
}

#[test]
fn rejected_setting_keeps_earlier_ones_applied() -> Result<(), Box<dyn std::error::Error>> {
    let conn = Connection::open_in_memory()?;
    let mut config = SessionConfig::new();
    config.set("threads", 2);
    config.set("no_such_setting_exists", "x");

    let err = apply_config(&DuckdbDialect, &conn, &config).unwrap_err();
    match err {
        DialectError::Execute { setting, .. } => assert_eq!(setting, "no_such_setting_exists"),
        other => panic!("Expected Execute error, got {}", other),
    }

    // No transaction wrapping: the first setting already took effect.
    let threads: i64 = conn.query_row("SELECT current_setting('threads')", [], |row| row.get(0))?;
    assert_eq!(threads, 2);
    Ok(())
}

#[test]
fn invalid_setting_name_fails_before_execution() -> Result<(), Box<dyn std::error::Error>> {
    let conn = Connection::open_in_memory()?;
    let mut config = SessionConfig::new();
    config.set("threads; DROP TABLE users", 1);

    let err = apply_config(&DuckdbDialect, &conn, &config).unwrap_err();
    assert!(matches!(err, DialectError::InvalidSettingName(_)));
    Ok(())
}

#[test]
fn empty_literal_from_dialect_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    struct SilentDialect;
    impl Dialect for SilentDialect {
        fn string_literal(&self, _value: &str) -> String {
            String::new()
        }
    }

    let conn = Connection::open_in_memory()?;
    let mut config = SessionConfig::new();
    config.set("temp_directory", "tmp");

    let err = apply_config(&SilentDialect, &conn, &config).unwrap_err();
    match err {
        DialectError::UnrenderableValue { setting, .. } => assert_eq!(setting, "temp_directory"),
        other => panic!("Expected UnrenderableValue error, got {}", other),
    }
    Ok(())
}

#[test]
fn json_options_apply_in_object_order() -> Result<(), Box<dyn std::error::Error>> {
    let object = json!({"threads": 2, "enable_progress_bar": false})
        .as_object()
        .cloned()
        .unwrap();
    let config = SessionConfig::from_json_object(&object)?;
    assert_eq!(config.get("threads"), Some(&SettingValue::Int(2)));

    let conn = Connection::open_in_memory()?;
    apply_config(&DuckdbDialect, &conn, &config)?;

    let enabled: bool = conn.query_row(
        "SELECT current_setting('enable_progress_bar')",
        [],
        |row| row.get(0),
    )?;
    assert!(!enabled);
    Ok(())
}

#[test]
fn applies_to_file_backed_database() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let db_path = dir.path().join("session.duckdb");
    let conn = Connection::open(&db_path)?;

    let mut config = SessionConfig::new();
    config.set("threads", 2);
    apply_config(&DuckdbDialect, &conn, &config)?;

    let threads: i64 = conn.query_row("SELECT current_setting('threads')", [], |row| row.get(0))?;
    assert_eq!(threads, 2);
    Ok(())
}

#[test]
fn discovery_includes_engine_and_motherduck_settings() -> Result<(), Box<dyn std::error::Error>> {
    let settings = core_settings()?;
    assert!(settings.contains("motherduck_token"));
    assert!(settings.contains("attach_mode"));
    assert!(settings.contains("saas_mode"));
    assert!(settings.contains("threads"));
    assert!(settings.contains("memory_limit"));

    assert!(is_core_setting("motherduck_token")?);
    assert!(!is_core_setting("definitely_not_a_setting")?);
    Ok(())
}

#[test]
fn discovery_is_memoized() -> Result<(), Box<dyn std::error::Error>> {
    let first = core_settings()?;
    let second = core_settings()?;
    assert!(std::ptr::eq(first, second));
    Ok(())
}
