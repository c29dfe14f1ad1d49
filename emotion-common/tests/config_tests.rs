//! Unit tests for bootstrap configuration resolution
//!
//! Note: Uses serial_test crate to prevent ENV variable race conditions.
//! Tests that manipulate EMOTIONSENSE_* variables are marked with #[serial].

use emotion_common::config::{
    parse_toml_config, read_toml_config, BootstrapConfig, CompiledDefaults, TomlConfig,
    ENV_CONFIG_FILE, ENV_DATABASE_PATH, ENV_HOST, ENV_LOG_LEVEL, ENV_PORT,
};
use emotion_common::Error;
use serial_test::serial;
use std::collections::HashMap;
use std::env;
use std::io::Write;
use std::path::PathBuf;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

fn clear_env() {
    for key in [ENV_CONFIG_FILE, ENV_DATABASE_PATH, ENV_HOST, ENV_PORT, ENV_LOG_LEVEL] {
        env::remove_var(key);
    }
}

#[test]
fn test_compiled_defaults() {
    let defaults = CompiledDefaults::for_current_platform();

    assert!(defaults.database_path.ends_with("emotions.db"));
    assert_eq!(defaults.host, "127.0.0.1");
    assert_eq!(defaults.port, 8080);
    assert_eq!(defaults.log_level, "info");
}

#[test]
fn test_resolve_with_nothing_uses_defaults() {
    let config = BootstrapConfig::resolve(TomlConfig::default(), env_from(&[])).unwrap();
    let defaults = CompiledDefaults::for_current_platform();

    assert_eq!(config.database_path, defaults.database_path);
    assert_eq!(config.bind_address(), "127.0.0.1:8080");
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_toml_overrides_defaults() {
    let toml_config = parse_toml_config(
        r#"
        database_path = "/srv/emotions/records.db"
        host = "0.0.0.0"
        port = 9090

        [logging]
        level = "debug"
        "#,
    )
    .unwrap();

    let config = BootstrapConfig::resolve(toml_config, env_from(&[])).unwrap();

    assert_eq!(config.database_path, PathBuf::from("/srv/emotions/records.db"));
    assert_eq!(config.bind_address(), "0.0.0.0:9090");
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_env_overrides_toml() {
    let toml_config = parse_toml_config("port = 9090\nhost = \"0.0.0.0\"").unwrap();

    let config = BootstrapConfig::resolve(
        toml_config,
        env_from(&[(ENV_PORT, "7000"), (ENV_DATABASE_PATH, "/tmp/env.db")]),
    )
    .unwrap();

    assert_eq!(config.port, 7000);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.database_path, PathBuf::from("/tmp/env.db"));
}

#[test]
fn test_invalid_env_port_is_config_error() {
    let result = BootstrapConfig::resolve(TomlConfig::default(), env_from(&[(ENV_PORT, "eighty")]));

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_partial_toml_keeps_other_defaults() {
    let toml_config = parse_toml_config("port = 6000").unwrap();
    let config = BootstrapConfig::resolve(toml_config, env_from(&[])).unwrap();

    assert_eq!(config.port, 6000);
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_invalid_toml_is_config_error() {
    let result = parse_toml_config("port = \"not a number\"");

    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_read_missing_file_is_io_error() {
    let result = read_toml_config(&PathBuf::from("/nonexistent/emotionsense/config.toml"));

    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
#[serial]
fn test_load_reads_explicit_config_file() {
    clear_env();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = 5151\n[logging]\nlevel = \"warn\"").unwrap();
    env::set_var(ENV_CONFIG_FILE, file.path());

    let config = BootstrapConfig::load().unwrap();

    assert_eq!(config.port, 5151);
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.config_file.as_deref(), Some(file.path()));
    assert!(config.config_warning.is_none());

    clear_env();
}

#[test]
#[serial]
fn test_load_with_broken_config_file_falls_back() {
    clear_env();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "this is not toml [").unwrap();
    env::set_var(ENV_CONFIG_FILE, file.path());
    env::set_var(ENV_HOST, "localhost");

    let config = BootstrapConfig::load().expect("Broken config file must not abort startup");

    assert_eq!(config.host, "localhost");
    assert_eq!(config.port, 8080);
    assert!(config.config_file.is_none());
    assert!(config.config_warning.is_some());

    clear_env();
}
