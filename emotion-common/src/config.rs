//! Bootstrap configuration
//!
//! Resolved once at startup, priority order:
//! 1. Environment variables (`EMOTIONSENSE_*`)
//! 2. TOML configuration file
//! 3. Compiled defaults
//!
//! A missing or broken TOML file never stops startup; the problem is
//! recorded on the resolved config so it can be logged once tracing is up.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Explicit path to the TOML config file
pub const ENV_CONFIG_FILE: &str = "EMOTIONSENSE_CONFIG";
pub const ENV_DATABASE_PATH: &str = "EMOTIONSENSE_DATABASE_PATH";
pub const ENV_HOST: &str = "EMOTIONSENSE_HOST";
pub const ENV_PORT: &str = "EMOTIONSENSE_PORT";
pub const ENV_LOG_LEVEL: &str = "EMOTIONSENSE_LOG_LEVEL";

/// Contents of the TOML config file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    /// Path to SQLite database file
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// HTTP bind host
    #[serde(default)]
    pub host: Option<String>,

    /// HTTP bind port
    #[serde(default)]
    pub port: Option<u16>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default)]
    pub level: Option<String>,
}

/// Values used when neither environment nor TOML provide a setting
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        let database_path = dirs::data_local_dir()
            .map(|d| d.join("emotionsense"))
            .unwrap_or_else(|| PathBuf::from("./emotionsense_data"))
            .join("emotions.db");

        Self {
            database_path,
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
        }
    }
}

/// Fully resolved startup configuration
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// TOML file that was read, if any
    pub config_file: Option<PathBuf>,
    /// Why the TOML file was skipped, if it was found but unusable
    pub config_warning: Option<String>,
}

impl BootstrapConfig {
    /// Resolve configuration from the process environment and config file
    pub fn load() -> Result<Self> {
        let env = |key: &str| std::env::var(key).ok();

        let mut config_file = None;
        let mut config_warning = None;
        let toml_config = match config_file_path(env(ENV_CONFIG_FILE)) {
            Some(path) => match read_toml_config(&path) {
                Ok(parsed) => {
                    config_file = Some(path);
                    parsed
                }
                Err(e) => {
                    config_warning = Some(format!("Ignoring {}: {}", path.display(), e));
                    TomlConfig::default()
                }
            },
            None => TomlConfig::default(),
        };

        let mut config = Self::resolve(toml_config, env)?;
        config.config_file = config_file;
        config.config_warning = config_warning;
        Ok(config)
    }

    /// Merge environment lookups over TOML values over compiled defaults
    pub fn resolve(toml_config: TomlConfig, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = CompiledDefaults::for_current_platform();

        let port = match env(ENV_PORT) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| Error::Config(format!("Invalid {} '{}': {}", ENV_PORT, raw, e)))?,
            None => toml_config.port.unwrap_or(defaults.port),
        };

        Ok(Self {
            database_path: env(ENV_DATABASE_PATH)
                .map(PathBuf::from)
                .or(toml_config.database_path)
                .unwrap_or(defaults.database_path),
            host: env(ENV_HOST).or(toml_config.host).unwrap_or(defaults.host),
            port,
            log_level: env(ENV_LOG_LEVEL)
                .or(toml_config.logging.level)
                .unwrap_or(defaults.log_level),
            config_file: None,
            config_warning: None,
        })
    }

    /// `host:port` for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Locate the TOML config file
///
/// An explicit path is returned as-is (so a typo surfaces as a warning);
/// otherwise `<config_dir>/emotionsense/config.toml` is used when it exists.
pub fn config_file_path(explicit: Option<String>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }

    dirs::config_dir()
        .map(|d| d.join("emotionsense").join("config.toml"))
        .filter(|path| path.exists())
}

/// Read and parse a TOML config file
pub fn read_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_toml_config(&content)
}

/// Parse TOML config text
pub fn parse_toml_config(content: &str) -> Result<TomlConfig> {
    toml::from_str(content).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
}
