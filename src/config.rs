//! Application configuration using Figment.
//!
//! Configuration is loaded from:
//! 1. a TOML file (default `config/daq_template.toml`)
//! 2. environment variables prefixed with `DAQ_TEMPLATE_`, nested keys separated by `__`
//!
//! The file names the modules run control should host. Each module's `conf` table is
//! passed, converted to JSON, as the payload of its `conf` command.
//!
//! # Example
//! ```toml
//! [application]
//! name = "daq-template"
//! log_level = "info"
//! log_format = "compact"
//!
//! [[modules]]
//! name = "rm1"
//! type = "RenameMe"
//! [modules.conf]
//! some_configured_value = 42
//! ```

use crate::appfwk::Data;
use crate::error::{AppResult, DaqError};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "config/daq_template.toml";

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application settings
    pub application: ApplicationConfig,
    /// Modules to host, in dispatch order
    #[serde(default)]
    pub modules: Vec<ModuleDefinition>,
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    pub name: String,
    /// Logging level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log output format (pretty, compact, json)
    #[serde(default = "default_log_format")]
    pub log_format: String,
    /// Whether pretty and compact logs use ANSI colors
    #[serde(default = "default_enabled")]
    pub log_ansi: bool,
    /// Detail level passed to `get_info` when reporting telemetry
    #[serde(default)]
    pub opmon_level: i32,
}

/// One hosted module
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleDefinition {
    /// Unique instance name
    pub name: String,
    /// Registered module type (e.g. "RenameMe")
    pub r#type: String,
    /// Whether run control should create this module
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Payload for `init`
    #[serde(default)]
    pub init: Option<toml::Value>,
    /// Payload for `conf`
    #[serde(default)]
    pub conf: Option<toml::Value>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

fn default_enabled() -> bool {
    true
}

const VALID_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_FORMATS: [&str; 3] = ["pretty", "compact", "json"];

impl AppConfig {
    /// Load configuration from the default path and environment variables
    pub fn load() -> AppResult<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from a specific file path
    ///
    /// Environment variables override the file, e.g.
    /// `DAQ_TEMPLATE_APPLICATION__LOG_LEVEL=debug`.
    pub fn load_from<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        Ok(Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("DAQ_TEMPLATE_").split("__"))
            .extract()?)
    }

    /// Parse configuration from a TOML string, without environment overrides
    pub fn from_toml_str(toml: &str) -> AppResult<Self> {
        Ok(Figment::new().merge(Toml::string(toml)).extract()?)
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> AppResult<()> {
        if !VALID_LEVELS.contains(&self.application.log_level.to_lowercase().as_str()) {
            return Err(DaqError::Configuration(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.application.log_level,
                VALID_LEVELS.join(", ")
            )));
        }

        if !VALID_FORMATS.contains(&self.application.log_format.to_lowercase().as_str()) {
            return Err(DaqError::Configuration(format!(
                "Invalid log_format '{}'. Must be one of: {}",
                self.application.log_format,
                VALID_FORMATS.join(", ")
            )));
        }

        let mut names = HashSet::new();
        for module in &self.modules {
            if module.name.is_empty() {
                return Err(DaqError::Configuration(format!(
                    "Module of type '{}' has an empty name",
                    module.r#type
                )));
            }
            if !names.insert(&module.name) {
                return Err(DaqError::Configuration(format!(
                    "Duplicate module name: {}",
                    module.name
                )));
            }
        }

        Ok(())
    }

    /// Modules run control should create
    pub fn enabled_modules(&self) -> Vec<&ModuleDefinition> {
        self.modules.iter().filter(|m| m.enabled).collect()
    }
}

impl ModuleDefinition {
    /// `init` payload as JSON (`null` when absent)
    pub fn init_payload(&self) -> AppResult<Data> {
        Ok(serde_json::to_value(&self.init)?)
    }

    /// `conf` payload as JSON (`null` when absent)
    pub fn conf_payload(&self) -> AppResult<Data> {
        Ok(serde_json::to_value(&self.conf)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [application]
        name = "test"

        [[modules]]
        name = "rm1"
        type = "RenameMe"
        [modules.conf]
        some_configured_value = 42

        [[modules]]
        name = "rm2"
        type = "RenameMe"
        enabled = false
    "#;

    #[test]
    fn parses_modules_with_defaults() {
        let config = AppConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.application.opmon_level, 0);
        assert_eq!(config.application.log_format, "compact");
        assert!(config.application.log_ansi);
        assert_eq!(config.modules.len(), 2);
        assert!(config.validate().is_ok());

        let enabled = config.enabled_modules();
        assert_eq!(enabled.len(), 1);
        assert_eq!(enabled[0].name, "rm1");
    }

    #[test]
    fn conf_table_becomes_json_payload() {
        let config = AppConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(
            config.modules[0].conf_payload().unwrap(),
            serde_json::json!({ "some_configured_value": 42 })
        );
        assert_eq!(config.modules[1].conf_payload().unwrap(), Data::Null);
        assert_eq!(config.modules[0].init_payload().unwrap(), Data::Null);
    }

    #[test]
    fn rejects_invalid_log_level() {
        let mut config = AppConfig::from_toml_str(SAMPLE).unwrap();
        config.application.log_level = "loud".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid log_level 'loud'"));
    }

    #[test]
    fn rejects_invalid_log_format() {
        let mut config = AppConfig::from_toml_str(SAMPLE).unwrap();
        config.application.log_format = "xml".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid log_format 'xml'"));
    }

    #[test]
    fn rejects_duplicate_module_names() {
        let mut config = AppConfig::from_toml_str(SAMPLE).unwrap();
        config.modules[1].name = "rm1".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Duplicate module name: rm1"));
    }

    #[test]
    fn missing_application_section_fails() {
        let result = AppConfig::from_toml_str("modules = []");
        assert!(matches!(result, Err(DaqError::Config(_))));
    }
}
