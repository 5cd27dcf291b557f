//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. User config (~/.nec/config.yaml, or an explicit file)
//! 3. Environment variables (NEC_* prefix)
//! 4. CLI flags (handled by caller)

use crate::error::{Error, Result};
use crate::types::RuntimeConfig;
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde_yaml_ng::Value;
use std::env;
use std::fs;
use tracing::debug;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

const DEFAULTS_FILE: &str = "runtime-defaults.yaml";
const USER_CONFIG_FILE: &str = "config.yaml";

/// Configuration hierarchy loader
pub struct HierarchicalConfigLoader {
    /// Base directory for configuration files
    config_dir: Utf8PathBuf,
    /// Explicit config file; must exist when set
    config_file: Option<Utf8PathBuf>,
}

impl HierarchicalConfigLoader {
    /// Create a loader rooted at ~/.nec
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self {
            config_dir,
            config_file: None,
        })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self {
            config_dir,
            config_file: None,
        }
    }

    /// Use an explicit config file instead of `<config_dir>/config.yaml`
    pub fn with_file(mut self, path: Utf8PathBuf) -> Self {
        self.config_file = Some(path);
        self
    }

    /// Get the standard config directory (~/.nec)
    fn get_config_dir() -> Result<Utf8PathBuf> {
        let home = crate::utils::get_home_dir()?;
        let home = Utf8PathBuf::from_path_buf(home)
            .map_err(|p| Error::invalid_config(format!("Home directory is not UTF-8: {}", p.display())))?;
        Ok(home.join(".nec"))
    }

    /// Load runtime configuration with hierarchical precedence
    pub fn load_runtime_config(&self) -> Result<RuntimeConfig> {
        let mut merged = Self::load_embedded_value(DEFAULTS_FILE)?;

        match &self.config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config_not_found(path.as_str()));
                }
                merge_values(&mut merged, self.load_yaml_value(path)?);
            }
            None => {
                let path = self.config_dir.join(USER_CONFIG_FILE);
                if path.exists() {
                    merge_values(&mut merged, self.load_yaml_value(&path)?);
                } else {
                    debug!("No user config at {}", path);
                }
            }
        }

        let config: RuntimeConfig = serde_yaml_ng::from_value(merged)
            .map_err(|e| Error::invalid_config(format!("Failed to apply configuration: {}", e)))?;

        self.apply_env_overrides(config)
    }

    /// Load an embedded configuration file as a raw YAML value
    fn load_embedded_value(filename: &str) -> Result<Value> {
        let embedded_file = EmbeddedConfigs::get(filename).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", filename))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", filename))
        })?;

        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                filename, e
            ))
        })
    }

    /// Load a YAML file without binding it to a type yet
    fn load_yaml_value(&self, path: &Utf8Path) -> Result<Value> {
        debug!("Loading config file: {}", path);
        let content = fs::read_to_string(path)?;
        let value: Value = serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))?;
        // An empty file parses as null and means "no overrides"
        if value.is_null() {
            return Ok(Value::Mapping(Default::default()));
        }
        Ok(value)
    }

    /// Apply environment variable overrides to runtime config
    fn apply_env_overrides(&self, mut config: RuntimeConfig) -> Result<RuntimeConfig> {
        if let Ok(val) = env::var("NEC_GIT_DEFAULT_BRANCH") {
            if val.trim().is_empty() {
                return Err(Error::invalid_config(
                    "NEC_GIT_DEFAULT_BRANCH must not be empty",
                ));
            }
            config.git.default_branch = val;
        }

        if let Ok(val) = env::var("NEC_BANNER") {
            config.display.banner = parse_bool("NEC_BANNER", &val)?;
        }

        if let Ok(val) = env::var("NEC_BANNER_DURATION_MS") {
            config.display.banner_duration_ms = val.parse().map_err(|_| {
                Error::invalid_config("NEC_BANNER_DURATION_MS must be a valid number")
            })?;
        }

        if let Ok(val) = env::var("NEC_EXIT_DELAY_MS") {
            config.exit.delay_ms = val
                .parse()
                .map_err(|_| Error::invalid_config("NEC_EXIT_DELAY_MS must be a valid number"))?;
        }

        if let Ok(val) = env::var("NEC_NO_COLOR") {
            config.display.color_enabled = !parse_bool("NEC_NO_COLOR", &val)?;
        }

        Ok(config)
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}

fn parse_bool(name: &str, val: &str) -> Result<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(Error::invalid_config(format!("{} must be a boolean", name))),
    }
}

/// Recursively overlay `overlay` onto `base`; mappings merge, everything else replaces
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
