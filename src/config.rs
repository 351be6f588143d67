//! Configuration file support for the plainfs CLI.
//!
//! Provides YAML-based configuration through `plainfs.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line flags. The library itself reads no configuration.

use anyhow::{bail, Context};
use plainfs::prelude::{BufferSize, DEFAULT_BUFFER_SIZE};
use plainfs::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "plainfs.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub buffer_size: Option<usize>,
    pub color: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty document deserializes as unit, not as an empty mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.buffer_size == Some(0) {
        bail!(
            "Invalid config: buffer_size must be at least 1.\n\n\
             💡 Hint: Remove the field to use the default of {} bytes.",
            DEFAULT_BUFFER_SIZE
        );
    }
    Ok(())
}

/// Warning messages for fields the schema does not know, sorted by name.
pub fn unknown_field_warnings(config: &ConfigFile) -> Vec<String> {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    keys.into_iter()
        .map(|key| format!("Unknown config field '{}' will be ignored.", key))
        .collect()
}

/// Effective settings after merging CLI flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Raw value; validated by the read operation so that 0 is reported there
    pub buffer_size: usize,
    pub color: bool,
}

impl Settings {
    pub fn resolve(
        config: Option<&ConfigFile>,
        cli_buffer_size: Option<usize>,
        no_color: bool,
    ) -> Self {
        let buffer_size = cli_buffer_size
            .or_else(|| config.and_then(|c| c.buffer_size))
            .unwrap_or_else(|| BufferSize::default().get());
        let color = !no_color && config.and_then(|c| c.color).unwrap_or(true);
        Self { buffer_size, color }
    }
}
