//! Configuration file support for npm-sbom.
//!
//! Provides YAML-based configuration through `npm-sbom.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use npm_sbom::application::dto::OutputFormat;
use npm_sbom::sbom_generation::domain::ComponentType;
use npm_sbom::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "npm-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub component_type: Option<String>,
    pub include_serial_number: Option<bool>,
    pub include_license_text: Option<bool>,
    pub reproducible: Option<bool>,
    pub additional_boms: Option<Vec<PathBuf>>,
    pub bom_version: Option<u32>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, if any
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| {
                format.parse::<OutputFormat>().map_err(|e| {
                    anyhow::anyhow!("Invalid config: {}\n\n💡 Hint: Use 'json' or 'xml'.", e)
                })
            })
            .transpose()
    }

    /// The configured root component type, if any
    pub fn root_component_type(&self) -> Result<Option<ComponentType>> {
        self.component_type
            .as_deref()
            .map(|component_type| {
                component_type
                    .parse::<ComponentType>()
                    .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))
            })
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

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
    config.output_format()?;
    config.root_component_type()?;

    if config.bom_version == Some(0) {
        bail!(
            "Invalid config: bom_version must be at least 1.\n\n\
             💡 Hint: Remove the field to use the default version (1)."
        );
    }

    if let Some(ref additional_boms) = config.additional_boms {
        for (i, path) in additional_boms.iter().enumerate() {
            if path.as_os_str().is_empty() {
                bail!("Invalid config: additional_boms[{}] must not be empty.", i);
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
