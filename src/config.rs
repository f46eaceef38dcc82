//! Configuration file support for pkg-depgraph.
//!
//! Provides YAML-based configuration through `pkg-depgraph.config.yml` files,
//! the file loading and validation, and the merge of file values with
//! command-line flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::pkg::DEFAULT_PKG_PATH;
use crate::application::dto::OutputMode;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pkg-depgraph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub pkg_path: Option<PathBuf>,
    pub mode: Option<String>,
    pub raw: Option<bool>,
    pub verbose: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `mode`, if one is set
    pub fn output_mode(&self) -> Result<Option<OutputMode>> {
        self.mode
            .as_deref()
            .map(|mode| {
                mode.parse::<OutputMode>().map_err(|e| {
                    anyhow::anyhow!("Invalid config: {}\n\n💡 Hint: Use `mode: graph` or `mode: roots`.", e)
                })
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

    // An empty file deserializes to YAML null, which means "no settings"
    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

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
    if let Some(ref pkg_path) = config.pkg_path {
        if pkg_path.as_os_str().is_empty() {
            bail!(
                "Invalid config: pkg_path must not be empty.\n\n\
                 💡 Hint: Remove the key to use {} or give the full path to pkg.",
                DEFAULT_PKG_PATH
            );
        }
    }
    config.output_mode()?;
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Command-line values that take precedence over the config file.
///
/// Boolean switches only override when set; an unset switch defers to the
/// config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub pkg_path: Option<PathBuf>,
    pub roots: bool,
    pub raw: bool,
    pub verbose: bool,
    pub output: Option<PathBuf>,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pkg_path: PathBuf,
    pub mode: OutputMode,
    pub normalize: bool,
    pub verbose: bool,
    pub output: Option<PathBuf>,
}

impl Settings {
    /// Merges CLI flags over the config file over built-in defaults.
    pub fn resolve(cli: CliOverrides, config: Option<&ConfigFile>) -> Result<Self> {
        let config_mode = match config {
            Some(config) => config.output_mode()?,
            None => None,
        };

        let mode = if cli.roots {
            OutputMode::Roots
        } else {
            config_mode.unwrap_or_default()
        };

        let pkg_path = cli
            .pkg_path
            .or_else(|| config.and_then(|c| c.pkg_path.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PKG_PATH));

        let raw = cli.raw || config.and_then(|c| c.raw).unwrap_or(false);
        let verbose = cli.verbose || config.and_then(|c| c.verbose).unwrap_or(false);

        Ok(Self {
            pkg_path,
            mode,
            normalize: !raw,
            verbose,
            output: cli.output,
        })
    }
}
