// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file types and the settings they resolve to.

use std::path::{Path, PathBuf};

use ansi_swatch_core::{EscapePrefix, PatternSet};
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, OutputFormat};

/// Default badge drawn before each colored sequence by `decorate`.
pub const DEFAULT_MARKER: &str = "●";

fn default_prefixes() -> Vec<EscapePrefix> {
    EscapePrefix::ALL.to_vec()
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_show_unresolved() -> bool {
    true
}

/// Errors that can occur when loading a config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Contents of a config file
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SwatchConfig {
    /// Escape prefixes to recognize
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<EscapePrefix>,

    #[serde(default)]
    pub format: OutputFormat,

    /// Badge glyph for `decorate`
    #[serde(default = "default_marker")]
    pub marker: String,

    /// List sequences that resolve to no color in `scan` output
    #[serde(default = "default_show_unresolved")]
    pub show_unresolved: bool,
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            prefixes: default_prefixes(),
            format: OutputFormat::default(),
            marker: default_marker(),
            show_unresolved: default_show_unresolved(),
        }
    }
}

impl SwatchConfig {
    /// Load from a file; `.json` files are JSON, everything else is TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: SwatchConfig = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefixes.is_empty() {
            return Err(ConfigError::Validation(
                "prefixes must list at least one of octal, hex, short, literal".to_string(),
            ));
        }
        if self.marker.trim().is_empty() {
            return Err(ConfigError::Validation(
                "marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Effective settings for one invocation.
///
/// Precedence is command-line flag, then config file, then default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub prefixes: Vec<EscapePrefix>,
    pub format: OutputFormat,
    pub marker: String,
    pub show_unresolved: bool,
    pub verbose: bool,
    /// Config file that was read, if any
    pub source: Option<PathBuf>,
}

impl Settings {
    /// Resolve settings from parsed arguments, reading the config file named by
    /// `--config` or `ANSI_SWATCH_CONFIG`.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let path = cli.config.clone().or_else(crate::env::config_path);
        let verbose = cli.verbose || crate::env::debug_enabled();
        Self::resolve(cli, path, verbose)
    }

    pub fn resolve(cli: &Cli, path: Option<PathBuf>, verbose: bool) -> Result<Self, ConfigError> {
        let config = match &path {
            Some(path) => SwatchConfig::load(path)?,
            None => SwatchConfig::default(),
        };

        let mut prefixes = if cli.prefixes.is_empty() {
            config.prefixes
        } else {
            cli.prefixes.clone()
        };
        prefixes.sort();
        prefixes.dedup();

        Ok(Self {
            prefixes,
            format: cli.format.unwrap_or(config.format),
            marker: config.marker,
            show_unresolved: config.show_unresolved,
            verbose,
            source: path,
        })
    }

    pub fn patterns(&self) -> PatternSet {
        PatternSet::new(&self.prefixes)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
