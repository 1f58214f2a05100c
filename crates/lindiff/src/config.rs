//! Configuration: diff options read from a TOML file, then overridden by flags.
//! The default file lives in the platform config dir, e.g.
//! ~/.config/lindiff/config.toml on Linux.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lindiff_core::DiffOptions;
use serde::Deserialize;

use crate::args::Args;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub diff: DiffOptions,
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lindiff").join("config.toml"))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read an explicitly requested config file; any failure is an error
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Read the default config file if there is one, falling back to defaults
    pub fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            log::warn!("Cannot determine config path");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{:#}; using defaults", e);
                Self::default()
            }
        }
    }
}

/// Options for this run: config file first, command-line flags on top
pub fn resolve(args: &Args) -> Result<DiffOptions> {
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load_default(),
    };
    Ok(apply_flags(config.diff, args))
}

fn apply_flags(mut options: DiffOptions, args: &Args) -> DiffOptions {
    if let Some(context) = args.context {
        options.context = context;
    }
    options.ignore_whitespace |= args.ignore_whitespace;
    options.ignore_case |= args.ignore_case;
    options
}
