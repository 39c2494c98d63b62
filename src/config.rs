//! Layered configuration for the `genid` CLI.
//!
//! Values are resolved from defaults, then an optional YAML file, then
//! `GENID_*` environment variables. Command line flags are applied on top by
//! the command handlers.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Error;
use crate::generator::DEFAULT_LENGTH;

/// Environment variable overriding [`GenidConfig::length`].
pub const LENGTH_ENV: &str = "GENID_LENGTH";
/// Environment variable overriding [`GenidConfig::count`].
pub const COUNT_ENV: &str = "GENID_COUNT";
/// Environment variable overriding [`GenidConfig::add`].
pub const ADD_ENV: &str = "GENID_ADD";
/// Environment variable overriding [`GenidConfig::remove`].
pub const REMOVE_ENV: &str = "GENID_REMOVE";

/// Resolved CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenidConfig {
    /// Requested id length; clamped by the generator.
    pub length: usize,
    /// Number of ids per invocation.
    pub count: usize,
    /// Characters to allow in addition to the default alphabet.
    pub add: String,
    /// Characters to disallow.
    pub remove: String,
}

impl Default for GenidConfig {
    fn default() -> Self {
        Self { length: DEFAULT_LENGTH, count: 1, add: String::new(), remove: String::new() }
    }
}

impl GenidConfig {
    /// Loads the config file at `path` (if any) and applies the process
    /// environment on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a numeric
    /// environment variable does not hold a number.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_env(|key| std::env::var(key).ok())
    }

    /// Reads a YAML config file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid config YAML.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| Error::ConfigRead { path: path.to_path_buf(), source })?;
        let config = serde_yaml::from_str(&content)
            .map_err(|source| Error::ConfigParse { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Overrides fields from environment variables resolved by `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEnv`] if `GENID_LENGTH` or `GENID_COUNT` is not
    /// a non-negative integer.
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(LENGTH_ENV) {
            self.length = parse_count(LENGTH_ENV, &value)?;
        }
        if let Some(value) = lookup(COUNT_ENV) {
            self.count = parse_count(COUNT_ENV, &value)?;
        }
        if let Some(value) = lookup(ADD_ENV) {
            self.add = value;
        }
        if let Some(value) = lookup(REMOVE_ENV) {
            self.remove = value;
        }
        Ok(self)
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize, Error> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidEnv { key: key.to_string(), value: value.to_string() })
}
