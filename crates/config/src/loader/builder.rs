//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that resolves and reads the config file.
//! - Select the first existing regular file among the candidates.
//! - Decode TOML into `Config` and validate the API key.
//!
//! Does NOT handle:
//! - Candidate path computation (delegated to `locator.rs`).
//! - Telling the user about a too-permissive file (the CLI prints that).
//!
//! Invariants / Assumptions:
//! - Blank or whitespace-only override paths are ignored.
//! - Candidates are checked in order; the first regular file wins.

use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::constants::CONFIG_SUBPATH;
use crate::locator::config_file_locations;
use crate::permissions::{is_too_permissive, mode_of};
use crate::types::{Config, ConfigFile};

/// A configuration file selected by [`ConfigLoader::find_config_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedConfig {
    /// Path of the selected file.
    pub path: PathBuf,
    /// Permission bits of the file, when the platform has them.
    pub mode: Option<u32>,
    /// Whether the mode intersects the permission warning mask.
    pub too_permissive: bool,
}

/// Configuration loader that finds and reads the Prowl configuration file.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a new configuration loader using the default sub-path.
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Use an explicit configuration file instead of searching.
    ///
    /// Blank paths are ignored so an empty `-c ""` falls back to the search.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        if !path.to_string_lossy().trim().is_empty() {
            self.config_path = Some(path);
        }
        self
    }

    /// Candidate paths in the order they are checked.
    pub fn candidates(&self) -> Vec<PathBuf> {
        match &self.config_path {
            Some(path) => vec![path.clone()],
            None => config_file_locations(CONFIG_SUBPATH),
        }
    }

    /// Find the first candidate that exists and is a regular file.
    ///
    /// A file whose mode intersects the permission mask is still returned,
    /// with [`LocatedConfig::too_permissive`] set; warning the user is up to
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] naming the first candidate when none
    /// exists, or [`ConfigError::NoCandidates`] when there is nothing to check.
    pub fn find_config_file(&self) -> Result<LocatedConfig, ConfigError> {
        let candidates = self.candidates();
        tracing::debug!(?candidates, "Searching for configuration file");
        find_first_regular_file(&candidates)
    }
}

pub(crate) fn find_first_regular_file(
    candidates: &[PathBuf],
) -> Result<LocatedConfig, ConfigError> {
    for path in candidates {
        let metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Config candidate not usable");
                continue;
            }
        };

        if !metadata.is_file() {
            tracing::debug!(path = %path.display(), "Config candidate is not a regular file");
            continue;
        }

        let mode = mode_of(&metadata);
        let too_permissive = mode.is_some_and(is_too_permissive);
        if too_permissive {
            tracing::debug!(
                mode = format_args!("{:04o}", mode.unwrap_or_default()),
                "file permissions for {:?} are too large",
                path.display().to_string()
            );
        }

        return Ok(LocatedConfig {
            path: path.clone(),
            mode,
            too_permissive,
        });
    }

    match candidates.first() {
        Some(first) => Err(ConfigError::NotFound {
            path: first.clone(),
        }),
        None => Err(ConfigError::NoCandidates),
    }
}

/// Read and decode the configuration file at `path`.
///
/// # Errors
///
/// - [`ConfigError::Read`] when the file cannot be read.
/// - [`ConfigError::Decode`] when the file is not valid TOML.
/// - [`ConfigError::MissingApiKey`] when `ApiKey` is absent or blank.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let file: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    file.into_config()
}
