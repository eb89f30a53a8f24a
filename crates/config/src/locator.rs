//! Candidate locations for the configuration file.
//!
//! Responsibilities:
//! - Compute the ordered list of paths where the configuration file may live.
//! - Follow platform conventions (`APPDATA`/`LOCALAPPDATA` on Windows,
//!   `XDG_CONFIG_DIRS` with a `~/.config` fallback elsewhere).
//!
//! Does NOT handle:
//! - File I/O or existence checks (see `loader`).
//!
//! Invariants:
//! - Earliest-checked candidate comes first.
//! - Unset or empty environment variables never produce a candidate.

use std::path::{Path, PathBuf};

use crate::constants::XDG_DIRS_SEPARATOR;

/// Platform family that decides which search policy applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Returns the candidate configuration file paths for the running process.
///
/// Reads the real process environment and resolves the home directory with
/// the `directories` crate.
pub fn config_file_locations(subpath: &str) -> Vec<PathBuf> {
    let home = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
    locations_for(
        Platform::current(),
        |key| std::env::var(key).ok(),
        home.as_deref(),
        subpath,
    )
}

/// Computes candidate paths from explicit inputs.
///
/// `lookup_env` returns the value of an environment variable, or `None` when
/// it is unset. `home` is only consulted on Unix when `XDG_CONFIG_DIRS`
/// yields nothing.
pub fn locations_for<F>(
    platform: Platform,
    lookup_env: F,
    home: Option<&Path>,
    subpath: &str,
) -> Vec<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup_env(key).filter(|value| !value.is_empty());

    match platform {
        Platform::Windows => ["APPDATA", "LOCALAPPDATA"]
            .into_iter()
            .filter_map(non_empty)
            .map(|dir| Path::new(&dir).join(subpath))
            .collect(),
        Platform::Unix => {
            let mut locations: Vec<PathBuf> = non_empty("XDG_CONFIG_DIRS")
                .map(|dirs| {
                    dirs.split(XDG_DIRS_SEPARATOR)
                        .filter(|dir| !dir.is_empty())
                        .map(|dir| Path::new(dir).join(subpath))
                        .collect()
                })
                .unwrap_or_default();

            if locations.is_empty()
                && let Some(home) = home.filter(|h| !h.as_os_str().is_empty())
            {
                locations.push(home.join(".config").join(subpath));
            }
            locations
        }
    }
}
