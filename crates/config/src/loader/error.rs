//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//!
//! Invariants:
//! - Path-related variants carry the offending path for debugging.
//! - Errors never include the API key value.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No candidate path points at a regular file.
    #[error("{:?} not found", path.display().to_string())]
    NotFound { path: PathBuf },

    /// The platform yields no candidate location at all.
    #[error("Configuration path must be given with `-c` option")]
    NoCandidates,

    #[error("Failed to read config file at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("API key not found in configuration file")]
    MissingApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_quotes_path() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/etc/xdg/prowl/prowl.toml"),
        };
        assert_eq!(err.to_string(), "\"/etc/xdg/prowl/prowl.toml\" not found");
    }

    #[test]
    fn test_no_candidates_mentions_flag() {
        assert!(ConfigError::NoCandidates.to_string().contains("-c"));
    }
}
