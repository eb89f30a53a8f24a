//! Configuration types for prowlsend.
//!
//! Responsibilities:
//! - Define the on-disk TOML layout (`ConfigFile`).
//! - Define the validated runtime configuration (`Config`).
//!
//! Invariants:
//! - The API key is held in a `secrecy::SecretString` so it never shows up in `Debug` output.
//! - A `Config` always carries a non-empty API key.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::loader::ConfigError;

/// Module for deserializing optional secrets from plain strings.
mod optional_secret {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| SecretString::new(s.into())))
    }
}

/// Raw contents of the TOML configuration file.
///
/// Keys use the historical capitalized spelling (`ApiKey`); lowercase and
/// snake_case spellings are accepted too. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(
        rename = "ApiKey",
        alias = "apikey",
        alias = "api_key",
        default,
        deserialize_with = "optional_secret::deserialize"
    )]
    pub api_key: Option<SecretString>,

    #[serde(
        rename = "ProviderKey",
        alias = "providerkey",
        alias = "provider_key",
        default
    )]
    pub provider_key: Option<String>,
}

impl ConfigFile {
    /// Validate the raw file contents into a runtime [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when `ApiKey` is absent or blank.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let api_key = self
            .api_key
            .map(|key| key.expose_secret().trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let provider_key = self
            .provider_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        Ok(Config {
            api_key: SecretString::new(api_key.into()),
            provider_key,
        })
    }
}

/// Validated configuration loaded once per run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prowl API key used to authenticate pushes.
    pub api_key: SecretString,
    /// Optional Prowl provider key, forwarded with every push.
    pub provider_key: Option<String>,
}

impl Config {
    /// Build a configuration from an API key, without a provider key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let api_key: String = api_key.into();
        Self {
            api_key: SecretString::new(api_key.into()),
            provider_key: None,
        }
    }
}
