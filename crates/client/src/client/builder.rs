//! Client builder for constructing [`ProwlClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating and normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects, user agent)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`ProwlClient`] methods in `mod.rs`)
//! - API key registration (handled by the [`crate::Notifier`] impl)
//!
//! # Invariants
//! - The base URL is always normalized to have no trailing slashes
//! - Only `http` and `https` base URLs are accepted

use std::time::Duration;

use crate::client::ProwlClient;
use crate::error::{ClientError, Result};
use prowl_config::Config;
use prowl_config::constants::{DEFAULT_API_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS};

/// Builder for creating a new [`ProwlClient`].
///
/// # Example
///
/// ```rust,ignore
/// use prowl_client::{Notifier, ProwlClient};
///
/// let mut client = ProwlClient::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// client.register_key(&config.api_key)?;
/// ```
pub struct ProwlClientBuilder {
    base_url: String,
    timeout: Duration,
    provider_key: Option<String>,
}

impl Default for ProwlClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            provider_key: None,
        }
    }
}

impl ProwlClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Prowl API.
    ///
    /// Defaults to `https://api.prowlapp.com`. Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the provider key sent with every notification.
    pub fn provider_key(mut self, key: Option<String>) -> Self {
        self.provider_key = key.filter(|k| !k.trim().is_empty());
        self
    }

    /// Apply settings from the loaded configuration.
    ///
    /// The API key itself is not taken from here; it is registered through
    /// [`crate::Notifier::register_key`].
    pub fn from_config(self, config: &Config) -> Self {
        self.provider_key(config.provider_key.clone())
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://api.prowlapp.com/"` -> `"https://api.prowlapp.com"`
    /// - `"https://api.prowlapp.com"` -> `"https://api.prowlapp.com"`
    fn normalize_base_url(url: &str) -> String {
        url.trim().trim_end_matches('/').to_string()
    }

    /// Build the [`ProwlClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the base URL does not parse or
    /// is not http(s). Returns `ClientError::HttpError` if the HTTP client
    /// fails to build.
    pub fn build(self) -> Result<ProwlClient> {
        let base_url = Self::normalize_base_url(&self.base_url);
        let parsed = url::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "{base_url}: unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .user_agent(concat!("prowlsend/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(ProwlClient {
            http,
            base_url,
            api_keys: Vec::new(),
            provider_key: self.provider_key,
        })
    }
}
