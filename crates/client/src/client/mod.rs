//! Prowl API client.
//!
//! This module provides [`ProwlClient`], the HTTP-backed [`Notifier`].
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Reading the API key from disk (see the `prowl-config` crate)
//!
//! # Invariants
//! - Keys are validated locally when registered; invalid keys are never sent
//! - Several registered keys are sent comma-separated, which Prowl fans out
//! - A push performs at most one HTTP request

pub mod builder;

use secrecy::{ExposeSecret, SecretString};

use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{Notification, ProwlSuccess};
use crate::notifier::Notifier;
use prowl_config::constants::API_KEY_LEN;

/// Prowl public API client.
#[derive(Debug)]
pub struct ProwlClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_keys: Vec<SecretString>,
    pub(crate) provider_key: Option<String>,
}

impl ProwlClient {
    /// Create a new client builder.
    pub fn builder() -> builder::ProwlClientBuilder {
        builder::ProwlClientBuilder::new()
    }

    /// Get the base URL of the Prowl API.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validate and submit a notification, returning Prowl's rate-limit info.
    ///
    /// # Errors
    ///
    /// - [`ClientError::NoApiKey`] when no key has been registered.
    /// - [`ClientError::InvalidRequest`] when the notification fails validation.
    /// - [`ClientError::ApiError`] / [`ClientError::HttpError`] on delivery failure.
    pub async fn send(&self, notification: &Notification) -> Result<ProwlSuccess> {
        if self.api_keys.is_empty() {
            return Err(ClientError::NoApiKey);
        }
        notification.validate()?;

        let api_key = self
            .api_keys
            .iter()
            .map(|k| k.expose_secret())
            .collect::<Vec<_>>()
            .join(",");

        let mut form = vec![("apikey", api_key.as_str())];
        if let Some(provider_key) = &self.provider_key {
            form.push(("providerkey", provider_key.as_str()));
        }
        form.extend(notification.form_fields());

        endpoints::add_notification(&self.http, &self.base_url, &form).await
    }
}

/// Check that `key` looks like a Prowl API key.
fn validate_api_key(key: &str) -> Result<()> {
    let len = key.chars().count();
    if len != API_KEY_LEN {
        return Err(ClientError::InvalidApiKey(format!(
            "key must be {API_KEY_LEN} characters long (got {len})"
        )));
    }
    if !key.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ClientError::InvalidApiKey(
            "key must contain only ASCII letters and digits".to_string(),
        ));
    }
    Ok(())
}

impl Notifier for ProwlClient {
    fn register_key(&mut self, api_key: &SecretString) -> Result<()> {
        let key = api_key.expose_secret().trim();
        validate_api_key(key)?;

        if self.api_keys.iter().any(|k| k.expose_secret() == key) {
            tracing::debug!("API key already registered");
            return Ok(());
        }
        self.api_keys.push(SecretString::new(key.into()));
        tracing::debug!(keys = self.api_keys.len(), "Registered API key");
        Ok(())
    }

    async fn push(&self, notification: &Notification) -> Result<()> {
        let success = self.send(notification).await?;
        tracing::info!(
            remaining = ?success.remaining,
            reset_date = ?success.reset_date,
            "Notification accepted"
        );
        Ok(())
    }
}
