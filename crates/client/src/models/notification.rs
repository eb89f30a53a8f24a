//! Notification payload submitted to Prowl.
//!
//! # What this module handles:
//! - The notification record passed to a [`crate::Notifier`]
//! - Local validation against Prowl's field limits
//! - Conversion to the form fields of the `add` endpoint
//!
//! # Invariants
//! - `priority` is the decimal rendering of an integer in `-2..=2`
//! - Empty `url` is never sent

use prowl_config::constants::{
    MAX_APPLICATION_LEN, MAX_DESCRIPTION_LEN, MAX_EVENT_LEN, MAX_PRIORITY, MAX_URL_LEN,
    MIN_PRIORITY,
};

use crate::error::{ClientError, Result};

/// A push notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    /// Name of the application sending the notification.
    pub application: String,
    /// Body of the notification.
    pub description: String,
    /// Event label (subject line).
    pub event: String,
    /// Priority rendered as a decimal string.
    pub priority: String,
    /// Optional URL attached to the notification.
    pub url: String,
}

impl Notification {
    /// Check the notification against Prowl's documented limits.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let priority: i64 = self.priority.trim().parse().map_err(|_| {
            ClientError::InvalidRequest(format!(
                "priority must be an integer, got {:?}",
                self.priority
            ))
        })?;
        if !(i64::from(MIN_PRIORITY)..=i64::from(MAX_PRIORITY)).contains(&priority) {
            return Err(ClientError::InvalidRequest(format!(
                "priority must be between {} and {} (got {})",
                MIN_PRIORITY, MAX_PRIORITY, priority
            )));
        }

        if self.event.is_empty() && self.description.is_empty() {
            return Err(ClientError::InvalidRequest(
                "either event or description is required".to_string(),
            ));
        }

        check_len("application", &self.application, MAX_APPLICATION_LEN)?;
        check_len("event", &self.event, MAX_EVENT_LEN)?;
        check_len("description", &self.description, MAX_DESCRIPTION_LEN)?;
        check_len("url", &self.url, MAX_URL_LEN)?;
        Ok(())
    }

    /// Form fields for the `add` endpoint, excluding the API and provider keys.
    pub(crate) fn form_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("application", self.application.as_str()),
            ("event", self.event.as_str()),
            ("description", self.description.as_str()),
            ("priority", self.priority.trim()),
        ];
        if !self.url.is_empty() {
            fields.push(("url", self.url.as_str()));
        }
        fields
    }
}

fn check_len(field: &str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(ClientError::InvalidRequest(format!(
            "{field} must be at most {max} characters (got {len})"
        )));
    }
    Ok(())
}
