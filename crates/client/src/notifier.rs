//! The notification delivery capability.
//!
//! Callers depend on [`Notifier`] rather than on [`crate::ProwlClient`] so the
//! delivery backend can be swapped for a fake in tests.

use std::future::Future;

use secrecy::SecretString;

use crate::error::Result;
use crate::models::Notification;

/// A backend that authenticates with a provider key and delivers notifications.
pub trait Notifier {
    /// Authenticate or configure the backend with an API key.
    fn register_key(&mut self, api_key: &SecretString) -> Result<()>;

    /// Deliver a single notification.
    ///
    /// Either the notification was accepted or an error is returned; there is
    /// no partial delivery.
    fn push(&self, notification: &Notification) -> impl Future<Output = Result<()>> + Send;
}
