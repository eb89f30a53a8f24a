//! Testing utilities for Prowl client tests and for code that depends on a [`Notifier`].
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use prowl_client::testing::{RecordingNotifier, load_fixture};
//!
//! let body = load_fixture("add/success.xml");
//!
//! let notifier = RecordingNotifier::new();
//! // ... drive code under test ...
//! assert_eq!(notifier.pushed().len(), 1);
//! ```

use std::path::Path;
use std::sync::{Arc, Mutex};

use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, Result};
use crate::models::Notification;
use crate::notifier::Notifier;

/// Load an XML fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "add/success.xml")
///
/// # Panics
/// - If the fixture file cannot be read
pub fn load_fixture(fixture_path: &str) -> String {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}

#[derive(Debug, Default)]
struct Recorded {
    keys: Vec<String>,
    pushed: Vec<Notification>,
}

/// A [`Notifier`] that records calls instead of talking to the network.
///
/// Clones share the same recording, so a test can keep a handle while the
/// code under test owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    recorded: Arc<Mutex<Recorded>>,
    fail_register: Option<String>,
    fail_push: Option<String>,
}

impl RecordingNotifier {
    /// A notifier that accepts every key and every push.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `register_key` fail with [`ClientError::InvalidApiKey`].
    pub fn failing_register(mut self, message: &str) -> Self {
        self.fail_register = Some(message.to_string());
        self
    }

    /// Make `push` fail with [`ClientError::ApiError`].
    pub fn failing_push(mut self, message: &str) -> Self {
        self.fail_push = Some(message.to_string());
        self
    }

    /// Keys registered so far, exposed for assertions.
    pub fn keys(&self) -> Vec<String> {
        self.lock().keys.clone()
    }

    /// Notifications pushed so far, including failed attempts.
    pub fn pushed(&self) -> Vec<Notification> {
        self.lock().pushed.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Recorded> {
        self.recorded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Notifier for RecordingNotifier {
    fn register_key(&mut self, api_key: &SecretString) -> Result<()> {
        if let Some(message) = &self.fail_register {
            return Err(ClientError::InvalidApiKey(message.clone()));
        }
        self.lock().keys.push(api_key.expose_secret().to_string());
        Ok(())
    }

    async fn push(&self, notification: &Notification) -> Result<()> {
        self.lock().pushed.push(notification.clone());
        match &self.fail_push {
            Some(message) => Err(ClientError::ApiError {
                status: 500,
                url: "recording://push".to_string(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}
