//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Prowl client.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use secrecy::SecretString;

#[allow(unused_imports)]
pub use prowl_client::testing::load_fixture;
#[allow(unused_imports)]
pub use prowl_client::{ClientError, Notification, Notifier, ProwlClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// A syntactically valid Prowl API key.
pub const TEST_KEY: &str = "0123456789abcdef0123456789abcdef01234567";

/// A second valid key for multi-key tests.
#[allow(dead_code)]
pub const OTHER_KEY: &str = "fedcba9876543210fedcba9876543210fedcba98";

pub fn secret(s: &str) -> SecretString {
    SecretString::new(s.to_string().into())
}

/// Build a client pointed at the mock server with `TEST_KEY` registered.
pub fn client_for(server: &MockServer) -> ProwlClient {
    let mut client = ProwlClient::builder()
        .base_url(server.uri())
        .build()
        .unwrap();
    client.register_key(&secret(TEST_KEY)).unwrap();
    client
}

/// A notification that passes validation.
pub fn sample_notification() -> Notification {
    Notification {
        application: "Prowlsend on testhost".to_string(),
        description: "Hello\nWorld".to_string(),
        event: "Backup".to_string(),
        priority: "1".to_string(),
        url: String::new(),
    }
}
