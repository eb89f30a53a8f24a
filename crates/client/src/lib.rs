//! Prowl push notification client.
//!
//! This crate provides the [`Notifier`] capability and [`ProwlClient`], its
//! implementation on top of the Prowl public API.

pub mod client;
mod endpoints;
pub mod error;
pub mod models;
mod notifier;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::ProwlClient;
pub use client::builder::ProwlClientBuilder;
pub use error::{ClientError, Result};
pub use models::{Notification, ProwlResponse, ProwlSuccess};
pub use notifier::Notifier;
