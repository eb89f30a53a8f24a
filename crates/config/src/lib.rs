//! Configuration management for prowlsend.
//!
//! This crate locates the Prowl configuration file across platform-specific
//! search paths, checks its permissions, and decodes it into a [`Config`].

pub mod constants;
mod loader;
pub mod locator;
mod permissions;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, LocatedConfig, read_config};
pub use locator::{Platform, config_file_locations, locations_for};
pub use permissions::is_too_permissive;
pub use types::Config;
