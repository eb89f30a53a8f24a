//! Configuration loader for the Prowl configuration file.
//!
//! Responsibilities:
//! - Pick the configuration file among the platform candidates or an explicit override.
//! - Flag configuration files with overly permissive modes.
//! - Decode the TOML file into a validated `Config`.
//!
//! Does NOT handle:
//! - Computing candidate locations (see `locator.rs`).
//! - Printing errors for the user (the CLI owns reporting).
//!
//! Invariants / Assumptions:
//! - An explicit override path replaces the candidate search entirely.
//! - An overly permissive mode never fails the load.

mod builder;
mod error;

pub use builder::{ConfigLoader, LocatedConfig, read_config};
pub use error::ConfigError;

#[cfg(test)]
mod tests;
