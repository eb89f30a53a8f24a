//! Shared test utilities for prowlsend integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Write configuration files with controlled permissions.
//!
//! Invariants / Assumptions:
//! - Commands never inherit `PROWL_API_URL`, `RUST_LOG` or `XDG_CONFIG_DIRS`
//!   from the host, so no test can reach the real Prowl API by accident.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// A syntactically valid Prowl API key.
pub const TEST_KEY: &str = "0123456789abcdef0123456789abcdef01234567";

/// Returns a hermetic `prowlsend` command for integration testing.
pub fn prowlsend_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("prowlsend");
    cmd.env_remove("PROWL_API_URL")
        .env_remove("RUST_LOG")
        .env_remove("XDG_CONFIG_DIRS");
    cmd
}

/// Returns a hermetic `prowlsend` command pointed at a mock Prowl server.
pub fn prowlsend_cmd_with_api_url(api_url: &str) -> Command {
    let mut cmd = prowlsend_cmd();
    cmd.env("PROWL_API_URL", api_url);
    cmd
}

/// Write `content` to `dir/prowl/prowl.toml` with mode 0600 and return its path.
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let config_dir = dir.join("prowl");
    std::fs::create_dir_all(&config_dir).unwrap();
    let path = config_dir.join("prowl.toml");
    std::fs::write(&path, content).unwrap();
    set_mode(&path, 0o600);
    path
}

/// A config file holding [`TEST_KEY`].
pub fn write_valid_config(dir: &Path) -> PathBuf {
    write_config(dir, &format!("ApiKey = \"{TEST_KEY}\"\n"))
}

#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode)).unwrap();
}

#[cfg(not(unix))]
pub fn set_mode(_path: &Path, _mode: u32) {}
