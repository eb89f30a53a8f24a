//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test candidate selection, override handling and error reporting.
//! - Test TOML decoding and API key validation.
//! - Test the permission warning on Unix.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Creates `dir/prowl/prowl.toml` with the given contents and returns its path.
pub fn create_config_file(dir: &Path, content: &str) -> PathBuf {
    let config_dir = dir.join("prowl");
    std::fs::create_dir_all(&config_dir).unwrap();
    let config_path = config_dir.join("prowl.toml");

    let mut file = std::fs::File::create(&config_path).unwrap();
    write!(file, "{}", content).unwrap();

    #[cfg(unix)]
    set_mode(&config_path, 0o600);

    config_path
}

#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    let mut permissions = std::fs::metadata(path).unwrap().permissions();
    permissions.set_mode(mode);
    std::fs::set_permissions(path, permissions).unwrap();
}
