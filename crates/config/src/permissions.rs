//! Permission checks for the configuration file.
//!
//! The file holds an API key, so it should not be readable by others or
//! writable by the group. A violation is reported, never fatal.

use crate::constants::PERMISSION_WARNING_MASK;

/// Returns true when `mode` grants any permission covered by the warning mask.
pub fn is_too_permissive(mode: u32) -> bool {
    mode & PERMISSION_WARNING_MASK != 0
}

/// Permission bits of `metadata`, or `None` where Unix modes do not apply.
#[cfg(unix)]
pub(crate) fn mode_of(metadata: &std::fs::Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(metadata.permissions().mode() & 0o777)
}

#[cfg(not(unix))]
pub(crate) fn mode_of(_metadata: &std::fs::Metadata) -> Option<u32> {
    None
}
