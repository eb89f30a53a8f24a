//! Centralized constants for the prowlsend workspace.
//!
//! This module contains default values used across crates to avoid
//! magic value duplication.

// =============================================================================
// Configuration File
// =============================================================================

/// Relative path of the configuration file below each config directory.
pub const CONFIG_SUBPATH: &str = "prowl/prowl.toml";

/// Permission bits that must not be set on the configuration file
/// (group write, any access for others).
pub const PERMISSION_WARNING_MASK: u32 = 0o027;

/// Separator used in `XDG_CONFIG_DIRS`.
pub const XDG_DIRS_SEPARATOR: char = ':';

// =============================================================================
// Prowl API
// =============================================================================

/// Default Prowl public API base URL.
pub const DEFAULT_API_URL: &str = "https://api.prowlapp.com";

/// Path of the "add notification" endpoint, relative to the base URL.
pub const ADD_PATH: &str = "/publicapi/add";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Length of a Prowl API key.
pub const API_KEY_LEN: usize = 40;

/// Lowest priority accepted by Prowl ("very low").
pub const MIN_PRIORITY: i32 = -2;

/// Highest priority accepted by Prowl ("emergency").
pub const MAX_PRIORITY: i32 = 2;

/// Maximum application name length accepted by Prowl.
pub const MAX_APPLICATION_LEN: usize = 256;

/// Maximum event length accepted by Prowl.
pub const MAX_EVENT_LEN: usize = 1024;

/// Maximum description length accepted by Prowl.
pub const MAX_DESCRIPTION_LEN: usize = 10_000;

/// Maximum URL length accepted by Prowl.
pub const MAX_URL_LEN: usize = 512;

// =============================================================================
// CLI Defaults
// =============================================================================

/// Default notification priority.
pub const DEFAULT_PRIORITY: i32 = 1;

/// Default application name.
pub const DEFAULT_APPLICATION: &str = "Prowlsend";
