//! Standard exit codes for CLI operations
//!
//! These exit codes follow Unix conventions and sysexits.h where applicable.

/// Success - operation completed without errors
pub const SUCCESS: i32 = 0;

/// General error - unspecified failure
pub const ERROR: i32 = 1;

/// Not found - no API resource matched the requested key
pub const NOT_FOUND: i32 = 2;

/// Discovery error - the cluster could not be queried or answered with malformed data
pub const DISCOVERY_ERROR: i32 = 3;

/// Config error - kubeconfig missing, unreadable, or naming an unknown context
pub const CONFIG_ERROR: i32 = 4;

/// IO error - file not found, permission denied, etc.
pub const IO_ERROR: i32 = 5;

/// Usage error - invalid arguments or options (following sysexits.h convention)
pub const USAGE_ERROR: i32 = 64;
