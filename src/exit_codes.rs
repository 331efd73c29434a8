//! Exit code constants for the taskspark CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid request)
//! - 2: Configuration failure (unreadable, unparseable, or invalid config)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid state.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: config file unreadable, unparseable, or invalid.
pub const CONFIG_FAILURE: i32 = 2;
