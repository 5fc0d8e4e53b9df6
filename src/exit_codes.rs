//! Exit code constants for the djstart CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, project root already exists)
//! - 2: Configuration failure (unreadable, malformed, or invalid config)
//! - 3: Tool failure (external generator could not run or exited nonzero)
//! - 4: Patch failure (a substitution anchor was not found)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a pre-existing project root directory.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: unreadable, malformed, or invalid config values.
pub const CONFIG_FAILURE: i32 = 2;

/// Tool failure: the interpreter or django-admin could not be spawned,
/// or exited nonzero without --keep-going.
pub const TOOL_FAILURE: i32 = 3;

/// Patch failure: a patch step's anchor text was not found in the target file.
pub const PATCH_FAILURE: i32 = 4;
