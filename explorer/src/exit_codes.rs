//! Stable exit codes for the explorer binary.

/// Session ended normally (menu choice 9 or end of input).
pub const OK: i32 = 0;
/// Startup failed: invalid config, unusable start directory, or terminal I/O error.
pub const INVALID: i32 = 1;
